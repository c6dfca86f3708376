use crate::constants::{ALLOWED_AIRPORT_TYPES, OURAIRPORTS_API_SOURCE, OURAIRPORTS_JSON_URL};
use crate::error::{Result, ScraperError};
use crate::types::{AirportSource, RawAirport};
use serde::Deserialize;
use tracing::{debug, info, instrument};

/// One airport object as the JSON mirror exposes it. Attribute names
/// follow that surface, not the CSV column names.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiAirport {
    #[serde(default)]
    pub ident: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub airport_type: Option<String>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
    #[serde(default)]
    pub continent: Option<String>,
    #[serde(default)]
    pub iata: Option<String>,
    #[serde(default)]
    pub icao: Option<String>,
}

impl From<ApiAirport> for RawAirport {
    /// Coerce a typed API object into the raw field mapping shared with
    /// the CSV strategy. The dedicated `icao` attribute fills the
    /// `gps_code` slot, which is where the projection reads the ICAO code.
    fn from(airport: ApiAirport) -> Self {
        RawAirport {
            ident: airport.ident,
            name: airport.name,
            airport_type: airport.airport_type,
            latitude_deg: airport.latitude,
            longitude_deg: airport.longitude,
            continent: airport.continent,
            iata_code: airport.iata,
            gps_code: airport.icao,
        }
    }
}

/// Typed client over the JSON mirror, answering per-category queries.
pub struct OurAirportsClient {
    client: reqwest::Client,
    url: String,
}

impl Default for OurAirportsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OurAirportsClient {
    pub fn new() -> Self {
        Self::with_url(OURAIRPORTS_JSON_URL)
    }

    pub fn with_url(url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.to_string(),
        }
    }

    /// Fetch all airports of one classification, e.g. "medium_airport".
    #[instrument(skip(self))]
    pub async fn airports_by_type(&self, category: &str) -> Result<Vec<ApiAirport>> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::SourceUnavailable(format!(
                "{} returned status {}",
                self.url,
                status.as_u16()
            )));
        }

        let airports: Vec<ApiAirport> = response
            .json()
            .await
            .map_err(|e| ScraperError::Parse(format!("airport list decode failed: {e}")))?;

        let matching: Vec<ApiAirport> = airports
            .into_iter()
            .filter(|airport| airport.airport_type.as_deref() == Some(category))
            .collect();
        debug!("{} airports in category {}", matching.len(), category);
        Ok(matching)
    }
}

/// Per-category strategy: one typed client call for each allowed
/// classification, concatenated in allow-set order.
pub struct OurAirportsApiSource {
    client: OurAirportsClient,
}

impl Default for OurAirportsApiSource {
    fn default() -> Self {
        Self::new()
    }
}

impl OurAirportsApiSource {
    pub fn new() -> Self {
        Self {
            client: OurAirportsClient::new(),
        }
    }

    pub fn with_client(client: OurAirportsClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl AirportSource for OurAirportsApiSource {
    fn source_name(&self) -> &'static str {
        OURAIRPORTS_API_SOURCE
    }

    #[instrument(skip(self))]
    async fn fetch_airports(&self) -> Result<Vec<RawAirport>> {
        let mut airports = Vec::new();
        for category in ALLOWED_AIRPORT_TYPES {
            let batch = self.client.airports_by_type(category).await?;
            debug!("Fetched {} {} records", batch.len(), category);
            airports.extend(batch.into_iter().map(RawAirport::from));
        }
        info!(
            "Successfully fetched {} airports from the typed client",
            airports.len()
        );
        Ok(airports)
    }
}
