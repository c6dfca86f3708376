use crate::constants::{OURAIRPORTS_CSV_SOURCE, OURAIRPORTS_CSV_URL};
use crate::error::{Result, ScraperError};
use crate::types::{AirportSource, RawAirport};
use tracing::{debug, info, instrument};

/// Bulk-fetch strategy: one GET of the OurAirports CSV mirror, parsed
/// row-by-row with the header row defining field names.
pub struct OurAirportsCsvSource {
    client: reqwest::Client,
    url: String,
}

impl Default for OurAirportsCsvSource {
    fn default() -> Self {
        Self::new()
    }
}

impl OurAirportsCsvSource {
    pub fn new() -> Self {
        Self::with_url(OURAIRPORTS_CSV_URL)
    }

    pub fn with_url(url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.to_string(),
        }
    }
}

/// Parse CSV text into raw airport records. Columns we never project are
/// ignored; a row that fails to decode fails the whole run.
pub fn parse_airports_csv(csv_text: &str) -> Result<Vec<RawAirport>> {
    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let mut airports = Vec::new();
    for row in reader.deserialize::<RawAirport>() {
        airports.push(row?);
    }
    Ok(airports)
}

#[async_trait::async_trait]
impl AirportSource for OurAirportsCsvSource {
    fn source_name(&self) -> &'static str {
        OURAIRPORTS_CSV_SOURCE
    }

    #[instrument(skip(self))]
    async fn fetch_airports(&self) -> Result<Vec<RawAirport>> {
        debug!("Fetching airport CSV from {}", self.url);
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::SourceUnavailable(format!(
                "{} returned status {}",
                self.url,
                status.as_u16()
            )));
        }

        let csv_text = response.text().await?;
        let airports = parse_airports_csv(&csv_text)?;
        info!(
            "Successfully fetched {} airports from the CSV mirror",
            airports.len()
        );
        Ok(airports)
    }
}
