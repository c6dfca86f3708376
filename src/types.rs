use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Raw airport attributes as returned from an upstream source, before
/// projection. Both source strategies normalize into this shape; columns
/// the upstream carries but we never project are ignored on decode.
///
/// Coordinates are carried as opaque strings. The upstream dataset leaves
/// fields blank rather than omitting them, so blanks decode to `None` for
/// CSV input and to `Some("")` for JSON input; the projection treats the
/// two the same for carrier codes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAirport {
    #[serde(default)]
    pub ident: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub airport_type: Option<String>,
    #[serde(default)]
    pub latitude_deg: Option<String>,
    #[serde(default)]
    pub longitude_deg: Option<String>,
    #[serde(default)]
    pub continent: Option<String>,
    #[serde(default)]
    pub iata_code: Option<String>,
    #[serde(default)]
    pub gps_code: Option<String>,
}

/// Projected record written to the output dataset. Declaration order is
/// the key order of the serialized document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirportRecord {
    pub ident: String,
    pub name: String,
    #[serde(rename = "type")]
    pub airport_type: String,
    pub latitude: String,
    pub longitude: String,
    pub continent: String,
    pub iata: String,
    pub icao: String,
}

/// Core trait that all airport data sources must implement
#[async_trait::async_trait]
pub trait AirportSource: Send + Sync {
    /// Unique identifier for this source
    fn source_name(&self) -> &'static str;

    /// Fetch all candidate airports from this data source
    async fn fetch_airports(&self) -> Result<Vec<RawAirport>>;
}
