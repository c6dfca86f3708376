use crate::error::{Result, ScraperError};
use crate::types::{AirportRecord, AirportSource, RawAirport};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Result of a complete pipeline run
#[derive(Debug, Serialize)]
pub struct PipelineResult {
    pub source_name: String,
    pub total_records: usize,
    pub matched_records: usize,
    pub output_file: String,
}

/// Keep only records whose classification is in the allow-set, preserving
/// input order. Records with no classification are dropped.
pub fn filter_by_type(airports: Vec<RawAirport>, allowed: &[&str]) -> Vec<RawAirport> {
    airports
        .into_iter()
        .filter(|airport| {
            airport
                .airport_type
                .as_deref()
                .map_or(false, |t| allowed.contains(&t))
        })
        .collect()
}

/// Keep only records whose continent equals the region code, preserving
/// input order. An absent continent never matches.
pub fn filter_by_region(airports: Vec<RawAirport>, region: &str) -> Vec<RawAirport> {
    airports
        .into_iter()
        .filter(|airport| airport.continent.as_deref() == Some(region))
        .collect()
}

/// Project one raw record into the output schema.
///
/// Identification, classification and position fields must be present.
/// Carrier codes are frequently blank upstream and fall back to the empty
/// string.
pub fn project(airport: RawAirport) -> Result<AirportRecord> {
    fn required(value: Option<String>, field: &str) -> Result<String> {
        value.ok_or_else(|| ScraperError::MissingField(field.to_string()))
    }

    Ok(AirportRecord {
        ident: required(airport.ident, "ident")?,
        name: required(airport.name, "name")?,
        airport_type: required(airport.airport_type, "type")?,
        latitude: required(airport.latitude_deg, "latitude_deg")?,
        longitude: required(airport.longitude_deg, "longitude_deg")?,
        continent: required(airport.continent, "continent")?,
        iata: airport.iata_code.unwrap_or_default(),
        icao: airport.gps_code.unwrap_or_default(),
    })
}

pub struct Pipeline;

impl Pipeline {
    /// Run the complete pipeline for a given source: fetch, filter by
    /// classification and region, project, persist.
    #[instrument(skip(source), fields(source_name = %source.source_name()))]
    pub async fn run_for_source(
        source: Box<dyn AirportSource>,
        region: &str,
        allowed_types: &[&str],
        output_dir: &str,
        output_file: &str,
    ) -> Result<PipelineResult> {
        let source_name = source.source_name().to_string();
        info!("🚀 Starting pipeline for {}", source_name);
        println!("🚀 Starting pipeline for {}", source_name);

        // Step 1: Fetch raw records
        info!("📡 Fetching airports from {}...", source_name);
        println!("📡 Fetching airports from {}...", source_name);
        let raw_airports = source.fetch_airports().await?;
        let total_records = raw_airports.len();
        info!("✅ Fetched {} raw records", total_records);
        println!("✅ Fetched {} raw records", total_records);

        // Step 2: Restrict to the classification allow-set, then the region
        let by_type = filter_by_type(raw_airports, allowed_types);
        debug!("{} records after classification filter", by_type.len());
        let by_region = filter_by_region(by_type, region);
        info!("🔧 {} records match region {}", by_region.len(), region);
        println!("🔧 {} records match region {}", by_region.len(), region);

        // Step 3: Project to the output schema. Any missing field aborts
        // the run before the sink is touched.
        let mut records = Vec::with_capacity(by_region.len());
        for airport in by_region {
            records.push(project(airport)?);
        }
        let matched_records = records.len();

        // Step 4: Persist to JSON
        let output_path = Self::persist_to_json(&records, output_dir, output_file)?;
        info!("💾 Saved {} airports to {}", matched_records, output_path);
        println!("💾 Saved {} airports to {}", matched_records, output_path);

        Ok(PipelineResult {
            source_name,
            total_records,
            matched_records,
            output_file: output_path,
        })
    }

    /// Persist projected records to a single JSON document, overwriting
    /// any previous run's output.
    fn persist_to_json(
        records: &[AirportRecord],
        output_dir: &str,
        filename: &str,
    ) -> Result<String> {
        // Ensure output directory exists
        fs::create_dir_all(output_dir)?;

        let filepath = Path::new(output_dir).join(filename);

        // Serialize and write
        let json_content = serde_json::to_string_pretty(records)?;
        fs::write(&filepath, json_content)?;

        Ok(filepath.to_string_lossy().to_string())
    }
}
