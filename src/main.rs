use clap::Parser;
use tracing::error;

use airports_scraper::apis::ourairports_api::OurAirportsApiSource;
use airports_scraper::apis::ourairports_csv::OurAirportsCsvSource;
use airports_scraper::constants;
use airports_scraper::logging;
use airports_scraper::pipeline::Pipeline;
use airports_scraper::types::AirportSource;

#[derive(Parser)]
#[command(name = "airports_scraper")]
#[command(about = "Extracts a region's medium and large airports to a JSON dataset")]
#[command(version = "0.1.0")]
struct Cli {}

fn create_source(source_name: &str) -> Option<Box<dyn AirportSource>> {
    match source_name {
        constants::OURAIRPORTS_CSV_SOURCE => Some(Box::new(OurAirportsCsvSource::new())),
        constants::OURAIRPORTS_API_SOURCE => Some(Box::new(OurAirportsApiSource::new())),
        _ => None,
    }
}

#[tokio::main]
async fn main() {
    // Initialize logging
    logging::init_logging();

    let _cli = Cli::parse();

    // The source, region, allow-set and output path are compiled in; the
    // binary takes no arguments.
    if let Some(source) = create_source(constants::DEFAULT_SOURCE) {
        match Pipeline::run_for_source(
            source,
            constants::TARGET_REGION,
            constants::ALLOWED_AIRPORT_TYPES,
            constants::OUTPUT_DIR,
            constants::OUTPUT_FILE,
        )
        .await
        {
            Ok(result) => {
                println!("\n📊 Pipeline results for {}:", result.source_name);
                println!("   Total records: {}", result.total_records);
                println!("   Matched: {}", result.matched_records);
                println!("   Output file: {}", result.output_file);
                println!("\n✅ Data written to {}", result.output_file);
            }
            Err(e) => {
                error!("Pipeline failed: {}", e);
                println!("❌ Pipeline failed: {}", e);
            }
        }
    } else {
        println!(
            "⚠️  Unknown source: {} (supported: {})",
            constants::DEFAULT_SOURCE,
            constants::get_supported_sources().join(", ")
        );
    }
}
