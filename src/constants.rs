/// Source name constants to ensure consistency across the codebase

// Source names (used by the source registry and logging)
pub const OURAIRPORTS_CSV_SOURCE: &str = "ourairports_csv";
pub const OURAIRPORTS_API_SOURCE: &str = "ourairports_api";

/// Bulk CSV mirror of the OurAirports dataset
pub const OURAIRPORTS_CSV_URL: &str =
    "https://davidmegginson.github.io/ourairports-data/airports.csv";

/// JSON mirror of the dataset, queried by the typed per-category client
pub const OURAIRPORTS_JSON_URL: &str =
    "https://davidmegginson.github.io/ourairports-data/airports.json";

// Pipeline configuration is compiled in; the binary takes no arguments.
pub const DEFAULT_SOURCE: &str = OURAIRPORTS_CSV_SOURCE;
pub const TARGET_REGION: &str = "NA";
pub const ALLOWED_AIRPORT_TYPES: &[&str] = &["medium_airport", "large_airport"];
pub const OUTPUT_DIR: &str = "datasets";
pub const OUTPUT_FILE: &str = "airports.json";

/// Get all supported source names
pub fn get_supported_sources() -> Vec<&'static str> {
    vec![OURAIRPORTS_CSV_SOURCE, OURAIRPORTS_API_SOURCE]
}
