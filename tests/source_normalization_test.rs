use airports_scraper::apis::ourairports_api::ApiAirport;
use airports_scraper::apis::ourairports_csv::parse_airports_csv;
use airports_scraper::types::RawAirport;
use anyhow::Result as TestResult;
use serde_json::json;

// The two fetch strategies must normalize into the same raw field set so
// the downstream stages never know which one ran.
#[test]
fn csv_and_api_strategies_normalize_identically() -> TestResult<()> {
    let csv_text = "\
id,ident,type,name,latitude_deg,longitude_deg,elevation_ft,continent,iata_code,gps_code
3422,KSEA,large_airport,Seattle-Tacoma International Airport,47.449,-122.309,433,NA,SEA,KSEA
";
    let from_csv = parse_airports_csv(csv_text)?;

    let api_airport: ApiAirport = serde_json::from_value(json!({
        "ident": "KSEA",
        "name": "Seattle-Tacoma International Airport",
        "type": "large_airport",
        "latitude": "47.449",
        "longitude": "-122.309",
        "continent": "NA",
        "iata": "SEA",
        "icao": "KSEA"
    }))?;
    let from_api = RawAirport::from(api_airport);

    assert_eq!(from_csv, vec![from_api]);
    Ok(())
}

#[test]
fn unknown_api_attributes_are_ignored() -> TestResult<()> {
    let api_airport: ApiAirport = serde_json::from_value(json!({
        "ident": "CYVR",
        "name": "Vancouver International Airport",
        "type": "large_airport",
        "latitude": "49.194",
        "longitude": "-123.184",
        "continent": "NA",
        "iata": "YVR",
        "icao": "CYVR",
        "elevation": "14",
        "municipality": "Vancouver",
        "scheduled_service": "yes"
    }))?;

    let raw = RawAirport::from(api_airport);
    assert_eq!(raw.ident.as_deref(), Some("CYVR"));
    assert_eq!(raw.gps_code.as_deref(), Some("CYVR"));
    Ok(())
}
