use odpt_api::ids::RailwayId;
use odpt_api::query::StationQuery;
use odpt_api::{Configuration, OdptClient};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let key = std::env::var("ODPT_CONSUMER_KEY")?;
    let client = OdptClient::new(Arc::new(Configuration::data_center(key)));

    println!("Fetching Toei Asakusa Line stations...");

    let query = StationQuery {
        railway: vec![RailwayId::new("odpt.Railway:Toei.Asakusa")],
        ..Default::default()
    };

    match client.stations(&query).await {
        Ok(stations) => {
            println!("Success! Count: {}", stations.len());

            if let Some(first) = stations.first() {
                println!("First station: {}", first.display_title());
                println!("Code: {:?}", first.station_code);
            }
        }
        Err(e) => {
            println!("Error: {}", e);
        }
    }

    Ok(())
}
