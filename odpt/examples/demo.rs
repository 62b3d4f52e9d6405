use odpt::api::ids::{CalendarId, OperatorId, RailwayId, StationId};
use odpt::Odpt;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    println!("ODPT Rust Client Demo");
    println!("=====================\n");

    // Reads ODPT_CONSUMER_KEY and friends
    let odpt = Odpt::new()?;

    // 1. Stations of a line, in order
    let asakusa = RailwayId::new("odpt.Railway:Toei.Asakusa");
    println!("Stations on {}:", asakusa);
    let stations = odpt.stations_on_railway(&asakusa).await?;
    for station in stations.iter().take(5) {
        println!(
            "  {:5} {}",
            station.station_code.as_deref().unwrap_or(""),
            station.display_title()
        );
    }
    if stations.len() > 5 {
        println!("  ... {} stations in total", stations.len());
    }
    println!();

    // 2. Service status
    println!("Tokyo Metro service status:");
    let status = odpt
        .train_status(&[OperatorId::new("odpt.Operator:TokyoMetro")])
        .await?;
    for entry in &status {
        let line = entry.railway.as_ref().map(|r| r.as_str()).unwrap_or("?");
        let state = if entry.is_disrupted() { "disrupted" } else { "normal" };
        println!("  {}: {}", line, state);
    }
    println!();

    // 3. Stations around Tokyo Station
    println!("Stations within 500 m of Tokyo Station:");
    for nearby in odpt.nearby_stations(139.7671, 35.6812, 500).await? {
        println!(
            "  {:>4.0} m  {}",
            nearby.distance_m,
            nearby.station.display_title()
        );
    }
    println!();

    // 4. Next departures
    let ueno = StationId::new("odpt.Station:TokyoMetro.Ginza.Ueno");
    let weekday = CalendarId::new("odpt.Calendar:Weekday");
    println!("First weekday departures from {}:", ueno);
    for departure in odpt.departures(&ueno, Some(&weekday)).await?.iter().take(5) {
        println!("  {}", departure.time);
    }
    println!();

    // 5. Line shape
    let (line, region) = odpt.railway_with_region(&asakusa).await?;
    match region {
        Some(geometry) => println!("{} shape: {}", line.display_title(), geometry.type_name()),
        None => println!("{} has no published shape", line.display_title()),
    }

    println!("\nTry the CLI with:");
    println!("  odpt status odpt.Operator:JR-East");
    println!("  odpt timetable odpt.Station:TokyoMetro.Ginza.Ueno -c odpt.Calendar:Weekday");

    Ok(())
}
