use std::sync::OnceLock;

use anyhow::{Context, Result, bail};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, fmt};

use odpt::api::ids::{CalendarId, OdptId, OperatorId, RailwayId, StationId};
use odpt::api::models::{Railway, Station, TrainInformation};
use odpt::geojson::Geometry;
use odpt::{ColorHelper, ColorMode, Departure, NearbyStation, Odpt, OdptConfig};

/// Set once at startup from `--color`
static COLOR_HELPER: OnceLock<ColorHelper> = OnceLock::new();

fn colors() -> &'static ColorHelper {
    COLOR_HELPER.get_or_init(|| ColorHelper::new(ColorMode::Auto))
}

fn cli() -> Command {
    Command::new("odpt")
        .about("Query the Open Data Platform for Transportation (Japan)")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("consumer-key")
                .long("consumer-key")
                .value_name("KEY")
                .global(true)
                .help("ODPT consumer key (default: $ODPT_CONSUMER_KEY)"),
        )
        .arg(
            Arg::new("endpoint")
                .long("endpoint")
                .value_name("NAME")
                .global(true)
                .value_parser(["datacenter", "challenge", "v2"])
                .help("ODPT deployment to query (default: $ODPT_ENDPOINT or datacenter)"),
        )
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .value_name("URL")
                .global(true)
                .help("Override the endpoint's base URL"),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .value_name("WHEN")
                .global(true)
                .value_parser(["auto", "always", "never"])
                .default_value("auto")
                .help("Control color output"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print the decoded records as JSON"),
        )
        .subcommand(
            Command::new("stations")
                .about("List the stations of a railway in line order")
                .arg(
                    Arg::new("railway")
                        .required(true)
                        .value_name("RAILWAY")
                        .value_parser(|s: &str| s.parse::<RailwayId>())
                        .help("Railway identifier, e.g. odpt.Railway:Toei.Asakusa"),
                ),
        )
        .subcommand(
            Command::new("railways").about("List railways").arg(
                Arg::new("operator")
                    .long("operator")
                    .short('o')
                    .value_name("OPERATOR")
                    .value_parser(|s: &str| s.parse::<OperatorId>())
                    .help("Only railways of this operator, e.g. odpt.Operator:TokyoMetro"),
            ),
        )
        .subcommand(
            Command::new("status")
                .about("Show the current operating status of train lines")
                .arg(
                    Arg::new("operators")
                        .value_name("OPERATOR")
                        .num_args(0..)
                        .value_parser(|s: &str| s.parse::<OperatorId>())
                        .help("Operators to include (default: all)"),
                ),
        )
        .subcommand(
            Command::new("nearby")
                .about("Find stations around a point")
                .arg(
                    Arg::new("lon")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(f64))
                        .help("Longitude in degrees"),
                )
                .arg(
                    Arg::new("lat")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(f64))
                        .help("Latitude in degrees"),
                )
                .arg(
                    Arg::new("radius")
                        .long("radius")
                        .short('r')
                        .value_name("METRES")
                        .value_parser(value_parser!(u32).range(0..=4000))
                        .default_value("500")
                        .help("Search radius in metres"),
                ),
        )
        .subcommand(
            Command::new("region")
                .about("Fetch and summarise the GeoJSON shape of a railway")
                .arg(
                    Arg::new("target")
                        .required(true)
                        .value_name("RAILWAY|URL")
                        .help("Railway identifier, or a GeoJSON URL to fetch directly"),
                ),
        )
        .subcommand(
            Command::new("timetable")
                .about("Show departures from a station")
                .arg(
                    Arg::new("station")
                        .required(true)
                        .value_name("STATION")
                        .value_parser(|s: &str| s.parse::<StationId>())
                        .help("Station identifier, e.g. odpt.Station:TokyoMetro.Ginza.Ueno"),
                )
                .arg(
                    Arg::new("calendar")
                        .long("calendar")
                        .short('c')
                        .value_name("CALENDAR")
                        .value_parser(|s: &str| s.parse::<CalendarId>())
                        .help("e.g. odpt.Calendar:Weekday (default: all calendars)"),
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .short('n')
                        .value_parser(value_parser!(usize))
                        .default_value("20")
                        .help("Maximum number of departures to print"),
                ),
        )
        .after_help(
            "EXAMPLES:\n\
             \x20 odpt stations odpt.Railway:Toei.Asakusa\n\
             \x20 odpt railways --operator odpt.Operator:TokyoMetro\n\
             \x20 odpt status odpt.Operator:JR-East\n\
             \x20 odpt nearby 139.7671 35.6812 --radius 800\n\
             \x20 odpt region odpt.Railway:TokyoMetro.Ginza --json\n\
             \x20 odpt timetable odpt.Station:TokyoMetro.Ginza.Ueno -c odpt.Calendar:Weekday",
        )
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();
    let config = build_config(&matches)?;
    let _ = COLOR_HELPER.set(ColorHelper::new(config.color_mode));

    let odpt = Odpt::with_config(config)?;
    let json = matches.get_flag("json");

    match matches.subcommand() {
        Some(("stations", args)) => {
            let railway: &RailwayId = arg(args, "railway")?;
            let stations = odpt.stations_on_railway(railway).await?;
            if json {
                print_json(&stations)?;
            } else {
                print_stations(&stations);
            }
        }
        Some(("railways", args)) => {
            let railways = odpt.railways(args.get_one::<OperatorId>("operator")).await?;
            if json {
                print_json(&railways)?;
            } else {
                print_railways(&railways);
            }
        }
        Some(("status", args)) => {
            let operators: Vec<OperatorId> = args
                .get_many::<OperatorId>("operators")
                .unwrap_or_default()
                .cloned()
                .collect();
            let information = odpt.train_status(&operators).await?;
            if json {
                print_json(&information)?;
            } else {
                print_status(&information);
            }
        }
        Some(("nearby", args)) => {
            let lon: f64 = *arg(args, "lon")?;
            let lat: f64 = *arg(args, "lat")?;
            let radius: u32 = *arg(args, "radius")?;
            let nearby = odpt.nearby_stations(lon, lat, radius).await?;
            if json {
                print_json(&nearby)?;
            } else {
                print_nearby(&nearby, radius);
            }
        }
        Some(("region", args)) => {
            let target: &String = arg(args, "target")?;
            let geometry = if target.starts_with("http://") || target.starts_with("https://") {
                odpt.region(target).await?
            } else {
                let railway: RailwayId = target.parse()?;
                match odpt.railway_with_region(&railway).await? {
                    (_, Some(geometry)) => geometry,
                    (line, None) => bail!("{} has no ug:region shape", line.display_title()),
                }
            };
            if json {
                print_json(&geometry)?;
            } else {
                println!("{}", describe_geometry(&geometry));
            }
        }
        Some(("timetable", args)) => {
            let station: &StationId = arg(args, "station")?;
            let limit: usize = *arg(args, "limit")?;
            let departures = odpt
                .departures(station, args.get_one::<CalendarId>("calendar"))
                .await?;
            if json {
                print_json(&departures)?;
            } else {
                print_departures(&departures, limit);
            }
        }
        Some((name, _)) => bail!("unknown command: {}", name),
        None => bail!("no command given, see --help"),
    }

    Ok(())
}

/// Environment first, then command line flags on top
fn build_config(matches: &ArgMatches) -> Result<OdptConfig> {
    let mut config = OdptConfig::from_env()?;

    if let Some(key) = matches.get_one::<String>("consumer-key") {
        config = config.with_consumer_key(key);
    }
    if let Some(endpoint) = matches.get_one::<String>("endpoint") {
        config = config.with_endpoint(endpoint.parse()?);
    }
    if let Some(base_url) = matches.get_one::<String>("base-url") {
        config = config.with_base_url(base_url);
    }
    if let Some(color) = matches.get_one::<String>("color") {
        match color.parse::<ColorMode>() {
            Ok(mode) => config = config.with_color_mode(mode),
            Err(e) => tracing::warn!("{}, using 'auto'", e),
        }
    }
    Ok(config)
}

fn arg<'a, T: Clone + Send + Sync + 'static>(args: &'a ArgMatches, name: &str) -> Result<&'a T> {
    args.get_one::<T>(name)
        .with_context(|| format!("missing argument <{}>", name))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_stations(stations: &[Station]) {
    let c = colors();
    if stations.is_empty() {
        println!("{}", c.yellow("No stations found."));
        return;
    }
    for (i, station) in stations.iter().enumerate() {
        println!(
            "{} {:6} {}  {}",
            c.bold(&format!("{:3}.", i + 1)),
            station.station_code.as_deref().unwrap_or(""),
            station.display_title(),
            c.dimmed(station.same_as.as_str())
        );
    }
}

fn print_railways(railways: &[Railway]) {
    let c = colors();
    if railways.is_empty() {
        println!("{}", c.yellow("No railways found."));
        return;
    }
    for railway in railways {
        let badge = format!("{:>2}", railway.line_code.as_deref().unwrap_or("-"));
        println!(
            "{} {} {}  {}",
            c.line(&badge, railway.color.as_deref()),
            railway.display_title(),
            c.dimmed(&format!("({} stations)", railway.station_order.len())),
            c.dimmed(railway.same_as.as_str())
        );
    }
}

fn print_status(information: &[TrainInformation]) {
    let c = colors();
    if information.is_empty() {
        println!("{}", c.yellow("No train information published."));
        return;
    }
    for entry in information {
        let line = entry
            .railway
            .as_ref()
            .map(|railway| railway.value().to_string())
            .unwrap_or_else(|| entry.operator.value().to_string());
        let status = if entry.is_disrupted() {
            let label = entry
                .status
                .as_ref()
                .and_then(|status| status.best())
                .unwrap_or("Disrupted");
            c.red(label)
        } else {
            c.green("Normal service")
        };
        println!("{}  {}", c.bold(&line), status);
        if let Some(text) = entry.text.as_ref().and_then(|text| text.best()) {
            println!("    {}", c.dimmed(text));
        }
    }
}

fn print_nearby(nearby: &[NearbyStation], radius: u32) {
    let c = colors();
    if nearby.is_empty() {
        println!("{}", c.yellow(&format!("No stations within {} m.", radius)));
        return;
    }
    for entry in nearby {
        let railway = entry
            .station
            .railway
            .as_ref()
            .map(|railway| railway.value().to_string())
            .unwrap_or_default();
        println!(
            "{} {}  {}",
            c.cyan(&format!("{:>6.0} m", entry.distance_m)),
            entry.station.display_title(),
            c.dimmed(&railway)
        );
    }
}

fn print_departures(departures: &[Departure], limit: usize) {
    let c = colors();
    if departures.is_empty() {
        println!("{}", c.yellow("No departures found."));
        return;
    }
    for departure in departures.iter().take(limit) {
        let destinations = departure
            .destinations
            .iter()
            .filter_map(|station| station.segments().last())
            .collect::<Vec<_>>()
            .join(", ");
        let train_type = departure
            .train_type
            .as_ref()
            .and_then(|train_type| train_type.segments().last())
            .unwrap_or("");
        let last = if departure.is_last { c.red(" last") } else { c.dimmed("") };
        println!(
            "{}  {:10} {}{}",
            c.bold(&departure.time),
            train_type,
            destinations,
            last
        );
    }
    if departures.len() > limit {
        println!("{}", c.dimmed(&format!("... and {} more", departures.len() - limit)));
    }
}

fn describe_geometry(geometry: &Geometry) -> String {
    match geometry {
        Geometry::Point(point) => format!("Point at ({:.6}, {:.6})", point.lon(), point.lat()),
        Geometry::MultiPoint(points) => format!("MultiPoint with {} points", points.coordinates.len()),
        Geometry::LineString(line) => {
            format!("LineString with {} positions", line.coordinates.len())
        }
        Geometry::MultiLineString(lines) => format!(
            "MultiLineString with {} lines ({} positions)",
            lines.coordinates.len(),
            lines.coordinates.iter().map(Vec::len).sum::<usize>()
        ),
        Geometry::Polygon(polygon) => format!(
            "Polygon with {} exterior positions and {} holes",
            polygon.exterior().map_or(0, <[_]>::len),
            polygon.holes().len()
        ),
        Geometry::MultiPolygon(polygons) => {
            format!("MultiPolygon with {} polygons", polygons.coordinates.len())
        }
        Geometry::GeometryCollection(collection) => {
            let members: Vec<String> = collection
                .geometries()
                .iter()
                .map(describe_geometry)
                .collect();
            format!("GeometryCollection [{}]", members.join("; "))
        }
        Geometry::Feature(feature) => match &feature.geometry {
            Some(inner) => format!("Feature: {}", describe_geometry(inner)),
            None => "Feature without geometry".to_string(),
        },
        Geometry::FeatureCollection(collection) => {
            format!("FeatureCollection with {} features", collection.features().len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use odpt::geojson::{GeometryCollection, LineString, Point, Position};

    #[test]
    fn test_cli_definition() {
        cli().debug_assert();
    }

    #[test]
    fn test_parses_typed_ids() {
        let matches = cli()
            .try_get_matches_from(["odpt", "stations", "odpt.Railway:Toei.Asakusa"])
            .unwrap();
        let (name, args) = matches.subcommand().unwrap();
        assert_eq!(name, "stations");
        assert_eq!(
            args.get_one::<RailwayId>("railway"),
            Some(&RailwayId::new("odpt.Railway:Toei.Asakusa"))
        );

        let wrong_kind = cli().try_get_matches_from(["odpt", "stations", "odpt.Station:Toei.Asakusa.Oshiage"]);
        assert!(wrong_kind.is_err());
    }

    #[test]
    fn test_radius_is_bounded() {
        let result = cli().try_get_matches_from(["odpt", "nearby", "139.77", "35.68", "-r", "5000"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_describe_geometry() {
        let collection = Geometry::GeometryCollection(GeometryCollection::new(vec![
            Geometry::Point(Point::new(139.7671, 35.6812).unwrap()),
            Geometry::LineString(LineString {
                coordinates: vec![
                    Position::new(139.0, 35.0).unwrap(),
                    Position::new(139.1, 35.1).unwrap(),
                ],
            }),
        ]));
        assert_eq!(
            describe_geometry(&collection),
            "GeometryCollection [Point at (139.767100, 35.681200); LineString with 2 positions]"
        );
    }
}
