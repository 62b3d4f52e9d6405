use std::collections::HashMap;

use odpt_api::OdptClient;
use odpt_api::geojson::Geometry;
use odpt_api::ids::{CalendarId, OperatorId, RailDirectionId, RailwayId, StationId, TrainTypeId};
use odpt_api::models::{Locatable, Railway, Station, StationTimetable, TrainInformation};
use odpt_api::query::{
    PlacesQuery, RailwayQuery, StationQuery, StationTimetableQuery, TrainInformationQuery,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::OdptConfig;
use crate::error::{Error, Result};

/// Mean Earth radius in metres
const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Clock times before this hour belong to the previous service day
const SERVICE_DAY_START_HOUR: u32 = 3;

/// Timetables count past midnight up to `47:59`
const MAX_TIMETABLE_HOUR: u32 = 47;

/// A station found by a radius search
#[derive(Debug, Clone, Serialize)]
pub struct NearbyStation {
    pub station: Station,
    /// Great-circle distance from the search centre, in metres
    pub distance_m: f64,
}

/// One departure from a station, flattened out of its timetables
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Departure {
    /// `HH:MM` as published
    pub time: String,
    pub rail_direction: Option<RailDirectionId>,
    pub calendar: Option<CalendarId>,
    pub destinations: Vec<StationId>,
    pub train_type: Option<TrainTypeId>,
    pub train_number: Option<String>,
    pub platform: Option<String>,
    pub is_last: bool,
}

impl Departure {
    /// Minutes into the service day, see [`service_minutes`]
    pub fn minutes(&self) -> Option<u32> {
        service_minutes(&self.time)
    }
}

/// High-level client for everyday ODPT lookups
///
/// Wraps [`OdptClient`] and combines several API calls into the answers a
/// rider actually wants: the stations of a line in order, what is running
/// late, what leaves next.
///
/// ```rust,no_run
/// # use odpt::{Odpt, OdptConfig};
/// # use odpt::api::ids::RailwayId;
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let odpt = Odpt::with_config(OdptConfig::new().with_consumer_key("your-key"))?;
/// let stations = odpt
///     .stations_on_railway(&RailwayId::new("odpt.Railway:Toei.Asakusa"))
///     .await?;
/// for station in &stations {
///     println!("{}", station.display_title());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Odpt {
    api: OdptClient,
    config: OdptConfig,
}

impl Odpt {
    /// Client configured from the `ODPT_*` environment variables
    pub fn new() -> Result<Self> {
        Self::with_config(OdptConfig::from_env()?)
    }

    pub fn with_config(config: OdptConfig) -> Result<Self> {
        let api = OdptClient::new(config.api_configuration()?);
        Ok(Self { api, config })
    }

    /// The underlying typed API client, for queries not covered here
    pub fn api(&self) -> &OdptClient {
        &self.api
    }

    pub fn config(&self) -> &OdptConfig {
        &self.config
    }

    /// Look up one railway by its `owl:sameAs` identifier
    pub async fn railway(&self, id: &RailwayId) -> Result<Railway> {
        let query = RailwayQuery {
            same_as: vec![id.clone()],
            ..Default::default()
        };
        self.api
            .railways(&query)
            .await?
            .into_iter()
            .find(|railway| &railway.same_as == id)
            .ok_or_else(|| Error::not_found(format!("railway {}", id)))
    }

    /// All railways, optionally limited to one operator
    pub async fn railways(&self, operator: Option<&OperatorId>) -> Result<Vec<Railway>> {
        let query = RailwayQuery {
            operator: operator.cloned().into_iter().collect(),
            ..Default::default()
        };
        Ok(self.api.railways(&query).await?)
    }

    /// Stations served by `railway`, sorted by the line's `odpt:stationOrder`.
    ///
    /// Stations the order does not mention keep their API order at the end.
    pub async fn stations_on_railway(&self, railway: &RailwayId) -> Result<Vec<Station>> {
        let line = self.railway(railway).await?;
        let query = StationQuery {
            railway: vec![railway.clone()],
            ..Default::default()
        };
        let mut stations = self.api.stations(&query).await?;

        let order: HashMap<&StationId, u32> = line
            .station_order
            .iter()
            .map(|entry| (&entry.station, entry.index))
            .collect();
        stations.sort_by_key(|station| order.get(&station.same_as).copied().unwrap_or(u32::MAX));

        debug!(railway = %railway, count = stations.len(), "ordered stations");
        Ok(stations)
    }

    /// A railway together with its decoded `ug:region` shape, when it has one
    pub async fn railway_with_region(
        &self,
        railway: &RailwayId,
    ) -> Result<(Railway, Option<Geometry>)> {
        let line = self.railway(railway).await?;
        let region = match line.region_url() {
            Some(url) => Some(self.api.fetch_geometry(url).await?),
            None => None,
        };
        Ok((line, region))
    }

    /// Fetch and decode any GeoJSON document ODPT links to
    pub async fn region(&self, url: &str) -> Result<Geometry> {
        Ok(self.api.fetch_geometry(url).await?)
    }

    /// Current operating status, disrupted lines first.
    ///
    /// An empty operator list asks for every operator.
    pub async fn train_status(&self, operators: &[OperatorId]) -> Result<Vec<TrainInformation>> {
        let query = TrainInformationQuery {
            operator: operators.to_vec(),
            ..Default::default()
        };
        let mut information = self.api.train_information(&query).await?;
        information.sort_by_key(|entry| !entry.is_disrupted());

        let disrupted = information.iter().filter(|entry| entry.is_disrupted()).count();
        info!(lines = information.len(), disrupted, "fetched train information");
        Ok(information)
    }

    /// Stations within `radius` metres of a point, closest first
    pub async fn nearby_stations(
        &self,
        lon: f64,
        lat: f64,
        radius: u32,
    ) -> Result<Vec<NearbyStation>> {
        let stations: Vec<Station> = self
            .api
            .places(&PlacesQuery::new(lon, lat, radius), &StationQuery::default())
            .await?;

        let mut nearby: Vec<NearbyStation> = stations
            .into_iter()
            .map(|station| {
                let distance_m = station
                    .location()
                    .map_or(f64::INFINITY, |point| distance_m((lon, lat), point));
                NearbyStation { station, distance_m }
            })
            .collect();
        nearby.sort_by(|a, b| a.distance_m.total_cmp(&b.distance_m));
        Ok(nearby)
    }

    /// Every departure from `station` across all directions, in service-day
    /// order. Without a calendar, timetables for all calendars are merged.
    pub async fn departures(
        &self,
        station: &StationId,
        calendar: Option<&CalendarId>,
    ) -> Result<Vec<Departure>> {
        let query = StationTimetableQuery {
            station: vec![station.clone()],
            calendar: calendar.cloned().into_iter().collect(),
            ..Default::default()
        };
        let timetables = self.api.station_timetables(&query).await?;

        let mut departures: Vec<Departure> = timetables.iter().flat_map(departures_from).collect();
        departures.sort_by_key(|departure| departure.minutes().unwrap_or(u32::MAX));
        Ok(departures)
    }
}

// Entries without a departure time are arrivals of terminating trains.
fn departures_from(timetable: &StationTimetable) -> impl Iterator<Item = Departure> + '_ {
    timetable.entries.iter().filter_map(move |entry| {
        Some(Departure {
            time: entry.departure_time.clone()?,
            rail_direction: timetable.rail_direction.clone(),
            calendar: timetable.calendar.clone(),
            destinations: entry.destination_stations.clone(),
            train_type: entry.train_type.clone(),
            train_number: entry.train_number.clone(),
            platform: entry.platform_number.clone(),
            is_last: entry.is_last.unwrap_or(false),
        })
    })
}

/// Minutes since the start of the service day for an `HH:MM` time.
///
/// Both `24:10` and `00:10` count as after midnight of the same service day.
pub fn service_minutes(time: &str) -> Option<u32> {
    let (hours, minutes) = time.split_once(':')?;
    let hours: u32 = hours.trim().parse().ok()?;
    let minutes: u32 = minutes.trim().parse().ok()?;
    if minutes >= 60 || hours > MAX_TIMETABLE_HOUR {
        return None;
    }
    let hours = if hours < SERVICE_DAY_START_HOUR {
        hours + 24
    } else {
        hours
    };
    Some(hours * 60 + minutes)
}

/// Haversine distance in metres between two `(lon, lat)` points
pub fn distance_m((lon1, lat1): (f64, f64), (lon2, lat2): (f64, f64)) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_minutes() {
        assert_eq!(service_minutes("05:01"), Some(301));
        assert_eq!(service_minutes("23:59"), Some(1439));
        assert_eq!(service_minutes("24:10"), Some(1450));
        assert_eq!(service_minutes("00:10"), Some(1450));
        assert_eq!(service_minutes("7:05"), Some(425));
        assert_eq!(service_minutes("12:75"), None);
        assert_eq!(service_minutes("47:59"), Some(2879));
        assert_eq!(service_minutes("48:00"), None);
        assert_eq!(service_minutes("99999999:00"), None);
        assert_eq!(service_minutes("noon"), None);
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance_m((139.7, 35.6), (139.7, 35.6)), 0.0);

        // Tokyo Station to Shinjuku Station is roughly 6.2 km
        let d = distance_m((139.7671, 35.6812), (139.7005, 35.6896));
        assert!((6_000.0..6_400.0).contains(&d), "got {}", d);
    }
}
