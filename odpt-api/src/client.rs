use std::fmt;
use std::sync::Arc;

use odpt_geojson::Geometry;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::error::OdptError;
use crate::models::*;
use crate::query::*;

/// v4 API served by the ODPT public data center
pub const DATA_CENTER_BASE_URL: &str = "https://api.odpt.org/api/v4";
/// v4 API served for the Tokyo Public Transportation Open Data Challenge
pub const TOKYO_CHALLENGE_BASE_URL: &str = "https://api-tokyochallenge.odpt.org/api/v4";
/// Legacy v2 `datapoints` API
pub const TOKYO_METRO_V2_BASE_URL: &str = "https://api.tokyometroapp.jp/api/v2";

const CONSUMER_KEY_PARAM: &str = "acl:consumerKey";

/// API generation, which decides how request URLs are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiVersion {
    /// `{base}/datapoints?rdf:type=odpt:Station&...`
    V2,
    /// `{base}/odpt:Station?...`
    #[default]
    V4,
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiVersion::V2 => f.write_str("v2"),
            ApiVersion::V4 => f.write_str("v4"),
        }
    }
}

/// Configuration for the ODPT client
#[derive(Clone)]
pub struct Configuration {
    /// Base URL without a trailing slash (e.g. "https://api.odpt.org/api/v4")
    pub base_path: String,
    pub api_version: ApiVersion,
    /// Sent as `acl:consumerKey` on every request
    pub consumer_key: Option<String>,
    /// User agent string for HTTP requests
    pub user_agent: Option<String>,
    /// HTTP client instance
    pub client: reqwest::Client,
}

impl Configuration {
    /// Create a new configuration with default values
    pub fn new() -> Configuration {
        Configuration::default()
    }

    /// The public data center v4 endpoint
    pub fn data_center(consumer_key: impl Into<String>) -> Configuration {
        Configuration {
            consumer_key: Some(consumer_key.into()),
            ..Configuration::default()
        }
    }

    /// The Tokyo Challenge v4 endpoint
    pub fn tokyo_challenge(consumer_key: impl Into<String>) -> Configuration {
        Configuration {
            base_path: TOKYO_CHALLENGE_BASE_URL.to_owned(),
            consumer_key: Some(consumer_key.into()),
            ..Configuration::default()
        }
    }

    /// The legacy v2 endpoint
    pub fn tokyo_metro_v2(consumer_key: impl Into<String>) -> Configuration {
        Configuration {
            base_path: TOKYO_METRO_V2_BASE_URL.to_owned(),
            api_version: ApiVersion::V2,
            consumer_key: Some(consumer_key.into()),
            ..Configuration::default()
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            base_path: DATA_CENTER_BASE_URL.to_owned(),
            api_version: ApiVersion::V4,
            consumer_key: None,
            user_agent: Some("odpt-rs/0.1".to_owned()),
            client: reqwest::Client::new(),
        }
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("base_path", &self.base_path)
            .field("api_version", &self.api_version)
            .field("consumer_key", &self.consumer_key.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// # ODPT Client
///
/// A typed client for the Open Data Platform for Transportation. Each call
/// maps a filter struct onto query parameters, issues one GET, and decodes
/// the JSON array that comes back.
///
/// ## Usage
///
/// ```rust,no_run
/// use odpt_api::{OdptClient, Configuration};
/// use odpt_api::ids::OperatorId;
/// use odpt_api::query::RailwayQuery;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = OdptClient::new(Arc::new(Configuration::data_center("your-consumer-key")));
///
///     let railways = client.railways(&RailwayQuery {
///         operator: vec![OperatorId::new("odpt.Operator:Toei")],
///         ..Default::default()
///     }).await?;
///
///     for railway in &railways {
///         println!("{} ({} stations)", railway.display_title(), railway.station_order.len());
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct OdptClient {
    configuration: Arc<Configuration>,
}

impl fmt::Debug for OdptClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OdptClient")
            .field("base_path", &self.configuration.base_path)
            .field("api_version", &self.configuration.api_version)
            .finish()
    }
}

macro_rules! shortcuts {
    ($($(#[$meta:meta])* $name:ident => $Type:ty;)+) => {
        $(
            $(#[$meta])*
            pub async fn $name(
                &self,
                query: &<$Type as OdptResource>::Query,
            ) -> Result<Vec<$Type>, OdptError> {
                self.get::<$Type>(query).await
            }
        )+
    };
}

impl OdptClient {
    pub fn new(configuration: Arc<Configuration>) -> Self {
        Self { configuration }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Fetch every record of type `T` matching `query`
    ///
    /// List filters are sent comma-joined, empty filters are left out.
    ///
    /// ```rust,no_run
    /// # use odpt_api::{OdptClient, Configuration};
    /// # use odpt_api::ids::RailwayId;
    /// # use odpt_api::models::Station;
    /// # use odpt_api::query::StationQuery;
    /// # use std::sync::Arc;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = OdptClient::new(Arc::new(Configuration::data_center("key")));
    /// let stations = client.get::<Station>(&StationQuery {
    ///     railway: vec![RailwayId::new("odpt.Railway:Toei.Asakusa")],
    ///     ..Default::default()
    /// }).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get<T: OdptResource>(&self, query: &T::Query) -> Result<Vec<T>, OdptError> {
        let url = self.resource_url(T::RDF_TYPE, query.to_query());
        self.fetch_json(&url).await
    }

    /// Fetch a single record by its `@id` ucode
    pub async fn get_by_id<T: OdptResource>(&self, ucode: &str) -> Result<Option<T>, OdptError> {
        let url = match self.configuration.api_version {
            ApiVersion::V4 => {
                let mut params = QueryParams::new();
                params.push("@id", ucode);
                self.resource_url(T::RDF_TYPE, params)
            }
            ApiVersion::V2 => self.url(
                &format!("datapoints/{}", urlencoding::encode(ucode)),
                QueryParams::new(),
            ),
        };

        let records: Vec<T> = self.fetch_json(&url).await?;
        Ok(records.into_iter().next())
    }

    /// Download the complete data set for `T` (v4 `{type}.json` dump)
    pub async fn dump<T: OdptResource>(&self) -> Result<Vec<T>, OdptError> {
        if self.configuration.api_version == ApiVersion::V2 {
            return Err(OdptError::Unsupported {
                operation: "dump",
                version: ApiVersion::V2,
            });
        }

        let url = self.url(&format!("{}.json", T::RDF_TYPE), QueryParams::new());
        self.fetch_json(&url).await
    }

    /// Search records of type `T` within a circle
    pub async fn places<T: Locatable>(
        &self,
        area: &PlacesQuery,
        query: &T::Query,
    ) -> Result<Vec<T>, OdptError> {
        let mut params = area.to_query();
        params.extend(query.to_query());

        let url = match self.configuration.api_version {
            ApiVersion::V4 => self.url(&format!("places/{}", T::RDF_TYPE), params),
            ApiVersion::V2 => {
                let mut typed = QueryParams::new();
                typed.push("rdf:type", T::RDF_TYPE);
                typed.extend(params);
                self.url("places", typed)
            }
        };
        self.fetch_json(&url).await
    }

    /// Fetch and decode a GeoJSON document, such as a `ug:region` link.
    ///
    /// The consumer key is appended unless the link already carries one.
    pub async fn fetch_geometry(&self, url: &str) -> Result<Geometry, OdptError> {
        let url = self.authorized_url(url)?;
        let body = self.fetch_text(url.as_str()).await?;
        Ok(body.parse::<Geometry>()?)
    }

    /// Like [`OdptClient::fetch_geometry`] for bodies holding an array of
    /// GeoJSON objects
    pub async fn fetch_geometries(&self, url: &str) -> Result<Vec<Geometry>, OdptError> {
        let url = self.authorized_url(url)?;
        let body = self.fetch_text(url.as_str()).await?;
        Ok(odpt_geojson::from_str_many(&body)?)
    }

    shortcuts! {
        operators => Operator;
        calendars => Calendar;
        /// `odpt:Station`
        stations => Station;
        station_timetables => StationTimetable;
        train_timetables => TrainTimetable;
        train_types => TrainType;
        rail_directions => RailDirection;
        /// `odpt:Railway`
        railways => Railway;
        railway_fares => RailwayFare;
        passenger_surveys => PassengerSurvey;
        /// Live train positions
        trains => Train;
        /// Operating status per line
        train_information => TrainInformation;
        /// Live bus positions
        buses => Bus;
        bus_timetables => BusTimetable;
        busroute_patterns => BusroutePattern;
        busroute_pattern_fares => BusroutePatternFare;
        busstop_poles => BusstopPole;
        busstop_pole_timetables => BusstopPoleTimetable;
        airports => Airport;
        airport_terminals => AirportTerminal;
        flight_information_arrivals => FlightInformationArrival;
        flight_information_departures => FlightInformationDeparture;
        flight_schedules => FlightSchedule;
        flight_statuses => FlightStatus;
    }

    fn resource_url(&self, rdf_type: &'static str, params: QueryParams) -> String {
        match self.configuration.api_version {
            ApiVersion::V4 => self.url(rdf_type, params),
            ApiVersion::V2 => {
                let mut typed = QueryParams::new();
                typed.push("rdf:type", rdf_type);
                typed.extend(params);
                self.url("datapoints", typed)
            }
        }
    }

    fn url(&self, path: &str, mut params: QueryParams) -> String {
        let mut url = format!(
            "{}/{}",
            self.configuration.base_path.trim_end_matches('/'),
            path
        );
        debug!(%url, query = %params.encode(), "building ODPT request");

        params.push_opt(CONSUMER_KEY_PARAM, self.configuration.consumer_key.as_deref());
        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.encode());
        }
        url
    }

    fn authorized_url(&self, url: &str) -> Result<Url, OdptError> {
        let mut url = Url::parse(url)?;
        debug!(%url, "fetching GeoJSON document");

        if let Some(key) = &self.configuration.consumer_key {
            let has_key = url.query_pairs().any(|(k, _)| k == CONSUMER_KEY_PARAM);
            if !has_key {
                url.query_pairs_mut().append_pair(CONSUMER_KEY_PARAM, key);
            }
        }
        Ok(url)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, OdptError> {
        let body = self.fetch_text(url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn fetch_text(&self, url: &str) -> Result<String, OdptError> {
        let mut request = self.configuration.client.get(url);
        if let Some(user_agent) = &self.configuration.user_agent {
            request = request.header(reqwest::header::USER_AGENT, user_agent);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.text().await?)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(status = status.as_u16(), "ODPT API returned an error status");
            Err(OdptError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
