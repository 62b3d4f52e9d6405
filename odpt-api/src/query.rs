//! Mapping typed filter arguments onto ODPT query strings.

use std::fmt::Display;

use crate::ids::*;

/// Ordered `key=value` pairs for one request.
///
/// Keys are ODPT vocabulary terms such as `odpt:operator` and are written
/// verbatim; values are percent-encoded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &'static str, value: impl Into<String>) {
        self.pairs.push((key, value.into()));
    }

    /// Add `key` only when a value is present
    pub fn push_opt<T: Display>(&mut self, key: &'static str, value: Option<T>) {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
    }

    /// Add `key` with the values joined by commas, skipping an empty list
    pub fn push_list<T: AsRef<str>>(&mut self, key: &'static str, values: &[T]) {
        if values.is_empty() {
            return;
        }
        let joined = values
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(",");
        self.pairs.push((key, joined));
    }

    pub fn extend(&mut self, other: QueryParams) {
        self.pairs.extend(other.pairs);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Render as a query string without the leading `?`
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// A typed argument object that knows which query parameters it maps to
pub trait ToQuery {
    fn write_query(&self, params: &mut QueryParams);

    fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        self.write_query(&mut params);
        params
    }
}

/// Circle for the `places` search endpoint, in degrees and metres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacesQuery {
    pub lon: f64,
    pub lat: f64,
    /// Radius in metres; the API accepts 0 to 4000
    pub radius: u32,
}

impl PlacesQuery {
    pub fn new(lon: f64, lat: f64, radius: u32) -> Self {
        Self { lon, lat, radius }
    }
}

impl ToQuery for PlacesQuery {
    fn write_query(&self, params: &mut QueryParams) {
        params.push("lon", self.lon.to_string());
        params.push("lat", self.lat.to_string());
        params.push("radius", self.radius.to_string());
    }
}

// Every filter is a list; a list with several entries is sent comma-joined,
// an empty list is left out of the request.
macro_rules! query {
    ($(
        $(#[$meta:meta])*
        $Name:ident {
            $($field:ident: $Ty:ty => $key:literal,)*
        }
    )+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default, PartialEq)]
            pub struct $Name {
                /// `@id` (ucode)
                pub ids: Vec<String>,
                $(pub $field: Vec<$Ty>,)*
            }

            impl ToQuery for $Name {
                fn write_query(&self, params: &mut QueryParams) {
                    params.push_list("@id", &self.ids);
                    $(params.push_list($key, &self.$field);)*
                }
            }
        )+
    };
}

query! {
    OperatorQuery {
        same_as: OperatorId => "owl:sameAs",
    }

    CalendarQuery {
        same_as: CalendarId => "owl:sameAs",
    }

    /// Filters for `odpt:Station`
    StationQuery {
        same_as: StationId => "owl:sameAs",
        title: String => "dc:title",
        operator: OperatorId => "odpt:operator",
        railway: RailwayId => "odpt:railway",
        station_code: String => "odpt:stationCode",
    }

    StationTimetableQuery {
        same_as: StationTimetableId => "owl:sameAs",
        operator: OperatorId => "odpt:operator",
        railway: RailwayId => "odpt:railway",
        station: StationId => "odpt:station",
        rail_direction: RailDirectionId => "odpt:railDirection",
        calendar: CalendarId => "odpt:calendar",
    }

    TrainTimetableQuery {
        same_as: TrainTimetableId => "owl:sameAs",
        operator: OperatorId => "odpt:operator",
        railway: RailwayId => "odpt:railway",
        rail_direction: RailDirectionId => "odpt:railDirection",
        calendar: CalendarId => "odpt:calendar",
        train: TrainId => "odpt:train",
        train_number: String => "odpt:trainNumber",
        train_type: TrainTypeId => "odpt:trainType",
    }

    TrainTypeQuery {
        same_as: TrainTypeId => "owl:sameAs",
        operator: OperatorId => "odpt:operator",
    }

    RailDirectionQuery {
        same_as: RailDirectionId => "owl:sameAs",
    }

    /// Filters for `odpt:Railway`
    RailwayQuery {
        same_as: RailwayId => "owl:sameAs",
        title: String => "dc:title",
        operator: OperatorId => "odpt:operator",
        line_code: String => "odpt:lineCode",
    }

    RailwayFareQuery {
        same_as: RailwayFareId => "owl:sameAs",
        operator: OperatorId => "odpt:operator",
        from_station: StationId => "odpt:fromStation",
        to_station: StationId => "odpt:toStation",
    }

    PassengerSurveyQuery {
        same_as: PassengerSurveyId => "owl:sameAs",
        operator: OperatorId => "odpt:operator",
        station: StationId => "odpt:station",
        railway: RailwayId => "odpt:railway",
    }

    /// Filters for live train positions
    TrainQuery {
        same_as: TrainId => "owl:sameAs",
        operator: OperatorId => "odpt:operator",
        railway: RailwayId => "odpt:railway",
        rail_direction: RailDirectionId => "odpt:railDirection",
        train_number: String => "odpt:trainNumber",
        train_type: TrainTypeId => "odpt:trainType",
        from_station: StationId => "odpt:fromStation",
        to_station: StationId => "odpt:toStation",
    }

    TrainInformationQuery {
        same_as: TrainInformationId => "owl:sameAs",
        operator: OperatorId => "odpt:operator",
        railway: RailwayId => "odpt:railway",
    }

    /// Filters for live bus positions
    BusQuery {
        same_as: BusId => "owl:sameAs",
        operator: OperatorId => "odpt:operator",
        busroute_pattern: BusroutePatternId => "odpt:busroutePattern",
        from_busstop_pole: BusstopPoleId => "odpt:fromBusstopPole",
        to_busstop_pole: BusstopPoleId => "odpt:toBusstopPole",
    }

    BusTimetableQuery {
        same_as: BusTimetableId => "owl:sameAs",
        title: String => "dc:title",
        operator: OperatorId => "odpt:operator",
        busroute_pattern: BusroutePatternId => "odpt:busroutePattern",
        calendar: CalendarId => "odpt:calendar",
    }

    BusroutePatternQuery {
        same_as: BusroutePatternId => "owl:sameAs",
        title: String => "dc:title",
        operator: OperatorId => "odpt:operator",
        busroute: BusrouteId => "odpt:busroute",
    }

    BusroutePatternFareQuery {
        same_as: BusroutePatternFareId => "owl:sameAs",
        operator: OperatorId => "odpt:operator",
        from_busstop_pole: BusstopPoleId => "odpt:fromBusstopPole",
        to_busstop_pole: BusstopPoleId => "odpt:toBusstopPole",
    }

    BusstopPoleQuery {
        same_as: BusstopPoleId => "owl:sameAs",
        title: String => "dc:title",
        operator: OperatorId => "odpt:operator",
        busroute_pattern: BusroutePatternId => "odpt:busroutePattern",
        busstop_pole_number: String => "odpt:busstopPoleNumber",
    }

    BusstopPoleTimetableQuery {
        same_as: BusstopPoleTimetableId => "owl:sameAs",
        title: String => "dc:title",
        operator: OperatorId => "odpt:operator",
        busstop_pole: BusstopPoleId => "odpt:busstopPole",
        busroute: BusrouteId => "odpt:busroute",
        calendar: CalendarId => "odpt:calendar",
    }

    AirportQuery {
        same_as: AirportId => "owl:sameAs",
    }

    AirportTerminalQuery {
        same_as: AirportTerminalId => "owl:sameAs",
        airport: AirportId => "odpt:airport",
    }

    FlightInformationArrivalQuery {
        same_as: FlightInformationArrivalId => "owl:sameAs",
        operator: OperatorId => "odpt:operator",
        airline: OperatorId => "odpt:airline",
        flight_status: FlightStatusId => "odpt:flightStatus",
        arrival_airport: AirportId => "odpt:arrivalAirport",
        arrival_airport_terminal: AirportTerminalId => "odpt:arrivalAirportTerminal",
        origin_airport: AirportId => "odpt:originAirport",
    }

    FlightInformationDepartureQuery {
        same_as: FlightInformationDepartureId => "owl:sameAs",
        operator: OperatorId => "odpt:operator",
        airline: OperatorId => "odpt:airline",
        flight_status: FlightStatusId => "odpt:flightStatus",
        departure_airport: AirportId => "odpt:departureAirport",
        departure_airport_terminal: AirportTerminalId => "odpt:departureAirportTerminal",
        destination_airport: AirportId => "odpt:destinationAirport",
    }

    FlightScheduleQuery {
        same_as: FlightScheduleId => "owl:sameAs",
        operator: OperatorId => "odpt:operator",
        calendar: CalendarId => "odpt:calendar",
        origin_airport: AirportId => "odpt:originAirport",
        destination_airport: AirportId => "odpt:destinationAirport",
    }

    FlightStatusQuery {
        same_as: FlightStatusId => "owl:sameAs",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_are_comma_joined() {
        let query = StationQuery {
            operator: vec![
                OperatorId::new("odpt.Operator:Toei"),
                OperatorId::new("odpt.Operator:TokyoMetro"),
            ],
            station_code: vec!["A-16".to_string()],
            ..Default::default()
        };

        let params = query.to_query();
        assert_eq!(params.len(), 2);
        assert_eq!(
            params.get("odpt:operator"),
            Some("odpt.Operator:Toei,odpt.Operator:TokyoMetro")
        );
        assert_eq!(
            params.encode(),
            "odpt:operator=odpt.Operator%3AToei%2Codpt.Operator%3ATokyoMetro&odpt:stationCode=A-16"
        );
    }

    #[test]
    fn test_empty_query_has_no_params() {
        assert!(TrainInformationQuery::default().to_query().is_empty());
    }

    #[test]
    fn test_push_opt_skips_none() {
        let mut params = PlacesQuery::new(139.7766, 35.6975, 500).to_query();
        params.push_opt::<&str>("acl:consumerKey", None);
        assert_eq!(params.len(), 3);

        params.push_opt("acl:consumerKey", Some("key/1"));
        assert!(params.encode().ends_with("&acl:consumerKey=key%2F1"));
    }

    #[test]
    fn test_places_query() {
        let params = PlacesQuery::new(139.7766, 35.6975, 500).to_query();
        assert_eq!(params.encode(), "lon=139.7766&lat=35.6975&radius=500");
    }
}
