//! Response records for the ODPT vocabularies.
//!
//! The v2 and v4 APIs share one set of records: members that only one
//! generation sends are optional.

pub mod airplane;
pub mod bus;
pub mod common;
pub mod train;

pub use airplane::*;
pub use bus::*;
pub use common::*;
pub use train::*;

use serde::de::DeserializeOwned;

use crate::query::*;

/// A record type served under its own `rdf:type`
pub trait OdptResource: DeserializeOwned {
    /// e.g. `odpt:Station`
    const RDF_TYPE: &'static str;

    /// The filter arguments this endpoint accepts
    type Query: ToQuery + Default;

    fn meta(&self) -> &Meta;
}

/// Records the `places` endpoint can search by position
pub trait Locatable: OdptResource {
    /// `(longitude, latitude)` when the record has coordinates
    fn location(&self) -> Option<(f64, f64)>;
}

macro_rules! resource {
    ($($Type:ty => $rdf_type:literal, $Query:ty;)+) => {
        $(
            impl OdptResource for $Type {
                const RDF_TYPE: &'static str = $rdf_type;
                type Query = $Query;

                fn meta(&self) -> &Meta {
                    &self.meta
                }
            }
        )+
    };
}

macro_rules! locatable {
    ($($Type:ty),+ $(,)?) => {
        $(
            impl Locatable for $Type {
                fn location(&self) -> Option<(f64, f64)> {
                    Some((self.lon?, self.lat?))
                }
            }
        )+
    };
}

resource! {
    Operator => "odpt:Operator", OperatorQuery;
    Calendar => "odpt:Calendar", CalendarQuery;
    Station => "odpt:Station", StationQuery;
    StationTimetable => "odpt:StationTimetable", StationTimetableQuery;
    TrainTimetable => "odpt:TrainTimetable", TrainTimetableQuery;
    TrainType => "odpt:TrainType", TrainTypeQuery;
    RailDirection => "odpt:RailDirection", RailDirectionQuery;
    Railway => "odpt:Railway", RailwayQuery;
    RailwayFare => "odpt:RailwayFare", RailwayFareQuery;
    PassengerSurvey => "odpt:PassengerSurvey", PassengerSurveyQuery;
    Train => "odpt:Train", TrainQuery;
    TrainInformation => "odpt:TrainInformation", TrainInformationQuery;
    Bus => "odpt:Bus", BusQuery;
    BusTimetable => "odpt:BusTimetable", BusTimetableQuery;
    BusroutePattern => "odpt:BusroutePattern", BusroutePatternQuery;
    BusroutePatternFare => "odpt:BusroutePatternFare", BusroutePatternFareQuery;
    BusstopPole => "odpt:BusstopPole", BusstopPoleQuery;
    BusstopPoleTimetable => "odpt:BusstopPoleTimetable", BusstopPoleTimetableQuery;
    Airport => "odpt:Airport", AirportQuery;
    AirportTerminal => "odpt:AirportTerminal", AirportTerminalQuery;
    FlightInformationArrival => "odpt:FlightInformationArrival", FlightInformationArrivalQuery;
    FlightInformationDeparture => "odpt:FlightInformationDeparture", FlightInformationDepartureQuery;
    FlightSchedule => "odpt:FlightSchedule", FlightScheduleQuery;
    FlightStatus => "odpt:FlightStatus", FlightStatusQuery;
}

locatable!(Station, BusstopPole, Airport, AirportTerminal);
