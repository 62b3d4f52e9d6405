use serde::{Deserialize, Serialize};

use super::common::{Meta, Multilingual};
use crate::ids::*;

/// `odpt:Airport`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(rename = "owl:sameAs")]
    pub same_as: AirportId,
    #[serde(rename = "dc:title", default)]
    pub title: Option<String>,
    #[serde(rename = "odpt:airportTitle", default)]
    pub airport_title: Option<Multilingual>,
    #[serde(rename = "odpt:airportTerminal", default)]
    pub airport_terminals: Vec<AirportTerminalId>,
    #[serde(rename = "geo:long", default)]
    pub lon: Option<f64>,
    #[serde(rename = "geo:lat", default)]
    pub lat: Option<f64>,
    #[serde(rename = "ug:region", default)]
    pub region: Option<String>,
}

/// `odpt:AirportTerminal`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AirportTerminal {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(rename = "owl:sameAs")]
    pub same_as: AirportTerminalId,
    #[serde(rename = "dc:title", default)]
    pub title: Option<String>,
    #[serde(rename = "odpt:airportTerminalTitle", default)]
    pub airport_terminal_title: Option<Multilingual>,
    #[serde(rename = "odpt:airport", default)]
    pub airport: Option<AirportId>,
    #[serde(rename = "geo:long", default)]
    pub lon: Option<f64>,
    #[serde(rename = "geo:lat", default)]
    pub lat: Option<f64>,
    #[serde(rename = "ug:region", default)]
    pub region: Option<String>,
}

/// `odpt:FlightInformationArrival`: live arrival board entry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlightInformationArrival {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(rename = "owl:sameAs")]
    pub same_as: FlightInformationArrivalId,
    #[serde(rename = "odpt:operator", default)]
    pub operator: Option<OperatorId>,
    #[serde(rename = "odpt:airline", default)]
    pub airline: Option<OperatorId>,
    #[serde(rename = "odpt:flightNumber", default)]
    pub flight_numbers: Vec<String>,
    #[serde(rename = "odpt:flightStatus", default)]
    pub flight_status: Option<FlightStatusId>,
    #[serde(rename = "odpt:flightInformationSummary", default)]
    pub summary: Option<Multilingual>,
    #[serde(rename = "odpt:flightInformationText", default)]
    pub text: Option<Multilingual>,
    #[serde(rename = "odpt:scheduledArrivalTime", default)]
    pub scheduled_arrival_time: Option<String>,
    #[serde(rename = "odpt:estimatedArrivalTime", default)]
    pub estimated_arrival_time: Option<String>,
    #[serde(rename = "odpt:actualArrivalTime", default)]
    pub actual_arrival_time: Option<String>,
    #[serde(rename = "odpt:arrivalAirport", default)]
    pub arrival_airport: Option<AirportId>,
    #[serde(rename = "odpt:arrivalAirportTerminal", default)]
    pub arrival_airport_terminal: Option<AirportTerminalId>,
    #[serde(rename = "odpt:arrivalGate", default)]
    pub arrival_gate: Option<String>,
    #[serde(rename = "odpt:baggageClaim", default)]
    pub baggage_claim: Option<String>,
    #[serde(rename = "odpt:originAirport", default)]
    pub origin_airport: Option<AirportId>,
    #[serde(rename = "odpt:viaAirport", default)]
    pub via_airports: Vec<AirportId>,
    #[serde(rename = "odpt:aircraftType", default)]
    pub aircraft_type: Option<String>,
}

/// `odpt:FlightInformationDeparture`: live departure board entry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlightInformationDeparture {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(rename = "owl:sameAs")]
    pub same_as: FlightInformationDepartureId,
    #[serde(rename = "odpt:operator", default)]
    pub operator: Option<OperatorId>,
    #[serde(rename = "odpt:airline", default)]
    pub airline: Option<OperatorId>,
    #[serde(rename = "odpt:flightNumber", default)]
    pub flight_numbers: Vec<String>,
    #[serde(rename = "odpt:flightStatus", default)]
    pub flight_status: Option<FlightStatusId>,
    #[serde(rename = "odpt:flightInformationSummary", default)]
    pub summary: Option<Multilingual>,
    #[serde(rename = "odpt:flightInformationText", default)]
    pub text: Option<Multilingual>,
    #[serde(rename = "odpt:scheduledDepartureTime", default)]
    pub scheduled_departure_time: Option<String>,
    #[serde(rename = "odpt:estimatedDepartureTime", default)]
    pub estimated_departure_time: Option<String>,
    #[serde(rename = "odpt:actualDepartureTime", default)]
    pub actual_departure_time: Option<String>,
    #[serde(rename = "odpt:departureAirport", default)]
    pub departure_airport: Option<AirportId>,
    #[serde(rename = "odpt:departureAirportTerminal", default)]
    pub departure_airport_terminal: Option<AirportTerminalId>,
    #[serde(rename = "odpt:departureGate", default)]
    pub departure_gate: Option<String>,
    #[serde(rename = "odpt:checkInCounter", default)]
    pub check_in_counters: Vec<String>,
    #[serde(rename = "odpt:destinationAirport", default)]
    pub destination_airport: Option<AirportId>,
    #[serde(rename = "odpt:viaAirport", default)]
    pub via_airports: Vec<AirportId>,
    #[serde(rename = "odpt:aircraftType", default)]
    pub aircraft_type: Option<String>,
}

/// `odpt:FlightSchedule`: timetabled flights between two airports
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlightSchedule {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(rename = "owl:sameAs")]
    pub same_as: FlightScheduleId,
    #[serde(rename = "odpt:operator", default)]
    pub operator: Option<OperatorId>,
    #[serde(rename = "odpt:calendar", default)]
    pub calendar: Option<CalendarId>,
    #[serde(rename = "odpt:originAirport", default)]
    pub origin_airport: Option<AirportId>,
    #[serde(rename = "odpt:destinationAirport", default)]
    pub destination_airport: Option<AirportId>,
    #[serde(rename = "odpt:flightScheduleObject", default)]
    pub flights: Vec<FlightScheduleObject>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlightScheduleObject {
    #[serde(rename = "odpt:airline", default)]
    pub airline: Option<OperatorId>,
    #[serde(rename = "odpt:flightNumber", default)]
    pub flight_numbers: Vec<String>,
    #[serde(rename = "odpt:originTime", default)]
    pub origin_time: Option<String>,
    #[serde(rename = "odpt:destinationTime", default)]
    pub destination_time: Option<String>,
    #[serde(rename = "odpt:originDayDifference", default)]
    pub origin_day_difference: Option<i32>,
    #[serde(rename = "odpt:destinationDayDifference", default)]
    pub destination_day_difference: Option<i32>,
    #[serde(rename = "odpt:aircraftType", default)]
    pub aircraft_type: Option<String>,
    #[serde(rename = "odpt:viaAirport", default)]
    pub via_airports: Vec<AirportId>,
    /// `YYYY-MM-DD`
    #[serde(rename = "odpt:isValidFrom", default)]
    pub is_valid_from: Option<String>,
    #[serde(rename = "odpt:isValidTo", default)]
    pub is_valid_to: Option<String>,
    #[serde(rename = "odpt:note", default)]
    pub note: Option<Multilingual>,
}

/// `odpt:FlightStatus`, e.g. on time, delayed, cancelled
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlightStatus {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(rename = "owl:sameAs")]
    pub same_as: FlightStatusId,
    #[serde(rename = "dc:title", default)]
    pub title: Option<String>,
    #[serde(rename = "odpt:flightStatusTitle", default)]
    pub flight_status_title: Option<Multilingual>,
}
