use serde::{Deserialize, Serialize};

use super::common::{Meta, Multilingual};
use crate::ids::*;

/// `odpt:Bus`: a live bus position
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bus {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(rename = "owl:sameAs")]
    pub same_as: BusId,
    #[serde(rename = "odpt:busNumber", default)]
    pub bus_number: Option<String>,
    #[serde(rename = "odpt:busroutePattern", default)]
    pub busroute_pattern: Option<BusroutePatternId>,
    #[serde(rename = "odpt:operator", default)]
    pub operator: Option<OperatorId>,
    #[serde(rename = "odpt:busTimetable", default)]
    pub bus_timetable: Option<BusTimetableId>,
    #[serde(rename = "odpt:startingBusstopPole", default)]
    pub starting_busstop_pole: Option<BusstopPoleId>,
    #[serde(rename = "odpt:terminalBusstopPole", default)]
    pub terminal_busstop_pole: Option<BusstopPoleId>,
    #[serde(rename = "odpt:fromBusstopPole", default)]
    pub from_busstop_pole: Option<BusstopPoleId>,
    #[serde(rename = "odpt:fromBusstopPoleTime", default)]
    pub from_busstop_pole_time: Option<String>,
    #[serde(rename = "odpt:toBusstopPole", default)]
    pub to_busstop_pole: Option<BusstopPoleId>,
    /// Progress between `from_busstop_pole` and `to_busstop_pole`, 0.0 to 1.0
    #[serde(rename = "odpt:progress", default)]
    pub progress: Option<f64>,
    #[serde(rename = "geo:long", default)]
    pub lon: Option<f64>,
    #[serde(rename = "geo:lat", default)]
    pub lat: Option<f64>,
    /// km/h
    #[serde(rename = "odpt:speed", default)]
    pub speed: Option<f64>,
    /// Degrees clockwise from north
    #[serde(rename = "odpt:azimuth", default)]
    pub azimuth: Option<f64>,
    #[serde(rename = "odpt:doorStatus", default)]
    pub door_status: Option<String>,
    #[serde(rename = "odpt:occupancyStatus", default)]
    pub occupancy_status: Option<String>,
    #[serde(rename = "odpt:frequency", default)]
    pub frequency: Option<u32>,
}

/// `odpt:BusTimetable`: the stops of one bus trip
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BusTimetable {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(rename = "owl:sameAs")]
    pub same_as: BusTimetableId,
    #[serde(rename = "dc:title", default)]
    pub title: Option<String>,
    #[serde(rename = "odpt:kana", default)]
    pub kana: Option<String>,
    #[serde(rename = "odpt:operator", default)]
    pub operator: Option<OperatorId>,
    #[serde(rename = "odpt:busroutePattern", default)]
    pub busroute_pattern: Option<BusroutePatternId>,
    #[serde(rename = "odpt:calendar", default)]
    pub calendar: Option<CalendarId>,
    #[serde(rename = "odpt:busTimetableObject", default)]
    pub stops: Vec<BusTimetableObject>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BusTimetableObject {
    #[serde(rename = "odpt:index")]
    pub index: u32,
    #[serde(rename = "odpt:busstopPole")]
    pub busstop_pole: BusstopPoleId,
    #[serde(rename = "odpt:arrivalTime", default)]
    pub arrival_time: Option<String>,
    #[serde(rename = "odpt:departureTime", default)]
    pub departure_time: Option<String>,
    #[serde(rename = "odpt:destinationSign", default)]
    pub destination_sign: Option<String>,
    #[serde(rename = "odpt:isNonStepBus", default)]
    pub is_non_step_bus: Option<bool>,
    #[serde(rename = "odpt:isMidnight", default)]
    pub is_midnight: Option<bool>,
    #[serde(rename = "odpt:canGetOn", default)]
    pub can_get_on: Option<bool>,
    #[serde(rename = "odpt:canGetOff", default)]
    pub can_get_off: Option<bool>,
    #[serde(rename = "odpt:note", default)]
    pub note: Option<String>,
}

/// `odpt:BusroutePattern`: one variant of a route with its stop order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BusroutePattern {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(rename = "owl:sameAs")]
    pub same_as: BusroutePatternId,
    #[serde(rename = "dc:title", default)]
    pub title: Option<String>,
    #[serde(rename = "odpt:kana", default)]
    pub kana: Option<String>,
    #[serde(rename = "odpt:operator", default)]
    pub operator: Option<OperatorId>,
    #[serde(rename = "odpt:busroute", default)]
    pub busroute: Option<BusrouteId>,
    #[serde(rename = "odpt:pattern", default)]
    pub pattern: Option<String>,
    #[serde(rename = "odpt:direction", default)]
    pub direction: Option<String>,
    #[serde(rename = "ug:region", default)]
    pub region: Option<String>,
    #[serde(rename = "odpt:busstopPoleOrder", default)]
    pub busstop_pole_order: Vec<BusstopPoleOrder>,
    #[serde(rename = "odpt:note", default)]
    pub note: Option<String>,
    #[serde(rename = "odpt:busLocationURL", default)]
    pub bus_location_url: Option<String>,
}

impl BusroutePattern {
    pub fn region_url(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BusstopPoleOrder {
    #[serde(rename = "odpt:index")]
    pub index: u32,
    #[serde(rename = "odpt:busstopPole")]
    pub busstop_pole: BusstopPoleId,
    #[serde(rename = "odpt:openingDoorsToGetOn", default)]
    pub opening_doors_to_get_on: Vec<String>,
    #[serde(rename = "odpt:openingDoorsToGetOff", default)]
    pub opening_doors_to_get_off: Vec<String>,
    #[serde(rename = "odpt:note", default)]
    pub note: Option<String>,
}

/// `odpt:BusroutePatternFare`, in yen
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BusroutePatternFare {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(rename = "owl:sameAs")]
    pub same_as: BusroutePatternFareId,
    #[serde(rename = "odpt:operator", default)]
    pub operator: Option<OperatorId>,
    #[serde(rename = "odpt:fromBusroutePattern", default)]
    pub from_busroute_pattern: Option<BusroutePatternId>,
    #[serde(rename = "odpt:fromBusstopPoleOrder", default)]
    pub from_busstop_pole_order: Option<u32>,
    #[serde(rename = "odpt:fromBusstopPole", default)]
    pub from_busstop_pole: Option<BusstopPoleId>,
    #[serde(rename = "odpt:toBusroutePattern", default)]
    pub to_busroute_pattern: Option<BusroutePatternId>,
    #[serde(rename = "odpt:toBusstopPoleOrder", default)]
    pub to_busstop_pole_order: Option<u32>,
    #[serde(rename = "odpt:toBusstopPole", default)]
    pub to_busstop_pole: Option<BusstopPoleId>,
    #[serde(rename = "odpt:ticketFare", default)]
    pub ticket_fare: Option<u32>,
    #[serde(rename = "odpt:childTicketFare", default)]
    pub child_ticket_fare: Option<u32>,
    #[serde(rename = "odpt:icCardFare", default)]
    pub ic_card_fare: Option<u32>,
    #[serde(rename = "odpt:childIcCardFare", default)]
    pub child_ic_card_fare: Option<u32>,
}

/// `odpt:BusstopPole`: a single stop pole
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BusstopPole {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(rename = "owl:sameAs")]
    pub same_as: BusstopPoleId,
    #[serde(rename = "dc:title", default)]
    pub title: Option<String>,
    /// Multilingual names; ODPT publishes these under a bare `title` key
    #[serde(rename = "title", default)]
    pub localized_title: Option<Multilingual>,
    #[serde(rename = "odpt:kana", default)]
    pub kana: Option<String>,
    #[serde(rename = "geo:long", default)]
    pub lon: Option<f64>,
    #[serde(rename = "geo:lat", default)]
    pub lat: Option<f64>,
    #[serde(rename = "ug:region", default)]
    pub region: Option<String>,
    #[serde(rename = "odpt:busroutePattern", default)]
    pub busroute_patterns: Vec<BusroutePatternId>,
    #[serde(rename = "odpt:operator", default)]
    pub operators: Vec<OperatorId>,
    #[serde(rename = "odpt:busstopPoleNumber", default)]
    pub busstop_pole_number: Option<String>,
    #[serde(rename = "odpt:busstopPoleTimetable", default)]
    pub busstop_pole_timetables: Vec<BusstopPoleTimetableId>,
    #[serde(rename = "odpt:platformNumber", default)]
    pub platform_number: Option<String>,
}

impl BusstopPole {
    pub fn display_title(&self) -> &str {
        self.localized_title
            .as_ref()
            .and_then(Multilingual::best)
            .or(self.title.as_deref())
            .unwrap_or_else(|| self.same_as.as_str())
    }
}

/// `odpt:BusstopPoleTimetable`: departures from one pole
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BusstopPoleTimetable {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(rename = "owl:sameAs")]
    pub same_as: BusstopPoleTimetableId,
    #[serde(rename = "dc:title", default)]
    pub title: Option<String>,
    #[serde(rename = "odpt:operator", default)]
    pub operator: Option<OperatorId>,
    #[serde(rename = "odpt:busstopPole", default)]
    pub busstop_pole: Option<BusstopPoleId>,
    #[serde(rename = "odpt:busDirection", default)]
    pub bus_directions: Vec<String>,
    #[serde(rename = "odpt:busroute", default)]
    pub busroutes: Vec<BusrouteId>,
    #[serde(rename = "odpt:calendar", default)]
    pub calendar: Option<CalendarId>,
    #[serde(rename = "odpt:busstopPoleTimetableObject", default)]
    pub entries: Vec<BusstopPoleTimetableObject>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BusstopPoleTimetableObject {
    #[serde(rename = "odpt:arrivalTime", default)]
    pub arrival_time: Option<String>,
    #[serde(rename = "odpt:departureTime", default)]
    pub departure_time: Option<String>,
    #[serde(rename = "odpt:destinationBusstopPole", default)]
    pub destination_busstop_pole: Option<BusstopPoleId>,
    #[serde(rename = "odpt:destinationSign", default)]
    pub destination_sign: Option<String>,
    #[serde(rename = "odpt:busroutePattern", default)]
    pub busroute_pattern: Option<BusroutePatternId>,
    #[serde(rename = "odpt:busTimetable", default)]
    pub bus_timetable: Option<BusTimetableId>,
    #[serde(rename = "odpt:isNonStepBus", default)]
    pub is_non_step_bus: Option<bool>,
    #[serde(rename = "odpt:isMidnight", default)]
    pub is_midnight: Option<bool>,
    #[serde(rename = "odpt:note", default)]
    pub note: Option<String>,
}
