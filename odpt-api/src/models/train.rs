use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::common::{Meta, Multilingual};
use crate::ids::*;

/// `odpt:Station`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Station {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(rename = "owl:sameAs")]
    pub same_as: StationId,
    #[serde(rename = "dc:title", default)]
    pub title: Option<String>,
    #[serde(rename = "odpt:stationTitle", default)]
    pub station_title: Option<Multilingual>,
    #[serde(rename = "odpt:operator", default)]
    pub operator: Option<OperatorId>,
    #[serde(rename = "odpt:railway", default)]
    pub railway: Option<RailwayId>,
    #[serde(rename = "odpt:stationCode", default)]
    pub station_code: Option<String>,
    #[serde(rename = "geo:long", default)]
    pub lon: Option<f64>,
    #[serde(rename = "geo:lat", default)]
    pub lat: Option<f64>,
    /// URL of the station's GeoJSON shape
    #[serde(rename = "ug:region", default)]
    pub region: Option<String>,
    /// Exit identifiers (`odpt.StationFacility` / `ug:Poi` references)
    #[serde(rename = "odpt:exit", default)]
    pub exits: Vec<String>,
    #[serde(rename = "odpt:connectingRailway", default)]
    pub connecting_railways: Vec<RailwayId>,
    #[serde(rename = "odpt:connectingStation", default)]
    pub connecting_stations: Vec<StationId>,
    #[serde(rename = "odpt:stationTimetable", default)]
    pub station_timetables: Vec<StationTimetableId>,
    #[serde(rename = "odpt:passengerSurvey", default)]
    pub passenger_surveys: Vec<PassengerSurveyId>,
}

impl Station {
    pub fn region_url(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Localised title, falling back to `dc:title`
    pub fn display_title(&self) -> &str {
        self.station_title
            .as_ref()
            .and_then(Multilingual::best)
            .or(self.title.as_deref())
            .unwrap_or_else(|| self.same_as.as_str())
    }
}

/// `odpt:StationTimetable`: departures from one station in one direction
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StationTimetable {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(rename = "owl:sameAs")]
    pub same_as: StationTimetableId,
    #[serde(rename = "dc:title", default)]
    pub title: Option<String>,
    #[serde(rename = "odpt:operator", default)]
    pub operator: Option<OperatorId>,
    #[serde(rename = "odpt:railway", default)]
    pub railway: Option<RailwayId>,
    #[serde(rename = "odpt:railwayTitle", default)]
    pub railway_title: Option<Multilingual>,
    #[serde(rename = "odpt:station", default)]
    pub station: Option<StationId>,
    #[serde(rename = "odpt:stationTitle", default)]
    pub station_title: Option<Multilingual>,
    #[serde(rename = "odpt:railDirection", default)]
    pub rail_direction: Option<RailDirectionId>,
    #[serde(rename = "odpt:calendar", default)]
    pub calendar: Option<CalendarId>,
    #[serde(rename = "odpt:stationTimetableObject", default)]
    pub entries: Vec<StationTimetableObject>,
    #[serde(rename = "odpt:note", default)]
    pub note: Option<Multilingual>,
}

/// One departure in a [`StationTimetable`]. Times are `HH:MM` and may run
/// past `24:00` for after-midnight service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StationTimetableObject {
    #[serde(rename = "odpt:arrivalTime", default)]
    pub arrival_time: Option<String>,
    #[serde(rename = "odpt:departureTime", default)]
    pub departure_time: Option<String>,
    #[serde(rename = "odpt:originStation", default)]
    pub origin_stations: Vec<StationId>,
    #[serde(rename = "odpt:destinationStation", default)]
    pub destination_stations: Vec<StationId>,
    #[serde(rename = "odpt:viaStation", default)]
    pub via_stations: Vec<StationId>,
    #[serde(rename = "odpt:viaRailway", default)]
    pub via_railways: Vec<RailwayId>,
    #[serde(rename = "odpt:train", default)]
    pub train: Option<TrainId>,
    #[serde(rename = "odpt:trainNumber", default)]
    pub train_number: Option<String>,
    #[serde(rename = "odpt:trainType", default)]
    pub train_type: Option<TrainTypeId>,
    #[serde(rename = "odpt:trainName", default)]
    pub train_names: Vec<Multilingual>,
    #[serde(rename = "odpt:trainOwner", default)]
    pub train_owner: Option<TrainOwnerId>,
    #[serde(rename = "odpt:isLast", default)]
    pub is_last: Option<bool>,
    #[serde(rename = "odpt:isOrigin", default)]
    pub is_origin: Option<bool>,
    #[serde(rename = "odpt:platformNumber", default)]
    pub platform_number: Option<String>,
    #[serde(rename = "odpt:carComposition", default)]
    pub car_composition: Option<u32>,
    #[serde(rename = "odpt:note", default)]
    pub note: Option<Multilingual>,
}

/// `odpt:TrainTimetable`: the stops of one train
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainTimetable {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(rename = "owl:sameAs")]
    pub same_as: TrainTimetableId,
    #[serde(rename = "odpt:operator", default)]
    pub operator: Option<OperatorId>,
    #[serde(rename = "odpt:railway", default)]
    pub railway: Option<RailwayId>,
    #[serde(rename = "odpt:railDirection", default)]
    pub rail_direction: Option<RailDirectionId>,
    #[serde(rename = "odpt:calendar", default)]
    pub calendar: Option<CalendarId>,
    #[serde(rename = "odpt:train", default)]
    pub train: Option<TrainId>,
    #[serde(rename = "odpt:trainNumber", default)]
    pub train_number: Option<String>,
    #[serde(rename = "odpt:trainType", default)]
    pub train_type: Option<TrainTypeId>,
    #[serde(rename = "odpt:trainName", default)]
    pub train_names: Vec<Multilingual>,
    #[serde(rename = "odpt:trainOwner", default)]
    pub train_owner: Option<TrainOwnerId>,
    #[serde(rename = "odpt:originStation", default)]
    pub origin_stations: Vec<StationId>,
    #[serde(rename = "odpt:destinationStation", default)]
    pub destination_stations: Vec<StationId>,
    #[serde(rename = "odpt:viaStation", default)]
    pub via_stations: Vec<StationId>,
    #[serde(rename = "odpt:viaRailway", default)]
    pub via_railways: Vec<RailwayId>,
    #[serde(rename = "odpt:previousTrainTimetable", default)]
    pub previous_train_timetables: Vec<TrainTimetableId>,
    #[serde(rename = "odpt:nextTrainTimetable", default)]
    pub next_train_timetables: Vec<TrainTimetableId>,
    #[serde(rename = "odpt:trainTimetableObject", default)]
    pub stops: Vec<TrainTimetableObject>,
    #[serde(rename = "odpt:needExtraFee", default)]
    pub need_extra_fee: Option<bool>,
    #[serde(rename = "odpt:note", default)]
    pub note: Option<Multilingual>,
}

/// One stop of a [`TrainTimetable`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainTimetableObject {
    #[serde(rename = "odpt:arrivalTime", default)]
    pub arrival_time: Option<String>,
    #[serde(rename = "odpt:arrivalStation", default)]
    pub arrival_station: Option<StationId>,
    #[serde(rename = "odpt:departureTime", default)]
    pub departure_time: Option<String>,
    #[serde(rename = "odpt:departureStation", default)]
    pub departure_station: Option<StationId>,
    #[serde(rename = "odpt:platformNumber", default)]
    pub platform_number: Option<String>,
    #[serde(rename = "odpt:note", default)]
    pub note: Option<Multilingual>,
}

impl TrainTimetableObject {
    /// The station this stop refers to, whichever side of the stop is given
    pub fn station(&self) -> Option<&StationId> {
        self.departure_station
            .as_ref()
            .or(self.arrival_station.as_ref())
    }
}

/// `odpt:TrainType`, e.g. local or rapid
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainType {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(rename = "owl:sameAs")]
    pub same_as: TrainTypeId,
    #[serde(rename = "dc:title", default)]
    pub title: Option<String>,
    #[serde(rename = "odpt:operator", default)]
    pub operator: Option<OperatorId>,
    #[serde(rename = "odpt:trainTypeTitle", default)]
    pub train_type_title: Option<Multilingual>,
}

/// `odpt:RailDirection`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RailDirection {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(rename = "owl:sameAs")]
    pub same_as: RailDirectionId,
    #[serde(rename = "dc:title", default)]
    pub title: Option<String>,
    #[serde(rename = "odpt:railDirectionTitle", default)]
    pub rail_direction_title: Option<Multilingual>,
}

/// `odpt:Railway`: a line and its ordered stations
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Railway {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(rename = "owl:sameAs")]
    pub same_as: RailwayId,
    #[serde(rename = "dc:title", default)]
    pub title: Option<String>,
    #[serde(rename = "odpt:railwayTitle", default)]
    pub railway_title: Option<Multilingual>,
    #[serde(rename = "odpt:kana", default)]
    pub kana: Option<String>,
    #[serde(rename = "odpt:operator", default)]
    pub operator: Option<OperatorId>,
    #[serde(rename = "odpt:lineCode", default)]
    pub line_code: Option<String>,
    /// Line colour as `#RRGGBB`
    #[serde(rename = "odpt:color", default)]
    pub color: Option<String>,
    #[serde(rename = "ug:region", default)]
    pub region: Option<String>,
    #[serde(rename = "odpt:ascendingRailDirection", default)]
    pub ascending_rail_direction: Option<RailDirectionId>,
    #[serde(rename = "odpt:descendingRailDirection", default)]
    pub descending_rail_direction: Option<RailDirectionId>,
    #[serde(rename = "odpt:stationOrder", default)]
    pub station_order: Vec<StationOrder>,
}

impl Railway {
    pub fn region_url(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Stations sorted by `odpt:index`
    pub fn ordered_stations(&self) -> Vec<&StationId> {
        let mut order: Vec<&StationOrder> = self.station_order.iter().collect();
        order.sort_by_key(|entry| entry.index);
        order.into_iter().map(|entry| &entry.station).collect()
    }

    pub fn display_title(&self) -> &str {
        self.railway_title
            .as_ref()
            .and_then(Multilingual::best)
            .or(self.title.as_deref())
            .unwrap_or_else(|| self.same_as.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StationOrder {
    #[serde(rename = "odpt:index")]
    pub index: u32,
    #[serde(rename = "odpt:station")]
    pub station: StationId,
    #[serde(rename = "odpt:stationTitle", default)]
    pub station_title: Option<Multilingual>,
}

/// `odpt:RailwayFare` between two stations, in yen
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RailwayFare {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(rename = "owl:sameAs")]
    pub same_as: RailwayFareId,
    #[serde(rename = "odpt:operator", default)]
    pub operator: Option<OperatorId>,
    #[serde(rename = "odpt:fromStation")]
    pub from_station: StationId,
    #[serde(rename = "odpt:toStation")]
    pub to_station: StationId,
    #[serde(rename = "odpt:ticketFare", default)]
    pub ticket_fare: Option<u32>,
    #[serde(rename = "odpt:icCardFare", default)]
    pub ic_card_fare: Option<u32>,
    #[serde(rename = "odpt:childTicketFare", default)]
    pub child_ticket_fare: Option<u32>,
    #[serde(rename = "odpt:childIcCardFare", default)]
    pub child_ic_card_fare: Option<u32>,
    #[serde(rename = "odpt:viaStation", default)]
    pub via_stations: Vec<StationId>,
    #[serde(rename = "odpt:viaRailway", default)]
    pub via_railways: Vec<RailwayId>,
    #[serde(rename = "odpt:ticketType", default)]
    pub ticket_type: Option<String>,
}

/// `odpt:PassengerSurvey`: yearly ridership at a station
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PassengerSurvey {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(rename = "owl:sameAs")]
    pub same_as: PassengerSurveyId,
    #[serde(rename = "odpt:operator", default)]
    pub operator: Option<OperatorId>,
    #[serde(rename = "odpt:station", default)]
    pub stations: Vec<StationId>,
    #[serde(rename = "odpt:railway", default)]
    pub railways: Vec<RailwayId>,
    #[serde(rename = "odpt:includeAlighting", default)]
    pub include_alighting: Option<bool>,
    #[serde(rename = "odpt:passengerSurveyObject", default)]
    pub surveys: Vec<PassengerSurveyObject>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PassengerSurveyObject {
    #[serde(rename = "odpt:surveyYear")]
    pub survey_year: i32,
    #[serde(rename = "odpt:passengerJourneys")]
    pub passenger_journeys: u64,
}

/// `odpt:Train`: a live train position
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Train {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(rename = "owl:sameAs")]
    pub same_as: TrainId,
    #[serde(rename = "odpt:operator", default)]
    pub operator: Option<OperatorId>,
    #[serde(rename = "odpt:railway", default)]
    pub railway: Option<RailwayId>,
    #[serde(rename = "odpt:railDirection", default)]
    pub rail_direction: Option<RailDirectionId>,
    #[serde(rename = "odpt:trainNumber", default)]
    pub train_number: Option<String>,
    #[serde(rename = "odpt:trainType", default)]
    pub train_type: Option<TrainTypeId>,
    #[serde(rename = "odpt:trainName", default)]
    pub train_names: Vec<Multilingual>,
    /// Last station passed
    #[serde(rename = "odpt:fromStation", default)]
    pub from_station: Option<StationId>,
    /// Next station, absent while stopped at `from_station`
    #[serde(rename = "odpt:toStation", default)]
    pub to_station: Option<StationId>,
    #[serde(rename = "odpt:originStation", default)]
    pub origin_stations: Vec<StationId>,
    #[serde(rename = "odpt:destinationStation", default)]
    pub destination_stations: Vec<StationId>,
    #[serde(rename = "odpt:viaStation", default)]
    pub via_stations: Vec<StationId>,
    #[serde(rename = "odpt:viaRailway", default)]
    pub via_railways: Vec<RailwayId>,
    #[serde(rename = "odpt:trainOwner", default)]
    pub train_owner: Option<TrainOwnerId>,
    #[serde(rename = "odpt:carComposition", default)]
    pub car_composition: Option<u32>,
    /// Delay in seconds
    #[serde(rename = "odpt:delay", default)]
    pub delay: Option<u32>,
    /// Update interval in seconds
    #[serde(rename = "odpt:frequency", default)]
    pub frequency: Option<u32>,
    #[serde(rename = "odpt:note", default)]
    pub note: Option<Multilingual>,
}

impl Train {
    pub fn is_stopped(&self) -> bool {
        self.from_station.is_some() && self.to_station.is_none()
    }
}

/// `odpt:TrainInformation`: the operating status of a line
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainInformation {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(rename = "owl:sameAs", default)]
    pub same_as: Option<TrainInformationId>,
    #[serde(rename = "odpt:operator")]
    pub operator: OperatorId,
    #[serde(rename = "odpt:railway", default)]
    pub railway: Option<RailwayId>,
    #[serde(rename = "odpt:timeOfOrigin", default)]
    pub time_of_origin: Option<DateTime<FixedOffset>>,
    /// Absent while the line runs normally
    #[serde(rename = "odpt:trainInformationStatus", default)]
    pub status: Option<Multilingual>,
    #[serde(rename = "odpt:trainInformationText", default)]
    pub text: Option<Multilingual>,
    #[serde(rename = "odpt:trainInformationArea", default)]
    pub area: Option<Multilingual>,
    #[serde(rename = "odpt:trainInformationKind", default)]
    pub kind: Option<Multilingual>,
    #[serde(rename = "odpt:trainInformationCause", default)]
    pub cause: Option<Multilingual>,
    #[serde(rename = "odpt:trainInformationRange", default)]
    pub range: Option<Multilingual>,
    #[serde(rename = "odpt:railDirection", default)]
    pub rail_direction: Option<RailDirectionId>,
    #[serde(rename = "odpt:transferRailways", default)]
    pub transfer_railways: Vec<RailwayId>,
    #[serde(rename = "odpt:resumeEstimate", default)]
    pub resume_estimate: Option<DateTime<FixedOffset>>,
}

impl TrainInformation {
    /// Whether the operator reports a disruption
    pub fn is_disrupted(&self) -> bool {
        self.status.as_ref().is_some_and(|status| !status.is_empty())
    }
}
