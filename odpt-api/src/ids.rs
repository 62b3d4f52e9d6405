//! Typed wrappers for ODPT identifiers.
//!
//! Every ODPT record is named by an `owl:sameAs` string such as
//! `odpt.Station:Toei.Asakusa.Asakusabashi`: a kind prefix, a colon, and a
//! dot-separated path whose first segment is usually the operator. Each kind
//! gets its own newtype so a railway cannot be passed where a station is
//! expected.
//!
//! Decoding from JSON is lenient and keeps whatever the API sent; parsing
//! with [`FromStr`] checks the kind prefix.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a string does not carry the expected `odpt.<Kind>:` prefix
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected an `{expected}:` identifier, got `{actual}`")]
pub struct IdError {
    pub expected: &'static str,
    pub actual: String,
}

/// Behaviour shared by every identifier type
pub trait OdptId: AsRef<str> {
    /// The prefix before the colon, e.g. `odpt.Station`
    const KIND: &'static str;

    /// The part after the colon, or the whole string when there is no colon
    fn value(&self) -> &str {
        let id = self.as_ref();
        id.split_once(':').map_or(id, |(_, value)| value)
    }

    /// The dot-separated path segments of [`OdptId::value`]
    fn segments(&self) -> std::str::Split<'_, char> {
        self.value().split('.')
    }

    /// Whether the stored string actually starts with [`OdptId::KIND`]
    fn is_well_formed(&self) -> bool {
        check_kind(self.as_ref(), Self::KIND).is_ok()
    }
}

fn check_kind(id: &str, kind: &'static str) -> Result<(), IdError> {
    match id.strip_prefix(kind).and_then(|rest| rest.strip_prefix(':')) {
        Some(value) if !value.is_empty() => Ok(()),
        _ => Err(IdError {
            expected: kind,
            actual: id.to_string(),
        }),
    }
}

/// Drop the last `n` segments of `id`'s value and re-prefix it with `kind`.
fn parent_id(id: &str, kind: &str, n: usize) -> Option<String> {
    let (_, value) = id.split_once(':')?;
    let segments: Vec<&str> = value.split('.').collect();
    if segments.len() <= n {
        return None;
    }
    Some(format!("{}:{}", kind, segments[..segments.len() - n].join(".")))
}

macro_rules! odpt_id {
    ($($(#[$meta:meta])* $Name:ident => $kind:literal;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
            #[serde(transparent)]
            pub struct $Name(String);

            impl $Name {
                /// Wrap a raw identifier without checking its prefix
                pub fn new(id: impl Into<String>) -> Self {
                    Self(id.into())
                }

                pub fn as_str(&self) -> &str {
                    &self.0
                }

                pub fn into_inner(self) -> String {
                    self.0
                }
            }

            impl OdptId for $Name {
                const KIND: &'static str = $kind;
            }

            impl AsRef<str> for $Name {
                fn as_ref(&self) -> &str {
                    &self.0
                }
            }

            impl fmt::Display for $Name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl FromStr for $Name {
                type Err = IdError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    check_kind(s, $kind)?;
                    Ok(Self(s.to_string()))
                }
            }

            impl From<$Name> for String {
                fn from(id: $Name) -> String {
                    id.0
                }
            }
        )+
    };
}

odpt_id! {
    /// `odpt.Operator:Toei`
    OperatorId => "odpt.Operator";
    /// `odpt.Calendar:Weekday`
    CalendarId => "odpt.Calendar";
    /// `odpt.Railway:Toei.Asakusa`
    RailwayId => "odpt.Railway";
    /// `odpt.RailDirection:Northbound`
    RailDirectionId => "odpt.RailDirection";
    /// `odpt.Station:Toei.Asakusa.Asakusabashi`
    StationId => "odpt.Station";
    StationTimetableId => "odpt.StationTimetable";
    TrainTimetableId => "odpt.TrainTimetable";
    /// `odpt.TrainType:Toei.Local`
    TrainTypeId => "odpt.TrainType";
    /// `odpt.Train:TokyoMetro.Ginza.A1234`
    TrainId => "odpt.Train";
    TrainInformationId => "odpt.TrainInformation";
    TrainOwnerId => "odpt.TrainOwner";
    RailwayFareId => "odpt.RailwayFare";
    PassengerSurveyId => "odpt.PassengerSurvey";
    BusId => "odpt.Bus";
    BusTimetableId => "odpt.BusTimetable";
    /// `odpt.BusroutePattern:Toei.Ko86.1201.1`
    BusroutePatternId => "odpt.BusroutePattern";
    /// `odpt.Busroute:Toei.Ko86`
    BusrouteId => "odpt.Busroute";
    BusroutePatternFareId => "odpt.BusroutePatternFare";
    /// `odpt.BusstopPole:Toei.Shinbashi.1234.1`
    BusstopPoleId => "odpt.BusstopPole";
    BusstopPoleTimetableId => "odpt.BusstopPoleTimetable";
    /// `odpt.Airport:HND`
    AirportId => "odpt.Airport";
    /// `odpt.AirportTerminal:HND.Terminal1`
    AirportTerminalId => "odpt.AirportTerminal";
    FlightScheduleId => "odpt.FlightSchedule";
    /// `odpt.FlightStatus:OnTime`
    FlightStatusId => "odpt.FlightStatus";
    FlightInformationArrivalId => "odpt.FlightInformationArrival";
    FlightInformationDepartureId => "odpt.FlightInformationDeparture";
}

impl StationId {
    /// The railway a station id is nested under:
    /// `odpt.Station:Toei.Asakusa.Asakusabashi` → `odpt.Railway:Toei.Asakusa`
    pub fn railway(&self) -> Option<RailwayId> {
        parent_id(&self.0, RailwayId::KIND, 1).map(RailwayId)
    }

    pub fn operator(&self) -> Option<OperatorId> {
        parent_id(&self.0, OperatorId::KIND, 2).map(OperatorId)
    }
}

impl RailwayId {
    pub fn operator(&self) -> Option<OperatorId> {
        parent_id(&self.0, OperatorId::KIND, 1).map(OperatorId)
    }
}

impl TrainId {
    pub fn railway(&self) -> Option<RailwayId> {
        parent_id(&self.0, RailwayId::KIND, 1).map(RailwayId)
    }
}

impl BusroutePatternId {
    /// The first path segment, which names the bus operator
    pub fn operator(&self) -> Option<OperatorId> {
        let first = self.segments().next().filter(|s| !s.is_empty())?;
        Some(OperatorId(format!("{}:{}", OperatorId::KIND, first)))
    }
}

impl BusstopPoleId {
    pub fn operator(&self) -> Option<OperatorId> {
        let first = self.segments().next().filter(|s| !s.is_empty())?;
        Some(OperatorId(format!("{}:{}", OperatorId::KIND, first)))
    }
}

impl AirportTerminalId {
    /// `odpt.AirportTerminal:HND.Terminal1` → `odpt.Airport:HND`
    pub fn airport(&self) -> Option<AirportId> {
        parent_id(&self.0, AirportId::KIND, 1).map(AirportId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_checks_kind() {
        let station: StationId = "odpt.Station:Toei.Asakusa.Asakusabashi".parse().unwrap();
        assert_eq!(station.value(), "Toei.Asakusa.Asakusabashi");
        assert!(station.is_well_formed());

        let err = "odpt.Railway:Toei.Asakusa".parse::<StationId>().unwrap_err();
        assert_eq!(err.expected, "odpt.Station");
        assert!("odpt.Station:".parse::<StationId>().is_err());
        assert!("odpt.StationTimetable:Toei.X".parse::<StationId>().is_err());
    }

    #[test]
    fn test_segments_and_parents() {
        let station = StationId::new("odpt.Station:Toei.Asakusa.Asakusabashi");
        let segments: Vec<_> = station.segments().collect();
        assert_eq!(segments, ["Toei", "Asakusa", "Asakusabashi"]);

        assert_eq!(
            station.railway(),
            Some(RailwayId::new("odpt.Railway:Toei.Asakusa"))
        );
        assert_eq!(
            station.operator(),
            Some(OperatorId::new("odpt.Operator:Toei"))
        );
        assert_eq!(
            RailwayId::new("odpt.Railway:Toei.Asakusa").operator(),
            Some(OperatorId::new("odpt.Operator:Toei"))
        );
        assert_eq!(
            AirportTerminalId::new("odpt.AirportTerminal:HND.Terminal1").airport(),
            Some(AirportId::new("odpt.Airport:HND"))
        );
        assert_eq!(
            BusstopPoleId::new("odpt.BusstopPole:Toei.Shinbashi.1234.1").operator(),
            Some(OperatorId::new("odpt.Operator:Toei"))
        );
        assert_eq!(StationId::new("odpt.Station:Toei").railway(), None);
    }

    #[test]
    fn test_lenient_deserialize() {
        let id: RailwayId = serde_json::from_str(r#""not-an-odpt-id""#).unwrap();
        assert_eq!(id.as_str(), "not-an-odpt-id");
        assert!(!id.is_well_formed());
        assert_eq!(id.value(), "not-an-odpt-id");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""not-an-odpt-id""#);
    }
}
