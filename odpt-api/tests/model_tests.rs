use chrono::{Datelike, Timelike};
use odpt_api::ids::{OdptId, RailwayId, StationId};
use odpt_api::models::*;
use serde_json::json;

#[test]
fn test_station_record() {
    let station: Station = serde_json::from_value(json!({
        "@context": "http://vocab.odpt.org/context_odpt_Station.jsonld",
        "@id": "urn:ucode:_00001C000000000000010000030FD7E5",
        "@type": "odpt:Station",
        "dc:date": "2019-04-01T00:00:00+09:00",
        "owl:sameAs": "odpt.Station:TokyoMetro.Ginza.Ueno",
        "dc:title": "上野",
        "odpt:stationTitle": {"ja": "上野", "en": "Ueno", "ko": "우에노"},
        "odpt:operator": "odpt.Operator:TokyoMetro",
        "odpt:railway": "odpt.Railway:TokyoMetro.Ginza",
        "odpt:stationCode": "G-16",
        "geo:long": 139.777043,
        "geo:lat": 35.711174,
        "ug:region": "https://api.odpt.org/api/v4/geojson/odpt.Station:TokyoMetro.Ginza.Ueno.geojson",
        "odpt:connectingRailway": [
            "odpt.Railway:TokyoMetro.Hibiya",
            "odpt.Railway:JR-East.Yamanote"
        ],
        "odpt:exit": ["odpt.StationFacility:TokyoMetro.Ueno.Outside.Exit1"]
    }))
    .unwrap();

    assert_eq!(station.display_title(), "Ueno");
    assert_eq!(station.location(), Some((139.777043, 35.711174)));
    assert_eq!(station.connecting_railways.len(), 2);
    assert!(station.region_url().unwrap().ends_with(".geojson"));
    assert_eq!(
        station.same_as.railway(),
        Some(RailwayId::new("odpt.Railway:TokyoMetro.Ginza"))
    );

    let date = station.meta().date.unwrap();
    assert_eq!(date.year(), 2019);
    assert_eq!(date.offset().local_minus_utc(), 9 * 3600);
}

#[test]
fn test_station_without_optional_members() {
    let station: Station = serde_json::from_value(json!({
        "@id": "urn:ucode:_00001C0000000000000100000300000A",
        "@type": "odpt:Station",
        "owl:sameAs": "odpt.Station:Toei.Oedo.Tochomae"
    }))
    .unwrap();

    assert_eq!(station.display_title(), "odpt.Station:Toei.Oedo.Tochomae");
    assert_eq!(station.location(), None);
    assert!(station.exits.is_empty());
    assert!(station.meta.date.is_none());
}

#[test]
fn test_railway_station_order() {
    let railway: Railway = serde_json::from_value(json!({
        "@id": "urn:ucode:_00001C000000000000010000030C46B4",
        "@type": "odpt:Railway",
        "owl:sameAs": "odpt.Railway:Toei.Asakusa",
        "dc:title": "浅草",
        "odpt:railwayTitle": {"ja": "浅草線", "en": "Asakusa Line"},
        "odpt:operator": "odpt.Operator:Toei",
        "odpt:lineCode": "A",
        "odpt:color": "#E85298",
        "odpt:stationOrder": [
            {"odpt:index": 3, "odpt:station": "odpt.Station:Toei.Asakusa.Togoshi"},
            {"odpt:index": 1, "odpt:station": "odpt.Station:Toei.Asakusa.NishiMagome"},
            {"odpt:index": 2, "odpt:station": "odpt.Station:Toei.Asakusa.Magome",
             "odpt:stationTitle": {"ja": "馬込", "en": "Magome"}}
        ]
    }))
    .unwrap();

    let ordered: Vec<&str> = railway
        .ordered_stations()
        .into_iter()
        .map(StationId::as_str)
        .collect();
    assert_eq!(
        ordered,
        vec![
            "odpt.Station:Toei.Asakusa.NishiMagome",
            "odpt.Station:Toei.Asakusa.Magome",
            "odpt.Station:Toei.Asakusa.Togoshi",
        ]
    );
    assert_eq!(railway.display_title(), "Asakusa Line");
    assert_eq!(railway.color.as_deref(), Some("#E85298"));
}

#[test]
fn test_train_information_disruption() {
    let info: TrainInformation = serde_json::from_value(json!({
        "@id": "urn:ucode:_00001C000000000000010000030C3BE5",
        "@type": "odpt:TrainInformation",
        "dc:date": "2024-05-20T08:15:00+09:00",
        "dct:valid": "2024-05-20T08:20:00+09:00",
        "owl:sameAs": "odpt.TrainInformation:JR-East.ChuoRapid",
        "odpt:operator": "odpt.Operator:JR-East",
        "odpt:railway": "odpt.Railway:JR-East.ChuoRapid",
        "odpt:timeOfOrigin": "2024-05-20T07:58:00+09:00",
        "odpt:trainInformationStatus": {"ja": "運転見合わせ", "en": "Operation suspended"},
        "odpt:trainInformationText": {
            "ja": "人身事故の影響で、運転を見合わせています。",
            "en": "Service is suspended due to an accident."
        },
        "odpt:trainInformationCause": {"ja": "人身事故"}
    }))
    .unwrap();

    assert!(info.is_disrupted());
    assert_eq!(
        info.status.as_ref().and_then(|s| s.best()),
        Some("Operation suspended")
    );
    assert_eq!(info.cause.as_ref().and_then(|c| c.en()), None);

    let valid = info.meta.valid.unwrap();
    assert_eq!((valid.hour(), valid.minute()), (8, 20));
}

#[test]
fn test_multilingual_plain_string_is_japanese() {
    let text: Multilingual = serde_json::from_value(json!("平常運転")).unwrap();
    assert_eq!(text.ja(), Some("平常運転"));
    assert_eq!(text.en(), None);
    assert_eq!(text.best(), Some("平常運転"));

    let map: Multilingual = [("zh-Hans", "上野")].into_iter().collect();
    assert_eq!(map.best(), Some("上野"));
}

#[test]
fn test_station_timetable() {
    let timetable: StationTimetable = serde_json::from_value(json!({
        "@id": "urn:ucode:_00001C000000000000010000030E0F2A",
        "@type": "odpt:StationTimetable",
        "owl:sameAs": "odpt.StationTimetable:TokyoMetro.Ginza.Ueno.Asakusa.Weekday",
        "odpt:operator": "odpt.Operator:TokyoMetro",
        "odpt:railway": "odpt.Railway:TokyoMetro.Ginza",
        "odpt:station": "odpt.Station:TokyoMetro.Ginza.Ueno",
        "odpt:railDirection": "odpt.RailDirection:TokyoMetro.Asakusa",
        "odpt:calendar": "odpt.Calendar:Weekday",
        "odpt:stationTimetableObject": [
            {
                "odpt:departureTime": "05:01",
                "odpt:destinationStation": ["odpt.Station:TokyoMetro.Ginza.Asakusa"],
                "odpt:trainType": "odpt.TrainType:TokyoMetro.Local"
            },
            {
                "odpt:departureTime": "24:12",
                "odpt:destinationStation": ["odpt.Station:TokyoMetro.Ginza.Asakusa"],
                "odpt:isLast": true
            }
        ]
    }))
    .unwrap();

    assert_eq!(timetable.entries.len(), 2);
    assert_eq!(timetable.entries[1].departure_time.as_deref(), Some("24:12"));
    assert_eq!(timetable.entries[1].is_last, Some(true));
    assert_eq!(timetable.entries[0].is_last, None);
}

#[test]
fn test_train_position() {
    let train: Train = serde_json::from_value(json!({
        "@id": "urn:ucode:_00001C000000000000010000031A4D11",
        "@type": "odpt:Train",
        "owl:sameAs": "odpt.Train:TokyoMetro.Marunouchi.A1234",
        "odpt:railway": "odpt.Railway:TokyoMetro.Marunouchi",
        "odpt:trainNumber": "A1234",
        "odpt:fromStation": "odpt.Station:TokyoMetro.Marunouchi.Tokyo",
        "odpt:delay": 120
    }))
    .unwrap();

    assert!(train.is_stopped());
    assert_eq!(train.delay, Some(120));
    assert_eq!(
        train.same_as.railway(),
        Some(RailwayId::new("odpt.Railway:TokyoMetro.Marunouchi"))
    );
}

#[test]
fn test_busstop_pole_localized_title() {
    let pole: BusstopPole = serde_json::from_value(json!({
        "@id": "urn:ucode:_00001C00000000000001000003100B4C",
        "@type": "odpt:BusstopPole",
        "owl:sameAs": "odpt.BusstopPole:Toei.Shinjukueki.1.3",
        "dc:title": "新宿駅西口",
        "title": {"ja": "新宿駅西口", "en": "Shinjuku Sta. West Exit"},
        "odpt:kana": "しんじゅくえきにしぐち",
        "odpt:operator": ["odpt.Operator:Toei"],
        "odpt:busstopPoleNumber": "3",
        "geo:long": 139.6989,
        "geo:lat": 35.6906
    }))
    .unwrap();

    assert_eq!(pole.display_title(), "Shinjuku Sta. West Exit");
    assert!(pole.same_as.is_well_formed());
    assert_eq!(
        pole.same_as.operator().map(String::from).as_deref(),
        Some("odpt.Operator:Toei")
    );
    assert!(pole.location().is_some());
}

#[test]
fn test_flight_schedule() {
    let schedule: FlightSchedule = serde_json::from_value(json!({
        "@id": "urn:ucode:_00001C000000000000010000031B0001",
        "@type": "odpt:FlightSchedule",
        "owl:sameAs": "odpt.FlightSchedule:HND-TIAT.HND.CTS.Weekday",
        "odpt:operator": "odpt.Operator:HND-TIAT",
        "odpt:calendar": "odpt.Calendar:Weekday",
        "odpt:originAirport": "odpt.Airport:HND",
        "odpt:destinationAirport": "odpt.Airport:CTS",
        "odpt:flightScheduleObject": [{
            "odpt:airline": "odpt.Operator:JAL",
            "odpt:flightNumber": ["JL501", "AA5801"],
            "odpt:originTime": "06:30",
            "odpt:destinationTime": "08:05",
            "odpt:isValidFrom": "2024-03-31",
            "odpt:isValidTo": "2024-10-26"
        }]
    }))
    .unwrap();

    assert_eq!(schedule.flights.len(), 1);
    let flight = &schedule.flights[0];
    assert_eq!(flight.flight_numbers, vec!["JL501", "AA5801"]);
    assert_eq!(flight.origin_day_difference, None);
    assert!(flight.via_airports.is_empty());
}

#[test]
fn test_rdf_types() {
    assert_eq!(Station::RDF_TYPE, "odpt:Station");
    assert_eq!(BusstopPoleTimetable::RDF_TYPE, "odpt:BusstopPoleTimetable");
    assert_eq!(
        FlightInformationDeparture::RDF_TYPE,
        "odpt:FlightInformationDeparture"
    );
}

#[test]
fn test_missing_same_as_is_rejected() {
    let result = serde_json::from_value::<Railway>(json!({
        "@id": "urn:ucode:_00001C000000000000010000030C46B4",
        "@type": "odpt:Railway"
    }));
    assert!(result.is_err());
}
