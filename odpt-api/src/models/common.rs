use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

use crate::ids::{CalendarId, OperatorId};

/// JSON-LD members present on every record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(rename = "@context", default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// The record's ucode, e.g. `urn:ucode:_00001C000000000000010000030FD7E5`
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub rdf_type: String,
    /// When the data was generated
    #[serde(rename = "dc:date", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<FixedOffset>>,
    /// Until when live data should be considered current
    #[serde(rename = "dct:valid", default, skip_serializing_if = "Option::is_none")]
    pub valid: Option<DateTime<FixedOffset>>,
}

/// Text keyed by language code (`ja`, `en`, `ko`, `zh-Hans`...).
///
/// The v2 API sends plain strings where v4 sends language maps; a plain
/// string decodes as Japanese.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Multilingual(BTreeMap<String, String>);

impl Multilingual {
    pub fn get(&self, lang: &str) -> Option<&str> {
        self.0.get(lang).map(String::as_str)
    }

    pub fn ja(&self) -> Option<&str> {
        self.get("ja")
    }

    pub fn en(&self) -> Option<&str> {
        self.get("en")
    }

    /// English if present, otherwise Japanese, otherwise any language
    pub fn best(&self) -> Option<&str> {
        self.en()
            .or_else(|| self.ja())
            .or_else(|| self.0.values().next().map(String::as_str))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Multilingual {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<'de> Deserialize<'de> for Multilingual {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Map(BTreeMap<String, String>),
            Plain(String),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Map(map) => Multilingual(map),
            Repr::Plain(text) => Multilingual(BTreeMap::from([("ja".to_string(), text)])),
        })
    }
}

/// `odpt:Operator`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Operator {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(rename = "owl:sameAs")]
    pub same_as: OperatorId,
    #[serde(rename = "dc:title", default)]
    pub title: Option<String>,
    #[serde(rename = "odpt:operatorTitle", default)]
    pub operator_title: Option<Multilingual>,
}

/// `odpt:Calendar`: a named set of service days
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Calendar {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(rename = "owl:sameAs")]
    pub same_as: CalendarId,
    #[serde(rename = "dc:title", default)]
    pub title: Option<String>,
    #[serde(rename = "odpt:calendarTitle", default)]
    pub calendar_title: Option<Multilingual>,
    /// Explicit service dates, `YYYY-MM-DD`
    #[serde(rename = "odpt:day", default)]
    pub days: Vec<String>,
    #[serde(rename = "odpt:duration", default)]
    pub duration: Option<String>,
}
