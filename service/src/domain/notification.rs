//! [`Notification`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{datetime, define_kind, unit, DateTimeOf};
use derive_more::{AsRef, Display, From, Into};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use xxhash_rust::xxh3;

/// Notification shown to a user.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Notification {
    /// ID of this [`Notification`].
    pub id: Id,

    /// [`Kind`] of this [`Notification`].
    #[serde(rename = "type", default = "info", deserialize_with = "kind")]
    pub kind: Kind,

    /// Title of this [`Notification`].
    #[serde(default)]
    pub title: String,

    /// Message of this [`Notification`].
    #[serde(default)]
    pub message: String,

    /// [`DateTime`] when this [`Notification`] was emitted.
    #[serde(default = "EmissionDateTime::now", with = "datetime::serde::rfc3339")]
    pub time: EmissionDateTime,

    /// Indicator whether this [`Notification`] has been read.
    #[serde(default)]
    pub read: bool,

    /// Arbitrary data attached to this [`Notification`].
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Default [`Kind`] of a [`Notification`].
fn info() -> Kind {
    Kind::Info
}

/// Deserializes a [`Kind`], falling back to [`Kind::Info`] for unknown ones.
fn kind<'de, D>(deserializer: D) -> Result<Kind, D::Error>
where
    D: Deserializer<'de>,
{
    super::lenient(deserializer).map(|k| k.unwrap_or(Kind::Info))
}

/// ID of a [`Notification`].
///
/// Remote [`Notification`]s carry numeric IDs, while local ones are prefixed
/// strings, so both are kept as strings.
#[derive(
    AsRef, Clone, Debug, Display, Eq, From, Hash, Into, PartialEq, Serialize,
)]
#[as_ref(forward)]
pub struct Id(String);

impl Id {
    /// Generates a new unique [`Id`] for a locally emitted [`Notification`].
    #[must_use]
    pub fn local() -> Self {
        Self(format!("local-{}", Uuid::new_v4()))
    }

    /// Indicates whether this [`Id`] belongs to a [`Notification`] unknown to
    /// the remote side (emitted locally or built from an [`Action`]).
    #[must_use]
    pub fn is_local(&self) -> bool {
        self.0.starts_with("local-") || self.0.starts_with("action-")
    }
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Num(u64),
            Str(String),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Num(n) => Self(n.to_string()),
            Repr::Str(s) => Self(s),
        })
    }
}

define_kind! {
    #[doc = "Kind of a [`Notification`]."]
    enum Kind {
        #[doc = "General information."]
        Info,

        #[doc = "New or updated lead."]
        Lead,

        #[doc = "Property listing activity."]
        Property,

        #[doc = "User account activity."]
        User,

        #[doc = "Something requiring attention."]
        Alert,

        #[doc = "Change of some existing entity."]
        Update,
    }
}

/// [`DateTime`] when a [`Notification`] was emitted.
pub type EmissionDateTime = DateTimeOf<(Notification, unit::Emission)>;

/// Read mark of [`Notification`]s.
#[derive(Clone, Copy, Debug)]
pub struct Read;

/// Data of a [`Notification`] emitted locally.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Draft {
    /// [`Id`] to use, generated if [`None`].
    pub id: Option<Id>,

    /// [`Kind`] of the [`Notification`], [`Kind::Info`] if [`None`].
    pub kind: Option<Kind>,

    /// Title of the [`Notification`].
    pub title: String,

    /// Message of the [`Notification`].
    pub message: String,

    /// Emission time, current time if [`None`].
    pub time: Option<EmissionDateTime>,

    /// Data attached to the [`Notification`].
    pub data: Option<serde_json::Value>,
}

impl From<Draft> for Notification {
    fn from(draft: Draft) -> Self {
        let Draft {
            id,
            kind,
            title,
            message,
            time,
            data,
        } = draft;
        Self {
            id: id.unwrap_or_else(Id::local),
            kind: kind.unwrap_or(Kind::Info),
            title,
            message,
            time: time.unwrap_or_else(EmissionDateTime::now),
            read: false,
            data: data.unwrap_or_else(empty_data),
        }
    }
}

/// Returns an empty JSON object.
fn empty_data() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

/// Recent activity record, as reported by admin statistics.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Action {
    /// Kind of this [`Action`].
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    /// Title of this [`Action`].
    #[serde(default)]
    pub title: Option<String>,

    /// Description of this [`Action`].
    #[serde(default)]
    pub description: Option<String>,

    /// Message of this [`Action`], used if there is no description.
    #[serde(default)]
    pub message: Option<String>,

    /// [RFC 3339] time of this [`Action`].
    ///
    /// [RFC 3339]: https://tools.ietf.org/html/rfc3339
    #[serde(default)]
    pub timestamp: Option<String>,

    /// [RFC 3339] time of this [`Action`], used if there is no timestamp.
    ///
    /// [RFC 3339]: https://tools.ietf.org/html/rfc3339
    #[serde(default)]
    pub time: Option<String>,

    /// Data attached to this [`Action`].
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl Action {
    /// Returns a stable [`Id`] of the [`Notification`] describing this
    /// [`Action`].
    ///
    /// The same [`Action`] reported twice results in the same [`Id`].
    #[must_use]
    pub fn id(&self) -> Id {
        use std::hash::{Hash as _, Hasher as _};

        let mut hasher = xxh3::Xxh3Builder::new().build();
        self.kind.hash(&mut hasher);
        self.title.hash(&mut hasher);
        self.description.hash(&mut hasher);
        self.message.hash(&mut hasher);
        self.timestamp.hash(&mut hasher);
        self.time.hash(&mut hasher);
        Id(format!("action-{:016x}", hasher.finish()))
    }
}

impl From<Action> for Notification {
    fn from(action: Action) -> Self {
        let id = action.id();
        let Action {
            kind,
            title,
            description,
            message,
            timestamp,
            time,
            data,
        } = action;

        Self {
            id,
            kind: kind
                .and_then(|k| k.parse().ok())
                .unwrap_or(Kind::Update),
            title: title.unwrap_or_else(|| "Activity Update".to_owned()),
            message: description.or(message).unwrap_or_default(),
            time: timestamp
                .or(time)
                .and_then(|t| EmissionDateTime::from_rfc3339(&t).ok())
                .unwrap_or_else(EmissionDateTime::now),
            read: false,
            data: data.unwrap_or_else(empty_data),
        }
    }
}

#[cfg(test)]
mod spec {
    use super::{Action, Draft, Id, Kind, Notification};

    #[test]
    fn deserializes_numeric_ids_and_unknown_kinds() {
        let n: Notification = serde_json::from_value(serde_json::json!({
            "id": 42,
            "type": "celebration",
            "title": "Hi",
            "time": "2024-03-01T10:00:00Z",
        }))
        .unwrap();

        assert_eq!(n.id, Id::from("42"));
        assert!(!n.id.is_local());
        assert_eq!(n.kind, Kind::Info);
        assert!(!n.read);
    }

    #[test]
    fn serializes_kind_as_type() {
        let n = Notification::from(Draft {
            kind: Some(Kind::Lead),
            title: "New lead".to_owned(),
            ..Draft::default()
        });

        let json = serde_json::to_value(&n).unwrap();

        assert_eq!(json["type"], "lead");
        assert!(n.id.to_string().starts_with("local-"));
        assert!(n.id.is_local());
        assert_eq!(n.data, serde_json::json!({}));
    }

    #[test]
    fn action_falls_back_to_defaults() {
        let action: Action = serde_json::from_value(serde_json::json!({
            "message": "Listing updated",
            "time": "2024-03-01T10:00:00Z",
        }))
        .unwrap();

        let n = Notification::from(action);

        assert_eq!(n.kind, Kind::Update);
        assert_eq!(n.title, "Activity Update");
        assert_eq!(n.message, "Listing updated");
        assert_eq!(n.time.to_rfc3339(), "2024-03-01T10:00:00Z");
    }

    #[test]
    fn action_ids_are_stable() {
        let action = Action {
            title: Some("Property Listed".to_owned()),
            description: Some("Villa".to_owned()),
            ..Action::default()
        };
        let other = Action {
            title: Some("Property Sold".to_owned()),
            ..action.clone()
        };

        assert_eq!(action.id(), action.clone().id());
        assert_ne!(action.id(), other.id());
        assert!(action.id().to_string().starts_with("action-"));
    }
}
