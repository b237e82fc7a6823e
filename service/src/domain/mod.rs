//! Domain definitions.

pub mod agent;
pub mod lead;
pub mod notification;
pub mod property;

use std::str::FromStr;

use serde::{Deserialize, Deserializer};

pub use self::{
    agent::Agent, lead::Lead, notification::Notification, property::Property,
};

/// Deserializes an optional kind, treating unknown values as [`None`].
///
/// Remote side may introduce new kinds at any time, so a single unknown value
/// must not fail the whole collection.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .and_then(|s| s.trim().replace('_', "-").parse().ok()))
}

/// Reference to another entity, sent either as a bare ID or as the whole
/// embedded entity.
#[derive(Deserialize)]
#[serde(untagged)]
enum Reference<Id> {
    /// Bare ID.
    Id(Id),

    /// Embedded entity.
    Embedded {
        /// ID of the embedded entity.
        id: Id,
    },
}

impl<Id> Reference<Id> {
    /// Returns the referenced ID.
    fn into_id(self) -> Id {
        match self {
            Self::Id(id) | Self::Embedded { id } => id,
        }
    }
}

/// Deserializes an optional [`Reference`] into its ID.
fn reference<'de, D, Id>(deserializer: D) -> Result<Option<Id>, D::Error>
where
    D: Deserializer<'de>,
    Id: Deserialize<'de>,
{
    Ok(Option::<Reference<Id>>::deserialize(deserializer)?
        .map(Reference::into_id))
}
