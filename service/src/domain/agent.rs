//! [`Agent`] definitions.

use derive_more::{Deref, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

/// Real-estate agent.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Agent {
    /// ID of this [`Agent`].
    pub id: Id,

    /// First name of this [`Agent`].
    #[serde(default)]
    pub first_name: String,

    /// Last name of this [`Agent`].
    #[serde(default)]
    pub last_name: String,

    /// Email of this [`Agent`].
    #[serde(default)]
    pub email: Option<String>,

    /// Office phone of this [`Agent`].
    #[serde(default)]
    pub phone: Option<String>,

    /// Cell phone of this [`Agent`].
    #[serde(default)]
    pub cell_number: Option<String>,

    /// Position of this [`Agent`] in the agency.
    #[serde(default)]
    pub position: Option<String>,

    /// Branch this [`Agent`] works at.
    #[serde(default)]
    pub branch: Option<String>,

    /// Permissions granted to this [`Agent`].
    #[serde(default)]
    pub permissions: Vec<String>,

    /// Indicator whether this [`Agent`] is active.
    #[serde(default = "active")]
    pub is_active: bool,
}

impl Agent {
    /// Returns the full name of this [`Agent`].
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_owned()
    }
}

/// Default of [`Agent::is_active`].
fn active() -> bool {
    true
}

/// ID of an [`Agent`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Id(u64);

/// Selection of [`Agent`]s to fetch.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum Filter {
    /// All the [`Agent`]s.
    #[default]
    All,

    /// Active [`Agent`]s only.
    Active,

    /// Inactive [`Agent`]s only.
    Inactive,

    /// [`Agent`]s holding the provided position.
    Position(String),

    /// [`Agent`]s working at the provided branch.
    Branch(String),
}

impl Filter {
    /// Indicates whether the provided [`Agent`] satisfies this [`Filter`].
    #[must_use]
    pub fn matches(&self, agent: &Agent) -> bool {
        match self {
            Self::All => true,
            Self::Active => agent.is_active,
            Self::Inactive => !agent.is_active,
            Self::Position(p) => agent
                .position
                .as_deref()
                .is_some_and(|ap| ap.eq_ignore_ascii_case(p)),
            Self::Branch(b) => agent
                .branch
                .as_deref()
                .is_some_and(|ab| ab.eq_ignore_ascii_case(b)),
        }
    }
}

/// Activation state change of an [`Agent`].
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Activation {
    /// Activate an [`Agent`].
    #[display("activate")]
    Activate,

    /// Deactivate an [`Agent`].
    #[display("deactivate")]
    Deactivate,
}

impl Activation {
    /// Returns [`Agent::is_active`] value after this [`Activation`].
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Activate)
    }
}

/// Data of a new [`Agent`] to be created.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Draft {
    /// First name of a new [`Agent`].
    pub first_name: String,

    /// Last name of a new [`Agent`].
    pub last_name: String,

    /// Email of a new [`Agent`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Office phone of a new [`Agent`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Cell phone of a new [`Agent`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_number: Option<String>,

    /// Position of a new [`Agent`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    /// Branch of a new [`Agent`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

/// Partial changes of an existing [`Agent`].
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Changes {
    /// New first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// New last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// New email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// New office phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// New cell phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_number: Option<String>,

    /// New position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    /// New branch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

/// Performance statistics of an [`Agent`] (listings, leads, conversions
/// and so on), as reported by the remote side.
#[derive(Clone, Debug, Default, Deref, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Stats(serde_json::Value);
