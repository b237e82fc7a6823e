//! [`Property`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{datetime, define_kind, unit, DateTimeOf, Money};
use derive_more::{Deref, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

use crate::domain::agent;

/// Property listed for sale, rent or development.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Property {
    /// ID of this [`Property`].
    pub id: Id,

    /// Title of this [`Property`].
    #[serde(default)]
    pub title: String,

    /// Description of this [`Property`].
    #[serde(default)]
    pub description: String,

    /// [`Price`] of this [`Property`].
    ///
    /// Zero means "price on application".
    #[serde(default)]
    pub price: Price,

    /// Free-text location of this [`Property`] (suburb, city).
    #[serde(default)]
    pub location: String,

    /// [`Type`] of this [`Property`].
    #[serde(default, deserialize_with = "super::lenient")]
    pub property_type: Option<Type>,

    /// [`Category`] this [`Property`] is listed in.
    #[serde(default, deserialize_with = "super::lenient")]
    pub category: Option<Category>,

    /// [`Status`] of this [`Property`].
    #[serde(default, deserialize_with = "super::lenient")]
    pub status: Option<Status>,

    /// Number of bedrooms.
    #[serde(default)]
    pub beds: Option<u32>,

    /// Number of bathrooms.
    #[serde(default)]
    pub baths: Option<u32>,

    /// Floor area in square feet.
    #[serde(default)]
    pub sqft: Option<u32>,

    /// Free-text area measurement (`"2 acres"`, for example).
    #[serde(default)]
    pub area_measurement: Option<String>,

    /// Ordered [`Image`]s of this [`Property`].
    #[serde(default)]
    pub images: Vec<Image>,

    /// [`Feature`]s of this [`Property`].
    #[serde(default)]
    pub features: Vec<Feature>,

    /// [`Agents`] responsible for this [`Property`].
    #[serde(default, alias = "property_agents")]
    pub agents: Agents,

    /// Explicit latitude of this [`Property`], if known.
    #[serde(default)]
    pub latitude: Option<f64>,

    /// Explicit longitude of this [`Property`], if known.
    #[serde(default)]
    pub longitude: Option<f64>,

    /// [`DateTime`] when this [`Property`] was created.
    #[serde(default, with = "datetime::serde::rfc3339")]
    pub created_at: CreationDateTime,
}

/// ID of a [`Property`].
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

/// Price of a [`Property`].
pub type Price = Money;

define_kind! {
    #[doc = "Type of a [`Property`]."]
    enum Type {
        #[doc = "Detached house."]
        House,

        #[doc = "Apartment or flat."]
        Apartment,

        #[doc = "Vacant land."]
        Land,

        #[doc = "Commercial premises."]
        Commercial,

        #[doc = "Villa."]
        Villa,
    }
}

define_kind! {
    #[doc = "Listing category of a [`Property`]."]
    enum Category {
        #[doc = "Listed for sale."]
        Sale,

        #[doc = "Listed for rent."]
        Rental,

        #[doc = "Part of a development."]
        Development,
    }
}

define_kind! {
    #[doc = "Market status of a [`Property`]."]
    enum Status {
        #[doc = "Available on the market."]
        Available,

        #[doc = "Under offer."]
        Pending,

        #[doc = "Sold already."]
        Sold,

        #[doc = "Withdrawn from the market."]
        OffMarket,
    }
}

/// [`DateTime`] when a [`Property`] was created.
pub type CreationDateTime = DateTimeOf<(Property, unit::Creation)>;

/// Image of a [`Property`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Image {
    /// URL of this [`Image`].
    #[serde(alias = "image")]
    pub url: String,

    /// Caption of this [`Image`].
    #[serde(default)]
    pub caption: String,

    /// Position of this [`Image`] in a gallery.
    #[serde(default)]
    pub order: u32,
}

/// Feature of a [`Property`] (`"Swimming pool"`, for example).
///
/// Deserializes both from a plain string and from a `{"feature": "..."}`
/// object.
#[derive(
    Clone, Debug, Deserialize, Display, Eq, From, Hash, Into, PartialEq, Serialize,
)]
#[serde(from = "FeatureRepr")]
pub struct Feature(String);

/// Wire representation of a [`Feature`].
#[derive(Deserialize)]
#[serde(untagged)]
enum FeatureRepr {
    /// Plain string.
    Plain(String),

    /// Object wrapping the string.
    Object {
        /// Wrapped [`Feature`] name.
        feature: String,
    },
}

impl From<FeatureRepr> for Feature {
    fn from(repr: FeatureRepr) -> Self {
        match repr {
            FeatureRepr::Plain(f) | FeatureRepr::Object { feature: f } => {
                Self(f)
            }
        }
    }
}

/// Link between a [`Property`] and an [`Agent`] responsible for it.
///
/// [`Agent`]: agent::Agent
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(from = "AgentLinkRepr")]
pub struct AgentLink {
    /// ID of the linked [`Agent`].
    ///
    /// [`Agent`]: agent::Agent
    pub agent_id: agent::Id,

    /// Display name of the linked [`Agent`].
    ///
    /// [`Agent`]: agent::Agent
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Indicator whether the linked [`Agent`] is the primary one.
    ///
    /// [`Agent`]: agent::Agent
    pub is_primary: bool,
}

/// Wire representation of an [`AgentLink`].
#[derive(Deserialize)]
#[serde(untagged)]
enum AgentLinkRepr {
    /// Link embedding the whole [`Agent`](agent::Agent).
    Nested {
        /// Embedded agent.
        agent: NestedAgent,

        /// Primary flag.
        #[serde(default)]
        is_primary: bool,
    },

    /// Flat link, as sent by forms.
    Flat {
        /// ID of the agent.
        agent_id: agent::Id,

        /// Name of the agent.
        #[serde(default)]
        name: String,

        /// Primary flag.
        #[serde(default)]
        is_primary: bool,
    },
}

/// [`Agent`](agent::Agent) embedded into an [`AgentLinkRepr`].
#[derive(Deserialize)]
struct NestedAgent {
    /// ID of the agent.
    id: agent::Id,

    /// Full name of the agent.
    #[serde(default)]
    full_name: String,

    /// First name of the agent.
    #[serde(default)]
    first_name: String,

    /// Last name of the agent.
    #[serde(default)]
    last_name: String,
}

impl From<AgentLinkRepr> for AgentLink {
    fn from(repr: AgentLinkRepr) -> Self {
        match repr {
            AgentLinkRepr::Nested { agent, is_primary } => {
                let name = if agent.full_name.is_empty() {
                    format!("{} {}", agent.first_name, agent.last_name)
                        .trim()
                        .to_owned()
                } else {
                    agent.full_name
                };
                Self {
                    agent_id: agent.id,
                    name,
                    is_primary,
                }
            }
            AgentLinkRepr::Flat {
                agent_id,
                name,
                is_primary,
            } => Self {
                agent_id,
                name,
                is_primary,
            },
        }
    }
}

/// Roster of [`Agent`]s responsible for a [`Property`].
///
/// At most one [`AgentLink`] is primary at any time.
///
/// [`Agent`]: agent::Agent
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(from = "Vec<AgentLink>", into = "Vec<AgentLink>")]
pub struct Agents(Vec<AgentLink>);

impl Agents {
    /// Links the provided [`Agent`] to the [`Property`].
    ///
    /// The first linked [`Agent`] becomes primary. Returns `false` if the
    /// [`Agent`] is linked already.
    ///
    /// [`Agent`]: agent::Agent
    pub fn add(&mut self, agent_id: agent::Id, name: impl Into<String>) -> bool {
        if self.contains(agent_id) {
            return false;
        }
        let is_primary = self.0.is_empty();
        self.0.push(AgentLink {
            agent_id,
            name: name.into(),
            is_primary,
        });
        true
    }

    /// Unlinks the provided [`Agent`] from the [`Property`].
    ///
    /// If the primary [`Agent`] is unlinked, the first remaining one is
    /// promoted. Returns `false` if the [`Agent`] wasn't linked.
    ///
    /// [`Agent`]: agent::Agent
    pub fn remove(&mut self, agent_id: agent::Id) -> bool {
        let Some(pos) = self.0.iter().position(|l| l.agent_id == agent_id)
        else {
            return false;
        };
        let removed = self.0.remove(pos);
        if removed.is_primary {
            if let Some(first) = self.0.first_mut() {
                first.is_primary = true;
            }
        }
        true
    }

    /// Makes the provided [`Agent`] the only primary one.
    ///
    /// Returns `false` if the [`Agent`] isn't linked.
    ///
    /// [`Agent`]: agent::Agent
    pub fn set_primary(&mut self, agent_id: agent::Id) -> bool {
        if !self.contains(agent_id) {
            return false;
        }
        for link in &mut self.0 {
            link.is_primary = link.agent_id == agent_id;
        }
        true
    }

    /// Returns the primary [`AgentLink`], if any.
    #[must_use]
    pub fn primary(&self) -> Option<&AgentLink> {
        self.0.iter().find(|l| l.is_primary)
    }

    /// Indicates whether the provided [`Agent`] is linked.
    ///
    /// [`Agent`]: agent::Agent
    #[must_use]
    pub fn contains(&self, agent_id: agent::Id) -> bool {
        self.0.iter().any(|l| l.agent_id == agent_id)
    }

    /// Returns an iterator over the [`AgentLink`]s.
    pub fn iter(&self) -> impl Iterator<Item = &AgentLink> {
        self.0.iter()
    }

    /// Returns the number of linked [`Agent`]s.
    ///
    /// [`Agent`]: agent::Agent
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Indicates whether no [`Agent`]s are linked.
    ///
    /// [`Agent`]: agent::Agent
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<AgentLink>> for Agents {
    fn from(mut links: Vec<AgentLink>) -> Self {
        let mut seen_primary = false;
        for link in &mut links {
            if link.is_primary && seen_primary {
                link.is_primary = false;
            }
            seen_primary |= link.is_primary;
        }
        Self(links)
    }
}

impl From<Agents> for Vec<AgentLink> {
    fn from(agents: Agents) -> Self {
        agents.0
    }
}

/// Data of a new [`Property`] to be created.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Draft {
    /// Title of a new [`Property`].
    pub title: String,

    /// Description of a new [`Property`].
    pub description: String,

    /// [`Price`] of a new [`Property`].
    pub price: Price,

    /// Location of a new [`Property`].
    pub location: String,

    /// [`Type`] of a new [`Property`].
    pub property_type: Type,

    /// [`Category`] of a new [`Property`].
    pub category: Category,

    /// [`Status`] of a new [`Property`].
    pub status: Status,

    /// Number of bedrooms of a new [`Property`].
    pub beds: Option<u32>,

    /// Number of bathrooms of a new [`Property`].
    pub baths: Option<u32>,

    /// Floor area of a new [`Property`] in square feet.
    pub sqft: Option<u32>,

    /// Free-text area measurement of a new [`Property`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_measurement: Option<String>,

    /// [`Feature`]s of a new [`Property`].
    pub features: Vec<Feature>,

    /// [`Agents`] of a new [`Property`].
    pub agents: Agents,

    /// Explicit latitude of a new [`Property`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// Explicit longitude of a new [`Property`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Partial changes of an existing [`Property`].
///
/// Only the provided fields are sent and applied.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Changes {
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New [`Price`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,

    /// New location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// New [`Type`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<Type>,

    /// New [`Category`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    /// New [`Status`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,

    /// New number of bedrooms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beds: Option<u32>,

    /// New number of bathrooms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baths: Option<u32>,

    /// New floor area in square feet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sqft: Option<u32>,

    /// New [`Feature`]s.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<Feature>>,

    /// New [`Agents`] roster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agents: Option<Agents>,

    /// New explicit latitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// New explicit longitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl Changes {
    /// Indicates whether these [`Changes`] change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Applies these [`Changes`] to the provided [`Property`] in place.
    pub fn apply(&self, property: &mut Property) {
        let Self {
            title,
            description,
            price,
            location,
            property_type,
            category,
            status,
            beds,
            baths,
            sqft,
            features,
            agents,
            latitude,
            longitude,
        } = self;

        if let Some(title) = title {
            property.title.clone_from(title);
        }
        if let Some(description) = description {
            property.description.clone_from(description);
        }
        if let Some(price) = price {
            property.price = *price;
        }
        if let Some(location) = location {
            property.location.clone_from(location);
        }
        if property_type.is_some() {
            property.property_type = *property_type;
        }
        if category.is_some() {
            property.category = *category;
        }
        if status.is_some() {
            property.status = *status;
        }
        if beds.is_some() {
            property.beds = *beds;
        }
        if baths.is_some() {
            property.baths = *baths;
        }
        if sqft.is_some() {
            property.sqft = *sqft;
        }
        if let Some(features) = features {
            property.features.clone_from(features);
        }
        if let Some(agents) = agents {
            property.agents.clone_from(agents);
        }
        if latitude.is_some() {
            property.latitude = *latitude;
        }
        if longitude.is_some() {
            property.longitude = *longitude;
        }
    }
}

/// Minimal snapshot of a [`Property`], enough to list it without fetching.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    /// ID of the [`Property`].
    pub id: Id,

    /// Title of the [`Property`].
    pub title: String,

    /// [`Price`] of the [`Property`].
    pub price: Price,

    /// Location of the [`Property`].
    pub location: String,

    /// Number of bedrooms.
    pub beds: Option<u32>,

    /// Number of bathrooms.
    pub baths: Option<u32>,

    /// Floor area in square feet.
    pub sqft: Option<u32>,

    /// [`Status`] of the [`Property`].
    pub status: Option<Status>,

    /// [`Type`] of the [`Property`].
    pub property_type: Option<Type>,

    /// URL of the first [`Image`] of the [`Property`].
    pub primary_image: Option<String>,
}

impl From<&Property> for Summary {
    fn from(p: &Property) -> Self {
        Self {
            id: p.id,
            title: p.title.clone(),
            price: p.price,
            location: p.location.clone(),
            beds: p.beds,
            baths: p.baths,
            sqft: p.sqft,
            status: p.status,
            property_type: p.property_type,
            primary_image: p.images.first().map(|i| i.url.clone()),
        }
    }
}

/// Statistics of a [`Property`] (views, inquiries and so on), as reported by
/// the remote side.
#[derive(Clone, Debug, Default, Deref, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Stats(serde_json::Value);
