//! [`Lead`] definitions.

use std::collections::HashSet;

#[cfg(doc)]
use common::DateTime;
use common::{datetime, define_kind, unit, DateTimeOf};
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

#[cfg(doc)]
use crate::domain::Property;
use crate::domain::{agent, property};

/// Sales lead: a prospective client interested in a [`Property`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Lead {
    /// ID of this [`Lead`].
    pub id: Id,

    /// Name of the contact person.
    #[serde(default)]
    pub contact_name: String,

    /// Email of the contact person.
    #[serde(default)]
    pub contact_email: Option<String>,

    /// Phone of the contact person.
    #[serde(default)]
    pub contact_phone: Option<String>,

    /// [`Status`] of this [`Lead`].
    #[serde(default, deserialize_with = "super::lenient")]
    pub status: Option<Status>,

    /// [`Source`] this [`Lead`] came from.
    #[serde(default, deserialize_with = "super::reference")]
    pub source: Option<SourceId>,

    /// [`Property`] this [`Lead`] is interested in.
    #[serde(default, deserialize_with = "super::reference")]
    pub property: Option<property::Id>,

    /// [`Agent`] handling this [`Lead`].
    ///
    /// [`Agent`]: agent::Agent
    #[serde(default, deserialize_with = "super::reference")]
    pub agent: Option<agent::Id>,

    /// Free-text notes.
    #[serde(default)]
    pub notes: String,

    /// [`DateTime`] when this [`Lead`] was created.
    #[serde(default, with = "datetime::serde::rfc3339")]
    pub created_at: CreationDateTime,
}

impl Lead {
    /// Indicates whether this [`Lead`] is orphaned: it references no
    /// [`Property`] at all, or one of the provided `deleted` ones.
    #[must_use]
    pub fn is_orphaned(&self, deleted: &HashSet<property::Id>) -> bool {
        self.property.map_or(true, |id| deleted.contains(&id))
    }
}

/// Returns [`Lead`]s orphaned by the provided `deleted` [`Property`]s.
pub fn orphaned<'l>(
    leads: &'l [Lead],
    deleted: &'l HashSet<property::Id>,
) -> impl Iterator<Item = &'l Lead> {
    leads.iter().filter(move |l| l.is_orphaned(deleted))
}

/// ID of a [`Lead`].
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

define_kind! {
    #[doc = "Status of a [`Lead`] in the sales funnel."]
    enum Status {
        #[doc = "Just received."]
        New,

        #[doc = "Contacted by an agent."]
        Contacted,

        #[doc = "Qualified as a serious prospect."]
        Qualified,

        #[doc = "Converted into a deal."]
        Converted,

        #[doc = "Lost."]
        Lost,
    }
}

/// [`DateTime`] when a [`Lead`] was created.
pub type CreationDateTime = DateTimeOf<(Lead, unit::Creation)>;

/// Channel a [`Lead`] came from (website, referral and so on).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Source {
    /// ID of this [`Source`].
    pub id: SourceId,

    /// Name of this [`Source`].
    #[serde(default)]
    pub name: String,
}

/// ID of a [`Source`].
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
pub struct SourceId(u64);

/// Selection of [`Lead`]s to fetch.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Filter {
    /// [`Agent`] to fetch the [`Lead`]s of, if any.
    ///
    /// [`Agent`]: agent::Agent
    pub agent: Option<agent::Id>,
}

/// Data of a new [`Lead`] to be created.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Draft {
    /// Name of the contact person.
    pub contact_name: String,

    /// Email of the contact person.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,

    /// Phone of the contact person.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,

    /// Initial [`Status`].
    pub status: Status,

    /// [`Source`] of a new [`Lead`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceId>,

    /// [`Property`] a new [`Lead`] is interested in.
    pub property: property::Id,

    /// [`Agent`] handling a new [`Lead`].
    ///
    /// [`Agent`]: agent::Agent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<agent::Id>,

    /// Free-text notes.
    pub notes: String,
}

/// Partial changes of an existing [`Lead`].
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Changes {
    /// New [`Status`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,

    /// New notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// New contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,

    /// New contact phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,

    /// New [`Agent`] handling the [`Lead`].
    ///
    /// [`Agent`]: agent::Agent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<agent::Id>,
}

#[cfg(test)]
mod spec {
    use std::collections::HashSet;

    use super::{orphaned, property, Lead, SourceId, Status};

    fn lead(id: u64, property: serde_json::Value) -> Lead {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "contact_name": "Chipo",
            "status": "contacted",
            "source": {"id": 2, "name": "Website"},
            "property": property,
        }))
        .unwrap()
    }

    #[test]
    fn accepts_embedded_and_bare_references() {
        let bare = lead(1, serde_json::json!(10));
        let embedded = lead(2, serde_json::json!({"id": 10, "title": "x"}));

        assert_eq!(bare.property, Some(property::Id::from(10)));
        assert_eq!(embedded.property, bare.property);
        assert_eq!(bare.source, Some(SourceId::from(2)));
        assert_eq!(bare.status, Some(Status::Contacted));
    }

    #[test]
    fn detects_orphans() {
        let leads = vec![
            lead(1, serde_json::json!(10)),
            lead(2, serde_json::json!(11)),
            lead(3, serde_json::Value::Null),
        ];
        let deleted = HashSet::from([property::Id::from(11)]);

        let orphans = orphaned(&leads, &deleted)
            .map(|l| u64::from(l.id))
            .collect::<Vec<_>>();

        assert_eq!(orphans, vec![2, 3]);
    }
}
