//! Tracking of optimistic and remote mutations.

use std::collections::BTreeMap;

use common::define_kind;
use derive_more::Display;

use super::Failure;

/// ID of a single mutation, unique within a [`Registry`].
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Id(u64);

define_kind! {
    #[doc = "Kind of a mutation."]
    enum Kind {
        #[doc = "Creating a property."]
        CreateProperty,

        #[doc = "Updating a property."]
        UpdateProperty,

        #[doc = "Deleting a property."]
        DeleteProperty,

        #[doc = "Creating an agent."]
        CreateAgent,

        #[doc = "Updating an agent."]
        UpdateAgent,

        #[doc = "Deleting an agent."]
        DeleteAgent,

        #[doc = "Activating an agent."]
        ActivateAgent,

        #[doc = "Deactivating an agent."]
        DeactivateAgent,

        #[doc = "Creating a lead."]
        CreateLead,

        #[doc = "Updating a lead."]
        UpdateLead,

        #[doc = "Deleting a lead."]
        DeleteLead,

        #[doc = "Marking a notification as read."]
        MarkNotificationRead,

        #[doc = "Marking all notifications as read."]
        MarkAllNotificationsRead,

        #[doc = "Deleting a notification."]
        DeleteNotification,
    }
}

/// Outcome of a mutation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Mutation is in flight.
    Pending,

    /// Mutation succeeded.
    Succeeded,

    /// Mutation failed.
    ///
    /// Optimistically applied local changes are not rolled back
    /// automatically.
    Failed(Failure),
}

/// Registry of in-flight mutations.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    /// Number of the last issued [`Id`].
    issued: u64,

    /// Mutations in flight.
    pending: BTreeMap<Id, Kind>,
}

impl Registry {
    /// Registers a new pending mutation of the provided [`Kind`].
    pub fn begin(&mut self, kind: Kind) -> Id {
        self.issued += 1;
        let id = Id(self.issued);
        _ = self.pending.insert(id, kind);
        id
    }

    /// Settles the mutation with the provided [`Id`], returning its [`Kind`].
    pub fn settle(&mut self, id: Id) -> Option<Kind> {
        self.pending.remove(&id)
    }

    /// Returns the pending mutations, oldest first.
    pub fn pending(&self) -> impl Iterator<Item = (Id, Kind)> + '_ {
        self.pending.iter().map(|(id, kind)| (*id, *kind))
    }

    /// Indicates whether any mutation of the provided [`Kind`] is pending.
    #[must_use]
    pub fn is_pending(&self, kind: Kind) -> bool {
        self.pending.values().any(|k| *k == kind)
    }
}
