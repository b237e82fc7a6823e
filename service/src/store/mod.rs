//! Owned client-side state of the [`Service`].
//!
//! [`Service`]: crate::Service

mod collection;
pub mod mutation;
mod notifications;
mod properties;
mod saves;

use std::collections::HashMap;

use common::define_kind;

use crate::{
    domain::{agent, lead, Agent, Lead, Property},
    read::property::list,
};

pub use self::{
    collection::{Collection, Failure, Status, Ticket, Tracker},
    notifications::{FetchDateTime, Notifications},
    properties::Properties,
    saves::{SaveDateTime, Saved, Saves, ViewDateTime, Viewed},
};

/// Whole client-side state.
#[derive(Debug)]
pub struct Store {
    /// [`Properties`] state.
    pub properties: Properties,

    /// [`Agents`] state.
    pub agents: Agents,

    /// [`Leads`] state.
    pub leads: Leads,

    /// [`Notifications`] state.
    pub notifications: Notifications,

    /// [`Saves`] state.
    pub saves: Saves,

    /// Mutations in flight.
    pub mutations: mutation::Registry,
}

impl Store {
    /// Creates a new empty [`Store`] starting [`Properties`] pagination with
    /// the provided [`list::Arguments`].
    #[must_use]
    pub fn new(arguments: list::Arguments) -> Self {
        Self {
            properties: Properties::new(arguments),
            agents: Agents::default(),
            leads: Leads::default(),
            notifications: Notifications::default(),
            saves: Saves::default(),
            mutations: mutation::Registry::default(),
        }
    }
}

/// State of [`Agent`]s.
#[derive(Debug, Default)]
pub struct Agents {
    /// Loaded [`Agent`]s.
    pub list: Collection<Agent>,

    /// [`agent::Filter`] the [`Agents::list`] was loaded with.
    pub filter: agent::Filter,

    /// Currently selected [`Agent`].
    pub selected: Option<Agent>,

    /// Single [`Agent`] requests, tracked separately.
    pub details: HashMap<agent::Id, Tracker>,

    /// [`Property`]s each [`Agent`] is responsible for, fetched so far.
    pub properties: HashMap<agent::Id, Vec<Property>>,

    /// [`agent::Stats`] fetched so far.
    pub stats: HashMap<agent::Id, agent::Stats>,
}

impl Agents {
    /// Puts the provided [`Agent`] into the list (replacing the one with the
    /// same ID, or appending) and into the selection if it's selected.
    pub fn upsert(&mut self, agent: Agent) {
        if let Some(selected) =
            self.selected.as_mut().filter(|s| s.id == agent.id)
        {
            selected.clone_from(&agent);
        }
        let items = self.list.items_mut();
        if let Some(existing) = items.iter_mut().find(|a| a.id == agent.id) {
            *existing = agent;
        } else {
            items.push(agent);
        }
    }

    /// Removes the [`Agent`] with the provided ID.
    pub fn remove(&mut self, id: agent::Id) {
        self.list.items_mut().retain(|a| a.id != id);
        if self.selected.as_ref().is_some_and(|a| a.id == id) {
            self.selected = None;
        }
        _ = self.details.remove(&id);
        _ = self.properties.remove(&id);
        _ = self.stats.remove(&id);
    }

    /// Sets activity of the [`Agent`] with the provided ID.
    pub fn set_active(&mut self, id: agent::Id, is_active: bool) {
        let listed = self.list.items_mut().iter_mut();
        for a in listed.chain(self.selected.as_mut()).filter(|a| a.id == id) {
            a.is_active = is_active;
        }
    }
}

/// State of [`Lead`]s.
#[derive(Debug, Default)]
pub struct Leads {
    /// Loaded [`Lead`]s.
    pub list: Collection<Lead>,

    /// [`lead::Filter`] the [`Leads::list`] was loaded with.
    pub filter: lead::Filter,

    /// Loaded [`lead::Source`]s.
    pub sources: Collection<lead::Source>,
}

impl Leads {
    /// Puts the provided [`Lead`] into the list, replacing the one with the
    /// same ID, or prepending.
    pub fn upsert(&mut self, lead: Lead) {
        let items = self.list.items_mut();
        if let Some(existing) = items.iter_mut().find(|l| l.id == lead.id) {
            *existing = lead;
        } else {
            items.insert(0, lead);
        }
    }

    /// Removes the [`Lead`] with the provided ID.
    pub fn remove(&mut self, id: lead::Id) {
        self.list.items_mut().retain(|l| l.id != id);
    }
}

define_kind! {
    #[doc = "Remote resource loaded into the [`Store`]."]
    enum Resource {
        #[doc = "Page of properties."]
        Properties,

        #[doc = "Single property."]
        Property,

        #[doc = "Statistics of a property."]
        PropertyStats,

        #[doc = "List of agents."]
        Agents,

        #[doc = "Single agent."]
        Agent,

        #[doc = "Properties an agent is responsible for."]
        AgentProperties,

        #[doc = "Statistics of an agent."]
        AgentStats,

        #[doc = "List of leads."]
        Leads,

        #[doc = "List of lead sources."]
        LeadSources,

        #[doc = "List of notifications."]
        Notifications,

        #[doc = "Recent activity."]
        RecentActions,
    }
}

/// Event of a [`Store`] change, broadcast to subscribers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    /// [`Resource`] was loaded successfully.
    Loaded(Resource),

    /// [`Resource`] failed to load.
    Failed(Resource, Failure),

    /// Mutation changed its [`mutation::Outcome`].
    Mutation {
        /// ID of the mutation.
        id: mutation::Id,

        /// Kind of the mutation.
        kind: mutation::Kind,

        /// New outcome of the mutation.
        outcome: mutation::Outcome,
    },
}

#[cfg(test)]
mod spec {
    use crate::domain::{agent, Agent};

    use super::Agents;

    fn agent(id: u64) -> Agent {
        serde_json::from_value(serde_json::json!({"id": id})).unwrap()
    }

    #[test]
    fn agents_upsert_and_activation() {
        let mut agents = Agents::default();
        agents.upsert(agent(1));
        agents.upsert(agent(2));
        agents.selected = Some(agent(2));

        agents.set_active(agent::Id::from(2), false);

        assert_eq!(agents.list.items().len(), 2);
        assert!(!agents.list.items()[1].is_active);
        assert!(!agents.selected.as_ref().unwrap().is_active);

        let mut renamed = agent(2);
        renamed.first_name = "Rudo".to_owned();
        agents.upsert(renamed);
        assert_eq!(agents.list.items().len(), 2);
        assert_eq!(agents.selected.as_ref().unwrap().first_name, "Rudo");

        agents.remove(agent::Id::from(2));
        assert!(agents.selected.is_none());
        assert_eq!(agents.list.items().len(), 1);
    }
}
