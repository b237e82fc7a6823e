//! In-memory [`Api`] implementation for tests.

use std::{
    cell::{RefCell, RefMut},
    collections::VecDeque,
    rc::Rc,
    time::Duration,
};

use common::operations::{By, Delete, Insert, Select, Update};
use serde::{de::DeserializeOwned, Serialize};
use tracerr::Traced;

use crate::{
    domain::{
        agent, lead, notification, property, Agent, Lead, Notification,
        Property,
    },
    infra::{api, Api},
    read::property::list,
    Config, Service,
};

/// State of a [`Fake`] remote side.
#[derive(Debug, Default)]
pub(crate) struct State {
    /// Stored [`Property`]s.
    pub(crate) properties: Vec<Property>,

    /// Stored [`Agent`]s.
    pub(crate) agents: Vec<Agent>,

    /// Stored [`Lead`]s.
    pub(crate) leads: Vec<Lead>,

    /// Stored [`lead::Source`]s.
    pub(crate) sources: Vec<lead::Source>,

    /// Stored [`Notification`]s.
    pub(crate) notifications: Vec<Notification>,

    /// Recent [`notification::Action`]s.
    pub(crate) actions: Vec<notification::Action>,

    /// Names of the performed calls, in order.
    pub(crate) calls: Vec<&'static str>,

    /// Errors to fail the next calls with.
    pub(crate) failures: VecDeque<api::Error>,

    /// Delays of the next calls.
    pub(crate) delays: VecDeque<Duration>,

    /// Last issued ID.
    last_id: u64,
}

/// In-memory [`Api`].
#[derive(Clone, Debug, Default)]
pub(crate) struct Fake(Rc<RefCell<State>>);

impl Fake {
    /// Returns the [`State`] of this [`Fake`].
    pub(crate) fn state(&self) -> RefMut<'_, State> {
        self.0.borrow_mut()
    }

    /// Returns the number of performed calls with the provided `name`.
    pub(crate) fn calls(&self, name: &str) -> usize {
        self.0.borrow().calls.iter().filter(|c| **c == name).count()
    }

    /// Registers a call, applying the scheduled delay and failure.
    async fn call(&self, name: &'static str) -> Result<(), Traced<api::Error>> {
        let (delay, failure) = {
            let mut state = self.state();
            state.calls.push(name);
            (state.delays.pop_front(), state.failures.pop_front())
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        failure.map_or(Ok(()), |e| Err(tracerr::new!(e)))
    }

    /// Issues a new ID, not clashing with the seeded ones.
    fn next_id(&self) -> u64 {
        let mut state = self.state();
        state.last_id += 1;
        1000 + state.last_id
    }
}

/// Builds an entity out of the provided `draft` with the provided `id`.
fn create<T: DeserializeOwned>(id: u64, draft: &impl Serialize) -> T {
    let mut json = serde_json::to_value(draft).unwrap();
    json["id"] = id.into();
    serde_json::from_value(json).unwrap()
}

/// Applies the provided `changes` to the provided `entity`.
fn merge<T: Serialize + DeserializeOwned>(
    entity: &mut T,
    changes: &impl Serialize,
) {
    let mut json = serde_json::to_value(&*entity).unwrap();
    let serde_json::Value::Object(changes) =
        serde_json::to_value(changes).unwrap()
    else {
        panic!("changes must be an object");
    };
    for (k, v) in changes {
        json[k] = v;
    }
    *entity = serde_json::from_value(json).unwrap();
}

impl Api<Select<By<list::Page, list::Selector>>> for Fake {
    type Ok = list::Page;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<list::Page, list::Selector>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call("properties").await?;
        let list::Selector { arguments, filter } = by.into_inner();
        let selected = list::select(
            &self.state().properties,
            &filter.filter,
            filter.sort,
        );
        Ok(list::Page::slice(&selected, arguments))
    }
}

impl Api<Select<By<Option<Property>, property::Id>>> for Fake {
    type Ok = Option<Property>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Property>, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call("property").await?;
        let id = by.into_inner();
        Ok(self.state().properties.iter().find(|p| p.id == id).cloned())
    }
}

impl Api<Insert<property::Draft>> for Fake {
    type Ok = Property;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Insert(draft): Insert<property::Draft>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call("create_property").await?;
        let property: Property = create(self.next_id(), &draft);
        self.state().properties.insert(0, property.clone());
        Ok(property)
    }
}

impl Api<Update<(property::Id, property::Changes)>> for Fake {
    type Ok = Property;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Update((id, changes)): Update<(property::Id, property::Changes)>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call("update_property").await?;
        let mut state = self.state();
        let property = state
            .properties
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| tracerr::new!(api::Error::NotFound))?;
        changes.apply(property);
        Ok(property.clone())
    }
}

impl Api<Delete<By<Property, property::Id>>> for Fake {
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Property, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call("delete_property").await?;
        let id = by.into_inner();
        self.state().properties.retain(|p| p.id != id);
        Ok(())
    }
}

impl Api<Select<By<property::Stats, property::Id>>> for Fake {
    type Ok = property::Stats;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<property::Stats, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call("property_stats").await?;
        let id = by.into_inner();
        Ok(serde_json::from_value(serde_json::json!({"id": id, "views": 7}))
            .unwrap())
    }
}

impl Api<Select<By<Vec<Agent>, agent::Filter>>> for Fake {
    type Ok = Vec<Agent>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Agent>, agent::Filter>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call("agents").await?;
        let filter = by.into_inner();
        Ok(self
            .state()
            .agents
            .iter()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect())
    }
}

impl Api<Select<By<Option<Agent>, agent::Id>>> for Fake {
    type Ok = Option<Agent>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Agent>, agent::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call("agent").await?;
        let id = by.into_inner();
        Ok(self.state().agents.iter().find(|a| a.id == id).cloned())
    }
}

impl Api<Select<By<Vec<Property>, agent::Id>>> for Fake {
    type Ok = Vec<Property>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Property>, agent::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call("agent_properties").await?;
        let id = by.into_inner();
        Ok(self
            .state()
            .properties
            .iter()
            .filter(|p| p.agents.iter().any(|a| a.agent_id == id))
            .cloned()
            .collect())
    }
}

impl Api<Select<By<agent::Stats, agent::Id>>> for Fake {
    type Ok = agent::Stats;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<agent::Stats, agent::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call("agent_stats").await?;
        let id = by.into_inner();
        let listed = self
            .state()
            .properties
            .iter()
            .filter(|p| p.agents.iter().any(|a| a.agent_id == id))
            .count();
        Ok(serde_json::from_value(
            serde_json::json!({"id": id, "properties": listed}),
        )
        .unwrap())
    }
}

impl Api<Insert<agent::Draft>> for Fake {
    type Ok = Agent;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Insert(draft): Insert<agent::Draft>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call("create_agent").await?;
        let agent: Agent = create(self.next_id(), &draft);
        self.state().agents.push(agent.clone());
        Ok(agent)
    }
}

impl Api<Update<(agent::Id, agent::Changes)>> for Fake {
    type Ok = Agent;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Update((id, changes)): Update<(agent::Id, agent::Changes)>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call("update_agent").await?;
        let mut state = self.state();
        let agent = state
            .agents
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| tracerr::new!(api::Error::NotFound))?;
        merge(agent, &changes);
        Ok(agent.clone())
    }
}

impl Api<Update<(agent::Id, agent::Activation)>> for Fake {
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Update((id, activation)): Update<(agent::Id, agent::Activation)>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call("agent_activation").await?;
        for a in self.state().agents.iter_mut().filter(|a| a.id == id) {
            a.is_active = activation.is_active();
        }
        Ok(())
    }
}

impl Api<Delete<By<Agent, agent::Id>>> for Fake {
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Agent, agent::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call("delete_agent").await?;
        let id = by.into_inner();
        self.state().agents.retain(|a| a.id != id);
        Ok(())
    }
}

impl Api<Select<By<Vec<Lead>, lead::Filter>>> for Fake {
    type Ok = Vec<Lead>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Lead>, lead::Filter>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call("leads").await?;
        let lead::Filter { agent } = by.into_inner();
        Ok(self
            .state()
            .leads
            .iter()
            .filter(|l| agent.is_none() || l.agent == agent)
            .cloned()
            .collect())
    }
}

impl Api<Select<By<Vec<lead::Source>, ()>>> for Fake {
    type Ok = Vec<lead::Source>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<lead::Source>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call("lead_sources").await?;
        Ok(self.state().sources.clone())
    }
}

impl Api<Insert<lead::Draft>> for Fake {
    type Ok = Lead;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Insert(draft): Insert<lead::Draft>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call("create_lead").await?;
        let lead: Lead = create(self.next_id(), &draft);
        self.state().leads.push(lead.clone());
        Ok(lead)
    }
}

impl Api<Update<(lead::Id, lead::Changes)>> for Fake {
    type Ok = Lead;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Update((id, changes)): Update<(lead::Id, lead::Changes)>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call("update_lead").await?;
        let mut state = self.state();
        let lead = state
            .leads
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| tracerr::new!(api::Error::NotFound))?;
        merge(lead, &changes);
        Ok(lead.clone())
    }
}

impl Api<Delete<By<Lead, lead::Id>>> for Fake {
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Lead, lead::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call("delete_lead").await?;
        let id = by.into_inner();
        self.state().leads.retain(|l| l.id != id);
        Ok(())
    }
}

impl Api<Select<By<Vec<Notification>, ()>>> for Fake {
    type Ok = Vec<Notification>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Notification>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call("notifications").await?;
        Ok(self.state().notifications.clone())
    }
}

impl Api<Update<By<notification::Read, notification::Id>>> for Fake {
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Update(by): Update<By<notification::Read, notification::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call("mark_read").await?;
        let id = by.into_inner();
        for n in self.state().notifications.iter_mut().filter(|n| n.id == id) {
            n.read = true;
        }
        Ok(())
    }
}

impl Api<Update<By<notification::Read, ()>>> for Fake {
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        _: Update<By<notification::Read, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call("mark_all_read").await?;
        for n in &mut self.state().notifications {
            n.read = true;
        }
        Ok(())
    }
}

impl Api<Delete<By<Notification, notification::Id>>> for Fake {
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Notification, notification::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call("delete_notification").await?;
        let id = by.into_inner();
        self.state().notifications.retain(|n| n.id != id);
        Ok(())
    }
}

impl Api<Select<By<Vec<notification::Action>, ()>>> for Fake {
    type Ok = Vec<notification::Action>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<notification::Action>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call("recent_actions").await?;
        Ok(self.state().actions.clone())
    }
}

/// Creates a new [`Service`] backed by the provided [`Fake`].
pub(crate) fn service(fake: &Fake) -> Service<Fake> {
    Service::new(Config::default(), fake.clone())
}

/// Creates a [`Property`] with the provided parameters.
pub(crate) fn property(id: u64, price: u64, beds: u32) -> Property {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": format!("Listing {id}"),
        "price": price,
        "beds": beds,
        "location": "Borrowdale",
    }))
    .unwrap()
}

/// Creates a [`Notification`] with the provided parameters.
pub(crate) fn notification(id: &str, read: bool) -> Notification {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "type": "lead",
        "title": format!("Notification {id}"),
        "time": "2024-03-01T10:00:00Z",
        "read": read,
    }))
    .unwrap()
}
