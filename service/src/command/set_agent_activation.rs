//! [`Command`] for activating or deactivating an [`Agent`].

use common::operations::Update;
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::Agent;
use crate::{
    domain::agent::{self, Activation},
    infra::{api, Api},
    store::mutation,
    Service,
};

use super::Command;

/// [`Command`] for activating or deactivating an [`Agent`].
#[derive(Clone, Copy, Debug)]
pub struct SetAgentActivation {
    /// ID of the [`Agent`] to (de)activate.
    pub id: agent::Id,

    /// [`Activation`] to perform.
    pub activation: Activation,
}

impl<A> Command<SetAgentActivation> for Service<A>
where
    A: Api<
        Update<(agent::Id, Activation)>,
        Ok = (),
        Err = Traced<api::Error>,
    >,
{
    type Ok = ();
    type Err = ExecutionError;

    async fn execute(
        &self,
        cmd: SetAgentActivation,
    ) -> Result<Self::Ok, Self::Err> {
        let SetAgentActivation { id, activation } = cmd;

        let kind = match activation {
            Activation::Activate => mutation::Kind::ActivateAgent,
            Activation::Deactivate => mutation::Kind::DeactivateAgent,
        };
        self.track(kind, self.api().execute(Update((id, activation))))
            .await
            .map_err(tracerr::wrap!())?;

        self.store()
            .write()
            .await
            .agents
            .set_active(id, activation.is_active());

        Ok(())
    }
}

/// Error of [`SetAgentActivation`] [`Command`] execution.
pub type ExecutionError = Traced<api::Error>;

#[cfg(test)]
mod spec {
    use common::Handler as _;

    use crate::{
        command::{FetchAgent, FetchAgents},
        domain::{agent, Agent},
        infra::api::fake::{service, Fake},
        store::mutation,
    };

    use super::SetAgentActivation;

    fn agent(id: u64, position: &str) -> Agent {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "first_name": "Tendai",
            "last_name": format!("Agent{id}"),
            "position": position,
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn deactivates_listed_and_selected_agent() {
        let fake = Fake::default();
        fake.state().agents = vec![agent(1, "Sales"), agent(2, "Lettings")];
        let svc = service(&fake);
        assert!(svc.execute(FetchAgents(agent::Filter::All)).await.unwrap());
        _ = svc.execute(FetchAgent { id: 2.into() }).await.unwrap();
        let mut events = svc.subscribe();

        svc.execute(SetAgentActivation {
            id: 2.into(),
            activation: agent::Activation::Deactivate,
        })
        .await
        .unwrap();

        let store = svc.store().read().await;
        assert!(store.agents.list.items()[0].is_active);
        assert!(!store.agents.list.items()[1].is_active);
        assert!(!store.agents.selected.as_ref().unwrap().is_active);
        assert!(!fake.state().agents[1].is_active);
        let Ok(crate::Event::Mutation { kind, .. }) = events.try_recv() else {
            panic!("expected mutation event");
        };
        assert_eq!(kind, mutation::Kind::DeactivateAgent);
    }

    #[tokio::test]
    async fn fetches_by_position() {
        let fake = Fake::default();
        fake.state().agents = vec![agent(1, "Sales"), agent(2, "Lettings")];
        let svc = service(&fake);

        _ = svc
            .execute(FetchAgents(agent::Filter::Position("sales".to_owned())))
            .await
            .unwrap();

        let store = svc.store().read().await;
        assert_eq!(store.agents.list.items().len(), 1);
        assert_eq!(
            store.agents.filter,
            agent::Filter::Position("sales".to_owned()),
        );
    }

    #[tokio::test]
    async fn reports_missing_agent() {
        let fake = Fake::default();
        let svc = service(&fake);

        let err = svc.execute(FetchAgent { id: 9.into() }).await.unwrap_err();

        assert_eq!(err.to_string(), "`Agent(id: 9)` does not exist");
        let store = svc.store().read().await;
        let tracker = &store.agents.details[&agent::Id::from(9)];
        assert_eq!(tracker.error().unwrap().status, Some(404));
    }
}
