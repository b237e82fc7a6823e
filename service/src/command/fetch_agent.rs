//! [`Command`] for fetching a single [`Agent`].

use common::operations::{By, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{agent, Agent},
    infra::{api, Api},
    store::{Event, Failure, Resource},
    Service,
};

use super::Command;

/// [`Command`] for fetching a single [`Agent`] and selecting it.
#[derive(Clone, Copy, Debug, From)]
pub struct FetchAgent {
    /// ID of the [`Agent`] to fetch.
    pub id: agent::Id,
}

impl<A> Command<FetchAgent> for Service<A>
where
    A: Api<
        Select<By<Option<Agent>, agent::Id>>,
        Ok = Option<Agent>,
        Err = Traced<api::Error>,
    >,
{
    type Ok = Agent;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        FetchAgent { id }: FetchAgent,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let ticket = self
            .store()
            .write()
            .await
            .agents
            .details
            .entry(id)
            .or_default()
            .begin();

        let res = self
            .api()
            .execute(Select(By::<Option<Agent>, _>::new(id)))
            .await;

        let mut store = self.store().write().await;
        let agents = &mut store.agents;
        let tracker = agents.details.entry(id).or_default();
        match res {
            Ok(Some(agent)) => {
                if tracker.succeed(ticket) {
                    agents.selected = Some(agent.clone());
                    agents.upsert(agent.clone());
                    drop(store);
                    self.emit(Event::Loaded(Resource::Agent));
                }
                Ok(agent)
            }
            Ok(None) => {
                let failure = Failure::from(&api::Error::NotFound);
                if tracker.fail(ticket, failure.clone()) {
                    drop(store);
                    self.emit(Event::Failed(Resource::Agent, failure));
                }
                Err(tracerr::new!(E::AgentNotExists(id)))
            }
            Err(e) => {
                let failure = Failure::from(e.as_ref());
                if tracker.fail(ticket, failure.clone()) {
                    drop(store);
                    log::warn!("failed to fetch `Agent(id: {id})`: {e}");
                    self.emit(Event::Failed(Resource::Agent, failure));
                }
                Err(e).map_err(tracerr::map_from_and_wrap!(=> E))
            }
        }
    }
}

/// Error of [`FetchAgent`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Api`] error.
    #[display("`Api` operation failed: {_0}")]
    Api(api::Error),

    /// [`Agent`] doesn't exist.
    #[display("`Agent(id: {_0})` does not exist")]
    #[from(ignore)]
    AgentNotExists(#[error(not(source))] agent::Id),
}
