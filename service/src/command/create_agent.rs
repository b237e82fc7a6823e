//! [`Command`] for creating a new [`Agent`].

use common::operations::Insert;
use derive_more::From;
use tracerr::Traced;

use crate::{
    domain::{agent, Agent},
    infra::{api, Api},
    store::mutation,
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Agent`].
#[derive(Clone, Debug, From)]
pub struct CreateAgent(pub agent::Draft);

impl<A> Command<CreateAgent> for Service<A>
where
    A: Api<Insert<agent::Draft>, Ok = Agent, Err = Traced<api::Error>>,
{
    type Ok = Agent;
    type Err = ExecutionError;

    async fn execute(
        &self,
        CreateAgent(draft): CreateAgent,
    ) -> Result<Self::Ok, Self::Err> {
        let agent = self
            .track(
                mutation::Kind::CreateAgent,
                self.api().execute(Insert(draft)),
            )
            .await
            .map_err(tracerr::wrap!())?;

        self.store().write().await.agents.upsert(agent.clone());

        Ok(agent)
    }
}

/// Error of [`CreateAgent`] [`Command`] execution.
pub type ExecutionError = Traced<api::Error>;
