//! [`Command`] for updating an existing [`Agent`].

use common::operations::Update;
use tracerr::Traced;

use crate::{
    domain::{agent, Agent},
    infra::{api, Api},
    store::mutation,
    Service,
};

use super::Command;

/// [`Command`] for updating an existing [`Agent`].
#[derive(Clone, Debug)]
pub struct UpdateAgent {
    /// ID of the [`Agent`] to update.
    pub id: agent::Id,

    /// [`agent::Changes`] to apply.
    pub changes: agent::Changes,
}

impl<A> Command<UpdateAgent> for Service<A>
where
    A: Api<
        Update<(agent::Id, agent::Changes)>,
        Ok = Agent,
        Err = Traced<api::Error>,
    >,
{
    type Ok = Agent;
    type Err = ExecutionError;

    async fn execute(&self, cmd: UpdateAgent) -> Result<Self::Ok, Self::Err> {
        let UpdateAgent { id, changes } = cmd;

        let agent = self
            .track(
                mutation::Kind::UpdateAgent,
                self.api().execute(Update((id, changes))),
            )
            .await
            .map_err(tracerr::wrap!())?;

        self.store().write().await.agents.upsert(agent.clone());

        Ok(agent)
    }
}

/// Error of [`UpdateAgent`] [`Command`] execution.
pub type ExecutionError = Traced<api::Error>;
