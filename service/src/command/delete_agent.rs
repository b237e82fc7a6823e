//! [`Command`] for deleting an [`Agent`].

use common::operations::{By, Delete};
use derive_more::From;
use tracerr::Traced;

use crate::{
    domain::{agent, Agent},
    infra::{api, Api},
    store::mutation,
    Service,
};

use super::Command;

/// [`Command`] for deleting an [`Agent`].
#[derive(Clone, Copy, Debug, From)]
pub struct DeleteAgent {
    /// ID of the [`Agent`] to delete.
    pub id: agent::Id,
}

impl<A> Command<DeleteAgent> for Service<A>
where
    A: Api<Delete<By<Agent, agent::Id>>, Ok = (), Err = Traced<api::Error>>,
{
    type Ok = ();
    type Err = ExecutionError;

    async fn execute(
        &self,
        DeleteAgent { id }: DeleteAgent,
    ) -> Result<Self::Ok, Self::Err> {
        self.track(
            mutation::Kind::DeleteAgent,
            self.api().execute(Delete(By::<Agent, _>::new(id))),
        )
        .await
        .map_err(tracerr::wrap!())?;

        self.store().write().await.agents.remove(id);

        Ok(())
    }
}

/// Error of [`DeleteAgent`] [`Command`] execution.
pub type ExecutionError = Traced<api::Error>;
