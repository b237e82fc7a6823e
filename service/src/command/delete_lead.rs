//! [`Command`] for deleting a [`Lead`].

use common::operations::{By, Delete};
use derive_more::From;
use tracerr::Traced;

use crate::{
    domain::{lead, Lead},
    infra::{api, Api},
    store::mutation,
    Service,
};

use super::Command;

/// [`Command`] for deleting a [`Lead`].
#[derive(Clone, Copy, Debug, From)]
pub struct DeleteLead {
    /// ID of the [`Lead`] to delete.
    pub id: lead::Id,
}

impl<A> Command<DeleteLead> for Service<A>
where
    A: Api<Delete<By<Lead, lead::Id>>, Ok = (), Err = Traced<api::Error>>,
{
    type Ok = ();
    type Err = ExecutionError;

    async fn execute(
        &self,
        DeleteLead { id }: DeleteLead,
    ) -> Result<Self::Ok, Self::Err> {
        self.track(
            mutation::Kind::DeleteLead,
            self.api().execute(Delete(By::<Lead, _>::new(id))),
        )
        .await
        .map_err(tracerr::wrap!())?;

        self.store().write().await.leads.remove(id);

        Ok(())
    }
}

/// Error of [`DeleteLead`] [`Command`] execution.
pub type ExecutionError = Traced<api::Error>;
