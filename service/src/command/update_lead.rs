//! [`Command`] for updating an existing [`Lead`].

use common::operations::Update;
use tracerr::Traced;

use crate::{
    domain::{lead, Lead},
    infra::{api, Api},
    store::mutation,
    Service,
};

use super::Command;

/// [`Command`] for updating an existing [`Lead`].
#[derive(Clone, Debug)]
pub struct UpdateLead {
    /// ID of the [`Lead`] to update.
    pub id: lead::Id,

    /// [`lead::Changes`] to apply.
    pub changes: lead::Changes,
}

impl<A> Command<UpdateLead> for Service<A>
where
    A: Api<
        Update<(lead::Id, lead::Changes)>,
        Ok = Lead,
        Err = Traced<api::Error>,
    >,
{
    type Ok = Lead;
    type Err = ExecutionError;

    async fn execute(&self, cmd: UpdateLead) -> Result<Self::Ok, Self::Err> {
        let UpdateLead { id, changes } = cmd;

        let lead = self
            .track(
                mutation::Kind::UpdateLead,
                self.api().execute(Update((id, changes))),
            )
            .await
            .map_err(tracerr::wrap!())?;

        self.store().write().await.leads.upsert(lead.clone());

        Ok(lead)
    }
}

/// Error of [`UpdateLead`] [`Command`] execution.
pub type ExecutionError = Traced<api::Error>;
