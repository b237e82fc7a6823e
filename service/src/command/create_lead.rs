//! [`Command`] for creating a new [`Lead`].

use common::operations::Insert;
use derive_more::From;
use tracerr::Traced;

use crate::{
    domain::{lead, Lead},
    infra::{api, Api},
    store::mutation,
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Lead`].
#[derive(Clone, Debug, From)]
pub struct CreateLead(pub lead::Draft);

impl<A> Command<CreateLead> for Service<A>
where
    A: Api<Insert<lead::Draft>, Ok = Lead, Err = Traced<api::Error>>,
{
    type Ok = Lead;
    type Err = ExecutionError;

    async fn execute(
        &self,
        CreateLead(draft): CreateLead,
    ) -> Result<Self::Ok, Self::Err> {
        let lead = self
            .track(
                mutation::Kind::CreateLead,
                self.api().execute(Insert(draft)),
            )
            .await
            .map_err(tracerr::wrap!())?;

        self.store().write().await.leads.upsert(lead.clone());

        Ok(lead)
    }
}

/// Error of [`CreateLead`] [`Command`] execution.
pub type ExecutionError = Traced<api::Error>;
