//! [`Command`] for fetching [`lead::Source`]s.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::lead,
    infra::{api, Api},
    store::{Failure, Resource},
    Service,
};

use super::Command;

/// [`Command`] for fetching all the known [`lead::Source`]s.
#[derive(Clone, Copy, Debug)]
pub struct FetchLeadSources;

impl<A> Command<FetchLeadSources> for Service<A>
where
    A: Api<
        Select<By<Vec<lead::Source>, ()>>,
        Ok = Vec<lead::Source>,
        Err = Traced<api::Error>,
    >,
{
    /// Indicator whether the fetched [`lead::Source`]s were stored, being the
    /// response to the latest request.
    type Ok = bool;
    type Err = ExecutionError;

    async fn execute(&self, _: FetchLeadSources) -> Result<Self::Ok, Self::Err> {
        let ticket = self.store().write().await.leads.sources.begin();

        let res = self
            .api()
            .execute(Select(By::<Vec<lead::Source>, _>::new(())))
            .await
            .map_err(tracerr::wrap!());

        let mut store = self.store().write().await;
        let sources = &mut store.leads.sources;
        let (res, fresh) = match res {
            Ok(items) => (Ok(()), sources.succeed(ticket, items)),
            Err(e) => {
                let fresh = sources.fail(ticket, Failure::from(e.as_ref()));
                (Err(e), fresh)
            }
        };
        drop(store);

        self.report(Resource::LeadSources, &res, fresh);
        res.map(|()| fresh)
    }
}

/// Error of [`FetchLeadSources`] [`Command`] execution.
pub type ExecutionError = Traced<api::Error>;
