//! [`Command`] for fetching [`Lead`]s.

use common::operations::{By, Select};
use derive_more::From;
use tracerr::Traced;

use crate::{
    domain::{lead, Lead},
    infra::{api, Api},
    store::{Failure, Resource},
    Service,
};

use super::Command;

/// [`Command`] for fetching [`Lead`]s, optionally of a single agent only.
#[derive(Clone, Copy, Debug, Default, From)]
pub struct FetchLeads(pub lead::Filter);

impl<A> Command<FetchLeads> for Service<A>
where
    A: Api<
        Select<By<Vec<Lead>, lead::Filter>>,
        Ok = Vec<Lead>,
        Err = Traced<api::Error>,
    >,
{
    /// Indicator whether the fetched [`Lead`]s were stored, being the
    /// response to the latest request.
    type Ok = bool;
    type Err = ExecutionError;

    async fn execute(
        &self,
        FetchLeads(filter): FetchLeads,
    ) -> Result<Self::Ok, Self::Err> {
        let ticket = self.store().write().await.leads.list.begin();

        let res = self
            .api()
            .execute(Select(By::new(filter)))
            .await
            .map_err(tracerr::wrap!());

        let mut store = self.store().write().await;
        let leads = &mut store.leads;
        let (res, fresh) = match res {
            Ok(items) => {
                let fresh = leads.list.succeed(ticket, items);
                if fresh {
                    leads.filter = filter;
                }
                (Ok(()), fresh)
            }
            Err(e) => {
                let fresh = leads.list.fail(ticket, Failure::from(e.as_ref()));
                (Err(e), fresh)
            }
        };
        drop(store);

        self.report(Resource::Leads, &res, fresh);
        res.map(|()| fresh)
    }
}

/// Error of [`FetchLeads`] [`Command`] execution.
pub type ExecutionError = Traced<api::Error>;
