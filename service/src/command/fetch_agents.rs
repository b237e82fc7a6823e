//! [`Command`] for fetching [`Agent`]s.

use common::operations::{By, Select};
use derive_more::From;
use tracerr::Traced;

use crate::{
    domain::{agent, Agent},
    infra::{api, Api},
    store::{Failure, Resource},
    Service,
};

use super::Command;

/// [`Command`] for fetching [`Agent`]s matching the provided
/// [`agent::Filter`].
#[derive(Clone, Debug, Default, From)]
pub struct FetchAgents(pub agent::Filter);

impl<A> Command<FetchAgents> for Service<A>
where
    A: Api<
        Select<By<Vec<Agent>, agent::Filter>>,
        Ok = Vec<Agent>,
        Err = Traced<api::Error>,
    >,
{
    /// Indicator whether the fetched [`Agent`]s were stored, being the
    /// response to the latest request.
    type Ok = bool;
    type Err = ExecutionError;

    async fn execute(
        &self,
        FetchAgents(filter): FetchAgents,
    ) -> Result<Self::Ok, Self::Err> {
        let ticket = self.store().write().await.agents.list.begin();

        let res = self
            .api()
            .execute(Select(By::new(filter.clone())))
            .await
            .map_err(tracerr::wrap!());

        let mut store = self.store().write().await;
        let agents = &mut store.agents;
        let (res, fresh) = match res {
            Ok(items) => {
                let fresh = agents.list.succeed(ticket, items);
                if fresh {
                    agents.filter = filter;
                }
                (Ok(()), fresh)
            }
            Err(e) => {
                let fresh = agents.list.fail(ticket, Failure::from(e.as_ref()));
                (Err(e), fresh)
            }
        };
        drop(store);

        self.report(Resource::Agents, &res, fresh);
        res.map(|()| fresh)
    }
}

/// Error of [`FetchAgents`] [`Command`] execution.
pub type ExecutionError = Traced<api::Error>;
