//! [`Command`] for fetching [`agent::Stats`].

use common::operations::{By, Select};
use derive_more::From;
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::Agent;
use crate::{
    domain::agent,
    infra::{api, Api},
    store::Resource,
    Service,
};

use super::Command;

/// [`Command`] for fetching [`agent::Stats`] of an [`Agent`].
#[derive(Clone, Copy, Debug, From)]
pub struct FetchAgentStats {
    /// ID of the [`Agent`] to fetch the [`agent::Stats`] of.
    pub id: agent::Id,
}

impl<A> Command<FetchAgentStats> for Service<A>
where
    A: Api<
        Select<By<agent::Stats, agent::Id>>,
        Ok = agent::Stats,
        Err = Traced<api::Error>,
    >,
{
    type Ok = agent::Stats;
    type Err = ExecutionError;

    async fn execute(
        &self,
        FetchAgentStats { id }: FetchAgentStats,
    ) -> Result<Self::Ok, Self::Err> {
        let res = self
            .api()
            .execute(Select(By::<agent::Stats, _>::new(id)))
            .await
            .map_err(tracerr::wrap!());

        if let Ok(stats) = &res {
            _ = self
                .store()
                .write()
                .await
                .agents
                .stats
                .insert(id, stats.clone());
        }
        self.report(Resource::AgentStats, &res, true);

        res
    }
}

/// Error of [`FetchAgentStats`] [`Command`] execution.
pub type ExecutionError = Traced<api::Error>;
