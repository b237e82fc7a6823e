//! [`Command`] for fetching [`property::Stats`].

use common::operations::{By, Select};
use derive_more::From;
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::Property;
use crate::{
    domain::property,
    infra::{api, Api},
    store::Resource,
    Service,
};

use super::Command;

/// [`Command`] for fetching [`property::Stats`] of a [`Property`].
#[derive(Clone, Copy, Debug, From)]
pub struct FetchPropertyStats {
    /// ID of the [`Property`] to fetch the [`property::Stats`] of.
    pub id: property::Id,
}

impl<A> Command<FetchPropertyStats> for Service<A>
where
    A: Api<
        Select<By<property::Stats, property::Id>>,
        Ok = property::Stats,
        Err = Traced<api::Error>,
    >,
{
    type Ok = property::Stats;
    type Err = ExecutionError;

    async fn execute(
        &self,
        FetchPropertyStats { id }: FetchPropertyStats,
    ) -> Result<Self::Ok, Self::Err> {
        let res = self
            .api()
            .execute(Select(By::<property::Stats, _>::new(id)))
            .await
            .map_err(tracerr::wrap!());

        if let Ok(stats) = &res {
            _ = self
                .store()
                .write()
                .await
                .properties
                .stats
                .insert(id, stats.clone());
        }
        self.report(Resource::PropertyStats, &res, true);

        res
    }
}

/// Error of [`FetchPropertyStats`] [`Command`] execution.
pub type ExecutionError = Traced<api::Error>;
