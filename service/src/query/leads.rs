//! [`Query`] collection related to [`Lead`]s.

use std::convert::Infallible;

#[cfg(doc)]
use crate::domain::Property;
use crate::{
    domain::{lead, Lead},
    Service,
};

use super::Query;

/// [`Query`] of the held [`Lead`]s referencing a deleted [`Property`], or
/// none at all.
///
/// A [`Property`] counts as deleted once it's deleted through this
/// [`Service`] or reported missing when fetched.
#[derive(Clone, Copy, Debug)]
pub struct OrphanedLeads;

impl<A> Query<OrphanedLeads> for Service<A> {
    type Ok = Vec<Lead>;
    type Err = Infallible;

    async fn execute(&self, _: OrphanedLeads) -> Result<Self::Ok, Self::Err> {
        let store = self.store().read().await;
        Ok(lead::orphaned(
            store.leads.list.items(),
            store.properties.deleted(),
        )
        .cloned()
        .collect())
    }
}
