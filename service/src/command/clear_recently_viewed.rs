//! [`Command`] for clearing recently viewed [`Property`]s.

use std::convert::Infallible;

#[cfg(doc)]
use crate::domain::Property;
use crate::Service;

use super::Command;

/// [`Command`] for forgetting all the recently viewed [`Property`]s.
#[derive(Clone, Copy, Debug)]
pub struct ClearRecentlyViewed;

impl<A> Command<ClearRecentlyViewed> for Service<A> {
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        _: ClearRecentlyViewed,
    ) -> Result<Self::Ok, Self::Err> {
        self.store().write().await.saves.clear_viewed();
        Ok(())
    }
}
