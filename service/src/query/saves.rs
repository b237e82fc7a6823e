//! [`Query`] collection related to saved and recently viewed [`Property`]s.

use std::convert::Infallible;

#[cfg(doc)]
use crate::domain::Property;
use crate::{
    store::{Saved, Viewed},
    Service,
};

use super::Query;

/// [`Query`] of the saved [`Property`]s, newest first.
#[derive(Clone, Copy, Debug)]
pub struct SavedProperties;

impl<A> Query<SavedProperties> for Service<A> {
    type Ok = Vec<Saved>;
    type Err = Infallible;

    async fn execute(&self, _: SavedProperties) -> Result<Self::Ok, Self::Err> {
        Ok(self.store().read().await.saves.saved().to_vec())
    }
}

/// [`Query`] of the recently viewed [`Property`]s, most recent first.
///
/// A [`Property`] counts as viewed once it's fetched on its own.
#[derive(Clone, Copy, Debug)]
pub struct RecentlyViewed;

impl<A> Query<RecentlyViewed> for Service<A> {
    type Ok = Vec<Viewed>;
    type Err = Infallible;

    async fn execute(&self, _: RecentlyViewed) -> Result<Self::Ok, Self::Err> {
        Ok(self.store().read().await.saves.viewed().to_vec())
    }
}
