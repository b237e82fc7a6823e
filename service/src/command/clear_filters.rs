//! [`Command`] for clearing [`Property`] list [`Filter`].

use std::convert::Infallible;

#[cfg(doc)]
use crate::domain::Property;
use crate::{read::property::list::Filter, Service};

use super::Command;

/// [`Command`] for resetting the [`Property`] list [`Filter`] to no
/// constraints at all.
///
/// Pagination is reset to the first page.
#[derive(Clone, Copy, Debug)]
pub struct ClearFilters;

impl<A> Command<ClearFilters> for Service<A> {
    type Ok = ();
    type Err = Infallible;

    async fn execute(&self, _: ClearFilters) -> Result<Self::Ok, Self::Err> {
        let mut store = self.store().write().await;
        store.properties.filter = Filter::default();
        store.properties.rewind();
        Ok(())
    }
}
