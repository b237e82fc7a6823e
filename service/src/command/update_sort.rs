//! [`Command`] for changing [`Property`] list [`SortKey`].

use std::convert::Infallible;

use derive_more::From;

#[cfg(doc)]
use crate::domain::Property;
use crate::{read::property::list::SortKey, Service};

use super::Command;

/// [`Command`] for changing [`Property`] list [`SortKey`].
#[derive(Clone, Copy, Debug, From)]
pub struct UpdateSort(pub SortKey);

impl<A> Command<UpdateSort> for Service<A> {
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        UpdateSort(sort): UpdateSort,
    ) -> Result<Self::Ok, Self::Err> {
        let mut store = self.store().write().await;
        if store.properties.sort != sort {
            store.properties.sort = sort;
            store.properties.rewind();
        }
        Ok(())
    }
}
