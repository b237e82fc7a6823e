//! [`Command`] for updating [`Property`] list [`Filter`].

use std::convert::Infallible;

use derive_more::From;

#[cfg(doc)]
use crate::domain::Property;
use crate::{
    read::property::list::{Changes, Filter},
    Service,
};

use super::Command;

/// [`Command`] for applying the provided [`Changes`] to the current
/// [`Property`] list [`Filter`].
///
/// Constraints may be set, unset (back to "all") or left as they are, each
/// on its own. Pagination is reset to the first page. The derived listing
/// reflects the new [`Filter`] right away, while the remote page is
/// re-requested by the next [`FetchProperties`].
///
/// [`FetchProperties`]: super::FetchProperties
#[derive(Clone, Debug, From)]
pub struct UpdateFilters(pub Changes);

impl<A> Command<UpdateFilters> for Service<A> {
    /// Resulting [`Filter`].
    type Ok = Filter;
    type Err = Infallible;

    async fn execute(
        &self,
        UpdateFilters(changes): UpdateFilters,
    ) -> Result<Self::Ok, Self::Err> {
        let mut store = self.store().write().await;
        let props = &mut store.properties;

        changes.apply(&mut props.filter);
        props.rewind();
        Ok(props.filter.clone())
    }
}
