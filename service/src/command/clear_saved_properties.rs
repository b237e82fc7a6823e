//! [`Command`] for clearing saved [`Property`]s.

use std::convert::Infallible;

#[cfg(doc)]
use crate::domain::Property;
use crate::Service;

use super::Command;

/// [`Command`] for forgetting all the saved [`Property`]s.
#[derive(Clone, Copy, Debug)]
pub struct ClearSavedProperties;

impl<A> Command<ClearSavedProperties> for Service<A> {
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        _: ClearSavedProperties,
    ) -> Result<Self::Ok, Self::Err> {
        self.store().write().await.saves.clear_saved();
        Ok(())
    }
}
