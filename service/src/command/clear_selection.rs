//! [`Command`] for clearing the [`Property`] selection.

use std::convert::Infallible;

#[cfg(doc)]
use crate::domain::Property;
use crate::Service;

use super::Command;

/// [`Command`] for clearing the [`Property`] selection.
#[derive(Clone, Copy, Debug)]
pub struct ClearSelection;

impl<A> Command<ClearSelection> for Service<A> {
    type Ok = ();
    type Err = Infallible;

    async fn execute(&self, _: ClearSelection) -> Result<Self::Ok, Self::Err> {
        self.store().write().await.properties.selected = None;
        Ok(())
    }
}
