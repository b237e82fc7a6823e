//! [`Command`] for toggling whether a [`Property`] is saved.

use std::convert::Infallible;

use derive_more::From;

use crate::{domain::Property, Service};

use super::Command;

/// [`Command`] for saving the provided [`Property`] if it's not saved yet,
/// or unsaving it otherwise.
#[derive(Clone, Debug, From)]
pub struct ToggleSavedProperty(pub Property);

impl<A> Command<ToggleSavedProperty> for Service<A> {
    /// Indicator whether the [`Property`] is saved now.
    type Ok = bool;
    type Err = Infallible;

    async fn execute(
        &self,
        ToggleSavedProperty(property): ToggleSavedProperty,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.store().write().await.saves.toggle(&property))
    }
}
