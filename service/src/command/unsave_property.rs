//! [`Command`] for unsaving a [`Property`].

use std::convert::Infallible;

use derive_more::From;

#[cfg(doc)]
use crate::domain::Property;
use crate::{domain::property, Service};

use super::Command;

/// [`Command`] for removing a [`Property`] from the saved ones.
#[derive(Clone, Copy, Debug, From)]
pub struct UnsaveProperty {
    /// ID of the [`Property`] to unsave.
    pub id: property::Id,
}

impl<A> Command<UnsaveProperty> for Service<A> {
    /// Indicator whether the [`Property`] was saved.
    type Ok = bool;
    type Err = Infallible;

    async fn execute(
        &self,
        UnsaveProperty { id }: UnsaveProperty,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.store().write().await.saves.unsave(id))
    }
}
