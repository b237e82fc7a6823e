//! [`Command`] for selecting a loaded [`Property`].

use std::convert::Infallible;

use derive_more::From;

use crate::{
    domain::{property, Property},
    Service,
};

use super::Command;

/// [`Command`] for selecting one of the loaded [`Property`]s.
///
/// Selecting a [`Property`] absent from the current page leaves the
/// selection untouched.
#[derive(Clone, Copy, Debug, From)]
pub struct SelectProperty {
    /// ID of the [`Property`] to select.
    pub id: property::Id,
}

impl<A> Command<SelectProperty> for Service<A> {
    /// Selected [`Property`], if it's loaded.
    type Ok = Option<Property>;
    type Err = Infallible;

    async fn execute(
        &self,
        SelectProperty { id }: SelectProperty,
    ) -> Result<Self::Ok, Self::Err> {
        let mut store = self.store().write().await;
        let props = &mut store.properties;

        let Some(found) = props.list.items().iter().find(|p| p.id == id) else {
            return Ok(None);
        };
        props.selected = Some(found.clone());
        Ok(props.selected.clone())
    }
}
