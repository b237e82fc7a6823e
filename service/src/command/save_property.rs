//! [`Command`] for saving a [`Property`].

use std::convert::Infallible;

use derive_more::From;

use crate::{domain::Property, Service};

use super::Command;

/// [`Command`] for saving the provided [`Property`] as a favorite, in front
/// of the previously saved ones.
///
/// Saved [`Property`]s are held in memory only.
#[derive(Clone, Debug, From)]
pub struct SaveProperty(pub Property);

impl<A> Command<SaveProperty> for Service<A> {
    /// Indicator whether the [`Property`] wasn't saved before.
    type Ok = bool;
    type Err = Infallible;

    async fn execute(
        &self,
        SaveProperty(property): SaveProperty,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.store().write().await.saves.save(&property))
    }
}

#[cfg(test)]
mod spec {
    use common::Handler as _;

    use crate::{
        command::{ClearSavedProperties, UnsaveProperty},
        infra::api::fake::{property, service, Fake},
        query::SavedProperties,
    };

    use super::SaveProperty;

    #[tokio::test]
    async fn saves_and_unsaves_properties() {
        let svc = service(&Fake::default());

        let first = property(1, 100_000, 2);
        let second = property(2, 200_000, 3);

        assert!(svc.execute(SaveProperty(first.clone())).await.unwrap());
        assert!(svc.execute(SaveProperty(second)).await.unwrap());
        assert!(!svc.execute(SaveProperty(first)).await.unwrap());

        let saved = svc.execute(SavedProperties).await.unwrap();
        let ids = saved
            .iter()
            .map(|s| u64::from(s.property.id))
            .collect::<Vec<_>>();
        assert_eq!(ids, [2, 1]);

        assert!(svc.execute(UnsaveProperty { id: 2.into() }).await.unwrap());
        assert_eq!(svc.execute(SavedProperties).await.unwrap().len(), 1);

        svc.execute(ClearSavedProperties).await.unwrap();
        assert!(svc.execute(SavedProperties).await.unwrap().is_empty());
    }
}
