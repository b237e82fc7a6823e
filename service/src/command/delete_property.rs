//! [`Command`] for deleting a [`Property`].

use common::operations::{By, Delete};
use derive_more::From;
use tracerr::Traced;

use crate::{
    domain::{property, Property},
    infra::{api, Api},
    store::mutation,
    Service,
};

use super::Command;

/// [`Command`] for deleting a [`Property`].
///
/// On success, the [`Property`] is removed from the current page along with
/// its selection and stats, and the total count is decremented.
#[derive(Clone, Copy, Debug, From)]
pub struct DeleteProperty {
    /// ID of the [`Property`] to delete.
    pub id: property::Id,
}

impl<A> Command<DeleteProperty> for Service<A>
where
    A: Api<
        Delete<By<Property, property::Id>>,
        Ok = (),
        Err = Traced<api::Error>,
    >,
{
    type Ok = ();
    type Err = ExecutionError;

    async fn execute(
        &self,
        DeleteProperty { id }: DeleteProperty,
    ) -> Result<Self::Ok, Self::Err> {
        self.track(
            mutation::Kind::DeleteProperty,
            self.api().execute(Delete(By::<Property, _>::new(id))),
        )
        .await
        .map_err(tracerr::wrap!())?;

        self.store().write().await.properties.remove(id);

        Ok(())
    }
}

/// Error of [`DeleteProperty`] [`Command`] execution.
pub type ExecutionError = Traced<api::Error>;

#[cfg(test)]
mod spec {
    use common::Handler as _;

    use crate::{
        command::{
            CreateProperty, FetchProperties, FetchPropertyStats, SelectProperty,
        },
        domain::property,
        infra::api::fake::{property, service, Fake},
    };

    use super::DeleteProperty;

    #[tokio::test]
    async fn adjusts_total_count_and_clears_selection() {
        let fake = Fake::default();
        fake.state().properties = vec![property(1, 100_000, 2)];
        let svc = service(&fake);
        _ = svc.execute(FetchProperties::default()).await.unwrap();
        _ = svc.execute(SelectProperty { id: 1.into() }).await.unwrap();
        _ = svc.execute(FetchPropertyStats { id: 1.into() }).await.unwrap();

        let created = svc
            .execute(CreateProperty(property::Draft {
                title: "Cottage".to_owned(),
                description: String::new(),
                price: common::Money::ZERO,
                location: "Avondale".to_owned(),
                property_type: property::Type::House,
                category: property::Category::Sale,
                status: property::Status::Available,
                beds: Some(2),
                baths: None,
                sqft: None,
                area_measurement: None,
                features: vec![],
                agents: property::Agents::default(),
                latitude: None,
                longitude: None,
            }))
            .await
            .unwrap();
        {
            let store = svc.store().read().await;
            assert_eq!(store.properties.page.total_count(), 2);
            assert_eq!(store.properties.list.items()[0].id, created.id);
        }

        svc.execute(DeleteProperty { id: 1.into() }).await.unwrap();
        svc.execute(DeleteProperty { id: created.id }).await.unwrap();

        let store = svc.store().read().await;
        assert_eq!(store.properties.page.total_count(), 0);
        assert!(store.properties.list.items().is_empty());
        assert!(store.properties.selected.is_none());
        assert!(store.properties.stats.is_empty());
        assert_eq!(fake.calls("delete_property"), 2);
    }
}
