//! [`Command`] for fetching a single [`Property`].

use common::operations::{By, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{property, Property},
    infra::{api, Api},
    store::{Event, Failure, Resource},
    Service,
};

use super::Command;

/// [`Command`] for fetching a single [`Property`] and selecting it.
///
/// The fetched [`Property`] is recorded as recently viewed.
#[derive(Clone, Copy, Debug, From)]
pub struct FetchProperty {
    /// ID of the [`Property`] to fetch.
    pub id: property::Id,
}

impl<A> Command<FetchProperty> for Service<A>
where
    A: Api<
        Select<By<Option<Property>, property::Id>>,
        Ok = Option<Property>,
        Err = Traced<api::Error>,
    >,
{
    type Ok = Property;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: FetchProperty) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let FetchProperty { id } = cmd;

        let ticket =
            self.store().write().await.properties.details_mut(id).begin();

        let res = self
            .api()
            .execute(Select(By::<Option<Property>, _>::new(id)))
            .await;

        let mut store = self.store().write().await;
        let props = &mut store.properties;
        match res {
            Ok(Some(property)) => {
                if props.details_mut(id).succeed(ticket) {
                    _ = props.replace(&property);
                    props.selected = Some(property.clone());
                    store.saves.view(&property);
                    drop(store);
                    self.emit(Event::Loaded(Resource::Property));
                }
                Ok(property)
            }
            Ok(None) => {
                let failure = Failure::from(&api::Error::NotFound);
                if props.fail_details(id, ticket, failure.clone()) {
                    props.forget(id);
                    drop(store);
                    self.emit(Event::Failed(Resource::Property, failure));
                }
                Err(tracerr::new!(E::PropertyNotExists(id)))
            }
            Err(e) => {
                let failure = Failure::from(e.as_ref());
                if props.fail_details(id, ticket, failure.clone()) {
                    drop(store);
                    log::warn!("failed to fetch `Property(id: {id})`: {e}");
                    self.emit(Event::Failed(Resource::Property, failure));
                }
                Err(e).map_err(tracerr::map_from_and_wrap!(=> E))
            }
        }
    }
}

/// Error of [`FetchProperty`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Api`] error.
    #[display("`Api` operation failed: {_0}")]
    Api(api::Error),

    /// [`Property`] doesn't exist.
    #[display("`Property(id: {_0})` does not exist")]
    #[from(ignore)]
    PropertyNotExists(#[error(not(source))] property::Id),
}
