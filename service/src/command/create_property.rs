//! [`Command`] for creating a new [`Property`].

use common::operations::Insert;
use derive_more::From;
use tracerr::Traced;

use crate::{
    domain::{property, Property},
    infra::{api, Api},
    store::mutation,
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Property`].
///
/// The created [`Property`] is prepended to the current page.
#[derive(Clone, Debug, From)]
pub struct CreateProperty(pub property::Draft);

impl<A> Command<CreateProperty> for Service<A>
where
    A: Api<
        Insert<property::Draft>,
        Ok = Property,
        Err = Traced<api::Error>,
    >,
{
    type Ok = Property;
    type Err = ExecutionError;

    async fn execute(
        &self,
        CreateProperty(draft): CreateProperty,
    ) -> Result<Self::Ok, Self::Err> {
        let property = self
            .track(
                mutation::Kind::CreateProperty,
                self.api().execute(Insert(draft)),
            )
            .await
            .map_err(tracerr::wrap!())?;

        self.store()
            .write()
            .await
            .properties
            .prepend(property.clone());

        Ok(property)
    }
}

/// Error of [`CreateProperty`] [`Command`] execution.
pub type ExecutionError = Traced<api::Error>;
