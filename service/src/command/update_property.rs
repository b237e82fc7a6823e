//! [`Command`] for updating an existing [`Property`].

use common::operations::Update;
use tracerr::Traced;

use crate::{
    domain::{property, Property},
    infra::{api, Api},
    store::mutation,
    Service,
};

use super::Command;

/// [`Command`] for updating an existing [`Property`].
///
/// [`property::Changes`] are applied to the local state right away, and
/// replaced with the remote result once it arrives.
#[derive(Clone, Debug)]
pub struct UpdateProperty {
    /// ID of the [`Property`] to update.
    pub id: property::Id,

    /// [`property::Changes`] to apply.
    pub changes: property::Changes,
}

impl<A> Command<UpdateProperty> for Service<A>
where
    A: Api<
        Update<(property::Id, property::Changes)>,
        Ok = Property,
        Err = Traced<api::Error>,
    >,
{
    type Ok = Property;
    type Err = ExecutionError;

    async fn execute(
        &self,
        cmd: UpdateProperty,
    ) -> Result<Self::Ok, Self::Err> {
        let UpdateProperty { id, changes } = cmd;

        self.store().write().await.properties.apply(id, &changes);

        let property = self
            .track(
                mutation::Kind::UpdateProperty,
                self.api().execute(Update((id, changes))),
            )
            .await
            .map_err(tracerr::wrap!())?;

        let mut store = self.store().write().await;
        _ = store.properties.replace(&property);
        store.properties.invalidate();

        Ok(property)
    }
}

/// Error of [`UpdateProperty`] [`Command`] execution.
pub type ExecutionError = Traced<api::Error>;
