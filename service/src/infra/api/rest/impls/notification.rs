//! [`Notification`]-related [`Api`] implementations.

use common::operations::{By, Delete, Select, Update};
use reqwest::Method;
use serde::Deserialize;
use tracerr::Traced;

use crate::{
    domain::{notification, Notification},
    infra::{
        api::{self, rest::Listing},
        Api, Rest,
    },
};

impl Api<Select<By<Vec<Notification>, ()>>> for Rest {
    type Ok = Vec<Notification>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Notification>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self
            .request(Method::GET, "notifications/")
            .map_err(tracerr::wrap!())?;
        match Self::fetch::<Listing<Notification>>(req).await {
            Ok(listing) => Ok(listing.into_items()),
            // Remote side may have no notifications endpoint at all.
            Err(e) if e.as_ref().is_not_found() => Ok(Vec::new()),
            Err(e) => Err(e).map_err(tracerr::wrap!()),
        }
    }
}

impl Api<Update<By<notification::Read, notification::Id>>> for Rest {
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Update(by): Update<By<notification::Read, notification::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        let req = self
            .request(Method::PATCH, &format!("notifications/{id}/"))
            .map_err(tracerr::wrap!())?
            .json(&serde_json::json!({"read": true}));
        Self::perform(req).await.map_err(tracerr::wrap!())
    }
}

impl Api<Update<By<notification::Read, ()>>> for Rest {
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        _: Update<By<notification::Read, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self
            .request(Method::POST, "notifications/mark_all_read/")
            .map_err(tracerr::wrap!())?;
        Self::perform(req).await.map_err(tracerr::wrap!())
    }
}

impl Api<Delete<By<Notification, notification::Id>>> for Rest {
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Notification, notification::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        let req = self
            .request(Method::DELETE, &format!("notifications/{id}/"))
            .map_err(tracerr::wrap!())?;
        Self::perform(req).await.map_err(tracerr::wrap!())
    }
}

/// Admin statistics, as far as recent [`notification::Action`]s go.
#[derive(Debug, Deserialize)]
struct AdminStats {
    /// Recently performed [`notification::Action`]s.
    #[serde(default)]
    recent_actions: Vec<notification::Action>,
}

impl Api<Select<By<Vec<notification::Action>, ()>>> for Rest {
    type Ok = Vec<notification::Action>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<notification::Action>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self
            .request(Method::GET, "admin/stats/")
            .map_err(tracerr::wrap!())?;
        Ok(Self::fetch::<AdminStats>(req)
            .await
            .map_err(tracerr::wrap!())?
            .recent_actions)
    }
}
