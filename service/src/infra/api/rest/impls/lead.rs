//! [`Lead`]-related [`Api`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use reqwest::Method;
use tracerr::Traced;

use crate::{
    domain::{lead, Lead},
    infra::{
        api::{self, rest::Listing},
        Api, Rest,
    },
};

impl Api<Select<By<Vec<Lead>, lead::Filter>>> for Rest {
    type Ok = Vec<Lead>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Lead>, lead::Filter>>,
    ) -> Result<Self::Ok, Self::Err> {
        let lead::Filter { agent } = by.into_inner();
        let mut req = self
            .request(Method::GET, "property-leads/")
            .map_err(tracerr::wrap!())?;
        if let Some(agent) = agent {
            req = req.query(&[("agent", agent)]);
        }
        Ok(Self::fetch::<Listing<Lead>>(req)
            .await
            .map_err(tracerr::wrap!())?
            .into_items())
    }
}

impl Api<Select<By<Vec<lead::Source>, ()>>> for Rest {
    type Ok = Vec<lead::Source>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<lead::Source>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self
            .request(Method::GET, "lead-sources/")
            .map_err(tracerr::wrap!())?;
        Ok(Self::fetch::<Listing<lead::Source>>(req)
            .await
            .map_err(tracerr::wrap!())?
            .into_items())
    }
}

impl Api<Insert<lead::Draft>> for Rest {
    type Ok = Lead;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Insert(draft): Insert<lead::Draft>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self
            .request(Method::POST, "property-leads/")
            .map_err(tracerr::wrap!())?
            .json(&draft);
        Self::fetch(req).await.map_err(tracerr::wrap!())
    }
}

impl Api<Update<(lead::Id, lead::Changes)>> for Rest {
    type Ok = Lead;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Update((id, changes)): Update<(lead::Id, lead::Changes)>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self
            .request(Method::PATCH, &format!("property-leads/{id}/"))
            .map_err(tracerr::wrap!())?
            .json(&changes);
        Self::fetch(req).await.map_err(tracerr::wrap!())
    }
}

impl Api<Delete<By<Lead, lead::Id>>> for Rest {
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Lead, lead::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        let req = self
            .request(Method::DELETE, &format!("property-leads/{id}/"))
            .map_err(tracerr::wrap!())?;
        Self::perform(req).await.map_err(tracerr::wrap!())
    }
}
