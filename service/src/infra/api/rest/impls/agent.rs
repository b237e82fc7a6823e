//! [`Agent`]-related [`Api`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use reqwest::Method;
use tracerr::Traced;

use crate::{
    domain::{agent, Agent, Property},
    infra::{
        api::{self, rest::Listing},
        Api, Rest,
    },
};

impl Api<Select<By<Vec<Agent>, agent::Filter>>> for Rest {
    type Ok = Vec<Agent>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Agent>, agent::Filter>>,
    ) -> Result<Self::Ok, Self::Err> {
        use agent::Filter as F;

        let req = match by.into_inner() {
            F::All => self.request(Method::GET, "agents/"),
            F::Active => self.request(Method::GET, "agents/active/"),
            F::Inactive => self.request(Method::GET, "agents/inactive/"),
            F::Position(position) => self
                .request(Method::GET, "agents/by_position/")
                .map(|r| r.query(&[("position", position)])),
            F::Branch(branch) => self
                .request(Method::GET, "agents/by_branch/")
                .map(|r| r.query(&[("branch", branch)])),
        }
        .map_err(tracerr::wrap!())?;
        Ok(Self::fetch::<Listing<Agent>>(req)
            .await
            .map_err(tracerr::wrap!())?
            .into_items())
    }
}

impl Api<Select<By<Option<Agent>, agent::Id>>> for Rest {
    type Ok = Option<Agent>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Agent>, agent::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        let req = self
            .request(Method::GET, &format!("agents/{id}/"))
            .map_err(tracerr::wrap!())?;
        match Self::fetch(req).await {
            Ok(agent) => Ok(Some(agent)),
            Err(e) if e.as_ref().is_not_found() => Ok(None),
            Err(e) => Err(e).map_err(tracerr::wrap!()),
        }
    }
}

impl Api<Select<By<Vec<Property>, agent::Id>>> for Rest {
    type Ok = Vec<Property>;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Property>, agent::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        let req = self
            .request(Method::GET, &format!("agents/{id}/properties/"))
            .map_err(tracerr::wrap!())?;
        Ok(Self::fetch::<Listing<Property>>(req)
            .await
            .map_err(tracerr::wrap!())?
            .into_items())
    }
}

impl Api<Select<By<agent::Stats, agent::Id>>> for Rest {
    type Ok = agent::Stats;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<agent::Stats, agent::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        let req = self
            .request(Method::GET, &format!("agents/{id}/stats/"))
            .map_err(tracerr::wrap!())?;
        Self::fetch(req).await.map_err(tracerr::wrap!())
    }
}

impl Api<Insert<agent::Draft>> for Rest {
    type Ok = Agent;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Insert(draft): Insert<agent::Draft>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self
            .request(Method::POST, "agents/")
            .map_err(tracerr::wrap!())?
            .json(&draft);
        Self::fetch(req).await.map_err(tracerr::wrap!())
    }
}

impl Api<Update<(agent::Id, agent::Changes)>> for Rest {
    type Ok = Agent;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Update((id, changes)): Update<(agent::Id, agent::Changes)>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self
            .request(Method::PATCH, &format!("agents/{id}/"))
            .map_err(tracerr::wrap!())?
            .json(&changes);
        Self::fetch(req).await.map_err(tracerr::wrap!())
    }
}

impl Api<Update<(agent::Id, agent::Activation)>> for Rest {
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Update((id, activation)): Update<(agent::Id, agent::Activation)>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self
            .request(Method::POST, &format!("agents/{id}/{activation}/"))
            .map_err(tracerr::wrap!())?;
        Self::perform(req).await.map_err(tracerr::wrap!())
    }
}

impl Api<Delete<By<Agent, agent::Id>>> for Rest {
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Agent, agent::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        let req = self
            .request(Method::DELETE, &format!("agents/{id}/"))
            .map_err(tracerr::wrap!())?;
        Self::perform(req).await.map_err(tracerr::wrap!())
    }
}
