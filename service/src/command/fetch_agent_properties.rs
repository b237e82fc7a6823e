//! [`Command`] for fetching [`Property`]s of an [`Agent`].

use common::operations::{By, Select};
use derive_more::From;
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::Agent;
use crate::{
    domain::{agent, Property},
    infra::{api, Api},
    store::Resource,
    Service,
};

use super::Command;

/// [`Command`] for fetching the [`Property`]s an [`Agent`] is responsible
/// for.
///
/// The fetched [`Property`]s are kept per [`Agent`], apart from the current
/// page of the [`Property`] list.
#[derive(Clone, Copy, Debug, From)]
pub struct FetchAgentProperties {
    /// ID of the [`Agent`] to fetch the [`Property`]s of.
    pub id: agent::Id,
}

impl<A> Command<FetchAgentProperties> for Service<A>
where
    A: Api<
        Select<By<Vec<Property>, agent::Id>>,
        Ok = Vec<Property>,
        Err = Traced<api::Error>,
    >,
{
    type Ok = Vec<Property>;
    type Err = ExecutionError;

    async fn execute(
        &self,
        FetchAgentProperties { id }: FetchAgentProperties,
    ) -> Result<Self::Ok, Self::Err> {
        let res = self
            .api()
            .execute(Select(By::<Vec<Property>, _>::new(id)))
            .await
            .map_err(tracerr::wrap!());

        if let Ok(properties) = &res {
            _ = self
                .store()
                .write()
                .await
                .agents
                .properties
                .insert(id, properties.clone());
        }
        self.report(Resource::AgentProperties, &res, true);

        res
    }
}

/// Error of [`FetchAgentProperties`] [`Command`] execution.
pub type ExecutionError = Traced<api::Error>;

#[cfg(test)]
mod spec {
    use common::Handler as _;

    use crate::{
        command::DeleteAgent,
        domain::agent,
        infra::api::{
            self,
            fake::{property, service, Fake},
        },
    };

    use super::FetchAgentProperties;

    #[tokio::test]
    async fn keeps_properties_per_agent() {
        let fake = Fake::default();
        fake.state().properties = (1..=3)
            .map(|id| {
                let mut p = property(id, 100_000, 2);
                if id != 2 {
                    assert!(p.agents.add(agent::Id::from(7), "Tendai"));
                }
                p
            })
            .collect();
        let svc = service(&fake);

        let fetched = svc
            .execute(FetchAgentProperties { id: 7.into() })
            .await
            .unwrap();
        let ids = fetched.iter().map(|p| u64::from(p.id)).collect::<Vec<_>>();
        assert_eq!(ids, [1, 3]);
        {
            let store = svc.store().read().await;
            assert_eq!(store.agents.properties[&agent::Id::from(7)], fetched);
            assert!(store.properties.list.items().is_empty());
        }

        svc.execute(DeleteAgent { id: 7.into() }).await.unwrap();
        assert!(svc.store().read().await.agents.properties.is_empty());
    }

    #[tokio::test]
    async fn keeps_previous_properties_on_failure() {
        let fake = Fake::default();
        let svc = service(&fake);
        _ = svc
            .execute(FetchAgentProperties { id: 7.into() })
            .await
            .unwrap();

        fake.state().failures.push_back(api::Error::Transport(
            "connection reset".to_owned(),
        ));
        assert!(svc
            .execute(FetchAgentProperties { id: 7.into() })
            .await
            .is_err());

        let store = svc.store().read().await;
        assert!(store.agents.properties.contains_key(&agent::Id::from(7)));
    }
}
