//! [`Command`] definition.

pub mod add_notification;
pub mod change_page;
pub mod change_page_size;
pub mod clear_filters;
pub mod clear_notifications;
pub mod clear_recently_viewed;
pub mod clear_saved_properties;
pub mod clear_selection;
pub mod create_agent;
pub mod create_lead;
pub mod create_property;
pub mod delete_agent;
pub mod delete_lead;
pub mod delete_notification;
pub mod delete_property;
pub mod fetch_agent;
pub mod fetch_agent_properties;
pub mod fetch_agent_stats;
pub mod fetch_agents;
pub mod fetch_lead_sources;
pub mod fetch_leads;
pub mod fetch_notifications;
pub mod fetch_properties;
pub mod fetch_property;
pub mod fetch_property_stats;
pub mod fetch_recent_actions;
pub mod load_recent_actions;
pub mod mark_all_notifications_read;
pub mod mark_notification_read;
pub mod save_property;
pub mod select_property;
pub mod set_agent_activation;
pub mod toggle_saved_property;
pub mod unsave_property;
pub mod update_agent;
pub mod update_filters;
pub mod update_lead;
pub mod update_property;
pub mod update_sort;

use std::future::Future;

use tracerr::Traced;
use tracing as log;

use crate::{
    infra::api,
    store::{
        mutation::{self, Outcome},
        Event, Failure, Resource,
    },
    Service,
};

/// [`Command`] of the [`Service`].
pub use common::Handler as Command;

pub use self::{
    add_notification::AddNotification, change_page::ChangePage,
    change_page_size::ChangePageSize, clear_filters::ClearFilters,
    clear_notifications::ClearNotifications,
    clear_recently_viewed::ClearRecentlyViewed,
    clear_saved_properties::ClearSavedProperties,
    clear_selection::ClearSelection, create_agent::CreateAgent,
    create_lead::CreateLead, create_property::CreateProperty,
    delete_agent::DeleteAgent, delete_lead::DeleteLead,
    delete_notification::DeleteNotification,
    delete_property::DeleteProperty, fetch_agent::FetchAgent,
    fetch_agent_properties::FetchAgentProperties,
    fetch_agent_stats::FetchAgentStats, fetch_agents::FetchAgents,
    fetch_lead_sources::FetchLeadSources, fetch_leads::FetchLeads,
    fetch_notifications::FetchNotifications,
    fetch_properties::FetchProperties, fetch_property::FetchProperty,
    fetch_property_stats::FetchPropertyStats,
    fetch_recent_actions::FetchRecentActions,
    load_recent_actions::LoadRecentActions,
    mark_all_notifications_read::MarkAllNotificationsRead,
    mark_notification_read::MarkNotificationRead,
    save_property::SaveProperty, select_property::SelectProperty,
    set_agent_activation::SetAgentActivation,
    toggle_saved_property::ToggleSavedProperty,
    unsave_property::UnsaveProperty, update_agent::UpdateAgent,
    update_filters::UpdateFilters, update_lead::UpdateLead,
    update_property::UpdateProperty, update_sort::UpdateSort,
};

impl<A> Service<A> {
    /// Runs the provided remote mutation, tracking it in the
    /// [`mutation::Registry`] and broadcasting its [`Outcome`]s.
    ///
    /// Local state is not rolled back on failure.
    pub(crate) async fn track<T>(
        &self,
        kind: mutation::Kind,
        mutation: impl Future<Output = Result<T, Traced<api::Error>>>,
    ) -> Result<T, Traced<api::Error>> {
        let id = self.store().write().await.mutations.begin(kind);
        self.emit(Event::Mutation {
            id,
            kind,
            outcome: Outcome::Pending,
        });

        let res = mutation.await;

        _ = self.store().write().await.mutations.settle(id);
        let outcome = match &res {
            Ok(_) => Outcome::Succeeded,
            Err(e) => {
                log::warn!("`{kind}` mutation failed: {e}");
                Outcome::Failed(Failure::from(e.as_ref()))
            }
        };
        self.emit(Event::Mutation { id, kind, outcome });

        res
    }

    /// Broadcasts the outcome of loading the provided [`Resource`].
    ///
    /// Nothing is broadcast for stale responses.
    pub(crate) fn report<T>(
        &self,
        resource: Resource,
        res: &Result<T, Traced<api::Error>>,
        fresh: bool,
    ) {
        if !fresh {
            log::debug!("stale `{resource}` response ignored");
            return;
        }
        match res {
            Ok(_) => self.emit(Event::Loaded(resource)),
            Err(e) => {
                log::warn!("failed to load `{resource}`: {e}");
                self.emit(Event::Failed(resource, Failure::from(e.as_ref())));
            }
        }
    }
}
