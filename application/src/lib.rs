//! Application drives the [`Service`] from the command line.

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod args;
pub mod config;
mod render;

use derive_more::{Display, Error as StdError, From};
use service::{
    command::{
        change_page_size, fetch_agent, fetch_property, ChangePage,
        ChangePageSize, FetchAgent, FetchAgentProperties, FetchAgentStats,
        FetchAgents, FetchLeadSources, FetchLeads, FetchNotifications,
        FetchProperties, FetchProperty, FetchPropertyStats, FetchRecentActions,
        UpdateFilters, UpdateSort,
    },
    domain::lead,
    infra::{api, Rest},
    query::{NotificationList, Pagination, PropertyListing, PropertyMarkers},
    store::Resource,
    task::Background,
    Command as _, Event,
};
use tokio::{signal, sync::broadcast::error::RecvError};
use tracerr::Traced;
use tracing as log;
// Used in binary.
use tracing_subscriber as _;

pub use self::{
    args::{Args, Command},
    config::Config,
};

/// [`Service`] with filled infrastructure dependencies.
///
/// [`Service`]: service::Service
pub type Service = service::Service<Rest>;

/// Error of running a [`Command`].
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Provided filters are invalid.
    #[display("{_0}")]
    Filter(args::InvalidFilter),

    /// Remote API request failed.
    #[display("`Api` operation failed: {_0}")]
    Api(api::Error),

    /// Requested property couldn't be fetched.
    #[display("{_0}")]
    Property(fetch_property::ExecutionError),

    /// Requested agent couldn't be fetched.
    #[display("{_0}")]
    Agent(fetch_agent::ExecutionError),

    /// Requested page size couldn't be applied.
    #[display("{_0}")]
    PageSize(change_page_size::ExecutionError),
}

/// Runs the provided [`Command`] against the provided [`Service`], printing
/// its results.
///
/// Must be run inside the provided [`Background`] environment.
///
/// # Errors
///
/// If the [`Command`] arguments are invalid, or the remote side fails to
/// serve the requested data.
pub async fn run(
    service: &Service,
    command: Command,
    background: &Background,
) -> Result<(), Traced<Error>> {
    match command {
        Command::Properties {
            filters,
            page,
            page_size,
        } => {
            apply(service, &filters).await?;
            if let Some(page_size) = page_size {
                _ = service
                    .execute(ChangePageSize { page_size })
                    .await
                    .map_err(tracerr::map_from_and_wrap!())?;
            } else {
                _ = service
                    .execute(FetchProperties::default())
                    .await
                    .map_err(tracerr::map_from_and_wrap!())?;
            }
            if let Some(page) = page.filter(|p| *p != 1) {
                let changed = service
                    .execute(ChangePage { page })
                    .await
                    .map_err(tracerr::map_from_and_wrap!())?;
                if changed.is_none() {
                    log::warn!("page {page} is out of range");
                }
            }

            let state = infallible(service.execute(Pagination).await);
            let page = infallible(
                service.execute(PropertyListing::default()).await,
            );
            println!("{}", render::properties(&page, &state));
        }
        Command::Property { id } => {
            let id = id.into();
            let property = service
                .execute(FetchProperty { id })
                .await
                .map_err(tracerr::map_from_and_wrap!())?;
            let stats = service
                .execute(FetchPropertyStats { id })
                .await
                .map_err(|e| log::warn!("failed to fetch stats: {e}"))
                .ok();
            println!("{}", render::property(&property, stats.as_ref()));
        }
        Command::Map { filters } => {
            apply(service, &filters).await?;
            _ = service
                .execute(FetchProperties::default())
                .await
                .map_err(tracerr::map_from_and_wrap!())?;

            let markers = infallible(service.execute(PropertyMarkers).await);
            println!("{}", render::markers(&markers));
        }
        Command::Agents {
            active,
            inactive,
            position,
            branch,
        } => {
            let filter =
                Command::agent_filter(active, inactive, position, branch);
            _ = service
                .execute(FetchAgents(filter))
                .await
                .map_err(tracerr::map_from_and_wrap!())?;

            let store = service.store().read().await;
            println!("{}", render::agents(store.agents.list.items()));
        }
        Command::Agent { id } => {
            let id = id.into();
            let agent = service
                .execute(FetchAgent { id })
                .await
                .map_err(tracerr::map_from_and_wrap!())?;
            let (properties, stats) = tokio::join!(
                service.execute(FetchAgentProperties { id }),
                service.execute(FetchAgentStats { id }),
            );
            let properties = properties
                .map_err(|e| log::warn!("failed to fetch properties: {e}"))
                .unwrap_or_default();
            let stats = stats
                .map_err(|e| log::warn!("failed to fetch stats: {e}"))
                .ok();
            println!(
                "{}",
                render::agent(&agent, &properties, stats.as_ref()),
            );
        }
        Command::Leads { agent } => {
            let (leads, sources) = tokio::join!(
                service.execute(FetchLeads(lead::Filter {
                    agent: agent.map(Into::into),
                })),
                service.execute(FetchLeadSources),
            );
            _ = leads.map_err(tracerr::map_from_and_wrap!())?;
            if let Err(e) = sources {
                log::warn!("failed to fetch lead sources: {e}");
            }

            let store = service.store().read().await;
            println!(
                "{}",
                render::leads(
                    store.leads.list.items(),
                    store.leads.sources.items(),
                ),
            );
        }
        Command::Notifications {
            unread,
            limit,
            recent,
            watch,
        } => {
            let list = NotificationList {
                unread_only: unread,
                limit,
            };

            _ = service
                .execute(FetchNotifications)
                .await
                .map_err(tracerr::map_from_and_wrap!())?;
            if recent {
                if let Err(e) = service.execute(FetchRecentActions).await {
                    log::warn!("failed to fetch recent activity: {e}");
                }
            }
            let out = infallible(service.execute(list).await);
            println!("{}", render::notifications(&out));

            if watch {
                self::watch(service, list, background).await;
            }
        }
    }
    Ok(())
}

/// Applies the provided [`args::Filters`] to the property list of the
/// provided [`Service`].
async fn apply(
    service: &Service,
    filters: &args::Filters,
) -> Result<(), Traced<Error>> {
    let (changes, sort) = filters
        .parse()
        .map_err(|e| tracerr::new!(Error::from(e)))?;
    _ = infallible(service.execute(UpdateFilters(changes)).await);
    if let Some(sort) = sort {
        infallible(service.execute(UpdateSort(sort)).await);
    }
    Ok(())
}

/// Keeps polling notifications in the provided [`Background`] and printing
/// them on every reload, until interrupted.
async fn watch(
    service: &Service,
    list: NotificationList,
    background: &Background,
) {
    let mut events = service.subscribe();
    let _poller = service.poll_notifications(background);
    log::info!(
        "watching notifications every {:?}",
        service.config().poll_notifications.interval,
    );

    let interrupted = signal::ctrl_c();
    tokio::pin!(interrupted);
    loop {
        tokio::select! {
            _ = &mut interrupted => break,
            event = events.recv() => match event {
                Ok(Event::Loaded(Resource::Notifications)) => {
                    let out = infallible(service.execute(list).await);
                    println!("\n{}", render::notifications(&out));
                }
                Ok(Event::Failed(Resource::Notifications, failure)) => {
                    log::warn!("failed to poll notifications: {failure}");
                }
                Ok(
                    Event::Loaded(_)
                    | Event::Failed(..)
                    | Event::Mutation { .. },
                )
                | Err(RecvError::Lagged(_)) => {}
                Err(RecvError::Closed) => break,
            },
        }
    }
}

/// Unwraps the [`Result`] of an operation that cannot fail.
fn infallible<T>(res: Result<T, std::convert::Infallible>) -> T {
    res.unwrap_or_else(|e| match e {})
}
