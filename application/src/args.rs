//! [`Args`] definitions.

use clap::{Parser, Subcommand};
use derive_more::{Display, Error};
use service::{
    domain::agent,
    read::property::list::{Change, Changes, SortKey},
};

/// Command line client of the property listing service.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// [`Command`] to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Command to run.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Lists a page of properties.
    Properties {
        /// Filters and sort order to apply.
        #[command(flatten)]
        filters: Filters,

        /// Page to show.
        #[arg(long)]
        page: Option<u32>,

        /// Number of properties per page.
        #[arg(long)]
        page_size: Option<u32>,
    },

    /// Shows a single property along with its statistics.
    Property {
        /// ID of the property.
        id: u64,
    },

    /// Places the filtered properties on a map.
    Map {
        /// Filters and sort order to apply.
        #[command(flatten)]
        filters: Filters,
    },

    /// Lists agents.
    Agents {
        /// Show active agents only.
        #[arg(long, conflicts_with_all = ["inactive", "position", "branch"])]
        active: bool,

        /// Show inactive agents only.
        #[arg(long, conflicts_with_all = ["position", "branch"])]
        inactive: bool,

        /// Show agents holding the provided position only.
        #[arg(long, conflicts_with = "branch")]
        position: Option<String>,

        /// Show agents working at the provided branch only.
        #[arg(long)]
        branch: Option<String>,
    },

    /// Shows a single agent along with their properties and statistics.
    Agent {
        /// ID of the agent.
        id: u64,
    },

    /// Lists leads.
    Leads {
        /// Show leads of the provided agent only.
        #[arg(long)]
        agent: Option<u64>,
    },

    /// Lists notifications.
    Notifications {
        /// Show unread notifications only.
        #[arg(long)]
        unread: bool,

        /// Maximum number of notifications to show.
        #[arg(long)]
        limit: Option<usize>,

        /// Merge recent activity into the notifications.
        #[arg(long)]
        recent: bool,

        /// Keep polling for new notifications until interrupted.
        #[arg(long)]
        watch: bool,
    },
}

impl Command {
    /// Returns the [`agent::Filter`] selected by the [`Command::Agents`]
    /// flags.
    #[must_use]
    pub fn agent_filter(
        active: bool,
        inactive: bool,
        position: Option<String>,
        branch: Option<String>,
    ) -> agent::Filter {
        match (active, inactive, position, branch) {
            (true, ..) => agent::Filter::Active,
            (_, true, ..) => agent::Filter::Inactive,
            (_, _, Some(p), _) => agent::Filter::Position(p),
            (_, _, _, Some(b)) => agent::Filter::Branch(b),
            (false, false, None, None) => agent::Filter::All,
        }
    }
}

/// Filters and sort order of a property list.
///
/// Every constraint accepts `all` (or an empty value) to be left unset.
#[derive(Clone, Debug, Default, clap::Args)]
pub struct Filters {
    /// Text to search for in title, location and description.
    #[arg(long)]
    pub search: Option<String>,

    /// Category (`sale`, `rental` or `development`).
    #[arg(long)]
    pub category: Option<String>,

    /// Property type (`house`, `apartment`, `land`, ...).
    #[arg(long = "type")]
    pub property_type: Option<String>,

    /// Price range as `min-max`, e.g. `0-300000`.
    #[arg(long)]
    pub price: Option<String>,

    /// Minimal number of bedrooms.
    #[arg(long)]
    pub min_beds: Option<String>,

    /// Minimal number of bathrooms.
    #[arg(long)]
    pub min_baths: Option<String>,

    /// Floor area range in square feet as `min-max`.
    #[arg(long)]
    pub sqft: Option<String>,

    /// Text to search for in location.
    #[arg(long)]
    pub location: Option<String>,

    /// Region the location should belong to.
    #[arg(long)]
    pub region: Option<String>,

    /// Sort order (`price-low`, `price-high`, `beds`, `sqft`, `newest` or
    /// `oldest`).
    #[arg(long)]
    pub sort: Option<String>,
}

impl Filters {
    /// Parses these [`Filters`] into filter [`Changes`] and an optional
    /// [`SortKey`].
    ///
    /// Omitted constraints are kept as they are, while `all` (or an empty
    /// value) removes the constraint. Unrecognized sort keys fall back to
    /// [`SortKey::Newest`].
    ///
    /// # Errors
    ///
    /// If any of the constraints cannot be parsed.
    pub fn parse(&self) -> Result<(Changes, Option<SortKey>), InvalidFilter> {
        let Self {
            search,
            category,
            property_type,
            price,
            min_beds,
            min_baths,
            sqft,
            location,
            region,
            sort,
        } = self;

        let changes = Changes {
            search: text(search.as_deref()),
            category: change("category", category.as_deref())?,
            property_type: change("type", property_type.as_deref())?,
            price: change("price", price.as_deref())?,
            min_beds: change("min-beds", min_beds.as_deref())?,
            min_baths: change("min-baths", min_baths.as_deref())?,
            sqft: change("sqft", sqft.as_deref())?,
            location: text(location.as_deref()),
            region: change("region", region.as_deref())?,
        };
        Ok((changes, sort.as_deref().map(SortKey::from_key)))
    }
}

/// Parses an optional filter constraint with the provided `name`.
fn change<T: std::str::FromStr>(
    name: &'static str,
    value: Option<&str>,
) -> Result<Change<T>, InvalidFilter> {
    let Some(value) = value else {
        return Ok(Change::Keep);
    };
    Change::parse(value).map_err(|_| InvalidFilter {
        name,
        value: value.to_owned(),
    })
}

/// Parses an optional free-text filter constraint.
fn text(value: Option<&str>) -> Change<String> {
    match value.map(str::trim) {
        None => Change::Keep,
        Some("") => Change::Unset,
        Some(s) => Change::Set(s.to_owned()),
    }
}

/// Error of parsing [`Filters`].
#[derive(Clone, Debug, Display, Error)]
#[display("invalid `{name}` filter: `{value}`")]
pub struct InvalidFilter {
    /// Name of the invalid constraint.
    #[error(not(source))]
    pub name: &'static str,

    /// Invalid value.
    #[error(not(source))]
    pub value: String,
}
