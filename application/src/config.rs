//! [`Config`]-related definitions.

use std::time;

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use secrecy::SecretString;
use serde::Deserialize;
use service::{infra::rest, task::poll_notifications};
use smart_default::SmartDefault;
use url::Url;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Remote API configuration.
    #[serde(default)]
    pub api: Api,

    /// Service configuration.
    #[serde(default)]
    pub service: Service,

    /// Log configuration.
    #[serde(default)]
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Remote API configuration.
#[derive(Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Api {
    /// Base URL of the remote API.
    #[default(Url::parse("http://127.0.0.1:8000/api/").expect("valid URL"))]
    pub base_url: Url,

    /// Bearer access token to authorize requests with.
    pub access_token: Option<SecretString>,

    /// Timeout of a single request.
    #[default(time::Duration::from_secs(30))]
    #[serde(with = "humantime_serde")]
    pub timeout: time::Duration,
}

impl From<Api> for rest::Config {
    fn from(value: Api) -> Self {
        let Api {
            base_url,
            access_token,
            timeout,
        } = value;
        Self {
            base_url,
            access_token,
            timeout,
        }
    }
}

/// Service configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Service {
    /// Number of properties requested per page.
    #[default(20)]
    pub page_size: u32,

    /// Duration a fetched property page is reused for the same request.
    #[default(time::Duration::from_secs(30))]
    #[serde(with = "humantime_serde")]
    pub cache_ttl: time::Duration,

    /// Maximum number of notifications held after loading recent activity.
    #[default(50)]
    pub max_notifications: usize,

    /// Maximum number of page numbers shown around the current page.
    #[default(5)]
    pub page_window: u32,

    /// Service tasks configuration.
    pub tasks: Tasks,
}

impl From<Service> for service::Config {
    fn from(value: Service) -> Self {
        let Service {
            page_size,
            cache_ttl,
            max_notifications,
            page_window,
            tasks: Tasks { poll_notifications },
        } = value;
        Self {
            page_size,
            cache_ttl,
            max_notifications,
            page_window,
            poll_notifications: poll_notifications::Config {
                interval: poll_notifications.interval,
            },
        }
    }
}

/// Service tasks configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Tasks {
    /// `PollNotifications` task configuration.
    pub poll_notifications: Task,
}

/// Service task configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Task {
    /// Task execution interval.
    #[default(time::Duration::from_secs(60))]
    #[serde(with = "humantime_serde")]
    pub interval: time::Duration,
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    Info,

    /// Designates hazardous situations.
    #[default]
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use super::Config;

    #[test]
    fn falls_back_to_defaults() {
        let conf = Config::new("missing-config-file").unwrap();
        let service = service::Config::from(conf.service);

        assert_eq!(conf.api.base_url.as_str(), "http://127.0.0.1:8000/api/");
        assert!(conf.api.access_token.is_none());
        assert_eq!(service.page_size, 20);
        assert_eq!(service.cache_ttl, Duration::from_secs(30));
        assert_eq!(service.max_notifications, 50);
        assert_eq!(
            service.poll_notifications.interval,
            Duration::from_secs(60),
        );
    }
}
