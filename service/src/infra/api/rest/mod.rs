//! REST [`Api`] implementation.

mod impls;

use std::{collections::BTreeMap, time::Duration};

use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Method, RequestBuilder, StatusCode,
};
use secrecy::{ExposeSecret as _, SecretString};
use serde::{de::DeserializeOwned, Deserialize};
use smart_default::SmartDefault;
use tracerr::Traced;
use tracing as log;
use url::Url;

use crate::infra::api;
#[cfg(doc)]
use crate::infra::Api;

/// [`Rest`] client configuration.
#[derive(Debug, SmartDefault)]
pub struct Config {
    /// Base [`Url`] of the remote API.
    #[default(Url::parse("http://127.0.0.1:8000/").expect("valid URL"))]
    pub base_url: Url,

    /// Bearer access token to authorize requests with.
    pub access_token: Option<SecretString>,

    /// Timeout of a single request.
    #[default(Duration::from_secs(30))]
    pub timeout: Duration,
}

/// REST [`Api`] client.
#[derive(Clone, Debug)]
pub struct Rest {
    /// Underlying HTTP client.
    client: reqwest::Client,

    /// Base [`Url`] all the paths are resolved against.
    base_url: Url,
}

impl Rest {
    /// Creates a new [`Rest`] client with the provided [`Config`].
    ///
    /// # Errors
    ///
    /// If the access token is not a valid header value, or the HTTP client
    /// cannot be initialized.
    pub fn new(conf: &Config) -> Result<Self, Traced<api::Error>> {
        use api::Error as E;

        let mut headers = HeaderMap::new();
        _ = headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/json"),
        );
        if let Some(token) = &conf.access_token {
            let mut value = HeaderValue::try_from(format!(
                "Bearer {}",
                token.expose_secret(),
            ))
            .map_err(|e| tracerr::new!(E::Malformed(e.to_string())))?;
            value.set_sensitive(true);
            _ = headers.insert(header::AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(conf.timeout)
            .build()
            .map_err(|e| tracerr::new!(E::Transport(e.to_string())))?;

        let mut base_url = conf.base_url.clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self { client, base_url })
    }

    /// Returns the base [`Url`] of this [`Rest`] client.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds a request of the provided [`Method`] to the provided `path`,
    /// relative to the base [`Url`].
    fn request(
        &self,
        method: Method,
        path: &str,
    ) -> Result<RequestBuilder, Traced<api::Error>> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| tracerr::new!(api::Error::Malformed(e.to_string())))?;
        log::debug!("{method} {url}");
        Ok(self.client.request(method, url))
    }

    /// Sends the provided request and decodes its JSON response.
    async fn fetch<T: DeserializeOwned>(
        req: RequestBuilder,
    ) -> Result<T, Traced<api::Error>> {
        let resp = Self::send(req).await?;
        resp.json()
            .await
            .map_err(|e| tracerr::new!(api::Error::Malformed(e.to_string())))
    }

    /// Sends the provided request, discarding its response body.
    async fn perform(req: RequestBuilder) -> Result<(), Traced<api::Error>> {
        Self::send(req).await.map(drop)
    }

    /// Sends the provided request, converting unsuccessful responses into
    /// [`api::Error`]s.
    async fn send(
        req: RequestBuilder,
    ) -> Result<reqwest::Response, Traced<api::Error>> {
        use api::Error as E;

        let resp = req.send().await.map_err(|e| {
            tracerr::new!(E::Transport(if e.is_timeout() {
                "request timed out".to_owned()
            } else {
                e.to_string()
            }))
        })?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.json::<ErrorBody>().await.unwrap_or_default();
        let err = body.into_error(status);
        log::debug!("request failed: {err}");
        Err(tracerr::new!(err))
    }
}

/// Body of an unsuccessful response.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    /// Top-level message.
    #[serde(default)]
    message: Option<String>,

    /// Top-level detail, used if there is no message.
    #[serde(default)]
    detail: Option<String>,

    /// Explicit field-level errors.
    #[serde(default)]
    errors: Option<BTreeMap<String, Messages>>,

    /// Errors not related to any particular field.
    #[serde(default)]
    non_field_errors: Option<Messages>,

    /// Any other fields, considered field-level errors if they are lists of
    /// messages.
    #[serde(flatten)]
    rest: BTreeMap<String, serde_json::Value>,
}

/// One or many error messages.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Messages {
    /// Single message.
    One(String),

    /// Many messages.
    Many(Vec<String>),
}

impl From<Messages> for Vec<String> {
    fn from(m: Messages) -> Self {
        match m {
            Messages::One(s) => vec![s],
            Messages::Many(v) => v,
        }
    }
}

impl ErrorBody {
    /// Converts this [`ErrorBody`] into an [`api::Error`] of the provided
    /// [`StatusCode`].
    fn into_error(self, status: StatusCode) -> api::Error {
        use api::Error as E;

        let Self {
            message,
            detail,
            errors,
            non_field_errors,
            rest,
        } = self;
        let first_general = non_field_errors
            .map(Vec::from)
            .and_then(|v| v.into_iter().next());
        let message = message.or(detail).or(first_general);

        match status {
            StatusCode::NOT_FOUND => E::NotFound,
            StatusCode::BAD_REQUEST => E::Validation {
                message: message
                    .unwrap_or_else(|| "Validation failed".to_owned()),
                fields: errors.map_or_else(
                    || {
                        rest.into_iter()
                            .filter_map(|(field, v)| {
                                serde_json::from_value::<Messages>(v)
                                    .ok()
                                    .map(|m| (field, m.into()))
                            })
                            .collect()
                    },
                    |errors| {
                        errors.into_iter().map(|(f, m)| (f, m.into())).collect()
                    },
                ),
            },
            _ => E::Status {
                status: status.as_u16(),
                message: message.unwrap_or_else(|| {
                    if status.is_server_error() {
                        "Server error, try again later".to_owned()
                    } else {
                        status.canonical_reason().unwrap_or("Unknown").to_owned()
                    }
                }),
            },
        }
    }
}

/// List of entities, either paginated or plain.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Listing<T> {
    /// Paginated list.
    Paginated {
        /// Total number of entities across all the pages.
        count: u64,

        /// Entities on the current page.
        results: Vec<T>,
    },

    /// Plain list of all the entities.
    Plain(Vec<T>),
}

impl<T> Listing<T> {
    /// Returns the listed entities along with their total count.
    fn into_parts(self) -> (Vec<T>, u64) {
        match self {
            Self::Paginated { count, results } => (results, count),
            Self::Plain(items) => {
                let count = items.len() as u64;
                (items, count)
            }
        }
    }

    /// Returns the listed entities.
    fn into_items(self) -> Vec<T> {
        self.into_parts().0
    }
}

#[cfg(test)]
mod spec {
    use reqwest::StatusCode;

    use crate::infra::api;

    use super::{Config, ErrorBody, Listing, Rest};

    fn error(status: StatusCode, body: serde_json::Value) -> api::Error {
        serde_json::from_value::<ErrorBody>(body)
            .unwrap()
            .into_error(status)
    }

    #[test]
    fn accepts_paginated_and_plain_listings() {
        let paginated: Listing<u32> = serde_json::from_value(serde_json::json!({
            "count": 25,
            "next": "http://x/?page=2",
            "previous": null,
            "results": [1, 2],
        }))
        .unwrap();
        let plain: Listing<u32> =
            serde_json::from_value(serde_json::json!([1, 2, 3])).unwrap();

        assert_eq!(paginated.into_parts(), (vec![1, 2], 25));
        assert_eq!(plain.into_parts(), (vec![1, 2, 3], 3));
    }

    #[test]
    fn maps_validation_errors() {
        let err = error(
            StatusCode::BAD_REQUEST,
            serde_json::json!({
                "title": ["This field is required."],
                "price": "Invalid.",
            }),
        );

        let api::Error::Validation { message, fields } = err else {
            panic!("expected validation error, got: {err}");
        };
        assert_eq!(message, "Validation failed");
        assert_eq!(fields["title"], vec!["This field is required."]);
        assert_eq!(fields["price"], vec!["Invalid."]);
    }

    #[test]
    fn prefers_explicit_field_errors() {
        let err = error(
            StatusCode::BAD_REQUEST,
            serde_json::json!({
                "message": "Bad listing",
                "errors": {"beds": ["Must be positive."]},
                "code": 7,
            }),
        );

        let api::Error::Validation { message, fields } = err else {
            panic!("expected validation error, got: {err}");
        };
        assert_eq!(message, "Bad listing");
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn maps_statuses() {
        assert!(error(StatusCode::NOT_FOUND, serde_json::json!({}))
            .is_not_found());

        let err = error(
            StatusCode::FORBIDDEN,
            serde_json::json!({"detail": "No permission."}),
        );
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.to_string(), "HTTP 403: No permission.");

        let err = error(StatusCode::BAD_GATEWAY, serde_json::json!({}));
        assert_eq!(err.to_string(), "HTTP 502: Server error, try again later");
    }

    #[test]
    fn normalizes_base_url() {
        let rest = Rest::new(&Config {
            base_url: "https://api.example.com/v1".parse().unwrap(),
            ..Config::default()
        })
        .unwrap();

        assert_eq!(rest.base_url().as_str(), "https://api.example.com/v1/");
        assert_eq!(
            rest.base_url().join("properties/1/").unwrap().as_str(),
            "https://api.example.com/v1/properties/1/",
        );
    }
}
