//! [`Api`] implementations for [`Rest`].
//!
//! [`Api`]: crate::infra::Api
//! [`Rest`]: super::Rest

mod agent;
mod lead;
mod notification;
mod property;
