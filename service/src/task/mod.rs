//! Background [`Task`]s definitions.

mod background;
pub mod poll_notifications;

pub use common::Handler as Task;

pub use self::{
    background::{Background, Mount},
    poll_notifications::PollNotifications,
};
