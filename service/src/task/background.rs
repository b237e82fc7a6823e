//! Background environment for running [`Task`]s.

use std::{fmt::Display, future::Future};

use futures::{FutureExt as _, TryFutureExt as _};
use tokio::task;
use tracing as log;

#[cfg(doc)]
use crate::Task;

/// Background environment for running [`Task`]s on the current thread.
#[derive(Debug, Default)]
pub struct Background {
    /// Local set of tasks.
    set: task::LocalSet,
}

impl Background {
    /// Mounts a new [`Task`] inside this [`Background`] environment.
    ///
    /// The [`Task`] runs for as long as the returned [`Mount`] is alive, and
    /// is cancelled once it's dropped. Errors of the [`Task`] are logged.
    pub fn mount<F, E>(&self, name: &'static str, future: F) -> Mount
    where
        F: Future<Output = Result<(), E>> + 'static,
        E: Display + 'static,
    {
        log::debug!("`{name}` task mounted");
        let handle = self.set.spawn_local(
            future
                .unwrap_or_else(move |e| {
                    log::error!("`{name}` task failed: {e}");
                })
                .map(move |()| log::debug!("`{name}` task finished")),
        );
        Mount { name, handle }
    }

    /// Runs the provided `future` to completion, driving the mounted
    /// [`Task`]s meanwhile.
    pub async fn run_until<F: Future>(&self, future: F) -> F::Output {
        self.set.run_until(future).await
    }
}

/// Guard of a [`Task`] mounted into a [`Background`] environment, cancelling
/// it on drop.
#[derive(Debug)]
#[must_use = "the task is cancelled once `Mount` is dropped"]
pub struct Mount {
    /// Name of the mounted [`Task`].
    name: &'static str,

    /// Handle of the mounted [`Task`].
    handle: task::JoinHandle<()>,
}

impl Mount {
    /// Indicates whether the mounted [`Task`] has finished already.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Mount {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            log::debug!("`{}` task unmounted", self.name);
        }
        self.handle.abort();
    }
}
