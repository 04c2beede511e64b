//! Where collaborator calls run.

use std::future::Future;

use tokio::runtime::{Handle, TryCurrentError};
use tokio::task::JoinHandle;

/// Worker context of a presenter.
///
/// Identity and profile calls are spawned here. Their results travel back to
/// the UI context over a channel, so the view is never touched from a worker.
#[derive(Debug, Clone)]
pub struct Schedulers {
    worker: Handle,
}

impl Schedulers {
    /// Spawn work on the given runtime.
    pub fn new(worker: Handle) -> Self {
        Self { worker }
    }

    /// Spawn work on the runtime the caller is running on.
    pub fn current() -> Result<Self, TryCurrentError> {
        Handle::try_current().map(Self::new)
    }

    pub(crate) fn spawn<F>(&self, task: F) -> JoinHandle<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.worker.spawn(task)
    }
}
