//! Application state shared by all handlers.

use std::sync::Arc;

use tokio::sync::watch;

use super::views::Views;
use crate::infra::UserRepository;

/// Application state containing the repository and views.
#[derive(Clone)]
pub struct AppState {
    /// User repository
    pub users: Arc<dyn UserRepository>,
    /// Page templates
    pub views: Arc<Views>,
    /// Raised when a request fails
    pub shutdown: Shutdown,
}

impl AppState {
    /// Create new application state with a fresh shutdown signal.
    pub fn new(users: Arc<dyn UserRepository>, views: Arc<Views>) -> Self {
        Self {
            users,
            views,
            shutdown: Shutdown::new(),
        }
    }
}

/// One-shot stop signal carrying the reason the server has to stop.
#[derive(Clone)]
pub struct Shutdown {
    tx: Arc<watch::Sender<Option<String>>>,
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// Request a stop. Only the first reason is kept.
    pub fn trigger(&self, reason: impl Into<String>) {
        let reason = reason.into();
        self.tx.send_if_modified(|current| {
            if current.is_some() {
                return false;
            }
            *current = Some(reason);
            true
        });
    }

    /// Reason given to the first `trigger` call, if any
    pub fn reason(&self) -> Option<String> {
        self.tx.borrow().clone()
    }

    /// Resolve once a stop has been requested.
    pub async fn wait(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives in `self`, so the channel cannot close here.
        let _ = rx.wait_for(Option::is_some).await;
    }
}
