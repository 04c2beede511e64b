//! Presenter of the profile page.
//!
//! The presenter lives on the UI context. `subscribe` resolves the signed-in
//! identity, then its profile; both calls run on the worker context of
//! [`Schedulers`] and come back as completions the UI loop applies with
//! [`ProfilePagePresenter::next_completion`],
//! [`ProfilePagePresenter::dispatch_pending`] or
//! [`ProfilePagePresenter::settle`].
//!
//! A completion is applied only if its operation is still registered in the
//! [`Subscriptions`] set. `unsubscribe` empties the set, so anything arriving
//! afterwards is dropped without reaching the view.

mod schedulers;
mod state;
mod subscriptions;

pub use schedulers::*;
pub use state::*;
pub use subscriptions::*;

use std::fmt;
use std::future::Future;
use std::rc::Weak;
use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::auth::{Identity, UserId};
use crate::error::{ProfileError, Result, SourceError, Stage};
use crate::ports::{Destination, IdentitySource, ProfileStore, ProfileView};
use crate::profile::{Photo, Profile};
use crate::telemetry;

/// Result of a worker operation, tagged with its ticket.
#[derive(Debug)]
struct Completion {
    ticket: Ticket,
    outcome: Outcome,
}

#[derive(Debug)]
enum Outcome {
    Identity(Result<Option<Identity>>),
    Profile(Result<Option<Profile>>),
    SignOut(Result<()>),
}

#[derive(Debug, Clone, Copy)]
enum Operation {
    Identity,
    Profile,
    SignOut,
}

const INTERRUPTED: SourceError = SourceError::Interrupted;

impl Operation {
    fn interrupted(self) -> Outcome {
        match self {
            Operation::Identity => Outcome::Identity(Err(INTERRUPTED)),
            Operation::Profile => Outcome::Profile(Err(INTERRUPTED)),
            Operation::SignOut => Outcome::SignOut(Err(INTERRUPTED)),
        }
    }
}

/// Sends the outcome of one operation back to the UI context.
///
/// If the task dies before producing anything the drop sends an interrupted
/// outcome instead, so the ticket is always resolved. That covers aborted
/// tasks, and collaborator panics when panics unwind (the release profile
/// aborts the process instead).
struct Delivery {
    ticket: Ticket,
    operation: Operation,
    tx: Option<UnboundedSender<Completion>>,
}

impl Delivery {
    fn send(mut self, outcome: Outcome) {
        if let Some(tx) = self.tx.take() {
            // Receiver is gone only when the presenter was dropped.
            let _ = tx.send(Completion {
                ticket: self.ticket,
                outcome,
            });
        }
    }
}

impl Drop for Delivery {
    fn drop(&mut self) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.send(Completion {
                ticket: self.ticket,
                outcome: self.operation.interrupted(),
            });
        }
    }
}

/// Presenter of the profile page.
pub struct ProfilePagePresenter {
    identity: Arc<dyn IdentitySource>,
    profiles: Arc<dyn ProfileStore>,
    view: Weak<dyn ProfileView>,
    schedulers: Schedulers,
    subscriptions: Subscriptions,
    state: PageState,
    current_identity: Option<Identity>,
    sign_out: Option<Ticket>,
    tx: UnboundedSender<Completion>,
    rx: UnboundedReceiver<Completion>,
}

impl fmt::Debug for ProfilePagePresenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfilePagePresenter")
            .field("state", &self.state)
            .field("current_identity", &self.current_identity)
            .field("pending", &self.subscriptions.len())
            .field("view_alive", &(self.view.strong_count() > 0))
            .finish()
    }
}

impl ProfilePagePresenter {
    /// Create a new [`ProfilePagePresenter`].
    ///
    /// The view is not owned: once it is dropped, commands are skipped.
    pub fn new(
        identity: Arc<dyn IdentitySource>,
        profiles: Arc<dyn ProfileStore>,
        view: Weak<dyn ProfileView>,
        schedulers: Schedulers,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        Self {
            identity,
            profiles,
            view,
            schedulers,
            subscriptions: Subscriptions::new(),
            state: PageState::Idle,
            current_identity: None,
            sign_out: None,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    /// Identity resolved during this session, if any.
    pub fn current_identity(&self) -> Option<&Identity> {
        self.current_identity.as_ref()
    }

    /// Number of outstanding operations.
    pub fn pending(&self) -> usize {
        self.subscriptions.len()
    }

    /// The view became active: load identity then profile.
    ///
    /// Does nothing while a fetch sequence is already running.
    pub fn subscribe(&mut self) {
        if self.state.is_loading() {
            tracing::debug!(
                state = %self.state,
                "already loading, ignoring subscribe"
            );
            return;
        }

        self.transition(PageState::FetchingIdentity);
        self.with_view(|view| {
            view.set_thumbnail_loading(true);
            view.set_detail_loading(true);
        });

        let source = Arc::clone(&self.identity);
        self.spawn(Operation::Identity, async move {
            Outcome::Identity(source.current_identity().await)
        });
    }

    /// The view became inactive: cancel everything still running.
    pub fn unsubscribe(&mut self) {
        let cancelled = self.subscriptions.clear();
        self.current_identity = None;
        self.sign_out = None;
        self.transition(PageState::TornDown);
        tracing::debug!(cancelled, "profile page unsubscribed");
    }

    pub fn on_thumbnail_click(&self) {
        self.with_view(|view| view.navigate(Destination::PhotoGallery));
    }

    pub fn on_edit_profile_click(&self) {
        self.with_view(|view| view.navigate(Destination::ProfileDetail));
    }

    pub fn on_account_settings_click(&self) {
        self.with_view(|view| view.navigate(Destination::ProfileSettings));
    }

    pub fn on_logout_click(&self) {
        self.with_view(|view| view.show_logout_prompt());
    }

    /// Called by the view once the profile photo is displayed.
    pub fn on_thumbnail_loaded(&self) {
        self.with_view(|view| view.set_thumbnail_loading(false));
    }

    /// The user confirmed the logout prompt.
    ///
    /// Does nothing while a sign-out is already pending.
    pub fn on_logout_confirmed(&mut self) {
        if self.sign_out.is_some() {
            tracing::debug!("sign out already pending, ignoring confirmation");
            return;
        }

        let source = Arc::clone(&self.identity);
        let ticket = self.spawn(Operation::SignOut, async move {
            Outcome::SignOut(source.sign_out().await)
        });
        self.sign_out = Some(ticket);
    }

    /// Wait for the next outstanding operation and apply its result.
    ///
    /// Returns `false` once nothing is outstanding.
    pub async fn next_completion(&mut self) -> bool {
        while !self.subscriptions.is_empty() {
            match self.rx.recv().await {
                Some(completion) => {
                    if self.dispatch(completion) {
                        return true;
                    }
                },
                // Unreachable while `self.tx` lives.
                None => break,
            }
        }
        false
    }

    /// Apply every result already delivered, without waiting.
    ///
    /// Returns how many results reached the page.
    pub fn dispatch_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.rx.try_recv() {
            if self.dispatch(completion) {
                applied += 1;
            }
        }
        applied
    }

    /// Apply results until nothing is outstanding.
    pub async fn settle(&mut self) {
        while self.next_completion().await {}
    }

    fn spawn<F>(&mut self, operation: Operation, task: F) -> Ticket
    where
        F: Future<Output = Outcome> + Send + 'static,
    {
        let ticket = self.subscriptions.reserve();
        let delivery = Delivery {
            ticket,
            operation,
            tx: Some(self.tx.clone()),
        };

        let handle = self.schedulers.spawn(async move {
            let outcome = task.await;
            delivery.send(outcome);
        });
        self.subscriptions.add(ticket, handle.abort_handle());
        ticket
    }

    fn dispatch(&mut self, completion: Completion) -> bool {
        if !self.subscriptions.remove(completion.ticket) {
            tracing::trace!(
                ticket = ?completion.ticket,
                "dropping result of a cancelled operation"
            );
            return false;
        }

        match completion.outcome {
            Outcome::Identity(result) => self.on_identity(result),
            Outcome::Profile(result) => self.on_profile(result),
            Outcome::SignOut(result) => self.on_signed_out(result),
        }
        true
    }

    fn on_identity(&mut self, result: Result<Option<Identity>>) {
        match result {
            Ok(Some(identity)) => {
                tracing::debug!(
                    user_id = %identity.user_id(),
                    "identity resolved"
                );
                telemetry::record_outcome("identity", "ok");

                let user_id = identity.user_id().clone();
                self.current_identity = Some(identity);
                self.transition(PageState::FetchingProfile);
                self.fetch_profile(user_id);
            },
            Ok(None) => self.fail("identity", ProfileError::NotSignedIn),
            Err(err) => self.fail(
                "identity",
                ProfileError::fetch_failed(Stage::Identity, &err),
            ),
        }
    }

    // Only reachable from a resolved identity.
    fn fetch_profile(&mut self, user_id: UserId) {
        let store = Arc::clone(&self.profiles);
        self.spawn(Operation::Profile, async move {
            Outcome::Profile(store.find_profile(&user_id).await)
        });
    }

    fn on_profile(&mut self, result: Result<Option<Profile>>) {
        match result {
            Ok(Some(profile)) => {
                telemetry::record_outcome("profile", "ok");
                self.render(&profile);
                self.transition(PageState::Loaded);
            },
            Ok(None) => self.fail("profile", ProfileError::ProfileNotFound),
            Err(err) => self.fail(
                "profile",
                ProfileError::fetch_failed(Stage::Profile, &err),
            ),
        }
    }

    fn on_signed_out(&mut self, result: Result<()>) {
        self.sign_out = None;

        match result {
            Ok(()) => {
                // Fetches still running belong to the signed-out user.
                let cancelled = self.subscriptions.clear();
                let user_id = self.current_identity.take().map(|identity| {
                    identity.user_id().to_string()
                });
                tracing::info!(?user_id, cancelled, "user signed out");
                telemetry::record_outcome("sign_out", "ok");

                self.transition(PageState::Unauthenticated);
                self.with_view(|view| view.navigate(Destination::Login));
            },
            Err(err) => self.fail(
                "sign_out",
                ProfileError::SignOutFailed(err.to_string()),
            ),
        }
    }

    fn render(&self, profile: &Profile) {
        self.with_view(|view| {
            view.set_bio(&profile.bio);
            view.set_interests(&profile.interests);
            view.set_name(&profile.name);
            view.set_email(&profile.email);
            view.set_detail_loading(false);

            match profile.photo() {
                Photo::Default => view.set_default_profile_photo(),
                Photo::Url(url) => view.set_profile_photo_url(url),
            }
        });
    }

    fn fail(&mut self, operation: &'static str, err: ProfileError) {
        tracing::warn!(
            operation,
            error = %err,
            "profile page operation failed"
        );
        telemetry::record_outcome(operation, err.kind());

        if let Some(notice) = err.notice() {
            self.with_view(|view| view.show_message(notice));
        }

        if err.redirects_to_login() {
            self.current_identity = None;
            self.transition(PageState::Unauthenticated);
            self.with_view(|view| view.navigate(Destination::Login));
        }
    }

    fn transition(&mut self, next: PageState) {
        tracing::debug!(from = %self.state, to = %next, "profile page state");
        self.state = next;
    }

    fn with_view(&self, command: impl FnOnce(&dyn ProfileView)) {
        match self.view.upgrade() {
            Some(view) => command(&*view),
            None => tracing::debug!("view dropped, skipping command"),
        }
    }
}
