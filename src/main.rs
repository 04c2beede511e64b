use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use profilepage::adapters::{
    InMemoryIdentitySource, InMemoryProfileStore, TracingView,
};
use profilepage::config::Configuration;
use profilepage::ports::ProfileView;
use profilepage::{PageState, ProfilePagePresenter, Schedulers, telemetry};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn main() -> Result<(), BoxError> {
    let path = std::env::args().nth(1).map(PathBuf::from).unwrap_or_default();
    let config = Configuration::default().path(path).read()?;

    telemetry::setup_logging(&config.log_filter)?;
    telemetry::describe_metrics();
    match config.source() {
        Some(source) => {
            tracing::info!(source = %source.display(), "configuration loaded")
        },
        None => tracing::warn!("`config.yaml` file not found, using defaults"),
    }

    // Backend calls run here, the page itself on the current thread.
    let worker = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.worker_threads)
        .thread_name("profilepage-worker")
        .build()?;
    let ui = tokio::runtime::Builder::new_current_thread().build()?;

    let schedulers = Schedulers::new(worker.handle().clone());
    ui.block_on(run_session(&config, schedulers))
}

/// One visit of the profile page, from opening to logout.
async fn run_session(
    config: &Configuration,
    schedulers: Schedulers,
) -> Result<(), BoxError> {
    let identity = Arc::new(InMemoryIdentitySource::new());
    let profiles = Arc::new(InMemoryProfileStore::new());

    if let Some(demo) = &config.demo {
        let user_id = identity.register(demo.credentials.clone()).await;
        profiles.insert(user_id, demo.profile.clone()).await;
        identity.sign_in(&demo.credentials).await?;
    }

    let view: Rc<dyn ProfileView> = Rc::new(TracingView::new(config.strings()));
    let mut presenter = ProfilePagePresenter::new(
        identity,
        profiles,
        Rc::downgrade(&view),
        schedulers,
    );

    presenter.subscribe();
    presenter.settle().await;

    if presenter.state() == PageState::Loaded {
        // A real view reports this once the photo is on screen.
        presenter.on_thumbnail_loaded();
        presenter.on_thumbnail_click();
        presenter.on_edit_profile_click();
        presenter.on_account_settings_click();

        presenter.on_logout_click();
        presenter.on_logout_confirmed();
        presenter.settle().await;
    }

    presenter.unsubscribe();
    tracing::info!(state = %presenter.state(), "session finished");
    Ok(())
}
