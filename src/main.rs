use std::env;

use site_interactions::domain::{FieldName, SubmissionState};
use site_interactions::ui::RecordingView;
use site_interactions::{Site, SiteConfig, SiteError, UserEvent};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,site_interactions=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    if let Err(err) = run() {
        eprintln!("site-interactions: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), SiteError> {
    let config = match env::args().nth(1) {
        Some(path) => {
            info!(%path, "loading configuration");
            SiteConfig::load(path)?
        }
        None => SiteConfig::default(),
    };

    let view = RecordingView::from_layout(&config.layout);
    let mut site = Site::new(&config, view);

    site.dispatch(UserEvent::NavToggleClick);
    site.dispatch(UserEvent::Scroll { y: 240 });
    site.dispatch(UserEvent::Intersect {
        target: "stat-projects".to_string(),
        ratio: 0.75,
    });

    // First attempt leaves the name empty and gets rejected
    type_into(&mut site, FieldName::Email, "hello@creativeflow.studio");
    type_into(&mut site, FieldName::Message, "Short");
    site.dispatch(UserEvent::Blur(FieldName::Message));
    let outcome = site.dispatch(UserEvent::Submit);
    info!(?outcome, "first submit");

    type_into(&mut site, FieldName::Name, "Jordan");
    type_into(
        &mut site,
        FieldName::Message,
        "We need a refreshed brand identity for our launch.",
    );
    let outcome = site.dispatch(UserEvent::Submit);
    info!(?outcome, "second submit");

    site.dispatch(UserEvent::FilterClick("filter-web".to_string()));
    site.dispatch(UserEvent::FaqClick("2".to_string()));
    site.dispatch(UserEvent::Resize { width: 1280 });

    site.advance(2000);
    site.advance(3000);
    site.advance(10_000);

    let state = site
        .contact()
        .map(|contact| contact.submission())
        .unwrap_or_default();
    if state != SubmissionState::Idle {
        return Err(SiteError::UnexpectedSubmissionState(state));
    }

    info!(
        now_ms = site.now_ms(),
        slide = ?site.slider().map(|slider| slider.current()),
        filter = ?site.portfolio().map(|portfolio| portfolio.active_filter()),
        faq_open = ?site.faq().open_item(),
        "demo session finished"
    );

    let dropped = site.view().dropped_updates();
    if dropped > 0 {
        warn!(dropped, "view updates targeted missing elements");
    }
    Ok(())
}

fn type_into(site: &mut Site<RecordingView>, field: FieldName, value: &str) {
    site.dispatch(UserEvent::Input {
        field,
        value: value.to_string(),
    });
}
