//! Startup transition. Tries to restore the persisted session while a
//! splash is shown for at least the configured duration.

use std::time::{Duration, Instant};

use crate::app::state::AppScreen;
use crate::session::{RestoreOutcome, SessionService};

pub const SPLASH: &str = "Melio\nChargement en cours...";

/// Where startup lands, plus an optional banner for the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingOutcome {
    pub next: AppScreen,
    pub notice: Option<&'static str>,
}

pub async fn run(service: &mut SessionService, min_duration: Duration) -> LoadingOutcome {
    let started = Instant::now();
    let outcome = service.restore().await;

    // Hold the splash so fast restores do not flash it for a frame.
    let elapsed = started.elapsed();
    if elapsed < min_duration {
        tokio::time::sleep(min_duration - elapsed).await;
    }

    match outcome {
        RestoreOutcome::Restored(role) => LoadingOutcome {
            next: AppScreen::for_role(role),
            notice: None,
        },
        RestoreOutcome::NoSession => LoadingOutcome {
            next: AppScreen::Login,
            notice: None,
        },
        RestoreOutcome::Expired => LoadingOutcome {
            next: AppScreen::Login,
            notice: Some(crate::api::messages::SESSION_EXPIRED_FR),
        },
        RestoreOutcome::Unreachable(message) => LoadingOutcome {
            next: AppScreen::Login,
            notice: Some(message),
        },
    }
}
