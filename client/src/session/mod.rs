pub mod guard;
pub mod service;

pub use service::{LoginOutcome, RestoreOutcome, SessionService};
