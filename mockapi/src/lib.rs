// Library exports for testing and reuse

pub mod config;
pub mod directory;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod registry;
pub mod service;
pub mod token;

pub use config::{DemoAccount, MockApiConfig};
pub use service::{spawn_http, MockApi, MockApiHandle};
