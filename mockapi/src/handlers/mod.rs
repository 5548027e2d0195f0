pub mod auth;
pub mod health;
pub mod profile;

pub use auth::{admin_login, agent_login, refresh, student_login};
pub use health::health_check;
pub use profile::me;
