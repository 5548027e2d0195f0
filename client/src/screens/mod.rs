pub mod admin_login;
pub mod agent_login;
pub mod dashboard;
pub mod legal;
pub mod loading;
pub mod login;
