// Library exports for testing and reuse

pub mod api;
pub mod app;
pub mod screens;
pub mod session;
pub mod settings;
pub mod storage;
