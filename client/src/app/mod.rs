pub mod commands;
pub mod shell;
pub mod state;
