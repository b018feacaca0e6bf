//! Command implementations

mod check;
mod config_cmd;
mod context;
mod exchange;
mod shell;
mod upload;

pub use check::check;
pub use config_cmd::config_cmd;
pub use exchange::exchange;
pub use shell::shell;
pub use upload::upload;
