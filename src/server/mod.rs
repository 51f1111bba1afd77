//! Server Module
//!
//! Process-level concerns: configuration, shared application state, and app
//! construction.
//!
//! - **`config`** - environment-derived `ServerConfig`, validated at startup
//! - **`state`** - `AppState` shared across handlers
//! - **`init`** - database connection, migrations, router assembly

pub mod config;
pub mod init;
pub mod state;

pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
