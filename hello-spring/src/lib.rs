//! A single-route HTTP service that greets with process uptime and the
//! value of `BUILD_PROFILE`.

pub mod config;
pub mod error;
pub mod greeting;
pub mod routes;
pub mod server;
pub mod telemetry;

pub use config::Config;
pub use error::{ConfigError, ServerError};
pub use greeting::{
    format_uptime, render_greeting, FixedProfile, GreetingService, ProcessEnv, ProfileSource,
    DEFAULT_ABSENT_PROFILE, PROFILE_VAR,
};
pub use server::{run, serve};
