//! Greeting construction: uptime formatting plus the `BUILD_PROFILE` echo.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

/// Environment variable echoed back in every greeting.
pub const PROFILE_VAR: &str = "BUILD_PROFILE";

/// Rendered in place of the profile when `BUILD_PROFILE` is unset.
pub const DEFAULT_ABSENT_PROFILE: &str = "null";

/// Where the build profile comes from. Consulted once per greeting.
pub trait ProfileSource: Send + Sync {
    fn profile(&self) -> Option<String>;
}

/// Reads `BUILD_PROFILE` from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProfileSource for ProcessEnv {
    fn profile(&self) -> Option<String> {
        // Set values are always echoed, lossily when not UTF-8.
        std::env::var_os(PROFILE_VAR).map(|value| value.to_string_lossy().into_owned())
    }
}

/// A profile fixed at construction time.
#[derive(Debug, Clone, Default)]
pub struct FixedProfile(pub Option<String>);

impl FixedProfile {
    pub fn set(profile: impl Into<String>) -> Self {
        Self(Some(profile.into()))
    }

    pub fn unset() -> Self {
        Self(None)
    }
}

impl ProfileSource for FixedProfile {
    fn profile(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Builds the `/` response body.
///
/// The start instant is captured once when the service is created and never
/// changes afterwards, so a single instance can be shared by every request
/// handler without locking.
#[derive(Clone)]
pub struct GreetingService {
    started: Instant,
    started_at: DateTime<Utc>,
    absent_profile: String,
    profile: Arc<dyn ProfileSource>,
}

impl GreetingService {
    pub fn new(
        started: Instant,
        started_at: DateTime<Utc>,
        absent_profile: impl Into<String>,
    ) -> Self {
        Self {
            started,
            started_at,
            absent_profile: absent_profile.into(),
            profile: Arc::new(ProcessEnv),
        }
    }

    /// Captures the start instant now.
    pub fn start_now(absent_profile: impl Into<String>) -> Self {
        Self::new(Instant::now(), Utc::now(), absent_profile)
    }

    pub fn with_profile_source(mut self, source: impl ProfileSource + 'static) -> Self {
        self.profile = Arc::new(source);
        self
    }

    pub fn say_hello(&self) -> String {
        self.say_hello_at(Instant::now())
    }

    pub fn say_hello_at(&self, now: Instant) -> String {
        let uptime = format_uptime(now.saturating_duration_since(self.started));
        let profile = self.profile.profile();
        let profile = profile.as_deref().unwrap_or(&self.absent_profile);
        render_greeting(&uptime, profile)
    }

    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn absent_profile(&self) -> &str {
        &self.absent_profile
    }
}

impl fmt::Debug for GreetingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GreetingService")
            .field("started_at", &self.started_at)
            .field("absent_profile", &self.absent_profile)
            .finish_non_exhaustive()
    }
}

/// Renders whole minutes and leftover seconds as `MM:SS`.
///
/// Minutes are padded, never truncated: 102 minutes renders as `102:05`.
pub fn format_uptime(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    let minutes = millis / 60_000;
    let seconds = millis / 1_000 - minutes * 60;
    format!("{:02}:{:02}", minutes, seconds)
}

pub fn render_greeting(uptime: &str, profile: &str) -> String {
    format!("Hello, Spring! (up {}, {})", uptime, profile)
}
