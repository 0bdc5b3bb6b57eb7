use chrono::{DateTime, Duration, Utc};

/// Source of "now" for recency checks.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stuck at one instant. Handy for reproducible renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// How long after release an item still counts as new.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecencyWindow {
    span: Duration,
}

impl RecencyWindow {
    pub const DEFAULT_DAYS: u32 = 30;

    pub fn days(days: u32) -> Self {
        Self {
            span: Duration::days(i64::from(days)),
        }
    }

    pub fn span(&self) -> Duration {
        self.span
    }

    /// Recent iff `now - released < span`.
    ///
    /// The upper edge is exclusive: an item released exactly `span` ago is no longer new.
    /// Release dates in the future always count as recent.
    pub fn is_recent_release(&self, released: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(released) < self.span
    }
}

impl Default for RecencyWindow {
    fn default() -> Self {
        Self::days(Self::DEFAULT_DAYS)
    }
}
