//! Poll configuration shared by every wait operation.
//!
//! Interval and timeout travel together through call sites as a
//! [`PollOptions`] value; there is no ambient global state. Out-of-range
//! values are clamped at use rather than rejected, so ad hoc test code can
//! pass whatever it has.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Floor applied to caller-supplied poll intervals.
pub const MIN_INTERVAL: Duration = Duration::from_millis(100);

/// Floor applied to caller-supplied timeout ceilings.
pub const MIN_TIMEOUT: Duration = Duration::from_secs(1);

/// Default delay between successive predicate evaluations.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);

/// Default wall-clock budget before the poller gives up.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Interval and timeout for a single poll call.
///
/// On the wire (batch config files) both fields are camelCase millisecond
/// counts and both are optional:
///
/// ```json
/// { "intervalMs": 250, "timeoutMs": 5000 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollOptions {
	/// Delay between successive predicate evaluations.
	#[serde(rename = "intervalMs", with = "duration_ms")]
	pub interval: Duration,

	/// Wall-clock budget before the poller gives up and runs its final check.
	#[serde(rename = "timeoutMs", with = "duration_ms")]
	pub timeout: Duration,
}

impl Default for PollOptions {
	fn default() -> Self {
		Self {
			interval: DEFAULT_INTERVAL,
			timeout: DEFAULT_TIMEOUT,
		}
	}
}

impl PollOptions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds options from millisecond counts.
	pub fn from_millis(interval_ms: u64, timeout_ms: u64) -> Self {
		Self {
			interval: Duration::from_millis(interval_ms),
			timeout: Duration::from_millis(timeout_ms),
		}
	}

	/// Sets the delay between predicate evaluations.
	pub fn interval(mut self, interval: Duration) -> Self {
		self.interval = interval;
		self
	}

	/// Sets the wall-clock budget.
	pub fn timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	/// Caller-supplied interval clamped to [`MIN_INTERVAL`].
	pub fn effective_interval(&self) -> Duration {
		self.interval.max(MIN_INTERVAL)
	}

	/// Caller-supplied timeout clamped to [`MIN_TIMEOUT`].
	pub fn effective_timeout(&self) -> Duration {
		self.timeout.max(MIN_TIMEOUT)
	}
}

mod duration_ms {
	use std::time::Duration;

	use serde::{Deserialize, Deserializer, Serializer};

	pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_u64(value.as_millis() as u64)
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
		u64::deserialize(deserializer).map(Duration::from_millis)
	}
}
