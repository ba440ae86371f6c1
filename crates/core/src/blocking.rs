//! Blocking poller family for synchronous test code.
//!
//! Same contract as [`crate::wait`], with `std::thread::sleep` delays. These
//! block the calling thread for the full wait. Do not call them from inside
//! an async runtime; use the [`crate::wait`] family there.

use std::thread;
use std::time::Instant;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::options::PollOptions;

/// Polls `predicate` until it holds or the timeout elapses.
///
/// Clamps the interval and timeout to their floors, then loops: while the
/// predicate is false and elapsed time is within the timeout, sleep one
/// interval. On loop exit the predicate is evaluated one final time and that
/// result is returned, so the value reflects the true current state even
/// when the timeout fired on the same tick the condition became true.
pub fn until<F>(mut predicate: F, opts: PollOptions) -> bool
where
	F: FnMut() -> bool,
{
	let interval = opts.effective_interval();
	let timeout = opts.effective_timeout();
	trace!(
		target = "settle",
		interval_ms = interval.as_millis() as u64,
		timeout_ms = timeout.as_millis() as u64,
		"polling until condition or timeout"
	);
	let start = Instant::now();

	while !predicate() && start.elapsed() <= timeout {
		thread::sleep(interval);
	}

	let satisfied = predicate();
	debug!(
		target = "settle",
		satisfied,
		elapsed_ms = start.elapsed().as_millis() as u64,
		"blocking poll finished"
	);
	satisfied
}

/// Polls a fallible predicate until it holds or the timeout elapses.
///
/// Any error from the predicate propagates unmodified, including one raised
/// by the final check.
pub fn try_until<F, E>(mut predicate: F, opts: PollOptions) -> std::result::Result<bool, E>
where
	F: FnMut() -> std::result::Result<bool, E>,
{
	let interval = opts.effective_interval();
	let timeout = opts.effective_timeout();
	let start = Instant::now();

	while !predicate()? && start.elapsed() <= timeout {
		thread::sleep(interval);
	}

	predicate()
}

/// Like [`until`], but a negative outcome becomes [`Error::Timeout`].
pub fn require<F>(condition: &str, predicate: F, opts: PollOptions) -> Result<()>
where
	F: FnMut() -> bool,
{
	if until(predicate, opts) {
		Ok(())
	} else {
		Err(Error::Timeout {
			ms: opts.effective_timeout().as_millis() as u64,
			condition: condition.to_string(),
		})
	}
}
