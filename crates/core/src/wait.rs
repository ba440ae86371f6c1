//! Async poller family (tokio).
//!
//! Each operation evaluates a caller-supplied predicate at a fixed interval
//! until it holds or the timeout ceiling elapses, then evaluates it one final
//! time and returns that result. The final check runs on every exit path, so
//! the return value reflects the true current state even when the timeout
//! fired on the same tick the condition became true.
//!
//! Interval and timeout come from [`PollOptions`] and are clamped to
//! [`MIN_INTERVAL`](crate::MIN_INTERVAL) / [`MIN_TIMEOUT`](crate::MIN_TIMEOUT)
//! rather than rejected. Timing out is a normal negative outcome: the
//! bool-returning operations never produce an error, and [`require`] is the
//! only place a timeout becomes one.
//!
//! Sleeps and elapsed-time arithmetic go through [`tokio::time`], so tests
//! running under a paused clock observe exact virtual durations.

use std::future::Future;

use tokio::time::{self, Instant};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::options::PollOptions;

/// Polls `predicate` until it holds or the timeout elapses.
///
/// Returns the result of the final evaluation, performed after the loop
/// exits for any reason. The predicate is always evaluated at least twice:
/// once on entry and once as the final check.
pub async fn until<F>(mut predicate: F, opts: PollOptions) -> bool
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
		time::sleep(interval).await;
	}

	let satisfied = predicate();
	debug!(
		target = "settle",
		satisfied,
		elapsed_ms = start.elapsed().as_millis() as u64,
		"poll finished"
	);
	satisfied
}

/// Polls a fallible predicate until it holds or the timeout elapses.
///
/// Any error from the predicate propagates unmodified, including one raised
/// by the final check; the loop never retries across a predicate failure.
pub async fn try_until<F, E>(mut predicate: F, opts: PollOptions) -> std::result::Result<bool, E>
where
	F: FnMut() -> std::result::Result<bool, E>,
{
	let interval = opts.effective_interval();
	let timeout = opts.effective_timeout();
	let start = Instant::now();

	while !predicate()? && start.elapsed() <= timeout {
		time::sleep(interval).await;
	}

	predicate()
}

/// Polls a future-returning predicate until it holds or the timeout elapses.
///
/// The probe future is awaited once per evaluation, so conditions that query
/// live external state (a page evaluation, a session round-trip) poll at the
/// configured cadence plus however long each probe takes.
pub async fn until_async<F, Fut>(mut predicate: F, opts: PollOptions) -> bool
where
	F: FnMut() -> Fut,
	Fut: Future<Output = bool>,
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

	while !predicate().await && start.elapsed() <= timeout {
		time::sleep(interval).await;
	}

	let satisfied = predicate().await;
	debug!(
		target = "settle",
		satisfied,
		elapsed_ms = start.elapsed().as_millis() as u64,
		"poll finished"
	);
	satisfied
}

/// Polls a fallible future-returning predicate until it holds or the timeout
/// elapses. Probe errors propagate unmodified.
pub async fn try_until_async<F, Fut, E>(mut predicate: F, opts: PollOptions) -> std::result::Result<bool, E>
where
	F: FnMut() -> Fut,
	Fut: Future<Output = std::result::Result<bool, E>>,
{
	let interval = opts.effective_interval();
	let timeout = opts.effective_timeout();
	let start = Instant::now();

	while !predicate().await? && start.elapsed() <= timeout {
		time::sleep(interval).await;
	}

	predicate().await
}

/// Like [`until`], but a negative outcome becomes [`Error::Timeout`].
///
/// `condition` labels what was awaited in the error message; the reported
/// budget is the effective (clamped) timeout in milliseconds.
pub async fn require<F>(condition: &str, predicate: F, opts: PollOptions) -> Result<()>
where
	F: FnMut() -> bool,
{
	if until(predicate, opts).await {
		Ok(())
	} else {
		Err(Error::Timeout {
			ms: opts.effective_timeout().as_millis() as u64,
			condition: condition.to_string(),
		})
	}
}
