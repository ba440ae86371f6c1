// Wall-clock behavior of the async poller family.
//
// The in-module tests pin exact virtual timing under a paused clock; these
// run against the real clock, so the upper bounds carry scheduling slack.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use settle::{EntryMatch, PollOptions, list, wait};

#[tokio::test]
async fn always_false_condition_exhausts_the_budget() {
	let opts = PollOptions::from_millis(100, 1_000);
	let start = Instant::now();
	let hit = wait::until(|| false, opts).await;
	let elapsed = start.elapsed();

	assert!(!hit);
	assert!(elapsed >= Duration::from_secs(1), "returned early: {elapsed:?}");
	assert!(elapsed < Duration::from_millis(1_800), "overran budget: {elapsed:?}");
}

#[tokio::test]
async fn background_task_satisfies_condition_mid_budget() {
	let ready = Arc::new(AtomicBool::new(false));
	let flip = ready.clone();
	tokio::spawn(async move {
		tokio::time::sleep(Duration::from_millis(300)).await;
		flip.store(true, Ordering::SeqCst);
	});

	let opts = PollOptions::from_millis(100, 5_000);
	let start = Instant::now();
	let hit = wait::until(move || ready.load(Ordering::SeqCst), opts).await;
	let elapsed = start.elapsed();

	assert!(hit);
	assert!(elapsed >= Duration::from_millis(300), "returned before the flip: {elapsed:?}");
	assert!(elapsed < Duration::from_millis(1_500), "did not return promptly: {elapsed:?}");
}

#[tokio::test]
async fn list_predicates_compose_with_the_poller() {
	// Entries appear over time, the way a rendering process fills a control.
	let entries = Arc::new(std::sync::Mutex::new(vec!["header".to_string()]));
	let writer = entries.clone();
	tokio::spawn(async move {
		for n in 0..5 {
			tokio::time::sleep(Duration::from_millis(100)).await;
			writer.lock().unwrap().push(format!("door {n}"));
		}
	});

	let opts = PollOptions::from_millis(100, 5_000);

	let count_probe = entries.clone();
	let filled = wait::until(list::min_count(move || count_probe.lock().unwrap().len(), 4), opts).await;
	assert!(filled);

	let entry_probe = entries.clone();
	let matcher = EntryMatch::pattern(r"^door \d+$").unwrap();
	let present = wait::until(list::entry_present(move || entry_probe.lock().unwrap().clone(), matcher), opts).await;
	assert!(present);
}

#[tokio::test]
async fn require_surfaces_timeout_as_error() {
	let opts = PollOptions::from_millis(100, 1_000);
	let err = wait::require("entries appear", || false, opts).await.unwrap_err();

	assert!(err.is_timeout());
	assert_eq!(err.to_string(), "timeout after 1000ms waiting for: entries appear");
}
