//! settle: bounded condition polling for UI test synchronization
//!
//! UI state that fills in asynchronously (a results list rendered by
//! another process, a control populated after navigation) cannot be
//! asserted on directly; test code has to wait for it. This crate provides
//! that wait as a small bounded poller: evaluate a caller-supplied predicate
//! at a fixed interval until it holds or a timeout ceiling elapses, then
//! evaluate it one final time and report that result as a plain boolean.
//!
//! Timing out is a normal negative outcome, not an error. Undersized
//! intervals and timeouts are clamped to safe floors rather than rejected.
//! Only the predicate touches the outside world, so any UI toolkit (or
//! none) works.
//!
//! # Examples
//!
//! Async test code (tokio), waiting on a list that a page fills in over
//! time:
//!
//! ```ignore
//! use std::time::Duration;
//!
//! use settle::{PollOptions, wait};
//!
//! #[tokio::test]
//! async fn search_results_render() {
//!     let page = harness::open("/search?q=doors").await;
//!
//!     let opts = PollOptions::new()
//!         .interval(Duration::from_millis(200))
//!         .timeout(Duration::from_secs(5));
//!
//!     let filled = wait::until_async(
//!         || async { page.count_rows("#results li").await >= 5 },
//!         opts,
//!     )
//!     .await;
//!     assert!(filled);
//! }
//! ```
//!
//! Blocking flavor for plain test functions, with the strict wrapper that
//! turns a miss into a timeout error:
//!
//! ```ignore
//! use settle::{EntryMatch, PollOptions, blocking, list};
//!
//! let matcher = EntryMatch::Substring("Welcome back".into());
//! blocking::require(
//!     "greeting appears in the activity feed",
//!     list::entry_present(|| feed.visible_entries(), matcher),
//!     PollOptions::default(),
//! )?;
//! ```

pub mod blocking;
pub mod error;
pub mod list;
pub mod options;
pub mod wait;

pub use error::{Error, Result};
pub use list::EntryMatch;
pub use options::{DEFAULT_INTERVAL, DEFAULT_TIMEOUT, MIN_INTERVAL, MIN_TIMEOUT, PollOptions};
