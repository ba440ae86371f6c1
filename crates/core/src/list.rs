//! Predicates over list-like UI state.
//!
//! The two conditions UI tests wait on most: "the control has at least N
//! entries" and "some visible entry matches". Builders take a plain closure
//! that samples the live state and return `FnMut() -> bool` predicates for
//! either poller family, so no UI-toolkit type appears in the signature.

use std::fmt;

use regex::Regex;

use crate::error::Result;

/// How an awaited entry is recognized among a control's visible entries.
#[derive(Debug, Clone)]
pub enum EntryMatch {
	/// Entry equals the text exactly.
	Exact(String),
	/// Entry contains the text.
	Substring(String),
	/// Entry matches the regular expression.
	Pattern(Regex),
}

impl EntryMatch {
	/// Compiles `pattern` into [`EntryMatch::Pattern`].
	pub fn pattern(pattern: &str) -> Result<Self> {
		Ok(EntryMatch::Pattern(Regex::new(pattern)?))
	}

	/// Whether a single visible entry satisfies this matcher.
	pub fn matches(&self, entry: &str) -> bool {
		match self {
			EntryMatch::Exact(text) => entry == text,
			EntryMatch::Substring(text) => entry.contains(text.as_str()),
			EntryMatch::Pattern(pattern) => pattern.is_match(entry),
		}
	}
}

impl fmt::Display for EntryMatch {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			EntryMatch::Exact(text) => write!(f, "exact:{text}"),
			EntryMatch::Substring(text) => write!(f, "substring:{text}"),
			EntryMatch::Pattern(pattern) => write!(f, "pattern:{pattern}"),
		}
	}
}

/// Builds a predicate that holds once `probe` reports at least `min` entries.
///
/// The probe runs on every evaluation, so a control that fills in over time
/// is re-sampled at each poll.
pub fn min_count<F>(mut probe: F, min: usize) -> impl FnMut() -> bool
where
	F: FnMut() -> usize,
{
	move || probe() >= min
}

/// Builds a predicate that holds once any probed entry satisfies `matcher`.
pub fn entry_present<F>(mut probe: F, matcher: EntryMatch) -> impl FnMut() -> bool
where
	F: FnMut() -> Vec<String>,
{
	move || probe().iter().any(|entry| matcher.matches(entry))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn exact_requires_full_equality() {
		let matcher = EntryMatch::Exact("door 42".into());
		assert!(matcher.matches("door 42"));
		assert!(!matcher.matches("door 421"));
		assert!(!matcher.matches("DOOR 42"));
	}

	#[test]
	fn substring_finds_inner_text() {
		let matcher = EntryMatch::Substring("door".into());
		assert!(matcher.matches("front door open"));
		assert!(!matcher.matches("window closed"));
	}

	#[test]
	fn pattern_matches_with_regex() {
		let matcher = EntryMatch::pattern(r"^door \d+$").unwrap();
		assert!(matcher.matches("door 7"));
		assert!(!matcher.matches("door seven"));
	}

	#[test]
	fn invalid_pattern_is_an_error() {
		let err = EntryMatch::pattern("(").unwrap_err();
		assert!(!err.is_timeout());
	}

	#[test]
	fn display_labels_name_the_matcher_kind() {
		assert_eq!(EntryMatch::Exact("a".into()).to_string(), "exact:a");
		assert_eq!(EntryMatch::Substring("b".into()).to_string(), "substring:b");
		assert_eq!(EntryMatch::pattern("c+").unwrap().to_string(), "pattern:c+");
	}

	#[test]
	fn min_count_resamples_the_live_source() {
		let mut len = 0usize;
		let mut pred = min_count(
			|| {
				len += 1;
				len
			},
			3,
		);

		assert!(!pred());
		assert!(!pred());
		assert!(pred());
	}

	#[test]
	fn entry_present_spots_entries_as_they_appear() {
		let mut snapshots = [
			vec!["loading".to_string()],
			vec!["loading".to_string(), "door 42".to_string()],
		]
		.into_iter();
		let mut pred = entry_present(|| snapshots.next().unwrap(), EntryMatch::Substring("door".into()));

		assert!(!pred());
		assert!(pred());
	}
}
