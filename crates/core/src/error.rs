use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the strict wait wrappers and matcher constructors.
///
/// The bool-returning pollers never construct one of these: timing out is a
/// normal negative outcome there, not a failure.
#[derive(Debug, Error)]
pub enum Error {
	/// Condition did not hold within the timeout budget.
	#[error("timeout after {ms}ms waiting for: {condition}")]
	Timeout {
		/// Effective (clamped) timeout budget in milliseconds.
		ms: u64,
		/// Caller-supplied label for the awaited condition.
		condition: String,
	},

	/// Invalid regular expression supplied for an entry pattern.
	#[error(transparent)]
	Pattern(#[from] regex::Error),
}

impl Error {
	/// Returns true if this is a timeout error.
	pub fn is_timeout(&self) -> bool {
		matches!(self, Error::Timeout { .. })
	}
}
