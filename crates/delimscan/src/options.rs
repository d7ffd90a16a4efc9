/// Configuration for a [`Scanner`](crate::Scanner).
///
/// # Examples
///
/// ```rust
/// use delimscan::{Scanner, ScannerOptions, StrSource};
///
/// let options = ScannerOptions {
///     max_token_len: Some(1024),
///     ..Default::default()
/// };
/// let scanner = Scanner::with_options(StrSource::new("select 1"), options);
/// ```
///
/// # Default
///
/// No token limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScannerOptions {
    /// Most characters a single `read` may buffer before giving up.
    ///
    /// The scanner holds the word or delimiter it is building in memory.
    /// Input without any delimiter match, or a pattern that keeps growing
    /// without settling, would otherwise be buffered to the end of the
    /// stream. When the limit is hit, `read` fails with
    /// [`ScanError::TokenTooLong`](crate::ScanError::TokenTooLong) and the
    /// source is left where the call started.
    ///
    /// # Default
    ///
    /// `None`
    pub max_token_len: Option<usize>,

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic on scan errors instead of returning them.
    ///
    /// Enabled only in test and fuzzing builds to get backtraces.
    pub panic_on_error: bool,
}
