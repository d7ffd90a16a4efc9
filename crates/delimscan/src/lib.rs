//! A streaming word/delimiter scanner.
//!
//! [`Scanner`] pulls characters from a seekable [`CharSource`] and splits
//! them into alternating words and delimiters. Delimiters are whatever a
//! [`Matcher`] says they are; [`DelimiterSet`] combines several
//! [`Delimiter`]s (literals or regular expressions) and always prefers the
//! longest match, breaking ties by insertion order. The input is never
//! buffered beyond the token being read plus one character.
//!
//! ```rust
//! use delimscan::{Delimiter, DelimiterSet, Scanner, Token};
//!
//! let mut delimiters = DelimiterSet::new();
//! delimiters.add(Delimiter::literal(",")?);
//! delimiters.add(Delimiter::regex(r"\s+")?);
//!
//! let mut scanner = Scanner::from("a, b");
//! assert_eq!(scanner.read(&delimiters)?.text(), Some("a"));
//! assert_eq!(scanner.peek(&delimiters)?.text(), Some(","));
//! assert_eq!(scanner.read(&delimiters)?.text(), Some(","));
//! assert_eq!(scanner.read(&delimiters)?.text(), Some(" "));
//! assert_eq!(scanner.read(&delimiters)?.text(), Some("b"));
//! assert_eq!(scanner.read(&delimiters)?, Token::EndOfInput);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod delimiter;
mod delimiter_set;
mod error;
mod matcher;
mod options;
mod scanner;
mod source;
mod token;

#[cfg(test)]
mod tests;

pub use delimiter::Delimiter;
pub use delimiter_set::DelimiterSet;
pub use error::{Desync, PatternError, ScanError, SourceError};
pub use matcher::{Match, Matcher};
pub use options::ScannerOptions;
pub use scanner::{Scanner, Tokens};
pub use source::{CharSource, ReaderSource, StrSource};
pub use token::{Lexeme, Token};
