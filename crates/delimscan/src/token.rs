/// Text of a token together with where it started in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Lexeme {
    /// The characters of the token, never empty.
    pub text: String,
    /// Source position of the first character, as reported by
    /// [`CharSource::position`](crate::CharSource::position).
    pub position: u64,
}

/// One result of [`Scanner::read`](crate::Scanner::read).
///
/// Neither `Word` nor `Delimiter` ever carries empty text; running out of
/// input is the separate `EndOfInput` variant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(any(test, feature = "serde"), serde(tag = "kind"))]
pub enum Token {
    /// Text between delimiters.
    Word(Lexeme),
    /// A maximal delimiter match.
    Delimiter(Lexeme),
    /// The source is exhausted. Reading again returns this again.
    EndOfInput,
}

impl Token {
    pub(crate) fn word(text: &str, position: u64) -> Self {
        Token::Word(Lexeme {
            text: text.into(),
            position,
        })
    }

    pub(crate) fn delimiter(text: &str, position: u64) -> Self {
        Token::Delimiter(Lexeme {
            text: text.into(),
            position,
        })
    }

    /// Text and position, or `None` at end of input.
    #[must_use]
    pub fn lexeme(&self) -> Option<&Lexeme> {
        match self {
            Token::Word(l) | Token::Delimiter(l) => Some(l),
            Token::EndOfInput => None,
        }
    }

    /// Like [`lexeme`](Self::lexeme), by value.
    #[must_use]
    pub fn into_lexeme(self) -> Option<Lexeme> {
        match self {
            Token::Word(l) | Token::Delimiter(l) => Some(l),
            Token::EndOfInput => None,
        }
    }

    /// The token text, or `None` at end of input.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.lexeme().map(|l| l.text.as_str())
    }

    /// Whether this is a [`Token::Word`].
    #[must_use]
    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_))
    }

    /// Whether this is a [`Token::Delimiter`].
    #[must_use]
    pub fn is_delimiter(&self) -> bool {
        matches!(self, Token::Delimiter(_))
    }

    /// Whether this is [`Token::EndOfInput`].
    #[must_use]
    pub fn is_end(&self) -> bool {
        matches!(self, Token::EndOfInput)
    }
}
