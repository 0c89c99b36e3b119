//! Tokenization for text statistics.

use once_cell::sync::Lazy;
use regex::Regex;

// Letters only, and only when the run is not glued to digits or underscores.
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-zA-Z]+\b").unwrap());

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

static TERM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// The character class a token is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// ASCII letters bounded by word boundaries. `abc123` yields nothing.
    Word,
    /// Maximal runs of ASCII digits. `abc123` yields `123`.
    Number,
    /// Maximal runs of word characters (letters, digits, underscore).
    Term,
}

impl TokenKind {
    fn pattern(self) -> &'static Regex {
        match self {
            TokenKind::Word => &WORD,
            TokenKind::Number => &NUMBER,
            TokenKind::Term => &TERM,
        }
    }
}

/// A token with its position in the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token text, exactly as it appears in the input.
    pub text: String,
    /// Start position in the original text (byte offset).
    pub start: usize,
    /// End position in the original text (byte offset).
    pub end: usize,
    /// Token index in the sequence.
    pub index: usize,
}

impl Token {
    /// Creates a new token.
    pub fn new(text: String, start: usize, end: usize, index: usize) -> Self {
        Self {
            text,
            start,
            end,
            index,
        }
    }
}

/// Tokenizer that extracts one class of tokens with position information.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    kind: TokenKind,
}

impl Tokenizer {
    /// Creates a tokenizer for the given token class.
    pub fn new(kind: TokenKind) -> Self {
        Self { kind }
    }

    /// Returns the token class this tokenizer extracts.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Tokenizes text into a sequence of tokens.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        self.kind
            .pattern()
            .find_iter(text)
            .enumerate()
            .map(|(index, m)| Token::new(m.as_str().to_string(), m.start(), m.end(), index))
            .collect()
    }

    /// Tokenizes text and returns borrowed token slices.
    pub fn tokenize_to_strs<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.kind.pattern().find_iter(text).map(|m| m.as_str()).collect()
    }

    /// Counts tokens without allocating them.
    pub fn count(&self, text: &str) -> usize {
        self.kind.pattern().find_iter(text).count()
    }
}
