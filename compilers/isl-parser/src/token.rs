#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Letters, with inner apostrophes or hyphens ("don't", "well-known")
    Word,
    /// Digits, optionally with a decimal part
    Number,
    /// Punctuation mark
    Punctuation(char),
}

#[derive(Debug, Clone)]
pub struct Token<'a> {
    pub span: Span,
    pub text: &'a str,
    pub kind: TokenKind,
}

impl Token<'_> {
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// `.`, `!` and `?` close a sentence.
    pub fn ends_sentence(&self) -> bool {
        matches!(self.kind, TokenKind::Punctuation('.' | '!' | '?'))
    }
}
