//! Contains the [`Token`] struct and its related types.

use std::sync::Arc;

use crate::base::source_file::{SourceElement, SourceFile, Span};
use derive_more::From;
use enum_as_inner::EnumAsInner;

use super::dialect::Dialect;
use super::keyword::KeywordKind;

/// Is an enumeration containing the three classifications a matched span can receive.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    /// Whitespace, identifiers and any other unclassified characters.
    Text,

    /// A line or delimited comment.
    Comment,

    /// A reserved word of the active dialect.
    Keyword,
}

/// Is an enumeration containing all kinds of tokens the lexers emit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, From, EnumAsInner)]
#[allow(missing_docs)]
pub enum Token {
    Text(Text),
    Comment(Comment),
    Keyword(Keyword),
}

impl Token {
    /// Returns the span of the token.
    #[must_use]
    pub fn span(&self) -> &Span {
        match self {
            Self::Text(token) => &token.span,
            Self::Comment(token) => &token.span,
            Self::Keyword(token) => &token.span,
        }
    }

    /// Returns the flat classification of the token.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Text(_) => TokenKind::Text,
            Self::Comment(_) => TokenKind::Comment,
            Self::Keyword(_) => TokenKind::Keyword,
        }
    }
}

impl SourceElement for Token {
    fn span(&self) -> Span {
        match self {
            Self::Text(token) => token.span(),
            Self::Comment(token) => token.span(),
            Self::Keyword(token) => token.span(),
        }
    }
}

/// Represents a span of characters without any special meaning to the highlighter.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Text {
    /// Is the span that makes up the token.
    pub span: Span,
}

impl SourceElement for Text {
    fn span(&self) -> Span {
        self.span.clone()
    }
}

/// Represents a contiguous sequence of characters that are reserved for a keyword.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Keyword {
    /// Is the span that makes up the token.
    pub span: Span,

    /// Is the [`KeywordKind`] that the token represents.
    pub keyword: KeywordKind,
}

impl SourceElement for Keyword {
    fn span(&self) -> Span {
        self.span.clone()
    }
}

/// Is an enumeration representing the two kinds of comments in F* source code.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CommentKind {
    /// A comment that starts with `//` and ends at the end of the line.
    Line,

    /// A comment that starts with `(*` and ends with `*)`.
    Delimited,
}

/// Represents a portion of the source code that is ignored by the compiler.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Comment {
    /// Is the span that makes up the token.
    pub span: Span,

    /// Is the kind of comment that the token represents.
    pub kind: CommentKind,
}

impl SourceElement for Comment {
    fn span(&self) -> Span {
        self.span.clone()
    }
}

/// Checks if the given character can appear in a keyword-sized word run.
///
/// This is the class word boundaries are measured against, shared by both
/// dialects regardless of their identifier rules.
fn is_word_character(character: char) -> bool {
    character.is_ascii_alphanumeric() || character == '_'
}

impl Token {
    /// Returns the length of a line comment starting at the beginning of `text`,
    /// including the terminating newline.
    ///
    /// A line comment only counts as one when the newline is present. Two
    /// slashes running into the end of the input fall through to the later
    /// rules and are emitted character by character.
    fn line_comment_length(text: &str) -> Option<usize> {
        if !text.starts_with("//") {
            return None;
        }

        text.find('\n').map(|newline| newline + 1)
    }

    /// Returns the length of a delimited comment starting at the beginning of `text`.
    ///
    /// The scan is not nesting-aware. A `*)` preceded by exactly one star
    /// always ends the comment, while star-doubled closes such as `**)` are
    /// crossed when a later close exists. An unclosed `(*` does not match at
    /// all, and neither does `(*)`.
    fn delimited_comment_length(text: &str) -> Option<usize> {
        if !text.starts_with("(*") {
            return None;
        }

        let bytes = text.as_bytes();
        let mut last_close = None;
        let mut index = 2;

        while index < bytes.len() {
            if bytes[index] == b'*' {
                let stars_start = index;
                while index < bytes.len() && bytes[index] == b'*' {
                    index += 1;
                }

                if index < bytes.len() && bytes[index] == b')' {
                    index += 1;
                    last_close = Some(index);

                    // a single-star close cannot be crossed
                    if index - stars_start == 2 {
                        return last_close;
                    }
                }
            } else {
                index += 1;
            }
        }

        last_close
    }

    /// Creates a span of the given length at the given offset.
    fn create_span(source_file: &Arc<SourceFile>, offset: usize, length: usize) -> Span {
        Span::new(source_file.clone(), offset, offset + length).unwrap()
    }

    /// Matches a single token at the given byte offset into the source file.
    ///
    /// The rules are tried in a fixed order and the first match wins. The
    /// final rule consumes exactly one character, so every offset short of the
    /// end of the file produces a token and the scan always advances. Returns
    /// [`None`] only when the offset is at the end of the file.
    #[must_use]
    pub fn tokenize(source_file: &Arc<SourceFile>, offset: usize, dialect: Dialect) -> Option<Self> {
        let text = &source_file.content()[offset..];
        let first = text.chars().next()?;

        // single whitespace characters
        if matches!(first, ' ' | '\n' | '\r') {
            return Some(
                Text {
                    span: Self::create_span(source_file, offset, 1),
                }
                .into(),
            );
        }

        if let Some(length) = Self::line_comment_length(text) {
            return Some(
                Comment {
                    span: Self::create_span(source_file, offset, length),
                    kind: CommentKind::Line,
                }
                .into(),
            );
        }

        if let Some(length) = Self::delimited_comment_length(text) {
            return Some(
                Comment {
                    span: Self::create_span(source_file, offset, length),
                    kind: CommentKind::Delimited,
                }
                .into(),
            );
        }

        let word_length: usize = text
            .chars()
            .take_while(|character| is_word_character(*character))
            .map(char::len_utf8)
            .sum();

        if word_length > 0 {
            // the whole word run is looked up, never a prefix of it, which
            // keeps `letrec` from matching the keyword `let`
            let at_word_boundary = text[word_length..]
                .chars()
                .next()
                .map_or(true, |character| {
                    !character.is_alphanumeric() && character != '_'
                });

            if at_word_boundary {
                if let Some(keyword) = dialect.keyword(&text[..word_length]) {
                    return Some(
                        Keyword {
                            span: Self::create_span(source_file, offset, word_length),
                            keyword,
                        }
                        .into(),
                    );
                }
            }

            let identifier_length: usize = text
                .chars()
                .take_while(|character| dialect.is_identifier_character(*character))
                .map(char::len_utf8)
                .sum();

            if identifier_length > 0 {
                return Some(
                    Text {
                        span: Self::create_span(source_file, offset, identifier_length),
                    }
                    .into(),
                );
            }
        }

        // catch-all: exactly one character
        Some(
            Text {
                span: Self::create_span(source_file, offset, first.len_utf8()),
            }
            .into(),
        )
    }
}
