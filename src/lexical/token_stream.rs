//! Contains the [`TokenStream`] struct and the lazy [`Lexer`] iterator behind it.

use std::{fmt::Debug, sync::Arc};

use derive_more::Deref;

use crate::base::source_file::SourceFile;

use super::{dialect::Dialect, token::Token};

/// Lazily matches one token after another over a source file.
///
/// The iterator starts at the beginning of the file and advances by the length
/// of each emitted token, so the emitted spans cover the file without gaps or
/// overlaps. It is finite and not restartable.
#[derive(Debug, Clone)]
pub struct Lexer {
    source_file: Arc<SourceFile>,
    dialect: Dialect,
    cursor: usize,
}

impl Lexer {
    /// Creates a lexer over the given source file for the given dialect.
    #[must_use]
    pub fn new(source_file: &Arc<SourceFile>, dialect: Dialect) -> Self {
        Self {
            source_file: source_file.clone(),
            dialect,
            cursor: 0,
        }
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = Token::tokenize(&self.source_file, self.cursor, self.dialect)?;
        self.cursor = token.span().end();
        Some(token)
    }
}

/// Is a list of [`Token`]s covering a whole source file.
///
/// This struct is the final output of the lexical analysis phase and is meant
/// to be handed to the rendering layer of the host.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deref)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<Token>,
}

impl Debug for TokenStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

impl TokenStream {
    /// Tokenizes the given source code.
    ///
    /// This function drains a [`Lexer`] over the whole source file. Every
    /// character of the file ends up in exactly one token, concatenating the
    /// token texts in order reproduces the file content.
    #[must_use]
    #[tracing::instrument(level = "debug", skip_all, fields(source_file = %source_file.path().display(), %dialect))]
    pub fn tokenize(source_file: &Arc<SourceFile>, dialect: Dialect) -> Self {
        let tokens: Vec<_> = Lexer::new(source_file, dialect).collect();

        tracing::debug!("Lexed {} tokens", tokens.len());

        Self { tokens }
    }

    /// Dissolves this struct into its tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<Token> {
        self.tokens
    }
}
