//! Syntax-highlighting lexers for the F* proof assistant and its Pulse dialect.
//!
//! The crate provides two very rough lexers meant to drive documentation
//! highlighting, they are not 100% precise against the evolving language
//! grammar. Both classify every span of a source file as plain text, comment
//! or keyword; the Pulse variant recognizes the extension vocabulary on top of
//! the base one. Rendering the classified spans is up to the host.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod base;
pub mod lexical;
pub mod registry;

use std::path::Path;

use base::{source_file::SourceFile, FileProvider, Result};

use crate::lexical::{dialect::Dialect, token_stream::TokenStream};

/// Converts the given source code to classified tokens.
///
/// # Errors
/// - If an error occurs while reading the file.
pub fn tokenize(
    provider: &impl FileProvider,
    path: &Path,
    dialect: Dialect,
) -> Result<TokenStream> {
    let source_file = SourceFile::load(path, provider)?;

    Ok(TokenStream::tokenize(&source_file, dialect))
}

/// Converts the given source code to classified tokens, selecting the lexer
/// by its registered name or alias.
///
/// # Errors
/// - If an error occurs while reading the file.
/// - If no lexer is registered under the given name.
pub fn tokenize_with_lexer(
    provider: &impl FileProvider,
    path: &Path,
    lexer_name: &str,
) -> Result<TokenStream> {
    let dialect = registry::find_by_name(lexer_name)?;

    tokenize(provider, path, dialect)
}
