use std::path::Path;

use fstar_highlight::{
    base::{Error, MemoryProvider},
    lexical::{
        dialect::Dialect,
        keyword::KeywordKind,
        token::{CommentKind, Token, TokenKind},
    },
    registry,
};

fn example_provider() -> MemoryProvider {
    let mut dir = MemoryProvider::new();
    dir.add_file("example.fst", include_str!("./example.fst"));
    dir.add_file("loop.fst", include_str!("./loop.fst"));
    dir
}

#[test]
fn lexing_fstar_module() {
    let source = include_str!("./example.fst");
    let dir = example_provider();

    let tokens = fstar_highlight::tokenize(&dir, Path::new("example.fst"), Dialect::FStar)
        .expect("Failed to tokenize");

    let rebuilt: String = tokens.iter().map(|token| token.span().str()).collect();
    assert_eq!(rebuilt, source);

    let keywords: Vec<_> = tokens
        .iter()
        .filter_map(Token::as_keyword)
        .map(|keyword| keyword.keyword)
        .collect();
    for expected in [
        KeywordKind::Module,
        KeywordKind::Open,
        KeywordKind::Val,
        KeywordKind::Tot,
        KeywordKind::Let,
        KeywordKind::Rec,
        KeywordKind::If,
        KeywordKind::Then,
        KeywordKind::Else,
        KeywordKind::Wildcard,
        KeywordKind::Assert,
    ] {
        assert!(keywords.contains(&expected), "missing keyword {expected:?}");
    }

    let comments: Vec<_> = tokens
        .iter()
        .filter_map(Token::as_comment)
        .map(|comment| comment.kind)
        .collect();
    assert_eq!(comments, [CommentKind::Line, CommentKind::Delimited]);

    // module names are plain text
    assert!(tokens
        .iter()
        .any(|token| token.kind() == TokenKind::Text && token.span().str() == "Lexing"));
}

#[test]
fn lexing_pulse_module() {
    let source = include_str!("./loop.fst");
    let dir = example_provider();

    let tokens = fstar_highlight::tokenize(&dir, Path::new("loop.fst"), Dialect::Pulse)
        .expect("Failed to tokenize");

    let rebuilt: String = tokens.iter().map(|token| token.span().str()).collect();
    assert_eq!(rebuilt, source);

    let keywords: Vec<_> = tokens
        .iter()
        .filter_map(Token::as_keyword)
        .map(|keyword| keyword.keyword)
        .collect();
    for expected in [
        KeywordKind::Module,
        KeywordKind::Fn,
        KeywordKind::Requires,
        KeywordKind::Ensures,
        KeywordKind::Let,
        KeywordKind::Mut,
        KeywordKind::True,
        KeywordKind::While,
        KeywordKind::Invariant,
        KeywordKind::False,
        KeywordKind::Fold,
    ] {
        assert!(keywords.contains(&expected), "missing keyword {expected:?}");
    }

    let fn_keyword = tokens
        .iter()
        .filter_map(Token::as_keyword)
        .find(|keyword| keyword.keyword == KeywordKind::Fn)
        .unwrap();
    let location = fn_keyword.span.start_location();
    assert_eq!((location.line, location.column), (3, 1));
}

#[test]
fn base_lexer_ignores_extension_vocabulary() {
    let dir = example_provider();

    let tokens = fstar_highlight::tokenize(&dir, Path::new("loop.fst"), Dialect::FStar)
        .expect("Failed to tokenize");

    let keywords: Vec<_> = tokens
        .iter()
        .filter_map(Token::as_keyword)
        .map(|keyword| keyword.keyword)
        .collect();
    assert!(!keywords.contains(&KeywordKind::Fn));
    assert!(!keywords.contains(&KeywordKind::While));
    assert!(!keywords.contains(&KeywordKind::Fold));
    assert!(keywords.contains(&KeywordKind::Requires));

    // the extension words come out as identifier text instead
    assert!(tokens
        .iter()
        .any(|token| token.kind() == TokenKind::Text && token.span().str() == "fn"));
}

#[test]
fn lexing_by_registered_name() {
    let dir = example_provider();

    let tokens = fstar_highlight::tokenize_with_lexer(&dir, Path::new("loop.fst"), "pulse")
        .expect("Failed to tokenize");

    assert!(tokens
        .iter()
        .filter_map(Token::as_keyword)
        .any(|keyword| keyword.keyword == KeywordKind::Fn));
}

#[test]
fn lexing_by_unknown_name() {
    let dir = example_provider();

    let err = fstar_highlight::tokenize_with_lexer(&dir, Path::new("loop.fst"), "pulze")
        .expect_err("Expecting lexer lookup failure");

    assert!(matches!(err, Error::UnknownLexer(_)));
}

#[test]
fn lexing_missing_file() {
    let dir = example_provider();

    let err = fstar_highlight::tokenize(&dir, Path::new("missing.fst"), Dialect::FStar)
        .expect_err("Expecting read failure");

    assert!(matches!(err, Error::IoError(_)));
}

#[test]
fn registered_file_patterns_cover_both_dialects() {
    assert_eq!(
        registry::dialects_for_file_name("example.fst"),
        [Dialect::FStar, Dialect::Pulse]
    );
    assert_eq!(
        registry::dialects_for_file_name("Interface.fsti"),
        [Dialect::FStar, Dialect::Pulse]
    );
}
