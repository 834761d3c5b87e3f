//! Contains the [`KeywordKind`] enum listing the reserved words of both dialects.

use std::{collections::HashMap, str::FromStr, sync::OnceLock};

use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// Is an enumeration representing the reserved words of F* and the Pulse extension.
///
/// The vocabulary is a very rough approximation of the real grammar and is
/// only meant to drive highlighting; it is not 100% precise.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum KeywordKind {
    Attributes,
    Noeq,
    Unopteq,
    And,
    Assert,
    AssertNorm,
    Assume,
    Begin,
    By,
    Calc,
    Class,
    Decreases,
    Dv,
    Effect,
    Eliminate,
    Else,
    End,
    Ensures,
    Exception,
    Exists,
    False,
    Friend,
    Forall,
    Fun,
    Function,
    GTot,
    If,
    In,
    Include,
    Inline,
    InlineForExtraction,
    Instance,
    Introduce,
    Irreducible,
    Let,
    Logic,
    Match,
    Module,
    New,
    NewEffect,
    LayeredEffect,
    PolymonadicBind,
    PolymonadicSubcomp,
    SmtPat,
    Noextract,
    Of,
    Open,
    Opaque,
    Private,
    RangeOf,
    Rec,
    Reifiable,
    Reify,
    Reflectable,
    Requires,
    Returns,
    SetRangeOf,
    SubEffect,
    Synth,
    Then,
    Total,
    Tot,
    True,
    Try,
    Type,
    Unfold,
    Unfoldable,
    Val,
    When,
    With,
    Wildcard,
    Lemma,
    // Pulse extension
    Fn,
    Fold,
    Rewrite,
    Each,
    Mut,
    Ghost,
    Atomic,
    ShowProofState,
    While,
    Invariant,
    WithInvariants,
    Opens,
    Parallel,
}

impl std::fmt::Display for KeywordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Is an error that is returned when a string cannot be parsed into a [`KeywordKind`] in [`FromStr`]
/// trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, thiserror::Error)]
#[error("invalid string representation of keyword.")]
pub struct KeywordParseError;

impl FromStr for KeywordKind {
    type Err = KeywordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static STRING_KEYWORD_MAP: OnceLock<HashMap<&'static str, KeywordKind>> = OnceLock::new();
        let map = STRING_KEYWORD_MAP.get_or_init(|| {
            let mut map = HashMap::new();

            for keyword in Self::iter() {
                map.insert(keyword.as_str(), keyword);
            }

            map
        });

        map.get(s).copied().ok_or(KeywordParseError)
    }
}

impl KeywordKind {
    /// Gets the string representation of the keyword as a `&str`.
    ///
    /// Keywords are case-sensitive, a handful of effect markers such as
    /// `Lemma` and `Tot` are capitalized in the source language.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Attributes => "attributes",
            Self::Noeq => "noeq",
            Self::Unopteq => "unopteq",
            Self::And => "and",
            Self::Assert => "assert",
            Self::AssertNorm => "assert_norm",
            Self::Assume => "assume",
            Self::Begin => "begin",
            Self::By => "by",
            Self::Calc => "calc",
            Self::Class => "class",
            Self::Decreases => "decreases",
            Self::Dv => "Dv",
            Self::Effect => "effect",
            Self::Eliminate => "eliminate",
            Self::Else => "else",
            Self::End => "end",
            Self::Ensures => "ensures",
            Self::Exception => "exception",
            Self::Exists => "exists",
            Self::False => "false",
            Self::Friend => "friend",
            Self::Forall => "forall",
            Self::Fun => "fun",
            Self::Function => "function",
            Self::GTot => "GTot",
            Self::If => "if",
            Self::In => "in",
            Self::Include => "include",
            Self::Inline => "inline",
            Self::InlineForExtraction => "inline_for_extraction",
            Self::Instance => "instance",
            Self::Introduce => "introduce",
            Self::Irreducible => "irreducible",
            Self::Let => "let",
            Self::Logic => "logic",
            Self::Match => "match",
            Self::Module => "module",
            Self::New => "new",
            Self::NewEffect => "new_effect",
            Self::LayeredEffect => "layered_effect",
            Self::PolymonadicBind => "polymonadic_bind",
            Self::PolymonadicSubcomp => "polymonadic_subcomp",
            Self::SmtPat => "SMTPat",
            Self::Noextract => "noextract",
            Self::Of => "of",
            Self::Open => "open",
            Self::Opaque => "opaque",
            Self::Private => "private",
            Self::RangeOf => "range_of",
            Self::Rec => "rec",
            Self::Reifiable => "reifiable",
            Self::Reify => "reify",
            Self::Reflectable => "reflectable",
            Self::Requires => "requires",
            Self::Returns => "returns",
            Self::SetRangeOf => "set_range_of",
            Self::SubEffect => "sub_effect",
            Self::Synth => "synth",
            Self::Then => "then",
            Self::Total => "total",
            Self::Tot => "Tot",
            Self::True => "true",
            Self::Try => "try",
            Self::Type => "type",
            Self::Unfold => "unfold",
            Self::Unfoldable => "unfoldable",
            Self::Val => "val",
            Self::When => "when",
            Self::With => "with",
            Self::Wildcard => "_",
            Self::Lemma => "Lemma",
            Self::Fn => "fn",
            Self::Fold => "fold",
            Self::Rewrite => "rewrite",
            Self::Each => "each",
            Self::Mut => "mut",
            Self::Ghost => "ghost",
            Self::Atomic => "atomic",
            Self::ShowProofState => "show_proof_state",
            Self::While => "while",
            Self::Invariant => "invariant",
            Self::WithInvariants => "with_invariants",
            Self::Opens => "opens",
            Self::Parallel => "parallel",
        }
    }

    /// Whether the keyword belongs to the Pulse extension vocabulary.
    ///
    /// The base lexer treats these words as plain identifiers.
    #[must_use]
    pub fn is_pulse_extension(self) -> bool {
        matches!(
            self,
            Self::Fn
                | Self::Fold
                | Self::Rewrite
                | Self::Each
                | Self::Mut
                | Self::Ghost
                | Self::Atomic
                | Self::ShowProofState
                | Self::While
                | Self::Invariant
                | Self::WithInvariants
                | Self::Opens
                | Self::Parallel
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn string_representations_are_unique() {
        let mut seen = HashSet::new();
        for keyword in KeywordKind::iter() {
            assert!(
                seen.insert(keyword.as_str()),
                "duplicate keyword string {:?}",
                keyword.as_str()
            );
        }
    }

    #[test]
    fn from_str_round_trips() {
        for keyword in KeywordKind::iter() {
            assert_eq!(KeywordKind::from_str(keyword.as_str()), Ok(keyword));
        }
        assert_eq!(KeywordKind::from_str("letrec"), Err(KeywordParseError));
        assert_eq!(KeywordKind::from_str("lemma"), Err(KeywordParseError));
    }

    #[test]
    fn extension_vocabulary_size() {
        let extension = KeywordKind::iter()
            .filter(|keyword| keyword.is_pulse_extension())
            .count();
        assert_eq!(extension, 13);
        assert_eq!(KeywordKind::iter().count() - extension, 72);
    }
}
