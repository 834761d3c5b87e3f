//! Contains the [`Dialect`] enum selecting between the two lexer variants.

use std::str::FromStr;

use strum_macros::EnumIter;

use super::keyword::KeywordKind;

/// Is an enumeration of the two dialects a lexer can be configured for.
///
/// Both dialects share the same file extensions, the host decides which lexer
/// to run on a given file.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum Dialect {
    /// The base F* language.
    FStar,

    /// F* extended with the Pulse separation-logic vocabulary.
    Pulse,
}

impl Dialect {
    /// Gets the stable name the lexer registers under.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::FStar => "FStar",
            Self::Pulse => "Pulse",
        }
    }

    /// Gets the alternative names the lexer can be looked up by.
    #[must_use]
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::FStar => &["fstar"],
            Self::Pulse => &["pulse"],
        }
    }

    /// Gets the filename glob patterns claimed by the lexer.
    #[must_use]
    pub fn filenames(self) -> &'static [&'static str] {
        match self {
            Self::FStar | Self::Pulse => &["*.fst", "*.fsti"],
        }
    }

    /// Looks up a word in the keyword vocabulary of the dialect.
    ///
    /// The base dialect does not recognize the Pulse extension words.
    #[must_use]
    pub fn keyword(self, word: &str) -> Option<KeywordKind> {
        KeywordKind::from_str(word)
            .ok()
            .filter(|keyword| self == Self::Pulse || !keyword.is_pulse_extension())
    }

    /// Checks if the given character can be part of an identifier run.
    ///
    /// The base dialect allows digits inside identifier runs while Pulse does
    /// not, so `x1` is a single text token for F* but two for Pulse.
    #[must_use]
    pub fn is_identifier_character(self, character: char) -> bool {
        match self {
            Self::FStar => character.is_ascii_alphanumeric() || character == '_',
            Self::Pulse => character.is_ascii_alphabetic() || character == '_',
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_lookup_respects_dialect() {
        assert_eq!(Dialect::FStar.keyword("let"), Some(KeywordKind::Let));
        assert_eq!(Dialect::Pulse.keyword("let"), Some(KeywordKind::Let));

        assert_eq!(Dialect::FStar.keyword("fn"), None);
        assert_eq!(Dialect::Pulse.keyword("fn"), Some(KeywordKind::Fn));

        assert_eq!(Dialect::FStar.keyword("letrec"), None);
        assert_eq!(Dialect::Pulse.keyword("letrec"), None);
    }

    #[test]
    fn identifier_character_classes() {
        assert!(Dialect::FStar.is_identifier_character('1'));
        assert!(!Dialect::Pulse.is_identifier_character('1'));

        for dialect in [Dialect::FStar, Dialect::Pulse] {
            assert!(dialect.is_identifier_character('a'));
            assert!(dialect.is_identifier_character('_'));
            assert!(!dialect.is_identifier_character('\''));
            assert!(!dialect.is_identifier_character(' '));
        }
    }
}
