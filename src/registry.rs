//! Lookup of lexers by registered name, alias or claimed filename pattern.
//!
//! This is the boundary contract with the host: the host asks for a lexer by
//! the name configured in its build files or by the name of the file it is
//! about to render, and drives the returned [`Dialect`] itself.

use getset::Getters;
use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::lexical::dialect::Dialect;

/// Resolves a registered lexer name or alias to its [`Dialect`].
///
/// Names are matched ASCII-case-insensitively, so `fstar`, `FStar` and
/// `FSTAR` all select the base lexer.
///
/// # Errors
/// - [`UnknownLexerError`]: No lexer is registered under the given name.
pub fn find_by_name(name: &str) -> Result<Dialect, UnknownLexerError> {
    Dialect::iter()
        .find(|dialect| {
            dialect.name().eq_ignore_ascii_case(name)
                || dialect
                    .aliases()
                    .iter()
                    .any(|alias| alias.eq_ignore_ascii_case(name))
        })
        .ok_or_else(|| UnknownLexerError::from_requested_name(name))
}

/// Returns the dialects whose filename patterns match the given file name.
///
/// Both dialects claim `*.fst` and `*.fsti`, so a matching file name yields
/// both and the host picks which lexer to run.
#[must_use]
pub fn dialects_for_file_name(file_name: &str) -> Vec<Dialect> {
    Dialect::iter()
        .filter(|dialect| {
            dialect
                .filenames()
                .iter()
                .any(|pattern| matches_file_name(pattern, file_name))
        })
        .collect()
}

/// Checks a file name against a single registered pattern.
///
/// Patterns are either literal file names or a `*` followed by a required
/// suffix, which is all the registration data uses.
fn matches_file_name(pattern: &str, file_name: &str) -> bool {
    pattern.strip_prefix('*').map_or_else(
        || pattern == file_name,
        |suffix| file_name.ends_with(suffix),
    )
}

/// An error that occurs when no lexer is registered under a requested name.
#[derive(Debug, Clone, PartialEq, Eq, Getters, thiserror::Error)]
pub struct UnknownLexerError {
    /// The name the lookup was attempted with.
    #[get = "pub"]
    name: String,
    /// Registered names similar to the requested one.
    #[get = "pub"]
    alternatives: Vec<String>,
}

impl UnknownLexerError {
    fn from_requested_name(name: &str) -> Self {
        let alternatives = Dialect::iter()
            .flat_map(|dialect| {
                std::iter::once(dialect.name()).chain(dialect.aliases().iter().copied())
            })
            .filter_map(|registered_name| {
                let normalized_distance =
                    strsim::normalized_damerau_levenshtein(name, registered_name);
                (normalized_distance > 0.8
                    || strsim::damerau_levenshtein(name, registered_name) < 3)
                    .then_some((normalized_distance, registered_name))
            })
            .sorted_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(_, registered_name)| registered_name.to_string())
            .take(8)
            .collect::<Vec<_>>();

        Self {
            name: name.to_string(),
            alternatives,
        }
    }
}

impl std::fmt::Display for UnknownLexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no lexer is registered under the name {:?}", self.name)?;

        if !self.alternatives.is_empty() {
            write!(
                f,
                ", did you mean {}?",
                self.alternatives.iter().map(|name| format!("{name:?}")).join(", ")
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_by_name_and_alias() {
        assert_eq!(find_by_name("FStar"), Ok(Dialect::FStar));
        assert_eq!(find_by_name("fstar"), Ok(Dialect::FStar));
        assert_eq!(find_by_name("FSTAR"), Ok(Dialect::FStar));
        assert_eq!(find_by_name("Pulse"), Ok(Dialect::Pulse));
        assert_eq!(find_by_name("pulse"), Ok(Dialect::Pulse));
    }

    #[test]
    fn unknown_name_suggests_alternatives() {
        let err = find_by_name("pulze").unwrap_err();

        assert_eq!(err.name(), "pulze");
        assert!(err.alternatives().iter().any(|name| name == "pulse"));

        let message = err.to_string();
        assert!(message.contains("pulze"));
        assert!(message.contains("did you mean"));
    }

    #[test]
    fn unknown_name_without_alternatives() {
        let err = find_by_name("markdown").unwrap_err();

        assert!(err.alternatives().is_empty());
        assert!(!err.to_string().contains("did you mean"));
    }

    #[test]
    fn file_name_selection() {
        assert_eq!(
            dialects_for_file_name("Pulse.Lib.Core.fst"),
            [Dialect::FStar, Dialect::Pulse]
        );
        assert_eq!(
            dialects_for_file_name("FStar.Seq.Base.fsti"),
            [Dialect::FStar, Dialect::Pulse]
        );
        assert!(dialects_for_file_name("README.md").is_empty());
        assert!(dialects_for_file_name("fst").is_empty());
    }
}
