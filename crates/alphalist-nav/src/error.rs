//! Construction errors.

use std::fmt;

use alphalist_text::SelectorError;

/// Errors produced while building a navigator.
///
/// Construction is all-or-nothing: any of these aborts the pipeline before
/// any state is produced. Stale selection targets are not errors; the state
/// machine drops them defensively (see [`crate::state::transition`]).
#[derive(Debug)]
pub enum NavError {
    /// The configured container id resolved to nothing.
    ContainerNotFound {
        /// The id that was looked up.
        id: String,
    },
    /// A prefix rule failed to compile.
    BadPrefixPattern {
        /// The full compiled alternation source.
        pattern: String,
        /// The underlying regex error.
        source: regex::Error,
    },
    /// The configured filter selector failed to parse.
    BadFilterSelector {
        /// The selector as configured.
        selector: String,
        /// The underlying selector error.
        source: SelectorError,
    },
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContainerNotFound { id } => write!(f, "container '{id}' not found"),
            Self::BadPrefixPattern { pattern, .. } => {
                write!(f, "prefix rules do not compile: {pattern}")
            }
            Self::BadFilterSelector { selector, .. } => {
                write!(f, "invalid filter selector: {selector:?}")
            }
        }
    }
}

impl std::error::Error for NavError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ContainerNotFound { .. } => None,
            Self::BadPrefixPattern { source, .. } => Some(source),
            Self::BadFilterSelector { source, .. } => Some(source),
        }
    }
}
