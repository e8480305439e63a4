use thiserror::Error;

/// This is the core error type for the
/// range parser. It uses `thiserror` to provide
/// readable error messages.
///
/// The lenient parser never returns these to the caller; they only
/// show up in diagnostics, strict parsing, and preset resolution.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum RangeError {
    #[error("Unable to parse value from '{0}'")]
    UnexpectedValueChar(char),
    #[error("Unable to parse suitedness from '{0}'")]
    InvalidSuitednessChar(char),
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Pairs can't be suited or offsuit")]
    SuitedPair,
    #[error("Non pair hands need a suited or offsuit marker")]
    MissingSuitedness,
    #[error("Both ends of a range need the same suitedness")]
    MismatchedSuitedness,
    #[error("Invalid use of the plus modifier")]
    InvalidPlusModifier,
    #[error("The gap between cards must be constant when defining a hand range.")]
    InvalidGap,
    #[error("Range endpoints must have the higher card first")]
    InvalidRangeEndpoint,
    #[error("Invalid cell code {0}")]
    InvalidCellCode(String),
    #[error("No range preset named {0}")]
    UnknownPreset(String),
    #[error("Range reference has neither a preset nor an inline range")]
    EmptyRangeRef,
}
