//! Range notation for Texas hold'em starting hands.
//!
//! This crate turns PokerStove style range strings such as
//! `"JJ+,AQs+,A5s-A2s,KQo"` into the exact set of the 169 starting hand
//! classes they denote. A range may carry `**emphasized**` sub ranges that
//! are highlighted on top of the base range, and the result can be mapped
//! onto the usual 13x13 hand matrix.
//!
//! ```
//! use rs_poker_range::holdem::{parse_range_expression, Highlight, RangeHighlighter};
//!
//! let parsed = parse_range_expression("22+,AKs**JJ+**");
//! assert!(parsed.base.contains_code("AKs"));
//! assert_eq!(parsed.emph.len(), 4);
//!
//! let highlighter = RangeHighlighter::new(parsed);
//! // Row 0, col 0 is AA
//! assert_eq!(highlighter.classify(0, 0), Highlight::Emphasized);
//! // Row 0, col 1 is AKs
//! assert_eq!(highlighter.classify(0, 1), Highlight::Base);
//! // Row 1, col 0 is AKo
//! assert_eq!(highlighter.classify(1, 0), Highlight::None);
//! ```

/// Rank values and the crate error type.
/// Everything in core is agnostic to range notation.
pub mod core;
/// Hold'em starting hands, the hand matrix, and range parsing.
pub mod holdem;
