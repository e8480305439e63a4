//! Parsing of full range expressions.
//!
//! An expression is a list of tokens separated by commas and/or whitespace,
//! for example `"22+, A5s-A2s KQo"`. Parts of the expression can be wrapped
//! in an emphasis marker (`**` by default) to highlight them on top of the
//! rest of the range: `"22+,AKs**JJ+**"`.
//!
//! Each token is classified into a [`RangeToken`] and then expanded into
//! hand classes. Tokens that don't describe any hands are dropped without
//! affecting the rest of the expression, unless strict parsing is asked for.

use std::iter::Peekable;
use std::str::{Chars, FromStr};

use tracing::event;

use super::{
    expand_dashed_range, expand_open_ended, expand_pair_plus, expand_pair_range, HandRange,
    PreflopHand, Suitedness,
};
use crate::core::{RangeError, Value};

fn default_emphasis_marker() -> String {
    String::from("**")
}

/// Configuration for a [`RangeParser`].
///
/// # Example JSON
///
/// ```json
/// { "emphasis_marker": "**", "strict": false }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeParserConfig {
    /// The delimiter that opens and closes an emphasis block.
    /// An empty marker turns emphasis off.
    #[cfg_attr(feature = "serde", serde(default = "default_emphasis_marker"))]
    pub emphasis_marker: String,

    /// When true `RangeParser::try_parse` fails on the first bad token
    /// instead of skipping it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub strict: bool,
}

impl Default for RangeParserConfig {
    fn default() -> Self {
        Self {
            emphasis_marker: default_emphasis_marker(),
            strict: false,
        }
    }
}

/// One classified token of range notation.
///
/// ```
/// use rs_poker_range::core::Value;
/// use rs_poker_range::holdem::RangeToken;
///
/// let token: RangeToken = "jj+".parse().unwrap();
/// assert_eq!(RangeToken::PairPlus(Value::Jack), token);
/// assert_eq!(4, token.expand().len());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeToken {
    /// `TT`
    Pair(Value),
    /// `TT+`
    PairPlus(Value),
    /// `66-99`
    PairRange(Value, Value),
    /// `AKs`, `KQo`
    Exact(PreflopHand),
    /// `A5s+`, `KTo+`
    OpenEnded {
        high: Value,
        low: Value,
        suitedness: Suitedness,
    },
    /// `A5s-A2s`, `KQo-KTo`, `KTs-JTs`, `T9s-54s`
    Dashed {
        hi1: Value,
        lo1: Value,
        hi2: Value,
        lo2: Value,
        suitedness: Suitedness,
    },
}

impl RangeToken {
    /// Classify a single token. Case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns the `RangeError` that explains why the token isn't one of
    /// the recognized shapes.
    pub fn parse_token(token: &str) -> Result<Self, RangeError> {
        let mut iter = token.chars().peekable();

        let v1 = take_value(&mut iter)?;
        let v2 = take_value(&mut iter)?;
        let suitedness = take_suitedness(&mut iter);
        if v1 == v2 && suitedness.is_some() {
            return Err(RangeError::SuitedPair);
        }

        let parsed = match iter.next() {
            None => match suitedness {
                None if v1 == v2 => RangeToken::Pair(v1),
                None => return Err(RangeError::MissingSuitedness),
                Some(s) => RangeToken::Exact(PreflopHand::with_suitedness(v1, v2, s)),
            },
            Some('+') => match suitedness {
                None if v1 == v2 => RangeToken::PairPlus(v1),
                None => return Err(RangeError::MissingSuitedness),
                Some(_) if v2 > v1 => return Err(RangeError::InvalidPlusModifier),
                Some(s) => RangeToken::OpenEnded {
                    high: v1,
                    low: v2,
                    suitedness: s,
                },
            },
            Some(c) if is_dash(c) => {
                let w1 = take_value(&mut iter)?;
                let w2 = take_value(&mut iter)?;
                let end_suitedness = take_suitedness(&mut iter);
                if w1 == w2 && end_suitedness.is_some() {
                    return Err(RangeError::SuitedPair);
                }
                if suitedness != end_suitedness {
                    return Err(RangeError::MismatchedSuitedness);
                }
                match suitedness {
                    None if v1 == v2 && w1 == w2 => RangeToken::PairRange(v1, w1),
                    None => return Err(RangeError::MissingSuitedness),
                    Some(s) => dashed(v1, v2, w1, w2, s)?,
                }
            }
            Some(c) if suitedness.is_none() => return Err(RangeError::InvalidSuitednessChar(c)),
            Some(_) => return Err(RangeError::UnparsedCharsRemaining),
        };

        if iter.next().is_some() {
            return Err(RangeError::UnparsedCharsRemaining);
        }
        Ok(parsed)
    }

    /// All the hand classes this token stands for.
    pub fn expand(&self) -> Vec<PreflopHand> {
        match *self {
            RangeToken::Pair(v) => vec![PreflopHand::pair(v)],
            RangeToken::PairPlus(v) => expand_pair_plus(v),
            RangeToken::PairRange(a, b) => expand_pair_range(a, b),
            RangeToken::Exact(hand) => vec![hand],
            RangeToken::OpenEnded {
                high,
                low,
                suitedness,
            } => expand_open_ended(high, low, suitedness),
            RangeToken::Dashed {
                hi1,
                lo1,
                hi2,
                lo2,
                suitedness,
            } => expand_dashed_range(hi1, lo1, hi2, lo2, suitedness),
        }
    }
}

impl FromStr for RangeToken {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_token(s)
    }
}

/// Validate the endpoints of a suited or offsuit dashed range.
fn dashed(
    hi1: Value,
    lo1: Value,
    hi2: Value,
    lo2: Value,
    suitedness: Suitedness,
) -> Result<RangeToken, RangeError> {
    if lo1 >= hi1 || lo2 >= hi2 {
        return Err(RangeError::InvalidRangeEndpoint);
    }
    let same_gap = hi1 as i8 - lo1 as i8 == hi2 as i8 - lo2 as i8;
    if hi1 != hi2 && lo1 != lo2 && !same_gap {
        return Err(RangeError::InvalidGap);
    }
    Ok(RangeToken::Dashed {
        hi1,
        lo1,
        hi2,
        lo2,
        suitedness,
    })
}

/// Ranges written by hand (or pasted from charts) often use en or em dashes.
fn is_dash(c: char) -> bool {
    matches!(c, '-' | '\u{2013}' | '\u{2014}')
}

fn take_value(iter: &mut Peekable<Chars>) -> Result<Value, RangeError> {
    let c = iter.next().ok_or(RangeError::TooFewChars)?;
    Value::from_char(c).ok_or(RangeError::UnexpectedValueChar(c))
}

fn take_suitedness(iter: &mut Peekable<Chars>) -> Option<Suitedness> {
    let suitedness = Suitedness::from_char(*iter.peek()?)?;
    iter.next();
    Some(suitedness)
}

/// The result of parsing a range expression.
///
/// `emph` is always a subset of `base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedRange {
    /// Every hand in the range, emphasized or not.
    pub base: HandRange,
    /// The hands inside emphasis blocks.
    pub emph: HandRange,
}

impl ParsedRange {
    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }
}

/// A token that was dropped while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDiagnostic {
    /// The token as written.
    pub token: String,
    /// Whether the token was inside an emphasis block.
    pub emphasized: bool,
    /// Why it was dropped.
    pub error: RangeError,
}

/// Parser for range expressions.
///
/// ```
/// use rs_poker_range::holdem::RangeParser;
///
/// let parser = RangeParser::default();
/// let parsed = parser.parse("XY+, AKs");
///
/// assert_eq!(vec!["AKs"], parsed.base.codes());
/// assert!(parsed.emph.is_empty());
///
/// assert!(parser.parse_strict("XY+, AKs").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RangeParser {
    config: RangeParserConfig,
}

impl RangeParser {
    pub fn new(config: RangeParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RangeParserConfig {
        &self.config
    }

    /// Parse an expression, skipping any token that isn't valid notation.
    ///
    /// This never fails. Calling it twice with the same input gives the
    /// same result.
    pub fn parse(&self, spec: &str) -> ParsedRange {
        self.parse_with_diagnostics(spec).0
    }

    /// Parse an expression and also report every token that was skipped.
    pub fn parse_with_diagnostics(&self, spec: &str) -> (ParsedRange, Vec<TokenDiagnostic>) {
        let mut parsed = ParsedRange::default();
        let mut diagnostics = Vec::new();

        for (token, emphasized) in self.tokens(spec) {
            match RangeToken::parse_token(token) {
                Ok(range_token) => {
                    let hands = range_token.expand();
                    event!(
                        tracing::Level::TRACE,
                        token,
                        emphasized,
                        hands = hands.len(),
                        "Expanded range token"
                    );
                    parsed.base.extend(hands.iter().copied());
                    if emphasized {
                        parsed.emph.extend(hands);
                    }
                }
                Err(error) => {
                    event!(
                        tracing::Level::DEBUG,
                        token,
                        emphasized,
                        %error,
                        "Skipping invalid range token"
                    );
                    diagnostics.push(TokenDiagnostic {
                        token: token.to_string(),
                        emphasized,
                        error,
                    });
                }
            }
        }

        (parsed, diagnostics)
    }

    /// Parse an expression, failing on the first token that isn't valid
    /// notation.
    pub fn parse_strict(&self, spec: &str) -> Result<ParsedRange, RangeError> {
        let (parsed, diagnostics) = self.parse_with_diagnostics(spec);
        match diagnostics.into_iter().next() {
            Some(diagnostic) => Err(diagnostic.error),
            None => Ok(parsed),
        }
    }

    /// Parse strictly or leniently depending on `RangeParserConfig::strict`.
    pub fn try_parse(&self, spec: &str) -> Result<ParsedRange, RangeError> {
        if self.config.strict {
            self.parse_strict(spec)
        } else {
            Ok(self.parse(spec))
        }
    }

    /// Split the expression into tokens, each tagged with whether it sits
    /// inside an emphasis block.
    ///
    /// Segments between markers alternate base, emphasis, base, ... A marker
    /// without a partner is ignored and the text after it stays base.
    fn tokens<'a>(&self, spec: &'a str) -> Vec<(&'a str, bool)> {
        let segments: Vec<&str> = if self.config.emphasis_marker.is_empty() {
            vec![spec]
        } else {
            spec.split(self.config.emphasis_marker.as_str()).collect()
        };
        let unpaired_marker = segments.len() % 2 == 0;
        if unpaired_marker {
            event!(
                tracing::Level::WARN,
                marker = self.config.emphasis_marker.as_str(),
                "Ignoring unpaired emphasis marker"
            );
        }

        let last = segments.len() - 1;
        segments
            .into_iter()
            .enumerate()
            .flat_map(|(i, segment)| {
                let emphasized = i % 2 == 1 && !(unpaired_marker && i == last);
                segment
                    .split(|c: char| c == ',' || c.is_whitespace())
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(move |t| (t, emphasized))
            })
            .collect()
    }
}

/// Parse a range expression with the default parser.
///
/// ```
/// use rs_poker_range::holdem::parse_range_expression;
///
/// let parsed = parse_range_expression("77+");
/// assert_eq!(
///     vec!["AA", "KK", "QQ", "JJ", "TT", "99", "88", "77"],
///     parsed.base.codes()
/// );
/// ```
pub fn parse_range_expression(spec: &str) -> ParsedRange {
    RangeParser::default().parse(spec)
}
