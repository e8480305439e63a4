//! The 169 pre-flop starting hand classes and the 13x13 hand matrix.
//!
//! Each class is one cell of the matrix. Rows and columns are indexed by
//! value, strongest first (`A,K,Q,...,2`):
//! - the diagonal holds the pocket pairs,
//! - the upper triangle (`row < col`) holds the suited hands,
//! - the lower triangle (`row > col`) holds the offsuit hands.

use std::fmt;

use crate::core::{RangeError, Value, NUM_VALUES};

/// Number of cells in the hand matrix.
pub const NUM_PREFLOP_HANDS: usize = NUM_VALUES * NUM_VALUES;

/// The suited/offsuit marker of a non pair hand in range notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Suitedness {
    /// Both cards share a suit. Written as `s`.
    Suited,
    /// The cards have different suits. Written as `o`.
    OffSuit,
}

impl Suitedness {
    /// Parse the suffix character. Case-insensitive.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            's' => Some(Suitedness::Suited),
            'o' => Some(Suitedness::OffSuit),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suitedness::Suited => 's',
            Suitedness::OffSuit => 'o',
        }
    }

    pub fn is_suited(self) -> bool {
        self == Suitedness::Suited
    }
}

/// A lightweight key for the 13x13 matrix of pre-flop hands.
///
/// Represents one of the 169 unique pre-flop starting hands:
/// - 13 pocket pairs (e.g., AA, KK, 22)
/// - 78 suited hands (e.g., AKs, T9s)
/// - 78 offsuit hands (e.g., AKo, 72o)
///
/// The notation of a hand is its cell code.
///
/// # Examples
///
/// ```
/// use rs_poker_range::holdem::PreflopHand;
/// use rs_poker_range::core::Value;
///
/// // Create from values
/// let aks = PreflopHand::new(Value::Ace, Value::King, true);
/// assert_eq!(aks.to_notation(), "AKs");
///
/// // Create from notation
/// let ako = PreflopHand::from_notation("AKo").unwrap();
/// assert!(!ako.suited());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct PreflopHand {
    /// Higher or equal value card
    high: Value,
    /// Lower or equal value card
    low: Value,
    /// true = suited, false = offsuit (pairs always false)
    suited: bool,
}

impl PreflopHand {
    /// Create a new PreflopHand from two values and suitedness.
    ///
    /// Values are automatically ordered so that `high >= low`.
    /// Pairs always have `suited = false` regardless of the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_poker_range::holdem::PreflopHand;
    /// use rs_poker_range::core::Value;
    ///
    /// // Values are auto-ordered
    /// let hand1 = PreflopHand::new(Value::King, Value::Ace, true);
    /// let hand2 = PreflopHand::new(Value::Ace, Value::King, true);
    /// assert_eq!(hand1, hand2);
    ///
    /// // Pairs can't be suited
    /// let pair = PreflopHand::new(Value::Ace, Value::Ace, true);
    /// assert!(!pair.suited());
    /// ```
    pub fn new(v1: Value, v2: Value, suited: bool) -> Self {
        let (high, low) = if v1 >= v2 { (v1, v2) } else { (v2, v1) };
        // Pairs can't be suited
        let suited = if high == low { false } else { suited };
        Self { high, low, suited }
    }

    /// Create a pocket pair.
    pub fn pair(value: Value) -> Self {
        Self::new(value, value, false)
    }

    /// Create a non pair hand with the given suitedness.
    pub fn with_suitedness(v1: Value, v2: Value, suitedness: Suitedness) -> Self {
        Self::new(v1, v2, suitedness.is_suited())
    }

    /// Returns true if this is a pocket pair.
    pub fn is_pair(&self) -> bool {
        self.high == self.low
    }

    /// Returns true if this hand is suited.
    ///
    /// Pairs always return false.
    pub fn suited(&self) -> bool {
        self.suited
    }

    /// Returns the high card value.
    pub fn high(&self) -> Value {
        self.high
    }

    /// Returns the low card value.
    pub fn low(&self) -> Value {
        self.low
    }

    /// Convert to the canonical cell code.
    ///
    /// Format:
    /// - Pairs: "AA", "KK", "22"
    /// - Suited: "AKs", "T9s"
    /// - Offsuit: "AKo", "72o"
    ///
    /// The higher card always comes first.
    ///
    /// ```
    /// use rs_poker_range::holdem::PreflopHand;
    /// use rs_poker_range::core::Value;
    ///
    /// let seven_two = PreflopHand::new(Value::Two, Value::Seven, false);
    /// assert_eq!(seven_two.to_notation(), "72o");
    /// ```
    pub fn to_notation(&self) -> String {
        let high_char = self.high.to_char();
        let low_char = self.low.to_char();

        if self.is_pair() {
            format!("{}{}", high_char, low_char)
        } else if self.suited {
            format!("{}{}s", high_char, low_char)
        } else {
            format!("{}{}o", high_char, low_char)
        }
    }

    /// Parse from user written notation.
    ///
    /// This is lenient: case doesn't matter and the two values can be in
    /// either order (`"kas"` is `AKs`).
    ///
    /// Accepts formats:
    /// - Pairs: "AA", "KK", "22"
    /// - Suited: "AKs", "T9s"
    /// - Offsuit: "AKo", "72o"
    ///
    /// # Errors
    ///
    /// Returns a `RangeError` describing the first problem found.
    ///
    /// ```
    /// use rs_poker_range::holdem::PreflopHand;
    ///
    /// assert_eq!(
    ///     PreflopHand::from_notation("kas").unwrap(),
    ///     PreflopHand::from_notation("AKs").unwrap()
    /// );
    /// assert!(PreflopHand::from_notation("AK").is_err());
    /// ```
    pub fn from_notation(s: &str) -> Result<Self, RangeError> {
        let mut chars = s.chars();

        let v1 = next_value(&mut chars)?;
        let v2 = next_value(&mut chars)?;

        let hand = match chars.next() {
            None if v1 == v2 => Self::pair(v1),
            None => return Err(RangeError::MissingSuitedness),
            Some(c) => {
                let suitedness =
                    Suitedness::from_char(c).ok_or(RangeError::InvalidSuitednessChar(c))?;
                if v1 == v2 {
                    return Err(RangeError::SuitedPair);
                }
                Self::with_suitedness(v1, v2, suitedness)
            }
        };

        if chars.next().is_some() {
            return Err(RangeError::UnparsedCharsRemaining);
        }
        Ok(hand)
    }

    /// Parse a canonical cell code exactly as `to_notation` writes it.
    ///
    /// Upper case values, lower case suffix, higher value first. A code with
    /// its values reversed is not a cell code.
    ///
    /// ```
    /// use rs_poker_range::holdem::PreflopHand;
    ///
    /// assert!(PreflopHand::from_cell_code("AKs").is_ok());
    /// assert!(PreflopHand::from_cell_code("KAs").is_err());
    /// assert!(PreflopHand::from_cell_code("aks").is_err());
    /// ```
    pub fn from_cell_code(code: &str) -> Result<Self, RangeError> {
        let invalid = || RangeError::InvalidCellCode(code.to_string());
        let hand = Self::from_notation(code).map_err(|_| invalid())?;
        if hand.to_notation() == code {
            Ok(hand)
        } else {
            Err(invalid())
        }
    }

    /// The hand in the given matrix cell.
    ///
    /// Returns `None` if either index is outside `0..13`.
    ///
    /// ```
    /// use rs_poker_range::holdem::PreflopHand;
    ///
    /// assert_eq!(PreflopHand::from_matrix(0, 0).unwrap().to_notation(), "AA");
    /// assert_eq!(PreflopHand::from_matrix(0, 1).unwrap().to_notation(), "AKs");
    /// assert_eq!(PreflopHand::from_matrix(1, 0).unwrap().to_notation(), "AKo");
    /// assert!(PreflopHand::from_matrix(13, 0).is_none());
    /// ```
    pub fn from_matrix(row: usize, col: usize) -> Option<Self> {
        let row_value = Value::from_rank_index(row)?;
        let col_value = Value::from_rank_index(col)?;
        // Upper triangle is suited
        Some(Self::new(row_value, col_value, row < col))
    }

    /// The `(row, col)` cell of this hand in the matrix.
    pub fn matrix_position(&self) -> (usize, usize) {
        let hi = self.high.rank_index();
        let lo = self.low.rank_index();
        if self.suited {
            (hi, lo)
        } else {
            (lo, hi)
        }
    }

    /// Row-major index of the cell, `0..169`.
    pub fn matrix_index(&self) -> usize {
        let (row, col) = self.matrix_position();
        row * NUM_VALUES + col
    }

    /// Inverse of `matrix_index`.
    pub fn from_matrix_index(idx: usize) -> Option<Self> {
        Self::from_matrix(idx / NUM_VALUES, idx % NUM_VALUES)
    }

    /// Generate all 169 unique pre-flop hands.
    ///
    /// Returns a vector containing:
    /// - 13 pocket pairs
    /// - 78 suited hands
    /// - 78 offsuit hands
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_poker_range::holdem::PreflopHand;
    ///
    /// let all_hands = PreflopHand::all();
    /// assert_eq!(all_hands.len(), 169);
    /// ```
    pub fn all() -> Vec<Self> {
        let mut hands = Vec::with_capacity(NUM_PREFLOP_HANDS);
        let values = Value::values();

        for (i, &high) in values.iter().enumerate() {
            for &low in &values[..=i] {
                // Always add offsuit (or pair for same values)
                hands.push(Self::new(high, low, false));

                // Add suited for non-pairs
                if high != low {
                    hands.push(Self::new(high, low, true));
                }
            }
        }

        hands
    }
}

fn next_value(chars: &mut std::str::Chars<'_>) -> Result<Value, RangeError> {
    let c = chars.next().ok_or(RangeError::TooFewChars)?;
    Value::from_char(c).ok_or(RangeError::UnexpectedValueChar(c))
}

impl fmt::Display for PreflopHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}

impl TryFrom<String> for PreflopHand {
    type Error = RangeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_notation(&value)
    }
}

impl From<PreflopHand> for String {
    fn from(hand: PreflopHand) -> Self {
        hand.to_notation()
    }
}
