use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use rand::Rng;
#[cfg(feature = "serde")]
use serde::ser::SerializeSeq;

use super::PreflopHand;
use crate::core::NUM_VALUES;

/// Only the low 13 bits of a row are cells.
const ROW_MASK: u16 = (1 << NUM_VALUES) - 1;

/// A set of pre-flop hand classes.
///
/// Each of the 169 cells of the hand matrix is one bit. Row `r` of the
/// matrix lives in `rows[r]` and column `c` is bit `c` of that row.
///
/// Iteration is in row-major matrix order: `AA, AKs, AQs, ..., AKo, KK, ...`.
///
/// ```
/// use rs_poker_range::holdem::{HandRange, PreflopHand};
///
/// let mut range = HandRange::new();
/// range.insert(PreflopHand::from_notation("AKs").unwrap());
///
/// assert!(range.contains_code("AKs"));
/// assert!(!range.contains_code("AKo"));
/// assert_eq!(1, range.len());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HandRange {
    rows: [u16; NUM_VALUES],
}

impl HandRange {
    /// Create a new empty range.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a range with every one of the 169 hands in it.
    ///
    /// ```
    /// use rs_poker_range::holdem::HandRange;
    ///
    /// assert_eq!(169, HandRange::full().len());
    /// ```
    pub fn full() -> Self {
        Self {
            rows: [ROW_MASK; NUM_VALUES],
        }
    }

    /// Add a hand. Adding a hand twice is a no-op.
    pub fn insert(&mut self, hand: PreflopHand) {
        let (row, col) = hand.matrix_position();
        self.rows[row] |= 1 << col;
    }

    /// Remove a hand from the range.
    pub fn remove(&mut self, hand: PreflopHand) {
        let (row, col) = hand.matrix_position();
        self.rows[row] &= !(1 << col);
    }

    /// Is the hand in the range?
    pub fn contains(&self, hand: PreflopHand) -> bool {
        let (row, col) = hand.matrix_position();
        self.rows[row] & (1 << col) != 0
    }

    /// Is the cell at `(row, col)` in the range?
    ///
    /// Positions off the matrix are never in the range.
    pub fn contains_position(&self, row: usize, col: usize) -> bool {
        row < NUM_VALUES && col < NUM_VALUES && self.rows[row] & (1 << col) != 0
    }

    /// Is the hand with this cell code in the range?
    ///
    /// Only canonical codes match, so `"KAs"` or `"aks"` are never
    /// found even when `AKs` is in the range.
    ///
    /// ```
    /// use rs_poker_range::holdem::parse_range_expression;
    ///
    /// let range = parse_range_expression("AKs").base;
    /// assert!(range.contains_code("AKs"));
    /// assert!(!range.contains_code("KAs"));
    /// ```
    pub fn contains_code(&self, code: &str) -> bool {
        PreflopHand::from_cell_code(code).is_ok_and(|hand| self.contains(hand))
    }

    /// Is the range empty?
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|r| *r == 0)
    }

    /// How many hand classes are in the range?
    pub fn len(&self) -> usize {
        self.rows.iter().map(|r| r.count_ones() as usize).sum()
    }

    pub fn clear(&mut self) {
        self.rows = [0; NUM_VALUES];
    }

    /// Is every hand in `self` also in `other`?
    pub fn is_subset(&self, other: &HandRange) -> bool {
        self.rows
            .iter()
            .zip(other.rows.iter())
            .all(|(mine, theirs)| mine & !theirs == 0)
    }

    /// Iterate over the hands in matrix order.
    pub fn iter(&self) -> HandRangeIter {
        HandRangeIter {
            rows: self.rows,
            row: 0,
        }
    }

    /// The canonical cell codes of every hand in the range,
    /// in matrix order.
    pub fn codes(&self) -> Vec<String> {
        self.iter().map(|h| h.to_notation()).collect()
    }

    /// Sample one hand class from the range.
    ///
    /// Every class is equally likely. Returns `None` if the range is empty.
    ///
    /// ```
    /// use rand::rng;
    /// use rs_poker_range::holdem::{parse_range_expression, HandRange};
    ///
    /// let mut rng = rng();
    /// let range = parse_range_expression("QQ+,AKs").base;
    /// let hand = range.sample_one(&mut rng).unwrap();
    /// assert!(range.contains(hand));
    ///
    /// assert!(HandRange::new().sample_one(&mut rng).is_none());
    /// ```
    pub fn sample_one<R: Rng>(&self, rng: &mut R) -> Option<PreflopHand> {
        let count = self.len();
        if count == 0 {
            return None;
        }
        let idx = rng.random_range(0..count);
        self.iter().nth(idx)
    }
}

impl BitOr for HandRange {
    type Output = Self;

    fn bitor(mut self, rhs: Self) -> Self::Output {
        self |= rhs;
        self
    }
}

impl BitOrAssign for HandRange {
    fn bitor_assign(&mut self, rhs: Self) {
        for (mine, theirs) in self.rows.iter_mut().zip(rhs.rows) {
            *mine |= theirs;
        }
    }
}

impl BitOrAssign<PreflopHand> for HandRange {
    fn bitor_assign(&mut self, rhs: PreflopHand) {
        self.insert(rhs);
    }
}

impl BitAnd for HandRange {
    type Output = Self;

    fn bitand(mut self, rhs: Self) -> Self::Output {
        self &= rhs;
        self
    }
}

impl BitAndAssign for HandRange {
    fn bitand_assign(&mut self, rhs: Self) {
        for (mine, theirs) in self.rows.iter_mut().zip(rhs.rows) {
            *mine &= theirs;
        }
    }
}

impl Not for HandRange {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self {
            rows: self.rows.map(|r| !r & ROW_MASK),
        }
    }
}

/// The iterator for the HandRange
/// It iterates over the hands in row-major matrix order
pub struct HandRangeIter {
    rows: [u16; NUM_VALUES],
    row: usize,
}

impl Iterator for HandRangeIter {
    type Item = PreflopHand;

    fn next(&mut self) -> Option<Self::Item> {
        while self.row < NUM_VALUES {
            let bits = self.rows[self.row];
            if bits == 0 {
                self.row += 1;
                continue;
            }
            let col = bits.trailing_zeros() as usize;
            self.rows[self.row] &= !(1 << col);
            return PreflopHand::from_matrix(self.row, col);
        }
        None
    }
}

impl IntoIterator for HandRange {
    type Item = PreflopHand;
    type IntoIter = HandRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<PreflopHand> for HandRange {
    fn extend<T: IntoIterator<Item = PreflopHand>>(&mut self, iter: T) {
        for hand in iter {
            self.insert(hand);
        }
    }
}

impl FromIterator<PreflopHand> for HandRange {
    fn from_iter<T: IntoIterator<Item = PreflopHand>>(iter: T) -> Self {
        let mut range = HandRange::new();
        range.extend(iter);
        range
    }
}

impl fmt::Debug for HandRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Comma separated cell codes. The output parses back to the same range.
impl fmt::Display for HandRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, hand) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{hand}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HandRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for hand in self.iter() {
            seq.serialize_element(&hand)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct HandRangeVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for HandRangeVisitor {
    type Value = HandRange;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of pre-flop hands")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut range = HandRange::new();
        while let Some(hand) = seq.next_element()? {
            range.insert(hand);
        }
        Ok(range)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HandRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(HandRangeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::core::Value;

    fn hand(code: &str) -> PreflopHand {
        PreflopHand::from_cell_code(code).unwrap()
    }

    #[test]
    fn test_empty() {
        let range = HandRange::new();
        assert!(range.is_empty());
        assert_eq!(0, range.len());
        assert_eq!(None, range.iter().next());
    }

    #[test]
    fn test_insert_all() {
        let mut range = HandRange::new();
        for (i, h) in PreflopHand::all().into_iter().enumerate() {
            range.insert(h);
            // Inserting twice doesn't change anything
            range.insert(h);
            assert!(range.contains(h));
            assert_eq!(i + 1, range.len());
        }
        assert_eq!(HandRange::full(), range);
    }

    #[test]
    fn test_remove() {
        let mut range = HandRange::full();
        range.remove(hand("AKo"));
        assert!(!range.contains(hand("AKo")));
        assert!(range.contains(hand("AKs")));
        assert_eq!(168, range.len());
    }

    #[test]
    fn test_iter_matrix_order() {
        let range: HandRange = ["AKo", "KK", "AKs", "AA", "22"]
            .into_iter()
            .map(hand)
            .collect();
        assert_eq!(vec!["AA", "AKs", "AKo", "KK", "22"], range.codes());
    }

    #[test]
    fn test_iter_covers_full() {
        assert_eq!(169, HandRange::full().iter().count());
    }

    #[test]
    fn test_contains_position() {
        let range: HandRange = [hand("AKs")].into_iter().collect();
        assert!(range.contains_position(0, 1));
        assert!(!range.contains_position(1, 0));
        assert!(!range.contains_position(13, 1));
        assert!(!range.contains_position(0, 13));
    }

    #[test]
    fn test_contains_code_requires_canonical() {
        let range: HandRange = [hand("AKs"), hand("72o")].into_iter().collect();
        assert!(range.contains_code("AKs"));
        assert!(range.contains_code("72o"));
        assert!(!range.contains_code("KAs"));
        assert!(!range.contains_code("27o"));
        assert!(!range.contains_code("aks"));
        assert!(!range.contains_code("garbage"));
    }

    #[test]
    fn test_set_ops() {
        let a: HandRange = [hand("AA"), hand("KK")].into_iter().collect();
        let b: HandRange = [hand("KK"), hand("QQ")].into_iter().collect();

        assert_eq!(3, (a | b).len());
        assert_eq!(vec!["KK"], (a & b).codes());
        assert_eq!(167, (!a).len());
        assert!((a & b).is_subset(&a));
        assert!(!a.is_subset(&b));
        assert!(HandRange::new().is_subset(&a));
    }

    #[test]
    fn test_display() {
        let range: HandRange = [hand("QQ"), hand("AA"), hand("AKs")].into_iter().collect();
        assert_eq!("AA,AKs,QQ", range.to_string());
        assert_eq!("", HandRange::new().to_string());
    }

    #[test]
    fn test_sample_one_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let range: HandRange = [
            PreflopHand::pair(Value::Two),
            hand("T9s"),
            hand("AKo"),
        ]
        .into_iter()
        .collect();

        let mut seen = HandRange::new();
        for _ in 0..200 {
            let sampled = range.sample_one(&mut rng).unwrap();
            assert!(range.contains(sampled));
            seen.insert(sampled);
        }
        // 200 draws from 3 classes will see all of them
        assert_eq!(range, seen);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_serde_range_roundtrip() {
            let range: HandRange = [hand("AA"), hand("AKs")].into_iter().collect();
            let json = serde_json::to_string(&range).unwrap();
            assert_eq!(json, "[\"AA\",\"AKs\"]");

            let parsed: HandRange = serde_json::from_str(&json).unwrap();
            assert_eq!(range, parsed);
        }
    }
}
