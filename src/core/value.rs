/// How many different card values there are.
pub const NUM_VALUES: usize = 13;

/// Card rank or value.
/// This is basically the face value - 2
///
/// Ordering follows strength, so `Value::Two` is the smallest
/// and `Value::Ace` the largest.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; NUM_VALUES] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Take a u8 and convert it to a value.
    ///
    /// Returns `None` for anything above 12.
    ///
    /// ```
    /// use rs_poker_range::core::Value;
    ///
    /// assert_eq!(Some(Value::Two), Value::from_u8(0));
    /// assert_eq!(Some(Value::Ace), Value::from_u8(12));
    /// assert_eq!(None, Value::from_u8(13));
    /// ```
    pub fn from_u8(v: u8) -> Option<Value> {
        VALUES.get(v as usize).copied()
    }

    /// Get all of the `Value`'s that are possible.
    /// Lowest first.
    pub const fn values() -> [Value; NUM_VALUES] {
        VALUES
    }

    /// Parse a value from its character. Case-insensitive.
    ///
    /// ```
    /// use rs_poker_range::core::Value;
    ///
    /// assert_eq!(Some(Value::Ten), Value::from_char('T'));
    /// assert_eq!(Some(Value::Ten), Value::from_char('t'));
    /// assert_eq!(None, Value::from_char('1'));
    /// ```
    pub fn from_char(c: char) -> Option<Value> {
        match c.to_ascii_uppercase() {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    /// Convert this value to the char used in range notation.
    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::King => 'K',
            Value::Queen => 'Q',
            Value::Jack => 'J',
            Value::Ten => 'T',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }

    /// Position of this value in the strongest-first order
    /// `A,K,Q,J,T,9,8,7,6,5,4,3,2`. That is also the row/column
    /// in the hand matrix.
    ///
    /// ```
    /// use rs_poker_range::core::Value;
    ///
    /// assert_eq!(0, Value::Ace.rank_index());
    /// assert_eq!(4, Value::Ten.rank_index());
    /// assert_eq!(12, Value::Two.rank_index());
    /// ```
    pub fn rank_index(self) -> usize {
        NUM_VALUES - 1 - self as usize
    }

    /// Inverse of `rank_index`.
    pub fn from_rank_index(idx: usize) -> Option<Value> {
        if idx >= NUM_VALUES {
            return None;
        }
        Some(VALUES[NUM_VALUES - 1 - idx])
    }

    /// Every value at least as strong as this one, weakest first.
    pub fn and_stronger(self) -> impl Iterator<Item = Value> {
        VALUES.into_iter().skip(self as usize)
    }
}

/// Look up the strongest-first index of a rank character.
///
/// Anything that isn't one of the thirteen ranks is not found.
///
/// ```
/// use rs_poker_range::core::rank_index;
///
/// assert_eq!(Some(0), rank_index('A'));
/// assert_eq!(Some(12), rank_index('2'));
/// assert_eq!(None, rank_index('X'));
/// ```
pub fn rank_index(c: char) -> Option<usize> {
    Value::from_char(c).map(Value::rank_index)
}
