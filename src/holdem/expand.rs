//! Expansion of the range notation shapes into hand classes.
//!
//! Every function here is total: a shape that doesn't describe any hands
//! (bad endpoints, a low card above its high card, an uneven diagonal)
//! expands to nothing.

use super::{PreflopHand, Suitedness};
use crate::core::Value;

/// `77+`: the pair and every stronger pair.
///
/// ```
/// use rs_poker_range::core::Value;
/// use rs_poker_range::holdem::expand_pair_plus;
///
/// let codes: Vec<String> = expand_pair_plus(Value::Jack)
///     .iter()
///     .map(|h| h.to_notation())
///     .collect();
/// assert_eq!(vec!["JJ", "QQ", "KK", "AA"], codes);
/// ```
pub fn expand_pair_plus(value: Value) -> Vec<PreflopHand> {
    value.and_stronger().map(PreflopHand::pair).collect()
}

/// `66-99`: every pair between the two endpoints, inclusive.
/// The endpoints can be given in either order.
pub fn expand_pair_range(first: Value, second: Value) -> Vec<PreflopHand> {
    let (low, high) = if first <= second {
        (first, second)
    } else {
        (second, first)
    };
    low.and_stronger()
        .take_while(|v| *v <= high)
        .map(PreflopHand::pair)
        .collect()
}

/// `A5s+`: the hand plus every hand with the same high card and a
/// stronger kicker, stopping below the high card.
///
/// Returns nothing when `low` isn't strictly below `high`.
///
/// ```
/// use rs_poker_range::core::Value;
/// use rs_poker_range::holdem::{expand_open_ended, Suitedness};
///
/// let hands = expand_open_ended(Value::King, Value::Ten, Suitedness::OffSuit);
/// let codes: Vec<String> = hands.iter().map(|h| h.to_notation()).collect();
/// assert_eq!(vec!["KTo", "KJo", "KQo"], codes);
///
/// assert!(expand_open_ended(Value::Five, Value::Ace, Suitedness::Suited).is_empty());
/// ```
pub fn expand_open_ended(high: Value, low: Value, suitedness: Suitedness) -> Vec<PreflopHand> {
    if low >= high {
        return vec![];
    }
    low.and_stronger()
        .take_while(|v| *v < high)
        .map(|kicker| PreflopHand::with_suitedness(high, kicker, suitedness))
        .collect()
}

/// A two endpoint range like `A5s-A2s`, `KQo-KTo`, `QTs-T9s` or `T9s-54s`.
///
/// The shape is worked out from the endpoints:
/// - same high card: walk the low card from the first endpoint to the second,
/// - same low card: walk the high card,
/// - otherwise both cards move in lockstep along the diagonal, which needs the
///   same distance for both.
///
/// Endpoints are ordered high card first and both have to be valid non pair
/// hands. Anything else expands to nothing.
///
/// ```
/// use rs_poker_range::core::Value;
/// use rs_poker_range::holdem::{expand_dashed_range, Suitedness};
///
/// let hands = expand_dashed_range(
///     Value::Ten,
///     Value::Nine,
///     Value::Five,
///     Value::Four,
///     Suitedness::Suited,
/// );
/// let codes: Vec<String> = hands.iter().map(|h| h.to_notation()).collect();
/// assert_eq!(vec!["T9s", "98s", "87s", "76s", "65s", "54s"], codes);
/// ```
pub fn expand_dashed_range(
    hi1: Value,
    lo1: Value,
    hi2: Value,
    lo2: Value,
    suitedness: Suitedness,
) -> Vec<PreflopHand> {
    if lo1 >= hi1 || lo2 >= hi2 {
        return vec![];
    }

    let make = |hi: usize, lo: usize| -> Option<PreflopHand> {
        let high = Value::from_rank_index(hi)?;
        let low = Value::from_rank_index(lo)?;
        Some(PreflopHand::with_suitedness(high, low, suitedness))
    };

    let (h1, l1) = (hi1.rank_index(), lo1.rank_index());
    let (h2, l2) = (hi2.rank_index(), lo2.rank_index());

    if h1 == h2 {
        walk(l1, l2).filter_map(|lo| make(h1, lo)).collect()
    } else if l1 == l2 {
        walk(h1, h2).filter_map(|hi| make(hi, l1)).collect()
    } else if h2 as isize - h1 as isize == l2 as isize - l1 as isize {
        let gap = l1 - h1;
        walk(h1, h2).filter_map(|hi| make(hi, hi + gap)).collect()
    } else {
        vec![]
    }
}

/// Inclusive walk from `from` to `to` in whichever direction is needed.
fn walk(from: usize, to: usize) -> Box<dyn Iterator<Item = usize>> {
    if from <= to {
        Box::new(from..=to)
    } else {
        Box::new((to..=from).rev())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(hands: Vec<PreflopHand>) -> Vec<String> {
        hands.into_iter().map(|h| h.to_notation()).collect()
    }

    #[test]
    fn test_pair_plus() {
        assert_eq!(
            vec!["77", "88", "99", "TT", "JJ", "QQ", "KK", "AA"],
            codes(expand_pair_plus(Value::Seven))
        );
        assert_eq!(vec!["AA"], codes(expand_pair_plus(Value::Ace)));
        assert_eq!(13, expand_pair_plus(Value::Two).len());
    }

    #[test]
    fn test_pair_range_either_direction() {
        let expected = vec!["66", "77", "88", "99"];
        assert_eq!(expected, codes(expand_pair_range(Value::Six, Value::Nine)));
        assert_eq!(expected, codes(expand_pair_range(Value::Nine, Value::Six)));
        assert_eq!(vec!["TT"], codes(expand_pair_range(Value::Ten, Value::Ten)));
    }

    #[test]
    fn test_open_ended_suited() {
        assert_eq!(
            vec!["A5s", "A6s", "A7s", "A8s", "A9s", "ATs", "AJs", "AQs", "AKs"],
            codes(expand_open_ended(Value::Ace, Value::Five, Suitedness::Suited))
        );
    }

    #[test]
    fn test_open_ended_never_makes_pairs() {
        for high in Value::values() {
            for low in Value::values() {
                for hand in expand_open_ended(high, low, Suitedness::Suited) {
                    assert!(!hand.is_pair());
                    assert_eq!(high, hand.high());
                }
            }
        }
    }

    #[test]
    fn test_open_ended_invalid() {
        assert!(expand_open_ended(Value::Ace, Value::Ace, Suitedness::Suited).is_empty());
        assert!(expand_open_ended(Value::Two, Value::Ace, Suitedness::OffSuit).is_empty());
    }

    #[test]
    fn test_open_ended_connector() {
        assert_eq!(
            vec!["KQo"],
            codes(expand_open_ended(Value::King, Value::Queen, Suitedness::OffSuit))
        );
    }

    #[test]
    fn test_dash_same_high() {
        assert_eq!(
            vec!["KQo", "KJo", "KTo"],
            codes(expand_dashed_range(
                Value::King,
                Value::Queen,
                Value::King,
                Value::Ten,
                Suitedness::OffSuit
            ))
        );
        assert_eq!(
            vec!["A2s", "A3s", "A4s", "A5s"],
            codes(expand_dashed_range(
                Value::Ace,
                Value::Two,
                Value::Ace,
                Value::Five,
                Suitedness::Suited
            ))
        );
    }

    #[test]
    fn test_dash_same_low() {
        assert_eq!(
            vec!["KTs", "QTs", "JTs"],
            codes(expand_dashed_range(
                Value::King,
                Value::Ten,
                Value::Jack,
                Value::Ten,
                Suitedness::Suited
            ))
        );
    }

    #[test]
    fn test_dash_diagonal_reverse() {
        assert_eq!(
            vec!["54s", "65s", "76s"],
            codes(expand_dashed_range(
                Value::Five,
                Value::Four,
                Value::Seven,
                Value::Six,
                Suitedness::Suited
            ))
        );
    }

    #[test]
    fn test_dash_diagonal_gappers() {
        assert_eq!(
            vec!["J9o", "T8o", "97o"],
            codes(expand_dashed_range(
                Value::Jack,
                Value::Nine,
                Value::Nine,
                Value::Seven,
                Suitedness::OffSuit
            ))
        );
    }

    #[test]
    fn test_dash_uneven_gap() {
        assert!(expand_dashed_range(
            Value::Ten,
            Value::Nine,
            Value::Five,
            Value::Three,
            Suitedness::Suited
        )
        .is_empty());
    }

    #[test]
    fn test_dash_low_above_high() {
        // KAs isn't a hand, so KAs-K2s isn't a range
        assert!(expand_dashed_range(
            Value::King,
            Value::Ace,
            Value::King,
            Value::Two,
            Suitedness::Suited
        )
        .is_empty());
        // Pair endpoints with suitedness
        assert!(expand_dashed_range(
            Value::King,
            Value::King,
            Value::King,
            Value::Two,
            Suitedness::Suited
        )
        .is_empty());
    }

    #[test]
    fn test_dash_results_well_formed() {
        let values = Value::values();
        for &hi1 in &values {
            for &lo1 in &values {
                for &hi2 in &values {
                    for &lo2 in &values {
                        for hand in
                            expand_dashed_range(hi1, lo1, hi2, lo2, Suitedness::OffSuit)
                        {
                            assert!(hand.high() > hand.low());
                            assert!(!hand.suited());
                        }
                    }
                }
            }
        }
    }
}
