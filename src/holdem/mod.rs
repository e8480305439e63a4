/// Module for the 169 pre-flop hand classes and the hand matrix layout.
mod preflop_hand;
/// Export `PreflopHand`
pub use self::preflop_hand::{PreflopHand, Suitedness, NUM_PREFLOP_HANDS};

/// Module for `HandRange`, a set of pre-flop hands.
mod hand_range;
/// Export `HandRange`
pub use self::hand_range::{HandRange, HandRangeIter};

/// Expansion of `+` and dashed shapes into hands.
mod expand;
pub use self::expand::{expand_dashed_range, expand_open_ended, expand_pair_plus, expand_pair_range};

/// Module with all the range expression parsing code.
mod range_parser;
/// Export `RangeParser`
pub use self::range_parser::{
    parse_range_expression, ParsedRange, RangeParser, RangeParserConfig, RangeToken,
    TokenDiagnostic,
};

/// Module for classifying and styling matrix cells.
mod highlight;
pub use self::highlight::{CellStyle, Highlight, HighlightStyle, RangeHighlighter};

/// Module for named range presets.
mod preset;
pub use self::preset::{RangeBook, RangePreset, RangeRef};
