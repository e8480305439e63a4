//! Classification of the 13x13 hand matrix against a parsed range.
//!
//! This is what a renderer paints: every cell is either unselected, in the
//! base range, or emphasized.

use super::{ParsedRange, PreflopHand, RangeParser};
use crate::core::NUM_VALUES;

fn default_base_color() -> String {
    String::from("rgba(0,0,0,0.16)")
}

fn default_emphasis_color() -> String {
    String::from("rgba(0,0,0,0.34)")
}

fn default_emphasis_text_color() -> String {
    String::from("var(--background)")
}

/// How a single matrix cell relates to a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Highlight {
    /// Not in the range.
    #[default]
    None,
    /// In the range.
    Base,
    /// In an emphasis block of the range.
    Emphasized,
}

/// Colors used when turning a `Highlight` into a `CellStyle`.
///
/// Colors are opaque strings handed to the renderer, usually CSS colors.
///
/// # Example JSON
///
/// ```json
/// {
///   "base_color": "rgba(0,0,0,0.16)",
///   "emphasis_color": "rgba(0,0,0,0.34)"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighlightStyle {
    /// Background of cells in the base range.
    #[cfg_attr(feature = "serde", serde(default = "default_base_color"))]
    pub base_color: String,

    /// Background of emphasized cells.
    #[cfg_attr(feature = "serde", serde(default = "default_emphasis_color"))]
    pub emphasis_color: String,

    /// Text color of emphasized cells, chosen to contrast with
    /// `emphasis_color`.
    #[cfg_attr(feature = "serde", serde(default = "default_emphasis_text_color"))]
    pub emphasis_text_color: String,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            base_color: default_base_color(),
            emphasis_color: default_emphasis_color(),
            emphasis_text_color: default_emphasis_text_color(),
        }
    }
}

/// Style for one cell. Unset fields mean "leave the renderer's default".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellStyle {
    pub background_color: Option<String>,
    pub color: Option<String>,
    pub bold: bool,
}

/// Answers "how should this cell look" for one parsed range.
///
/// ```
/// use rs_poker_range::holdem::{Highlight, RangeHighlighter};
///
/// let highlighter = RangeHighlighter::from_spec("77+,**AKs**");
/// assert_eq!(Highlight::Base, highlighter.classify_code("77"));
/// assert_eq!(Highlight::Emphasized, highlighter.classify_code("AKs"));
/// assert_eq!(Highlight::None, highlighter.classify_code("AKo"));
///
/// let style = highlighter.style_code("AKs");
/// assert_eq!(Some("rgba(0,0,0,0.34)"), style.background_color.as_deref());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RangeHighlighter {
    range: ParsedRange,
    style: HighlightStyle,
}

impl RangeHighlighter {
    /// Highlight a parsed range with the default colors.
    pub fn new(range: ParsedRange) -> Self {
        Self::with_style(range, HighlightStyle::default())
    }

    pub fn with_style(range: ParsedRange, style: HighlightStyle) -> Self {
        Self { range, style }
    }

    /// Parse `spec` with the default parser and highlight it.
    pub fn from_spec(spec: &str) -> Self {
        Self::new(RangeParser::default().parse(spec))
    }

    pub fn range(&self) -> &ParsedRange {
        &self.range
    }

    pub fn style(&self) -> &HighlightStyle {
        &self.style
    }

    /// Classify a hand. Emphasis wins over base.
    pub fn classify_hand(&self, hand: PreflopHand) -> Highlight {
        if self.range.emph.contains(hand) {
            Highlight::Emphasized
        } else if self.range.base.contains(hand) {
            Highlight::Base
        } else {
            Highlight::None
        }
    }

    /// Classify the matrix cell at `(row, col)`.
    ///
    /// Rows and columns are value indexes, Ace first. Cells off the matrix
    /// are `Highlight::None`.
    pub fn classify(&self, row: usize, col: usize) -> Highlight {
        PreflopHand::from_matrix(row, col)
            .map(|hand| self.classify_hand(hand))
            .unwrap_or_default()
    }

    /// Classify a cell by its code. Anything that isn't a canonical
    /// code is `Highlight::None`.
    pub fn classify_code(&self, code: &str) -> Highlight {
        PreflopHand::from_cell_code(code)
            .map(|hand| self.classify_hand(hand))
            .unwrap_or_default()
    }

    /// The whole matrix, indexed `[row][col]`.
    pub fn grid(&self) -> [[Highlight; NUM_VALUES]; NUM_VALUES] {
        std::array::from_fn(|row| std::array::from_fn(|col| self.classify(row, col)))
    }

    /// Turn a classification into a cell style using this highlighter's colors.
    pub fn cell_style(&self, highlight: Highlight) -> CellStyle {
        match highlight {
            Highlight::None => CellStyle::default(),
            Highlight::Base => CellStyle {
                background_color: Some(self.style.base_color.clone()),
                color: None,
                bold: true,
            },
            Highlight::Emphasized => CellStyle {
                background_color: Some(self.style.emphasis_color.clone()),
                color: Some(self.style.emphasis_text_color.clone()),
                bold: true,
            },
        }
    }

    /// Style of the cell with this code.
    pub fn style_code(&self, code: &str) -> CellStyle {
        self.cell_style(self.classify_code(code))
    }

    /// Style of the cell at `(row, col)`.
    pub fn style_at(&self, row: usize, col: usize) -> CellStyle {
        self.cell_style(self.classify(row, col))
    }
}
