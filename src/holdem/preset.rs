//! Named range presets.
//!
//! Scenario packs ship a list of presets (`"BTN open"`, `"SB 3-bet"`, ...)
//! and refer to ranges either by preset id or by writing the range inline.

use std::collections::HashMap;

use super::{ParsedRange, RangeParser};
use crate::core::RangeError;

/// A labelled range string.
///
/// ```
/// use rs_poker_range::holdem::RangePreset;
///
/// let preset = RangePreset::new("co_open", "CO open", "22+,A2s+,KTs+,QTs+,JTs,ATo+,KQo");
/// assert_eq!("co_open", preset.id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangePreset {
    pub id: String,
    pub label: String,
    /// Range notation, e.g. `"22+,A5s+,KTs+,QTs+,JTs,ATo+,KQo"`.
    pub range: String,
}

impl RangePreset {
    pub fn new(id: impl Into<String>, label: impl Into<String>, range: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            range: range.into(),
        }
    }
}

/// A reference to a range: either a preset id, an inline range, or both.
/// The inline range wins when both are set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeRef {
    #[cfg_attr(feature = "serde", serde(default))]
    pub preset: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub range: Option<String>,
}

impl RangeRef {
    pub fn preset(id: impl Into<String>) -> Self {
        Self {
            preset: Some(id.into()),
            range: None,
        }
    }

    pub fn inline(range: impl Into<String>) -> Self {
        Self {
            preset: None,
            range: Some(range.into()),
        }
    }
}

/// A collection of presets looked up by id.
///
/// ```
/// use rs_poker_range::holdem::{RangeBook, RangeParser, RangePreset, RangeRef};
///
/// let book = RangeBook::new(vec![RangePreset::new("tight", "Tight", "QQ+,AKs")]);
/// let parsed = book.parse(&RangeRef::preset("tight"), &RangeParser::default()).unwrap();
/// assert_eq!(4, parsed.base.len());
///
/// assert!(book.parse(&RangeRef::preset("loose"), &RangeParser::default()).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RangeBook {
    presets: HashMap<String, RangePreset>,
}

impl RangeBook {
    /// Build a book from presets. A later preset replaces an earlier one
    /// with the same id.
    pub fn new(presets: impl IntoIterator<Item = RangePreset>) -> Self {
        Self {
            presets: presets.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&RangePreset> {
        self.presets.get(id)
    }

    pub fn insert(&mut self, preset: RangePreset) -> Option<RangePreset> {
        self.presets.insert(preset.id.clone(), preset)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Iterate over all presets in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &RangePreset> {
        self.presets.values()
    }

    /// The range notation a reference points at.
    ///
    /// # Errors
    ///
    /// `RangeError::UnknownPreset` if only a preset id is given and the book
    /// doesn't have it, `RangeError::EmptyRangeRef` if the reference is empty.
    pub fn resolve<'a>(&'a self, range_ref: &'a RangeRef) -> Result<&'a str, RangeError> {
        if let Some(range) = &range_ref.range {
            return Ok(range.as_str());
        }
        match &range_ref.preset {
            Some(id) => self
                .get(id)
                .map(|preset| preset.range.as_str())
                .ok_or_else(|| RangeError::UnknownPreset(id.clone())),
            None => Err(RangeError::EmptyRangeRef),
        }
    }

    /// Resolve a reference and parse it.
    ///
    /// Resolution errors are returned; token errors follow the parser's
    /// configuration (see `RangeParser::try_parse`).
    pub fn parse(
        &self,
        range_ref: &RangeRef,
        parser: &RangeParser,
    ) -> Result<ParsedRange, RangeError> {
        let spec = self.resolve(range_ref)?;
        parser.try_parse(spec)
    }
}

impl FromIterator<RangePreset> for RangeBook {
    fn from_iter<T: IntoIterator<Item = RangePreset>>(iter: T) -> Self {
        Self::new(iter)
    }
}
