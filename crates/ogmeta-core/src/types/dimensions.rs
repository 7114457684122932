//! Image dimension pairs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A width/height pair in pixels.
///
/// The host stores dimensions as `"W|H"` strings (`"500|500"`); `FromStr`
/// accepts that form as well as `"WxH"`. Deserialization takes either string
/// form or a `{ width, height }` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DimensionsRepr")]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Create a dimension pair.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Component-wise minimum of two bounds.
    pub fn min(self, other: Self) -> Self {
        Self {
            width: self.width.min(other.width),
            height: self.height.min(other.height),
        }
    }

    /// Whether either side is smaller than the corresponding side of `bound`.
    pub fn is_below(&self, bound: &Self) -> bool {
        self.width < bound.width || self.height < bound.height
    }

    /// Scale down to fit inside `max`, keeping the aspect ratio.
    ///
    /// Sizes already inside the bound are returned unchanged.
    pub fn fit_within(self, max: Self) -> Self {
        if self.width <= max.width && self.height <= max.height {
            return self;
        }
        let (w, h) = (u64::from(self.width), u64::from(self.height));
        let (mw, mh) = (u64::from(max.width), u64::from(max.height));
        if w * mh > h * mw {
            Self::new(max.width, (h * mw / w.max(1)) as u32)
        } else {
            Self::new((w * mh / h.max(1)) as u32, max.height)
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.width, self.height)
    }
}

impl FromStr for Dimensions {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once('|')
            .or_else(|| s.split_once('x'))
            .ok_or_else(|| format!("invalid dimensions '{s}', expected W|H"))?;
        let width = w
            .trim()
            .parse()
            .map_err(|_| format!("invalid width in '{s}'"))?;
        let height = h
            .trim()
            .parse()
            .map_err(|_| format!("invalid height in '{s}'"))?;
        Ok(Self { width, height })
    }
}

/// Accepts the string and table forms of [`Dimensions`].
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DimensionsRepr {
    /// `"W|H"` or `"WxH"`.
    Text(String),
    /// `{ width, height }`.
    Table {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
}

impl TryFrom<DimensionsRepr> for Dimensions {
    type Error = String;

    fn try_from(raw: DimensionsRepr) -> Result<Self, Self::Error> {
        match raw {
            DimensionsRepr::Text(text) => text.parse(),
            DimensionsRepr::Table { width, height } => Ok(Self::new(width, height)),
        }
    }
}
