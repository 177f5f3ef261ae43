// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Anchor positions: explicit coordinates or bounding-box keywords.

use std::fmt;
use std::str::FromStr;

use crate::model::Bounds;

/// One of the nine reference points of a glyph's bounding box.
///
/// Rows are top (`y_max`), mid and bottom (`y_min`); columns are left
/// (`x_min`), center and right (`x_max`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionKeyword {
    TopLeft,
    TopCenter,
    TopRight,
    MidLeft,
    MidCenter,
    MidRight,
    BotLeft,
    BotCenter,
    BotRight,
}

impl PositionKeyword {
    pub const ALL: [PositionKeyword; 9] = [
        PositionKeyword::TopLeft,
        PositionKeyword::TopCenter,
        PositionKeyword::TopRight,
        PositionKeyword::MidLeft,
        PositionKeyword::MidCenter,
        PositionKeyword::MidRight,
        PositionKeyword::BotLeft,
        PositionKeyword::BotCenter,
        PositionKeyword::BotRight,
    ];

    /// The keyword as written in anchor files
    pub fn as_str(self) -> &'static str {
        match self {
            PositionKeyword::TopLeft => "TOP_LEFT",
            PositionKeyword::TopCenter => "TOP_CENTER",
            PositionKeyword::TopRight => "TOP_RIGHT",
            PositionKeyword::MidLeft => "MID_LEFT",
            PositionKeyword::MidCenter => "MID_CENTER",
            PositionKeyword::MidRight => "MID_RIGHT",
            PositionKeyword::BotLeft => "BOT_LEFT",
            PositionKeyword::BotCenter => "BOT_CENTER",
            PositionKeyword::BotRight => "BOT_RIGHT",
        }
    }
}

impl fmt::Display for PositionKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a column is not one of the nine keywords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKeyword;

impl FromStr for PositionKeyword {
    type Err = UnknownKeyword;

    /// Exact, case-sensitive match
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|keyword| keyword.as_str() == s)
            .ok_or(UnknownKeyword)
    }
}

/// Where an anchor goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionSpec {
    /// Absolute font-unit coordinates
    Explicit { x: i32, y: i32 },
    /// Resolved against each glyph's bounding box
    Keyword(PositionKeyword),
}

impl PositionSpec {
    pub const ORIGIN: PositionSpec = PositionSpec::Explicit { x: 0, y: 0 };

    pub fn is_keyword(&self) -> bool {
        matches!(self, PositionSpec::Keyword(_))
    }

    /// Resolve to coordinates.
    ///
    /// Keywords need reference points; without them (glyph has no
    /// outline) only explicit positions resolve.
    pub fn resolve(&self, points: Option<&ReferencePoints>) -> Option<(i32, i32)> {
        match *self {
            PositionSpec::Explicit { x, y } => Some((x, y)),
            PositionSpec::Keyword(keyword) => points.map(|p| p.get(keyword)),
        }
    }
}

/// The nine reference points of one glyph's bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferencePoints {
    left: i32,
    center: i32,
    right: i32,
    top: i32,
    mid: i32,
    bottom: i32,
}

impl ReferencePoints {
    /// Center and mid use integer division, truncating toward zero.
    pub fn from_bounds(bounds: Bounds) -> Self {
        let Bounds {
            x_min,
            y_min,
            x_max,
            y_max,
        } = bounds;
        // i64 so that extreme bounds cannot overflow the sum
        let center = ((x_max as i64 + x_min as i64) / 2) as i32;
        let mid = ((y_max as i64 + y_min as i64) / 2) as i32;
        Self {
            left: x_min,
            center,
            right: x_max,
            top: y_max,
            mid,
            bottom: y_min,
        }
    }

    pub fn get(&self, keyword: PositionKeyword) -> (i32, i32) {
        use PositionKeyword::*;
        match keyword {
            TopLeft => (self.left, self.top),
            TopCenter => (self.center, self.top),
            TopRight => (self.right, self.top),
            MidLeft => (self.left, self.mid),
            MidCenter => (self.center, self.mid),
            MidRight => (self.right, self.mid),
            BotLeft => (self.left, self.bottom),
            BotCenter => (self.center, self.bottom),
            BotRight => (self.right, self.bottom),
        }
    }
}
