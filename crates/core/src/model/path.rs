//! Vector drawing operations.
//!
//! Every operation shares one wire layout, the 4-element array
//! `[Type, Data, StrokeWidth, Color]`. The type tag only changes which of
//! those fields carry meaning:
//!
//! | Type                           | Meaningful fields |
//! |--------------------------------|-------------------|
//! | `EoFill`, `Fill`, `Stroke`     | `Data`            |
//! | `SetStrokeColor`, `SetFillColor` | `Color`         |
//! | `SetStrokeWidth`               | `StrokeWidth`     |
//!
//! Fields outside that table are still present on the wire and decoded, but
//! carry no information. [`Path::op`] gives a view with only the meaningful
//! fields for each tag.

use std::fmt;

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Discriminant of a drawing operation.
///
/// Tags this protocol version does not define decode to `Unknown` with the
/// raw value kept, so streams from newer producers still read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PathType {
    #[default]
    EoFill,
    Stroke,
    Fill,
    SetStrokeColor,
    SetStrokeWidth,
    SetFillColor,
    Unknown(u8),
}

impl PathType {
    /// Wire value of this tag.
    pub const fn code(self) -> u8 {
        match self {
            PathType::EoFill => 10,
            PathType::Stroke => 11,
            PathType::Fill => 12,
            PathType::SetStrokeColor => 13,
            PathType::SetStrokeWidth => 14,
            PathType::SetFillColor => 15,
            PathType::Unknown(code) => code,
        }
    }

    pub const fn is_known(self) -> bool {
        !matches!(self, PathType::Unknown(_))
    }
}

impl From<u8> for PathType {
    fn from(code: u8) -> Self {
        match code {
            10 => PathType::EoFill,
            11 => PathType::Stroke,
            12 => PathType::Fill,
            13 => PathType::SetStrokeColor,
            14 => PathType::SetStrokeWidth,
            15 => PathType::SetFillColor,
            other => PathType::Unknown(other),
        }
    }
}

impl From<PathType> for u8 {
    fn from(kind: PathType) -> Self {
        kind.code()
    }
}

impl fmt::Display for PathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathType::EoFill => f.write_str("eofill"),
            PathType::Stroke => f.write_str("stroke"),
            PathType::Fill => f.write_str("fill"),
            PathType::SetStrokeColor => f.write_str("set-stroke-color"),
            PathType::SetStrokeWidth => f.write_str("set-stroke-width"),
            PathType::SetFillColor => f.write_str("set-fill-color"),
            PathType::Unknown(code) => write!(f, "unknown({code})"),
        }
    }
}

impl Serialize for PathType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for PathType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u8::deserialize(deserializer).map(PathType::from)
    }
}

/// RGB color, `[R, G, B]` on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// One drawing operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Path {
    #[serde(rename = "Type")]
    pub kind: PathType,
    /// Subpaths, each a flat list of coordinates.
    pub data: Vec<Vec<f64>>,
    pub stroke_width: f64,
    pub color: Color,
}

/// Borrowed view of a [`Path`] holding only the fields its tag gives
/// meaning to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp<'a> {
    EoFill { subpaths: &'a [Vec<f64>] },
    Stroke { subpaths: &'a [Vec<f64>] },
    Fill { subpaths: &'a [Vec<f64>] },
    SetStrokeColor { color: Color },
    SetStrokeWidth { width: f64 },
    SetFillColor { color: Color },
    Unknown { code: u8 },
}

impl Path {
    pub fn op(&self) -> PathOp<'_> {
        match self.kind {
            PathType::EoFill => PathOp::EoFill {
                subpaths: &self.data,
            },
            PathType::Stroke => PathOp::Stroke {
                subpaths: &self.data,
            },
            PathType::Fill => PathOp::Fill {
                subpaths: &self.data,
            },
            PathType::SetStrokeColor => PathOp::SetStrokeColor { color: self.color },
            PathType::SetStrokeWidth => PathOp::SetStrokeWidth {
                width: self.stroke_width,
            },
            PathType::SetFillColor => PathOp::SetFillColor { color: self.color },
            PathType::Unknown(code) => PathOp::Unknown { code },
        }
    }
}

// The wire shape is fixed, so decoding never branches on the tag. Only the
// positional form is accepted.
impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(4, PathVisitor)
    }
}

struct PathVisitor;

impl<'de> Visitor<'de> for PathVisitor {
    type Value = Path;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a [Type, Data, StrokeWidth, Color] path array")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Path, A::Error> {
        let kind = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let data = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        let stroke_width = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(2, &self))?;
        let color = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(3, &self))?;
        let mut len = 4;
        while seq.next_element::<de::IgnoredAny>()?.is_some() {
            len += 1;
        }
        if len > 4 {
            return Err(de::Error::invalid_length(len, &self));
        }
        Ok(Path {
            kind,
            data,
            stroke_width,
            color,
        })
    }
}
