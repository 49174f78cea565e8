//! [§ 3.6 background-position](https://www.w3.org/TR/css-backgrounds-3/#background-position)
//!
//! ```text
//! <bg-position> = [ left | center | right | top | bottom | <length-percentage> ]
//!   | [ left | center | right | <length-percentage> ]
//!     [ top | center | bottom | <length-percentage> ]
//!   | [ center | [ left | right ] <length-percentage>? ] &&
//!     [ center | [ top | bottom ] <length-percentage>? ]
//! ```

use serde::Serialize;

use super::keyword::{PositionKeyword, keyword};
use super::length::{LengthValue, parse_single_length};
use crate::parser::ComponentValue;

/// Which edge of the positioning area an offset is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Edge {
    /// Left or top.
    Start,
    /// Right or bottom.
    End,
}

/// An offset along one axis, measured from `edge`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PositionOffset {
    /// The edge the distance is measured from.
    pub edge: Edge,
    /// The distance from that edge.
    pub distance: LengthValue,
}

impl PositionOffset {
    /// `center`: 50% from the start edge.
    pub const CENTER: Self = Self::start(LengthValue::Percent(50.0));

    /// An offset from the left or top edge.
    #[must_use]
    pub const fn start(distance: LengthValue) -> Self {
        Self {
            edge: Edge::Start,
            distance,
        }
    }

    /// An offset from the right or bottom edge.
    #[must_use]
    pub const fn end(distance: LengthValue) -> Self {
        Self {
            edge: Edge::End,
            distance,
        }
    }
}

/// A background position: one offset per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    /// Horizontal offset.
    pub x: PositionOffset,
    /// Vertical offset.
    pub y: PositionOffset,
}

impl Point {
    /// `center center`, the initial value.
    pub const CENTER: Self = Self {
        x: PositionOffset::CENTER,
        y: PositionOffset::CENTER,
    };
}

#[derive(Debug, Clone, Copy)]
enum Entry {
    Keyword(PositionKeyword),
    Length(LengthValue),
}

fn entry(v: &ComponentValue) -> Option<Entry> {
    keyword(v)
        .map(Entry::Keyword)
        .or_else(|| parse_single_length(v).map(Entry::Length))
}

/// Returns true for an entry that may appear in a position run.
#[must_use]
pub fn is_position_entry(v: &ComponentValue) -> bool {
    entry(v).is_some()
}

/// The offset a keyword stands for, with an optional explicit distance.
fn keyword_offset(keyword: PositionKeyword, distance: Option<LengthValue>) -> PositionOffset {
    let distance = distance.unwrap_or(LengthValue::Percent(0.0));
    match keyword {
        PositionKeyword::Center => PositionOffset::CENTER,
        PositionKeyword::Left | PositionKeyword::Top => PositionOffset::start(distance),
        PositionKeyword::Right | PositionKeyword::Bottom => PositionOffset::end(distance),
    }
}

/// Parse one layer's position run (1 to 4 entries).
#[must_use]
pub fn parse_position(run: &[ComponentValue]) -> Option<Point> {
    let entries = run.iter().map(entry).collect::<Option<Vec<_>>>()?;

    match entries.as_slice() {
        // "If only one value is specified, the second value is assumed to be center."
        [Entry::Keyword(kw)] => Some(match kw {
            PositionKeyword::Top | PositionKeyword::Bottom => Point {
                x: PositionOffset::CENTER,
                y: keyword_offset(*kw, None),
            },
            _ => Point {
                x: keyword_offset(*kw, None),
                y: PositionOffset::CENTER,
            },
        }),
        [Entry::Length(length)] => Some(Point {
            x: PositionOffset::start(*length),
            y: PositionOffset::CENTER,
        }),
        [first, second] => parse_pair(*first, *second),
        [_, _, _] | [_, _, _, _] => parse_edge_offsets(&entries),
        _ => None,
    }
}

/// "If two values are given ... the first represents the horizontal position
/// and the second represents the vertical position." Two keywords may come in
/// either order.
fn parse_pair(first: Entry, second: Entry) -> Option<Point> {
    let horizontal = |e: Entry| match e {
        Entry::Keyword(kw) if kw.is_horizontal() => Some(keyword_offset(kw, None)),
        Entry::Length(length) => Some(PositionOffset::start(length)),
        Entry::Keyword(_) => None,
    };
    let vertical = |e: Entry| match e {
        Entry::Keyword(kw) if kw.is_vertical() => Some(keyword_offset(kw, None)),
        Entry::Length(length) => Some(PositionOffset::start(length)),
        Entry::Keyword(_) => None,
    };

    if let (Some(x), Some(y)) = (horizontal(first), vertical(second)) {
        return Some(Point { x, y });
    }

    match (first, second) {
        (Entry::Keyword(a), Entry::Keyword(b)) if a.is_vertical() && b.is_horizontal() => {
            Some(Point {
                x: keyword_offset(b, None),
                y: keyword_offset(a, None),
            })
        }
        _ => None,
    }
}

/// Three- and four-value syntax: each keyword other than `center` may be
/// followed by the offset from the edge it names.
fn parse_edge_offsets(entries: &[Entry]) -> Option<Point> {
    let mut groups: Vec<(PositionKeyword, Option<LengthValue>)> = Vec::with_capacity(2);

    let mut index = 0;
    while index < entries.len() {
        let Entry::Keyword(kw) = entries[index] else {
            return None;
        };
        index += 1;

        let mut offset = None;
        if kw != PositionKeyword::Center
            && let Some(Entry::Length(length)) = entries.get(index)
        {
            offset = Some(*length);
            index += 1;
        }
        groups.push((kw, offset));
    }

    let [(a, a_offset), (b, b_offset)] = groups.as_slice() else {
        return None;
    };

    let (x, y) = if a.is_horizontal() && b.is_vertical() {
        ((*a, *a_offset), (*b, *b_offset))
    } else if a.is_vertical() && b.is_horizontal() {
        ((*b, *b_offset), (*a, *a_offset))
    } else {
        return None;
    };

    Some(Point {
        x: keyword_offset(x.0, x.1),
        y: keyword_offset(y.0, y.1),
    })
}
