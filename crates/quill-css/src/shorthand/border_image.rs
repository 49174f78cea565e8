//! [§ 6.6 Border Image Shorthand: the border-image property](https://www.w3.org/TR/css-backgrounds-3/#border-image)
//!
//! ```text
//! border-image = <'border-image-source'>
//!             || <'border-image-slice'> [ / <'border-image-width'>
//!                | / <'border-image-width'>? / <'border-image-outset'> ]?
//!             || <'border-image-repeat'>
//! ```

use serde::Serialize;

use super::serialize::{Part, Segment, serialize};
use super::{Shorthand, ShorthandId};
use crate::converter::{
    Mismatch, match_any, optional, ordered_group, starts_with_delimiter, value_of, verify,
};
use crate::error::Rejection;
use crate::longhand::{Decomposition, LonghandId, LonghandStore};
use crate::parser::{ComponentValue, ValueList};
use crate::values::border_image::{
    BorderImageRepeat, BorderImageSideWidth, BorderImageSlice, LengthOrNumber,
    NumberOrPercentage, Sides, parse_border_image_outset, parse_border_image_repeat,
    parse_border_image_slice, parse_border_image_width,
};
use crate::values::image::{ImageSource, parse_image};
use crate::values::keyword::ImageRepeat;

/// The `border-image` shorthand.
#[derive(Debug, Clone, Copy)]
pub struct BorderImage;

/// "`/` introduces at least one of width and outset."
fn width_or_outset(group: &(Option<ValueList>, Option<ValueList>)) -> bool {
    group.0.is_some() || group.1.is_some()
}

/// Explain where the grammar got stuck.
fn rejection(input: &[ComponentValue], mismatch: Mismatch) -> Rejection {
    let property = ShorthandId::BorderImage.property();
    let Some(token) = input.get(mismatch.position) else {
        return Rejection::SyntaxRejected {
            property,
            token: ValueList::from(input).to_string(),
        };
    };

    // A second `/` belongs to the outset, whichever side the scan stopped on.
    if token.is_delimiter() {
        let second = input[..mismatch.position].iter().any(ComponentValue::is_delimiter)
            || input
                .get(mismatch.position + 1)
                .is_some_and(ComponentValue::is_delimiter);
        return Rejection::DelimiterMismatch {
            property,
            expected: if second {
                LonghandId::BorderImageOutset
            } else {
                LonghandId::BorderImageWidth
            },
        };
    }

    let rest = &input[mismatch.position..];
    match BorderImage::LONGHANDS
        .iter()
        .find(|id| id.match_prefix(rest).is_some())
    {
        Some(&longhand) => Rejection::CategoryConflict {
            property,
            longhand,
            token: token.to_string(),
        },
        None => Rejection::SyntaxRejected {
            property,
            token: token.to_string(),
        },
    }
}

impl Shorthand for BorderImage {
    const ID: ShorthandId = ShorthandId::BorderImage;

    const LONGHANDS: &'static [LonghandId] = &[
        LonghandId::BorderImageSource,
        LonghandId::BorderImageSlice,
        LonghandId::BorderImageWidth,
        LonghandId::BorderImageOutset,
        LonghandId::BorderImageRepeat,
    ];

    fn decompose(value: &ValueList) -> Result<Decomposition, Rejection> {
        let input = value.as_slice();
        if input.is_empty() {
            return Err(Rejection::EmptyLayer {
                property: Self::ID.property(),
                layer: 0,
            });
        }

        let grammar = match_any((
            optional(value_of(LonghandId::BorderImageSource)),
            optional(ordered_group((
                value_of(LonghandId::BorderImageSlice),
                optional(starts_with_delimiter(verify(
                    ordered_group((
                        optional(value_of(LonghandId::BorderImageWidth)),
                        optional(starts_with_delimiter(value_of(
                            LonghandId::BorderImageOutset,
                        ))),
                    )),
                    width_or_outset,
                ))),
            ))),
            optional(value_of(LonghandId::BorderImageRepeat)),
        ));

        let (source, slice_group, repeat) = grammar
            .try_convert(input)
            .map_err(|mismatch| rejection(input, mismatch))?;

        let (slice, width, outset) = match slice_group {
            Some((slice, Some((width, outset)))) => (Some(slice), width, outset),
            Some((slice, None)) => (Some(slice), None, None),
            None => (None, None, None),
        };

        let mut decomposition = Decomposition::new();
        for (id, value) in Self::LONGHANDS
            .iter()
            .copied()
            .zip([source, slice, width, outset, repeat])
        {
            match value {
                Some(value) => decomposition.set(id, value),
                None => decomposition.reset(id),
            }
        }
        Ok(decomposition)
    }

    fn serialize(store: &LonghandStore) -> String {
        let part = |id: LonghandId| {
            let longhand = store.get(id);
            Part::new(longhand.value.to_string(), longhand.explicitly_set)
        };

        let width = part(LonghandId::BorderImageWidth);
        let outset = part(LonghandId::BorderImageOutset);

        // The slash group cannot be read back without a slice in front of it.
        let mut slice = part(LonghandId::BorderImageSlice);
        slice.explicitly_set |= width.explicitly_set || outset.explicitly_set;

        serialize(&[
            Segment::Leading(part(LonghandId::BorderImageSource)),
            Segment::Plain(slice),
            Segment::SlashGroup(vec![width, outset]),
            Segment::Plain(part(LonghandId::BorderImageRepeat)),
        ])
    }
}

/// Typed read access to the border-image longhands.
#[derive(Debug, Clone, Copy)]
pub struct BorderImageView<'a> {
    store: &'a LonghandStore,
}

impl<'a> BorderImageView<'a> {
    /// View the border-image longhands of `store`.
    #[must_use]
    pub const fn new(store: &'a LonghandStore) -> Self {
        Self { store }
    }

    fn run(&self, id: LonghandId) -> &'a [ComponentValue] {
        self.store.get(id).value.as_slice()
    }

    /// The image, `none` by default.
    #[must_use]
    pub fn source(&self) -> ImageSource {
        match self.run(LonghandId::BorderImageSource) {
            [v] => parse_image(v).unwrap_or(ImageSource::None),
            _ => ImageSource::None,
        }
    }

    /// The slice offsets, `100%` on every side by default.
    #[must_use]
    pub fn slice(&self) -> BorderImageSlice {
        parse_border_image_slice(self.run(LonghandId::BorderImageSlice)).unwrap_or(
            BorderImageSlice {
                offsets: Sides::all(NumberOrPercentage::Percentage(100.0)),
                fill: false,
            },
        )
    }

    /// The widths, `1` on every side by default.
    #[must_use]
    pub fn width(&self) -> Sides<BorderImageSideWidth> {
        parse_border_image_width(self.run(LonghandId::BorderImageWidth))
            .unwrap_or(Sides::all(BorderImageSideWidth::Number(1.0)))
    }

    /// The outsets, `0` on every side by default.
    #[must_use]
    pub fn outset(&self) -> Sides<LengthOrNumber> {
        parse_border_image_outset(self.run(LonghandId::BorderImageOutset))
            .unwrap_or(Sides::all(LengthOrNumber::Number(0.0)))
    }

    /// The repeat style, `stretch` by default.
    #[must_use]
    pub fn repeat(&self) -> BorderImageRepeat {
        parse_border_image_repeat(self.run(LonghandId::BorderImageRepeat)).unwrap_or(
            BorderImageRepeat {
                horizontal: ImageRepeat::Stretch,
                vertical: ImageRepeat::Stretch,
            },
        )
    }

    /// Every accessor at once.
    #[must_use]
    pub fn snapshot(&self) -> BorderImageSnapshot {
        BorderImageSnapshot {
            source: self.source(),
            slice: self.slice(),
            width: self.width(),
            outset: self.outset(),
            repeat: self.repeat(),
        }
    }
}

/// Owned, serializable copy of a [`BorderImageView`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BorderImageSnapshot {
    /// See [`BorderImageView::source`].
    pub source: ImageSource,
    /// See [`BorderImageView::slice`].
    pub slice: BorderImageSlice,
    /// See [`BorderImageView::width`].
    pub width: Sides<BorderImageSideWidth>,
    /// See [`BorderImageView::outset`].
    pub outset: Sides<LengthOrNumber>,
    /// See [`BorderImageView::repeat`].
    pub repeat: BorderImageRepeat,
}
