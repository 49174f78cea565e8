//! Longhand sub-properties and the store that holds their values.
//!
//! [§ 7.2 Shorthand properties](https://www.w3.org/TR/css-cascade-4/#shorthand)
//!
//! "Some properties are shorthand properties, meaning that they allow authors
//! to specify the values of several properties with a single property. A
//! shorthand property sets all of its longhand sub-properties, exactly as if
//! expanded in place."

use serde::Serialize;
use strum::EnumCount;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumString, IntoStaticStr};

use crate::parser::{ComponentValue, ValueList};
use crate::values::background::{parse_background_repeat, parse_background_size};
use crate::values::border_image::{
    parse_border_image_outset, parse_border_image_repeat, parse_border_image_slice,
    parse_border_image_width,
};
use crate::values::color::parse_single_color;
use crate::values::image::parse_image;
use crate::values::keyword::{BackgroundAttachment, BoxModel, keyword};
use crate::values::position::parse_position;

/// Every longhand a supported shorthand expands into.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
    EnumCountMacro,
    Serialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum LonghandId {
    /// [§ 3.3 background-image](https://www.w3.org/TR/css-backgrounds-3/#background-image)
    BackgroundImage,
    /// [§ 3.6 background-position](https://www.w3.org/TR/css-backgrounds-3/#background-position)
    BackgroundPosition,
    /// [§ 3.9 background-size](https://www.w3.org/TR/css-backgrounds-3/#background-size)
    BackgroundSize,
    /// [§ 3.4 background-repeat](https://www.w3.org/TR/css-backgrounds-3/#background-repeat)
    BackgroundRepeat,
    /// [§ 3.5 background-attachment](https://www.w3.org/TR/css-backgrounds-3/#background-attachment)
    BackgroundAttachment,
    /// [§ 3.7 background-origin](https://www.w3.org/TR/css-backgrounds-3/#background-origin)
    BackgroundOrigin,
    /// [§ 3.8 background-clip](https://www.w3.org/TR/css-backgrounds-3/#background-clip)
    BackgroundClip,
    /// [§ 3.2 background-color](https://www.w3.org/TR/css-backgrounds-3/#background-color)
    BackgroundColor,
    /// [§ 6.1 border-image-source](https://www.w3.org/TR/css-backgrounds-3/#border-image-source)
    BorderImageSource,
    /// [§ 6.2 border-image-slice](https://www.w3.org/TR/css-backgrounds-3/#border-image-slice)
    BorderImageSlice,
    /// [§ 6.3 border-image-width](https://www.w3.org/TR/css-backgrounds-3/#border-image-width)
    BorderImageWidth,
    /// [§ 6.4 border-image-outset](https://www.w3.org/TR/css-backgrounds-3/#border-image-outset)
    BorderImageOutset,
    /// [§ 6.5 border-image-repeat](https://www.w3.org/TR/css-backgrounds-3/#border-image-repeat)
    BorderImageRepeat,
}

impl LonghandId {
    /// Every longhand, in store order.
    pub const ALL: [Self; <Self as EnumCount>::COUNT] = [
        Self::BackgroundImage,
        Self::BackgroundPosition,
        Self::BackgroundSize,
        Self::BackgroundRepeat,
        Self::BackgroundAttachment,
        Self::BackgroundOrigin,
        Self::BackgroundClip,
        Self::BackgroundColor,
        Self::BorderImageSource,
        Self::BorderImageSlice,
        Self::BorderImageWidth,
        Self::BorderImageOutset,
        Self::BorderImageRepeat,
    ];

    /// The property name, e.g. `background-image`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// "Initial value" from the property definition table.
    #[must_use]
    pub fn initial_value(self) -> ValueList {
        let value = match self {
            Self::BackgroundImage | Self::BorderImageSource => ComponentValue::ident("none"),
            Self::BackgroundPosition => ComponentValue::ident("center"),
            Self::BackgroundSize => ComponentValue::ident("auto"),
            Self::BackgroundRepeat => ComponentValue::ident("repeat"),
            Self::BackgroundAttachment => ComponentValue::ident("scroll"),
            Self::BackgroundOrigin | Self::BackgroundClip => ComponentValue::ident("border-box"),
            Self::BackgroundColor => ComponentValue::ident("transparent"),
            Self::BorderImageSlice => ComponentValue::Percentage(100.0),
            Self::BorderImageWidth => ComponentValue::Number(1.0),
            Self::BorderImageOutset => ComponentValue::Number(0.0),
            Self::BorderImageRepeat => ComponentValue::ident("stretch"),
        };
        ValueList::singleton(value)
    }

    /// Layered longhands hold one comma-separated run per background layer.
    #[must_use]
    pub const fn is_layered(self) -> bool {
        matches!(
            self,
            Self::BackgroundImage
                | Self::BackgroundPosition
                | Self::BackgroundSize
                | Self::BackgroundRepeat
                | Self::BackgroundAttachment
                | Self::BackgroundOrigin
                | Self::BackgroundClip
        )
    }

    /// The most entries one run of this longhand can hold.
    const fn max_run(self) -> usize {
        match self {
            Self::BackgroundImage
            | Self::BackgroundAttachment
            | Self::BackgroundOrigin
            | Self::BackgroundClip
            | Self::BackgroundColor
            | Self::BorderImageSource => 1,
            Self::BackgroundSize | Self::BackgroundRepeat | Self::BorderImageRepeat => 2,
            Self::BackgroundPosition | Self::BorderImageWidth | Self::BorderImageOutset => 4,
            // four offsets and `fill`
            Self::BorderImageSlice => 5,
        }
    }

    /// Check one run (a single layer for layered longhands) against this
    /// longhand's own grammar.
    #[must_use]
    pub fn accepts_run(self, run: &[ComponentValue]) -> bool {
        let single = |parse: fn(&ComponentValue) -> bool| matches!(run, [v] if parse(v));
        match self {
            Self::BackgroundImage | Self::BorderImageSource => {
                single(|v| parse_image(v).is_some())
            }
            Self::BackgroundPosition => parse_position(run).is_some(),
            Self::BackgroundSize => parse_background_size(run).is_some(),
            Self::BackgroundRepeat => parse_background_repeat(run).is_some(),
            Self::BackgroundAttachment => single(|v| keyword::<BackgroundAttachment>(v).is_some()),
            Self::BackgroundOrigin | Self::BackgroundClip => {
                single(|v| keyword::<BoxModel>(v).is_some())
            }
            Self::BackgroundColor => single(|v| parse_single_color(v).is_some()),
            Self::BorderImageSlice => parse_border_image_slice(run).is_some(),
            Self::BorderImageWidth => parse_border_image_width(run).is_some(),
            Self::BorderImageOutset => parse_border_image_outset(run).is_some(),
            Self::BorderImageRepeat => parse_border_image_repeat(run).is_some(),
        }
    }

    /// Check a complete value. Layered longhands take one non-empty run per
    /// comma-separated layer; everything else takes exactly one run.
    #[must_use]
    pub fn accepts(self, value: &ValueList) -> bool {
        if self.is_layered() {
            value.layers().all(|run| self.accepts_run(run))
        } else {
            self.accepts_run(value.as_slice())
        }
    }

    /// Length of the longest prefix of `input` that is a valid run, if any.
    ///
    /// Runs never span a `,` or a `/`.
    #[must_use]
    pub fn match_prefix(self, input: &[ComponentValue]) -> Option<usize> {
        let available = input
            .iter()
            .take(self.max_run())
            .take_while(|v| !v.is_separator() && !v.is_delimiter())
            .count();
        (1..=available)
            .rev()
            .find(|&length| self.accepts_run(&input[..length]))
    }
}

/// One longhand's current value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Longhand {
    /// Which longhand this is.
    pub id: LonghandId,
    /// The current value.
    pub value: ValueList,
    /// Whether the value was assigned, as opposed to being the initial value.
    pub explicitly_set: bool,
}

impl Longhand {
    /// A longhand holding its initial value.
    #[must_use]
    pub fn initial(id: LonghandId) -> Self {
        Self {
            id,
            value: id.initial_value(),
            explicitly_set: false,
        }
    }

    fn assign(&mut self, value: ValueList) {
        self.value = value;
        self.explicitly_set = true;
    }

    fn reset(&mut self) {
        self.value = self.id.initial_value();
        self.explicitly_set = false;
    }
}

/// The longhand values computed by a successful shorthand decomposition,
/// waiting to be committed.
///
/// `None` resets that longhand to its initial value and marks it as not
/// explicitly set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decomposition {
    entries: Vec<(LonghandId, Option<ValueList>)>,
}

impl Decomposition {
    /// An empty decomposition.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a value for `id`.
    pub fn set(&mut self, id: LonghandId, value: ValueList) {
        self.entries.push((id, Some(value)));
    }

    /// Record a reset for `id`.
    pub fn reset(&mut self, id: LonghandId) {
        self.entries.push((id, None));
    }

    /// The value recorded for `id`, if any.
    #[must_use]
    pub fn get(&self, id: LonghandId) -> Option<&ValueList> {
        self.entries
            .iter()
            .rev()
            .find(|(entry, _)| *entry == id)
            .and_then(|(_, value)| value.as_ref())
    }

    /// The recorded entries, in order.
    #[must_use]
    pub fn entries(&self) -> &[(LonghandId, Option<ValueList>)] {
        &self.entries
    }
}

/// Storage for every longhand, indexed by [`LonghandId`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LonghandStore {
    longhands: [Longhand; LonghandId::COUNT],
}

impl Default for LonghandStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LonghandStore {
    /// A store where every longhand holds its initial value.
    #[must_use]
    pub fn new() -> Self {
        Self {
            longhands: LonghandId::ALL.map(Longhand::initial),
        }
    }

    /// Read one longhand.
    #[must_use]
    pub fn get(&self, id: LonghandId) -> &Longhand {
        &self.longhands[id as usize]
    }

    /// Iterate over every longhand in store order.
    pub fn iter(&self) -> core::slice::Iter<'_, Longhand> {
        self.longhands.iter()
    }

    /// Assign a single longhand. The caller has already validated `value`.
    pub fn set(&mut self, id: LonghandId, value: ValueList) {
        self.longhands[id as usize].assign(value);
    }

    /// Apply every entry of a decomposition.
    pub fn commit(&mut self, decomposition: Decomposition) {
        for (id, value) in decomposition.entries {
            let longhand = &mut self.longhands[id as usize];
            match value {
                Some(value) => longhand.assign(value),
                None => longhand.reset(),
            }
        }
    }
}
