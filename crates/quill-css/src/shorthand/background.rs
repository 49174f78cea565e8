//! [§ 3.10 Backgrounds Shorthand: the background property](https://www.w3.org/TR/css-backgrounds-3/#background)
//!
//! ```text
//! <bg-layer> = <bg-image> || <bg-position> [ / <bg-size> ]? || <repeat-style>
//!            || <attachment> || <visual-box> || <visual-box>
//! <final-bg-layer> = <bg-layer> || <'background-color'>
//! background = <bg-layer>#? , <final-bg-layer>
//! ```
//!
//! Each comma-separated layer is classified by a single forward scan: at every
//! entry the first category (in a fixed priority order) that is still unset
//! and accepts the entry claims it, together with any entries that belong to
//! the same run. The scan never rewinds.

use serde::Serialize;

use super::serialize::{Part, Segment, serialize};
use super::{Shorthand, ShorthandId};
use crate::error::Rejection;
use crate::longhand::{Decomposition, LonghandId, LonghandStore};
use crate::parser::{ComponentValue, ValueList};
use crate::values::background::{
    BackgroundSize, is_repeat_axis, is_repeat_entry, is_size_component, is_size_entry,
    parse_background_repeat, parse_background_size,
};
use crate::values::color::{Color, ColorValue, parse_single_color};
use crate::values::image::{ImageSource, parse_image};
use crate::values::keyword::{BackgroundAttachment, BackgroundRepeat, BoxModel, keyword};
use crate::values::position::{Point, is_position_entry, parse_position};

/// The `background` shorthand.
#[derive(Debug, Clone, Copy)]
pub struct Background;

/// Longhands holding one run per layer, in canonical serialization order.
const LAYERED: [LonghandId; 7] = [
    LonghandId::BackgroundImage,
    LonghandId::BackgroundPosition,
    LonghandId::BackgroundSize,
    LonghandId::BackgroundRepeat,
    LonghandId::BackgroundAttachment,
    LonghandId::BackgroundOrigin,
    LonghandId::BackgroundClip,
];

/// The runs one layer assigned. `None` means the category was not mentioned.
#[derive(Debug, Default)]
struct LayerValues<'a> {
    image: Option<&'a [ComponentValue]>,
    position: Option<&'a [ComponentValue]>,
    size: Option<&'a [ComponentValue]>,
    repeat: Option<&'a [ComponentValue]>,
    attachment: Option<&'a [ComponentValue]>,
    origin: Option<&'a [ComponentValue]>,
    clip: Option<&'a [ComponentValue]>,
    color: Option<&'a [ComponentValue]>,
}

impl<'a> LayerValues<'a> {
    /// The run claimed for a layered longhand.
    const fn run(&self, id: LonghandId) -> Option<&'a [ComponentValue]> {
        match id {
            LonghandId::BackgroundImage => self.image,
            LonghandId::BackgroundPosition => self.position,
            LonghandId::BackgroundSize => self.size,
            LonghandId::BackgroundRepeat => self.repeat,
            LonghandId::BackgroundAttachment => self.attachment,
            LonghandId::BackgroundOrigin => self.origin,
            LonghandId::BackgroundClip => self.clip,
            _ => None,
        }
    }

    /// The value a layered longhand takes for this layer.
    ///
    /// "If a value is omitted from the shorthand, it is set to its initial
    /// value."
    fn resolved(&self, id: LonghandId) -> ValueList {
        self.run(id)
            .map_or_else(|| id.initial_value(), ValueList::from)
    }
}

/// Cursor over one layer's entries. It only ever moves forward.
struct LayerScanner<'a> {
    entries: &'a [ComponentValue],
    position: usize,
    layer: usize,
    is_final: bool,
}

impl<'a> LayerScanner<'a> {
    const fn new(entries: &'a [ComponentValue], layer: usize, is_final: bool) -> Self {
        Self {
            entries,
            position: 0,
            layer,
            is_final,
        }
    }

    fn peek(&self) -> Option<&'a ComponentValue> {
        self.entries.get(self.position)
    }

    fn next_is(&self, accepts: impl Fn(&ComponentValue) -> bool) -> bool {
        self.peek().is_some_and(accepts)
    }

    const fn advance(&mut self) {
        self.position += 1;
    }

    /// The entries consumed since `start`.
    fn since(&self, start: usize) -> &'a [ComponentValue] {
        &self.entries[start..self.position]
    }

    /// Classify every entry of the layer.
    fn classify(mut self) -> Result<LayerValues<'a>, Rejection> {
        if self.entries.is_empty() {
            return Err(Rejection::EmptyLayer {
                property: ShorthandId::Background.property(),
                layer: self.layer,
            });
        }

        let mut values = LayerValues::default();

        while let Some(entry) = self.peek() {
            let start = self.position;

            // STEP 1: A position run, optionally followed by "/ <bg-size>".
            if values.position.is_none() && is_position_entry(entry) {
                while self.next_is(is_position_entry) {
                    self.advance();
                }
                values.position = Some(self.since(start));

                if self.next_is(ComponentValue::is_delimiter) {
                    self.advance();
                    let size_start = self.position;
                    if !self.next_is(is_size_entry) {
                        return Err(Rejection::DelimiterMismatch {
                            property: ShorthandId::Background.property(),
                            expected: LonghandId::BackgroundSize,
                        });
                    }
                    self.advance();
                    if self.next_is(is_size_component) {
                        self.advance();
                    }
                    values.size = Some(self.since(size_start));
                }

                #[cfg(feature = "shorthand-trace")]
                eprintln!(
                    "[background STEP1] layer {}: position/size {}",
                    self.layer,
                    ValueList::from(self.since(start))
                );
                continue;
            }

            // STEP 2: "<bg-image> = <image> | none"
            if values.image.is_none() && parse_image(entry).is_some() {
                self.advance();
                values.image = Some(self.since(start));
            }
            // STEP 3: A repeat keyword, with an optional second axis.
            else if values.repeat.is_none() && is_repeat_entry(entry) {
                self.advance();
                if self.next_is(is_repeat_axis) {
                    self.advance();
                }
                values.repeat = Some(self.since(start));
            }
            // STEP 4: "<attachment> = scroll | fixed | local"
            else if values.attachment.is_none() && keyword::<BackgroundAttachment>(entry).is_some()
            {
                self.advance();
                values.attachment = Some(self.since(start));
            }
            // STEP 5: The first box keyword is the origin, a second one the clip.
            // A lone keyword leaves clip at `border-box`.
            else if values.origin.is_none() && keyword::<BoxModel>(entry).is_some() {
                self.advance();
                values.origin = Some(self.since(start));
                if self.next_is(|v| keyword::<BoxModel>(v).is_some()) {
                    let clip_start = self.position;
                    self.advance();
                    values.clip = Some(self.since(clip_start));
                }
            }
            // STEP 6: A colour, final layer only.
            else if self.is_final && values.color.is_none() && parse_single_color(entry).is_some()
            {
                self.advance();
                values.color = Some(self.since(start));
            }
            // STEP 7: Nothing claims the entry.
            else {
                return Err(self.reject(entry, &values));
            }

            #[cfg(feature = "shorthand-trace")]
            eprintln!(
                "[background] layer {}: claimed {}",
                self.layer,
                ValueList::from(self.since(start))
            );
        }

        Self::check_runs(&values)?;
        Ok(values)
    }

    /// Work out why `entry` could not be placed.
    fn reject(&self, entry: &ComponentValue, values: &LayerValues<'_>) -> Rejection {
        let property = ShorthandId::Background.property();
        let token = entry.to_string();

        if entry.is_delimiter() {
            return Rejection::DelimiterMismatch {
                property,
                expected: LonghandId::BackgroundSize,
            };
        }

        if parse_single_color(entry).is_some() {
            return if self.is_final {
                Rejection::CategoryConflict {
                    property,
                    longhand: LonghandId::BackgroundColor,
                    token,
                }
            } else {
                Rejection::ColorOutsideLastLayer {
                    property,
                    token,
                    layer: self.layer,
                }
            };
        }

        let filled = [
            (values.position.is_some(), LonghandId::BackgroundPosition, is_position_entry(entry)),
            (values.image.is_some(), LonghandId::BackgroundImage, parse_image(entry).is_some()),
            (values.repeat.is_some(), LonghandId::BackgroundRepeat, is_repeat_entry(entry)),
            (
                values.attachment.is_some(),
                LonghandId::BackgroundAttachment,
                keyword::<BackgroundAttachment>(entry).is_some(),
            ),
            (
                values.origin.is_some(),
                LonghandId::BackgroundOrigin,
                keyword::<BoxModel>(entry).is_some(),
            ),
        ];

        match filled
            .into_iter()
            .find(|&(is_filled, _, matches)| is_filled && matches)
        {
            Some((_, longhand, _)) => Rejection::CategoryConflict {
                property,
                longhand,
                token,
            },
            None => Rejection::SyntaxRejected { property, token },
        }
    }

    /// Every claimed run must satisfy its longhand's own grammar.
    fn check_runs(values: &LayerValues<'_>) -> Result<(), Rejection> {
        let checks: [(Option<&[ComponentValue]>, fn(&[ComponentValue]) -> bool); 3] = [
            (values.position, |run| parse_position(run).is_some()),
            (values.size, |run| parse_background_size(run).is_some()),
            (values.repeat, |run| parse_background_repeat(run).is_some()),
        ];

        for (run, accepts) in checks {
            if let Some(run) = run
                && !accepts(run)
            {
                return Err(Rejection::SyntaxRejected {
                    property: ShorthandId::Background.property(),
                    token: ValueList::from(run).to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Returns true if `run` is the longhand's initial value.
fn is_initial(id: LonghandId, run: &[ComponentValue]) -> bool {
    id.initial_value().as_slice() == run
}

impl Shorthand for Background {
    const ID: ShorthandId = ShorthandId::Background;

    const LONGHANDS: &'static [LonghandId] = &[
        LonghandId::BackgroundImage,
        LonghandId::BackgroundPosition,
        LonghandId::BackgroundSize,
        LonghandId::BackgroundRepeat,
        LonghandId::BackgroundAttachment,
        LonghandId::BackgroundOrigin,
        LonghandId::BackgroundClip,
        LonghandId::BackgroundColor,
    ];

    fn decompose(value: &ValueList) -> Result<Decomposition, Rejection> {
        let layers: Vec<&[ComponentValue]> = value.layers().collect();
        let last = layers.len() - 1;

        let mut lists: [ValueList; LAYERED.len()] = Default::default();
        let mut color = None;

        for (index, entries) in layers.into_iter().enumerate() {
            let values = LayerScanner::new(entries, index, index == last).classify()?;

            for (list, id) in lists.iter_mut().zip(LAYERED) {
                if index > 0 {
                    list.push_separator();
                }
                list.extend(values.resolved(id));
            }
            if let Some(run) = values.color {
                color = Some(ValueList::from(run));
            }
        }

        let mut decomposition = Decomposition::new();
        for (list, id) in lists.into_iter().zip(LAYERED) {
            decomposition.set(id, list);
        }
        decomposition.set(
            LonghandId::BackgroundColor,
            color.unwrap_or_else(|| LonghandId::BackgroundColor.initial_value()),
        );
        Ok(decomposition)
    }

    fn serialize(store: &LonghandStore) -> String {
        if Self::LONGHANDS
            .iter()
            .any(|&id| !store.get(id).explicitly_set)
        {
            return String::new();
        }

        let runs: Vec<Vec<&[ComponentValue]>> = LAYERED
            .iter()
            .map(|&id| store.get(id).value.layers().collect())
            .collect();
        let count = runs[0].len();
        if runs.iter().any(|layers| layers.len() != count) {
            return String::new();
        }

        let color = store.get(LonghandId::BackgroundColor);
        let color = Part::new(
            color.value.to_string(),
            !is_initial(LonghandId::BackgroundColor, color.value.as_slice()),
        );

        let mut layers = Vec::with_capacity(count);
        for layer in 0..count {
            let parts: [Part; LAYERED.len()] = core::array::from_fn(|index| {
                let run = runs[index][layer];
                Part::new(ValueList::from(run).to_string(), !is_initial(LAYERED[index], run))
            });
            let [image, mut position, size, repeat, attachment, mut origin, clip] = parts;

            // A size can only be written after a position.
            if size.explicitly_set {
                position.explicitly_set = true;
            }
            // A clip can only be written after an origin.
            if clip.explicitly_set {
                origin.explicitly_set = true;
            }

            let mut segments = vec![
                Segment::Plain(image),
                Segment::Plain(position),
                Segment::SlashGroup(vec![size]),
                Segment::Plain(repeat),
                Segment::Plain(attachment),
                Segment::Plain(origin),
                Segment::Plain(clip),
            ];
            if layer + 1 == count {
                segments.push(Segment::Plain(color.clone()));
            }

            let text = serialize(&segments);
            layers.push(if text.is_empty() {
                "none".to_string()
            } else {
                text
            });
        }

        layers.join(", ")
    }
}

/// Typed read access to the background longhands.
#[derive(Debug, Clone, Copy)]
pub struct BackgroundView<'a> {
    store: &'a LonghandStore,
}

impl<'a> BackgroundView<'a> {
    /// View the background longhands of `store`.
    #[must_use]
    pub const fn new(store: &'a LonghandStore) -> Self {
        Self { store }
    }

    fn layers<T>(&self, id: LonghandId, parse: impl Fn(&[ComponentValue]) -> Option<T>) -> Vec<T> {
        self.store.get(id).value.layers().filter_map(parse).collect()
    }

    /// One image per layer.
    #[must_use]
    pub fn images(&self) -> Vec<ImageSource> {
        self.layers(LonghandId::BackgroundImage, |run| match run {
            [v] => parse_image(v),
            _ => None,
        })
    }

    /// One position per layer.
    #[must_use]
    pub fn positions(&self) -> Vec<Point> {
        self.layers(LonghandId::BackgroundPosition, parse_position)
    }

    /// One size per layer.
    #[must_use]
    pub fn sizes(&self) -> Vec<BackgroundSize> {
        self.layers(LonghandId::BackgroundSize, parse_background_size)
    }

    /// The horizontal repeat of each layer.
    #[must_use]
    pub fn horizontal_repeats(&self) -> Vec<BackgroundRepeat> {
        self.layers(LonghandId::BackgroundRepeat, |run| {
            parse_background_repeat(run).map(|(horizontal, _)| horizontal)
        })
    }

    /// The vertical repeat of each layer.
    #[must_use]
    pub fn vertical_repeats(&self) -> Vec<BackgroundRepeat> {
        self.layers(LonghandId::BackgroundRepeat, |run| {
            parse_background_repeat(run).map(|(_, vertical)| vertical)
        })
    }

    /// One attachment per layer.
    #[must_use]
    pub fn attachments(&self) -> Vec<BackgroundAttachment> {
        self.layers(LonghandId::BackgroundAttachment, single_keyword)
    }

    /// One origin box per layer.
    #[must_use]
    pub fn origins(&self) -> Vec<BoxModel> {
        self.layers(LonghandId::BackgroundOrigin, single_keyword)
    }

    /// One clip box per layer.
    #[must_use]
    pub fn clips(&self) -> Vec<BoxModel> {
        self.layers(LonghandId::BackgroundClip, single_keyword)
    }

    /// The background color (a single value, not per layer).
    #[must_use]
    pub fn color(&self) -> Color {
        let transparent = Color::Rgba(ColorValue::TRANSPARENT);
        match self.store.get(LonghandId::BackgroundColor).value.as_slice() {
            [v] => parse_single_color(v).unwrap_or(transparent),
            _ => transparent,
        }
    }

    /// Every accessor at once.
    #[must_use]
    pub fn snapshot(&self) -> BackgroundSnapshot {
        BackgroundSnapshot {
            images: self.images(),
            positions: self.positions(),
            sizes: self.sizes(),
            horizontal_repeats: self.horizontal_repeats(),
            vertical_repeats: self.vertical_repeats(),
            attachments: self.attachments(),
            origins: self.origins(),
            clips: self.clips(),
            color: self.color(),
        }
    }
}

fn single_keyword<K: core::str::FromStr>(run: &[ComponentValue]) -> Option<K> {
    match run {
        [v] => keyword(v),
        _ => None,
    }
}

/// Owned, serializable copy of a [`BackgroundView`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackgroundSnapshot {
    /// See [`BackgroundView::images`].
    pub images: Vec<ImageSource>,
    /// See [`BackgroundView::positions`].
    pub positions: Vec<Point>,
    /// See [`BackgroundView::sizes`].
    pub sizes: Vec<BackgroundSize>,
    /// See [`BackgroundView::horizontal_repeats`].
    pub horizontal_repeats: Vec<BackgroundRepeat>,
    /// See [`BackgroundView::vertical_repeats`].
    pub vertical_repeats: Vec<BackgroundRepeat>,
    /// See [`BackgroundView::attachments`].
    pub attachments: Vec<BackgroundAttachment>,
    /// See [`BackgroundView::origins`].
    pub origins: Vec<BoxModel>,
    /// See [`BackgroundView::clips`].
    pub clips: Vec<BoxModel>,
    /// See [`BackgroundView::color`].
    pub color: Color,
}
