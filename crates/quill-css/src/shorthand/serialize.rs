//! [§ 6.7.2 Serializing CSS Values](https://drafts.csswg.org/cssom/#serialize-a-css-value)
//!
//! "If ... all of the longhand properties that map to shorthand are ...
//! present, return the serialization of shorthand." Shorthand text is built
//! from ordered parts; parts that were never set are left out.

/// One longhand's contribution to a shorthand's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    /// The rendered value.
    pub text: String,
    /// Whether the part should appear at all.
    pub explicitly_set: bool,
}

impl Part {
    /// A part with the given presence.
    #[must_use]
    pub fn new(text: impl Into<String>, explicitly_set: bool) -> Self {
        Self {
            text: text.into(),
            explicitly_set,
        }
    }
}

/// A position in a shorthand's canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A part without which the whole shorthand cannot be written.
    Leading(Part),
    /// An ordinary optional part.
    Plain(Part),
    /// Parts introduced by `/`. The group opens with `/ first` and every later
    /// member present adds `/ member`; nothing is written when no member is set.
    SlashGroup(Vec<Part>),
}

/// Join the present parts with single spaces.
///
/// Returns the empty string when a [`Segment::Leading`] part is missing.
#[must_use]
pub fn serialize(segments: &[Segment]) -> String {
    let mut words: Vec<&str> = Vec::new();

    for segment in segments {
        match segment {
            Segment::Leading(part) => {
                if !part.explicitly_set {
                    return String::new();
                }
                words.push(&part.text);
            }
            Segment::Plain(part) => {
                if part.explicitly_set {
                    words.push(&part.text);
                }
            }
            Segment::SlashGroup(parts) => {
                if !parts.iter().any(|part| part.explicitly_set) {
                    continue;
                }
                for (index, part) in parts.iter().enumerate() {
                    if index == 0 {
                        words.push("/");
                        if part.explicitly_set {
                            words.push(&part.text);
                        }
                    } else if part.explicitly_set {
                        words.push("/");
                        words.push(&part.text);
                    }
                }
            }
        }
    }

    words.retain(|word| !word.is_empty());
    words.join(" ")
}
