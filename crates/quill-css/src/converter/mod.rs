//! Grammar combinators for shorthands whose parts may come in any order.
//!
//! [§ 2.2 Component value combinators](https://www.w3.org/TR/css-values-4/#component-combinators)
//!
//! "Juxtaposing components means that all of them must occur, in the given
//! order." "A double ampersand (&&) separates two or more components, all of
//! which must occur, in any order." "A question mark (?) indicates that the
//! preceding type, word, or group is optional."
//!
//! Each combinator looks at a slice of component values and either matches a
//! prefix of it (returning what it built and how many entries it consumed) or
//! fails without consuming anything. There is no backtracking into a member
//! once it has matched.

use crate::longhand::LonghandId;
use crate::parser::{ComponentValue, ValueList};

/// A grammar fragment that can match a prefix of a component value slice.
pub trait Converter {
    /// What a successful match produces.
    type Output;

    /// Match a prefix of `input`. Returns the output and the number of entries
    /// consumed, or `None` if the fragment does not match here.
    fn convert(&self, input: &[ComponentValue]) -> Option<(Self::Output, usize)>;
}

/// Where a [`MatchAny`] stopped making progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    /// Index of the first entry no member could consume, or the input length
    /// when a required member never matched.
    pub position: usize,
}

/// Matches the longest prefix satisfying a longhand's own grammar.
#[derive(Debug, Clone, Copy)]
pub struct ValueOf {
    id: LonghandId,
}

impl Converter for ValueOf {
    type Output = ValueList;

    fn convert(&self, input: &[ComponentValue]) -> Option<(ValueList, usize)> {
        let length = self.id.match_prefix(input)?;
        Some((ValueList::from(&input[..length]), length))
    }
}

/// Always succeeds; yields `None` without consuming when the inner fragment fails.
#[derive(Debug, Clone, Copy)]
pub struct Optional<C> {
    inner: C,
}

impl<C: Converter> Converter for Optional<C> {
    type Output = Option<C::Output>;

    fn convert(&self, input: &[ComponentValue]) -> Option<(Self::Output, usize)> {
        Some(match self.inner.convert(input) {
            Some((value, consumed)) => (Some(value), consumed),
            None => (None, 0),
        })
    }
}

/// Requires a literal `/` immediately before the inner fragment.
#[derive(Debug, Clone, Copy)]
pub struct StartsWithDelimiter<C> {
    inner: C,
}

impl<C: Converter> Converter for StartsWithDelimiter<C> {
    type Output = C::Output;

    fn convert(&self, input: &[ComponentValue]) -> Option<(Self::Output, usize)> {
        let (first, rest) = input.split_first()?;
        if !first.is_delimiter() {
            return None;
        }
        let (value, consumed) = self.inner.convert(rest)?;
        Some((value, consumed + 1))
    }
}

/// Fails a successful match whose output does not satisfy `predicate`.
#[derive(Debug, Clone, Copy)]
pub struct Verify<C, F> {
    inner: C,
    predicate: F,
}

impl<C, F> Converter for Verify<C, F>
where
    C: Converter,
    F: Fn(&C::Output) -> bool,
{
    type Output = C::Output;

    fn convert(&self, input: &[ComponentValue]) -> Option<(Self::Output, usize)> {
        self.inner
            .convert(input)
            .filter(|(value, _)| (self.predicate)(value))
    }
}

/// Members in declared order, each tried exactly once.
#[derive(Debug, Clone, Copy)]
pub struct OrderedGroup<T> {
    members: T,
}

/// Members in any order, each used at most once, covering the whole input.
#[derive(Debug, Clone, Copy)]
pub struct MatchAny<T> {
    members: T,
}

macro_rules! ordered_group_impl {
    ($($member:ident $index:tt),+) => {
        impl<$($member: Converter),+> Converter for OrderedGroup<($($member,)+)> {
            type Output = ($($member::Output,)+);

            fn convert(&self, input: &[ComponentValue]) -> Option<(Self::Output, usize)> {
                let mut position = 0;
                let output = ($({
                    let (value, consumed) = self.members.$index.convert(&input[position..])?;
                    position += consumed;
                    value
                },)+);
                Some((output, position))
            }
        }
    };
}

ordered_group_impl!(A 0, B 1);
ordered_group_impl!(A 0, B 1, C 2);
ordered_group_impl!(A 0, B 1, C 2, D 3);

macro_rules! match_any_impl {
    ($($member:ident $slot:ident $index:tt),+) => {
        impl<$($member: Converter),+> MatchAny<($($member,)+)> {
            /// Match the entire input, reporting where matching got stuck.
            ///
            /// # Errors
            ///
            /// Returns a [`Mismatch`] when some entry is claimed by no member,
            /// or when a member that never matched cannot be absent.
            pub fn try_convert(
                &self,
                input: &[ComponentValue],
            ) -> Result<($($member::Output,)+), Mismatch> {
                $(let mut $slot: Option<$member::Output> = None;)+
                let mut position = 0;

                'scan: while position < input.len() {
                    let rest = &input[position..];
                    $(
                        if $slot.is_none()
                            && let Some((value, consumed)) = self.members.$index.convert(rest)
                            && consumed > 0
                        {
                            $slot = Some(value);
                            position += consumed;
                            continue 'scan;
                        }
                    )+
                    return Err(Mismatch { position });
                }

                Ok(($(
                    match $slot {
                        Some(value) => value,
                        None => self.members.$index.convert(&[]).ok_or(Mismatch { position })?.0,
                    },
                )+))
            }
        }

        impl<$($member: Converter),+> Converter for MatchAny<($($member,)+)> {
            type Output = ($($member::Output,)+);

            fn convert(&self, input: &[ComponentValue]) -> Option<(Self::Output, usize)> {
                self.try_convert(input).ok().map(|output| (output, input.len()))
            }
        }
    };
}

match_any_impl!(A a 0, B b 1);
match_any_impl!(A a 0, B b 1, C c 2);
match_any_impl!(A a 0, B b 1, C c 2, D d 3);

/// Match a longhand's value.
#[must_use]
pub const fn value_of(id: LonghandId) -> ValueOf {
    ValueOf { id }
}

/// Make `inner` optional.
#[must_use]
pub const fn optional<C: Converter>(inner: C) -> Optional<C> {
    Optional { inner }
}

/// Require a `/` before `inner`.
#[must_use]
pub const fn starts_with_delimiter<C: Converter>(inner: C) -> StartsWithDelimiter<C> {
    StartsWithDelimiter { inner }
}

/// Add a post-condition to `inner`.
#[must_use]
pub const fn verify<C, F>(inner: C, predicate: F) -> Verify<C, F>
where
    C: Converter,
    F: Fn(&C::Output) -> bool,
{
    Verify { inner, predicate }
}

/// Match a tuple of members in order.
#[must_use]
pub const fn ordered_group<T>(members: T) -> OrderedGroup<T> {
    OrderedGroup { members }
}

/// Match a tuple of members in any order, consuming the whole input.
#[must_use]
pub const fn match_any<T>(members: T) -> MatchAny<T> {
    MatchAny { members }
}
