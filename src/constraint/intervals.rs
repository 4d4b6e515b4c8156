// Half-open interval sets over `major.minor` version numbers.

use std::fmt;

/// Number of bits reserved for the minor part of a version.
const MAJOR_SHIFT: u32 = 6;

/// Mask covering the minor bits.
const MINOR_MASK: i32 = (1 << MAJOR_SHIFT) - 1;

/// Increment from one major version to the next in the combined encoding.
const API_LEVEL_DELTA: i32 = 1 << MAJOR_SHIFT;

/// Largest major version that still fits below the infinity marker.
pub const MAX_MAJOR: i32 = (i32::MAX >> MAJOR_SHIFT) - 1;

/// Largest minor version.
pub const MAX_MINOR: i32 = MINOR_MASK;

/// A `major.minor` version packed into a single integer so that ordering
/// and range checks are plain integer comparisons.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MajorMinor(i32);

impl MajorMinor {
    /// The smallest representable version, `1.0`.
    pub const ZERO: MajorMinor = MajorMinor(1 << MAJOR_SHIFT);

    /// Open upper bound.
    pub const INFINITY: MajorMinor = MajorMinor(i32::MAX);

    /// Creates a version, returning `None` when it is outside `1.0 ..= MAX_MAJOR.MAX_MINOR`.
    pub fn checked(major: i32, minor: i32) -> Option<Self> {
        if !(1..=MAX_MAJOR).contains(&major) || !(0..=MAX_MINOR).contains(&minor) {
            return None;
        }
        Some(MajorMinor((major << MAJOR_SHIFT) + minor))
    }

    /// Creates a version.
    ///
    /// # Panics
    ///
    /// Panics when `major` is below 1 or above [`MAX_MAJOR`], or when `minor`
    /// does not fit in the minor bits. Callers handling untrusted input
    /// should use [`MajorMinor::checked`].
    pub fn new(major: i32, minor: i32) -> Self {
        match Self::checked(major, minor) {
            Some(version) => version,
            None => panic!(
                "unsupported version {major}.{minor}: major must be within 1..={MAX_MAJOR} and minor within 0..={MAX_MINOR}"
            ),
        }
    }

    pub fn major(self) -> i32 {
        if self == Self::INFINITY {
            i32::MAX
        } else {
            self.0 >> MAJOR_SHIFT
        }
    }

    pub fn minor(self) -> i32 {
        if self == Self::INFINITY {
            0
        } else {
            self.0 & MINOR_MASK
        }
    }

    pub fn bits(self) -> i32 {
        self.0
    }

    pub fn is_infinity(self) -> bool {
        self == Self::INFINITY
    }

    /// The version right after this one when counting in minor steps.
    pub(crate) fn next_minor(self) -> Self {
        if self.is_infinity() {
            self
        } else {
            MajorMinor(self.0 + 1)
        }
    }
}

impl fmt::Display for MajorMinor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minor() > 0 {
            write!(f, "{}.{}", self.major(), self.minor())
        } else {
            write!(f, "{}", self.major())
        }
    }
}

impl fmt::Debug for MajorMinor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_infinity() {
            f.write_str("∞")
        } else {
            fmt::Display::fmt(self, f)
        }
    }
}

/// A single non-empty half-open interval `[from, to)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Span {
    pub from: MajorMinor,
    pub to: MajorMinor,
}

impl Span {
    fn render(&self, variable: &str, compact: bool) -> String {
        let from = self.from;
        let to = self.to;
        if adjacent(from, to) {
            format!("{variable} = {from}")
        } else if to <= from {
            format!("No {variable}s")
        } else if from == MajorMinor::ZERO {
            if to.is_infinity() {
                format!("All {variable}s")
            } else {
                format!("{variable} < {to}")
            }
        } else if to.is_infinity() {
            format!("{variable} ≥ {from}")
        } else if compact {
            format!("{from} ≤ {variable} < {to}")
        } else {
            format!("{variable} ≥ {from} and {variable} < {to}")
        }
    }
}

/// A set of versions represented as sorted, non-overlapping, non-adjacent
/// half-open spans. The lowest possible value is `1.0`; there is no
/// negative range since these model API levels.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Intervals {
    spans: Vec<Span>,
}

impl Intervals {
    /// The empty set.
    pub fn none() -> Self {
        Self { spans: Vec::new() }
    }

    /// Everything from `1.0` up to infinity.
    pub fn all() -> Self {
        Self::span(MajorMinor::ZERO, MajorMinor::INFINITY)
    }

    /// Just this major version, including all of its minor versions.
    pub fn exactly(major: i32) -> Self {
        Self::span(MajorMinor::new(major, 0), MajorMinor::new(major + 1, 0))
    }

    /// Just this minor version; other minor versions of the same major are excluded.
    pub fn exactly_minor(major: i32, minor: i32) -> Self {
        let from = MajorMinor::new(major, minor);
        Self::span(from, from.next_minor())
    }

    pub fn at_least(major: i32, minor: i32) -> Self {
        Self::span(MajorMinor::new(major, minor), MajorMinor::INFINITY)
    }

    /// Everything up to and including `major`.
    pub fn at_most(major: i32) -> Self {
        Self::span(MajorMinor::ZERO, MajorMinor::new(major + 1, 0))
    }

    /// Everything strictly below `major.minor`.
    pub fn below(major: i32, minor: i32) -> Self {
        Self::span(MajorMinor::ZERO, MajorMinor::new(major, minor))
    }

    pub fn range(from_inclusive: i32, to_exclusive: i32) -> Self {
        Self::range_minor(from_inclusive, 0, to_exclusive, 0)
    }

    pub fn range_minor(
        from_inclusive: i32,
        from_inclusive_minor: i32,
        to_exclusive: i32,
        to_exclusive_minor: i32,
    ) -> Self {
        Self::span(
            MajorMinor::new(from_inclusive, from_inclusive_minor),
            MajorMinor::new(to_exclusive, to_exclusive_minor),
        )
    }

    /// Creates `[from, to)`; an empty range yields the empty set.
    pub fn span(from: MajorMinor, to: MajorMinor) -> Self {
        if from < to {
            Self {
                spans: vec![Span { from, to }],
            }
        } else {
            Self::none()
        }
    }

    /// Builds a normalized set from arbitrary spans.
    pub fn from_spans<I: IntoIterator<Item = Span>>(spans: I) -> Self {
        let mut spans: Vec<Span> = spans.into_iter().filter(|s| s.from < s.to).collect();
        spans.sort_by_key(|s| s.from);

        let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
        for span in spans {
            match merged.last_mut() {
                Some(last) if span.from <= last.to => {
                    if span.to > last.to {
                        last.to = span.to;
                    }
                }
                _ => merged.push(span),
            }
        }
        Self { spans: merged }
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// True if this covers everything from `1.0` to infinity.
    pub fn is_all(&self) -> bool {
        matches!(self.spans.as_slice(), [only] if only.from == MajorMinor::ZERO && only.to.is_infinity())
    }

    /// True if the whole number `value` (as `value.0`) is in the set.
    pub fn contains(&self, value: i32) -> bool {
        let key = i64::from(value) << MAJOR_SHIFT;
        self.spans.iter().any(|s| {
            // An infinite upper bound also admits levels past MAX_MAJOR
            i64::from(s.from.bits()) <= key && (s.to.is_infinity() || key < i64::from(s.to.bits()))
        })
    }

    /// Intersection.
    pub fn and(&self, other: &Intervals) -> Intervals {
        let mut result = Vec::new();
        let (mut i, mut j) = (0, 0);
        while i < self.spans.len() && j < other.spans.len() {
            let a = self.spans[i];
            let b = other.spans[j];
            let from = a.from.max(b.from);
            let to = a.to.min(b.to);
            if from < to {
                result.push(Span { from, to });
            }
            if a.to < b.to {
                i += 1;
            } else {
                j += 1;
            }
        }
        Self::from_spans(result)
    }

    /// Union.
    pub fn or(&self, other: &Intervals) -> Intervals {
        Self::from_spans(self.spans.iter().chain(other.spans.iter()).copied())
    }

    /// Complement within `[1.0, ∞)`.
    pub fn not(&self) -> Intervals {
        let mut result = Vec::with_capacity(self.spans.len() + 1);
        let mut prev = MajorMinor::ZERO;
        for span in &self.spans {
            if span.from > prev {
                result.push(Span {
                    from: prev,
                    to: span.from,
                });
            }
            prev = span.to;
        }
        if !prev.is_infinity() {
            result.push(Span {
                from: prev,
                to: MajorMinor::INFINITY,
            });
        }
        Self { spans: result }
    }

    /// The lowest point of the set; the empty set counts as `1.0`.
    fn lowest(&self) -> MajorMinor {
        self.spans.first().map_or(MajorMinor::ZERO, |s| s.from)
    }

    /// Is the lowest value of this set at least the lowest value of `other`?
    ///
    /// Only the starting points are compared, so a requirement such as
    /// "exactly 18" is considered satisfied by "at least 29".
    pub fn is_at_least(&self, other: &Intervals) -> bool {
        self.lowest() >= other.lowest()
    }

    /// Will everything in `min_sdk` always match this set?
    pub fn always_at_least(&self, min_sdk: &Intervals) -> bool {
        &min_sdk.and(self) == min_sdk
    }

    pub fn always_at_least_level(&self, level: i32) -> bool {
        self.always_at_least(&Intervals::at_least(level, 0))
    }

    /// True if the set contains anything above `level`.
    pub fn ever_higher(&self, level: i32) -> bool {
        !Intervals::at_least(level + 1, 0).and(self).is_empty()
    }

    /// True if the set extends to infinity.
    pub fn is_open_ended(&self) -> bool {
        self.spans.last().is_some_and(|s| s.to.is_infinity())
    }

    /// Major part of the lowest value, or -1 for the empty set.
    pub fn from_inclusive(&self) -> i32 {
        self.spans.first().map_or(-1, |s| s.from.major())
    }

    pub fn from_inclusive_minor(&self) -> i32 {
        self.spans.first().map_or(0, |s| s.from.minor())
    }

    /// Major part of the exclusive upper bound; `i32::MAX` when open ended
    /// and 1 for the empty set.
    pub fn to_exclusive(&self) -> i32 {
        self.spans.last().map_or(1, |s| s.to.major())
    }

    pub fn to_exclusive_minor(&self) -> i32 {
        self.spans.last().map_or(0, |s| s.to.minor())
    }

    /// Renders the set, e.g. `x ≥ 10 and x < 12`, or `10 ≤ x < 12` when compact.
    pub fn render(&self, variable: &str, compact: bool) -> String {
        match self.spans.as_slice() {
            [] => format!("No {variable}s"),
            [only] => only.render(variable, compact),
            [left, right] if is_not_x(left, right) => format!("{variable} ≠ {}", left.to),
            spans => spans
                .iter()
                .map(|s| s.render(variable, compact))
                .collect::<Vec<_>>()
                .join(" or "),
        }
    }
}

impl fmt::Display for Intervals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render("x", false))
    }
}

impl fmt::Debug for Intervals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.spans.iter().map(|s| (s.from, s.to)))
            .finish()
    }
}

/// True for level values returned from [`Intervals::to_exclusive`] on open-ended sets.
pub fn is_infinity(level: i32) -> bool {
    level == MajorMinor::INFINITY.bits()
}

/// Spans `[1, X)` and `[X+1, ∞)`, i.e. everything except `X`.
fn is_not_x(first: &Span, second: &Span) -> bool {
    first.from == MajorMinor::ZERO && second.to.is_infinity() && adjacent(first.to, second.from)
}

/// Two versions are adjacent when they differ by one minor step, or by one
/// major step when both are whole numbers.
fn adjacent(left: MajorMinor, right: MajorMinor) -> bool {
    if left.is_infinity() || right.is_infinity() {
        return false;
    }
    left.bits() + 1 == right.bits()
        || (left.bits() + API_LEVEL_DELTA == right.bits() && left.minor() == 0 && right.minor() == 0)
}
