// API constraints: interval sets tagged with an SDK id, and vectors of
// those across several SDKs.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

use super::extension::{ExtensionSdkRegistry, ANDROID_SDK_ID};
use super::intervals::{Intervals, MajorMinor};
use super::level::ApiLevel;
use super::ConstraintError;

/// SDK id of [`SdkApiConstraint::none`].
pub const NO_SDK_ID: i32 = -1;

/// SDK id of [`SdkApiConstraint::unknown`].
pub const UNKNOWN_SDK_ID: i32 = -2;

/// A set of API levels (or versions) for a single SDK.
///
/// Equality compares the interval set and the SDK id; the negatable flag is
/// not part of a constraint's identity.
#[derive(Clone, Debug)]
pub struct SdkApiConstraint {
    intervals: Intervals,
    sdk_id: i32,
    negatable: bool,
}

impl PartialEq for SdkApiConstraint {
    fn eq(&self, other: &Self) -> bool {
        self.sdk_id == other.sdk_id && self.intervals == other.intervals
    }
}

impl Eq for SdkApiConstraint {}

impl SdkApiConstraint {
    pub fn new(intervals: Intervals, sdk_id: i32) -> Self {
        Self {
            intervals,
            sdk_id,
            negatable: true,
        }
    }

    /// Matches no API level of any SDK.
    pub fn none() -> Self {
        Self::new(Intervals::none(), NO_SDK_ID)
    }

    /// Placeholder for an API level that has not been computed.
    pub fn unknown() -> Self {
        Self::new(Intervals::none(), UNKNOWN_SDK_ID)
    }

    /// Every Android API level.
    pub fn all() -> Self {
        Self::new(Intervals::all(), ANDROID_SDK_ID)
    }

    pub fn intervals(&self) -> &Intervals {
        &self.intervals
    }

    pub fn sdk_id(&self) -> i32 {
        self.sdk_id
    }

    pub fn is_none(&self) -> bool {
        self.sdk_id == NO_SDK_ID && self.intervals.is_empty()
    }

    pub fn is_unknown(&self) -> bool {
        self.sdk_id == UNKNOWN_SDK_ID && self.intervals.is_empty()
    }

    fn is_all(&self) -> bool {
        self.sdk_id == ANDROID_SDK_ID && self.intervals.is_all()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn is_open_ended(&self) -> bool {
        self.intervals.is_open_ended()
    }

    pub fn from_inclusive(&self) -> i32 {
        self.intervals.from_inclusive()
    }

    pub fn from_inclusive_minor(&self) -> i32 {
        self.intervals.from_inclusive_minor()
    }

    pub fn to_exclusive(&self) -> i32 {
        self.intervals.to_exclusive()
    }

    pub fn to_exclusive_minor(&self) -> i32 {
        self.intervals.to_exclusive_minor()
    }

    pub fn negatable(&self) -> bool {
        self.negatable
    }

    /// A copy whose negation is empty instead of the complement. Used for
    /// constraints that come from annotations rather than from code checks.
    pub fn as_non_negatable(&self) -> Self {
        Self {
            intervals: self.intervals.clone(),
            sdk_id: self.sdk_id,
            negatable: false,
        }
    }

    pub fn includes(&self, level: i32) -> bool {
        self.intervals.contains(level)
    }

    /// True for Android constraints whose lowest level is at least `level`.
    pub fn is_at_least_level(&self, level: i32) -> bool {
        debug_assert!(!self.is_unknown());
        self.sdk_id == ANDROID_SDK_ID && self.intervals.is_at_least(&Intervals::at_least(level, 0))
    }

    pub fn always_at_least_level(&self, level: i32) -> bool {
        self.intervals.always_at_least_level(level)
    }

    pub fn ever_higher(&self, level: i32) -> bool {
        self.intervals.ever_higher(level)
    }

    pub fn is_at_least(&self, constraint: &ApiConstraint) -> bool {
        debug_assert!(!self.is_unknown() && !constraint.is_unknown());
        if self.intervals.is_empty() {
            return true;
        }
        match constraint {
            ApiConstraint::Sdk(other) => {
                self.sdk_id == other.sdk_id && self.intervals.is_at_least(&other.intervals)
            }
            ApiConstraint::Multi(other) => {
                let mut any_match = false;
                for entry in &other.entries {
                    if let Some(always_need) = &entry.always {
                        if !self.is_at_least_sdk(always_need) {
                            return false;
                        }
                        any_match = true;
                    } else if let Some(might_need) = &entry.sometimes {
                        if any_match {
                            continue;
                        }
                        if self.is_at_least_sdk(might_need) {
                            any_match = true;
                        }
                    }
                }
                any_match
            }
        }
    }

    fn is_at_least_sdk(&self, other: &SdkApiConstraint) -> bool {
        if self.intervals.is_empty() {
            return true;
        }
        self.sdk_id == other.sdk_id && self.intervals.is_at_least(&other.intervals)
    }

    pub fn first_missing(&self, requirement: &ApiConstraint) -> Option<SdkApiConstraint> {
        match requirement {
            ApiConstraint::Sdk(requirement) => Some(requirement.clone()),
            ApiConstraint::Multi(requirement) => {
                let mut any_match = false;
                let mut first_missing: Option<&SdkApiConstraint> = None;
                for entry in &requirement.entries {
                    if let Some(always_need) = &entry.always {
                        if !self.is_at_least_sdk(always_need) {
                            return Some(always_need.clone());
                        }
                        any_match = true;
                    } else if let Some(might_need) = &entry.sometimes {
                        if any_match {
                            continue;
                        }
                        if self.is_at_least_sdk(might_need) {
                            any_match = true;
                        } else if first_missing.is_none() {
                            first_missing = Some(might_need);
                        }
                    }
                }
                if any_match {
                    None
                } else {
                    first_missing
                        .or_else(|| requirement.entries.first().map(SdkApiConstraints::lowest))
                        .cloned()
                }
            }
        }
    }

    pub fn always_at_least(&self, min_sdk: &ApiConstraint) -> bool {
        match min_sdk {
            ApiConstraint::Sdk(min_sdk) => self.always_at_least_sdk(min_sdk),
            ApiConstraint::Multi(min_sdk) => match min_sdk.find_sdk(self.sdk_id, false) {
                Some(sdk) => self.always_at_least_sdk(sdk),
                None => false,
            },
        }
    }

    fn always_at_least_sdk(&self, min_sdk: &SdkApiConstraint) -> bool {
        if min_sdk.is_none() || self.is_none() {
            return true;
        }
        debug_assert_eq!(self.sdk_id, min_sdk.sdk_id);
        self.intervals.always_at_least(&min_sdk.intervals)
    }

    /// Complement within the same SDK.
    pub fn not(&self) -> SdkApiConstraint {
        if !self.negatable {
            SdkApiConstraint::new(Intervals::none(), self.sdk_id)
        } else if self.is_none() {
            SdkApiConstraint::all()
        } else if self.is_all() {
            SdkApiConstraint::none()
        } else {
            SdkApiConstraint::new(self.intervals.not(), self.sdk_id)
        }
    }

    pub fn or(&self, other: &ApiConstraint) -> ApiConstraint {
        debug_assert!(!self.is_unknown() && !other.is_unknown());
        match other {
            ApiConstraint::Sdk(other) => {
                if other.is_empty() {
                    return self.clone().into();
                }
                if self.sdk_id != other.sdk_id {
                    if self.is_empty() {
                        return other.clone().into();
                    }
                    return ApiConstraint::Multi(MultiSdkApiConstraint::from_entries(vec![
                        SdkApiConstraints::new(self.sdk_id, None, Some(self.clone())),
                        SdkApiConstraints::new(other.sdk_id, None, Some(other.clone())),
                    ]));
                }
                SdkApiConstraint::new(self.intervals.or(&other.intervals), self.sdk_id).into()
            }
            ApiConstraint::Multi(other) => {
                if self.is_empty() {
                    return ApiConstraint::Multi(other.clone());
                }
                if other.is_empty() {
                    return self.clone().into();
                }
                let mut entries: Vec<SdkApiConstraints> = other
                    .entries
                    .iter()
                    .map(|entry| {
                        if entry.sdk_id == self.sdk_id {
                            entry.or_with(self, true)
                        } else {
                            entry.clone()
                        }
                    })
                    .collect();
                if other.find_sdk(self.sdk_id, false).is_none() {
                    entries.push(SdkApiConstraints::new(self.sdk_id, None, Some(self.clone())));
                }
                ApiConstraint::Multi(MultiSdkApiConstraint::from_entries(entries))
            }
        }
    }

    pub fn and(&self, other: &ApiConstraint) -> SdkApiConstraint {
        debug_assert!(!self.is_unknown() && !other.is_unknown());
        if self.is_empty() || other.is_empty() {
            return SdkApiConstraint::none();
        }
        let matching = match other {
            ApiConstraint::Sdk(other) if other.sdk_id == self.sdk_id => Some(other),
            ApiConstraint::Sdk(_) => None,
            ApiConstraint::Multi(other) => other.find_sdk(self.sdk_id, false),
        };
        match matching {
            Some(other) => SdkApiConstraint::new(self.intervals.and(&other.intervals), self.sdk_id),
            None => SdkApiConstraint::none(),
        }
    }

    pub fn find_sdk(&self, sdk_id: i32) -> Option<&SdkApiConstraint> {
        (sdk_id == self.sdk_id).then_some(self)
    }

    /// Like `Display`, but extension SDKs are prefixed with their name.
    pub fn to_string_with(&self, registry: Option<&ExtensionSdkRegistry>) -> String {
        let constraint = self.to_string();
        if self.sdk_id == ANDROID_SDK_ID {
            return constraint;
        }
        let sdk = registry
            .and_then(|r| r.find(self.sdk_id))
            .map(ToString::to_string)
            .unwrap_or_else(|| format!("SDK {}", self.sdk_id));
        format!("{sdk}: {constraint}")
    }

    /// Lowest level as `major` or `major.minor`.
    pub fn min_string(&self) -> String {
        let minor = self.from_inclusive_minor();
        if minor > 0 {
            format!("{}.{}", self.from_inclusive(), minor)
        } else {
            self.from_inclusive().to_string()
        }
    }
}

impl fmt::Display for SdkApiConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variable = if self.sdk_id == ANDROID_SDK_ID {
            "API level"
        } else {
            "version"
        };
        f.write_str(&self.intervals.render(variable, false))
    }
}

/// The constraints recorded for one SDK in a [`MultiSdkApiConstraint`].
///
/// `always` holds what is certain; `sometimes` holds what applies only if
/// one of several alternatives is taken. At least one of them is present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SdkApiConstraints {
    pub sdk_id: i32,
    pub always: Option<SdkApiConstraint>,
    pub sometimes: Option<SdkApiConstraint>,
}

impl SdkApiConstraints {
    pub fn new(sdk_id: i32, always: Option<SdkApiConstraint>, sometimes: Option<SdkApiConstraint>) -> Self {
        debug_assert!(always.is_some() || sometimes.is_some());
        Self {
            sdk_id,
            always,
            sometimes,
        }
    }

    /// Places `constraint` in the `sometimes` slot when `either` is set,
    /// otherwise in `always`.
    pub fn with(sdk_id: i32, constraint: SdkApiConstraint, either: bool) -> Self {
        if either {
            Self::new(sdk_id, None, Some(constraint))
        } else {
            Self::new(sdk_id, Some(constraint), None)
        }
    }

    pub fn lowest(&self) -> &SdkApiConstraint {
        match (&self.always, &self.sometimes) {
            (Some(always), _) => always,
            (None, Some(sometimes)) => sometimes,
            (None, None) => unreachable!("SdkApiConstraints without any constraint"),
        }
    }

    pub fn highest(&self) -> &SdkApiConstraint {
        match (&self.sometimes, &self.always) {
            (Some(sometimes), _) => sometimes,
            (None, Some(always)) => always,
            (None, None) => unreachable!("SdkApiConstraints without any constraint"),
        }
    }

    pub fn and(&self, other: &SdkApiConstraints) -> SdkApiConstraints {
        self.combine(other.always.as_ref(), other.sometimes.as_ref(), Combine::And)
    }

    pub fn and_with(&self, constraint: &SdkApiConstraint, either: bool) -> SdkApiConstraints {
        let (always, sometimes) = split_either(constraint, either);
        self.combine(always, sometimes, Combine::And)
    }

    pub fn or(&self, other: &SdkApiConstraints) -> SdkApiConstraints {
        self.combine(other.always.as_ref(), other.sometimes.as_ref(), Combine::Or)
    }

    pub fn or_with(&self, constraint: &SdkApiConstraint, either: bool) -> SdkApiConstraints {
        let (always, sometimes) = split_either(constraint, either);
        self.combine(always, sometimes, Combine::Or)
    }

    fn combine(
        &self,
        match_always: Option<&SdkApiConstraint>,
        match_sometimes: Option<&SdkApiConstraint>,
        op: Combine,
    ) -> SdkApiConstraints {
        let merge = |matched: Option<&SdkApiConstraint>, have: &Option<SdkApiConstraint>| match (matched, have) {
            (Some(matched), Some(have)) => Some(SdkApiConstraint::new(
                op.apply(&matched.intervals, &have.intervals),
                self.sdk_id,
            )),
            (Some(matched), None) => Some(matched.clone()),
            (None, have) => have.clone(),
        };
        let always = merge(match_always, &self.always);
        let mut sometimes = merge(match_sometimes, &self.sometimes);

        // An optional constraint that adds nothing over the certain one is dropped.
        if let (Some(always), Some(s)) = (&always, &sometimes) {
            if op.apply(&always.intervals, &s.intervals) == always.intervals {
                sometimes = None;
            }
        }
        SdkApiConstraints::new(self.sdk_id, always, sometimes)
    }
}

#[derive(Clone, Copy)]
enum Combine {
    And,
    Or,
}

impl Combine {
    fn apply(self, left: &Intervals, right: &Intervals) -> Intervals {
        match self {
            Combine::And => left.and(right),
            Combine::Or => left.or(right),
        }
    }
}

fn split_either(
    constraint: &SdkApiConstraint,
    either: bool,
) -> (Option<&SdkApiConstraint>, Option<&SdkApiConstraint>) {
    if either {
        (None, Some(constraint))
    } else {
        (Some(constraint), None)
    }
}

/// A constraint vector with separate constraints for several SDKs.
///
/// Implication between vectors is only a partial order: two vectors over
/// unrelated SDKs can both fail to be at least the other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiSdkApiConstraint {
    entries: Vec<SdkApiConstraints>,
}

impl MultiSdkApiConstraint {
    /// Creates a vector requiring all of `apis`, or any one of them when `any_of` is set.
    pub fn new(apis: Vec<SdkApiConstraint>, any_of: bool) -> Self {
        Self::from_entries(
            apis.into_iter()
                .map(|api| SdkApiConstraints::with(api.sdk_id, api, any_of))
                .collect(),
        )
    }

    pub fn from_entries(entries: Vec<SdkApiConstraints>) -> Self {
        Self { entries }
    }

    /// Like [`MultiSdkApiConstraint::new`], but collapses zero or one
    /// constraint into a single-SDK constraint.
    pub fn create(mut apis: Vec<SdkApiConstraint>, any_of: bool) -> ApiConstraint {
        match apis.len() {
            0 => SdkApiConstraint::none().into(),
            1 => apis.remove(0).into(),
            _ => ApiConstraint::Multi(Self::new(apis, any_of)),
        }
    }

    pub fn entries(&self) -> &[SdkApiConstraints] {
        &self.entries
    }

    /// The lowest constraint of each SDK.
    pub fn apis(&self) -> impl Iterator<Item = &SdkApiConstraint> + '_ {
        self.entries.iter().map(SdkApiConstraints::lowest)
    }

    fn android_entry(&self) -> Option<&SdkApiConstraints> {
        self.find_sdks(ANDROID_SDK_ID)
    }

    pub fn find_sdks(&self, sdk_id: i32) -> Option<&SdkApiConstraints> {
        self.entries.iter().find(|e| e.sdk_id == sdk_id)
    }

    /// The constraint for `sdk_id`; only certain ones when `certain` is set.
    pub fn find_sdk(&self, sdk_id: i32, certain: bool) -> Option<&SdkApiConstraint> {
        let entry = self.find_sdks(sdk_id)?;
        if certain {
            entry.always.as_ref()
        } else {
            Some(entry.lowest())
        }
    }

    pub fn from_inclusive(&self) -> i32 {
        self.android_entry().map_or(-1, |e| e.lowest().from_inclusive())
    }

    pub fn from_inclusive_minor(&self) -> i32 {
        self.android_entry().map_or(-1, |e| e.lowest().from_inclusive_minor())
    }

    pub fn to_exclusive(&self) -> i32 {
        self.android_entry().map_or(-1, |e| e.highest().to_exclusive())
    }

    pub fn to_exclusive_minor(&self) -> i32 {
        self.android_entry().map_or(-1, |e| e.highest().to_exclusive_minor())
    }

    pub fn is_empty(&self) -> bool {
        self.apis().all(SdkApiConstraint::is_empty)
    }

    pub fn negatable(&self) -> bool {
        self.entries.iter().all(|e| {
            e.always
                .as_ref()
                .or(e.sometimes.as_ref())
                .map_or(true, SdkApiConstraint::negatable)
        })
    }

    pub fn as_non_negatable(&self) -> Self {
        Self::from_entries(
            self.entries
                .iter()
                .map(|e| SdkApiConstraints {
                    sdk_id: e.sdk_id,
                    always: e.always.as_ref().map(SdkApiConstraint::as_non_negatable),
                    sometimes: e.sometimes.as_ref().map(SdkApiConstraint::as_non_negatable),
                })
                .collect(),
        )
    }

    /// Negation swaps certain and optional: `not (a and b)` is `not a or not b`.
    pub fn not(&self) -> Self {
        Self::from_entries(
            self.entries
                .iter()
                .map(|e| SdkApiConstraints {
                    sdk_id: e.sdk_id,
                    always: e.sometimes.as_ref().map(SdkApiConstraint::not),
                    sometimes: e.always.as_ref().map(SdkApiConstraint::not),
                })
                .collect(),
        )
    }

    pub fn includes(&self, level: i32) -> bool {
        self.apis().any(|api| api.includes(level))
    }

    pub fn always_at_least_level(&self, level: i32) -> bool {
        self.apis().any(|api| api.always_at_least_level(level))
    }

    pub fn ever_higher(&self, level: i32) -> bool {
        self.apis().any(|api| api.ever_higher(level))
    }

    pub fn is_at_least(&self, constraint: &ApiConstraint) -> bool {
        debug_assert!(!constraint.is_unknown());
        if constraint.is_empty() {
            return true;
        }
        match constraint {
            ApiConstraint::Sdk(constraint) => self
                .find_sdks(constraint.sdk_id)
                .and_then(|m| m.always.as_ref())
                .is_some_and(|always| always.is_at_least_sdk(constraint)),
            ApiConstraint::Multi(constraint) => {
                let mut any_match = false;
                for need in &constraint.entries {
                    let matching = self.find_sdks(need.sdk_id);
                    if let Some(always_need) = &need.always {
                        let Some(always_have) = matching.and_then(|m| m.always.as_ref()) else {
                            return false;
                        };
                        if !always_have.is_at_least_sdk(always_need) {
                            return false;
                        }
                        any_match = true;
                    } else if let Some(might_need) = &need.sometimes {
                        let Some(have) = matching else { continue };
                        if any_match {
                            continue;
                        }
                        if have_satisfies(have, might_need) {
                            any_match = true;
                        }
                    }
                }

                // An optional SDK the requirement does not mention can't be relied on.
                if self.has_optional_sdk_outside(constraint) {
                    return false;
                }
                any_match
            }
        }
    }

    fn has_optional_sdk_outside(&self, other: &MultiSdkApiConstraint) -> bool {
        self.entries
            .iter()
            .any(|e| e.sometimes.is_some() && other.find_sdks(e.sdk_id).is_none())
    }

    pub fn always_at_least(&self, min_sdk: &ApiConstraint) -> bool {
        match min_sdk {
            ApiConstraint::Sdk(min_sdk) => self
                .find_sdk(min_sdk.sdk_id, false)
                .is_some_and(|sdk| sdk.always_at_least_sdk(min_sdk)),
            ApiConstraint::Multi(min_sdk) => self.apis().any(|api| {
                min_sdk
                    .find_sdk(api.sdk_id, false)
                    .is_some_and(|matching| api.always_at_least_sdk(matching))
            }),
        }
    }

    pub fn first_missing(&self, requirement: &ApiConstraint) -> Option<SdkApiConstraint> {
        if requirement.is_empty() {
            return None;
        }
        match requirement {
            ApiConstraint::Sdk(requirement) => {
                let satisfied = self
                    .find_sdks(requirement.sdk_id)
                    .and_then(|m| m.always.as_ref())
                    .is_some_and(|always| always.is_at_least_sdk(requirement));
                (!satisfied).then(|| requirement.clone())
            }
            ApiConstraint::Multi(requirement) => {
                let mut any_match = false;
                let mut first_missing: Option<&SdkApiConstraint> = None;
                for need in &requirement.entries {
                    let sdk_match = self.find_sdks(need.sdk_id);
                    let needed = need.lowest();
                    let matching = sdk_match.filter(|m| !needed.is_at_least_sdk(m.highest()));

                    if let Some(always_need) = &need.always {
                        match sdk_match.and_then(|m| m.always.as_ref()) {
                            Some(always_have) if always_have.is_at_least_sdk(always_need) => {
                                any_match = true;
                            }
                            _ => return Some(always_need.clone()),
                        }
                    } else if let Some(might_need) = &need.sometimes {
                        if matching.is_none() && first_missing.is_none() {
                            first_missing = Some(might_need);
                        }
                        if any_match {
                            continue;
                        }
                        let Some(have) = matching else { continue };
                        if have_satisfies(have, might_need) {
                            any_match = true;
                        } else if first_missing.is_none() {
                            first_missing = Some(might_need);
                        }
                    }
                }

                if self.has_optional_sdk_outside(requirement) || !any_match {
                    return first_missing.cloned();
                }
                None
            }
        }
    }

    pub fn or(&self, other: &ApiConstraint) -> ApiConstraint {
        match other {
            ApiConstraint::Sdk(other) => other.or(&ApiConstraint::Multi(self.clone())),
            ApiConstraint::Multi(other) => {
                let mut entries: Vec<SdkApiConstraints> = self
                    .entries
                    .iter()
                    .map(|entry| match other.find_sdks(entry.sdk_id) {
                        Some(matching) => matching.or(entry),
                        None => entry.clone(),
                    })
                    .collect();
                entries.extend(
                    other
                        .entries
                        .iter()
                        .filter(|e| self.find_sdks(e.sdk_id).is_none())
                        .cloned(),
                );
                ApiConstraint::Multi(Self::from_entries(entries))
            }
        }
    }

    pub fn and(&self, other: &ApiConstraint) -> ApiConstraint {
        match other {
            ApiConstraint::Sdk(other) => other.and(&ApiConstraint::Multi(self.clone())).into(),
            ApiConstraint::Multi(other) => {
                let list = self
                    .apis()
                    .filter_map(|api| {
                        other.find_sdk(api.sdk_id, false).map(|matching| {
                            SdkApiConstraint::new(api.intervals.and(&matching.intervals), api.sdk_id)
                        })
                    })
                    .collect();
                Self::create(list, false)
            }
        }
    }

    pub fn to_string_with(&self, registry: Option<&ExtensionSdkRegistry>) -> String {
        let and_items: Vec<String> = self
            .entries
            .iter()
            .filter_map(|e| e.always.as_ref())
            .map(|c| c.to_string_with(registry))
            .collect();
        let or_items: Vec<String> = self
            .entries
            .iter()
            .filter_map(|e| e.sometimes.as_ref())
            .map(|c| c.to_string_with(registry))
            .collect();
        let and_string = and_items.join(" and ");
        let or_string = or_items.join(" or ");
        match (and_items.is_empty(), or_items.len()) {
            (true, _) => or_string,
            (false, 0) => and_string,
            (false, 1) => format!("{and_string} and optionally {or_string}"),
            (false, _) => format!("{and_string} and any of ({or_string})"),
        }
    }
}

fn have_satisfies(have: &SdkApiConstraints, need: &SdkApiConstraint) -> bool {
    have.always.as_ref().is_some_and(|a| a.is_at_least_sdk(need))
        || have.sometimes.as_ref().is_some_and(|s| s.is_at_least_sdk(need))
}

impl fmt::Display for MultiSdkApiConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(None))
    }
}

/// A constraint on API levels, either for a single SDK or a vector over several.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiConstraint {
    Sdk(SdkApiConstraint),
    Multi(MultiSdkApiConstraint),
}

impl From<SdkApiConstraint> for ApiConstraint {
    fn from(constraint: SdkApiConstraint) -> Self {
        ApiConstraint::Sdk(constraint)
    }
}

impl From<MultiSdkApiConstraint> for ApiConstraint {
    fn from(constraint: MultiSdkApiConstraint) -> Self {
        ApiConstraint::Multi(constraint)
    }
}

impl ApiConstraint {
    pub fn none() -> Self {
        SdkApiConstraint::none().into()
    }

    pub fn unknown() -> Self {
        SdkApiConstraint::unknown().into()
    }

    pub fn all() -> Self {
        SdkApiConstraint::all().into()
    }

    /// "At least `level`" for the given SDK; -1 gives [`ApiConstraint::unknown`].
    pub fn get(level: i32, sdk_id: i32) -> Self {
        if level == -1 {
            Self::unknown()
        } else {
            at_least_in(level, sdk_id)
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ApiConstraint::Sdk(c) => c.is_empty(),
            ApiConstraint::Multi(c) => c.is_empty(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ApiConstraint::Sdk(c) if c.is_unknown())
    }

    pub fn from_inclusive(&self) -> i32 {
        match self {
            ApiConstraint::Sdk(c) => c.from_inclusive(),
            ApiConstraint::Multi(c) => c.from_inclusive(),
        }
    }

    pub fn from_inclusive_minor(&self) -> i32 {
        match self {
            ApiConstraint::Sdk(c) => c.from_inclusive_minor(),
            ApiConstraint::Multi(c) => c.from_inclusive_minor(),
        }
    }

    pub fn to_exclusive(&self) -> i32 {
        match self {
            ApiConstraint::Sdk(c) => c.to_exclusive(),
            ApiConstraint::Multi(c) => c.to_exclusive(),
        }
    }

    pub fn to_exclusive_minor(&self) -> i32 {
        match self {
            ApiConstraint::Sdk(c) => c.to_exclusive_minor(),
            ApiConstraint::Multi(c) => c.to_exclusive_minor(),
        }
    }

    /// Lowest Android API level this constraint allows.
    pub fn min_level(&self) -> i32 {
        self.from_inclusive()
    }

    /// Exclusive upper Android API level.
    pub fn max_level(&self) -> i32 {
        self.to_exclusive()
    }

    /// Is this constraint at least as high as `other`, so that code
    /// requiring `other` can be called?
    pub fn is_at_least(&self, other: &ApiConstraint) -> bool {
        match self {
            ApiConstraint::Sdk(c) => c.is_at_least(other),
            ApiConstraint::Multi(c) => c.is_at_least(other),
        }
    }

    /// The first constraint in `requirement` not satisfied by this one, if any.
    pub fn first_missing(&self, requirement: &ApiConstraint) -> Option<SdkApiConstraint> {
        match self {
            ApiConstraint::Sdk(c) => c.first_missing(requirement),
            ApiConstraint::Multi(c) => c.first_missing(requirement),
        }
    }

    pub fn includes(&self, level: i32) -> bool {
        match self {
            ApiConstraint::Sdk(c) => c.includes(level),
            ApiConstraint::Multi(c) => c.includes(level),
        }
    }

    pub fn always_at_least(&self, min_sdk: &ApiConstraint) -> bool {
        match self {
            ApiConstraint::Sdk(c) => c.always_at_least(min_sdk),
            ApiConstraint::Multi(c) => c.always_at_least(min_sdk),
        }
    }

    pub fn always_at_least_level(&self, level: i32) -> bool {
        match self {
            ApiConstraint::Sdk(c) => c.always_at_least_level(level),
            ApiConstraint::Multi(c) => c.always_at_least_level(level),
        }
    }

    pub fn ever_higher(&self, level: i32) -> bool {
        match self {
            ApiConstraint::Sdk(c) => c.ever_higher(level),
            ApiConstraint::Multi(c) => c.ever_higher(level),
        }
    }

    pub fn negatable(&self) -> bool {
        match self {
            ApiConstraint::Sdk(c) => c.negatable(),
            ApiConstraint::Multi(c) => c.negatable(),
        }
    }

    pub fn as_non_negatable(&self) -> ApiConstraint {
        match self {
            ApiConstraint::Sdk(c) => c.as_non_negatable().into(),
            ApiConstraint::Multi(c) => c.as_non_negatable().into(),
        }
    }

    /// Complement of this constraint; `!constraint` for borrowed values.
    pub fn negate(&self) -> ApiConstraint {
        match self {
            ApiConstraint::Sdk(c) => c.not().into(),
            ApiConstraint::Multi(c) => c.not().into(),
        }
    }

    pub fn or(&self, other: &ApiConstraint) -> ApiConstraint {
        match self {
            ApiConstraint::Sdk(c) => c.or(other),
            ApiConstraint::Multi(c) => c.or(other),
        }
    }

    pub fn and(&self, other: &ApiConstraint) -> ApiConstraint {
        match self {
            ApiConstraint::Sdk(c) => c.and(other).into(),
            ApiConstraint::Multi(c) => c.and(other),
        }
    }

    /// SDK id of a single-SDK constraint, -1 for a vector.
    pub fn sdk_id(&self) -> i32 {
        match self {
            ApiConstraint::Sdk(c) => c.sdk_id(),
            ApiConstraint::Multi(_) => -1,
        }
    }

    /// One constraint per SDK.
    pub fn constraints(&self) -> Vec<SdkApiConstraint> {
        match self {
            ApiConstraint::Sdk(c) => vec![c.clone()],
            ApiConstraint::Multi(c) => c.apis().cloned().collect(),
        }
    }

    pub fn find_sdk(&self, sdk_id: i32, certain: bool) -> Option<&SdkApiConstraint> {
        match self {
            ApiConstraint::Sdk(c) => c.find_sdk(sdk_id),
            ApiConstraint::Multi(c) => c.find_sdk(sdk_id, certain),
        }
    }

    pub fn min_string(&self) -> String {
        match self {
            ApiConstraint::Sdk(c) => c.min_string(),
            ApiConstraint::Multi(c) => c
                .android_entry()
                .map(|e| e.lowest().min_string())
                .unwrap_or_else(|| "-1".to_string()),
        }
    }

    pub fn to_string_with(&self, registry: Option<&ExtensionSdkRegistry>) -> String {
        match self {
            ApiConstraint::Sdk(c) => c.to_string_with(registry),
            ApiConstraint::Multi(c) => c.to_string_with(registry),
        }
    }

    /// Combines two constraints known to hold at the same time, such as an
    /// outer and an inner version check.
    ///
    /// With `either` set, constraints for different SDKs are recorded as
    /// alternatives instead of requirements.
    pub fn max(api1: &ApiConstraint, api2: &ApiConstraint, either: bool) -> ApiConstraint {
        if api1.is_empty() || api2.is_empty() {
            return Self::none();
        }
        match (api1, api2) {
            (ApiConstraint::Sdk(a), ApiConstraint::Sdk(b)) => {
                if a.sdk_id == b.sdk_id {
                    SdkApiConstraint::new(a.intervals.and(&b.intervals), a.sdk_id).into()
                } else {
                    MultiSdkApiConstraint::from_entries(vec![
                        SdkApiConstraints::with(a.sdk_id, a.clone(), either),
                        SdkApiConstraints::with(b.sdk_id, b.clone(), either),
                    ])
                    .into()
                }
            }
            (ApiConstraint::Sdk(_), ApiConstraint::Multi(_)) => Self::max(api2, api1, either),
            (ApiConstraint::Multi(a), ApiConstraint::Sdk(b)) => {
                let mut entries = a.entries.clone();
                match entries.iter_mut().find(|e| e.sdk_id == b.sdk_id) {
                    Some(entry) => *entry = entry.and_with(b, either),
                    None => entries.push(SdkApiConstraints::with(b.sdk_id, b.clone(), either)),
                }
                MultiSdkApiConstraint::from_entries(entries).into()
            }
            (ApiConstraint::Multi(a), ApiConstraint::Multi(b)) => {
                let mut entries: Vec<SdkApiConstraints> = a
                    .entries
                    .iter()
                    .map(|have| match b.find_sdks(have.sdk_id) {
                        Some(matching) => have.and(matching),
                        None => have.clone(),
                    })
                    .collect();
                entries.extend(
                    b.entries
                        .iter()
                        .filter(|e| a.find_sdks(e.sdk_id).is_none())
                        .cloned(),
                );
                MultiSdkApiConstraint::from_entries(entries).into()
            }
        }
    }

    /// [`ApiConstraint::max`] where either side may be absent.
    pub fn max_opt(
        api1: Option<&ApiConstraint>,
        api2: Option<&ApiConstraint>,
        either: bool,
    ) -> Option<ApiConstraint> {
        match (api1, api2) {
            (Some(a), Some(b)) => Some(Self::max(a, b, either)),
            (Some(a), None) => Some(a.clone()),
            (None, b) => b.cloned(),
        }
    }

    /// Parses a descriptor such as `0:34,1000000:4` (SDK id and minimum
    /// level pairs) into an all-of or any-of vector.
    pub fn parse_descriptor(descriptor: &str, any_of: bool) -> Result<ApiConstraint, ConstraintError> {
        let invalid = || ConstraintError::InvalidDescriptor(descriptor.to_string());
        let mut apis = Vec::new();
        for part in descriptor.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (sdk, level) = part.split_once(':').ok_or_else(invalid)?;
            let sdk_id: i32 = sdk.trim().parse().map_err(|_| invalid())?;
            let level: ApiLevel = level.parse()?;
            let constraint = try_at_least(level, sdk_id)?;
            apis.push(constraint);
        }
        if apis.is_empty() {
            return Err(invalid());
        }
        Ok(MultiSdkApiConstraint::new(apis, any_of).into())
    }

    /// Inverse of [`ApiConstraint::parse_descriptor`], listing the minimum
    /// level of each SDK.
    pub fn describe(&self) -> String {
        match self {
            ApiConstraint::Sdk(c) => format!("{}:{}", c.sdk_id, c.min_string()),
            ApiConstraint::Multi(c) => c
                .apis()
                .map(|api| format!("{}:{}", api.sdk_id, api.min_string()))
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

impl fmt::Display for ApiConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiConstraint::Sdk(c) => fmt::Display::fmt(c, f),
            ApiConstraint::Multi(c) => fmt::Display::fmt(c, f),
        }
    }
}

impl Not for ApiConstraint {
    type Output = ApiConstraint;

    fn not(self) -> ApiConstraint {
        self.negate()
    }
}

impl Not for &ApiConstraint {
    type Output = ApiConstraint;

    fn not(self) -> ApiConstraint {
        self.negate()
    }
}

impl BitAnd for ApiConstraint {
    type Output = ApiConstraint;

    fn bitand(self, rhs: ApiConstraint) -> ApiConstraint {
        self.and(&rhs)
    }
}

impl BitAnd for &ApiConstraint {
    type Output = ApiConstraint;

    fn bitand(self, rhs: &ApiConstraint) -> ApiConstraint {
        self.and(rhs)
    }
}

impl BitOr for ApiConstraint {
    type Output = ApiConstraint;

    fn bitor(self, rhs: ApiConstraint) -> ApiConstraint {
        self.or(&rhs)
    }
}

impl BitOr for &ApiConstraint {
    type Output = ApiConstraint;

    fn bitor(self, rhs: &ApiConstraint) -> ApiConstraint {
        self.or(rhs)
    }
}

// Factories. Plain levels cover every minor version of that level; dotted
// levels start or stop at that exact minor version.

fn sdk(intervals: Intervals, sdk_id: i32) -> ApiConstraint {
    SdkApiConstraint::new(intervals, sdk_id).into()
}

/// `level` or higher, on Android.
pub fn at_least(level: impl Into<ApiLevel>) -> ApiConstraint {
    at_least_in(level, ANDROID_SDK_ID)
}

pub fn at_least_in(level: impl Into<ApiLevel>, sdk_id: i32) -> ApiConstraint {
    let level = level.into();
    sdk(Intervals::at_least(level.major(), level.minor()), sdk_id)
}

/// Checked variant of [`at_least_in`] for untrusted input.
pub fn try_at_least(level: ApiLevel, sdk_id: i32) -> Result<SdkApiConstraint, ConstraintError> {
    let from = MajorMinor::checked(level.major(), level.minor())
        .ok_or_else(|| ConstraintError::InvalidApiLevel(level.to_string()))?;
    Ok(SdkApiConstraint::new(
        Intervals::span(from, MajorMinor::INFINITY),
        sdk_id,
    ))
}

/// Strictly above `level`.
pub fn above(level: impl Into<ApiLevel>) -> ApiConstraint {
    above_in(level, ANDROID_SDK_ID)
}

pub fn above_in(level: impl Into<ApiLevel>, sdk_id: i32) -> ApiConstraint {
    let level = level.into();
    if level.is_dotted() {
        let from = MajorMinor::new(level.major(), level.minor()).next_minor();
        sdk(Intervals::span(from, MajorMinor::INFINITY), sdk_id)
    } else {
        sdk(Intervals::at_least(level.major() + 1, 0), sdk_id)
    }
}

/// Strictly below `level`.
pub fn below(level: impl Into<ApiLevel>) -> ApiConstraint {
    below_in(level, ANDROID_SDK_ID)
}

pub fn below_in(level: impl Into<ApiLevel>, sdk_id: i32) -> ApiConstraint {
    let level = level.into();
    sdk(Intervals::below(level.major(), level.minor()), sdk_id)
}

/// `level` or lower.
pub fn at_most(level: impl Into<ApiLevel>) -> ApiConstraint {
    at_most_in(level, ANDROID_SDK_ID)
}

pub fn at_most_in(level: impl Into<ApiLevel>, sdk_id: i32) -> ApiConstraint {
    let level = level.into();
    if level.is_dotted() {
        let to = MajorMinor::new(level.major(), level.minor()).next_minor();
        sdk(Intervals::span(MajorMinor::ZERO, to), sdk_id)
    } else {
        sdk(Intervals::at_most(level.major()), sdk_id)
    }
}

/// Just `level`.
pub fn exactly(level: impl Into<ApiLevel>) -> ApiConstraint {
    exactly_in(level, ANDROID_SDK_ID)
}

pub fn exactly_in(level: impl Into<ApiLevel>, sdk_id: i32) -> ApiConstraint {
    let level = level.into();
    if level.is_dotted() {
        sdk(Intervals::exactly_minor(level.major(), level.minor()), sdk_id)
    } else {
        sdk(Intervals::exactly(level.major()), sdk_id)
    }
}

/// Anything except `level`.
pub fn not_level(level: impl Into<ApiLevel>) -> ApiConstraint {
    not_level_in(level, ANDROID_SDK_ID)
}

pub fn not_level_in(level: impl Into<ApiLevel>, sdk_id: i32) -> ApiConstraint {
    exactly_in(level, sdk_id).not()
}

/// `[from, to)`; empty when `to` is not above `from`.
pub fn range(from_inclusive: impl Into<ApiLevel>, to_exclusive: impl Into<ApiLevel>) -> ApiConstraint {
    range_in(from_inclusive, to_exclusive, ANDROID_SDK_ID)
}

pub fn range_in(
    from_inclusive: impl Into<ApiLevel>,
    to_exclusive: impl Into<ApiLevel>,
    sdk_id: i32,
) -> ApiConstraint {
    let from = from_inclusive.into();
    let to = to_exclusive.into();
    sdk(
        Intervals::range_minor(from.major(), from.minor(), to.major(), to.minor()),
        sdk_id,
    )
}
