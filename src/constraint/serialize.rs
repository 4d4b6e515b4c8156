// Compact text form of constraints, suitable for caches and baselines.
//
// Interval sets whose bounds are whole levels no higher than 64 are written as a
// lowercase hex bit mask: bit i set means level i + 1 is included, and bit 63
// stands for 64 and everything above it. Other sets are written as ranges
// such as `26.2-30|33-∞`. Extension SDKs append `;<sdk id>`. Vectors are
// written as `{always:sometimes,...}` with an empty field for a missing slot.

use super::api::{ApiConstraint, MultiSdkApiConstraint, SdkApiConstraint, SdkApiConstraints};
use super::extension::ANDROID_SDK_ID;
use super::intervals::{Intervals, MajorMinor, Span};
use super::ConstraintError;

const MASK_BITS: i32 = 64;
const OPEN_ENDED_BIT: u32 = 63;
const INFINITY_TEXT: &str = "∞";

impl Intervals {
    pub fn serialize(&self) -> String {
        if self.is_empty() {
            return "0".to_string();
        }
        if let Some(mask) = self.to_mask() {
            return format!("{mask:x}");
        }
        self.spans()
            .iter()
            .map(serialize_span)
            .collect::<Vec<_>>()
            .join("|")
    }

    pub fn deserialize(s: &str) -> Result<Intervals, ConstraintError> {
        let s = s.trim();
        if s.contains('-') {
            let spans = s
                .split('|')
                .map(|span| deserialize_span(span).ok_or_else(|| invalid(s)))
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(Intervals::from_spans(spans));
        }
        let mask = u64::from_str_radix(s, 16).map_err(|_| invalid(s))?;
        Ok(from_mask(mask))
    }

    fn to_mask(&self) -> Option<u64> {
        let mut mask = 0u64;
        for span in self.spans() {
            let from = span.from;
            if from.minor() != 0 || from.major() > MASK_BITS {
                return None;
            }
            let last_bit = if span.to.is_infinity() {
                OPEN_ENDED_BIT
            } else if span.to.minor() == 0 && span.to.major() <= MASK_BITS {
                (span.to.major() - 2) as u32
            } else {
                return None;
            };
            for bit in (from.major() - 1) as u32..=last_bit {
                mask |= 1 << bit;
            }
        }
        Some(mask)
    }
}

fn from_mask(mask: u64) -> Intervals {
    let mut spans = Vec::new();
    let mut bit = 0u32;
    while bit < 64 {
        if mask & (1 << bit) == 0 {
            bit += 1;
            continue;
        }
        let start = bit;
        while bit < 64 && mask & (1 << bit) != 0 {
            bit += 1;
        }
        let end = bit - 1;
        let from = MajorMinor::new(start as i32 + 1, 0);
        let to = if end == OPEN_ENDED_BIT {
            MajorMinor::INFINITY
        } else {
            MajorMinor::new(end as i32 + 2, 0)
        };
        spans.push(Span { from, to });
    }
    Intervals::from_spans(spans)
}

fn serialize_span(span: &Span) -> String {
    let to = if span.to.is_infinity() {
        INFINITY_TEXT.to_string()
    } else {
        span.to.to_string()
    };
    format!("{}-{}", span.from, to)
}

fn deserialize_span(s: &str) -> Option<Span> {
    let (from, to) = s.split_once('-')?;
    let from = parse_version(from)?;
    let to = if to.trim() == INFINITY_TEXT {
        MajorMinor::INFINITY
    } else {
        parse_version(to)?
    };
    (from < to).then_some(Span { from, to })
}

fn parse_version(s: &str) -> Option<MajorMinor> {
    let s = s.trim();
    match s.split_once('.') {
        Some((major, minor)) => MajorMinor::checked(major.parse().ok()?, minor.parse().ok()?),
        None => MajorMinor::checked(s.parse().ok()?, 0),
    }
}

fn invalid(s: &str) -> ConstraintError {
    ConstraintError::InvalidSerialization(s.to_string())
}

impl SdkApiConstraint {
    pub fn serialize(&self) -> String {
        let intervals = self.intervals().serialize();
        if self.sdk_id() == ANDROID_SDK_ID {
            intervals
        } else {
            format!("{intervals};{}", self.sdk_id())
        }
    }

    pub fn deserialize(s: &str) -> Result<SdkApiConstraint, ConstraintError> {
        match s.split_once(';') {
            Some((intervals, sdk_id)) => {
                let sdk_id = sdk_id.trim().parse().map_err(|_| invalid(s))?;
                Ok(SdkApiConstraint::new(Intervals::deserialize(intervals)?, sdk_id))
            }
            None => Ok(SdkApiConstraint::new(Intervals::deserialize(s)?, ANDROID_SDK_ID)),
        }
    }
}

impl MultiSdkApiConstraint {
    pub fn serialize(&self) -> String {
        let entries: Vec<String> = self
            .entries()
            .iter()
            .map(|e| {
                format!(
                    "{}:{}",
                    e.always.as_ref().map(SdkApiConstraint::serialize).unwrap_or_default(),
                    e.sometimes.as_ref().map(SdkApiConstraint::serialize).unwrap_or_default()
                )
            })
            .collect();
        format!("{{{}}}", entries.join(","))
    }

    pub fn deserialize(s: &str) -> Result<MultiSdkApiConstraint, ConstraintError> {
        let body = s
            .trim()
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or_else(|| invalid(s))?;
        if body.is_empty() {
            return Ok(MultiSdkApiConstraint::from_entries(Vec::new()));
        }
        let mut entries = Vec::new();
        for entry in body.split(',') {
            let (always, sometimes) = entry.split_once(':').ok_or_else(|| invalid(s))?;
            let always = (!always.is_empty())
                .then(|| SdkApiConstraint::deserialize(always))
                .transpose()?;
            let sometimes = (!sometimes.is_empty())
                .then(|| SdkApiConstraint::deserialize(sometimes))
                .transpose()?;
            let sdk_id = match (&always, &sometimes) {
                (Some(c), _) | (None, Some(c)) => c.sdk_id(),
                (None, None) => return Err(invalid(s)),
            };
            entries.push(SdkApiConstraints::new(sdk_id, always, sometimes));
        }
        Ok(MultiSdkApiConstraint::from_entries(entries))
    }
}

impl ApiConstraint {
    /// Serializes this constraint; see [`ApiConstraint::deserialize`].
    pub fn serialize(&self) -> String {
        match self {
            ApiConstraint::Sdk(c) => c.serialize(),
            ApiConstraint::Multi(c) => c.serialize(),
        }
    }

    /// Reads a constraint written by [`ApiConstraint::serialize`].
    pub fn deserialize(s: &str) -> Result<ApiConstraint, ConstraintError> {
        if s.trim_start().starts_with('{') {
            Ok(MultiSdkApiConstraint::deserialize(s)?.into())
        } else {
            Ok(SdkApiConstraint::deserialize(s)?.into())
        }
    }
}
