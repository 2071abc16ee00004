//! Location code → climate class and plant-hardiness class.
//!
//! Both classifications are coarse approximations keyed on the leading digits
//! of a postal-style code. Neither function fails: malformed input degrades to
//! `ClimateClass::Unknown` and the lowest hardiness band.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseHardinessError;

/// Codes shorter than this are left unresolved.
pub const MIN_RESOLVABLE_LEN: usize = 5;

/// Coarse climate classification derived from a location code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClimateClass {
    Tropical,
    Subtropical,
    Temperate,
    Continental,
    Arid,
    Unknown,
}

impl ClimateClass {
    pub const ALL: [ClimateClass; 6] = [
        ClimateClass::Tropical,
        ClimateClass::Subtropical,
        ClimateClass::Temperate,
        ClimateClass::Continental,
        ClimateClass::Arid,
        ClimateClass::Unknown,
    ];
}

impl fmt::Display for ClimateClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Half-zone split inside a hardiness zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Subzone {
    A,
    B,
}

/// Plant-hardiness class such as `7b`. Serialized as its string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct HardinessClass {
    pub zone: u8,
    pub subzone: Subzone,
}

impl HardinessClass {
    pub const fn new(zone: u8, subzone: Subzone) -> Self {
        Self { zone, subzone }
    }

    /// The class every malformed or empty code falls into (`3a`).
    pub fn lowest_band() -> Self {
        resolve_hardiness("")
    }
}

impl fmt::Display for HardinessClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sub = match self.subzone {
            Subzone::A => 'a',
            Subzone::B => 'b',
        };
        write!(f, "{}{}", self.zone, sub)
    }
}

impl FromStr for HardinessClass {
    type Err = ParseHardinessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || ParseHardinessError(s.to_string());
        let subzone = match s.chars().last() {
            Some('a' | 'A') => Subzone::A,
            Some('b' | 'B') => Subzone::B,
            _ => return Err(err()),
        };
        let digits = &s[..s.len() - 1];
        let zone = digits.parse::<u8>().map_err(|_| err())?;
        Ok(Self { zone, subzone })
    }
}

impl From<HardinessClass> for String {
    fn from(h: HardinessClass) -> Self {
        h.to_string()
    }
}

impl TryFrom<String> for HardinessClass {
    type Error = ParseHardinessError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Fully classified location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationProfile {
    pub code: String,
    /// False when the code was too short to trigger resolution.
    pub resolved: bool,
    pub climate: ClimateClass,
    pub hardiness: HardinessClass,
}

/// Map the leading digit of `code` to a climate class.
pub fn resolve_climate(code: &str) -> ClimateClass {
    match code.chars().next() {
        Some('0' | '1') => ClimateClass::Continental,
        Some('2' | '3') => ClimateClass::Subtropical,
        Some('4' | '5') => ClimateClass::Continental,
        Some('6' | '7') => ClimateClass::Arid,
        Some('8' | '9') => ClimateClass::Temperate,
        _ => ClimateClass::Unknown,
    }
}

/// Leading digit `i` of `code`, or 0 when missing or non-numeric.
fn digit_at(code: &str, i: usize) -> u32 {
    code.chars().nth(i).and_then(|c| c.to_digit(10)).unwrap_or(0)
}

/// Unrounded zone value for the two leading digits.
///
/// Five bands over the first digit, each with its own base offset, shifted by
/// up to two zones from the second digit.
fn base_zone(d0: u32, d1: u32) -> f64 {
    let adj = (d1 as f64 / 3.0).min(2.0);
    let d0f = d0 as f64;
    match d0 {
        0..=1 => 3.0 + d0f + adj,
        2..=3 => 7.0 + (d0f - 2.0) + adj,
        4..=5 => 4.0 + (d0f - 4.0) + adj,
        6..=7 => 7.0 + (d0f - 6.0) + adj,
        _ => 5.0 + (d0f - 8.0) + adj,
    }
}

/// Map the first two digits of `code` to a hardiness class.
pub fn resolve_hardiness(code: &str) -> HardinessClass {
    let base = base_zone(digit_at(code, 0), digit_at(code, 1));
    // Half-up rounding; base is always positive so f64::round agrees.
    let zone = base.round() as u8;
    let subzone = if base - base.floor() < 0.5 { Subzone::A } else { Subzone::B };
    HardinessClass { zone, subzone }
}

/// Classify `code`, applying the minimum-length trigger.
pub fn resolve_location(code: &str) -> LocationProfile {
    let code = code.trim();
    if code.chars().count() < MIN_RESOLVABLE_LEN {
        tracing::debug!(code, "location code too short, leaving unresolved");
        return LocationProfile {
            code: code.to_string(),
            resolved: false,
            climate: ClimateClass::Unknown,
            hardiness: HardinessClass::lowest_band(),
        };
    }

    let profile = LocationProfile {
        code: code.to_string(),
        resolved: true,
        climate: resolve_climate(code),
        hardiness: resolve_hardiness(code),
    };
    tracing::debug!(
        code,
        climate = %profile.climate,
        hardiness = %profile.hardiness,
        "resolved location"
    );
    profile
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expected hardiness for a fixed set of codes, worked through the band formula.
    const REFERENCE: &[(&str, &str)] = &[
        ("10001", "4a"),
        ("02134", "4b"),
        ("14850", "5a"),
        ("33101", "9a"),
        ("30301", "8a"),
        ("55401", "7b"),
        ("60601", "7a"),
        ("78701", "10a"),
        ("90210", "6a"),
        ("95460", "8b"),
        ("98101", "8a"),
        ("", "3a"),
        ("ab123", "3a"),
    ];

    #[test]
    fn hardiness_matches_reference_table() {
        for &(code, expected) in REFERENCE {
            let got = resolve_hardiness(code).to_string();
            assert_eq!(got, expected, "code {code:?}: expected {expected}, got {got}");
        }
    }

    #[test]
    fn climate_digit_table() {
        let expected = [
            ClimateClass::Continental,
            ClimateClass::Continental,
            ClimateClass::Subtropical,
            ClimateClass::Subtropical,
            ClimateClass::Continental,
            ClimateClass::Continental,
            ClimateClass::Arid,
            ClimateClass::Arid,
            ClimateClass::Temperate,
            ClimateClass::Temperate,
        ];
        for (d, want) in expected.iter().enumerate() {
            let code = format!("{d}0000");
            assert_eq!(resolve_climate(&code), *want, "digit {d}");
        }
    }

    #[test]
    fn non_digit_and_empty_codes_are_unknown() {
        assert_eq!(resolve_climate(""), ClimateClass::Unknown);
        assert_eq!(resolve_climate("x1234"), ClimateClass::Unknown);
        assert_eq!(resolve_climate(" 1234"), ClimateClass::Unknown);
    }

    #[test]
    fn same_leading_digits_give_same_hardiness() {
        for d0 in 0..10 {
            for d1 in 0..10 {
                let a = resolve_hardiness(&format!("{d0}{d1}000"));
                let b = resolve_hardiness(&format!("{d0}{d1}999"));
                let c = resolve_hardiness(&format!("{d0}{d1}"));
                assert_eq!(a, b, "prefix {d0}{d1}");
                assert_eq!(a, c, "prefix {d0}{d1}");
            }
        }
    }

    #[test]
    fn second_digit_adjustment_is_capped_at_two_zones() {
        // d1 = 6..9 all saturate at +2.
        let capped = resolve_hardiness("16000");
        for d1 in 7..10 {
            assert_eq!(resolve_hardiness(&format!("1{d1}000")), capped);
        }
        assert_eq!(capped.to_string(), "6a");
    }

    #[test]
    fn fractional_part_selects_subzone() {
        // 3 + 0 + 2/3 = 3.667 → rounds to 4, fraction ≥ 0.5 → b.
        assert_eq!(resolve_hardiness("02"), HardinessClass::new(4, Subzone::B));
        // 3 + 0 + 1/3 = 3.333 → 3a.
        assert_eq!(resolve_hardiness("01"), HardinessClass::new(3, Subzone::A));
    }

    #[test]
    fn short_codes_stay_unresolved() {
        let p = resolve_location("1000");
        assert!(!p.resolved);
        assert_eq!(p.climate, ClimateClass::Unknown);
        assert_eq!(p.hardiness, HardinessClass::lowest_band());

        let p = resolve_location("10001");
        assert!(p.resolved);
        assert_eq!(p.climate, ClimateClass::Continental);
        assert_eq!(p.hardiness.to_string(), "4a");
    }

    #[test]
    fn hardiness_string_round_trips_through_serde() {
        let h = HardinessClass::new(10, Subzone::A);
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, "\"10a\"");
        let back: HardinessClass = serde_json::from_str(&json).unwrap();
        assert_eq!(back, h);
        assert!("7".parse::<HardinessClass>().is_err());
        assert!("xb".parse::<HardinessClass>().is_err());
    }
}
