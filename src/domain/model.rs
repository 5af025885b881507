use crate::utils::error::{KitError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An sRGB color. Channels are `u8`, so the 0-255 invariant holds by
/// construction and all arithmetic on channels saturates at the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB`, `RRGGBB`, `#RGB`, or `RGB` (case-insensitive).
    /// Shorthand digits expand by duplication, so `#abc` means `#aabbcc`.
    pub fn from_hex(input: &str) -> Result<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);

        if !digits.is_ascii() {
            return Err(KitError::ColorFormat {
                input: input.to_string(),
                reason: "contains non-ASCII characters".to_string(),
            });
        }

        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            n => {
                return Err(KitError::ColorFormat {
                    input: input.to_string(),
                    reason: format!("expected 3 or 6 hex digits, got {}", n),
                })
            }
        };

        let channel = |slice: &str| {
            u8::from_str_radix(slice, 16).map_err(|_| KitError::ColorFormat {
                input: input.to_string(),
                reason: format!("'{}' is not a hex digit pair", slice),
            })
        };

        Ok(Self {
            r: channel(&expanded[0..2])?,
            g: channel(&expanded[2..4])?,
            b: channel(&expanded[4..6])?,
        })
    }

    pub fn lighten(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_add(amount),
            g: self.g.saturating_add(amount),
            b: self.b.saturating_add(amount),
        }
    }

    pub fn darken(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_sub(amount),
            g: self.g.saturating_sub(amount),
            b: self.b.saturating_sub(amount),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = KitError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// WCAG 2.1 conformance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WcagLevel {
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

impl WcagLevel {
    /// Minimum contrast ratio for this level.
    /// AA: 4.5 normal / 3.0 large. AAA: 7.0 normal / 4.5 large.
    pub fn required_ratio(self, large_text: bool) -> f64 {
        match (self, large_text) {
            (Self::Aa, false) => 4.5,
            (Self::Aa, true) => 3.0,
            (Self::Aaa, false) => 7.0,
            (Self::Aaa, true) => 4.5,
        }
    }
}

impl FromStr for WcagLevel {
    type Err = KitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "AA" => Ok(Self::Aa),
            "AAA" => Ok(Self::Aaa),
            other => Err(KitError::ConfigError {
                message: format!("Unknown WCAG level '{}', expected AA or AAA", other),
            }),
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aa => write!(f, "AA"),
            Self::Aaa => write!(f, "AAA"),
        }
    }
}

/// Outcome of a contrast check. Both level verdicts are always populated;
/// `passes` selects the one that counts for a given caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContrastResult {
    pub foreground: Rgb,
    pub background: Rgb,
    pub ratio: f64,
    pub meets_aa: bool,
    pub meets_aaa: bool,
}

impl ContrastResult {
    pub fn passes(&self, level: WcagLevel) -> bool {
        match level {
            WcagLevel::Aa => self.meets_aa,
            WcagLevel::Aaa => self.meets_aaa,
        }
    }
}

/// Best-effort remediation outcome. `converged` is false when the iteration
/// budget ran out before the target ratio was reached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustedColor {
    pub color: Rgb,
    pub converged: bool,
    pub ratio: f64,
}

/// Five-point tint/shade ramp around a base color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorRamp {
    pub lighter: Rgb,
    pub light: Rgb,
    pub base: Rgb,
    pub dark: Rgb,
    pub darker: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateSource {
    #[serde(rename = "user-provided")]
    UserProvided,
    #[serde(rename = "template-based")]
    TemplateBased,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubdomainCandidate {
    pub label: String,
    pub relevance_score: f64,
    pub source: CandidateSource,
}

/// All applicable validation errors, reported together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelValidation {
    pub valid: bool,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubdomainCheckResult {
    pub requested: String,
    pub available: bool,
    pub suggestions: Vec<String>,
    pub reserved: bool,
    pub validation_errors: Vec<String>,
}
