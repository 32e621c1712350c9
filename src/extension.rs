//! Extension-code codec.
//!
//! The directory backend stores extensions as integers in `0..=110`. Codes
//! `100..=110` form a second bank that mirrors `0..=10` on the dial, so the
//! display form distinguishes `"0"` (code 110) from `"00"` (code 100) and
//! single digits (second bank) from zero-padded pairs (first bank).

use crate::errors::{CoreError, ExtensionParseError};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Display string for "no extension assigned".
pub const NO_EXTENSION: &str = "-";

/// Highest valid internal extension code.
pub const MAX_EXTENSION_CODE: u8 = 110;

const SECOND_BANK_BASE: i64 = 100;
const SINGLE_ZERO_CODE: i64 = 110;
const DOUBLE_ZERO_CODE: i64 = 100;

#[derive(Debug, Clone, Copy)]
enum Rendering {
    Placeholder,
    ZeroPadded,
    Fixed(&'static str),
    SecondBank,
}

#[derive(Debug)]
struct Band {
    codes: RangeInclusive<i64>,
    rendering: Rendering,
}

impl Band {
    fn render(&self, code: i64) -> String {
        match self.rendering {
            Rendering::Placeholder => NO_EXTENSION.to_string(),
            Rendering::ZeroPadded => format!("{code:02}"),
            Rendering::Fixed(text) => text.to_string(),
            Rendering::SecondBank => (code - SECOND_BANK_BASE).to_string(),
        }
    }
}

/// Ordered decode table. First matching band wins.
const EXTENSION_BANDS: [Band; 5] = [
    Band {
        codes: 0..=0,
        rendering: Rendering::Placeholder,
    },
    Band {
        codes: 1..=99,
        rendering: Rendering::ZeroPadded,
    },
    Band {
        codes: DOUBLE_ZERO_CODE..=DOUBLE_ZERO_CODE,
        rendering: Rendering::Fixed("00"),
    },
    Band {
        codes: 101..=109,
        rendering: Rendering::SecondBank,
    },
    Band {
        codes: SINGLE_ZERO_CODE..=SINGLE_ZERO_CODE,
        rendering: Rendering::Fixed("0"),
    },
];

/// Renders a raw extension code for display.
///
/// Codes outside `0..=110` are logged and rendered as [`NO_EXTENSION`]; this
/// never fails because it sits on the display path.
pub fn decode_extension(raw: i64) -> String {
    match EXTENSION_BANDS.iter().find(|band| band.codes.contains(&raw)) {
        Some(band) => band.render(raw),
        None => {
            warn!(
                "event=extension_decode module=extension status=invalid code={}",
                raw
            );
            NO_EXTENSION.to_string()
        }
    }
}

/// Parses a user-typed extension into a raw internal code.
///
/// Blank input, `None` and `"-"` mean "no extension" and yield `Ok(0)`.
/// Input that does not start with a number is rejected with
/// [`ExtensionParseError::NotANumber`]. Multi-character numbers pass through
/// unchanged and are not range checked; use [`ExtensionCode::from_str`] when
/// the result must be a valid code.
pub fn encode_extension(input: Option<&str>) -> Result<i64, ExtensionParseError> {
    let input = match input {
        Some(value) if !is_blank(value) => value,
        _ => return Ok(0),
    };

    match input {
        "0" => return Ok(SINGLE_ZERO_CODE),
        "00" => return Ok(DOUBLE_ZERO_CODE),
        _ => {}
    }

    let value = parse_integer_prefix(input)?;
    if input.chars().count() == 1 {
        Ok(value + SECOND_BANK_BASE)
    } else {
        Ok(value)
    }
}

fn is_blank(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed == NO_EXTENSION
}

/// Lenient integer parse: skips leading whitespace, accepts a sign and reads
/// leading decimal digits, ignoring whatever follows them.
fn parse_integer_prefix(input: &str) -> Result<i64, ExtensionParseError> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = rest
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return Err(ExtensionParseError::NotANumber);
    }

    let magnitude: i64 = rest[..end]
        .parse()
        .map_err(|_| ExtensionParseError::Overflow)?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// A validated internal extension code in `0..=110`.
///
/// Ordering follows the numeric code, which is the order the backend uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ExtensionCode(u8);

impl ExtensionCode {
    /// No extension assigned.
    pub const NONE: Self = Self(0);
    pub const MAX: Self = Self(MAX_EXTENSION_CODE);

    pub fn get(self) -> u8 {
        self.0
    }

    /// Every valid code in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=MAX_EXTENSION_CODE).map(Self)
    }
}

impl TryFrom<i64> for ExtensionCode {
    type Error = CoreError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        u8::try_from(raw)
            .ok()
            .filter(|code| *code <= MAX_EXTENSION_CODE)
            .map(Self)
            .ok_or(CoreError::ExtensionOutOfRange(raw))
    }
}

impl From<ExtensionCode> for i64 {
    fn from(code: ExtensionCode) -> Self {
        i64::from(code.0)
    }
}

impl fmt::Display for ExtensionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&decode_extension(i64::from(self.0)))
    }
}

/// Strict form-submission parse: like [`encode_extension`], but malformed
/// input and codes outside `0..=110` are both errors.
impl FromStr for ExtensionCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = encode_extension(Some(s)).map_err(|err| CoreError::invalid_extension(s, err))?;
        Self::try_from(raw)
    }
}
