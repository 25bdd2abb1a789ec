//! Pagination query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};
use std::convert::Infallible;
use std::str::FromStr;

use crate::domain::stats::DEFAULT_PAGE_LIMIT;

/// Query integer parsed leniently: the leading integer of the value, if any.
///
/// `"3"`, `" 3"`, `"3abc"` and `"3.9"` all read as 3; `"abc"` and `""` read as
/// nothing. Parsing never fails, so bad input falls back to the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LenientInt(pub Option<i64>);

impl FromStr for LenientInt {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim_start();
        let (sign, digits) = match s.as_bytes().first() {
            Some(b'-') => (-1, &s[1..]),
            Some(b'+') => (1, &s[1..]),
            _ => (1, s),
        };

        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());

        // Overflowing values read as nothing rather than wrapping.
        Ok(Self(digits[..end].parse::<i64>().ok().map(|n| sign * n)))
    }
}

/// Pagination query parameters for the stats listing.
///
/// Uses `serde_with` to parse numbers from query strings. Missing, unparseable or
/// zero values take the defaults (page 1, limit 50); other out-of-range values
/// are clamped by the service, not rejected.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<LenientInt>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<LenientInt>,
}

impl PaginationParams {
    /// Returns `(page, limit)` with defaults applied (page 1, limit 50).
    pub fn page_and_limit(&self) -> (i64, i64) {
        (
            or_default(self.page, 1),
            or_default(self.limit, DEFAULT_PAGE_LIMIT),
        )
    }
}

fn or_default(value: Option<LenientInt>, default: i64) -> i64 {
    match value {
        Some(LenientInt(Some(n))) if n != 0 => n,
        _ => default,
    }
}
