//! # Configuration domains of Mbed TLS 3.6.
//!
//! See `transition-guards.md` in Mbed TLS 3.6 for the full description of
//! each domain and of the `MBEDTLS_MD_CAN_` symbols.
use std::fmt;
use std::str::FromStr;

/// The configuration domain a test case belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain36 {
    /// PSA crypto API, guarded by `PSA_WANT_xxx`.
    Psa,
    /// TLS 1.3 code, which always goes through PSA.
    Tls13Only,
    /// X.509, TLS 1.2 and PK code when `MBEDTLS_USE_PSA_CRYPTO` is set.
    UsePsa,
    /// Legacy crypto modules.
    Legacy,
}

impl Domain36 {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain36::Psa => "psa",
            Domain36::Tls13Only => "tls1_3_only",
            Domain36::UsePsa => "use_psa",
            Domain36::Legacy => "legacy",
        }
    }
}

impl fmt::Display for Domain36 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseDomain36Error {
    invalid_value: String,
}

impl fmt::Display for ParseDomain36Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid domain '{}'. Supported values are 'psa', 'tls1_3_only', 'use_psa' or 'legacy'.",
            self.invalid_value
        )
    }
}

impl std::error::Error for ParseDomain36Error {}

impl FromStr for Domain36 {
    type Err = ParseDomain36Error;

    fn from_str(input: &str) -> Result<Domain36, Self::Err> {
        match input.to_ascii_lowercase().replace('-', "_").as_str() {
            "psa" => Ok(Domain36::Psa),
            "tls1_3_only" | "tls13_only" => Ok(Domain36::Tls13Only),
            "use_psa" => Ok(Domain36::UsePsa),
            "legacy" => Ok(Domain36::Legacy),
            _ => Err(ParseDomain36Error {
                invalid_value: input.to_string(),
            }),
        }
    }
}
