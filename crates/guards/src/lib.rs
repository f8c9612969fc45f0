//! PSA feature guard macros.
//!
//! Test cases generated for Mbed TLS 3.6 can't always depend on `PSA_WANT_xxx`
//! symbols: depending on the configuration domain of the test, the legacy
//! `MBEDTLS_MD_CAN_xxx` or `MBEDTLS_PK_HAVE_xxx` symbols must be used instead.
//! Newer trees always use `PSA_WANT_xxx`.

mod error;
pub use error::{Error, GuardResult};

mod build_tree;
pub use build_tree::BuildTree;

mod constants;
pub use constants::{HASHES_3_6, PK_MACROS_3_6};

mod domain;
pub use domain::{Domain36, ParseDomain36Error};

mod macros;
pub use macros::{psa_or_3_6_feature_macro, psa_want_symbol, FeatureGuards};
