use crate::constants::{lookup, HASHES_3_6, PK_MACROS_3_6};
use crate::{BuildTree, Domain36, Error, GuardResult};

/// Returns the `PSA_WANT_xxx` symbol associated with a PSA crypto feature.
///
/// `PSA_ALG_SHA_256` gives `PSA_WANT_ALG_SHA_256`.
pub fn psa_want_symbol(name: &str) -> GuardResult<String> {
    match name.strip_prefix("PSA_") {
        Some(rest) => Ok(format!("PSA_WANT_{rest}")),
        None => Err(Error::NotPsaSymbol(name.to_string())),
    }
}

/// Determines the dependency symbol of a PSA identifier.
///
/// Only hashes and some PK symbols are supported, the name must be a
/// `PSA_ALG_xxx` or a `PSA_KEY_TYPE_xxx` found in [`HASHES_3_6`] or
/// [`PK_MACROS_3_6`].
///
/// # Arguments
///
/// * `psa_name` - The PSA identifier.
/// * `domain` - The Mbed TLS 3.6 configuration domain of the test.
/// * `mbedtls_3_6` - Whether the target tree is an Mbed TLS 3.6 one. On any
///   other tree, `PSA_WANT_xxx` is used whatever the domain.
pub fn psa_or_3_6_feature_macro(
    psa_name: &str,
    domain: Domain36,
    mbedtls_3_6: bool,
) -> GuardResult<String> {
    let hash = lookup(HASHES_3_6, psa_name);
    let pk = lookup(PK_MACROS_3_6, psa_name);

    let psa_domain = matches!(domain, Domain36::Psa | Domain36::Tls13Only);
    if (psa_domain || !mbedtls_3_6) && (hash.is_some() || pk.is_some()) {
        return psa_want_symbol(psa_name);
    }

    if domain == Domain36::UsePsa {
        if let Some(guard) = pk {
            return Ok(guard.to_string());
        }
    }

    match hash {
        Some(guard) => Ok(guard.to_string()),
        None => Err(Error::UnknownSymbol {
            name: psa_name.to_string(),
            domain,
        }),
    }
}

/// Resolves feature guards against a single tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureGuards {
    mbedtls_3_6: bool,
}

impl FeatureGuards {
    pub fn new(mbedtls_3_6: bool) -> Self {
        Self { mbedtls_3_6 }
    }

    pub fn is_mbedtls_3_6(&self) -> bool {
        self.mbedtls_3_6
    }

    pub fn resolve(&self, psa_name: &str, domain: Domain36) -> GuardResult<String> {
        let guard = psa_or_3_6_feature_macro(psa_name, domain, self.mbedtls_3_6)?;
        tracing::trace!("{psa_name} in {domain} is guarded by {guard}");
        Ok(guard)
    }
}

impl From<&BuildTree> for FeatureGuards {
    fn from(tree: &BuildTree) -> Self {
        Self::new(tree.is_mbedtls_3_6())
    }
}
