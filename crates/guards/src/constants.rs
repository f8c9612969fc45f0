/// PSA hash algorithms and their Mbed TLS 3.6 `MBEDTLS_MD_CAN_` guard.
pub const HASHES_3_6: &[(&str, &str)] = &[
    ("PSA_ALG_MD5", "MBEDTLS_MD_CAN_MD5"),
    ("PSA_ALG_RIPEMD160", "MBEDTLS_MD_CAN_RIPEMD160"),
    ("PSA_ALG_SHA_1", "MBEDTLS_MD_CAN_SHA1"),
    ("PSA_ALG_SHA_224", "MBEDTLS_MD_CAN_SHA224"),
    ("PSA_ALG_SHA_256", "MBEDTLS_MD_CAN_SHA256"),
    ("PSA_ALG_SHA_384", "MBEDTLS_MD_CAN_SHA384"),
    ("PSA_ALG_SHA_512", "MBEDTLS_MD_CAN_SHA512"),
    ("PSA_ALG_SHA3_224", "MBEDTLS_MD_CAN_SHA3_224"),
    ("PSA_ALG_SHA3_256", "MBEDTLS_MD_CAN_SHA3_256"),
    ("PSA_ALG_SHA3_384", "MBEDTLS_MD_CAN_SHA3_384"),
    ("PSA_ALG_SHA3_512", "MBEDTLS_MD_CAN_SHA3_512"),
];

/// PSA key types and their Mbed TLS 3.6 `MBEDTLS_PK_` guard.
pub const PK_MACROS_3_6: &[(&str, &str)] =
    &[("PSA_KEY_TYPE_ECC_PUBLIC_KEY", "MBEDTLS_PK_HAVE_ECC_KEYS")];

pub(crate) fn lookup(table: &[(&str, &'static str)], psa_name: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(name, _)| *name == psa_name)
        .map(|(_, guard)| *guard)
}
