//! psa-testgen crate.

pub mod data {
    pub use psa_testgen_data::*;
}

pub mod guards {
    pub use psa_testgen_guards::*;
}
