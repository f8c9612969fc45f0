//! Mbed TLS test cases and `.data` files.
//!
//! A [`TestCase`] is built incrementally by a generator script and then
//! written as one paragraph of a `.data` file. [`write_data_file`] writes a
//! whole file, with the usual header and trailer.

mod error;
pub use error::{DataResult, Error};

mod data_file;
pub use data_file::{default_caller, write_data, write_data_file};

mod test_case;
pub use test_case::{hex_string, TestCase};
