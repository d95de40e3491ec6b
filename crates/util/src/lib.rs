//! textdelta-util - seeded test-data generation for the textdelta crates.

pub mod fuzzer;

pub use fuzzer::Fuzzer;
