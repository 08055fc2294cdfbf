// src/common/mod.rs

pub mod error;

pub use error::ValidatorError;
