// src/items/tests/mod.rs

mod binder_tests;
mod validators_tests;
