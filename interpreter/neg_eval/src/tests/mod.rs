//! End-to-end tests: whole programs through the public API.
//!
//! Unit coverage lives next to each module; these tests feed complete
//! scripts to [`crate::interpret_str`] and assert on emitted output and
//! on error codes/lines.

mod property_tests;
