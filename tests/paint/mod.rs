//! Paint integration tests.

mod util;

mod blend_test;
mod pattern_test;
mod style_test;
