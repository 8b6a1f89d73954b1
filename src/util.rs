/// Numeric conversion helpers.
///
/// This module provides safe functions for converting floating-point values to
/// integers without risking silent truncation. Use these helpers whenever a
/// float has to drive integer logic, such as the factorial loop.
pub mod num;
