//! Property-based tests for tree planning and rendering

mod path_derivation;
