//! Integration tests for planning, deploying and digesting layouts

mod end_to_end;
mod materialize_semantics;
mod test_utils;
mod tree_rendering;
