mod rid;

pub use rid::{validate_rid, validate_signed_rid};
