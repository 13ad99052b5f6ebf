//! Validation of uploaded files before matching or upload.

mod validate;

pub use validate::*;
