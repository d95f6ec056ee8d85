pub mod constants;
pub mod string_utils;

pub use constants::*;
pub use string_utils::{char_len, collapse_whitespace, safe_truncate_chars, truncate_with_ellipsis};
