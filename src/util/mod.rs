//! Utility modules

pub mod text;

pub use text::{
    byte_offset, char_len, remove_chars, replace_chars, starts_with_ignore_case, take_chars,
};
