//! Value casting, comparison, list-index resolution and color-model
//! conversion for a block-based visual programming runtime.
//!
//! Every block argument passes through these functions before use, so they
//! are total: bad input degrades to a defined default instead of failing.

pub(crate) mod cast;
pub(crate) mod color;
pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod json;
pub(crate) mod list_index;
pub mod math;
pub mod text;
pub(crate) mod unicode;

pub use cast::{compare, compare_ordering, is_int, is_white_space, to_boolean, to_number, to_string};
pub use color::{
    Hsv, Rgb, decimal_to_hex, decimal_to_rgb, hex_to_decimal, hex_to_rgb, hsv_to_rgb, mix_rgb, rgb_to_decimal, rgb_to_hex, rgb_to_hsv,
    to_rgb_color_list, to_rgb_color_object,
};
pub use crate::core::{Value, format_js_number, is_truthy, value_to_number, value_to_string};
pub use error::CastError;
pub use json::stringify;
#[cfg(feature = "std")]
pub use list_index::to_list_index_thread_rng;
pub use list_index::{ListIndex, to_list_index};
