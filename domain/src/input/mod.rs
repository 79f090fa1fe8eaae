//! User submission value objects.
//!
//! - [`UserInput`]: the feelings text plus an optional screenshot
//! - [`ImageAttachment`]: decoded image bytes tagged with their MIME type

mod image;
mod user_input;

pub use image::{
    ImageAttachment, SUPPORTED_IMAGE_MIME_TYPES, encode_base64, extract_base64_data,
    is_supported_image_mime,
};
pub use user_input::UserInput;
