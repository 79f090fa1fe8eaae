//! Turning command-line arguments into a `UserInput`

mod feelings;
mod image_loader;

pub use feelings::{FeelingsSource, read_feelings, read_feelings_from};
pub use image_loader::{ImageLoadError, load_image, mime_type_for_path};
