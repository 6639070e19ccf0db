pub mod analysis;
pub mod enhance;
pub mod style;

pub use enhance::enhance_prompt;
pub use style::{classify_image_style, ImageStyle};
