pub mod chat;
pub mod image;

pub use chat::chat_reply;
pub use image::{image_reply, plan_image, plan_image_with_style};
