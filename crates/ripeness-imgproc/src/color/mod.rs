mod gray;
mod hsv;

pub use gray::rgb_from_gray;
pub use hsv::hsv_from_rgb;
