mod blend;
mod hue;
mod scale;
mod utils;

use smart_leds::RGB8;

pub use blend::blend_colors;
pub use hue::{DEFAULT_HUE_RANGE, HueWheel, hue_to_color};
pub use scale::scale_color;
pub use utils::{rgb_from_u32, rgb_to_u32};

pub type Rgb = RGB8;
