mod utils;

use smart_leds::RGB8;

pub use utils::{BLACK, blend_colors, dim};

pub type Rgb = RGB8;
