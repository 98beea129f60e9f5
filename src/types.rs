use std::fmt;

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

/// Unmultiplied sRGBA color, the value a color picker hands back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const WHITE: Rgba = Rgba([255, 255, 255, 255]);

    #[inline(always)]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    #[inline(always)]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Console form, e.g. `0xff0000ff` for opaque red.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        write!(f, "0x{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

impl From<Rgba> for Color32 {
    fn from(color: Rgba) -> Self {
        let [r, g, b, a] = color.0;
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}
