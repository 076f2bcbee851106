use std::str::FromStr;

use plotters::style::{full_palette, RGBColor, MAGENTA};

use crate::error::Error;

/// Color of markers or lines, parsed from a name (`red`) or hex (`#1f77b4`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PlotColor {
    /// Marker color used when none is given.
    pub const DEFAULT_DOT: PlotColor = PlotColor::from_rgb(full_palette::RED);
    /// Line color used when none is given, `#1f77b4`.
    pub const DEFAULT_LINE: PlotColor = PlotColor {
        r: 0x1f,
        g: 0x77,
        b: 0xb4,
    };

    pub const fn from_rgb(color: RGBColor) -> Self {
        let RGBColor(r, g, b) = color;
        Self { r, g, b }
    }

    pub fn rgb(self) -> RGBColor {
        RGBColor(self.r, self.g, self.b)
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

impl FromStr for PlotColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();

        if let Some(hex) = name.strip_prefix('#') {
            return Self::parse_hex(hex).ok_or_else(|| Error::UnknownColor(s.to_owned()));
        }

        let color = match name.as_str() {
            "red" | "r" => full_palette::RED,
            "green" | "g" => full_palette::GREEN,
            "blue" | "b" => full_palette::BLUE,
            "cyan" | "c" => full_palette::CYAN,
            "magenta" | "m" => MAGENTA,
            "yellow" | "y" => full_palette::YELLOW,
            "black" | "k" => full_palette::BLACK,
            "white" | "w" => full_palette::WHITE,
            "orange" => full_palette::ORANGE,
            "purple" => full_palette::PURPLE,
            "pink" => full_palette::PINK,
            "brown" => full_palette::BROWN,
            "gray" | "grey" => full_palette::GREY,
            _ => return Err(Error::UnknownColor(s.to_owned())),
        };

        Ok(Self::from_rgb(color))
    }
}
