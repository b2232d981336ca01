//! Chart colors.

use std::fmt;


/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}


impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}


impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}


/// Category palette used by the distribution chart.
pub const PALETTE: [Rgb; 6] = [
    Rgb::new(0xFF, 0x63, 0x84),
    Rgb::new(0x36, 0xA2, 0xEB),
    Rgb::new(0xFF, 0xCE, 0x56),
    Rgb::new(0x4B, 0xC0, 0xC0),
    Rgb::new(0x99, 0x66, 0xFF),
    Rgb::new(0xFF, 0x9F, 0x40),
];

/// Colors of the flowrate, pressure and temperature bars.
pub const PARAMETER_COLORS: [Rgb; 3] = [PALETTE[0], PALETTE[1], PALETTE[2]];


/// Color for the category at `index`, cycling through the palette.
pub fn palette_color(index: usize) -> Rgb {
    PALETTE[index % PALETTE.len()]
}
