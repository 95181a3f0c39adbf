//! RGB color values and histogram entries.

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// An opaque 8-bit RGB color.
///
/// Two colors are equal iff all three channels match. Colors order by
/// [`weight`](Color::weight) first, then by channel, so that sorting a set of
/// colors is deterministic even when two of them weigh the same.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Creates a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Sum of the three channels.
    ///
    /// Not colorimetrically meaningful, but enough to tell the darker of two
    /// colors from the lighter one.
    #[inline]
    pub fn weight(&self) -> u16 {
        self.r as u16 + self.g as u16 + self.b as u16
    }
}

impl Ord for Color {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight()
            .cmp(&other.weight())
            .then_with(|| (self.r, self.g, self.b).cmp(&(other.r, other.g, other.b)))
    }
}

impl PartialOrd for Color {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(px: image::Rgb<u8>) -> Self {
        let [r, g, b] = px.0;
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

// Hex strings read better than channel objects in JSON reports
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One entry of a color histogram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ColorCount {
    /// The color.
    pub color: Color,
    /// How many pixels have it.
    pub count: usize,
}
