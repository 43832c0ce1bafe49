/// An RGBA color with 8 bits per channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    /// The red channel.
    pub r: u8,
    /// The green channel.
    pub g: u8,
    /// The blue channel.
    pub b: u8,
    /// The alpha channel.
    pub a: u8,
}

impl Color {
    /// The color of solid cells.
    pub const OCCUPIED: Color = Color::new(255, 0, 0);
    /// The color of paths.
    pub const PATH: Color = Color::new(0, 255, 255);
    /// The color of mesh previews.
    pub const PREVIEW: Color = Color::new(255, 255, 0);

    /// Creates an opaque color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}
