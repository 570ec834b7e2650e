/// An 8-bit RGBA vertex color.
///
/// ```
/// use shapekit_geometry::Color32;
///
/// let shadow = Color32::from_rgba(0, 0, 0, 120);
/// let faded = shadow.transparent();
/// assert_eq!(faded.a, 0);
/// ```
///
/// The struct is `#[repr(C)]` and implements `bytemuck::Pod`, matching the
/// `color` attribute of [`UiVertex`](crate::UiVertex).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color32 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color32 {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
    pub const TRANSPARENT: Color32 = Color32::from_rgba(0, 0, 0, 0);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from a `0xRRGGBB` hex code with full opacity.
    pub const fn from_hex(hex: u32) -> Self {
        Self::from_rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Create a color from `f32` components in `0.0..=1.0`.
    pub fn from_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
        let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::from_rgba(to_u8(r), to_u8(g), to_u8(b), to_u8(a))
    }

    /// Same color with alpha forced to 0. Used for the outer edge of fade rings.
    #[inline]
    pub const fn transparent(self) -> Self {
        Self { a: 0, ..self }
    }

    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color32 {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[u8; 4]> for Color32 {
    fn from(c: [u8; 4]) -> Self {
        Self::from_rgba(c[0], c[1], c[2], c[3])
    }
}

impl From<Color32> for [u8; 4] {
    fn from(c: Color32) -> Self {
        c.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(Color32::from_hex(0xFF8800), Color32::from_rgb(255, 136, 0));
    }

    #[test]
    fn test_from_f32_clamps() {
        assert_eq!(
            Color32::from_f32(2.0, -1.0, 0.5, 1.0),
            Color32::from_rgba(255, 0, 128, 255)
        );
    }
}
