/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
///
/// The output surface is configured with premultiplied compositing, so clear
/// colors and shader outputs both follow this convention.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    /// Background of every demo frame: a very dark green.
    pub const DARK_GREEN: Color = Color::from_premul(0.0, 0.05, 0.0, 1.0);

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Converts to the `f64` color wgpu uses for clear values.
    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_green_matches_the_demo_background() {
        let c = Color::DARK_GREEN.to_wgpu();
        assert_eq!(c.r, 0.0);
        assert!((c.g - 0.05).abs() < 1e-7);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 1.0);
    }
}
