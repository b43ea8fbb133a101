use crate::paint::Color;

use super::VertexLayout;

/// Which demo the renderer drives.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Variant {
    /// Gouraud-shaded triangle, no uniforms.
    Static,
    /// Triangle rotated by wall-clock time, drawn at half alpha.
    #[default]
    Rotating,
    /// `Rotating` on a downlevel device, plus a cube-array texture probe.
    CompatProbe,
}

impl Variant {
    /// Whether frames depend on time and so need a uniform block.
    pub fn is_animated(self) -> bool {
        !matches!(self, Variant::Static)
    }
}

/// Renderer configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleConfig {
    pub variant: Variant,
    pub layout: VertexLayout,
    pub clear: Color,
}

impl Default for TriangleConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            layout: VertexLayout::default(),
            clear: Color::DARK_GREEN,
        }
    }
}
