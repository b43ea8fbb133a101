use bytemuck::{Pod, Zeroable};

/// Clip-space position (x, y) with an RGB color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ColorVertex2 {
    pub position: [f32; 2],
    pub color: [f32; 3],
}

impl ColorVertex2 {
    const ATTRS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x3];
}

/// Homogeneous clip-space position with an RGBA color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ColorVertex4 {
    pub position: [f32; 4],
    pub color: [f32; 4],
}

impl ColorVertex4 {
    const ATTRS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x4];
}

/// Top red, bottom-left green, bottom-right blue.
pub static TRIANGLE_POS2: [ColorVertex2; 3] = [
    ColorVertex2 { position: [0.0, 1.0], color: [1.0, 0.0, 0.0] },
    ColorVertex2 { position: [-1.0, -1.0], color: [0.0, 1.0, 0.0] },
    ColorVertex2 { position: [1.0, -1.0], color: [0.0, 0.0, 1.0] },
];

/// Same triangle as [`TRIANGLE_POS2`] with `z = 0`, `w = 1` and opaque colors.
pub static TRIANGLE_POS4: [ColorVertex4; 3] = [
    ColorVertex4 { position: [0.0, 1.0, 0.0, 1.0], color: [1.0, 0.0, 0.0, 1.0] },
    ColorVertex4 { position: [-1.0, -1.0, 0.0, 1.0], color: [0.0, 1.0, 0.0, 1.0] },
    ColorVertex4 { position: [1.0, -1.0, 0.0, 1.0], color: [0.0, 0.0, 1.0, 1.0] },
];

/// Which vertex format the mesh and shader use.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum VertexLayout {
    /// `vec2` position + `vec3` color.
    #[default]
    Pos2Color3,
    /// `vec4` position + `vec4` color.
    Pos4Color4,
}

impl VertexLayout {
    /// Bytes between consecutive vertices.
    pub fn stride(self) -> u64 {
        match self {
            Self::Pos2Color3 => std::mem::size_of::<ColorVertex2>() as u64,
            Self::Pos4Color4 => std::mem::size_of::<ColorVertex4>() as u64,
        }
    }

    pub fn floats_per_vertex(self) -> usize {
        (self.stride() as usize) / std::mem::size_of::<f32>()
    }

    pub fn attributes(self) -> &'static [wgpu::VertexAttribute] {
        match self {
            Self::Pos2Color3 => &ColorVertex2::ATTRS,
            Self::Pos4Color4 => &ColorVertex4::ATTRS,
        }
    }

    pub fn buffer_layout(self) -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: self.stride(),
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: self.attributes(),
        }
    }

    /// The canonical triangle as it is uploaded.
    pub fn triangle_bytes(self) -> &'static [u8] {
        match self {
            Self::Pos2Color3 => bytemuck::cast_slice(&TRIANGLE_POS2),
            Self::Pos4Color4 => bytemuck::cast_slice(&TRIANGLE_POS4),
        }
    }

    /// The canonical triangle as a flat float array.
    pub fn triangle_floats(self) -> &'static [f32] {
        match self {
            Self::Pos2Color3 => bytemuck::cast_slice(&TRIANGLE_POS2),
            Self::Pos4Color4 => bytemuck::cast_slice(&TRIANGLE_POS4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POS2_FLOATS: [f32; 15] = [
        0.0, 1.0, 1.0, 0.0, 0.0, //
        -1.0, -1.0, 0.0, 1.0, 0.0, //
        1.0, -1.0, 0.0, 0.0, 1.0,
    ];

    const POS4_FLOATS: [f32; 24] = [
        0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, //
        -1.0, -1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, //
        1.0, -1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0,
    ];

    #[test]
    fn stride_equals_vertex_size() {
        assert_eq!(VertexLayout::Pos2Color3.stride(), 20);
        assert_eq!(VertexLayout::Pos4Color4.stride(), 32);
        assert_eq!(VertexLayout::Pos2Color3.floats_per_vertex(), 5);
        assert_eq!(VertexLayout::Pos4Color4.floats_per_vertex(), 8);
    }

    #[test]
    fn attributes_follow_the_position() {
        let a = VertexLayout::Pos2Color3.attributes();
        assert_eq!(a.len(), 2);
        assert_eq!((a[0].shader_location, a[0].offset), (0, 0));
        assert_eq!(a[0].format, wgpu::VertexFormat::Float32x2);
        assert_eq!((a[1].shader_location, a[1].offset), (1, 8));
        assert_eq!(a[1].format, wgpu::VertexFormat::Float32x3);

        let b = VertexLayout::Pos4Color4.attributes();
        assert_eq!((b[1].shader_location, b[1].offset), (1, 16));
        assert_eq!(b[1].format, wgpu::VertexFormat::Float32x4);
    }

    #[test]
    fn uploaded_bytes_are_the_source_floats() {
        let bytes = VertexLayout::Pos2Color3.triangle_bytes();
        assert_eq!(bytes.len(), 60);
        let back: Vec<u32> = bytes
            .chunks_exact(4)
            .map(|c| u32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        let expected: Vec<u32> = POS2_FLOATS.iter().map(|f| f.to_bits()).collect();
        assert_eq!(back, expected);

        let floats = VertexLayout::Pos4Color4.triangle_floats();
        assert_eq!(floats.len(), 24);
        assert!(floats.iter().zip(POS4_FLOATS.iter()).all(|(a, b)| a.to_bits() == b.to_bits()));
    }
}
