use bytemuck::{Pod, Zeroable};

/// Alpha multiplier applied to every animated frame.
pub const UNIFORM_ALPHA: f32 = 0.5;

/// Uniform block read by the animated shaders.
///
/// Layout matches WGSL `struct { transform: mat4x4<f32>, alpha: f32 }`:
/// 64 bytes of column-major matrix, 4 bytes of alpha, padded to 80.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct UniformBlock {
    pub transform: [f32; 16],
    pub alpha: f32,
    pub _pad: [f32; 3],
}

impl UniformBlock {
    pub const SIZE: u64 = std::mem::size_of::<UniformBlock>() as u64;

    pub const IDENTITY: UniformBlock = UniformBlock {
        transform: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
        alpha: UNIFORM_ALPHA,
        _pad: [0.0; 3],
    };

    /// Writes a rotation by `theta` radians into the upper-left 2x2 block.
    ///
    /// Only elements 0, 1, 4 and 5 change. The angle stays `f64` until the
    /// sine and cosine are taken: epoch-sized angles lose all precision in `f32`.
    pub fn set_rotation(&mut self, theta: f64) {
        let (sin, cos) = theta.sin_cos();
        let (sin, cos) = (sin as f32, cos as f32);

        self.transform[0] = cos;
        self.transform[1] = -sin;
        self.transform[4] = sin;
        self.transform[5] = cos;
        self.alpha = UNIFORM_ALPHA;
    }

    pub fn rotation_block(&self) -> [f32; 4] {
        [
            self.transform[0],
            self.transform[1],
            self.transform[4],
            self.transform[5],
        ]
    }
}

impl Default for UniformBlock {
    fn default() -> Self {
        Self::IDENTITY
    }
}
