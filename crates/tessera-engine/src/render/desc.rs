//! Descriptor structs for the resources a frame needs.
//!
//! Each descriptor states its defaults and, where a constraint exists, checks
//! it in `validate()` before anything reaches the device.

use std::ops::Range;

use crate::error::RenderError;
use crate::paint::Color;

use super::triangle::{UniformBlock, VertexLayout};

/// A GPU buffer to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferSpec {
    pub label: &'static str,
    pub size: u64,
    pub usage: wgpu::BufferUsages,
}

impl BufferSpec {
    /// Vertex buffer sized to hold exactly one triangle in `layout`.
    pub fn vertex(layout: VertexLayout) -> Self {
        Self {
            label: "tessera triangle vertices",
            size: layout.triangle_bytes().len() as u64,
            usage: wgpu::BufferUsages::VERTEX,
        }
    }

    /// Uniform buffer for one [`UniformBlock`], rewritten every frame.
    pub fn uniform() -> Self {
        Self {
            label: "tessera triangle uniforms",
            size: UniformBlock::SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        }
    }

    /// Checks the size against the bytes that will be uploaded at creation.
    ///
    /// Buffers filled later (uniforms) pass `None`.
    pub fn validate(&self, contents: Option<&[u8]>) -> Result<(), RenderError> {
        if self.size == 0 {
            return Err(RenderError::invalid("buffer", "size must be non-zero"));
        }

        if let Some(bytes) = contents {
            if bytes.len() as u64 != self.size {
                return Err(RenderError::invalid(
                    "buffer",
                    format!(
                        "`{}` is {} bytes but its data is {} bytes",
                        self.label,
                        self.size,
                        bytes.len()
                    ),
                ));
            }
        }

        if self.usage.contains(wgpu::BufferUsages::UNIFORM) && self.size != UniformBlock::SIZE {
            return Err(RenderError::invalid(
                "buffer",
                format!("uniform buffer must be {} bytes, got {}", UniformBlock::SIZE, self.size),
            ));
        }

        Ok(())
    }
}

/// A render pipeline to be created.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineSpec {
    pub label: &'static str,
    pub layout: VertexLayout,
    pub vertex_entry: &'static str,
    pub fragment_entry: &'static str,
    pub target_format: wgpu::TextureFormat,
    pub topology: wgpu::PrimitiveTopology,
    /// Whether the shader reads a uniform block at group 0, binding 0.
    pub uniforms: bool,
}

impl PipelineSpec {
    pub fn new(layout: VertexLayout, target_format: wgpu::TextureFormat) -> Self {
        Self {
            label: "tessera triangle pipeline",
            layout,
            vertex_entry: "vs_main",
            fragment_entry: "fs_main",
            target_format,
            topology: wgpu::PrimitiveTopology::TriangleList,
            uniforms: false,
        }
    }

    pub fn with_uniforms(mut self, uniforms: bool) -> Self {
        self.uniforms = uniforms;
        self
    }

    pub fn validate(&self) -> Result<(), RenderError> {
        if self.vertex_entry.is_empty() || self.fragment_entry.is_empty() {
            return Err(RenderError::invalid("pipeline", "entry points must be named"));
        }
        if self.topology != wgpu::PrimitiveTopology::TriangleList {
            return Err(RenderError::invalid(
                "pipeline",
                format!("{:?} cannot draw a single triangle", self.topology),
            ));
        }
        Ok(())
    }
}

/// What happens to the attachment's previous contents.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoadPolicy {
    Clear,
    Load,
}

/// What happens to the attachment when the pass ends.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StorePolicy {
    Store,
    Discard,
}

/// The single color pass of a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PassSpec {
    pub label: &'static str,
    pub clear: Color,
    pub load: LoadPolicy,
    pub store: StorePolicy,
}

impl PassSpec {
    pub fn with_clear(mut self, clear: Color) -> Self {
        self.clear = clear;
        self
    }

    pub fn operations(&self) -> wgpu::Operations<wgpu::Color> {
        wgpu::Operations {
            load: match self.load {
                LoadPolicy::Clear => wgpu::LoadOp::Clear(self.clear.to_wgpu()),
                LoadPolicy::Load => wgpu::LoadOp::Load,
            },
            store: match self.store {
                StorePolicy::Store => wgpu::StoreOp::Store,
                StorePolicy::Discard => wgpu::StoreOp::Discard,
            },
        }
    }
}

impl Default for PassSpec {
    fn default() -> Self {
        Self {
            label: "tessera triangle pass",
            clear: Color::DARK_GREEN,
            load: LoadPolicy::Clear,
            store: StorePolicy::Store,
        }
    }
}

/// Arguments of one non-indexed draw.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DrawCall {
    pub vertex_count: u32,
    pub instance_count: u32,
    pub first_vertex: u32,
    pub first_instance: u32,
}

impl DrawCall {
    /// Three vertices, one instance.
    pub const TRIANGLE: DrawCall = DrawCall {
        vertex_count: 3,
        instance_count: 1,
        first_vertex: 0,
        first_instance: 0,
    };

    pub fn vertices(&self) -> Range<u32> {
        self.first_vertex..self.first_vertex + self.vertex_count
    }

    pub fn instances(&self) -> Range<u32> {
        self.first_instance..self.first_instance + self.instance_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_buffer_size_matches_layout_data() {
        for layout in [VertexLayout::Pos2Color3, VertexLayout::Pos4Color4] {
            let spec = BufferSpec::vertex(layout);
            assert_eq!(spec.size, 3 * layout.stride());
            assert!(spec.validate(Some(layout.triangle_bytes())).is_ok());
        }
    }

    #[test]
    fn zero_sized_buffer_is_rejected() {
        let spec = BufferSpec {
            size: 0,
            ..BufferSpec::vertex(VertexLayout::Pos2Color3)
        };
        assert!(matches!(
            spec.validate(None),
            Err(RenderError::InvalidDescriptor { resource: "buffer", .. })
        ));
    }

    #[test]
    fn vertex_buffer_with_mismatched_data_is_rejected() {
        let spec = BufferSpec::vertex(VertexLayout::Pos2Color3);
        let other = VertexLayout::Pos4Color4.triangle_bytes();
        assert!(spec.validate(Some(other)).is_err());
    }

    #[test]
    fn uniform_buffer_is_eighty_bytes() {
        let spec = BufferSpec::uniform();
        assert_eq!(spec.size, 80);
        assert!(spec.validate(None).is_ok());

        let wrong = BufferSpec { size: 64, ..spec };
        assert!(wrong.validate(None).is_err());
    }

    #[test]
    fn pipeline_defaults() {
        let spec = PipelineSpec::new(VertexLayout::Pos2Color3, wgpu::TextureFormat::Bgra8Unorm);
        assert_eq!(spec.vertex_entry, "vs_main");
        assert_eq!(spec.fragment_entry, "fs_main");
        assert_eq!(spec.topology, wgpu::PrimitiveTopology::TriangleList);
        assert!(!spec.uniforms);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn pipeline_rejects_non_list_topology() {
        let spec = PipelineSpec {
            topology: wgpu::PrimitiveTopology::LineStrip,
            ..PipelineSpec::new(VertexLayout::Pos4Color4, wgpu::TextureFormat::Rgba8Unorm)
        };
        assert!(spec.validate().is_err());
    }

    #[test]
    fn default_pass_clears_to_dark_green_and_stores() {
        let ops = PassSpec::default().operations();
        assert_eq!(ops.store, wgpu::StoreOp::Store);
        match ops.load {
            wgpu::LoadOp::Clear(c) => {
                assert_eq!((c.r, c.b, c.a), (0.0, 0.0, 1.0));
                assert!((c.g - 0.05).abs() < 1e-7);
            }
            other => panic!("expected a clear, got {other:?}"),
        }
    }

    #[test]
    fn triangle_draw_is_three_vertices_one_instance() {
        assert_eq!(DrawCall::TRIANGLE.vertices(), 0..3);
        assert_eq!(DrawCall::TRIANGLE.instances(), 0..1);
    }
}
