/// The frame target: one acquired surface image plus its encoder.
///
/// Re-acquired every frame and never cached. Holding the surface texture
/// prevents acquisition of subsequent frames, so finalize it promptly with
/// [`Gpu::submit`](super::Gpu::submit).
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
