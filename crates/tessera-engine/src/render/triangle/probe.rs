/// A six-layer texture viewed as a cube array.
///
/// Downlevel devices without cube-array support reject the view. wgpu raises
/// that as an uncaptured error, which the device observers turn into a
/// reported failure. Kept alive for the renderer's lifetime.
pub struct CubeArrayProbe {
    _texture: wgpu::Texture,
    _view: wgpu::TextureView,
}

impl CubeArrayProbe {
    pub fn create(device: &wgpu::Device, supported: bool) -> Self {
        if supported {
            log::info!("adapter supports cube-array textures; the probe view is valid");
        } else {
            log::warn!("adapter lacks cube-array textures; the probe view is expected to fail");
        }

        let texture = device.create_texture(&texture_descriptor());
        let view = texture.create_view(&view_descriptor());

        Self {
            _texture: texture,
            _view: view,
        }
    }
}

fn texture_descriptor() -> wgpu::TextureDescriptor<'static> {
    wgpu::TextureDescriptor {
        label: Some("tessera cube-array probe"),
        size: wgpu::Extent3d {
            width: 1,
            height: 1,
            depth_or_array_layers: 6,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8Unorm,
        usage: wgpu::TextureUsages::TEXTURE_BINDING
            | wgpu::TextureUsages::COPY_DST
            | wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    }
}

fn view_descriptor() -> wgpu::TextureViewDescriptor<'static> {
    wgpu::TextureViewDescriptor {
        label: Some("tessera cube-array probe view"),
        dimension: Some(wgpu::TextureViewDimension::CubeArray),
        ..Default::default()
    }
}
