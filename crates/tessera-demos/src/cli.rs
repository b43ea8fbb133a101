use clap::{Parser, ValueEnum};

use tessera_engine::render::triangle::{Variant, VertexLayout};

#[derive(Parser, Debug)]
#[command(name = "tessera-demos")]
#[command(author, version, about = "Colored triangle demos on wgpu")]
pub struct Args {
    /// Which demo to run
    #[arg(long, value_enum, default_value_t = DemoVariant::Rotating)]
    pub variant: DemoVariant,

    /// Vertex format of the triangle mesh
    #[arg(long, value_enum, default_value_t = DemoLayout::Pos2)]
    pub layout: DemoLayout,

    /// Initial window width in logical pixels
    #[arg(long, default_value = "640")]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value = "480")]
    pub height: u32,

    /// Window title (defaults to one naming the variant)
    #[arg(long)]
    pub title: Option<String>,

    /// Report fatal errors to the log instead of a dialog
    #[arg(long)]
    pub console_errors: bool,

    /// Log filter, in `RUST_LOG` syntax
    #[arg(long)]
    pub log: Option<String>,
}

#[derive(ValueEnum, Debug, Copy, Clone, Eq, PartialEq)]
pub enum DemoVariant {
    /// Static gouraud-shaded triangle, redrawn on demand
    Static,
    /// Triangle rotating with wall-clock time at half alpha
    Rotating,
    /// Rotating triangle on a downlevel device with a cube-array probe
    Compat,
}

impl From<DemoVariant> for Variant {
    fn from(v: DemoVariant) -> Self {
        match v {
            DemoVariant::Static => Variant::Static,
            DemoVariant::Rotating => Variant::Rotating,
            DemoVariant::Compat => Variant::CompatProbe,
        }
    }
}

#[derive(ValueEnum, Debug, Copy, Clone, Eq, PartialEq)]
pub enum DemoLayout {
    /// vec2 position, vec3 color
    Pos2,
    /// vec4 position, vec4 color
    Pos4,
}

impl From<DemoLayout> for VertexLayout {
    fn from(l: DemoLayout) -> Self {
        match l {
            DemoLayout::Pos2 => VertexLayout::Pos2Color3,
            DemoLayout::Pos4 => VertexLayout::Pos4Color4,
        }
    }
}

impl Args {
    pub fn window_title(&self) -> String {
        self.title.clone().unwrap_or_else(|| {
            let name = match self.variant {
                DemoVariant::Static => "static triangle",
                DemoVariant::Rotating => "rotating triangle",
                DemoVariant::Compat => "compatibility probe",
            };
            format!("tessera - {name}")
        })
    }
}
