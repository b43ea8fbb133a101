//! Tessera demos - colored triangle on wgpu
//!
//! # Usage
//!
//! ```bash
//! tessera-demos                          # rotating triangle
//! tessera-demos --variant static
//! tessera-demos --variant compat --layout pos4
//! tessera-demos --console-errors --log debug
//! ```
//!
//! ESC or closing the window quits.

mod cli;
mod demo;

use anyhow::Result;
use clap::Parser;
use winit::dpi::LogicalSize;

use tessera_engine::device::GpuInit;
use tessera_engine::logging::{init_logging, LoggingConfig};
use tessera_engine::render::triangle::{TriangleConfig, Variant};
use tessera_engine::report::{default_reporter, Failure};
use tessera_engine::window::{RedrawMode, Runtime, RuntimeConfig};

use cli::Args;
use demo::TriangleDemo;

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(LoggingConfig {
        env_filter: args.log.clone(),
        ..Default::default()
    });

    let failure = Failure::new(default_reporter(!args.console_errors));

    let variant = Variant::from(args.variant);
    let config = TriangleConfig {
        variant,
        layout: args.layout.into(),
        ..TriangleConfig::default()
    };

    let gpu_init = match variant {
        Variant::CompatProbe => GpuInit::compatibility(),
        _ => GpuInit::default(),
    };

    let runtime = RuntimeConfig {
        title: args.window_title(),
        initial_size: LogicalSize::new(args.width as f64, args.height as f64),
        redraw: if variant.is_animated() {
            RedrawMode::Continuous
        } else {
            RedrawMode::OnDemand
        },
    };

    log::info!("starting {:?} demo ({:?})", config.variant, config.layout);

    Runtime::run(runtime, gpu_init, failure, TriangleDemo::new(config))
}
