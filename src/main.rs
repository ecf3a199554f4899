use std::path::PathBuf;

use anyhow::Context;
use balldrop::{BallDropApp, DemoConfig};
use clap::Parser;
use log::info;

/// Procedural New Year's ball drop
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Stop after this many frames (runs until closed if omitted)
    #[arg(long)]
    frames: Option<u64>,

    /// Target frame rate, 0 for unthrottled
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Directory containing shaders/ and tex/
    #[arg(long, default_value = env!("CARGO_MANIFEST_DIR"))]
    assets: PathBuf,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 1200)]
    width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 800)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = DemoConfig::new()
        .with_size(args.width, args.height)
        .with_max_frames(args.frames)
        .with_target_fps(args.fps)
        .with_asset_root(&args.assets);

    let summary = BallDropApp::new(config)
        .run()
        .with_context(|| format!("failed to run the ball drop with assets from {}", args.assets.display()))?;

    info!("Done: {} frames in {:.2}s", summary.frames, summary.elapsed.as_secs_f32());
    Ok(())
}
