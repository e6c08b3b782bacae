mod app;
mod content;
mod layout;
mod scene;
mod util;

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use eframe::egui::vec2;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use content::{ContentAssignment, demo_content, load_content};
use scene::{HoverPolicy, Scene, SceneConfig};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[arg(long, default_value_t = 960.0)]
    width: f32,
    #[arg(long, default_value_t = 640.0)]
    height: f32,
    /// Cells per side of the layout grid.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u16).range(1..=64))]
    grid: u16,
    /// Lines drawn from each dot to its nearest dots.
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5))]
    neighbors: u8,
    /// JSON content blocks; built-in demo content when omitted.
    #[arg(long)]
    content: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = ContentAssignment::Leading)]
    assign: ContentAssignment,
    #[arg(long, value_enum, default_value_t = HoverPolicy::TooltipWithPopup)]
    hover: HoverPolicy,
    /// Fixed seed for a reproducible layout.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    show_fps: bool,
}

impl Args {
    fn scene_config(&self) -> SceneConfig {
        SceneConfig {
            grid: usize::from(self.grid),
            neighbors: usize::from(self.neighbors),
            hover_policy: self.hover,
            assignment: self.assign,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,dotfield=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let content = match &args.content {
        Some(path) => load_content(path)?,
        None => demo_content(),
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let size = vec2(args.width, args.height);
    let scene = Scene::new(args.scene_config(), size, content, &mut rng);
    info!(seed = ?args.seed, hover = ?args.hover, "starting viewer");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([args.width, args.height]),
        ..Default::default()
    };
    let show_fps = args.show_fps;

    eframe::run_native(
        "dotfield",
        options,
        Box::new(move |cc| Ok(Box::new(app::DotFieldApp::new(cc, scene, rng, show_fps)))),
    )
    .map_err(|error| anyhow!("viewer failed: {error}"))
}
