use clap::{Parser, Subcommand};
use hudspace_hud::{FrameContext, HorizontalAlign, Hud, Scaling, VerticalAlign};
use hudspace_render::{PlaceholderTexture, RecordingRenderer};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hudspace-cli", about = "CLI tool for hudspace compositing")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate info
    Info,
    /// Compose a demo HUD and print the recorded draw list
    Compose {
        /// HUD width in logical pixels
        #[arg(long, default_value = "800")]
        width: u32,
        /// HUD height in logical pixels
        #[arg(long, default_value = "600")]
        height: u32,
        /// Number of stacked badge surfaces
        #[arg(short, long, default_value = "3")]
        badges: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("hudspace-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("hud: {}", hudspace_hud::crate_info());
            println!("render: {}", hudspace_render::crate_info());
        }
        Commands::Compose {
            width,
            height,
            badges,
        } => {
            println!("Compose demo: {width}x{height}, {badges} badges");

            let mut hud = Hud::with_size(width, height);

            // Fullscreen backdrop, painted first so everything sits on top.
            let backdrop = hud.create_surface(PlaceholderTexture::loaded(256, 256), 0, 0);
            hud.set_scaling(backdrop, Scaling::Fullscreen);

            // A diagonal stack of badges, then pull the first one to the
            // front so reordering shows up in the draw list.
            let mut badge_ids = Vec::new();
            for i in 0..badges {
                let id = hud.create_surface(
                    PlaceholderTexture::loaded(100, 50),
                    i as i32 * 40,
                    i as i32 * 30,
                );
                badge_ids.push(id);
            }
            if let Some(first) = badge_ids.first() {
                hud.move_to_front(*first);
            }

            // One anchored status surface in the corner.
            let status = hud.create_surface(PlaceholderTexture::loaded(120, 32), 0, 0);
            hud.set_alignment(status, HorizontalAlign::Right, VerticalAlign::Bottom);

            let mut renderer = RecordingRenderer::new();
            let mut ctx = FrameContext {
                renderer: &mut renderer,
            };
            hud.handle(&mut ctx)?;

            print!("{}", renderer.summary());
            let stats = hud.stats();
            println!(
                "Pass: drawn={}, skipped={}, loads={}",
                stats.surfaces_drawn, stats.surfaces_skipped, stats.loads_requested
            );
        }
    }

    Ok(())
}
