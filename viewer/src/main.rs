mod state;
use state::State;

use clap::Parser;
use ggez::{
    conf::{Conf, WindowMode, WindowSetup},
    event, ContextBuilder,
};
use log::error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::error::Error;
use std::path::PathBuf;

/// Watch a toy solar system go round. Drag the Earth somewhere else if you like.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// System file to load
    #[arg(default_value = "systems/sol.json5")]
    system: PathBuf,
    /// Use this seed instead of the one in the file
    #[arg(long)]
    seed: Option<u64>,
}

pub fn main() {
    // RUST_LOG overrides; gfx and winit are chatty
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,gfx_device_gl=warn,winit=warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let system = loader::load_file(&args.system, args.seed)?;

    let c = Conf::new();
    let (ref mut ctx, ref mut event_loop) = ContextBuilder::new("solar_system", "gamma-delta")
        .conf(c)
        .window_setup(WindowSetup {
            title: "Solar system!".to_owned(),
            samples: ggez::conf::NumSamples::Four,
            ..Default::default()
        })
        .window_mode(WindowMode {
            resizable: true,
            ..Default::default()
        })
        .build()?;

    let state = &mut State::new(ctx, system)?;

    event::run(ctx, event_loop, state)?;
    Ok(())
}
