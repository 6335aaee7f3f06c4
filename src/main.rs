mod app;
mod assets;
mod cli;
mod config;
mod input;

use std::error::Error;

use clap::Parser;

use crate::app::{App, LaunchOptions};
use crate::cli::Cli;
use crate::config::AppConfig;

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    // RUST_LOG still wins over the default filter.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp_millis()
        .try_init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli).inspect_err(|e| log::error!("{e}"))
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let assets_root = assets::resolve_assets_root(cli.assets.as_deref());
    log::info!(target: "assets", "assets root {}", assets_root.display());

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| assets::config_path(&assets_root));
    let mut cfg = AppConfig::load_or_default(&config_path)?;
    cfg.apply_cli(&cli);

    let launch = LaunchOptions {
        image: cli
            .image
            .clone()
            .unwrap_or_else(|| assets::default_texture_path(&assets_root)),
        assets_root,
        model: cli.file.clone(),
        dump_model: cli.verbose,
        watch_blocks: cli.watch,
    };

    let mut builder = raylib::init();
    builder
        .size(cfg.window.width, cfg.window.height)
        .title(&cfg.window.title)
        .resizable();
    if cfg.window.msaa {
        builder.msaa_4x();
    }
    if cfg.window.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_exit_key(None);
    if cfg.window.target_fps > 0 {
        rl.set_target_fps(cfg.window.target_fps);
    }

    let mut app = App::new(&mut rl, &thread, &cfg, launch)?;
    app.run(&mut rl, &thread);
    Ok(())
}
