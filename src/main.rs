use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use termlife_core::metrics::init_logging;
use termlife_core::Variant;
use termlife_lib::app::{App, HeadlessRun};
use termlife_lib::model::config::AppConfig;
use termlife_tui::Tui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Variations on the rules [life, daynight, highlife, seed]
    #[arg(short, long)]
    variant: Option<Variant>,

    /// Config file path
    #[arg(short, long, default_value = "termlife.toml")]
    config: PathBuf,

    /// Mode to run the simulation in
    #[arg(short, long, value_enum, default_value = "interactive")]
    mode: Mode,

    /// Generations to run in headless mode
    #[arg(long, default_value_t = 100)]
    generations: u64,

    /// Pattern stamped at the grid center in headless mode
    #[arg(long, default_value = "acorn")]
    pattern: String,

    /// Headless grid width (defaults to the config value)
    #[arg(long)]
    width: Option<u16>,

    /// Headless grid height (defaults to the config value)
    #[arg(long)]
    height: Option<u16>,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    Interactive,
    Headless,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = AppConfig::load(&args.config)?;
    let variant = args.variant.unwrap_or(config.simulation.variant);
    init_logging(&config.logging.file, &config.logging.level).with_context(|| {
        format!(
            "Failed to open log file {}",
            config.logging.file.display()
        )
    })?;

    match args.mode {
        Mode::Headless => run_headless(&args, &config, variant),
        Mode::Interactive => {
            let mut tui = Tui::new()?;
            tui.init()?;
            let (columns, rows) = tui.size()?;

            let mut app = App::new(config, variant, columns, rows)?;
            let res = app.run(&mut tui).await;

            tui.exit()?;

            let exit_code = app.shutdown.exit_code();
            tracing::info!(
                generation = app.simulation.generation(),
                exit_code,
                "Exited"
            );
            res?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }
    }
}

fn run_headless(args: &Args, config: &AppConfig, variant: Variant) -> Result<()> {
    let run = HeadlessRun {
        variant,
        width: args.width.unwrap_or(config.headless.width),
        height: args.height.unwrap_or(config.headless.height),
        pattern: args.pattern.clone(),
        generations: args.generations,
    };
    println!(
        "Running {} ({}) on a {}x{} grid seeded with {}...",
        variant,
        variant.rules(),
        run.width,
        run.height,
        run.pattern
    );
    let report = run.execute()?;
    println!("{report}");
    Ok(())
}
