use anyhow::Context;
use clap::Parser;
use easel::Config;
use easel::draw::Background;
use easel::input::CanvasState;
use easel::script::Script;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "easel")]
#[command(version, about = "Headless canvas renderer driven by event scripts")]
struct Cli {
    /// Configuration file (defaults to ~/.config/easel/config.toml)
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Image to open as the starting canvas
    #[arg(long, short = 'i', value_name = "IMAGE")]
    input: Option<PathBuf>,

    /// Canvas width for a blank start
    #[arg(long, value_name = "W", requires = "height", conflicts_with = "input")]
    width: Option<u32>,

    /// Canvas height for a blank start
    #[arg(long, value_name = "H", requires = "width", conflicts_with = "input")]
    height: Option<u32>,

    /// Event script to replay
    #[arg(long, short = 's', value_name = "FILE")]
    script: PathBuf,

    /// Where to save the result (jpg, png, gif or bmp)
    #[arg(long, short = 'o', value_name = "IMAGE")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let source = std::fs::read_to_string(&cli.script)
        .with_context(|| format!("Failed to read script {}", cli.script.display()))?;
    let script = Script::parse(&source)
        .with_context(|| format!("Invalid script {}", cli.script.display()))?;

    let mut canvas = CanvasState::from_config(&config);
    if let (Some(width), Some(height)) = (cli.width, cli.height) {
        let background = Background::Solid(config.canvas.background.to_color());
        canvas.reset_with_background(width, height, background);
    }
    if let Some(input) = &cli.input {
        canvas
            .open_image_from_file(input)
            .with_context(|| format!("Failed to open {}", input.display()))?;
    }

    log::info!("Replaying {} script commands", script.len());
    script.apply(&mut canvas);

    canvas
        .save_image_as(&cli.output)
        .with_context(|| format!("Failed to save {}", cli.output.display()))?;
    log::info!("Saved {}", cli.output.display());

    Ok(())
}
