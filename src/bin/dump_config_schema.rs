use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Prints the JSON schema of easel's config.toml
#[derive(Parser, Debug)]
#[command(name = "dump_config_schema")]
struct Args {
    /// Write the schema to a file instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let schema = serde_json::to_string_pretty(&easel::Config::json_schema())?;
    match args.output {
        Some(path) => std::fs::write(&path, schema + "\n")
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{schema}"),
    }
    Ok(())
}
