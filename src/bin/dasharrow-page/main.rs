use std::path::PathBuf;

use clap::Parser;
use dasharrow::{page, PageConfig};

/// Writes the static page that hosts the wasm bundle.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "index.html")]
    out: PathBuf,
    /// Module script loaded at the end of the body, e.g. `./dasharrow.js`.
    #[arg(short, long)]
    script: Option<String>,
    #[arg(short, long)]
    label: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = PageConfig::default();
    if let Some(label) = args.label {
        config.button_label = label;
    }

    page::write_document(&args.out, &config, args.script.as_deref())?;
    println!("wrote {}", args.out.display());
    Ok(())
}
