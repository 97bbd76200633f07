use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

const DEFAULT_TEXT: &str = "Jack and Jill went up the hill to fetch a pail of water. Jack fell down and broke his crown and Jill came Tumbling after! \nWoo!";

/// Animate the construction of a Huffman tree into a PNG sequence.
#[derive(Parser, Debug)]
#[command(name = "huffvis", version)]
struct Cli {
    /// Text whose character frequencies weight the tree.
    #[arg(long, default_value = DEFAULT_TEXT)]
    text: String,

    /// Visualization options JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory the frames are written into.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// File name prefix; frames are named `<base-name>00000.png`, `<base-name>00001.png`, ...
    #[arg(long, default_value = "image")]
    base_name: String,

    /// Label font (TTF/OTF). Overrides `label_font` from the config.
    #[arg(long)]
    font: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let mut opts = match &cli.config {
        Some(path) => huffvis::VisualizationOpts::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => huffvis::VisualizationOpts::default(),
    };
    if let Some(font) = cli.font {
        opts.label_font = Some(font);
    }

    let tree = huffvis::HuffmanTree::from_text(&cli.text)?;
    for (symbol, code) in &tree.codes {
        tracing::debug!(symbol = %huffvis::label_text(*symbol), %code, "code");
    }

    let vis = huffvis::Visualization::build(&tree, &opts)?;
    let mut sink = huffvis::PngSequenceSink::new(&cli.out_dir, &cli.base_name);
    vis.render(&mut sink)
        .with_context(|| format!("write frames to '{}'", cli.out_dir.display()))?;

    eprintln!(
        "wrote {} frames to {}",
        sink.written(),
        cli.out_dir.display()
    );
    Ok(())
}
