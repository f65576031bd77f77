//! Tree command implementation

use crate::cli::TreeArgs;
use crate::config::Config;
use crate::cos::Document;
use crate::error::Result;
use crate::render::IconSet;
use crate::tree::{format_json, format_tree, FormatOptions};

/// Run the tree command
pub fn run(args: TreeArgs, config: &Config) -> Result<()> {
    let output = render(&args, config)?;
    println!("{}", output);
    Ok(())
}

/// Build the command's output without printing it
pub fn render(args: &TreeArgs, config: &Config) -> Result<String> {
    tracing::info!(path = %args.file.display(), "Loading document");
    let doc = Document::open(&args.file)?;

    let options = FormatOptions::new()
        .with_max_depth(args.max_depth.unwrap_or(config.tree.max_depth))
        .with_icons(config.tree.show_icons && config.icons.glyphs && !args.no_icons);

    if args.json {
        let icons = config
            .icons
            .base_path
            .as_deref()
            .map(IconSet::load)
            .transpose()?;
        return Ok(format_json(&doc, &options, icons.as_ref())?);
    }

    Ok(format_tree(&doc, &options))
}
