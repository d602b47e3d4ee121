//! Ochre - paint a laid-out box tree to an image
//!
//! Reads a `LayoutBox` tree from a JSON fixture, builds its display list and
//! rasterizes it onto a canvas.
//!
//! - `ochre tree.json -o out.png`   # Render to PNG
//! - `ochre tree.json -o out.ppm`   # Render to binary PPM
//! - `ochre tree.json --dump-display-list`   # Print the paint commands

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use ochre_common::warning::clear_warnings;
use ochre_css::{DisplayCommand, DisplayList, LayoutBox, Painter};
use ochre_render::Canvas;
use owo_colors::OwoColorize;

/// Ochre - paint a JSON layout tree to PNG or PPM
#[derive(Parser, Debug)]
#[command(name = "ochre")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Render a fixture to PNG
    ochre ochre-cli/fixtures/stacking.json -o out.png

    # Render with a custom viewport
    ochre tree.json -o out.ppm --width 1920 --height 1080

    # Inspect the paint commands without rendering
    ochre tree.json --dump-display-list
"#)]
struct Cli {
    /// Path to the layout tree fixture (JSON)
    #[arg(value_name = "FIXTURE")]
    fixture: PathBuf,

    /// Output image; the extension selects the format (.png or .ppm)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Viewport width in pixels
    #[arg(long, default_value = "800")]
    width: u32,

    /// Viewport height in pixels; grows to fit the content
    #[arg(long, default_value = "600")]
    height: u32,

    /// Print the display list to stdout
    #[arg(long)]
    dump_display_list: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.output.is_none() && !cli.dump_display_list {
        anyhow::bail!("nothing to do: pass --output and/or --dump-display-list");
    }

    let root = load_fixture(&cli.fixture)?;
    clear_warnings();

    let display_list = Painter::new().paint(Some(&root));
    if cli.dump_display_list {
        print_display_list(&display_list);
    }

    if let Some(ref output_path) = cli.output {
        let mut canvas = Canvas::for_layout(Some(&root), cli.width, cli.height);
        canvas.render(&display_list);
        canvas.save(output_path)?;
        println!(
            "{} {} ({}×{})",
            "Saved".green().bold(),
            output_path.display(),
            canvas.width(),
            canvas.height()
        );
    }

    Ok(())
}

/// Read and deserialize a layout tree fixture.
fn load_fixture(path: &Path) -> Result<LayoutBox> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read fixture '{}'", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("failed to parse layout tree in '{}'", path.display()))
}

/// Print every command in painting order.
fn print_display_list(display_list: &DisplayList) {
    println!("{}", "=== Display List ===".bold());
    println!("{} commands", display_list.len());
    for (index, command) in display_list.iter().enumerate() {
        let prefix = format!("{index:>4}");
        match command {
            DisplayCommand::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => println!(
                "{} {} ({x}, {y}) {width}×{height} {}",
                prefix.dimmed(),
                "FillRect".cyan(),
                color.to_hex_string()
            ),
            DisplayCommand::DrawBorder {
                x,
                y,
                width,
                height,
                widths,
                color,
                style,
            } => println!(
                "{} {} ({x}, {y}) {width}×{height} widths [{} {} {} {}] {style} {}",
                prefix.dimmed(),
                "DrawBorder".yellow(),
                widths.top,
                widths.right,
                widths.bottom,
                widths.left,
                color.to_hex_string()
            ),
            DisplayCommand::DrawText {
                x,
                y,
                text,
                font_size,
                color,
                font_weight,
            } => println!(
                "{} {} ({x}, {y}) {text:?} {font_size}px {font_weight} {}",
                prefix.dimmed(),
                "DrawText".magenta(),
                color.to_hex_string()
            ),
        }
    }
}
