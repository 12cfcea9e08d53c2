/*!
svgrad Command Line Interface

Provides commands for rendering SVG gradient documents from CSS colors or
named presets, and for checking color syntax without rendering.
*/

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use svgrad::{build_gradient, is_css_color, presets, Orientation, VERSION};

#[derive(Parser)]
#[command(name = "svgrad")]
#[command(about = "Syntactic CSS color validation and SVG gradient generation")]
#[command(version = VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a gradient from the given CSS colors
    Gradient {
        /// Color stops, in order
        #[arg(required = true)]
        colors: Vec<String>,

        /// Gradient orientation
        #[arg(long, value_enum, default_value_t = Orientation::Linear)]
        orientation: Orientation,

        /// Output file path (stdout if omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Render a gradient from a named preset
    Preset {
        /// Preset name (see `svgrad presets` for the list)
        name: String,

        /// Gradient orientation
        #[arg(long, value_enum, default_value_t = Orientation::Linear)]
        orientation: Orientation,

        /// Output file path (stdout if omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List the available presets and their colors
    Presets,

    /// Check color syntax without rendering
    Validate {
        /// Colors to check
        #[arg(required = true)]
        colors: Vec<String>,

        /// Output format for the report (pretty, json)
        #[arg(long, default_value = "pretty")]
        format: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Gradient {
            colors,
            orientation,
            output,
        } => {
            render(orientation, colors, output.as_deref())?;
        }

        Commands::Preset {
            name,
            orientation,
            output,
        } => match presets::lookup(&name) {
            Some(colors) => {
                let colors = colors.iter().map(|c| c.to_string()).collect();
                render(orientation, colors, output.as_deref())?;
            }
            None => {
                eprintln!("Unknown preset: {}", name);
                eprintln!("Available presets: {}", presets::NAMES.join(", "));
                std::process::exit(1);
            }
        },

        Commands::Presets => {
            for name in presets::NAMES {
                let colors = presets::lookup(name).unwrap_or_default();
                println!("{:<8} {}", name, colors.join(", "));
            }
        }

        Commands::Validate { colors, format } => {
            let any_invalid = colors.iter().any(|c| !is_css_color(c));

            match format.as_str() {
                "json" => {
                    let report: Vec<_> = colors
                        .iter()
                        .enumerate()
                        .map(|(index, token)| {
                            serde_json::json!({
                                "index": index,
                                "token": token,
                                "valid": is_css_color(token),
                            })
                        })
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
                "pretty" => {
                    for (index, token) in colors.iter().enumerate() {
                        let verdict = if is_css_color(token) { "ok" } else { "invalid" };
                        println!("{:>3}  {:<24} {}", index, token, verdict);
                    }
                }
                _ => {
                    eprintln!("Unknown format: {}", format);
                    std::process::exit(1);
                }
            }

            if any_invalid {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Build the document and deliver it to the requested destination.
///
/// Validation failures go to stderr with a non-zero exit; the error itself
/// already enumerates every invalid (index, token) pair.
fn render(orientation: Orientation, colors: Vec<String>, output: Option<&Path>) -> anyhow::Result<()> {
    match build_gradient(orientation, colors) {
        Ok(svg) => match output {
            Some(path) => {
                std::fs::write(path, &svg)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("SVG written to: {}", path.display());
            }
            None => println!("{}", svg),
        },
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
