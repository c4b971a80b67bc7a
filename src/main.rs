//! keymapconv - command-line converters for keyboard keymap data
//!
//! Each subcommand reads one or more JSON (or C-source) documents
//! describing a keyboard layout or keymap and rewrites them into another
//! representation used by a different tool in the keyboard-customization
//! ecosystem.

// Module declarations
mod cli;
mod models;
mod parser;
mod services;

use clap::{Parser, Subcommand};
use log::error;

use cli::{
    CustomKeycodesArgs, FlattenArgs, InspectArgs, KeycodesArgs, LayerNamesArgs, PostprocessArgs,
    UnflattenArgs, VialArgs,
};

/// Command-line converters for keyboard-firmware keymap and layout data
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a grid keymap dump into a flat firmware keymap
    Flatten(FlattenArgs),
    /// Update a grid keymap dump from a flat firmware keymap
    Unflatten(UnflattenArgs),
    /// Generate a canonical keycode table from a firmware specification
    Keycodes(KeycodesArgs),
    /// Extract custom keycodes from a firmware keymap source
    CustomKeycodes(CustomKeycodesArgs),
    /// Substitute custom keycodes and resolve transparency in a keymap
    Postprocess(PostprocessArgs),
    /// Generate a trigger-key to layer-name mapping from a keymap source
    LayerNames(LayerNamesArgs),
    /// Convert a keyboard description into a layout-editor export
    Vial(VialArgs),
    /// Show summary information about a flat keymap
    Inspect(InspectArgs),
}

fn main() {
    // Log to stderr so stdout stays clean for JSON output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Flatten(args) => args.execute(),
        Commands::Unflatten(args) => args.execute(),
        Commands::Keycodes(args) => args.execute(),
        Commands::CustomKeycodes(args) => args.execute(),
        Commands::Postprocess(args) => args.execute(),
        Commands::LayerNames(args) => args.execute(),
        Commands::Vial(args) => args.execute(),
        Commands::Inspect(args) => args.execute(),
    };

    if let Err(e) = result {
        error!("{e}");
        std::process::exit(e.exit_code());
    }
}
