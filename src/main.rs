//! chord-flashcards - renders seventh chord images and packs flashcard decks

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chord_flashcards::deck::{write_degree_decks, write_interval_decks};
use chord_flashcards::pipeline::generate_chord_corpus;
use chord_flashcards::{ChordType, Clef, FlashcardError, GenerationConfig, RendererKind, RootRange};

#[derive(Parser)]
#[command(name = "chord-flashcards")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every chord over a root range and write the chord deck
    Chords {
        /// Clef the chords are written on (G or F)
        #[arg(long)]
        clef: Option<Clef>,

        /// Half-open root range, e.g. C2,C3
        #[arg(long)]
        root_range: Option<RootRange>,

        /// Output directory
        #[arg(short, long)]
        out: PathBuf,

        /// Notation program (musescore, lilypond)
        #[arg(long)]
        renderer: Option<RendererKind>,

        /// Chord type to generate; repeat for several
        #[arg(long = "chord-type")]
        chord_types: Vec<ChordType>,

        /// YAML or JSON settings file; flags override its values
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Image resolution in dots per inch
        #[arg(long)]
        resolution: Option<u32>,
    },

    /// Write the two interval decks
    Intervals {
        /// Output directory
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Write the major and minor key scale degree decks
    Degrees {
        /// Output directory
        #[arg(short, long)]
        out: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Chords {
            clef,
            root_range,
            out,
            renderer,
            chord_types,
            config,
            resolution,
        } => {
            let overrides = Overrides {
                clef,
                root_range,
                renderer,
                chord_types,
                resolution,
            };
            run_chords(config.as_deref(), overrides, &out)
        }
        Commands::Intervals { out } => {
            write_interval_decks(&out).map(|n| log::info!("{} interval notes written", n))
        }
        Commands::Degrees { out } => {
            write_degree_decks(&out).map(|n| log::info!("{} degree notes written", n))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Command-line values that replace config file fields
struct Overrides {
    clef: Option<Clef>,
    root_range: Option<RootRange>,
    renderer: Option<RendererKind>,
    chord_types: Vec<ChordType>,
    resolution: Option<u32>,
}

impl Overrides {
    fn apply(self, config: &mut GenerationConfig) {
        if let Some(clef) = self.clef {
            config.clef = clef;
        }
        if let Some(root_range) = self.root_range {
            config.root_range = root_range;
        }
        if let Some(renderer) = self.renderer {
            config.renderer = renderer;
        }
        if !self.chord_types.is_empty() {
            config.chord_types = self.chord_types;
        }
        if self.resolution.is_some() {
            config.render_resolution = self.resolution;
        }
    }
}

fn run_chords(
    config_path: Option<&Path>,
    overrides: Overrides,
    out: &Path,
) -> Result<(), FlashcardError> {
    let mut config = match config_path {
        Some(path) => GenerationConfig::load(path)?,
        None => GenerationConfig::default(),
    };
    overrides.apply(&mut config);

    let renderer = config.renderer.build(config.render_resolution);
    let report = generate_chord_corpus(&config, renderer.as_ref(), out)?;

    if !report.failures.is_empty() {
        log::warn!(
            "{} of {} chords failed to render",
            report.failures.len(),
            report.stable_ids.len()
        );
    }
    Ok(())
}
