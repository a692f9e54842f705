//! Command line arguments

use std::path::PathBuf;

use argh::FromArgs;
use signa_runtime::OutputFormat;

/// Translate English text or ASL glosses into avatar animation JSON
#[derive(Debug, FromArgs, PartialEq)]
pub struct Args {
    /// enable debug logging, overridden by "quiet" if passed
    #[argh(switch, short = 'v')]
    pub verbose: bool,
    /// only log warnings and errors, overrides verbose
    #[argh(switch, short = 'q')]
    pub quiet: bool,
    /// log as JSON lines
    #[argh(switch)]
    pub json_logs: bool,
    /// pipeline config file (JSON)
    #[argh(option)]
    pub config: Option<PathBuf>,
    #[argh(subcommand)]
    pub command: Command,
}

#[derive(Debug, FromArgs, PartialEq)]
#[argh(subcommand)]
pub enum Command {
    Text(TextCommand),
    Gloss(GlossCommand),
    Vocabulary(VocabularyCommand),
}

/// Translate English text
#[derive(Debug, FromArgs, PartialEq)]
#[argh(subcommand, name = "text")]
pub struct TextCommand {
    /// text to translate; multiple words are joined with spaces
    #[argh(positional)]
    pub words: Vec<String>,
    /// clip length in seconds (default from config)
    #[argh(option, short = 'd')]
    pub duration: Option<f64>,
    /// output payload: scene or animation
    #[argh(option, short = 'f', default = "OutputFormat::Scene")]
    pub format: OutputFormat,
    /// write to this file instead of stdout
    #[argh(option, short = 'o')]
    pub output: Option<PathBuf>,
    /// single-line JSON
    #[argh(switch)]
    pub compact: bool,
}

impl TextCommand {
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

/// Animate a gloss sequence directly
#[derive(Debug, FromArgs, PartialEq)]
#[argh(subcommand, name = "gloss")]
pub struct GlossCommand {
    /// gloss identifiers, e.g. HELLO FS-A
    #[argh(positional)]
    pub glosses: Vec<String>,
    /// clip length in seconds (default from config)
    #[argh(option, short = 'd')]
    pub duration: Option<f64>,
    /// output payload: scene or animation
    #[argh(option, short = 'f', default = "OutputFormat::Scene")]
    pub format: OutputFormat,
    /// write to this file instead of stdout
    #[argh(option, short = 'o')]
    pub output: Option<PathBuf>,
    /// single-line JSON
    #[argh(switch)]
    pub compact: bool,
}

/// Print the vocabulary as JSON
#[derive(Debug, FromArgs, PartialEq)]
#[argh(subcommand, name = "vocabulary")]
pub struct VocabularyCommand {}
