//! pubquiz CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "pubquiz", version, about = "Daily pub trivia practice quiz")]
struct Cli {
    /// Path to the question dataset CSV
    #[arg(long, global = true, default_value = "questions.csv")]
    questions: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the daily quiz questions
    Show {
        /// Quiz date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,

        /// Question pool: all, pub-only
        #[arg(long, default_value = "all")]
        mode: String,
    },

    /// Play the daily quiz interactively
    Play {
        /// Quiz date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,

        /// Question pool: all, pub-only
        #[arg(long, default_value = "all")]
        mode: String,

        /// Print the per-question breakdown after grading
        #[arg(long)]
        details: bool,

        /// Save the graded report JSON to this path
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Grade answers from a file against the daily quiz
    Grade {
        /// Quiz date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,

        /// Question pool: all, pub-only
        #[arg(long, default_value = "all")]
        mode: String,

        /// File with one answer per line, in quiz order
        #[arg(long)]
        answers: PathBuf,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,

        /// Save the graded report JSON to this path
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Validate a question dataset
    Validate,

    /// Create a starter questions.csv
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pubquiz_core=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show { date, mode } => commands::show::execute(cli.questions, date, mode),
        Commands::Play {
            date,
            mode,
            details,
            output,
        } => commands::play::execute(cli.questions, date, mode, details, output),
        Commands::Grade {
            date,
            mode,
            answers,
            format,
            output,
        } => commands::grade::execute(cli.questions, date, mode, answers, format, output),
        Commands::Validate => commands::validate::execute(cli.questions),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
