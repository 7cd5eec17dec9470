use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "match-client")]
#[command(about = "Match résumés against a job description and browse the results", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base URL of the matching service (overrides MATCH_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit one or more résumés and a job description
    Match {
        /// Résumé PDF; repeat for a batch
        #[arg(long = "resume", value_name = "PDF", required = true)]
        resumes: Vec<PathBuf>,

        /// Job description as a .txt file (wins over --jd-text)
        #[arg(long, value_name = "TXT")]
        jd_file: Option<PathBuf>,

        /// Job description as inline text
        #[arg(long, value_name = "TEXT")]
        jd_text: Option<String>,

        /// Show details for this 1-based result instead of the first success
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
        select: Option<u64>,

        /// Keep prompting for results to display
        #[arg(long, short)]
        interactive: bool,

        /// Print the normalized results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Send free-text feedback
    Feedback {
        text: String,
    },
}
