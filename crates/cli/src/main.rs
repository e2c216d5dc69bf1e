use clap::Parser;
use pdfsift_core::config::SearchConfig;
use pdfsift_core::error::SearchError;
use pdfsift_core::pipeline;
use providers::ProviderError;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pdfsift")]
#[command(
    about = "LLM-powered concept filter for folders of PDF documents",
    long_about = "Goes through a folder and filters its PDFs by a concept/topic string, \
                  printing the paths of the documents that match. Requires an OpenAI API key \
                  in OPENAI_API_KEY."
)]
struct Cli {
    /// Directory containing the '.pdf' files to filter
    dir: PathBuf,

    /// Concept the PDFs need to match
    concept: String,

    /// Emit per-file diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(matches) => {
            for path in matches {
                println!("{}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!(error = %err, "run aborted");
            ExitCode::from(exit_code(&err))
        }
    }
}

async fn run(cli: Cli) -> Result<Vec<PathBuf>, SearchError> {
    let config = SearchConfig::new(cli.dir, cli.concept)?;
    let registry = pipeline::build_registry();
    pipeline::run(&config, &registry).await
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "off" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_code(err: &SearchError) -> u8 {
    match err {
        SearchError::InvalidDirectory(_) | SearchError::EmptyConcept => 1,
        SearchError::Provider(ProviderError::RequestFailed(_)) => 2,
        SearchError::Provider(_) => 3,
    }
}
