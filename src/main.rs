use clap::Parser;
use tracing_subscriber::EnvFilter;

mod classification;
mod cli;
mod core;
mod parsing;
mod pipeline;
mod report;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("smorf_annotator=debug,info")
    } else {
        EnvFilter::new("smorf_annotator=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Annotate(args) => {
            cli::annotate::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Intersect(args) => {
            cli::intersect::run(args)?;
        }
        cli::Commands::Summary(args) => {
            cli::summary::run(args, cli.format)?;
        }
    }

    Ok(())
}
