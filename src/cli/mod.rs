use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod ask;
pub mod call;
pub mod serve;

#[derive(Subcommand)]
enum Command {
    /// Run the API server and browser UI
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "2222")]
        port: String,
    },
    /// Take calls from the terminal
    Call {
        /// Ask a running server for replies instead of answering
        /// in-process
        #[arg(long, action, default_value = "false")]
        remote: bool,

        /// Base URL of the server, implies --remote
        #[arg(long)]
        url: Option<String>,
    },
    /// Print the assistant's reply to a single utterance
    Ask {
        text: String,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await?;
        }
        Some(Command::Call { remote, url }) => {
            call::run(remote, url).await?;
        }
        Some(Command::Ask { text }) => {
            ask::run(&text);
        }
        None => {}
    }

    Ok(())
}
