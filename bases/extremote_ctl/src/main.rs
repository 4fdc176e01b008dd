use clap::Parser;
use color_eyre::Result;
use extremote_protocol::Command;
mod commands;

use commands::Commands;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Server URL
    #[arg(long, default_value = "ipc:///tmp/extremote-commands")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let client = extremote_client::ExtRemoteClient::connect(&cli.server)?;

    match cli.command {
        Commands::Status => {
            let status = client.play_status()?;
            println!("{}", commands::describe(&status));
        }

        Commands::NowPlaying => {
            for response in [client.title()?, client.artist()?, client.album()?] {
                println!("{}", commands::describe(&response));
            }
        }

        Commands::Control { action } => {
            let action = commands::parse_action(&action)?;
            match client.control(action)? {
                Some(response) => println!("{}", commands::describe(&response)),
                None => println!("No reply (no active player?)"),
            }
        }

        Commands::Send { json } => {
            let command: Command = serde_json::from_str(&json)?;
            let responses = client.send(&command)?;
            println!("{}", serde_json::to_string_pretty(&responses)?);
        }
    }

    Ok(())
}
