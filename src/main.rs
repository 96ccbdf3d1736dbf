extern crate clap;

use clap::{Args, Parser, Subcommand};
use dtoken::auth;

#[derive(Parser)]
#[command(version = "0.1")]
struct Opts {
    #[command(subcommand)]
    subcmd: SubCommand,
}

#[derive(Subcommand)]
enum SubCommand {
    Url(UrlCommand),
    Exchange(ExchangeCommand),
}

#[derive(Args)]
struct UrlCommand {
    app_key: String,
}

#[derive(Args)]
struct ExchangeCommand {
    code: String,
    app_key: String,
    app_secret: String,
}

async fn exchange(command: ExchangeCommand) -> Result<(), Box<dyn std::error::Error>> {
    let ExchangeCommand {
        code,
        app_key,
        app_secret,
    } = command;

    println!("Canjeando código por Refresh Token permanente...");
    let result = auth::exchange(&code, &app_key, &app_secret).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let opts = Opts::parse();

    match opts.subcmd {
        SubCommand::Url(command) => {
            println!("{}", auth::authorize_url(&command.app_key));
        }
        SubCommand::Exchange(command) => {
            exchange(command).await?;
        }
    }

    Ok(())
}
