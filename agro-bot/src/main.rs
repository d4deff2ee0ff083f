//! Binary for the MSCE Agriculture assistant.

use anyhow::Result;
use clap::Parser;
use agro_bot::{ask_once, generate_question_once, load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::Ask { question, token } => {
            let config = load_config(token)?;
            let answer = ask_once(config, &question.join(" ")).await?;
            println!("{}", answer);
            Ok(())
        }
        Commands::GenerateQuestion { text, token } => {
            let config = load_config(token)?;
            let question = generate_question_once(config, &text.join(" ")).await?;
            println!("{}", question);
            Ok(())
        }
    }
}
