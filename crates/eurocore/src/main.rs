mod commands;

use anyhow::Context;
use serde::Serialize;

use eurocore_client::Client;
use eurocore_core::config::ClientConfig;

use commands::Command;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    eurocore_core::logging::init("eurocore")?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(args.as_slice())?;

    let cfg = ClientConfig::load()?;
    tracing::debug!(?cfg, "loaded config");
    let client = Client::with_config(cfg)?;

    match command {
        Command::Telegrams => {
            let list = client
                .get_telegrams()
                .await
                .context("list telegrams")?;
            print_json(&list)?;
        }
        Command::SendTelegram(tg) => {
            client
                .send_telegram(&tg)
                .await
                .with_context(|| format!("send telegram {} to {}", tg.id, tg.recipient))?;
            tracing::info!(recipient = %tg.recipient, tg_type = %tg.tg_type, "telegram queued");
        }
        Command::DeleteTelegram(del) => {
            client
                .delete_telegram(&del)
                .await
                .with_context(|| format!("delete telegram {} to {}", del.id, del.recipient))?;
            tracing::info!(recipient = %del.recipient, "telegram removed");
        }
        Command::DeleteDispatch(id) => {
            let status = client
                .delete_dispatch(id)
                .await
                .with_context(|| format!("delete dispatch {id}"))?;
            print_json(&status)?;
        }
        Command::Template(id) => {
            let template = client
                .get_template(&id)
                .await
                .with_context(|| format!("fetch template {id}"))?;
            print_json(&template)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let txt = serde_json::to_string_pretty(value)?;
    println!("{txt}");
    Ok(())
}
