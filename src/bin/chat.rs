use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};

use chat_relay::{
    config::Config,
    services::{conversation::ConversationView, relay_client::HttpRelayClient},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    chat_relay::init_tracing();
    let config = Config::from_env();

    let client = HttpRelayClient::new(&config.relay_url);
    let mut view = ConversationView::new();
    println!("AI Chatbot ({})", client.endpoint());
    println!("{}", view.render());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        view.set_draft(&line);
        if !view.submit(&client).await {
            continue;
        }
        println!("{}", view.render());
    }
    Ok(())
}
