mod catalog;
mod classifier;
mod config;
mod engine;
mod formatter;
mod generator;
mod model;
mod normalizer;
mod resolver;

use catalog::CatalogStore;
use config::{load_config, AppConfig};
use engine::{ConversationContext, Engine, Outcome};
use generator::{Generator, OpenAiGenerator};
use model::ChatMessage;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info, warn};

const SYSTEM_PROMPT: &str = "You are a helpful Noah Tires assistant. Provide information \
about tires, wheels, deals, appointments, and more from Noah Tires.";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config: Arc<AppConfig> = match load_config("config.json") {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    // The catalog is the engine's only data; without it there is nothing
    // to serve.
    let catalog = match CatalogStore::load(&config.catalog_path) {
        Ok(c) => c,
        Err(e) => {
            error!("Catalog load error: {}", e);
            return;
        }
    };
    info!("Catalog loaded: {} tires", catalog.all().len());

    let engine = Engine::new(catalog, &config.known_brands);
    let llm = match OpenAiGenerator::new(config.openai_api_key.clone(), config.openai_model.clone())
    {
        Ok(g) => g,
        Err(e) => {
            error!("HTTP client build error: {}", e);
            return;
        }
    };

    let mut history = vec![ChatMessage::system(SYSTEM_PROMPT)];
    let mut ctx = ConversationContext::default();

    println!("🛞 Noah Tires assistant ready. Ask about tires (Ctrl-D to quit).");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    let mut stdout = tokio::io::stdout();

    loop {
        if stdout.write_all(b"> ").await.and(stdout.flush().await).is_err() {
            break;
        }
        let utterance = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                error!("stdin read error: {}", e);
                break;
            }
        };
        if utterance.trim().is_empty() {
            continue;
        }

        history.push(ChatMessage::user(utterance.trim()));

        match engine.interpret(utterance.trim(), &ctx) {
            Outcome::Reply {
                reply,
                resolved_model,
            } => {
                println!("{}", reply.summary);
                for card in &reply.cards {
                    println!(
                        "  {} {} - Size: {}\n    Price: {} | Rating: {} | Stock: {}\n    Buy: {}",
                        card.brand,
                        card.model,
                        card.size,
                        card.price,
                        card.rating,
                        card.stock,
                        card.product_url
                    );
                }
                history.push(ChatMessage::assistant(reply.summary.clone()));
                if let Some(model) = resolved_model {
                    ctx.last_resolved_model = Some(model);
                }
            }
            Outcome::Defer => {
                info!("No structured match, consulting generator...");
                match llm.generate(&history).await {
                    Ok(text) => {
                        println!("{}", text);
                        history.push(ChatMessage::assistant(text));
                    }
                    Err(e) => {
                        // Never dressed up as "no tires found": the user
                        // should see the assistant is down, not a miss.
                        warn!("Generator failure: {:?}", e);
                        println!("⚠️ The assistant is temporarily unavailable. Please try again.");
                    }
                }
            }
        }
    }

    info!("Session ended.");
}
