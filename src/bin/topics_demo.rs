//! Demo that fetches the current hot-topics list through the store and prints
//! it (point API_BASE_URL at a running backend first).

use std::sync::Arc;

use chrono::Local;
use hot_topics_client::{HttpTopicsClient, Settings, Source, TopicStore};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let settings = Settings::load().expect("load settings");
    let client = HttpTopicsClient::from_settings(&settings);
    let store = TopicStore::new(Arc::new(client));

    store.fetch_topics(None).await;
    print_state("all sources", &store);

    store.fetch_topics(Some(Source::Weibo)).await;
    print_state("weibo only", &store);

    println!("topics-demo done");
}

fn print_state(label: &str, store: &TopicStore) {
    let state = store.snapshot();
    match state.error {
        Some(err) => println!("[{label}] fetch failed: {err}"),
        None => {
            println!(
                "[{label}] {} topics @ {}",
                state.topics.len(),
                Local::now().format("%H:%M:%S")
            );
            for t in &state.topics {
                println!(
                    "  #{:<3} [{}] {} ({})",
                    t.rank,
                    t.source,
                    t.title,
                    t.hot_value.as_deref().unwrap_or("-")
                );
            }
        }
    }
}
