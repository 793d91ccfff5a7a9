//! フィード取得のデモハーネス
//!
//! 固定シナリオ（Alice/Bobの相互フォローと投稿1件ずつ）を組み立てて、
//! 両者のニュースフィードをJSONで出力する。

use anyhow::Result;
use kizuna::{AppConfig, SocialGraph};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct FeedReport {
    user: String,
    posts: Vec<String>,
}

fn main() -> Result<()> {
    init_logging();

    let config = AppConfig::from_env();
    let mut graph = SocialGraph::with_config(&config)?;

    let alice = graph.add_user("Alice", 25);
    let bob = graph.add_user("Bob", 30);

    // 相互フォローは両方向を明示的に張る
    graph.add_friend(alice, bob)?;
    graph.add_friend(bob, alice)?;

    graph.add_post(alice, "Hello, world!")?;
    graph.add_post(bob, "I love coding!")?;

    let mut reports = Vec::new();
    for (name, id) in [("Alice", alice), ("Bob", bob)] {
        let feed = graph.get_news_feed(id)?;
        let posts = graph
            .resolve_feed(&feed)
            .iter()
            .map(|post| post.content.clone())
            .collect();
        reports.push(FeedReport {
            user: name.to_string(),
            posts,
        });
    }

    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kizuna=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
