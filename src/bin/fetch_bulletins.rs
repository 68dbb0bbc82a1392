use anyhow::Result;
use oewscraper::fetch;
use reqwest::Client;
use std::{env, path::PathBuf, sync::Arc};
use tokio::sync::Semaphore;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

const PAGE_LIMIT: usize = 10;
const CONCURRENT_DOWNLOADS: usize = 5;

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env_filter).init();

    let dest_dir = PathBuf::from(
        env::args()
            .nth(1)
            .unwrap_or_else(|| "bulletins".to_string()),
    );

    let client = Client::new();
    let links = fetch::urls::fetch_bulletin_links(&client, PAGE_LIMIT).await?;
    info!(count = links.len(), "bulletin PDFs discovered");

    let sem = Arc::new(Semaphore::new(CONCURRENT_DOWNLOADS));
    let mut handles = Vec::with_capacity(links.len());

    for (label, url) in links {
        let client = client.clone();
        let dest_dir = dest_dir.clone();
        let sem = sem.clone();

        handles.push(tokio::spawn(async move {
            let _permit = sem.acquire().await.expect("semaphore closed");
            match fetch::pdfs::download_pdf(&client, &label, &url, &dest_dir).await {
                Ok(Some(path)) => info!(path = %path.display(), "downloaded"),
                Ok(None) => info!(label = %label, "skipped, already present"),
                Err(e) => error!(label = %label, "download failed: {e}"),
            }
        }));
    }

    futures::future::join_all(handles).await;
    info!("fetch complete");
    Ok(())
}
