use anyhow::Result;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tokio::time::sleep;
use url::Url;

static BULLETIN_INDEX_URL: &str =
    "https://www.afro.who.int/health-topics/disease-outbreaks/outbreaks-and-other-emergencies-updates";

const MAX_RETRIES: usize = 3;
const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Walk the paged bulletin index and collect `(label, url)` pairs for every
/// linked PDF. Stops at the first page with no PDF links or at `page_limit`.
pub async fn fetch_bulletin_links(
    client: &Client,
    page_limit: usize,
) -> Result<Vec<(String, String)>> {
    let selector =
        Selector::parse(r#"a[href$=".pdf"]"#).expect("Invalid CSS selector for .pdf links");
    let base = Url::parse(BULLETIN_INDEX_URL)?;

    let mut links = Vec::new();
    for page in 0..page_limit {
        let page_url = if page == 0 {
            BULLETIN_INDEX_URL.to_string()
        } else {
            format!("{BULLETIN_INDEX_URL}?page={page}")
        };

        let mut attempt = 0;
        // retry loop
        let page_links: Vec<(String, String)> = loop {
            attempt += 1;
            let resp = client.get(&page_url).send().await;
            match resp {
                Ok(resp) if resp.status().is_success() => match resp.text().await {
                    Ok(html) => {
                        let doc = Html::parse_document(&html);
                        break doc
                            .select(&selector)
                            .filter_map(|a| {
                                let href = a.value().attr("href")?;
                                let url = base.join(href).ok()?;
                                let label = {
                                    let text = a.text().collect::<String>().trim().to_string();
                                    if text.is_empty() {
                                        url.path_segments()
                                            .and_then(|s| s.last())
                                            .unwrap_or("bulletin")
                                            .to_string()
                                    } else {
                                        text
                                    }
                                };
                                Some((label, url.to_string()))
                            })
                            .collect();
                    }
                    Err(_) if attempt < MAX_RETRIES => {
                        sleep(RETRY_DELAY).await;
                        continue;
                    }
                    Err(e) => return Err(e.into()),
                },
                Err(_) if attempt < MAX_RETRIES => {
                    sleep(RETRY_DELAY).await;
                    continue;
                }
                Ok(resp) => return Err(anyhow::anyhow!("HTTP error: {}", resp.status())),
                Err(e) => return Err(e.into()),
            }
        };

        if page_links.is_empty() {
            break;
        }
        links.extend(page_links);
    }

    Ok(links)
}
