use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use std::path::{Path, PathBuf};
use tokio::fs;

static UNSAFE_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\-. ]").expect("sanitize pattern"));

/// Turn a bulletin link label into a safe `.pdf` filename.
pub fn sanitize_label(label: &str) -> String {
    format!("{}.pdf", UNSAFE_CHARS.replace_all(label.trim(), "_"))
}

/// Download one bulletin PDF into `dest_dir` under its sanitized label.
/// Returns `None` when the file already exists (previous runs are never
/// re-downloaded).
pub async fn download_pdf(
    client: &Client,
    label: &str,
    url: &str,
    dest_dir: impl AsRef<Path>,
) -> Result<Option<PathBuf>> {
    let dest_dir = dest_dir.as_ref();
    let dest_path = dest_dir.join(sanitize_label(label));

    if fs::try_exists(&dest_path).await? {
        return Ok(None);
    }
    fs::create_dir_all(dest_dir).await?;

    let resp = client.get(url).send().await?.error_for_status()?;
    let bytes = resp.bytes().await?;
    fs::write(&dest_path, &bytes).await?;

    Ok(Some(dest_path))
}
