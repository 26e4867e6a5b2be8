use anyhow::{Context, Result};

/// Document fetched when no URL is given on the command line.
const DEFAULT_URL: &str = "https://www.terriblytinytales.com/test.txt";

/// Resolve the document URL: CLI argument, then WORDHIST_URL, then the default.
pub fn document_url(cli_url: Option<&str>) -> String {
    match cli_url {
        Some(url) => url.to_string(),
        None => std::env::var("WORDHIST_URL").unwrap_or_else(|_| DEFAULT_URL.to_string()),
    }
}

/// Fetch the full body of the document at `url` as text.
pub async fn fetch_text(url: &str) -> Result<String> {
    let response = reqwest::get(url)
        .await
        .with_context(|| format!("Failed to fetch document: {}", url))?
        .error_for_status()
        .with_context(|| format!("Server returned an error for: {}", url))?;

    let text = response
        .text()
        .await
        .with_context(|| format!("Failed to read response body from: {}", url))?;

    Ok(text)
}
