use std::path::PathBuf;

use anyhow::Result;

use crate::analyzer;
use crate::chart;
use crate::export;
use crate::fetch;
use crate::session::Session;

/// Fetches the document and renders a word-frequency bar chart.
///
/// Pipeline: Fetch → Tokenize and count → Rank → Render.
pub async fn analyze(url: Option<&str>, top: usize) -> Result<()> {
    let url = fetch::document_url(url);
    let mut session = Session::new();
    session.begin()?;

    println!("  Fetching document: {}", url);
    let text = match fetch::fetch_text(&url).await {
        Ok(text) => text,
        Err(e) => {
            session.fail();
            return Err(e);
        }
    };
    println!("  Fetched {} characters.", text.len());

    session.complete(analyzer::analyze_top(&text, top));

    match session.ranked() {
        Some(entries) => {
            println!("  Charting the {} most frequent words:\n", entries.len());
            println!("{}", chart::render(entries));
        }
        None => println!("  The document contains no words."),
    }

    Ok(())
}

/// Fetches the document and writes the ranked list to a file.
///
/// Pipeline: Fetch → Tokenize and count → Rank → Serialize → Write.
pub async fn export(
    url: Option<&str>,
    top: usize,
    output: Option<PathBuf>,
    format: export::Format,
) -> Result<()> {
    let url = fetch::document_url(url);
    let mut session = Session::new();
    session.begin()?;

    println!("  Fetching document: {}", url);
    let text = match fetch::fetch_text(&url).await {
        Ok(text) => text,
        Err(e) => {
            session.fail();
            return Err(e);
        }
    };
    println!("  Fetched {} characters.", text.len());

    session.complete(analyzer::analyze_top(&text, top));

    let Some(entries) = session.ranked() else {
        anyhow::bail!("The document contains no words; nothing to export");
    };

    let contents = export::serialize(entries, format)?;
    let path = output.unwrap_or_else(|| PathBuf::from(format.default_filename()));
    export::write_file(&path, &contents)?;
    println!("  Exported {} entries to '{}'.", entries.len(), path.display());

    Ok(())
}
