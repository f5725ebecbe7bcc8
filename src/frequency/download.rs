// Word list download helper.
//
// Fetches the 50k-word frequency list for a language from the FrequencyWords
// project (subtitle-corpus counts, one `word count` pair per line). Lists are
// stored in a platform-appropriate directory
// (~/.local/share/fuse/wordlists/ on Linux) so they persist across runs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

/// Base URL of the FrequencyWords 2018 lists.
const WORDLIST_BASE_URL: &str =
    "https://raw.githubusercontent.com/hermitdave/FrequencyWords/master/content/2018";

/// Returns the default directory for storing word lists.
pub fn default_wordlist_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fuse")
        .join("wordlists")
}

/// File name of the list for a language (e.g. `en_50k.txt`).
pub fn wordlist_file_name(language: &str) -> String {
    format!("{language}_50k.txt")
}

/// Remote URL of the list for a language.
pub fn wordlist_url(language: &str) -> String {
    format!(
        "{}/{}/{}",
        WORDLIST_BASE_URL,
        language,
        wordlist_file_name(language)
    )
}

/// Download the word list for `language` to `dest`, unless it already exists.
///
/// Returns `true` if a file was downloaded.
pub async fn download_wordlist(language: &str, dest: &Path) -> Result<bool> {
    if dest.exists() {
        info!(path = %dest.display(), "Word list already exists, skipping");
        return Ok(false);
    }

    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create word list directory: {}", parent.display()))?;
    }

    let url = wordlist_url(language);
    download_file(&url, dest).await?;
    Ok(true)
}

/// Download a single file from a URL to a local path with a progress bar.
async fn download_file(url: &str, dest: &Path) -> Result<()> {
    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to download {}", url))?;

    if !response.status().is_success() {
        anyhow::bail!("Download failed with status {}: {}", response.status(), url);
    }

    let pb = match response.content_length() {
        Some(size) => {
            let pb = ProgressBar::new(size);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("    [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                    .expect("valid template")
                    .progress_chars("=> "),
            );
            pb
        }
        None => {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("    {spinner} {bytes}")
                    .expect("valid template"),
            );
            pb
        }
    };

    let bytes = response
        .bytes()
        .await
        .context("Failed to read response body")?;
    pb.set_position(bytes.len() as u64);

    std::fs::write(dest, &bytes).with_context(|| format!("Failed to write {}", dest.display()))?;
    pb.finish_and_clear();

    info!("Downloaded {} to {}", url, dest.display());
    Ok(())
}
