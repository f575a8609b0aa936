use std::fs;
use std::path::{Path, PathBuf};

use crate::prelude::{println, *};
use tweetfmt_core::render::render_document;
use tweetfmt_core::tweet::{validate_batch, RawTweet, Tweet};

/// Read, render, and persist the whole batch.
///
/// The document is rendered in full before anything is written, so a bad
/// record never leaves a partial output file behind.
pub fn run(app: crate::App) -> Result<()> {
    let document = format_file(&app.input)?;

    println!("{}", document);

    let output_path = derive_output_path(&app.input);
    fs::write(&output_path, &document)
        .wrap_err_with(|| f!("Failed to write {}", output_path.display()))?;

    println!();
    println!("Formatted output saved to {}", output_path.display());

    Ok(())
}

/// Load and validate the input file, then render it to one document.
pub fn format_file(input: &Path) -> Result<String> {
    let tweets = load_tweets(input)?;
    Ok(render_document(&tweets))
}

fn load_tweets(input: &Path) -> Result<Vec<Tweet>> {
    let contents =
        fs::read_to_string(input).wrap_err_with(|| f!("Failed to read {}", input.display()))?;

    let raw: Vec<RawTweet> = serde_json::from_str(&contents)
        .wrap_err_with(|| f!("Invalid tweet JSON in {}", input.display()))?;

    Ok(validate_batch(raw)?)
}

/// Derive the output path from the input file name.
///
/// A trailing `.json` extension is replaced by `_formatted.txt`; names
/// without one get the suffix appended.
pub fn derive_output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let stem = name.strip_suffix(".json").unwrap_or(&name);
    input.with_file_name(f!("{stem}_formatted.txt"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_TWEETS: &str = r#"[
        {
            "created_at": "Sat May 10 18:57:04 +0000 2025",
            "text": "promo day",
            "user": { "screen_name": "shopbot", "name": "Shop Bot" },
            "favorite_count": 3,
            "imageOcrResults": [
                { "ocrText": "SALE 50% OFF", "confidence": 80 }
            ]
        },
        {
            "created_at": "Sun May 11 09:00:00 +0000 2025",
            "text": "quiet day",
            "user": { "screen_name": "someone", "name": "Some One" },
            "url": "https://example.com/2"
        }
    ]"#;

    #[test]
    fn test_derive_output_path_json_extension() {
        let path = derive_output_path(Path::new("/data/tweets.json"));
        assert_eq!(path, PathBuf::from("/data/tweets_formatted.txt"));
    }

    #[test]
    fn test_derive_output_path_without_json_extension() {
        let path = derive_output_path(Path::new("/data/tweets.dump"));
        assert_eq!(path, PathBuf::from("/data/tweets.dump_formatted.txt"));
    }

    #[test]
    fn test_format_file_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let result = format_file(&dir.path().join("nope.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_format_file_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tweets.json");
        fs::write(&input, "this is not json").unwrap();

        let err = format_file(&input).unwrap_err();
        assert!(err.to_string().contains("Invalid tweet JSON"));
    }

    #[test]
    fn test_missing_required_field_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tweets.json");
        fs::write(
            &input,
            r#"[{ "created_at": "Sat May 10 18:57:04 +0000 2025", "user": { "screen_name": "a", "name": "b" } }]"#,
        )
        .unwrap();

        let result = run(crate::App {
            input: input.clone(),
        });
        let err = result.unwrap_err();
        assert!(err.to_string().contains("text"));
        assert!(err.to_string().contains("#1"));
        assert!(!derive_output_path(&input).exists());
    }

    #[test]
    fn test_run_writes_formatted_document() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tweets.json");
        fs::write(&input, TWO_TWEETS).unwrap();

        run(crate::App {
            input: input.clone(),
        })
        .unwrap();

        let output = fs::read_to_string(derive_output_path(&input)).unwrap();
        assert!(output.starts_with("TWEET #1 (Date: May 10, 2025 at 06:57 PM)"));
        assert!(output.contains("Author: @shopbot (Shop Bot)"));
        assert!(output.contains("IMAGES: 1 image\nIMAGE #1:\nSALE 50% OFF"));
        assert!(output.contains("STATS: ♥️ 3 | 🔄 0 | 💬 0"));
        assert!(output.contains("TWEET #2"));
        assert!(output.contains("URL: https://example.com/2"));
    }
}
