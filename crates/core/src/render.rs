use chrono::DateTime;

use crate::tweet::Tweet;

/// Twitter's `created_at` wire format, e.g. `Sat May 10 18:57:04 +0000 2025`.
const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Human-readable form, e.g. `May 10, 2025 at 06:57 PM`.
const DISPLAY_FORMAT: &str = "%B %d, %Y at %I:%M %p";

/// Minimum OCR confidence required to render extracted text.
const OCR_CONFIDENCE_FLOOR: f64 = 60.0;

const DIVIDER_WIDTH: usize = 60;

const NO_READABLE_TEXT: &str = "[No readable text detected or confidence too low]";

/// Outcome of normalizing a `created_at` string.
///
/// `Unparsed` carries the original input unchanged. Callers branch on the
/// variant and render the fallback verbatim; an unrecognized timestamp is
/// never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateOutcome {
    Parsed(String),
    Unparsed(String),
}

impl DateOutcome {
    pub fn as_str(&self) -> &str {
        match self {
            DateOutcome::Parsed(s) | DateOutcome::Unparsed(s) => s,
        }
    }
}

/// Normalize Twitter's `created_at` timestamp to a human-readable form.
pub fn normalize_created_at(raw: &str) -> DateOutcome {
    match DateTime::parse_from_str(raw, CREATED_AT_FORMAT) {
        Ok(dt) => DateOutcome::Parsed(dt.format(DISPLAY_FORMAT).to_string()),
        Err(_) => DateOutcome::Unparsed(raw.to_string()),
    }
}

/// Render one tweet into its text block.
///
/// `ordinal` is the tweet's 1-based position in the batch. The block layout
/// is fixed: header, author, divider, content, an IMAGES section when OCR
/// results exist, stats, a URL line when present, closing divider, and a
/// trailing blank line separating this block from the next.
pub fn render_block(tweet: &Tweet, ordinal: usize) -> Vec<String> {
    let divider = "-".repeat(DIVIDER_WIDTH);
    let mut lines = Vec::new();

    let date = normalize_created_at(&tweet.created_at);
    lines.push(format!("TWEET #{ordinal} (Date: {})", date.as_str()));
    lines.push(format!(
        "Author: @{} ({})",
        tweet.author.screen_name, tweet.author.name
    ));
    lines.push(divider.clone());

    lines.push(format!("CONTENT: {}", tweet.text));
    lines.push(String::new());

    if !tweet.image_ocr_results.is_empty() {
        let count = tweet.image_ocr_results.len();
        let plural = if count > 1 { "s" } else { "" };
        lines.push(format!("IMAGES: {count} image{plural}"));

        for (i, image) in tweet.image_ocr_results.iter().enumerate() {
            lines.push(format!("IMAGE #{}:", i + 1));
            match &image.ocr_text {
                Some(text) if image.confidence.unwrap_or(0.0) >= OCR_CONFIDENCE_FLOOR => {
                    lines.push(text.clone());
                }
                _ => lines.push(NO_READABLE_TEXT.to_string()),
            }
            lines.push(String::new());
        }
    }

    lines.push(format!(
        "STATS: ♥️ {} | 🔄 {} | 💬 {}",
        tweet.favorite_count, tweet.retweet_count, tweet.reply_count
    ));

    if let Some(url) = &tweet.url {
        lines.push(format!("URL: {url}"));
    }

    lines.push(divider);
    lines.push(String::new());

    lines
}

/// Render the whole batch into one document, blocks in input order.
pub fn render_document(tweets: &[Tweet]) -> String {
    tweets
        .iter()
        .enumerate()
        .flat_map(|(i, tweet)| render_block(tweet, i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
