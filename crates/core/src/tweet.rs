use serde::Deserialize;

/// Tweet record as it appears in the scraper's JSON output.
///
/// Every field is optional at this layer. Required-field checks and
/// defaulting happen once, in [`Tweet::from_raw`], instead of at each use
/// site.
#[derive(Debug, Deserialize, Clone)]
pub struct RawTweet {
    pub created_at: Option<String>,
    pub text: Option<String>,
    pub user: Option<RawAuthor>,
    pub favorite_count: Option<u64>,
    pub retweet_count: Option<u64>,
    pub reply_count: Option<u64>,
    pub url: Option<String>,
    #[serde(rename = "imageOcrResults")]
    pub image_ocr_results: Option<Vec<ImageOcrResult>>,
}

/// Author sub-record of the wire format.
#[derive(Debug, Deserialize, Clone)]
pub struct RawAuthor {
    pub screen_name: Option<String>,
    pub name: Option<String>,
}

/// OCR output for one image attached to a tweet.
///
/// `confidence` is a 0-100 score; absent means 0.
#[derive(Debug, Deserialize, Clone)]
pub struct ImageOcrResult {
    #[serde(rename = "ocrText")]
    pub ocr_text: Option<String>,
    pub confidence: Option<f64>,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("tweet #{ordinal} is missing required field `{field}`")]
    MissingField { ordinal: usize, field: &'static str },
}

/// Validated tweet record with defaults applied.
#[derive(Debug, Clone)]
pub struct Tweet {
    pub created_at: String,
    pub text: String,
    pub author: Author,
    pub favorite_count: u64,
    pub retweet_count: u64,
    pub reply_count: u64,
    pub url: Option<String>,
    pub image_ocr_results: Vec<ImageOcrResult>,
}

#[derive(Debug, Clone)]
pub struct Author {
    pub screen_name: String,
    pub name: String,
}

impl Tweet {
    /// Validate a raw record, applying defaults for the optional fields.
    ///
    /// `ordinal` is the record's 1-based position in the batch and is only
    /// used for error reporting. Missing stat counts default to 0; a missing
    /// `url` or OCR list stays absent. A missing timestamp, body, or author
    /// identity is an error naming the field and the ordinal.
    pub fn from_raw(raw: RawTweet, ordinal: usize) -> Result<Self, Error> {
        let missing = |field: &'static str| Error::MissingField { ordinal, field };

        let created_at = raw.created_at.ok_or_else(|| missing("created_at"))?;
        let text = raw.text.ok_or_else(|| missing("text"))?;
        let user = raw.user.ok_or_else(|| missing("user"))?;

        Ok(Tweet {
            created_at,
            text,
            author: Author {
                screen_name: user
                    .screen_name
                    .ok_or_else(|| missing("user.screen_name"))?,
                name: user.name.ok_or_else(|| missing("user.name"))?,
            },
            favorite_count: raw.favorite_count.unwrap_or(0),
            retweet_count: raw.retweet_count.unwrap_or(0),
            reply_count: raw.reply_count.unwrap_or(0),
            url: raw.url,
            image_ocr_results: raw.image_ocr_results.unwrap_or_default(),
        })
    }
}

/// Validate a whole batch, preserving input order.
///
/// Ordinals are assigned by position, 1-based. The first record with a
/// missing required field fails the whole batch; there is no per-record
/// skipping.
pub fn validate_batch(raw: Vec<RawTweet>) -> Result<Vec<Tweet>, Error> {
    raw.into_iter()
        .enumerate()
        .map(|(i, tweet)| Tweet::from_raw(tweet, i + 1))
        .collect()
}
