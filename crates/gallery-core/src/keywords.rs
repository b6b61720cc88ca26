//! Keyword generation helpers: the prompt sent to the generative API, the
//! parse of its response, and the seeded placeholder-photo URLs built from
//! each keyword. The network call itself lives in the web frontend; a failed
//! call or parse falls back to `FALLBACK_KEYWORDS`.

use thiserror::Error;

pub const KEYWORD_COUNT: usize = 20;
pub const DEFAULT_THEME: &str = "Dreamy Minimalist Art";

/// Used whenever keyword generation fails.
pub const FALLBACK_KEYWORDS: &[&str] = &["landscape", "nature", "travel", "abstract"];

#[derive(Debug, Error)]
pub enum KeywordError {
    #[error("keyword response was not a JSON string array: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("keyword response contained no usable strings")]
    Empty,
}

/// Prompt asking the generative API for a themed keyword set.
pub fn keyword_prompt(theme: &str) -> String {
    format!(
        "Generate {KEYWORD_COUNT} unique and visually diverse search keywords \
         for a high-quality photo gallery based on the theme: \"{theme}\". \
         Return as a simple JSON array of strings."
    )
}

/// Parse the API response body (a JSON array of strings), dropping blank
/// entries.
pub fn parse_keywords(body: &str) -> Result<Vec<String>, KeywordError> {
    let parsed: Vec<String> = serde_json::from_str(body)?;
    let keywords: Vec<String> = parsed
        .into_iter()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect();
    if keywords.is_empty() {
        return Err(KeywordError::Empty);
    }
    Ok(keywords)
}

pub fn fallback_keywords() -> Vec<String> {
    FALLBACK_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

/// Pad short keyword lists with neutral fillers and cap at `count` so every
/// search yields a full sphere.
pub fn pad_keywords(mut keywords: Vec<String>, count: usize) -> Vec<String> {
    while keywords.len() < count {
        keywords.push(format!("minimal-art-{}", keywords.len()));
    }
    keywords.truncate(count);
    keywords
}

/// Seeded placeholder-photo URL for a generated keyword. The index keeps
/// repeated keywords from resolving to the same image.
pub fn image_url(keyword: &str, index: usize) -> String {
    let seed = encode_seed(&format!("{keyword}{index}"));
    format!("https://picsum.photos/seed/{seed}/800/1000")
}

// Percent-encode everything outside the URL-unreserved set.
fn encode_seed(seed: &str) -> String {
    let mut out = String::with_capacity(seed.len());
    for b in seed.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}
