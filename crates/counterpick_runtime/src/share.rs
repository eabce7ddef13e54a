//! Share links and clipboard delivery.
//!
//! A share link is the page URL with the transport payload in one query
//! parameter. Opening a link consumes the parameter: the session loads the
//! payload once and keeps the URL without it, so reloading does not
//! re-import.

use counterpick_foundation::{Error, ErrorKind, Result};

/// Destination for a generated share link.
pub trait Clipboard {
    /// Delivers `text` to the user.
    ///
    /// # Errors
    ///
    /// Returns an error if delivery fails.
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// Clipboard that keeps the last copied text in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    /// Creates an empty clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last copied text.
    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Splits `url` into its parts: base, query (without `?`), fragment (with `#`).
fn split_url(url: &str) -> (&str, Option<&str>, &str) {
    let (rest, fragment) = match url.find('#') {
        Some(i) => url.split_at(i),
        None => (url, ""),
    };
    match rest.split_once('?') {
        Some((base, query)) => (base, Some(query), fragment),
        None => (rest, None, fragment),
    }
}

fn join_url(base: &str, pairs: &[&str], fragment: &str) -> String {
    if pairs.is_empty() {
        format!("{base}{fragment}")
    } else {
        format!("{base}?{}{fragment}", pairs.join("&"))
    }
}

/// Removes query parameter `name` from `url`.
///
/// Returns the decoded value of its first occurrence, if any, and the URL
/// with every occurrence removed.
#[must_use]
pub fn take_param(url: &str, name: &str) -> (Option<String>, String) {
    let (base, query, fragment) = split_url(url);
    let Some(query) = query else {
        return (None, url.to_string());
    };

    let mut value = None;
    let mut kept = Vec::new();
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
        if key == name {
            if value.is_none() {
                value = Some(percent_decode(raw));
            }
        } else {
            kept.push(pair);
        }
    }
    (value, join_url(base, &kept, fragment))
}

/// Builds a share link: `base` with parameter `name` set to `payload`.
///
/// Any existing occurrence of the parameter is replaced. The payload is
/// expected to be base64url, which needs no escaping.
#[must_use]
pub fn share_url(base: &str, name: &str, payload: &str) -> String {
    let (_, stripped) = take_param(base, name);
    let (base, query, fragment) = split_url(&stripped);
    let param = format!("{name}={payload}");
    let mut pairs: Vec<&str> = query
        .map(|q| q.split('&').filter(|p| !p.is_empty()).collect())
        .unwrap_or_default();
    pairs.push(&param);
    join_url(base, &pairs, fragment)
}

/// Delivers a link, mapping any failure to a share error.
///
/// # Errors
///
/// Returns [`ErrorKind::Share`] if the clipboard rejects the text.
pub fn deliver(clipboard: &mut dyn Clipboard, link: &str) -> Result<()> {
    clipboard.copy(link).map_err(|e| {
        if matches!(e.kind, ErrorKind::Share(_)) {
            e
        } else {
            Error::new(ErrorKind::Share(e.kind.to_string()))
        }
    })
}

/// Decodes `%XX` escapes; malformed escapes pass through unchanged.
///
/// `+` is kept literally since payloads may use the standard base64 alphabet.
fn percent_decode(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let escaped = (bytes[i] == b'%')
            .then(|| bytes.get(i + 1..i + 3))
            .flatten()
            .and_then(|h| std::str::from_utf8(h).ok())
            .and_then(|h| u8::from_str_radix(h, 16).ok());
        if let Some(byte) = escaped {
            out.push(byte);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}
