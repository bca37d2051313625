//! Finds the machine-readable ownership document on a filing detail page.

use url::Url;

use crate::core::EdgarError;

/// Hrefs whose target is a rendering of the document rather than the document.
pub const DEFAULT_EXCLUDED_PATTERNS: &[&str] = &["primary_doc", "xslF345"];

/// All `href` values of `<a>` tags, in page order.
pub(crate) fn iter_anchor_hrefs(html: &str) -> Vec<String> {
    let lower = html.to_ascii_lowercase();
    let mut res = Vec::new();
    let mut pos = 0usize;

    while let Some(ai) = lower[pos..].find("<a") {
        let ai = pos + ai;
        let open_end = match lower[ai..].find('>') {
            Some(x) => ai + x,
            None => break,
        };
        pos = open_end + 1;

        // `<abbr>`, `<area>` and friends share the prefix.
        let after = lower.as_bytes().get(ai + 2).copied().unwrap_or(b'>');
        if !(after.is_ascii_whitespace() || after == b'>') {
            continue;
        }

        let Some(hi) = href_attr_start(&lower[ai..open_end]) else {
            continue;
        };
        let bytes = lower.as_bytes();
        let mut i = ai + hi + 4;
        while i < open_end && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= open_end || bytes[i] != b'=' {
            continue;
        }
        i += 1;
        while i < open_end && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        // Slice the input (not the lowercased copy) so paths keep their case.
        let value = &html[i..open_end];
        if let Some(v) = quoted_value(value) {
            res.push(v.replace("&amp;", "&"));
        }
    }
    res
}

// Offset of an `href` attribute name inside `tag`: preceded by whitespace and
// followed by `=`. Skips `data-href=` and `href` text inside quoted values.
fn href_attr_start(tag: &str) -> Option<usize> {
    let bytes = tag.as_bytes();
    let mut quote: Option<u8> = None;
    for (i, &b) in bytes.iter().enumerate() {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None => {
                if b.is_ascii_whitespace()
                    && tag[i + 1..].starts_with("href")
                    && tag[i + 5..].trim_start().starts_with('=')
                {
                    return Some(i + 1);
                }
            }
        }
    }
    None
}

fn quoted_value(s: &str) -> Option<&str> {
    let mut chars = s.chars();
    match chars.next()? {
        q @ ('"' | '\'') => {
            let inner = &s[1..];
            inner.find(q).map(|end| &inner[..end])
        }
        _ => {
            let end = s
                .find(|c: char| c.is_ascii_whitespace() || c == '>')
                .unwrap_or(s.len());
            Some(&s[..end])
        }
    }
}

/// The first `.xml` link on `html` that matches none of `excluded`, resolved
/// against `page_url`.
pub fn resolve_document_url<S: AsRef<str>>(
    html: &str,
    page_url: &Url,
    excluded: &[S],
) -> Result<Url, EdgarError> {
    let href = iter_anchor_hrefs(html)
        .into_iter()
        .find(|h| h.contains(".xml") && !excluded.iter().any(|p| h.contains(p.as_ref())))
        .ok_or_else(|| EdgarError::MissingLink(page_url.to_string()))?;

    Ok(page_url.join(&href)?)
}
