use crate::types::signals::UrlSignals;
use once_cell::sync::Lazy;
use regex::Regex;
use url::{ParseError, Url};

static RE_READABLE_SLUG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug regex"));
/// Anchor for addresses given without scheme or host.
static RELATIVE_BASE: Lazy<Url> =
    Lazy::new(|| Url::parse("http://relative.invalid/").expect("relative base url"));

/// Where an anchor's `href` points once resolved against the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    Web(Url),
    /// Relative reference with no page address to resolve it against.
    SamePage,
    /// Non-web scheme or unparseable reference.
    Other,
}

/// Resolves `href` against the page address. Relative references need a
/// base; protocol-relative ones are given `https` when there is none.
pub fn resolve(href: &str, base: Option<&Url>) -> LinkTarget {
    let href = href.trim();
    let parsed = match (Url::parse(href), base) {
        (Ok(url), _) => Ok(url),
        (Err(ParseError::RelativeUrlWithoutBase), Some(base)) => base.join(href),
        (Err(ParseError::RelativeUrlWithoutBase), None) if href.starts_with("//") => {
            Url::parse(&format!("https:{href}"))
        }
        (Err(ParseError::RelativeUrlWithoutBase), None) => return LinkTarget::SamePage,
        (Err(err), _) => Err(err),
    };
    match parsed {
        Ok(url) if matches!(url.scheme(), "http" | "https") => LinkTarget::Web(url),
        _ => LinkTarget::Other,
    }
}

/// Host without a leading `www.`; the crate already lowercases it and drops
/// userinfo and port.
pub fn site_host(url: &Url) -> Option<String> {
    url.host_str()
        .map(|host| host.strip_prefix("www.").unwrap_or(host).to_string())
}

fn readable_slug(path: &str) -> bool {
    let Some(last) = path.split('/').filter(|segment| !segment.is_empty()).last() else {
        return true;
    };
    let slug = last
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(last);
    RE_READABLE_SLUG.is_match(slug) && slug.chars().any(|c| c.is_ascii_alphabetic())
}

pub fn url_signals(address: &str) -> UrlSignals {
    let trimmed = address.trim();
    let length = trimmed.chars().count() as u32;
    let parsed = Url::parse(trimmed).or_else(|_| RELATIVE_BASE.join(trimmed));
    let Ok(parsed) = parsed else {
        tracing::debug!(address = trimmed, "page address could not be parsed");
        return UrlSignals {
            length,
            ..UrlSignals::default()
        };
    };
    let path = parsed.path();
    UrlSignals {
        is_https: parsed.scheme() == "https",
        length,
        has_query: parsed.query().is_some_and(|query| !query.is_empty()),
        depth: path.split('/').filter(|segment| !segment.is_empty()).count() as u32,
        readable_slug: readable_slug(path),
    }
}
