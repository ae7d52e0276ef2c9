//! Publication dates found in metadata, `<time>` elements and the text.

use super::html::{self, meta_content};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static RE_ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})").expect("iso date regex"));

const DATE_META_KEYS: [&str; 4] = [
    "article:published_time",
    "article:modified_time",
    "date",
    "pubdate",
];

fn parse_date(raw: &str) -> Option<NaiveDate> {
    RE_ISO_DATE.captures(raw).and_then(|caps| {
        NaiveDate::from_ymd_opt(
            caps[1].parse().ok()?,
            caps[2].parse().ok()?,
            caps[3].parse().ok()?,
        )
    })
}

/// Every date the page declares about itself, newest last.
pub fn page_dates(
    metas: &[BTreeMap<String, String>],
    document: Option<&str>,
    text: Option<&str>,
) -> Vec<NaiveDate> {
    let mut dates = DATE_META_KEYS
        .iter()
        .filter_map(|key| meta_content(metas, key))
        .filter_map(|raw| parse_date(&raw))
        .collect::<Vec<_>>();

    if let Some(document) = document {
        dates.extend(
            html::opening_tags(document, &["time"])
                .into_iter()
                .filter_map(|tag| html::attributes(tag).remove("datetime"))
                .filter_map(|raw| parse_date(&raw)),
        );
    }
    if let Some(text) = text {
        dates.extend(RE_ISO_DATE.find_iter(text).filter_map(|m| parse_date(m.as_str())));
    }
    dates.sort();
    dates
}

/// Days between the newest non-future page date and `reference`.
pub fn days_since_published(dates: &[NaiveDate], reference: NaiveDate) -> Option<u32> {
    let newest = dates.iter().copied().filter(|date| *date <= reference).max()?;
    u32::try_from((reference - newest).num_days()).ok()
}
