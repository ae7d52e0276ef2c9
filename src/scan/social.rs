use crate::types::signals::{SocialPlatform, SocialSignals};
use once_cell::sync::Lazy;
use regex::Regex;

static RE_SHARE_BUTTON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)<(?:a|button)\b[^>]*(?:sharer|intent/tweet|sharearticle|pin/create|share-button|share-btn|social-share|addthis|sharethis)[^>]*>",
    )
    .expect("share button regex")
});
static RE_SHARE_COUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)class\s*=\s*["'][^"']*\bshare[-_]?count|\b\d[\d,.]*\s*[km]?\s+shares\b"#)
        .expect("share count regex")
});
static RE_FOLLOWER_COUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)class\s*=\s*["'][^"']*\bfollower[-_]?count|\b\d[\d,.]*\s*[km]?\s+(?:followers|subscribers|fans)\b"#,
    )
    .expect("follower count regex")
});
static RE_TESTIMONIAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)class\s*=\s*["'][^"']*\btestimonial"#).expect("testimonial regex")
});

fn platform_markers(platform: SocialPlatform) -> &'static [&'static str] {
    match platform {
        SocialPlatform::Facebook => &["facebook.com", "fb.com"],
        SocialPlatform::Twitter => &["twitter.com", "x.com/"],
        SocialPlatform::Instagram => &["instagram.com"],
        SocialPlatform::Linkedin => &["linkedin.com"],
        SocialPlatform::Youtube => &["youtube.com", "youtu.be"],
        SocialPlatform::Pinterest => &["pinterest.com"],
        SocialPlatform::Tiktok => &["tiktok.com"],
    }
}

pub fn social_signals(document: &str) -> SocialSignals {
    let lower = document.to_lowercase();
    let platforms = SocialPlatform::ALL
        .into_iter()
        .filter(|platform| {
            platform_markers(*platform)
                .iter()
                .any(|marker| lower.contains(marker))
        })
        .collect();

    SocialSignals {
        platforms,
        sharing_buttons: RE_SHARE_BUTTON.find_iter(document).count() as u32,
        share_counts: RE_SHARE_COUNT.find_iter(document).count() as u32,
        follower_counts: RE_FOLLOWER_COUNT.find_iter(document).count() as u32,
        testimonials: RE_TESTIMONIAL.find_iter(document).count() as u32,
    }
}
