use super::capped;
use crate::types::breakdown::{Breakdown, SocialBreakdown};
use crate::types::scoring::{clamp_score, Criterion, CriterionScore, Score};
use crate::types::signals::SocialSignals;

pub const POINTS_PER_PLATFORM: Score = 10.0;
pub const POINTS_PER_SHARE_BUTTON: Score = 3.0;
pub const SHARE_COUNT_CAP: Score = 10.0;
pub const FOLLOWER_COUNT_CAP: Score = 10.0;
pub const TESTIMONIAL_CAP: Score = 15.0;

pub fn social_score(signals: Option<&SocialSignals>) -> CriterionScore {
    let Some(social) = signals else {
        return CriterionScore::unavailable(Criterion::SocialIntegration);
    };

    let platforms_found = social.platforms.iter().copied().collect::<Vec<_>>();
    let platform_count = platforms_found.len() as u32;
    let platform_score = f64::from(platform_count) * POINTS_PER_PLATFORM;
    let sharing_score = f64::from(social.sharing_buttons) * POINTS_PER_SHARE_BUTTON;
    let social_proof_score = capped(SHARE_COUNT_CAP, f64::from(social.share_counts) * 2.0)
        + capped(FOLLOWER_COUNT_CAP, f64::from(social.follower_counts) * 2.0)
        + capped(TESTIMONIAL_CAP, f64::from(social.testimonials) * 3.0);

    let final_score = clamp_score(platform_score + sharing_score + social_proof_score);
    let breakdown = SocialBreakdown {
        platforms_found,
        platform_count,
        sharing_buttons: social.sharing_buttons,
        share_counts: social.share_counts,
        follower_counts: social.follower_counts,
        testimonials: social.testimonials,
        platform_score,
        sharing_score,
        social_proof_score,
        final_score,
    };
    CriterionScore::new(
        Criterion::SocialIntegration,
        final_score,
        Breakdown::SocialIntegration(breakdown),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::signals::SocialPlatform;

    fn breakdown(score: &CriterionScore) -> SocialBreakdown {
        match &score.breakdown {
            Breakdown::SocialIntegration(b) => b.clone(),
            other => panic!("unexpected breakdown: {other:?}"),
        }
    }

    #[test]
    fn platforms_buttons_and_proof_add_up() {
        let signals = SocialSignals {
            platforms: [SocialPlatform::Twitter, SocialPlatform::Pinterest]
                .into_iter()
                .collect(),
            sharing_buttons: 4,
            share_counts: 1,
            follower_counts: 0,
            testimonials: 2,
        };
        let score = social_score(Some(&signals));
        let b = breakdown(&score);
        assert_eq!(b.platform_count, 2);
        assert_eq!(b.platform_score, 20.0);
        assert_eq!(b.sharing_score, 12.0);
        assert_eq!(b.social_proof_score, 8.0);
        assert!((score.raw_score - 40.0).abs() < 1e-9);
    }

    #[test]
    fn social_proof_components_are_capped_individually() {
        let signals = SocialSignals {
            share_counts: 50,
            follower_counts: 50,
            testimonials: 50,
            ..SocialSignals::default()
        };
        let score = social_score(Some(&signals));
        assert_eq!(breakdown(&score).social_proof_score, 35.0);
    }

    #[test]
    fn every_platform_plus_buttons_clamps_to_one_hundred() {
        let signals = SocialSignals {
            platforms: SocialPlatform::ALL.into_iter().collect(),
            sharing_buttons: 12,
            ..SocialSignals::default()
        };
        assert_eq!(social_score(Some(&signals)).raw_score, 100.0);
    }

    #[test]
    fn missing_social_data_scores_zero() {
        assert_eq!(social_score(None).raw_score, 0.0);
    }
}
