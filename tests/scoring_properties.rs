//! Property-based tests for the scoring core.
//!
//! Scores stay inside their scales for any signal bundle and judgment, the
//! pipeline is deterministic, and a failed judgment degrades to neutral.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use startup_boost::domain::foundation::{BehavioralDriver, Criterion, DriverPersona, Score};
use startup_boost::domain::judgment::{AiJudgment, Aspect, CriterionJudgment, DriverPersonaJudgment};
use startup_boost::domain::scoring::{
    score_page, BehavioralDriverScorer, PersonaScorer, TechnicalStrategy, PERSONA_MAX_SCORE,
};
use startup_boost::domain::signals::Signals;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_signals() -> impl Strategy<Value = Signals> {
    (
        prop::collection::vec(any::<bool>(), 40),
        prop::collection::vec(0usize..60, 12),
        prop::option::of("[A-Za-z ]{0,80}"),
        prop::option::of("[A-Za-z ]{0,200}"),
        0usize..4000,
    )
        .prop_map(|(flags, counts, title, description, words)| {
            let mut s = Signals::default();

            s.headings.h1 = vec!["Ship faster".to_string(); counts[0] % 3];
            s.headings.h2 = vec!["Why us".to_string(); counts[1] % 8];
            s.headings.total = s.headings.h1.len() + s.headings.h2.len() + counts[2] % 5;
            s.ctas.count = counts[3];

            s.content.paragraph_count = counts[4];
            s.content.image_count = counts[5];
            s.content.link_count = counts[6];
            s.content.total_text_length = counts[7] * 97;
            s.content.has_video = flags[0];

            s.contact_info.has_email = flags[1];
            s.contact_info.has_phone = flags[2];
            s.contact_info.has_address = flags[3];
            s.contact_info.has_contact_form = flags[4];

            s.metadata.title = title;
            s.metadata.description = description;
            s.metadata.has_og_image = flags[5];
            s.metadata.has_favicon = flags[6];

            s.social_media.platforms.twitter = flags[7];
            s.social_media.platforms.linkedin = flags[8];
            s.social_media.total_platforms = s.social_media.platforms.linked_count();

            s.trust_signals.has_https = flags[9];
            s.trust_signals.has_privacy_policy = flags[10];
            s.trust_signals.has_terms_of_service = flags[11];
            s.trust_signals.has_testimonials = flags[12];
            s.trust_signals.has_trust_badges = flags[13];
            s.trust_signals.has_security_badges = flags[14];
            s.trust_signals.has_money_back_guarantee = flags[15];

            s.startup_signals.has_pricing = flags[16];
            s.startup_signals.pricing_visible = flags[17];
            s.startup_signals.has_free_trial = flags[18];
            s.startup_signals.has_demo = flags[19];
            s.startup_signals.has_customer_logos = flags[20];
            s.startup_signals.customer_logo_count = counts[8];
            s.startup_signals.has_media_mentions = flags[21];
            s.startup_signals.media_count = counts[9] % 6;
            s.startup_signals.has_metrics = flags[22];
            s.startup_signals.has_feature_list = flags[23];
            s.startup_signals.has_comparison_table = flags[24];
            s.startup_signals.has_team_section = flags[25];
            s.startup_signals.has_chat_widget = flags[26];

            s.ads_and_annoyances.likely_ad_iframes = counts[10] % 10;
            s.ads_and_annoyances.iframe_count = s.ads_and_annoyances.likely_ad_iframes;
            s.ads_and_annoyances.has_popups = flags[27];
            s.ads_and_annoyances.has_autoplay_video = flags[28];
            s.ads_and_annoyances.has_cookie_banner = flags[29];
            s.ads_and_annoyances.annoyance_score = s.ads_and_annoyances.likely_ad_iframes
                + usize::from(flags[27])
                + usize::from(flags[28])
                + usize::from(flags[29]);

            s.seo.has_meta_keywords = flags[30];
            s.seo.has_canonical_url = flags[31];
            s.seo.has_structured_data = flags[32];
            s.seo.has_viewport = flags[33];
            s.seo.has_twitter_card = flags[34];
            if flags[35] {
                s.seo.open_graph_tags.og_title = Some("Acme".to_string());
            }

            s.blog_features.has_blog = flags[36];
            s.global_reach.has_language_selector = flags[37];
            s.global_reach.has_hreflang_tags = flags[38];
            s.global_reach.hreflang_count = counts[11] % 12;
            s.global_reach.has_currency_switcher = flags[39];

            s.text_content.word_count = words;
            s
        })
}

fn arb_judgment() -> impl Strategy<Value = AiJudgment> {
    prop_oneof![
        1 => Just(AiJudgment::fallback()),
        4 => (
            any::<bool>(),
            prop::collection::vec(0u8..=10, Aspect::ALL.len()),
            prop::collection::vec(0u8..=10, 18),
        )
            .prop_map(|(success, aspects, drivers)| {
                let at = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
                let mut judgment = AiJudgment::judged(at);
                judgment.success = success;

                for (aspect, score) in Aspect::ALL.iter().zip(aspects) {
                    judgment.set_aspect(*aspect, CriterionJudgment::new(score, "model view"));
                }

                let pairs = BehavioralDriver::ALL
                    .iter()
                    .flat_map(|d| DriverPersona::ALL.iter().map(move |p| (*d, *p)));
                for ((driver, persona), score) in pairs.zip(drivers) {
                    judgment = judgment.with_driver(driver, persona, DriverPersonaJudgment::new(score));
                }
                judgment
            }),
    ]
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_main_criteria_stay_on_ten_point_scale(
        signals in arb_signals(),
        judgment in arb_judgment(),
    ) {
        let card = score_page(&signals, &judgment);

        for criterion in Criterion::ALL {
            let scored = card.main_criteria.get(criterion);
            prop_assert!(scored.score <= Score::MAX);
            prop_assert!(scored.breakdown.technical <= Score::MAX);
            prop_assert!(scored.breakdown.ai <= Score::MAX);
        }
    }

    #[test]
    fn prop_every_driver_persona_is_the_rounded_mean(
        signals in arb_signals(),
        judgment in arb_judgment(),
    ) {
        let card = score_page(&signals, &judgment);
        prop_assert_eq!(card.behavioral_drivers.len(), BehavioralDriver::ALL.len());

        for driver in BehavioralDriver::ALL {
            for persona in DriverPersona::ALL {
                let scored = card.behavioral_drivers.get(driver, persona).unwrap();
                prop_assert_eq!(
                    scored.score,
                    BehavioralDriverScorer::combine(scored.breakdown.technical, scored.breakdown.ai)
                );
            }
        }
    }

    #[test]
    fn prop_fallback_strategy_stays_on_ten_point_scale(
        signals in arb_signals(),
        judgment in arb_judgment(),
    ) {
        let drivers = BehavioralDriverScorer::score(TechnicalStrategy::Fallback(&signals), &judgment);

        for (_, report) in drivers.iter() {
            for persona in DriverPersona::ALL {
                prop_assert!(report.persona(persona).score <= Score::MAX);
            }
        }
    }

    #[test]
    fn prop_personas_stay_within_percentage_scale(
        signals in arb_signals(),
        judgment in prop::option::of(arb_judgment()),
    ) {
        let personas = PersonaScorer::score(&signals, judgment.as_ref());

        for persona in personas.all() {
            prop_assert_eq!(persona.max_score, PERSONA_MAX_SCORE);
            prop_assert!(persona.score.value() <= 100);
            prop_assert_eq!(persona.score, persona.percentage);
        }
    }
}

// ---------------------------------------------------------------------------
// Determinism and degradation
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_scoring_is_deterministic(
        signals in arb_signals(),
        judgment in arb_judgment(),
    ) {
        let first = serde_json::to_value(score_page(&signals, &judgment)).unwrap();
        let second = serde_json::to_value(score_page(&signals, &judgment)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_failed_judgment_contributes_neutral_scores(signals in arb_signals()) {
        let card = score_page(&signals, &AiJudgment::fallback());

        for criterion in Criterion::ALL {
            prop_assert_eq!(card.main_criteria.get(criterion).breakdown.ai, Score::NEUTRAL);
        }
        for driver in BehavioralDriver::ALL {
            for persona in DriverPersona::ALL {
                let scored = card.behavioral_drivers.get(driver, persona).unwrap();
                prop_assert_eq!(scored.breakdown.ai, Score::NEUTRAL);
            }
        }
    }
}
