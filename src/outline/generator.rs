//! Local outline generation.
//!
//! Cycles through a fixed bank of seven slide templates, substituting the
//! topic where a template names it. The output depends only on the topic and
//! the count.

use super::SlideRecord;

/// Placeholder replaced by the topic.
const TOPIC_PLACEHOLDER: &str = "{topic}";

struct SlideTemplate {
    title: &'static str,
    bullets: [&'static str; 3],
}

static TEMPLATE_BANK: [SlideTemplate; 7] = [
    SlideTemplate {
        title: "{topic}",
        bullets: ["An overview", "Key ideas", "Why it matters"],
    },
    SlideTemplate {
        title: "Definition & Overview",
        bullets: ["What is {topic}?", "Core concepts", "Examples"],
    },
    SlideTemplate {
        title: "Key Components",
        bullets: ["Elements", "Architecture", "Workflow"],
    },
    SlideTemplate {
        title: "Applications",
        bullets: ["Use cases", "Who uses it?", "Impact"],
    },
    SlideTemplate {
        title: "Benefits & Challenges",
        bullets: ["Advantages", "Limitations", "Risks"],
    },
    SlideTemplate {
        title: "Future Trends",
        bullets: ["What\u{2019}s next?", "Opportunities", "Predictions"],
    },
    SlideTemplate {
        title: "Conclusion",
        bullets: ["Summary", "Takeaways", "References/Next steps"],
    },
];

impl SlideTemplate {
    fn render(&self, topic: &str) -> SlideRecord {
        SlideRecord {
            title: self.title.replace(TOPIC_PLACEHOLDER, topic),
            bullets: self
                .bullets
                .iter()
                .map(|b| b.replace(TOPIC_PLACEHOLDER, topic))
                .collect(),
        }
    }
}

/// Number of distinct templates before the outline starts repeating.
pub fn template_count() -> usize {
    TEMPLATE_BANK.len()
}

/// Generate `count` slides for `topic`.
///
/// Slide `i` is rendered from template `i % 7`, so templates repeat once
/// `count` exceeds the bank. Callers validate the topic and clamp the count.
///
/// # Examples
///
/// ```rust
/// use humu_slides::outline::generate;
///
/// let slides = generate("Rust", 3);
/// assert_eq!(slides[0].title, "Rust");
/// assert_eq!(slides[1].bullets[0], "What is Rust?");
/// ```
pub fn generate(topic: &str, count: usize) -> Vec<SlideRecord> {
    TEMPLATE_BANK
        .iter()
        .cycle()
        .take(count)
        .map(|template| template.render(topic))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantum_computing_titles() {
        let titles: Vec<String> = generate("Quantum Computing", 5)
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(
            titles,
            vec![
                "Quantum Computing",
                "Definition & Overview",
                "Key Components",
                "Applications",
                "Benefits & Challenges",
            ]
        );
    }

    #[test]
    fn test_templates_repeat_past_bank() {
        let slides = generate("Tea", 9);
        assert_eq!(slides.len(), 9);
        assert_eq!(slides[7], slides[0]);
        assert_eq!(slides[8].title, "Definition & Overview");
        assert_eq!(slides[5].bullets[0], "What\u{2019}s next?");
    }

    #[test]
    fn test_records_are_independently_owned() {
        let mut first = generate("Tea", 8);
        first[0].title.push_str(" (edited)");
        first[7].bullets.clear();

        let second = generate("Tea", 8);
        assert_eq!(second[0].title, "Tea");
        assert_eq!(second[7].bullets.len(), 3);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        /// Strategy for non-empty, already trimmed topics
        fn topic_strategy() -> impl Strategy<Value = String> {
            "[a-zA-Z0-9][a-zA-Z0-9 &:!-]{0,30}".prop_map(|s| s.trim().to_string())
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            #[test]
            fn prop_exact_count_with_non_blank_bullets(topic in topic_strategy(), count in 3usize..=20) {
                let slides = generate(&topic, count);
                prop_assert_eq!(slides.len(), count);
                for slide in &slides {
                    prop_assert!(!slide.bullets.is_empty());
                    prop_assert!(slide.bullets.iter().all(|b| !b.trim().is_empty()));
                }
            }

            #[test]
            fn prop_deterministic(topic in topic_strategy(), count in 3usize..=20) {
                prop_assert_eq!(generate(&topic, count), generate(&topic, count));
            }

            #[test]
            fn prop_topic_substituted(topic in topic_strategy(), count in 3usize..=20) {
                let slides = generate(&topic, count);
                prop_assert_eq!(&slides[0].title, &topic);
                prop_assert_eq!(&slides[1].bullets[0], &format!("What is {topic}?"));
                for slide in &slides {
                    prop_assert!(!slide.title.contains(TOPIC_PLACEHOLDER));
                }
            }
        }
    }
}
