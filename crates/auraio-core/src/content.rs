//! Static marketing content for the landing page.
//!
//! Process steps, pricing tiers and FAQ entries are compiled in. They never
//! change at runtime; [`LandingContent::validate`] checks the sanity
//! constraints the page relies on (unique titles, at most one featured
//! tier, no empty bullets) and runs at server startup and in tests.

use std::collections::HashSet;

use crate::error::ContentError;

/// One step of the onboarding process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
}

/// A pricing tier card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingTier {
    /// Short name, e.g. "Tier 2".
    pub name: &'static str,
    /// Headline shown on the card.
    pub label: &'static str,
    /// Free-text price: a euro range or "Custom".
    pub price: &'static str,
    pub bullets: &'static [&'static str],
    /// Highlighted as "Most Popular".
    pub featured: bool,
}

/// A question and its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        title: "Kickoff",
        description: "Tell us your vision in 5 minutes: goals, audience, vibe.",
    },
    ProcessStep {
        title: "Plan",
        description: "We turn it into a roadmap with scope, timelines, and milestones.",
    },
    ProcessStep {
        title: "Design",
        description: "Rapid prototypes + your feedback. Pixel-perfect, accessible UI.",
    },
    ProcessStep {
        title: "Build & Launch",
        description: "SEO-ready, high-performance build. Go live with confidence.",
    },
];

pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Tier 1",
        label: "Basic Website",
        price: "€999–€1,999",
        bullets: &[
            "Up to 5–7 pages",
            "Responsive design",
            "Contact form & analytics",
            "Basic performance",
        ],
        featured: false,
    },
    PricingTier {
        name: "Tier 2",
        label: "Website + SEO",
        price: "€2,000–€3,500",
        bullets: &[
            "Everything in Tier 1",
            "On-page SEO",
            "Blog setup",
            "GA4 & Search Console",
        ],
        featured: true,
    },
    PricingTier {
        name: "Tier 3",
        label: "Site + SEO + Marketing",
        price: "€3,500–€6,500",
        bullets: &[
            "Everything in Tier 2",
            "Ads setup (Google/Meta)",
            "Landing funnels",
            "Monthly reporting",
        ],
        featured: false,
    },
    PricingTier {
        name: "Tier 4",
        label: "Premium Growth",
        price: "Custom",
        bullets: &["All in Tier 3", "Brand kit", "Automation/CRM", "Dedicated support"],
        featured: false,
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "How long does it take to launch?",
        answer: "Most Tier 1/2 sites go live in 2–4 weeks depending on content and approvals. \
                 Complex builds (Tier 3/4) are planned with milestones.",
    },
    Faq {
        question: "Do you host and maintain the website?",
        answer: "Yes. Choose our WaaS add-on: hosting, updates, backups, security hardening, \
                 and monthly improvements for a flat fee.",
    },
    Faq {
        question: "Which stack do you use?",
        answer: "We typically use Next.js/React, Tailwind, and headless CMS. For e-commerce: \
                 Shopify or Woo + custom integrations. We adapt to your needs.",
    },
    Faq {
        question: "What makes AuraIO different?",
        answer: "We combine performance, design, and measurable growth. You get a transparent \
                 dashboard for SEO, speed, and leads, not just a website.",
    },
];

/// The content rendered on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandingContent<'a> {
    pub steps: &'a [ProcessStep],
    pub tiers: &'a [PricingTier],
    pub faqs: &'a [Faq],
}

impl LandingContent<'static> {
    /// The agency's shipped content.
    #[must_use]
    pub const fn agency() -> Self {
        Self {
            steps: PROCESS_STEPS,
            tiers: PRICING_TIERS,
            faqs: FAQS,
        }
    }
}

impl LandingContent<'_> {
    /// The featured tier, if any.
    #[must_use]
    pub fn featured_tier(&self) -> Option<&PricingTier> {
        self.tiers.iter().find(|tier| tier.featured)
    }

    /// Check every sanity constraint, returning the first violation.
    ///
    /// # Errors
    ///
    /// Returns the [`ContentError`] describing the first broken constraint.
    pub fn validate(&self) -> Result<(), ContentError> {
        validate_steps(self.steps)?;
        validate_tiers(self.tiers)?;
        validate_faqs(self.faqs)
    }
}

fn validate_steps(steps: &[ProcessStep]) -> Result<(), ContentError> {
    if steps.is_empty() {
        return Err(ContentError::NoSteps);
    }

    let mut seen = HashSet::new();
    for (index, step) in steps.iter().enumerate() {
        if step.title.trim().is_empty() {
            return Err(ContentError::EmptyStepTitle { index });
        }
        if !seen.insert(step.title) {
            return Err(ContentError::DuplicateStepTitle {
                title: step.title.to_owned(),
            });
        }
    }
    Ok(())
}

fn validate_tiers(tiers: &[PricingTier]) -> Result<(), ContentError> {
    if tiers.is_empty() {
        return Err(ContentError::NoTiers);
    }

    let mut labels = HashSet::new();
    for (index, tier) in tiers.iter().enumerate() {
        if tier.name.trim().is_empty() {
            return Err(ContentError::EmptyTierName { index });
        }
        if tier.label.trim().is_empty() {
            return Err(ContentError::EmptyTierLabel { index });
        }
        if !labels.insert(tier.label) {
            return Err(ContentError::DuplicateTierLabel {
                label: tier.label.to_owned(),
            });
        }
        if tier.bullets.is_empty() {
            return Err(ContentError::NoBullets {
                label: tier.label.to_owned(),
            });
        }
        if tier.bullets.iter().any(|bullet| bullet.trim().is_empty()) {
            return Err(ContentError::EmptyBullet {
                label: tier.label.to_owned(),
            });
        }
        if !is_valid_price(tier.price) {
            return Err(ContentError::InvalidPrice {
                label: tier.label.to_owned(),
                price: tier.price.to_owned(),
            });
        }
    }

    let featured = tiers.iter().filter(|tier| tier.featured).count();
    if featured > 1 {
        return Err(ContentError::MultipleFeatured { count: featured });
    }
    Ok(())
}

fn is_valid_price(price: &str) -> bool {
    !price.trim().is_empty() && (price.contains('€') || price.to_lowercase().contains("custom"))
}

fn validate_faqs(faqs: &[Faq]) -> Result<(), ContentError> {
    if faqs.is_empty() {
        return Err(ContentError::NoFaqs);
    }
    match faqs
        .iter()
        .position(|faq| faq.question.trim().is_empty() || faq.answer.trim().is_empty())
    {
        Some(index) => Err(ContentError::EmptyFaq { index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC: PricingTier = PricingTier {
        name: "Tier 1",
        label: "Basic",
        price: "€999",
        bullets: &["Responsive design"],
        featured: false,
    };

    fn with_tiers(tiers: &[PricingTier]) -> LandingContent<'_> {
        LandingContent {
            steps: PROCESS_STEPS,
            tiers,
            faqs: FAQS,
        }
    }

    #[test]
    fn shipped_content_is_consistent() {
        assert_eq!(LandingContent::agency().validate(), Ok(()));
    }

    #[test]
    fn shipped_content_has_expected_shape() {
        let content = LandingContent::agency();
        assert_eq!(content.steps.len(), 4);
        assert!(content.tiers.len() >= 4);
        assert!(!content.faqs.is_empty());
        assert_eq!(content.featured_tier().map(|t| t.label), Some("Website + SEO"));
    }

    #[test]
    fn empty_steps_are_rejected() {
        let content = LandingContent {
            steps: &[],
            ..LandingContent::agency()
        };
        assert_eq!(content.validate(), Err(ContentError::NoSteps));
    }

    #[test]
    fn duplicate_step_titles_are_rejected() {
        let steps = [PROCESS_STEPS[0], PROCESS_STEPS[0]];
        let content = LandingContent {
            steps: &steps,
            ..LandingContent::agency()
        };
        assert_eq!(
            content.validate(),
            Err(ContentError::DuplicateStepTitle {
                title: "Kickoff".to_owned()
            })
        );
    }

    #[test]
    fn tier_without_bullets_is_rejected() {
        let tiers = [PricingTier {
            bullets: &[],
            ..BASIC
        }];
        assert_eq!(
            with_tiers(&tiers).validate(),
            Err(ContentError::NoBullets {
                label: "Basic".to_owned()
            })
        );
    }

    #[test]
    fn blank_bullet_is_rejected() {
        let tiers = [PricingTier {
            bullets: &["SEO", " "],
            ..BASIC
        }];
        assert!(matches!(
            with_tiers(&tiers).validate(),
            Err(ContentError::EmptyBullet { .. })
        ));
    }

    #[test]
    fn blank_label_is_rejected() {
        let tiers = [PricingTier { label: "", ..BASIC }];
        assert_eq!(
            with_tiers(&tiers).validate(),
            Err(ContentError::EmptyTierLabel { index: 0 })
        );
    }

    #[test]
    fn two_featured_tiers_are_rejected() {
        let tiers = [
            PricingTier {
                featured: true,
                ..BASIC
            },
            PricingTier {
                label: "Pro",
                featured: true,
                ..BASIC
            },
        ];
        assert_eq!(
            with_tiers(&tiers).validate(),
            Err(ContentError::MultipleFeatured { count: 2 })
        );
    }

    #[test]
    fn no_featured_tier_is_fine() {
        assert_eq!(with_tiers(&[BASIC]).validate(), Ok(()));
    }

    #[test]
    fn duplicate_labels_are_rejected() {
        let tiers = [BASIC, PricingTier { name: "Tier 2", ..BASIC }];
        assert!(matches!(
            with_tiers(&tiers).validate(),
            Err(ContentError::DuplicateTierLabel { .. })
        ));
    }

    #[test]
    fn price_must_be_euro_or_custom() {
        assert!(is_valid_price("€2,000–€3,500"));
        assert!(is_valid_price("Custom"));
        assert!(is_valid_price("custom quote"));
        assert!(!is_valid_price("$999"));
        assert!(!is_valid_price(""));
    }

    #[test]
    fn faq_with_blank_answer_is_rejected() {
        let faqs = [
            FAQS[0],
            Faq {
                question: "Why?",
                answer: "",
            },
        ];
        let content = LandingContent {
            faqs: &faqs,
            ..LandingContent::agency()
        };
        assert_eq!(content.validate(), Err(ContentError::EmptyFaq { index: 1 }));
    }
}
