//! Content registry: the records that parameterize the homepage.
//!
//! Every record is plain immutable data defined at module scope. The arrays
//! are the single source of truth for what the page shows, and array order is
//! display order.
//!
//! Ids are checked for uniqueness at compile time; a duplicate id in any of
//! the arrays below fails the build.
//!
//! # Example
//!
//! ```rust
//! use aurora_page::content::ContentRegistry;
//!
//! let content = ContentRegistry::STANDARD;
//! assert_eq!(content.features.len(), 4);
//! assert!(content.validate().is_ok());
//! ```

use std::collections::HashSet;

use serde::Serialize;

use crate::components::Glyph;

/// One card of the feature grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Feature {
    /// Stable key, unique within the feature list
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    /// Glyph drawn in the card's icon well
    pub icon: Glyph,
}

/// A customer quote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    /// Stable key, unique within the testimonial list
    pub id: u32,
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
}

/// A question/answer pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FaqItem {
    /// Stable key, unique within the FAQ list
    pub id: u32,
    pub question: &'static str,
    pub answer: &'static str,
}

/// Errors reported by [`ContentRegistry::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("duplicate id {id} in {list}")]
    DuplicateId { list: &'static str, id: u32 },
    #[error("{list} entry {id} has an empty `{field}`")]
    EmptyField {
        list: &'static str,
        id: u32,
        field: &'static str,
    },
}

/// The three content arrays the page is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ContentRegistry {
    pub features: &'static [Feature],
    pub testimonials: &'static [Testimonial],
    pub faqs: &'static [FaqItem],
}

impl Default for ContentRegistry {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl ContentRegistry {
    /// The content shipped with the homepage.
    pub const STANDARD: ContentRegistry = ContentRegistry {
        features: &FEATURES,
        testimonials: &TESTIMONIALS,
        faqs: &FAQS,
    };

    /// Check id uniqueness and that no required text is blank.
    ///
    /// The shipped arrays are already checked at compile time; this covers
    /// registries assembled elsewhere and backs the `check` command.
    pub fn validate(&self) -> Result<(), ContentError> {
        check_ids("features", self.features.iter().map(|f| f.id))?;
        check_ids("testimonials", self.testimonials.iter().map(|t| t.id))?;
        check_ids("faqs", self.faqs.iter().map(|f| f.id))?;

        for f in self.features {
            require("features", f.id, "name", f.name)?;
            require("features", f.id, "description", f.description)?;
        }
        for t in self.testimonials {
            require("testimonials", t.id, "quote", t.quote)?;
            require("testimonials", t.id, "name", t.name)?;
            require("testimonials", t.id, "role", t.role)?;
            require("testimonials", t.id, "company", t.company)?;
        }
        for f in self.faqs {
            require("faqs", f.id, "question", f.question)?;
            require("faqs", f.id, "answer", f.answer)?;
        }
        Ok(())
    }
}

fn check_ids(list: &'static str, ids: impl Iterator<Item = u32>) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId { list, id });
        }
    }
    Ok(())
}

fn require(
    list: &'static str,
    id: u32,
    field: &'static str,
    value: &str,
) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::EmptyField { list, id, field });
    }
    Ok(())
}

/// Fails compilation when two entries of a const array share an id.
macro_rules! assert_unique_ids {
    ($list:ident) => {
        const _: () = {
            let list = $list;
            let mut i = 0;
            while i < list.len() {
                let mut j = i + 1;
                while j < list.len() {
                    assert!(
                        list[i].id != list[j].id,
                        concat!("duplicate id in ", stringify!($list))
                    );
                    j += 1;
                }
                i += 1;
            }
        };
    };
}

// =============================================================================
// Shipped content
// =============================================================================

pub const FEATURES: [Feature; 4] = [
    Feature {
        id: 1,
        name: "Blazing fast by default",
        description: "Pages are rendered ahead of time with Leptos SSR, so visitors get finished HTML with no runtime to boot.",
        icon: Glyph::Lightning,
    },
    Feature {
        id: 2,
        name: "Production-grade DX",
        description: "Typed components, a utility-class design system, and tests are wired up so you can focus on building instead of setup.",
        icon: Glyph::Sparkle,
    },
    Feature {
        id: 3,
        name: "Secure & scalable",
        description: "Best-practice patterns that grow with your product and keep your users safe.",
        icon: Glyph::ShieldCheck,
    },
    Feature {
        id: 4,
        name: "Analytics-ready",
        description: "Structure your app to integrate product analytics, A/B testing, and observability from day one.",
        icon: Glyph::ChartLine,
    },
];

pub const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        id: 1,
        quote: "We shipped our MVP in a week instead of a month. The foundation was rock solid from day one.",
        name: "Alex Carter",
        role: "Founder",
        company: "Northwind Labs",
    },
    Testimonial {
        id: 2,
        quote: "The developer experience is phenomenal. Clean architecture, clear patterns, and zero friction.",
        name: "Jamie Lee",
        role: "Staff Engineer",
        company: "Orbit Systems",
    },
];

pub const FAQS: [FaqItem; 3] = [
    FaqItem {
        id: 1,
        question: "Is this template production-ready?",
        answer: "Yes. It uses strict types end to end, accessibility-minded components, and patterns that scale to real products.",
    },
    FaqItem {
        id: 2,
        question: "Can I customize the design?",
        answer: "Absolutely. The layout is powered by utility classes, so you can adjust the theme, spacing, and components quickly.",
    },
    FaqItem {
        id: 3,
        question: "Does it work well on mobile?",
        answer: "The entire page is designed mobile-first with responsive typography, spacing, and touch-friendly hit targets.",
    },
];

assert_unique_ids!(FEATURES);
assert_unique_ids!(TESTIMONIALS);
assert_unique_ids!(FAQS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_is_valid() {
        assert_eq!(ContentRegistry::STANDARD.validate(), Ok(()));
        assert_eq!(ContentRegistry::default(), ContentRegistry::STANDARD);
    }

    #[test]
    fn shipped_ids_are_pairwise_distinct() {
        let ids: Vec<u32> = FEATURES.iter().map(|f| f.id).collect();
        let unique: HashSet<u32> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());

        let ids: HashSet<u32> = TESTIMONIALS.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), TESTIMONIALS.len());

        let ids: HashSet<u32> = FAQS.iter().map(|f| f.id).collect();
        assert_eq!(ids.len(), FAQS.len());
    }

    #[test]
    fn duplicate_ids_are_reported() {
        static DUPES: [FaqItem; 2] = [
            FaqItem {
                id: 7,
                question: "First?",
                answer: "Yes.",
            },
            FaqItem {
                id: 7,
                question: "Second?",
                answer: "Also yes.",
            },
        ];
        let registry = ContentRegistry {
            faqs: &DUPES,
            ..ContentRegistry::STANDARD
        };

        assert_eq!(
            registry.validate(),
            Err(ContentError::DuplicateId { list: "faqs", id: 7 })
        );
    }

    #[test]
    fn blank_fields_are_reported() {
        static BLANK: [Testimonial; 1] = [Testimonial {
            id: 3,
            quote: "Great.",
            name: "Sam",
            role: "  ",
            company: "Acme",
        }];
        let registry = ContentRegistry {
            testimonials: &BLANK,
            ..ContentRegistry::STANDARD
        };

        let err = registry.validate().unwrap_err();
        assert_eq!(err.to_string(), "testimonials entry 3 has an empty `role`");
    }

    #[test]
    fn registry_serializes_glyph_names() {
        let json = serde_json::to_value(ContentRegistry::STANDARD).unwrap();
        assert_eq!(json["features"][0]["icon"], "lightning");
        assert_eq!(json["testimonials"].as_array().map(Vec::len), Some(2));
        assert_eq!(json["faqs"][2]["id"], 3);
    }
}
