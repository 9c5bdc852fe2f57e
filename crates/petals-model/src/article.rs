//! The article catalog.
//!
//! Twelve editorial pieces spanning the three most recent issues. The hero
//! slider on the home page cycles through a fixed selection of five of them.

/// Editorial category of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Ingredients,
    Science,
    Culture,
    Sustainability,
    Innovation,
    Profile,
}

impl Category {
    /// Display label, as printed in kickers and card headers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ingredients => "Ingredients",
            Self::Science => "Science",
            Self::Culture => "Culture",
            Self::Sustainability => "Sustainability",
            Self::Innovation => "Innovation",
            Self::Profile => "Profile",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single magazine article.
///
/// `issue_number` references an [`crate::Issue`] by number; the catalog does
/// not enforce referential integrity, and an issue may have no articles at
/// all (see [`crate::articles_in_issue`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Unique article id.
    pub id: u32,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub category: Category,
    /// Issue this article appeared in.
    pub issue_number: u16,
    /// Cover photograph reference (external asset id).
    pub image_ref: &'static str,
}

/// The full compiled-in catalog, newest first.
pub static ARTICLES: [Article; 12] = [
    Article {
        id: 1,
        title: "Tobacco",
        subtitle: "Memory & Ritual in Perfumery",
        description: "From sacred smoke to synthetic molecule, tobacco's paradox endures across centuries of fragrance making.",
        category: Category::Ingredients,
        issue_number: 39,
        image_ref: "photo-1559825481-12a05cc00344",
    },
    Article {
        id: 2,
        title: "The Coconut Illusion",
        subtitle: "Why Your Brain Lies About Lactones",
        description: "The molecule that smells tropical has never touched a palm tree.",
        category: Category::Science,
        issue_number: 39,
        image_ref: "photo-1501443762994-82bd5dace89a",
    },
    Article {
        id: 3,
        title: "Istanbul to Grasse",
        subtitle: "A Fragrance Corridor",
        description: "The ancient rose road, still breathing between two worlds.",
        category: Category::Culture,
        issue_number: 39,
        image_ref: "photo-1524231757912-21f4fe3a7200",
    },
    Article {
        id: 4,
        title: "Biodiversity in the Bottle",
        subtitle: "When the Source Disappears",
        description: "What happens to perfumery when the ecosystems it depends on begin to vanish?",
        category: Category::Sustainability,
        issue_number: 39,
        image_ref: "photo-1441974231531-c6227db76b6e",
    },
    Article {
        id: 5,
        title: "AI Meets the Nose",
        subtitle: "Machine Learning in the Lab",
        description: "Algorithms are writing formulas. The question is whether they can write poetry.",
        category: Category::Innovation,
        issue_number: 39,
        image_ref: "photo-1518770660439-4636190af475",
    },
    Article {
        id: 6,
        title: "Vetiver",
        subtitle: "Earth's Signature",
        description: "The roots beneath everything.",
        category: Category::Ingredients,
        issue_number: 39,
        image_ref: "photo-1416879595882-3373a0480b5b",
    },
    Article {
        id: 7,
        title: "The New Orientalism",
        subtitle: "Rewriting the Olfactive East",
        description: "A postcolonial reckoning with perfumery's most loaded category.",
        category: Category::Culture,
        issue_number: 38,
        image_ref: "photo-1541643600914-78b084683601",
    },
    Article {
        id: 8,
        title: "Nabil Achour",
        subtitle: "A Perfumer Between Two Continents",
        description: "The nose who bridges Tunis and Paris.",
        category: Category::Profile,
        issue_number: 38,
        image_ref: "photo-1547887538-e3a2f32cb1cc",
    },
    Article {
        id: 9,
        title: "Synthetic vs Natural",
        subtitle: "The Eternal Debate",
        description: "Where chemistry meets philosophy, and neither side yields.",
        category: Category::Innovation,
        issue_number: 38,
        image_ref: "photo-1588405748880-12d1d2a59f75",
    },
    Article {
        id: 10,
        title: "Myrrh",
        subtitle: "Ancient Tears",
        description: "Resin, ritual, and revival.",
        category: Category::Ingredients,
        issue_number: 37,
        image_ref: "photo-1595425964272-fc617fa19dfa",
    },
    Article {
        id: 11,
        title: "The Proust Effect",
        subtitle: "Scent & Memory",
        description: "How a single molecule can unlock an entire lifetime.",
        category: Category::Culture,
        issue_number: 37,
        image_ref: "photo-1563170351-be82bc888aa4",
    },
    Article {
        id: 12,
        title: "Green Chemistry 2025",
        subtitle: "Lab-Grown Ingredients",
        description: "Synthetic biology is rewriting the supply chain.",
        category: Category::Innovation,
        issue_number: 37,
        image_ref: "photo-1615634260167-c8cdede054de",
    },
];

/// The whole catalog, newest first.
pub fn articles() -> &'static [Article] {
    &ARTICLES
}

/// Look up an article by id.
pub fn article_by_id(id: u32) -> Option<&'static Article> {
    ARTICLES.iter().find(|a| a.id == id)
}

/// The article following `id` in catalog order, wrapping from the last
/// entry back to the first. `None` when `id` is not in the catalog.
pub fn next_article(id: u32) -> Option<&'static Article> {
    let position = ARTICLES.iter().position(|a| a.id == id)?;
    Some(&ARTICLES[(position + 1) % ARTICLES.len()])
}

/// The five articles featured in the home-page hero slider, in slide order.
pub fn hero_slides() -> [&'static Article; 5] {
    [
        &ARTICLES[0],
        &ARTICLES[1],
        &ARTICLES[3],
        &ARTICLES[6],
        &ARTICLES[4],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique_and_sequential() {
        for (i, article) in ARTICLES.iter().enumerate() {
            assert_eq!(article.id, i as u32 + 1);
        }
    }

    #[test]
    fn article_lookup() {
        assert_eq!(article_by_id(1).map(|a| a.title), Some("Tobacco"));
        assert_eq!(article_by_id(12).map(|a| a.title), Some("Green Chemistry 2025"));
        assert!(article_by_id(0).is_none());
        assert!(article_by_id(13).is_none());
    }

    #[test]
    fn next_article_walks_the_catalog_and_wraps() {
        assert_eq!(next_article(1).map(|a| a.id), Some(2));
        assert_eq!(next_article(11).map(|a| a.id), Some(12));
        assert_eq!(next_article(12).map(|a| a.id), Some(1));
        assert!(next_article(99).is_none());
    }

    #[test]
    fn hero_selection_matches_editorial_order() {
        let ids: Vec<u32> = hero_slides().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 7, 5]);
    }

    #[test]
    fn hero_slides_all_come_from_the_current_issue_or_its_predecessor() {
        for slide in hero_slides() {
            assert!(slide.issue_number >= 38);
        }
    }
}
