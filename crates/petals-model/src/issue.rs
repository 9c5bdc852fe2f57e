//! The issue archive.
//!
//! Thirty-nine back issues generated from a deterministic formula rather
//! than stored data: seasons cycle Winter, Autumn, Summer, Spring walking
//! backwards from issue 39 (Winter 2025), and the year steps down once
//! every four issues. Cover references rotate through a fixed set of six.

use crate::article::{ARTICLES, Article};

/// Number of published issues.
pub const ISSUE_COUNT: u16 = 39;

/// Publication season of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Winter,
    Autumn,
    Summer,
    Spring,
}

impl Season {
    /// Seasons in descending publication order starting at the latest issue.
    const CYCLE: [Season; 4] = [Season::Winter, Season::Autumn, Season::Summer, Season::Spring];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Winter => "Winter",
            Self::Autumn => "Autumn",
            Self::Summer => "Summer",
            Self::Spring => "Spring",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single back issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Issue number, 1 through [`ISSUE_COUNT`].
    pub number: u16,
    pub season: Season,
    pub year: i32,
    /// Cover photograph reference (external asset id).
    pub image_ref: &'static str,
}

impl Issue {
    /// "Winter 2025" style caption.
    pub fn caption(&self) -> String {
        format!("{} {}", self.season, self.year)
    }
}

const COVER_REFS: [&str; 6] = [
    "photo-1615634260167-c8cdede054de",
    "photo-1541643600914-78b084683601",
    "photo-1588405748880-12d1d2a59f75",
    "photo-1595425964272-fc617fa19dfa",
    "photo-1547887538-e3a2f32cb1cc",
    "photo-1563170351-be82bc888aa4",
];

/// Latest issue number and year anchor the backwards formula.
const LATEST_YEAR: i32 = 2025;

fn issue_at_offset(offset: u16) -> Issue {
    Issue {
        number: ISSUE_COUNT - offset,
        season: Season::CYCLE[usize::from(offset) % 4],
        year: LATEST_YEAR - i32::from(offset / 4),
        image_ref: COVER_REFS[usize::from(offset) % COVER_REFS.len()],
    }
}

/// Every issue, newest first.
pub fn issues() -> Vec<Issue> {
    (0..ISSUE_COUNT).map(issue_at_offset).collect()
}

/// Look up an issue by number. Out-of-range numbers yield `None`.
pub fn issue_by_number(number: u16) -> Option<Issue> {
    if number == 0 || number > ISSUE_COUNT {
        return None;
    }
    Some(issue_at_offset(ISSUE_COUNT - number))
}

/// The current issue.
pub fn latest_issue() -> Issue {
    issue_at_offset(0)
}

/// Articles published in the given issue, in catalog order.
///
/// Returns an empty list when nothing in the catalog belongs to the issue;
/// callers must present that as an explicit empty state rather than padding
/// with unrelated articles.
pub fn articles_in_issue(number: u16) -> Vec<&'static Article> {
    ARTICLES.iter().filter(|a| a.issue_number == number).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_has_thirty_nine_unique_issues() {
        let all = issues();
        assert_eq!(all.len(), 39);
        let mut numbers: Vec<u16> = all.iter().map(|i| i.number).collect();
        numbers.dedup();
        assert_eq!(numbers.len(), 39);
        assert_eq!(numbers.first(), Some(&39));
        assert_eq!(numbers.last(), Some(&1));
    }

    #[test]
    fn season_cycle_walks_backwards_from_winter() {
        assert_eq!(issue_by_number(39).map(|i| i.season), Some(Season::Winter));
        assert_eq!(issue_by_number(38).map(|i| i.season), Some(Season::Autumn));
        assert_eq!(issue_by_number(37).map(|i| i.season), Some(Season::Summer));
        assert_eq!(issue_by_number(36).map(|i| i.season), Some(Season::Spring));
        assert_eq!(issue_by_number(35).map(|i| i.season), Some(Season::Winter));
    }

    #[test]
    fn year_steps_down_every_four_issues() {
        assert_eq!(issue_by_number(39).map(|i| i.year), Some(2025));
        assert_eq!(issue_by_number(36).map(|i| i.year), Some(2025));
        assert_eq!(issue_by_number(35).map(|i| i.year), Some(2024));
        assert_eq!(issue_by_number(1).map(|i| i.year), Some(2016));
    }

    #[test]
    fn first_issue_is_summer_2016() {
        let first = issue_by_number(1).unwrap();
        assert_eq!(first.season, Season::Summer);
        assert_eq!(first.year, 2016);
        assert_eq!(first.caption(), "Summer 2016");
    }

    #[test]
    fn lookup_rejects_out_of_range_numbers() {
        assert!(issue_by_number(0).is_none());
        assert!(issue_by_number(40).is_none());
    }

    #[test]
    fn latest_issue_is_winter_2025() {
        let latest = latest_issue();
        assert_eq!(latest.number, 39);
        assert_eq!(latest.caption(), "Winter 2025");
    }

    #[test]
    fn recent_issues_have_articles() {
        assert_eq!(articles_in_issue(39).len(), 6);
        assert_eq!(articles_in_issue(38).len(), 3);
        assert_eq!(articles_in_issue(37).len(), 3);
    }

    #[test]
    fn undigitized_issues_are_explicitly_empty() {
        // No fallback to unrelated articles: an issue without catalog
        // entries reports exactly that.
        assert!(articles_in_issue(36).is_empty());
        assert!(articles_in_issue(1).is_empty());
    }
}
