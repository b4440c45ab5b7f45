//! Category ranking and the final display order.

use std::collections::HashMap;

use crate::DisplayItem;

/// Name given to records whose name could not be resolved. Such records are
/// vacant seats and are never displayed.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Rank shared by every category missing from the table.
pub const UNRANKED: u32 = 99;

/// Section title for items that carry no category.
pub const OTHER_CATEGORY: &str = "Other";

pub const HALL_OF_FAME: &str = "Hall of Fame";

/// Organizational tiers of the governing panel, highest first.
pub const PANEL_TIERS: [&str; 9] = [
    "Advisory Panel",
    "Executive Panel",
    "Deputy Executive Panel",
    "Senior Sub-Executive Panel",
    "Sub-Executive Panel",
    "Junior Sub-Executive Panel",
    "Working Committee",
    "General Members",
    HALL_OF_FAME,
];

/// Fixed priority table from category name to rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    ranks: HashMap<String, u32>,
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::new(PANEL_TIERS)
    }
}

impl CategoryTable {
    /// Ranks follow iteration order, starting at zero.
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ranks = HashMap::new();
        for (rank, name) in categories.into_iter().enumerate() {
            ranks.entry(name.into()).or_insert(rank as u32);
        }
        Self { ranks }
    }

    pub fn rank(&self, category: Option<&str>) -> u32 {
        category
            .and_then(|name| self.ranks.get(name).copied())
            .unwrap_or(UNRANKED)
    }

    /// Drops vacant seats and orders the rest by category rank, then by sort
    /// key. Unranked categories follow the ranked ones in first-seen order.
    /// The sort is stable, so equal keys keep their input order.
    pub fn classify_and_sort(&self, items: Vec<DisplayItem>) -> Vec<DisplayItem> {
        let mut unranked_seen: Vec<Option<String>> = Vec::new();
        let mut keyed: Vec<((u32, usize, i64), DisplayItem)> = items
            .into_iter()
            .filter(|item| item.name != UNKNOWN_NAME)
            .map(|item| {
                let rank = self.rank(item.category.as_deref());
                let arrival = if rank == UNRANKED {
                    match unranked_seen.iter().position(|c| *c == item.category) {
                        Some(pos) => pos,
                        None => {
                            unranked_seen.push(item.category.clone());
                            unranked_seen.len() - 1
                        }
                    }
                } else {
                    0
                };
                ((rank, arrival, item.sort_key), item)
            })
            .collect();
        keyed.sort_by_key(|(key, _)| *key);
        keyed.into_iter().map(|(_, item)| item).collect()
    }
}

/// Splits an already ordered list into consecutive titled sections, in order
/// of first appearance.
pub fn group_sections(items: Vec<DisplayItem>) -> Vec<(String, Vec<DisplayItem>)> {
    let mut sections: Vec<(String, Vec<DisplayItem>)> = Vec::new();
    for item in items {
        let title = item
            .category
            .clone()
            .unwrap_or_else(|| OTHER_CATEGORY.to_string());
        match sections.iter_mut().find(|(existing, _)| *existing == title) {
            Some((_, members)) => members.push(item),
            None => sections.push((title, vec![item])),
        }
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advisory_panel_ranks_first() {
        let table = CategoryTable::default();
        assert_eq!(table.rank(Some("Advisory Panel")), 0);
        assert_eq!(table.rank(Some(HALL_OF_FAME)), 8);
        assert_eq!(table.rank(Some("Alumni")), UNRANKED);
        assert_eq!(table.rank(None), UNRANKED);
    }
}
