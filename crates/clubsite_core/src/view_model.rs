use serde::Serialize;

use crate::classify::{group_sections, HALL_OF_FAME, OTHER_CATEGORY};
use crate::contact::{AddressInfo, ContactCard};
use crate::slug::PanelRoute;
use crate::DisplayItem;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    pub title: String,
    pub show_heading: bool,
    pub items: Vec<DisplayItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelPageView {
    pub heading: String,
    pub badge: &'static str,
    pub subtitle: &'static str,
    pub sections: Vec<SectionView>,
}

impl PanelPageView {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn member_count(&self) -> usize {
        self.sections.iter().map(|section| section.items.len()).sum()
    }
}

/// Builds the governing-panel page from an already classified member list.
pub fn panel_page_view(route: &PanelRoute, members: Vec<DisplayItem>) -> PanelPageView {
    let (badge, subtitle) = match route {
        PanelRoute::HallOfFame => (
            "Legends",
            "Honoring the exceptional leaders who shaped the legacy of the club",
        ),
        PanelRoute::Semester { .. } => (
            "Leadership",
            "Meet the dedicated panel members leading the way",
        ),
    };

    let grouped = group_sections(members);
    let section_count = grouped.len();
    let sections = grouped
        .into_iter()
        .map(|(title, items)| SectionView {
            // A lone "Other" group and the Hall of Fame need no heading.
            show_heading: title != HALL_OF_FAME
                && (section_count > 1 || title != OTHER_CATEGORY),
            title,
            items,
        })
        .collect();

    PanelPageView {
        heading: route.display_text(),
        badge,
        subtitle,
        sections,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPageView {
    pub cards: Vec<ContactCard>,
    pub address: AddressInfo,
    pub team: Vec<DisplayItem>,
}
