//! Per-dataset conversion of raw records into ordered display items.

use crate::aliases::{self, Aliases};
use crate::classify::{CategoryTable, HALL_OF_FAME, UNKNOWN_NAME};
use crate::indexed::{expand_indexed_group, is_indexed_group, ExpandOptions, Placeholder};
use crate::resolve::{resolve_sort_key, resolve_text, resolve_text_or};
use crate::{DatasetKind, DisplayItem, RawRecord, SocialLinks};

/// Portrait shown for members that have no photo of their own.
pub const DEFAULT_PORTRAIT: &str =
    "https://images.unsplash.com/photo-1511367461989-f85a21fda167?w=400";

/// Documents of the contact collection that hold page settings, not people.
pub const CONTACT_SYSTEM_DOCS: [&str; 2] = ["Contact_Info", "Address_Info"];

const CONTACT_PLACEHOLDER: &str = "TBA";
const PARTNER_PLACEHOLDER: &str = "Partner";

/// Normalizes one dataset with the governing-panel category table.
pub fn normalize(records: &[RawRecord], kind: DatasetKind) -> Vec<DisplayItem> {
    normalize_with(records, kind, &CategoryTable::default())
}

pub fn normalize_with(
    records: &[RawRecord],
    kind: DatasetKind,
    table: &CategoryTable,
) -> Vec<DisplayItem> {
    let items: Vec<DisplayItem> = match kind {
        DatasetKind::Events => records.iter().map(event_item).collect(),
        DatasetKind::PanelMembers => records.iter().flat_map(panel_items).collect(),
        DatasetKind::HallOfFame => records
            .iter()
            .flat_map(|record| {
                let record = record.clone().in_category(HALL_OF_FAME);
                panel_items(&record)
            })
            .collect(),
        DatasetKind::Contacts => records
            .iter()
            .filter(|record| !CONTACT_SYSTEM_DOCS.contains(&record.id.as_str()))
            .map(contact_item)
            .collect(),
        DatasetKind::Sponsors => records.iter().map(sponsor_item).collect(),
        DatasetKind::Collaborations => records.iter().map(collaboration_item).collect(),
        DatasetKind::CollaboratedClubs => records.iter().flat_map(partner_items).collect(),
    };
    table.classify_and_sort(items)
}

fn text(record: &RawRecord, aliases: Aliases) -> Option<String> {
    resolve_text(record, aliases.names())
}

fn social_links(record: &RawRecord) -> SocialLinks {
    SocialLinks {
        facebook: text(record, aliases::FACEBOOK),
        linkedin: text(record, aliases::LINKEDIN),
        github: text(record, aliases::GITHUB),
        email: text(record, aliases::EMAIL),
        instagram: text(record, aliases::INSTAGRAM),
    }
}

fn event_item(record: &RawRecord) -> DisplayItem {
    let mut item = DisplayItem::new(
        record.id.clone(),
        resolve_text_or(record, aliases::EVENT_NAME.names(), &record.id),
        resolve_sort_key(record, aliases::ORDER.names()),
    );
    item.image = text(record, aliases::EVENT_COVER);
    item.description = text(record, aliases::EVENT_INTRO);
    item
}

/// One member per document, or several when the document is a numbered
/// bundle.
fn panel_items(record: &RawRecord) -> Vec<DisplayItem> {
    if is_indexed_group(record) {
        let category = record.category.clone();
        let label = category.as_deref().unwrap_or("Panel");
        let options = ExpandOptions {
            placeholder: Placeholder::Fixed(format!("{label} Member")),
            default_title: category.clone(),
            category,
        };
        let mut items = expand_indexed_group(record, &options);
        for item in &mut items {
            if item.image.is_none() {
                item.image = Some(DEFAULT_PORTRAIT.to_string());
            }
        }
        return items;
    }
    vec![member_item(record)]
}

fn member_item(record: &RawRecord) -> DisplayItem {
    let mut item = DisplayItem::new(
        record.id.clone(),
        resolve_text_or(record, aliases::NAME.names(), UNKNOWN_NAME),
        resolve_sort_key(record, aliases::ORDER.names()),
    );
    item.title = text(record, aliases::TITLE);
    item.image = Some(resolve_text_or(
        record,
        aliases::IMAGE.names(),
        DEFAULT_PORTRAIT,
    ));
    item.description = text(record, aliases::DESCRIPTION);
    item.links = social_links(record);
    item.category = record.category.clone();
    item.insert_detail("department", text(record, aliases::DEPARTMENT));
    item.insert_detail("session", text(record, aliases::SESSION));
    item.insert_detail("tenure", text(record, aliases::TENURE));
    item
}

fn contact_item(record: &RawRecord) -> DisplayItem {
    let mut item = DisplayItem::new(
        record.id.clone(),
        resolve_text_or(record, aliases::NAME.names(), CONTACT_PLACEHOLDER),
        resolve_sort_key(record, aliases::ORDER.names()),
    );
    item.title = Some(
        text(record, aliases::CONTACT_ROLE).unwrap_or_else(|| record.id.replace('_', " ")),
    );
    item.image = text(record, aliases::CONTACT_IMAGE);
    item.links.email = text(record, aliases::CONTACT_EMAIL);
    item.insert_detail("department", text(record, aliases::DEPARTMENT));
    item.insert_detail("phone", text(record, aliases::CONTACT_PHONE));
    item
}

fn sponsor_item(record: &RawRecord) -> DisplayItem {
    let mut item = DisplayItem::new(
        record.id.clone(),
        resolve_text_or(record, aliases::NAME.names(), &record.id),
        resolve_sort_key(record, aliases::SPONSOR_PRIORITY.names()),
    );
    item.title = text(record, aliases::SPONSOR_SERVICE);
    item.image = text(record, aliases::SPONSOR_LOGO);
    item.insert_detail(
        "contact_person",
        text(record, aliases::SPONSOR_CONTACT_PERSON),
    );
    item.insert_detail(
        "contact_number",
        text(record, aliases::SPONSOR_CONTACT_NUMBER),
    );
    item
}

fn collaboration_item(record: &RawRecord) -> DisplayItem {
    let mut item = DisplayItem::new(
        record.id.clone(),
        resolve_text_or(record, aliases::COLLAB_CLUB.names(), &record.id),
        resolve_sort_key(record, aliases::ORDER.names()),
    );
    item.description = text(record, aliases::COLLAB_EVENT);
    item.image = text(record, aliases::COLLAB_LOGO);
    item
}

/// Partner logos live in one bundled document; anything else is read as a
/// plain collaboration entry.
fn partner_items(record: &RawRecord) -> Vec<DisplayItem> {
    if !is_indexed_group(record) {
        return vec![collaboration_item(record)];
    }
    let options = ExpandOptions {
        placeholder: Placeholder::Numbered(PARTNER_PLACEHOLDER.to_string()),
        default_title: None,
        category: record.category.clone(),
    };
    expand_indexed_group(record, &options)
}
