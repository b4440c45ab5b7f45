//! Expansion of documents that bundle several items as numbered fields
//! (`Image_1`, `Name_1`, `Image_2`, ...).

use std::collections::BTreeMap;

use serde_json::Value;
use site_logging::{site_debug, site_warn};

use crate::aliases;
use crate::resolve::resolve_text;
use crate::{DisplayItem, RawRecord, SocialLinks};

const IMAGE_PREFIX: &str = "Image_";

/// How a slot without its own name is labelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    /// Same label for every slot, e.g. "Executive Panel Member".
    Fixed(String),
    /// Label followed by the slot number, e.g. "Partner 3".
    Numbered(String),
}

impl Placeholder {
    fn label(&self, index: u32) -> String {
        match self {
            Placeholder::Fixed(label) => label.clone(),
            Placeholder::Numbered(label) => format!("{label} {index}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandOptions {
    pub placeholder: Placeholder,
    pub default_title: Option<String>,
    pub category: Option<String>,
}

/// True when the record carries `Image_<N>` keys and no top-level name.
pub fn is_indexed_group(record: &RawRecord) -> bool {
    record.keys().any(|key| parse_image_suffix(key).is_some())
        && resolve_text(record, aliases::NAME.names()).is_none()
}

/// Numeric suffixes of all `Image_<N>` keys, ascending and unique.
///
/// Keys that spell the same number differently (`Image_1`, `Image_01`) are
/// reported and collapse onto one slot.
pub fn indexed_suffixes(record: &RawRecord) -> Vec<u32> {
    image_keys(record).into_keys().collect()
}

/// Expands one bundled document into one item per `Image_<N>` slot.
///
/// Slots are emitted in ascending `N`; ids are `<doc id>_<N>`. A slot is only
/// dropped when it has neither an image nor any sibling field.
pub fn expand_indexed_group(record: &RawRecord, options: &ExpandOptions) -> Vec<DisplayItem> {
    let mut items = Vec::new();
    for (index, image_key) in image_keys(record) {
        let image = record
            .get(&image_key)
            .and_then(Value::as_str)
            .filter(|text| !text.trim().is_empty())
            .map(str::to_string);
        let name = resolve_text(record, aliases::NAME.suffixed(index));
        let title = resolve_text(record, aliases::TITLE.suffixed(index));
        let links = SocialLinks {
            facebook: resolve_text(record, aliases::FACEBOOK.suffixed(index)),
            linkedin: resolve_text(record, aliases::LINKEDIN.suffixed(index)),
            github: resolve_text(record, aliases::GITHUB.suffixed(index)),
            email: resolve_text(record, aliases::EMAIL.suffixed(index)),
            instagram: resolve_text(record, aliases::INSTAGRAM.suffixed(index)),
        };

        if image.is_none() && name.is_none() && title.is_none() && links.is_empty() {
            site_debug!("Skipping empty slot {} in document {}", index, record.id);
            continue;
        }

        let generic = name.is_none();
        let mut item = DisplayItem::new(
            format!("{}_{index}", record.id),
            name.unwrap_or_else(|| options.placeholder.label(index)),
            i64::from(index),
        );
        item.title = title.or_else(|| options.default_title.clone());
        item.image = image;
        item.links = links;
        item.category = options.category.clone();
        item.generic = generic;
        items.push(item);
    }
    items
}

/// Maps each suffix to the key holding its image, preferring the canonical
/// spelling when several keys parse to the same number.
fn image_keys(record: &RawRecord) -> BTreeMap<u32, String> {
    let mut slots: BTreeMap<u32, String> = BTreeMap::new();
    for key in record.keys() {
        let Some(index) = parse_image_suffix(key) else {
            continue;
        };
        match slots.get(&index) {
            None => {
                slots.insert(index, key.to_string());
            }
            Some(existing) => {
                site_warn!(
                    "Document {} has duplicate image slot {} ({} and {})",
                    record.id,
                    index,
                    existing,
                    key
                );
                if key == canonical_key(index) {
                    slots.insert(index, key.to_string());
                }
            }
        }
    }
    slots
}

fn canonical_key(index: u32) -> String {
    format!("{IMAGE_PREFIX}{index}")
}

fn parse_image_suffix(key: &str) -> Option<u32> {
    let digits = key.strip_prefix(IMAGE_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
