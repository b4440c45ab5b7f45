//! Clubsite core: pure normalization of store documents into view models.
pub mod aliases;
mod classify;
mod contact;
mod indexed;
mod item;
mod marquee;
mod normalize;
mod record;
mod resolve;
mod slug;
mod view_model;

pub use classify::{
    group_sections, CategoryTable, HALL_OF_FAME, OTHER_CATEGORY, PANEL_TIERS, UNKNOWN_NAME,
    UNRANKED,
};
pub use contact::{address_info, contact_cards, AddressInfo, ContactCard, ContactChannel, ContactDefaults};
pub use indexed::{expand_indexed_group, indexed_suffixes, is_indexed_group, ExpandOptions, Placeholder};
pub use item::{DatasetKind, DisplayItem, SocialLinks};
pub use marquee::{loop_track, Marquee};
pub use normalize::{normalize, normalize_with, CONTACT_SYSTEM_DOCS, DEFAULT_PORTRAIT};
pub use record::RawRecord;
pub use resolve::{
    resolve_number, resolve_sort_key, resolve_text, resolve_text_or, DEFAULT_SORT_KEY,
};
pub use slug::{deslugify, slugify, PanelRoute, HALL_OF_FAME_SLUG};
pub use view_model::{panel_page_view, ContactPageView, PanelPageView, SectionView};
