//! Contact page blocks read from single settings documents.
//!
//! Every field has a default, and a missing document yields the defaults in
//! full, so the page always has something to show.

use serde::{Deserialize, Serialize};

use crate::resolve::resolve_text;
use crate::RawRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactChannel {
    Email,
    Location,
    Messenger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCard {
    pub channel: ContactChannel,
    pub title: String,
    pub info: String,
    pub link: String,
    pub link_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressInfo {
    pub club_name: String,
    pub university_name: String,
    pub address: String,
    pub map_url: String,
    pub facebook: String,
    pub linkedin: String,
    pub instagram: String,
}

/// Fallback values for the contact page, overridable from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDefaults {
    pub email: String,
    pub location: String,
    pub location_link: String,
    pub messenger_info: String,
    pub messenger_link: String,
    pub address: AddressInfo,
}

impl Default for ContactDefaults {
    fn default() -> Self {
        Self {
            email: "robotics@example.edu".to_string(),
            location: "Campus Robotics Lab".to_string(),
            location_link: "https://maps.google.com".to_string(),
            messenger_info: "Facebook Messenger".to_string(),
            messenger_link: "https://m.me/".to_string(),
            address: AddressInfo {
                club_name: "University Robotics Club".to_string(),
                university_name: "University".to_string(),
                address: "Campus Robotics Lab".to_string(),
                map_url: "https://maps.google.com/maps?output=embed".to_string(),
                facebook: "https://www.facebook.com".to_string(),
                linkedin: "https://www.linkedin.com".to_string(),
                instagram: "https://www.instagram.com".to_string(),
            },
        }
    }
}

fn field(doc: Option<&RawRecord>, key: &str, default: &str) -> String {
    doc.and_then(|record| resolve_text(record, [key]))
        .unwrap_or_else(|| default.to_string())
}

/// The three contact cards, in display order.
pub fn contact_cards(doc: Option<&RawRecord>, defaults: &ContactDefaults) -> Vec<ContactCard> {
    let email = field(doc, "Email", &defaults.email);
    vec![
        ContactCard {
            channel: ContactChannel::Email,
            title: field(doc, "Email_Title", "Email Us"),
            link: format!("mailto:{email}"),
            info: email,
            link_text: field(doc, "Email_LinkText", "Connect"),
        },
        ContactCard {
            channel: ContactChannel::Location,
            title: field(doc, "Location_Title", "Find Us"),
            info: field(doc, "Location", &defaults.location),
            link: field(doc, "Location_Link", &defaults.location_link),
            link_text: field(doc, "Location_LinkText", "Connect"),
        },
        ContactCard {
            channel: ContactChannel::Messenger,
            title: field(doc, "Messenger_Title", "Message Us"),
            info: field(doc, "Messenger_Info", &defaults.messenger_info),
            link: field(doc, "Messenger_Link", &defaults.messenger_link),
            link_text: field(doc, "Messenger_LinkText", "Chat Now"),
        },
    ]
}

pub fn address_info(doc: Option<&RawRecord>, defaults: &ContactDefaults) -> AddressInfo {
    let fallback = &defaults.address;
    AddressInfo {
        club_name: field(doc, "Club_Name", &fallback.club_name),
        university_name: field(doc, "University_Name", &fallback.university_name),
        address: field(doc, "Address", &fallback.address),
        map_url: field(doc, "Map_URL", &fallback.map_url),
        facebook: field(doc, "Facebook", &fallback.facebook),
        linkedin: field(doc, "Linkedin", &fallback.linkedin),
        instagram: field(doc, "Instagram", &fallback.instagram),
    }
}
