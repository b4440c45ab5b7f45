//! Ordered alias tables, one per logical attribute.
//!
//! Each table lists the field spellings seen in the store, most preferred first.

/// Candidate field names for one logical attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aliases(pub &'static [&'static str]);

impl Aliases {
    pub fn names(&self) -> &'static [&'static str] {
        self.0
    }

    /// The same aliases with a positional suffix, e.g. `Name` -> `Name_3`.
    pub fn suffixed(&self, index: u32) -> Vec<String> {
        self.0.iter().map(|alias| format!("{alias}_{index}")).collect()
    }
}

pub const NAME: Aliases = Aliases(&["Name", "name"]);
pub const TITLE: Aliases = Aliases(&["Title", "title", "Designation"]);
pub const IMAGE: Aliases = Aliases(&["Image", "image", "Photo"]);
pub const FACEBOOK: Aliases = Aliases(&["Facebook", "facebook"]);
pub const LINKEDIN: Aliases = Aliases(&["Linkedin", "linkedin"]);
pub const GITHUB: Aliases = Aliases(&["Github", "github"]);
pub const EMAIL: Aliases = Aliases(&["Email", "email"]);
pub const INSTAGRAM: Aliases = Aliases(&["Instagram", "instagram"]);
pub const ORDER: Aliases = Aliases(&["Order", "order"]);
pub const DESCRIPTION: Aliases = Aliases(&["Description", "description"]);
pub const DEPARTMENT: Aliases = Aliases(&["Department", "department"]);
pub const SESSION: Aliases = Aliases(&["Session", "session"]);
pub const TENURE: Aliases = Aliases(&["Tenure", "tenure"]);

pub const EVENT_NAME: Aliases = Aliases(&["Event_Name", "Name", "name"]);
pub const EVENT_COVER: Aliases = Aliases(&["Cover_Picture", "Image", "image"]);
pub const EVENT_INTRO: Aliases = Aliases(&["Introduction", "Description", "description"]);

pub const CONTACT_ROLE: Aliases = Aliases(&["Designation", "designation", "Role", "role"]);
pub const CONTACT_PHONE: Aliases =
    Aliases(&["Contact_Number", "Number", "Phone", "phone", "number"]);
pub const CONTACT_EMAIL: Aliases = Aliases(&["Edu_Mail", "Email", "email"]);
pub const CONTACT_IMAGE: Aliases = Aliases(&["Image", "Picture", "image", "picture"]);

pub const SPONSOR_SERVICE: Aliases = Aliases(&["Service", "service"]);
pub const SPONSOR_LOGO: Aliases = Aliases(&["LogoUrl", "logoUrl", "Logo"]);
pub const SPONSOR_PRIORITY: Aliases = Aliases(&["Priority", "priority"]);
pub const SPONSOR_CONTACT_PERSON: Aliases = Aliases(&["ContactPerson", "contactPerson"]);
pub const SPONSOR_CONTACT_NUMBER: Aliases = Aliases(&["ContactNumber", "contactNumber"]);

pub const COLLAB_CLUB: Aliases = Aliases(&["ClubName", "clubName"]);
pub const COLLAB_EVENT: Aliases = Aliases(&["EventName", "eventName"]);
pub const COLLAB_LOGO: Aliases = Aliases(&["LogoUrl", "logoUrl"]);
