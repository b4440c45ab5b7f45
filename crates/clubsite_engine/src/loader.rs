use std::sync::Arc;
use std::time::Duration;

use futures_util::future::{join3, join_all};
use site_logging::{site_debug, site_warn};

use clubsite_core::{
    address_info, contact_cards, normalize, ContactDefaults, ContactPageView, DatasetKind,
    DisplayItem, PanelRoute, RawRecord,
};

use crate::{CacheGate, DocumentStore, FailureKind, StoreError};

/// Where each dataset lives in the document store.
pub mod layout {
    pub const EVENTS: &[&str] = &["All_Data", "Event_Page", "All_Events_of_RC"];
    pub const HALL_OF_FAME: &[&str] = &["All_Data", "Governing_Panel", "Hall_of_Fame"];
    pub const SEMESTERS: &[&str] = &["All_Data", "Governing_Panel", "Semesters"];
    pub const CONTACTS: &[&str] = &["Contact Us"];
    pub const CONTACT_INFO: &[&str] = &["Contact Us", "Contact_Info"];
    pub const ADDRESS_INFO: &[&str] = &["Contact Us", "Address_Info"];
    pub const SPONSORS: &[&str] = &["sponsors"];
    pub const COLLABORATIONS: &[&str] = &["collaborations"];
    pub const PARTNER_LOGOS: &[&str] = &["All_Data", "Collaborated_Clubs"];

    /// Sub-collection id and the category title its members display under.
    pub const PANEL_SECTIONS: [(&str, &str); 8] = [
        ("Advisory_Panel", "Advisory Panel"),
        ("Executive_Panel", "Executive Panel"),
        ("Deputy_Executive_Panel", "Deputy Executive Panel"),
        ("Senior_Sub_Executive_Panel", "Senior Sub-Executive Panel"),
        ("Sub_Executive_Panel", "Sub-Executive Panel"),
        ("Junior_Sub_Executive_Panel", "Junior Sub-Executive Panel"),
        ("Working_Committee", "Working Committee"),
        ("General_Members", "General Members"),
    ];
}

const CACHE_KEY_PREFIX: &str = "clubsite";

#[derive(Debug, Clone)]
pub struct LoaderSettings {
    pub fetch_timeout: Duration,
    pub cache_ttl: Duration,
    /// Datasets served through the local cache; the rest always hit the store.
    pub cached_datasets: Vec<DatasetKind>,
    pub featured_events: usize,
    pub contact_defaults: ContactDefaults,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(15),
            cache_ttl: Duration::from_secs(24 * 60 * 60),
            cached_datasets: vec![DatasetKind::CollaboratedClubs],
            featured_events: 3,
            contact_defaults: ContactDefaults::default(),
        }
    }
}

/// Everything a page needs, loaded from the store and normalized.
///
/// No method here fails: transport problems surface as empty lists or as
/// default contact blocks, and are logged.
pub struct SiteLoader {
    store: Arc<dyn DocumentStore>,
    cache: CacheGate,
    settings: LoaderSettings,
}

impl SiteLoader {
    pub fn new(store: Arc<dyn DocumentStore>, cache: CacheGate, settings: LoaderSettings) -> Self {
        let cache = cache.with_fetch_timeout(settings.fetch_timeout);
        Self {
            store,
            cache,
            settings,
        }
    }

    pub async fn events(&self) -> Vec<DisplayItem> {
        self.list(
            DatasetKind::Events,
            None,
            self.fetch_collection(layout::EVENTS, DatasetKind::Events),
        )
        .await
    }

    /// The first few events, as shown on the home page.
    pub async fn featured_events(&self) -> Vec<DisplayItem> {
        let mut events = self.events().await;
        events.truncate(self.settings.featured_events);
        events
    }

    pub async fn hall_of_fame(&self) -> Vec<DisplayItem> {
        self.list(
            DatasetKind::HallOfFame,
            None,
            self.fetch_collection(layout::HALL_OF_FAME, DatasetKind::HallOfFame),
        )
        .await
    }

    /// Members of one governing-panel page, classified and sorted.
    pub async fn panel(&self, route: &PanelRoute) -> Vec<DisplayItem> {
        match route {
            PanelRoute::HallOfFame => self.hall_of_fame().await,
            PanelRoute::Semester { collection } => {
                self.list(
                    DatasetKind::PanelMembers,
                    Some(route.cache_key()),
                    self.fetch_semester(collection),
                )
                .await
            }
        }
    }

    pub async fn sponsors(&self) -> Vec<DisplayItem> {
        self.list(
            DatasetKind::Sponsors,
            None,
            self.fetch_collection(layout::SPONSORS, DatasetKind::Sponsors),
        )
        .await
    }

    pub async fn collaborations(&self) -> Vec<DisplayItem> {
        self.list(
            DatasetKind::Collaborations,
            None,
            self.fetch_collection(layout::COLLABORATIONS, DatasetKind::Collaborations),
        )
        .await
    }

    /// Logos for the scrolling partner strip, read from one bundled document.
    ///
    /// A missing document counts as a failed fetch so that its absence is
    /// never cached.
    pub async fn partner_logos(&self) -> Vec<DisplayItem> {
        let fetch = async {
            match self.store.get_document(layout::PARTNER_LOGOS).await? {
                Some(record) => Ok(normalize(&[record], DatasetKind::CollaboratedClubs)),
                None => Err(StoreError::new(
                    FailureKind::NotFound,
                    layout::PARTNER_LOGOS.join("/"),
                )),
            }
        };
        self.list(DatasetKind::CollaboratedClubs, None, fetch).await
    }

    pub async fn contact_page(&self) -> ContactPageView {
        let (info, address, team) = join3(
            self.optional_document(layout::CONTACT_INFO),
            self.optional_document(layout::ADDRESS_INFO),
            self.list(
                DatasetKind::Contacts,
                None,
                self.fetch_collection(layout::CONTACTS, DatasetKind::Contacts),
            ),
        )
        .await;
        let defaults = &self.settings.contact_defaults;
        ContactPageView {
            cards: contact_cards(info.as_ref(), defaults),
            address: address_info(address.as_ref(), defaults),
            team,
        }
    }

    async fn list<Fut>(&self, kind: DatasetKind, scope: Option<String>, fetch: Fut) -> Vec<DisplayItem>
    where
        Fut: std::future::Future<Output = Result<Vec<DisplayItem>, StoreError>>,
    {
        let key = cache_key(kind, scope.as_deref());
        if self.settings.cached_datasets.contains(&kind) {
            self.cache.get_cached(&key, self.settings.cache_ttl, || fetch).await
        } else {
            self.cache.fetch_or_empty(&key, fetch).await
        }
    }

    async fn fetch_collection(
        &self,
        path: &[&str],
        kind: DatasetKind,
    ) -> Result<Vec<DisplayItem>, StoreError> {
        let records = self.store.list_documents(path).await?;
        Ok(normalize(&records, kind))
    }

    /// Reads every panel sub-collection concurrently. A failing section is
    /// skipped; the fetch only fails when every section failed.
    async fn fetch_semester(&self, collection: &str) -> Result<Vec<DisplayItem>, StoreError> {
        let fetches = layout::PANEL_SECTIONS.iter().map(|&(section_id, title)| async move {
            let mut path = layout::SEMESTERS.to_vec();
            path.push(collection);
            path.push(section_id);
            let result = self.store.list_documents(&path).await;
            (section_id, title, result)
        });

        let mut records: Vec<RawRecord> = Vec::new();
        let mut last_error = None;
        let mut succeeded = 0usize;
        for (section_id, title, result) in join_all(fetches).await {
            match result {
                Ok(section) => {
                    succeeded += 1;
                    site_debug!(
                        "Section {} of {} has {} documents",
                        section_id,
                        collection,
                        section.len()
                    );
                    records.extend(section.into_iter().map(|record| record.in_category(title)));
                }
                Err(err) => {
                    site_warn!(
                        "Failed to fetch section {} of {}: {}",
                        section_id,
                        collection,
                        err
                    );
                    last_error = Some(err);
                }
            }
        }

        match last_error {
            Some(err) if succeeded == 0 => Err(err),
            _ => Ok(normalize(&records, DatasetKind::PanelMembers)),
        }
    }

    async fn optional_document(&self, path: &[&str]) -> Option<RawRecord> {
        match self.cache.run_fetch(self.store.get_document(path)).await {
            Ok(record) => record,
            Err(err) => {
                site_warn!("Failed to fetch {}: {}", path.join("/"), err);
                None
            }
        }
    }
}

fn cache_key(kind: DatasetKind, scope: Option<&str>) -> String {
    match scope {
        Some(scope) => format!("{CACHE_KEY_PREFIX}_{kind}_{scope}"),
        None => format!("{CACHE_KEY_PREFIX}_{kind}"),
    }
}
