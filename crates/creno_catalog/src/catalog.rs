// --- File: crates/creno_catalog/src/catalog.rs ---
//! Building the slot catalog out of the service list and per-service slots.

use std::collections::HashMap;

use futures::future::join_all;
use tracing::{debug, warn};

use creno_gateway::{FetchOutcome, Service, SlotSource};

/// Human-readable descriptor for one slot, derived by joining the slot with
/// its owning service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub service_label: String,
    /// The slot's datetime as the server sent it; empty when unknown.
    pub datetime: String,
}

/// Index from slot id to its [`CatalogEntry`].
///
/// Built fresh on each (re)build and never mutated afterwards; consumers get
/// it behind an `Arc` and can only ever observe a fully assembled catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<String, CatalogEntry>,
}

impl Catalog {
    pub fn get(&self, slot_id: &str) -> Option<&CatalogEntry> {
        self.entries.get(slot_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CatalogEntry)> {
        self.entries.iter()
    }
}

impl FromIterator<(String, CatalogEntry)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, CatalogEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// The label shown for a service: its name, with the description appended in
/// parentheses when there is one.
pub fn service_label(service: &Service) -> String {
    match service.description.as_deref() {
        Some(description) if !description.is_empty() => {
            format!("{} ({})", service.name, description)
        }
        _ => service.name.clone(),
    }
}

/// Builds the catalog: one slot request per service, all in flight at once.
///
/// The join waits for every request to settle. Each outcome is independent:
/// a failed or undecodable response for one service becomes an empty slot
/// list for that service and neither delays nor fails the others. Slot ids
/// are globally unique, so the flattened result does not depend on arrival
/// order.
///
/// Returns `Failed` only when the services fetch itself failed: without the
/// service list there is no catalog to build, which is distinct from a
/// successfully built empty one.
pub async fn build_catalog(source: &dyn SlotSource) -> FetchOutcome<Catalog> {
    let services = match source.list_services().await {
        FetchOutcome::Fetched(services) => services,
        FetchOutcome::Failed => {
            warn!("services fetch failed, no catalog can be built");
            return FetchOutcome::Failed;
        }
    };

    let fetches = services
        .iter()
        .map(|service| source.list_slots(&service.id));
    let outcomes = join_all(fetches).await;

    let mut entries = HashMap::new();
    for (service, outcome) in services.iter().zip(outcomes) {
        let slots = match outcome {
            FetchOutcome::Fetched(slots) => slots,
            FetchOutcome::Failed => {
                warn!(
                    "slot fetch failed for service {}, treating as empty",
                    service.id
                );
                Vec::new()
            }
        };
        let label = service_label(service);
        for slot in slots {
            entries.insert(
                slot.id,
                CatalogEntry {
                    service_label: label.clone(),
                    datetime: slot.datetime,
                },
            );
        }
    }

    debug!(
        "catalog built: {} slots across {} services",
        entries.len(),
        services.len()
    );
    FetchOutcome::Fetched(Catalog { entries })
}
