// --- File: crates/creno_catalog/src/render.rs ---
//! Joining a user's reservations against the catalog into display records.

use creno_gateway::Reservation;

use crate::catalog::Catalog;

/// Datetime shown when the referenced slot is not in the catalog.
pub const UNKNOWN_DATE: &str = "Date inconnue";

/// Placeholder shown instead of a list when there is nothing to list.
pub const NO_RESERVATIONS: &str = "Aucune réservation";

/// One reservation, resolved for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationView {
    pub reservation_id: String,
    pub service_label: String,
    pub datetime: String,
    /// Auxiliary line ("Réservé le …"), present when the reservation carries
    /// its creation date.
    pub booked_line: Option<String>,
}

/// Resolves each reservation against the catalog, in input order.
///
/// A reservation whose `slot_id` is absent from the catalog still renders,
/// with fallback label and datetime; a dangling weak reference is a normal
/// display case, never an error.
pub fn render_reservations(
    reservations: &[Reservation],
    catalog: &Catalog,
) -> Vec<ReservationView> {
    reservations
        .iter()
        .map(|reservation| {
            let (service_label, datetime) = match catalog.get(&reservation.slot_id) {
                Some(entry) => (entry.service_label.clone(), entry.datetime.clone()),
                None => (
                    fallback_label(&reservation.slot_id),
                    UNKNOWN_DATE.to_string(),
                ),
            };
            ReservationView {
                reservation_id: reservation.id.clone(),
                service_label,
                datetime,
                booked_line: reservation
                    .created_at
                    .as_deref()
                    .map(|date| format!("Réservé le {}", date)),
            }
        })
        .collect()
}

fn fallback_label(slot_id: &str) -> String {
    if slot_id.is_empty() {
        "Créneau inconnu".to_string()
    } else {
        format!("Créneau {}", slot_id)
    }
}
