// --- File: crates/services/creno_front/src/views.rs ---
//! HTML page building.
//!
//! Every value that came over the network (service names, descriptions,
//! datetimes, ids, server error messages) goes through `escape_html` before
//! it is embedded. No exceptions; the backend's values are untrusted text.

use creno_catalog::{Catalog, ReservationView, NO_RESERVATIONS};
use creno_common::escape_html;
use creno_gateway::Service;

/// Shared page frame.
fn layout(title: &str, who: Option<&str>, body: &str) -> String {
    let who_line = match who {
        Some(email) => escape_html(email),
        None => "aucun".to_string(),
    };
    format!(
        "<!DOCTYPE html>\n<html lang=\"fr\">\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>\n<p>Connecté en tant que : <strong>{who_line}</strong></p>\n<nav><a href=\"/\">Accueil</a> | <a href=\"/services\">Services</a> | <a href=\"/reservations\">Mes réservations</a></nav>\n{body}\n</body>\n</html>\n",
        title = escape_html(title),
        who_line = who_line,
        body = body,
    )
}

/// Home page: login form, booking form, and the admin forms for the
/// privileged identity.
pub fn home_page(who: Option<&str>, is_admin: bool) -> String {
    let mut body = String::from(
        "<h1>Réservations</h1>\n\
         <form method=\"post\" action=\"/login\">\n\
         <label>Email <input name=\"email\" type=\"email\"></label>\n\
         <button type=\"submit\">Connexion</button>\n\
         </form>\n\
         <form method=\"post\" action=\"/reservations\">\n\
         <label>Slot ID <input name=\"slot_id\"></label>\n\
         <button type=\"submit\">Réserver</button>\n\
         </form>\n",
    );

    if is_admin {
        body.push_str(
            "<h2>Administration</h2>\n\
             <form method=\"post\" action=\"/admin/services\">\n\
             <label>Nom <input name=\"name\"></label>\n\
             <label>Description <input name=\"description\"></label>\n\
             <label>Durée (min) <input name=\"duration\" type=\"number\"></label>\n\
             <button type=\"submit\">Créer le service</button>\n\
             </form>\n\
             <form method=\"post\" action=\"/admin/slots\">\n\
             <label>Service ID <input name=\"service_id\"></label>\n\
             <label>Datetime <input name=\"datetime\" placeholder=\"2025-01-06T10:00:00Z\"></label>\n\
             <label>Capacité <input name=\"capacity\" type=\"number\"></label>\n\
             <button type=\"submit\">Ajouter le créneau</button>\n\
             </form>\n",
        );
    }

    layout("Réservations", who, &body)
}

/// Services page: the service list plus the slot catalog, with the explicit
/// reload action that rebuilds the catalog.
pub fn services_page(who: Option<&str>, services: &[Service], catalog: &Catalog) -> String {
    let mut body = String::from("<h1>Services</h1>\n");
    body.push_str(
        "<form method=\"post\" action=\"/services/reload\">\
         <button type=\"submit\">Recharger</button></form>\n",
    );

    if services.is_empty() {
        body.push_str("<p>Aucun service</p>\n");
    } else {
        body.push_str("<ul>\n");
        for service in services {
            body.push_str(&format!("<li><strong>{}</strong>", escape_html(&service.name)));
            if let Some(description) = service.description.as_deref().filter(|d| !d.is_empty()) {
                body.push_str(&format!(" ({})", escape_html(description)));
            }
            body.push_str(&format!(", {} min</li>\n", service.duration));
        }
        body.push_str("</ul>\n");
    }

    body.push_str("<h2>Créneaux</h2>\n");
    if catalog.is_empty() {
        body.push_str("<p>Aucun créneau</p>\n");
    } else {
        // Stable display order; the catalog itself is unordered.
        let mut entries: Vec<_> = catalog.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));

        body.push_str("<table>\n<tr><th>Slot ID</th><th>Service</th><th>Date</th></tr>\n");
        for (slot_id, entry) in entries {
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(slot_id),
                escape_html(&entry.service_label),
                escape_html(&entry.datetime),
            ));
        }
        body.push_str("</table>\n");
    }

    layout("Services", who, &body)
}

/// Shown when the services fetch itself failed (distinct from "no services").
pub fn services_error_page(who: Option<&str>) -> String {
    layout(
        "Services",
        who,
        "<h1>Services</h1>\n<p>Erreur de chargement des services</p>\n\
         <form method=\"post\" action=\"/services/reload\">\
         <button type=\"submit\">Réessayer</button></form>\n",
    )
}

/// My-reservations page: the joined display records, or the placeholder.
pub fn reservations_page(who: Option<&str>, views: &[ReservationView]) -> String {
    let mut body = String::from("<h1>Mes réservations</h1>\n");

    if views.is_empty() {
        body.push_str(&format!("<p>{}</p>\n", NO_RESERVATIONS));
    } else {
        body.push_str("<ul>\n");
        for view in views {
            body.push_str(&format!(
                "<li><strong>{}</strong> : {}",
                escape_html(&view.service_label),
                escape_html(&view.datetime),
            ));
            if let Some(booked_line) = &view.booked_line {
                body.push_str(&format!("<br><small>{}</small>", escape_html(booked_line)));
            }
            body.push_str(&format!(
                "<form method=\"post\" action=\"/reservations/{}/cancel\">\
                 <button type=\"submit\">Annuler</button></form>",
                escape_html(&view.reservation_id),
            ));
            body.push_str("</li>\n");
        }
        body.push_str("</ul>\n");
    }

    layout("Mes réservations", who, &body)
}

/// Post-action result page (booking confirmed, errors, admin results…).
pub fn message_page(who: Option<&str>, message: &str) -> String {
    layout(
        "Réservations",
        who,
        &format!("<p>{}</p>\n<p><a href=\"/\">Retour</a></p>\n", escape_html(message)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(name: &str, description: &str) -> Service {
        Service {
            id: "s1".to_string(),
            name: name.to_string(),
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
            duration: 30,
        }
    }

    #[test]
    fn malicious_service_name_is_entity_encoded() {
        let services = [service("<script>alert('x')</script>", "\"quoted\" & more")];
        let page = services_page(None, &services, &Catalog::default());
        assert!(!page.contains("<script>alert"));
        assert!(page.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(page.contains("&quot;quoted&quot; &amp; more"));
    }

    #[test]
    fn reservation_fields_are_escaped() {
        let views = [ReservationView {
            reservation_id: "r<1>".to_string(),
            service_label: "Créneau <ghost>".to_string(),
            datetime: "Date inconnue".to_string(),
            booked_line: Some("Réservé le <hier>".to_string()),
        }];
        let page = reservations_page(Some("user@example.com"), &views);
        assert!(page.contains("Créneau &lt;ghost&gt;"));
        assert!(page.contains("Réservé le &lt;hier&gt;"));
        assert!(page.contains("/reservations/r&lt;1&gt;/cancel"));
    }

    #[test]
    fn empty_reservation_list_shows_the_placeholder() {
        let page = reservations_page(Some("user@example.com"), &[]);
        assert!(page.contains("Aucune réservation"));
    }

    #[test]
    fn admin_forms_only_render_for_the_admin() {
        assert!(home_page(Some("admin@example.com"), true).contains("/admin/services"));
        assert!(!home_page(Some("user@example.com"), false).contains("/admin/services"));
    }

    #[test]
    fn anonymous_visitor_is_shown_as_aucun() {
        let page = home_page(None, false);
        assert!(page.contains("<strong>aucun</strong>"));
    }
}
