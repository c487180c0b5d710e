use core_types::SectionId;

use crate::RouteDescriptor;

/// The fixed route table of the site, in navigation order.
pub fn site_routes() -> Vec<RouteDescriptor> {
    use SectionId::*;

    vec![
        RouteDescriptor::nav("/", Main, "nav.home", "Startseite"),
        RouteDescriptor::nav("/manifest", Main, "nav.manifest", "Manifest"),
        RouteDescriptor::nav("/loesungen", Offering, "nav.solutions", "Was wir bauen"),
        RouteDescriptor::nav("/fuer-wen", Offering, "nav.targetGroups", "Für wen ist das?"),
        RouteDescriptor::nav("/senioren", Offering, "nav.seniors", "Für Senioren"),
        RouteDescriptor::nav("/partner-werden", Participate, "nav.partners", "Partner werden"),
        RouteDescriptor::nav("/deine-story", Participate, "nav.story", "Deine Story"),
        RouteDescriptor::nav("/name-voting", Participate, "nav.voting", "Namensabstimmung"),
        RouteDescriptor::nav("/blog", Resources, "nav.blog", "Blog / Dossier"),
        RouteDescriptor::nav("/ideen", Resources, "nav.ideas", "Öffentliche Ideen"),
        RouteDescriptor::nav("/ueber-uns", Resources, "nav.about", "Über uns"),
        RouteDescriptor::nav("/warteliste", Actions, "nav.waitlist", "Warteliste"),
        RouteDescriptor::nav("/kontakt", Actions, "nav.contact", "Kontakt"),
        RouteDescriptor::hidden("/deine-story/restaurant-meier", "Story: Restaurant Meier"),
        RouteDescriptor::hidden("/impressum", "Impressum"),
        RouteDescriptor::hidden("/datenschutz", "Datenschutz"),
        RouteDescriptor::hidden("/components/fork-button", "Fork Button"),
        RouteDescriptor::hidden("/projekte/restaurant-template", "Restaurant Template"),
    ]
}
