//! Implant catalog and the installed-list view logic
use crate::settings::ImplantSortOrder;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A single cybernetic implant as described by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Implant {
    pub id: String,
    pub name: String,
    /// Long-form description shown in the detail pane.
    pub info: String,
    /// Stat-effect text shown beneath the description.
    #[serde(default)]
    pub stats: String,
    /// Repeatable implants stack levels instead of occupying a slot and are
    /// never listed in the installed panel.
    #[serde(default)]
    pub repeatable: bool,
}

/// Complete implant catalog. The stored order of `implants` is the player's
/// acquirement order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImplantCatalog {
    pub implants: Vec<Implant>,
}

impl ImplantCatalog {
    /// Parse a catalog from its JSON asset.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the catalog shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Find an implant by ID.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Implant> {
        self.implants.iter().find(|implant| implant.id == id)
    }

    /// The implants the installed panel lists, in acquirement order.
    /// Repeatable implants are excluded here, at the provider side.
    #[must_use]
    pub fn listed(&self) -> Vec<Implant> {
        self.implants
            .iter()
            .filter(|implant| !implant.repeatable)
            .cloned()
            .collect()
    }
}

/// Whether an implant matches a free-text search query.
///
/// An empty query matches everything; otherwise the query must appear as a
/// case-insensitive substring of the name, description, or stat text.
#[must_use]
pub fn matches_query(implant: &Implant, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    let hit = |haystack: &str| haystack.to_lowercase().contains(&needle);
    hit(&implant.name) || hit(&implant.info) || hit(&implant.stats)
}

/// Display-name ordering for the alphabetical sort: case-folded comparison
/// with the raw name as tiebreaker, so the order is total.
#[must_use]
pub fn name_order(a: &Implant, b: &Implant) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}

/// Produce the visible list for the installed panel.
///
/// Filters by [`matches_query`], then sorts by name when the preference is
/// [`ImplantSortOrder::Alphabetical`]. Under `Acquisition` no sort is applied
/// and the input order is preserved untouched.
#[must_use]
pub fn visible_implants<'a>(
    implants: &'a [Implant],
    query: &str,
    order: ImplantSortOrder,
) -> Vec<&'a Implant> {
    let mut visible: Vec<&Implant> = implants
        .iter()
        .filter(|implant| matches_query(implant, query))
        .collect();
    if order == ImplantSortOrder::Alphabetical {
        visible.sort_by(|a, b| name_order(a, b));
    }
    visible
}

/// Resolve the panel's detail selection against the source collection.
///
/// The selection is kept by id, not by visibility: an implant hidden by the
/// current search query stays selected. Only when the id is absent from the
/// collection itself does the selection fall back to the first implant, or
/// `None` for an empty collection.
#[must_use]
pub fn resolve_selection<'a>(
    implants: &'a [Implant],
    selected_id: Option<&str>,
) -> Option<&'a Implant> {
    selected_id
        .and_then(|id| implants.iter().find(|implant| implant.id == id))
        .or_else(|| implants.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn implant(id: &str, name: &str, info: &str, stats: &str) -> Implant {
        Implant {
            id: id.to_string(),
            name: name.to_string(),
            info: info.to_string(),
            stats: stats.to_string(),
            repeatable: false,
        }
    }

    fn sample() -> Vec<Implant> {
        vec![
            implant(
                "bravo",
                "Bravo Coprocessor",
                "Acquired first.",
                "+10% hacking speed",
            ),
            implant(
                "alpha",
                "Alpha Lattice",
                "Acquired second. Lets you gain root access faster.",
                "+5% exploit chance",
            ),
        ]
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let implants = sample();
        let visible = visible_implants(&implants, "", ImplantSortOrder::Acquisition);
        let ids: Vec<&str> = visible.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["bravo", "alpha"]);
    }

    #[test]
    fn query_is_case_insensitive_across_fields() {
        let implants = sample();
        let upper = visible_implants(&implants, "ROOT", ImplantSortOrder::Acquisition);
        let lower = visible_implants(&implants, "root", ImplantSortOrder::Acquisition);
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 1);
        assert_eq!(upper[0].id, "alpha");
    }

    #[test]
    fn stats_text_is_searchable() {
        let implants = sample();
        let visible = visible_implants(&implants, "exploit", ImplantSortOrder::Acquisition);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "alpha");
    }

    #[test]
    fn alphabetical_reorders_but_acquisition_does_not() {
        let implants = sample();
        let by_name = visible_implants(&implants, "", ImplantSortOrder::Alphabetical);
        let names: Vec<&str> = by_name.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Alpha Lattice", "Bravo Coprocessor"]);

        let natural = visible_implants(&implants, "", ImplantSortOrder::Acquisition);
        let names: Vec<&str> = natural.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Bravo Coprocessor", "Alpha Lattice"]);
    }

    #[test]
    fn listed_excludes_repeatable_implants() {
        let mut catalog = ImplantCatalog { implants: sample() };
        catalog.implants.push(Implant {
            repeatable: true,
            ..implant("kern", "Kernel Patch", "Stacks endlessly.", "")
        });
        let listed = catalog.listed();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|i| !i.repeatable));
    }

    #[test]
    fn selection_survives_being_filtered_out_of_view() {
        let implants = sample();
        // "exploit" hides bravo from the visible list...
        let visible = visible_implants(&implants, "exploit", ImplantSortOrder::Acquisition);
        assert!(visible.iter().all(|i| i.id != "bravo"));
        // ...but the detail selection resolves against the collection, not
        // the view, so bravo stays selected.
        let selected = resolve_selection(&implants, Some("bravo"));
        assert_eq!(selected.map(|i| i.id.as_str()), Some("bravo"));
    }

    #[test]
    fn selection_falls_back_to_first_when_the_id_is_gone() {
        let implants = sample();
        let selected = resolve_selection(&implants, Some("removed"));
        assert_eq!(selected.map(|i| i.id.as_str()), Some("bravo"));

        assert_eq!(resolve_selection(&implants, None).map(|i| i.id.as_str()), Some("bravo"));
        assert!(resolve_selection(&[], Some("bravo")).is_none());
    }

    #[test]
    fn catalog_json_defaults_optional_fields() {
        let catalog = ImplantCatalog::from_json(
            r#"{"implants":[{"id":"a","name":"A","info":"plain"}]}"#,
        )
        .unwrap();
        assert_eq!(catalog.implants[0].stats, "");
        assert!(!catalog.implants[0].repeatable);
        assert!(catalog.find("a").is_some());
        assert!(catalog.find("b").is_none());
    }
}
