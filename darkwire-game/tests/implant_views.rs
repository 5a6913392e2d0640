//! Property-style checks for the installed-implants view logic.

use darkwire_game::{Implant, ImplantSortOrder, matches_query, visible_implants};

fn implant(id: &str, name: &str, info: &str, stats: &str) -> Implant {
    Implant {
        id: id.to_string(),
        name: name.to_string(),
        info: info.to_string(),
        stats: stats.to_string(),
        repeatable: false,
    }
}

fn collection() -> Vec<Implant> {
    vec![
        implant(
            "synapse",
            "Synapse Relay",
            "Shortens reflex pathways for faster terminal work.",
            "+15% command speed",
        ),
        implant(
            "wetdrive",
            "Wetdrive Array",
            "Co-processor grown into the motor cortex. Helps you gain root access on hardened hosts.",
            "+8% exploit chance",
        ),
        implant(
            "ghostlung",
            "Ghostlung Filter",
            "Scrubs trace toxins; popular with street couriers.",
            "+20 max stamina",
        ),
        implant(
            "optic",
            "optic Mesh", // deliberately lowercase to exercise case folding
            "Overlay HUD etched into the retina.",
            "+5% observation",
        ),
    ]
}

#[test]
fn empty_query_is_the_identity_view() {
    let implants = collection();
    let visible = visible_implants(&implants, "", ImplantSortOrder::Acquisition);
    let ids: Vec<&str> = visible.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["synapse", "wetdrive", "ghostlung", "optic"]);
}

#[test]
fn filtering_is_idempotent() {
    let implants = collection();
    let once: Vec<Implant> = visible_implants(&implants, "root", ImplantSortOrder::Acquisition)
        .into_iter()
        .cloned()
        .collect();
    let twice: Vec<Implant> = visible_implants(&once, "root", ImplantSortOrder::Acquisition)
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(once, twice);
    assert_eq!(once.len(), 1);
    assert_eq!(once[0].id, "wetdrive");
}

#[test]
fn query_case_does_not_matter() {
    let implants = collection();
    for (upper, lower) in [("HACK", "hack"), ("ROOT", "root"), ("OPTIC", "optic")] {
        let a = visible_implants(&implants, upper, ImplantSortOrder::Acquisition);
        let b = visible_implants(&implants, lower, ImplantSortOrder::Acquisition);
        assert_eq!(a, b, "query {upper:?} vs {lower:?}");
    }
}

#[test]
fn description_match_includes_only_that_implant() {
    let implants = collection();
    assert!(matches_query(&implants[1], "gain root access"));
    assert!(!matches_query(&implants[0], "gain root access"));

    let visible = visible_implants(&implants, "gain root access", ImplantSortOrder::Acquisition);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "wetdrive");
}

#[test]
fn alphabetical_is_total_and_case_folded() {
    let implants = collection();
    let visible = visible_implants(&implants, "", ImplantSortOrder::Alphabetical);
    let names: Vec<&str> = visible.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Ghostlung Filter",
            "optic Mesh",
            "Synapse Relay",
            "Wetdrive Array"
        ]
    );

    // Total order: every adjacent pair is strictly ordered under the
    // case-folded comparison used by the view.
    for pair in visible.windows(2) {
        assert!(
            pair[0].name.to_lowercase() <= pair[1].name.to_lowercase(),
            "{} vs {}",
            pair[0].name,
            pair[1].name
        );
    }
}

#[test]
fn acquisition_order_is_a_stable_no_op() {
    let implants = vec![
        implant("b", "Bravo", "acquired first", ""),
        implant("a", "Alpha", "acquired second", ""),
    ];
    let natural = visible_implants(&implants, "", ImplantSortOrder::Acquisition);
    let names: Vec<&str> = natural.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Bravo", "Alpha"]);

    let sorted = visible_implants(&implants, "", ImplantSortOrder::Alphabetical);
    let names: Vec<&str> = sorted.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Alpha", "Bravo"]);
}

#[test]
fn empty_collection_filters_to_nothing() {
    let implants: Vec<Implant> = Vec::new();
    assert!(visible_implants(&implants, "", ImplantSortOrder::Acquisition).is_empty());
    assert!(visible_implants(&implants, "anything", ImplantSortOrder::Alphabetical).is_empty());
}
