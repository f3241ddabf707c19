//! Constraint enforcement and derived-class evaluation on hand-built graphs.

use music_ontology::model::graph::{Graph, Value};
use music_ontology::model::vocab::music::*;
use music_ontology::music;
use music_ontology::OntologyError;

fn empty_graph() -> Graph {
    Graph::new("http://example.org/music", music::schema().expect("valid schema"))
}

fn assert_violation<T: std::fmt::Debug>(result: Result<T, OntologyError>, subject: &str) {
    match result {
        Err(OntologyError::Constraint(violation)) => assert_eq!(violation.subject, subject),
        other => panic!("expected a constraint violation on {subject}, got {other:?}"),
    }
}

fn ensemble(graph: &mut Graph, name: &str, size: usize) {
    graph.declare(MUSICAL_ENSEMBLE, name).unwrap();
    for i in 0..size {
        let member = format!("{name} member {i}");
        graph.declare(SOLO_ARTIST, &member).unwrap();
        graph.relate(name, "members", &member).unwrap();
    }
}

// --- Disjointness ---

#[test]
fn solo_artist_cannot_be_an_ensemble() {
    let mut g = empty_graph();
    g.declare(SOLO_ARTIST, "Neil Peart").unwrap();
    assert_violation(g.assert_type("Neil Peart", MUSICAL_ENSEMBLE), "Neil Peart");
    assert!(!g.classes_of("Neil Peart").unwrap().contains(MUSICAL_ENSEMBLE));
}

#[test]
fn single_ep_and_compilation_are_pairwise_disjoint() {
    let mut g = empty_graph();
    g.declare(SINGLE, "Limelight (Single)").unwrap();
    assert_violation(g.assert_type("Limelight (Single)", EP), "Limelight (Single)");
    assert_violation(
        g.assert_type("Limelight (Single)", COMPILATION),
        "Limelight (Single)",
    );

    g.declare(EP, "Feedback").unwrap();
    assert_violation(g.assert_type("Feedback", COMPILATION), "Feedback");
}

#[test]
fn compatible_types_can_be_combined() {
    let mut g = empty_graph();
    g.declare(ALBUM, "Moving Pictures").unwrap();
    g.assert_type("Moving Pictures", COMPILATION).unwrap();
    let classes = g.classes_of("Moving Pictures").unwrap();
    assert!(classes.contains(ALBUM));
    assert!(classes.contains(COMPILATION));
}

#[test]
fn derived_classes_cannot_be_asserted() {
    let mut g = empty_graph();
    g.declare(TRACK, "YYZ").unwrap();
    assert_violation(g.assert_type("YYZ", INSTRUMENTAL_TRACK), "YYZ");
    assert!(matches!(
        g.declare(TRIO, "Rush"),
        Err(OntologyError::Constraint(_))
    ));
}

// --- Identity ---

#[test]
fn names_are_unique() {
    let mut g = empty_graph();
    g.declare(GENRE, "Rock").unwrap();
    assert_violation(g.declare(ALBUM, "Rock"), "Rock");
    assert_violation(g.declare(TRACK, TRACK), TRACK);
    assert_violation(g.declare(TRACK, "has_track"), "has_track");
    assert_violation(g.declare(TRACK, "  "), "  ");
    assert_eq!(g.len(), 1);
}

// --- Functional properties ---

#[test]
fn functional_property_accepts_one_value() {
    let mut g = empty_graph();
    g.declare(ALBUM, "Moving Pictures").unwrap();
    g.declare(ALBUM, "Permanent Waves").unwrap();
    g.declare(TRACK, "Limelight").unwrap();

    g.relate("Limelight", "album", "Moving Pictures").unwrap();
    g.relate("Limelight", "album", "Moving Pictures").unwrap();
    assert_violation(
        g.relate("Limelight", "album", "Permanent Waves"),
        "Limelight",
    );
    assert_eq!(
        g.object("Limelight", "album").unwrap(),
        Some("Moving Pictures")
    );
    assert!(g.objects("Permanent Waves", "tracks").unwrap().is_empty());
}

#[test]
fn functional_inverse_is_enforced_on_the_object() {
    let mut g = empty_graph();
    g.declare(TRACK, "Limelight").unwrap();
    g.declare(TRACK, "Tom Sawyer").unwrap();
    g.declare(LYRICS, "'Limelight' Lyrics").unwrap();

    g.relate("Limelight", "lyrics", "'Limelight' Lyrics").unwrap();
    assert_violation(
        g.relate("Tom Sawyer", "lyrics", "'Limelight' Lyrics"),
        "'Limelight' Lyrics",
    );
    assert!(g.objects("Tom Sawyer", "lyrics").unwrap().is_empty());
}

#[test]
fn functional_datatype_property() {
    let mut g = empty_graph();
    g.declare(ALBUM, "Moving Pictures").unwrap();
    g.set_integer("Moving Pictures", "year", 1981).unwrap();
    assert_violation(g.set_integer("Moving Pictures", "year", 1982), "Moving Pictures");
    assert_eq!(g.integer("Moving Pictures", "year").unwrap(), Some(1981));
}

// --- Inverses ---

#[test]
fn inverse_facts_are_recorded_both_ways() {
    let mut g = empty_graph();
    g.declare(ALBUM, "Moving Pictures").unwrap();
    g.declare(TRACK, "Limelight").unwrap();
    g.relate("Moving Pictures", "tracks", "Limelight").unwrap();
    assert_eq!(
        g.object("Limelight", "album").unwrap(),
        Some("Moving Pictures")
    );

    g.declare(MUSICAL_ENSEMBLE, "Rush").unwrap();
    g.declare(SOLO_ARTIST, "Geddy Lee").unwrap();
    g.relate("Geddy Lee", "groups", "Rush").unwrap();
    assert_eq!(g.objects("Rush", "members").unwrap(), vec!["Geddy Lee"]);
}

// --- Domain and range ---

#[test]
fn domain_is_checked() {
    let mut g = empty_graph();
    g.declare(TRACK, "YYZ").unwrap();
    assert_violation(g.set_integer("YYZ", "year", 1981), "YYZ");

    g.declare(ARTIST, "Various Artists").unwrap();
    assert_violation(g.relate("Various Artists", "members", "Various Artists"), "Various Artists");
}

#[test]
fn range_is_checked() {
    let mut g = empty_graph();
    g.declare(TRACK, "YYZ").unwrap();
    g.declare(GENRE, "Rock").unwrap();
    g.declare(MUSICAL_ENSEMBLE, "Rush").unwrap();
    g.declare(MUSICAL_ENSEMBLE, "Dream Theater").unwrap();

    assert_violation(g.relate("YYZ", "artists", "Rock"), "YYZ");
    assert_violation(g.relate("YYZ", "genres", "Rush"), "YYZ");
    assert_violation(g.relate("Rush", "members", "Dream Theater"), "Rush");
    assert_violation(g.set_integer("YYZ", "length_in_milliseconds", -1), "YYZ");
    assert_violation(
        g.assert_value("YYZ", "length_in_milliseconds", Value::Text("4:25".into())),
        "YYZ",
    );
    g.set_integer("YYZ", "length_in_milliseconds", 0).unwrap();
}

// --- Lookups ---

#[test]
fn unknown_names_are_not_found() {
    let mut g = empty_graph();
    g.declare(TRACK, "YYZ").unwrap();

    assert!(matches!(
        g.individual("Freewill"),
        Err(OntologyError::NotFound { kind: "individual", .. })
    ));
    assert!(matches!(
        g.relate("YYZ", "album", "Permanent Waves"),
        Err(OntologyError::NotFound { kind: "individual", .. })
    ));
    assert!(matches!(
        g.values("YYZ", "producer"),
        Err(OntologyError::NotFound { kind: "property", .. })
    ));
    assert!(matches!(
        g.instances_of("Orchestra"),
        Err(OntologyError::NotFound { kind: "class", .. })
    ));
    assert!(matches!(
        g.declare("Orchestra", "LSO"),
        Err(OntologyError::NotFound { kind: "class", .. })
    ));
}

#[test]
fn properties_resolve_by_accessor_or_iri_name() {
    let mut g = empty_graph();
    g.declare(ALBUM, "Moving Pictures").unwrap();
    g.declare(TRACK, "YYZ").unwrap();
    g.relate("YYZ", "is_from_album", "Moving Pictures").unwrap();
    assert_eq!(g.objects("Moving Pictures", "has_track").unwrap(), vec!["YYZ"]);
    assert_eq!(g.objects("Moving Pictures", "tracks").unwrap(), vec!["YYZ"]);
}

// --- Derived classes ---

#[test]
fn ensemble_size_classes() {
    let mut g = empty_graph();
    ensemble(&mut g, "Simon & Garfunkel", 2);
    ensemble(&mut g, "Rush", 3);
    ensemble(&mut g, "Liquid Tension Experiment", 4);
    ensemble(&mut g, "Dream Theater", 5);
    ensemble(&mut g, "Count Basie Orchestra", 12);

    assert!(g.is_instance_of("Simon & Garfunkel", DUET).unwrap());
    assert!(g.is_instance_of("Rush", TRIO).unwrap());
    assert!(!g.is_instance_of("Rush", QUARTET).unwrap());
    assert!(g.is_instance_of("Liquid Tension Experiment", QUARTET).unwrap());
    assert!(g.is_instance_of("Dream Theater", QUINTET).unwrap());
    assert!(g.is_instance_of("Count Basie Orchestra", BIG_BAND).unwrap());
    assert!(!g.is_instance_of("Dream Theater", BIG_BAND).unwrap());
    assert_eq!(g.instances_of(TRIO).unwrap(), vec!["Rush"]);
}

#[test]
fn derived_membership_follows_mutation() {
    let mut g = empty_graph();
    ensemble(&mut g, "Rush", 3);
    assert!(g.is_instance_of("Rush", TRIO).unwrap());

    g.declare(SOLO_ARTIST, "Ben Mink").unwrap();
    g.relate("Rush", "members", "Ben Mink").unwrap();
    assert!(!g.is_instance_of("Rush", TRIO).unwrap());
    assert!(g.is_instance_of("Rush", QUARTET).unwrap());
}

#[test]
fn solo_artist_is_never_an_ensemble_size_class() {
    let mut g = empty_graph();
    g.declare(SOLO_ARTIST, "Tony Levin").unwrap();
    assert!(!g.is_instance_of("Tony Levin", DUET).unwrap());
    assert!(!g.classes_of("Tony Levin").unwrap().contains(DUET));
}

#[test]
fn instrumental_tracks_and_albums() {
    let mut g = empty_graph();
    g.declare(ALBUM, "Instrumentals").unwrap();
    g.declare(ALBUM, "Mixed").unwrap();
    g.declare(ALBUM, "Empty").unwrap();
    g.declare(TRACK, "YYZ").unwrap();
    g.declare(TRACK, "La Villa Strangiato").unwrap();
    g.declare(TRACK, "Limelight").unwrap();
    g.declare(LYRICS, "'Limelight' Lyrics").unwrap();
    g.relate("Limelight", "lyrics", "'Limelight' Lyrics").unwrap();

    g.relate("YYZ", "album", "Instrumentals").unwrap();
    g.relate("La Villa Strangiato", "album", "Instrumentals").unwrap();
    g.relate("Limelight", "album", "Mixed").unwrap();

    assert!(g.is_instance_of("YYZ", INSTRUMENTAL_TRACK).unwrap());
    assert!(!g.is_instance_of("Limelight", INSTRUMENTAL_TRACK).unwrap());
    assert!(g.is_instance_of("Instrumentals", INSTRUMENTAL_ALBUM).unwrap());
    assert!(!g.is_instance_of("Mixed", INSTRUMENTAL_ALBUM).unwrap());
    assert!(!g.is_instance_of("Empty", INSTRUMENTAL_ALBUM).unwrap());
}

#[test]
fn various_artists_album() {
    let mut g = empty_graph();
    g.declare(ARTIST, VARIOUS_ARTISTS).unwrap();
    g.declare(MUSICAL_ENSEMBLE, "Rush").unwrap();
    g.declare(COMPILATION, "Prog Anthology").unwrap();
    g.declare(ALBUM, "Moving Pictures").unwrap();
    g.relate("Prog Anthology", "artist", VARIOUS_ARTISTS).unwrap();
    g.relate("Moving Pictures", "artist", "Rush").unwrap();

    assert_eq!(g.instances_of(VA_ALBUM).unwrap(), vec!["Prog Anthology"]);
    assert!(g.classes_of("Prog Anthology").unwrap().contains(VA_ALBUM));
    assert_eq!(
        g.objects(VARIOUS_ARTISTS, "discography").unwrap(),
        vec!["Prog Anthology"]
    );
}
