use unigraph_core::ingest::sources::{flashcard_columns, FieldmapRelation, FieldmapZone};
use unigraph_core::service::annotations::{build_flashcards, build_relations, build_zones};
use unigraph_core::Record;

fn flashcard_row(question: &str, answer: &str) -> Record {
    Record::from_pairs([
        (flashcard_columns::QUESTION, question),
        (flashcard_columns::ANSWER, answer),
    ])
}

#[test]
fn zones_map_one_to_one_onto_place_nodes() {
    let zones = build_zones(&[FieldmapZone {
        id: "ixelles".to_string(),
        label: "Ixelles".to_string(),
        x: 410.0,
        y: 520.5,
        layer: "COMMUNES".to_string(),
        opacity: 0.35,
    }]);

    assert_eq!(zones.len(), 1);
    let zone = &zones[0];
    assert_eq!(zone.id, "https://unigraph.brussels/zone/ixelles");
    assert_eq!(zone.node_type, "Place");
    assert_eq!(zone.name, "Ixelles");
    assert_eq!(zone.identifier, "ixelles");
    assert_eq!(zone.coordinates.x, 410.0);
    assert_eq!(zone.coordinates.y, 520.5);
    assert_eq!(zone.layer, "COMMUNES");
    assert_eq!(zone.opacity, 0.35);
}

#[test]
fn relations_rewrite_endpoints_without_validating_them() {
    let relations = build_relations(&[FieldmapRelation {
        id: "r1".to_string(),
        kind: "finance".to_string(),
        from: "cocom".to_string(),
        to: "ghost-entity".to_string(),
        confidence: Some(0.7),
        weight: Some(2.0),
        evidence: None,
        notes: Some("convention 2024".to_string()),
    }]);

    assert_eq!(relations.len(), 1);
    let relation = &relations[0];
    assert_eq!(relation.id, "https://unigraph.brussels/relation/r1");
    assert_eq!(relation.node_type, "ug:Relation");
    assert_eq!(relation.relation_type, "finance");
    assert_eq!(relation.from, "https://unigraph.brussels/entity/cocom");
    // The endpoint does not exist anywhere; the edge is kept as-is.
    assert_eq!(relation.to, "https://unigraph.brussels/entity/ghost-entity");
    assert_eq!(relation.confidence, Some(0.7));
    assert_eq!(relation.weight, Some(2.0));
    assert_eq!(relation.evidence, None);
    assert_eq!(relation.notes.as_deref(), Some("convention 2024"));
}

#[test]
fn flashcards_missing_question_or_answer_are_dropped() {
    let rows = vec![
        flashcard_row("", "une réponse"),
        flashcard_row("Qu'est-ce que l'INAMI ?", ""),
        flashcard_row("Qu'est-ce que l'INAMI ?", "L'assurance maladie-invalidité"),
    ];

    let flashcards = build_flashcards(&rows);

    assert_eq!(flashcards.len(), 1);
    assert_eq!(flashcards[0].text, "Qu'est-ce que l'INAMI ?");
    assert_eq!(
        flashcards[0].accepted_answer.text,
        "L'assurance maladie-invalidité"
    );
    assert_eq!(flashcards[0].accepted_answer.node_type, "Answer");
}

#[test]
fn flashcard_filter_keeps_keyword_matches_only() {
    let rows = vec![
        flashcard_row("Qu'est-ce que l'INAMI ?", "L'assurance maladie-invalidité"),
        flashcard_row("Quel est le taux de TVA ?", "21%"),
    ];

    let flashcards = build_flashcards(&rows);

    assert_eq!(flashcards.len(), 1);
    assert_eq!(flashcards[0].text, "Qu'est-ce que l'INAMI ?");
}

#[test]
fn flashcard_ids_keep_the_original_row_ordinal() {
    let rows = vec![
        flashcard_row("Quel est le taux de TVA ?", "21%"),
        flashcard_row("Qu'est-ce que la santé communautaire ?", "Une approche collective"),
        flashcard_row("Qu'est-ce que PsyBru ?", "Le plan santé mentale bruxellois"),
    ];

    let flashcards = build_flashcards(&rows);

    // Row 0 is filtered out; kept rows still carry their source ordinal.
    assert_eq!(flashcards.len(), 2);
    assert_eq!(flashcards[0].id, "https://unigraph.brussels/flashcard/fc_1");
    assert_eq!(flashcards[1].id, "https://unigraph.brussels/flashcard/fc_2");
    assert_eq!(flashcards[0].node_type, "Question");
}
