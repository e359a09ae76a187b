//! Zone, relation and flashcard builders.
//!
//! # Responsibility
//! - Map auxiliary source collections onto graph nodes one-to-one.
//! - Filter flashcards down to topical rows with stable ordinal ids.
//!
//! # Invariants
//! - Relations are never deduplicated or validated against entities.
//! - Flashcard ids derive from the original row ordinal, so skipped rows
//!   leave gaps.

use crate::ingest::delimited::Record;
use crate::ingest::sources::{flashcard_columns, FieldmapRelation, FieldmapZone};
use crate::model::graph::{
    entity_iri, flashcard_iri, relation_iri, zone_iri, Flashcard, FlashcardAnswer, Relation, Zone,
    ZoneCoordinates,
};
use log::debug;

/// Keywords deciding whether a flashcard question is topically relevant.
///
/// Matching is a substring check against the lowercased question, so
/// partial-word hits count.
const FLASHCARD_KEYWORDS: &[&str] = &[
    "santé",
    "mental",
    "soin",
    "incapacité",
    "inami",
    "mutuel",
    "social",
    "empowerment",
    "citoyen",
    "bruxelles",
    "ludification",
    "agence",
    "psybru",
    "télé-accueil",
];

/// Maps source zones one-to-one onto Place nodes.
pub fn build_zones(zones: &[FieldmapZone]) -> Vec<Zone> {
    zones
        .iter()
        .map(|zone| Zone {
            id: zone_iri(&zone.id),
            node_type: "Place".to_string(),
            name: zone.label.clone(),
            identifier: zone.id.clone(),
            coordinates: ZoneCoordinates {
                x: zone.x,
                y: zone.y,
            },
            layer: zone.layer.clone(),
            opacity: zone.opacity,
        })
        .collect()
}

/// Maps source relations one-to-one onto typed edges between entity IRIs.
///
/// Endpoints are rewritten without checking that the referenced entities
/// exist; dangling references are accepted.
pub fn build_relations(relations: &[FieldmapRelation]) -> Vec<Relation> {
    relations
        .iter()
        .map(|relation| Relation {
            id: relation_iri(&relation.id),
            node_type: "ug:Relation".to_string(),
            relation_type: relation.kind.clone(),
            from: entity_iri(&relation.from),
            to: entity_iri(&relation.to),
            confidence: relation.confidence,
            weight: relation.weight,
            evidence: relation.evidence.clone(),
            notes: relation.notes.clone(),
        })
        .collect()
}

/// Filters flashcard rows down to topical question/answer pairs.
///
/// Rows missing a question or an answer are dropped before the keyword
/// filter runs. Ids come from the ordinal in the original row sequence,
/// including skipped rows.
pub fn build_flashcards(rows: &[Record]) -> Vec<Flashcard> {
    let mut kept = Vec::new();
    for (ordinal, row) in rows.iter().enumerate() {
        let Some(question) = row.get_opt(flashcard_columns::QUESTION) else {
            continue;
        };
        let Some(answer) = row.get_opt(flashcard_columns::ANSWER) else {
            continue;
        };
        if !is_topical(question) {
            debug!("event=flashcard_dropped module=annotations ordinal={ordinal}");
            continue;
        }
        kept.push(Flashcard {
            id: flashcard_iri(&format!("fc_{ordinal}")),
            node_type: "Question".to_string(),
            text: question.to_string(),
            accepted_answer: FlashcardAnswer {
                node_type: "Answer".to_string(),
                text: answer.to_string(),
            },
        });
    }
    kept
}

/// Substring keyword check on the lowercased question text.
fn is_topical(question: &str) -> bool {
    let lowered = question.to_lowercase();
    FLASHCARD_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}
