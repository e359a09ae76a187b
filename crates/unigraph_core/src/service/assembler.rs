//! Final document assembly.
//!
//! # Responsibility
//! - Run the builders and the unifier in fixed source priority order.
//! - Recompute statistics from the final collections.
//!
//! # Invariants
//! - Assembly is single-pass; no collection is revised after population.
//! - `statistics` always equals the final collection lengths.

use crate::ingest::sources::SourceSet;
use crate::model::graph::GraphDocument;
use crate::service::annotations::{build_flashcards, build_relations, build_zones};
use crate::service::unifier::Unifier;
use log::{debug, info};
use std::collections::HashSet;

/// Assembles the unified document from fully loaded sources.
///
/// `date_modified` is caller-provided so repeated runs over unchanged
/// sources produce identical output.
pub fn assemble(sources: &SourceSet, date_modified: impl Into<String>) -> GraphDocument {
    let mut document = GraphDocument::new(date_modified);

    document.zones = build_zones(&sources.fieldmap.zones);

    let mut unifier = Unifier::new();
    unifier.absorb_fieldmap(&sources.fieldmap.entities);
    unifier.absorb_organisations(&sources.organisations);
    unifier.absorb_associations(&sources.associations);
    document.entities = unifier.into_entities();

    document.relations = build_relations(&sources.fieldmap.relations);
    document.flashcards = build_flashcards(&sources.flashcards);

    document.refresh_statistics();
    log_dangling_endpoints(&document);
    info!(
        "event=graph_assembled module=assembler zones={} entities={} relations={} flashcards={}",
        document.statistics.zones,
        document.statistics.entities,
        document.statistics.relations,
        document.statistics.flashcards
    );
    document
}

/// Counts relation endpoints without a matching entity id.
///
/// Observability only; dangling references stay in the output untouched.
fn log_dangling_endpoints(document: &GraphDocument) {
    let known: HashSet<&str> = document
        .entities
        .iter()
        .map(|entity| entity.id.as_str())
        .collect();
    let dangling = document
        .relations
        .iter()
        .flat_map(|relation| [relation.from.as_str(), relation.to.as_str()])
        .filter(|endpoint| !known.contains(endpoint))
        .count();
    if dangling > 0 {
        debug!("event=dangling_endpoints module=assembler count={dangling}");
    }
}
