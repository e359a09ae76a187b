//! Core engine for the unigraph data unifier.
//! This crate owns every merge rule; file placement and the run loop live
//! in the CLI collaborator.

pub mod ingest;
pub mod logging;
pub mod model;
pub mod ontology;
pub mod service;
pub mod slug;

pub use ingest::sources::{
    load_associations, load_fieldmap, load_flashcards, load_organisations, FieldmapData,
    FieldmapEntity, FieldmapRelation, FieldmapZone, OrganisationRecord, SourceSet,
};
pub use ingest::{parse_delimited, Record, SourceError, SourceResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entity::{Entity, PostalAddress};
pub use model::graph::{Flashcard, GraphDocument, Relation, Statistics, Zone};
pub use ontology::OntologyClass;
pub use service::assembler::assemble;
pub use service::unifier::Unifier;
pub use slug::slugify;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
