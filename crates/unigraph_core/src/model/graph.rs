//! Graph document, auxiliary nodes and the identifier scheme.
//!
//! # Responsibility
//! - Define zones, relations, flashcards and the root document shape.
//! - Centralize the `https://unigraph.brussels/<kind>/<local>` identifier
//!   scheme and the fixed document metadata.
//!
//! # Invariants
//! - `statistics` is recomputed from final collection lengths, never kept
//!   as a running counter.
//! - The document is constructed once and fully populated in one pass.

use crate::model::entity::Entity;
use serde::Serialize;
use serde_json::Value;

/// Base IRI for every node and edge identifier.
pub const GRAPH_BASE: &str = "https://unigraph.brussels";
/// Ontology namespace referenced by the `ug:` prefix.
pub const ONTOLOGY_NAMESPACE: &str = "https://unigraph.brussels/ontology/";

const GRAPH_NAME: &str = "Unigraph Brussels Knowledge Graph";
const GRAPH_DESCRIPTION: &str =
    "Unified knowledge graph for mental health care and citizen empowerment in Brussels";
const GRAPH_VERSION: &str = "2.0.0";
const GRAPH_LICENSE: &str = "https://creativecommons.org/licenses/by-sa/4.0/";

/// Returns the IRI of an entity node.
pub fn entity_iri(local_id: &str) -> String {
    format!("{GRAPH_BASE}/entity/{local_id}")
}

/// Returns the IRI of a zone node.
pub fn zone_iri(local_id: &str) -> String {
    format!("{GRAPH_BASE}/zone/{local_id}")
}

/// Returns the IRI of a relation edge.
pub fn relation_iri(local_id: &str) -> String {
    format!("{GRAPH_BASE}/relation/{local_id}")
}

/// Returns the IRI of a flashcard node.
pub fn flashcard_iri(local_id: &str) -> String {
    format!("{GRAPH_BASE}/flashcard/{local_id}")
}

/// Fixed JSON-LD context of the published document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphContext {
    #[serde(rename = "@vocab")]
    pub vocab: String,
    pub ug: String,
    pub xsd: String,
    pub skos: String,
    pub geo: String,
    pub confidence: String,
    pub layer: String,
    pub zone: String,
    #[serde(rename = "relationType")]
    pub relation_type: String,
}

impl Default for GraphContext {
    fn default() -> Self {
        Self {
            vocab: "https://schema.org/".to_string(),
            ug: ONTOLOGY_NAMESPACE.to_string(),
            xsd: "http://www.w3.org/2001/XMLSchema#".to_string(),
            skos: "http://www.w3.org/2004/02/skos/core#".to_string(),
            geo: "http://www.w3.org/2003/01/geo/wgs84_pos#".to_string(),
            confidence: "ug:confidence".to_string(),
            layer: "ug:layer".to_string(),
            zone: "ug:zone".to_string(),
            relation_type: "ug:relationType".to_string(),
        }
    }
}

/// Publishing organisation recorded in document metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphCreator {
    #[serde(rename = "@type")]
    pub node_type: String,
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
}

impl Default for GraphCreator {
    fn default() -> Self {
        Self {
            node_type: "Organization".to_string(),
            id: format!("{GRAPH_BASE}/#organisation"),
            name: "Unigraph Brussels".to_string(),
        }
    }
}

/// Planar coordinates of a zone on the source map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneCoordinates {
    pub x: f64,
    pub y: f64,
}

/// Geographic zone node (communes and regions).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Zone {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub node_type: String,
    pub name: String,
    pub identifier: String,
    #[serde(rename = "ug:coordinates")]
    pub coordinates: ZoneCoordinates,
    #[serde(rename = "ug:layer")]
    pub layer: String,
    #[serde(rename = "ug:opacity")]
    pub opacity: f64,
}

/// Directed, typed edge between two entity IRIs.
///
/// Endpoints are never validated against the entity collection; dangling
/// references stay in the document as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Relation {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub node_type: String,
    #[serde(rename = "ug:relationType")]
    pub relation_type: String,
    #[serde(rename = "ug:from")]
    pub from: String,
    #[serde(rename = "ug:to")]
    pub to: String,
    #[serde(rename = "ug:confidence", skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(rename = "ug:weight", skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(rename = "ug:evidence", skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Value>,
    #[serde(rename = "ug:notes", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Accepted answer attached to a flashcard question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlashcardAnswer {
    #[serde(rename = "@type")]
    pub node_type: String,
    pub text: String,
}

/// Question/answer learning node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flashcard {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub node_type: String,
    pub text: String,
    #[serde(rename = "acceptedAnswer")]
    pub accepted_answer: FlashcardAnswer,
}

/// Exact collection counts, recomputed after assembly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub entities: usize,
    pub relations: usize,
    pub zones: usize,
    pub flashcards: usize,
}

/// Root aggregate of the unified knowledge graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphDocument {
    #[serde(rename = "@context")]
    pub context: GraphContext,
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub node_type: String,
    pub name: String,
    pub description: String,
    pub version: String,
    #[serde(rename = "dateModified")]
    pub date_modified: String,
    pub license: String,
    pub creator: GraphCreator,
    pub statistics: Statistics,
    pub zones: Vec<Zone>,
    pub entities: Vec<Entity>,
    pub relations: Vec<Relation>,
    pub flashcards: Vec<Flashcard>,
}

impl GraphDocument {
    /// Creates an empty document carrying the fixed metadata.
    ///
    /// `date_modified` is caller-provided; everything else about the
    /// document envelope is constant.
    pub fn new(date_modified: impl Into<String>) -> Self {
        Self {
            context: GraphContext::default(),
            id: format!("{GRAPH_BASE}/graph"),
            node_type: "Dataset".to_string(),
            name: GRAPH_NAME.to_string(),
            description: GRAPH_DESCRIPTION.to_string(),
            version: GRAPH_VERSION.to_string(),
            date_modified: date_modified.into(),
            license: GRAPH_LICENSE.to_string(),
            creator: GraphCreator::default(),
            statistics: Statistics::default(),
            zones: Vec::new(),
            entities: Vec::new(),
            relations: Vec::new(),
            flashcards: Vec::new(),
        }
    }

    /// Recomputes `statistics` from the final collection lengths.
    pub fn refresh_statistics(&mut self) {
        self.statistics = Statistics {
            entities: self.entities.len(),
            relations: self.relations.len(),
            zones: self.zones.len(),
            flashcards: self.flashcards.len(),
        };
    }
}
