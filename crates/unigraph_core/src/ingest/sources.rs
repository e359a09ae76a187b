//! Typed source records and file loaders.
//!
//! # Responsibility
//! - Declare the exact shapes of the four input sources.
//! - Load every source fully into memory before unification starts.
//!
//! # Invariants
//! - Column constants match the registry export headers verbatim.
//! - Missing optional source fields stay absent; they are never defaulted
//!   to sentinel values.

use crate::ingest::delimited::{parse_delimited, Record};
use crate::ingest::{SourceError, SourceResult};
use log::info;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Column names of the association registry export.
pub mod association_columns {
    pub const NAME: &str = "NOM_ASSOCIATION";
    pub const ACRONYM: &str = "Sigle";
    pub const STREET: &str = "ADRESSE";
    pub const POSTAL_CODE: &str = "C.P.";
    pub const LOCALITY: &str = "LOCALITE";
    pub const AXES: &str = "AXES";
    pub const RECOGNITION: &str = "RECONNAISSANCE";
    pub const TELEPHONE: &str = "TEL.";
    pub const FAX: &str = "FAX";
    pub const EMAIL: &str = "E.MAIL";
    pub const WEBSITE: &str = "Site Web";
}

/// Column names of the flashcard table export.
pub mod flashcard_columns {
    pub const QUESTION: &str = "Question";
    pub const ANSWER: &str = "Réponse";
}

/// Primary hierarchical dataset: zones, entities and relations.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldmapData {
    pub zones: Vec<FieldmapZone>,
    pub entities: Vec<FieldmapEntity>,
    pub relations: Vec<FieldmapRelation>,
}

/// Geographic zone as drawn on the source map.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldmapZone {
    pub id: String,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub layer: String,
    pub opacity: f64,
}

/// Display block of a primary-dataset entity.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldmapDisplay {
    pub masked_name: String,
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Free-form field block of a primary-dataset entity.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldmapFields {
    #[serde(default, rename = "_evidence")]
    pub evidence: Option<Value>,
}

/// Entity record of the primary dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldmapEntity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub subtype: Option<String>,
    pub layer: String,
    pub confidence: f64,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub zone: Option<String>,
    pub display: FieldmapDisplay,
    #[serde(default)]
    pub fields: Option<FieldmapFields>,
}

/// Relation record of the primary dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldmapRelation {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub evidence: Option<Value>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Entry of an organisation's `additionalProperty` list.
#[derive(Debug, Clone, Deserialize)]
pub struct AdditionalProperty {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: Value,
}

/// Record of the organisation registry.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganisationRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, rename = "areaServed")]
    pub area_served: Option<String>,
    #[serde(default, rename = "additionalProperty")]
    pub additional_property: Vec<AdditionalProperty>,
}

impl OrganisationRecord {
    /// Returns the value of the `additionalProperty` entry named `stat`.
    pub fn stat(&self) -> Option<&Value> {
        self.additional_property
            .iter()
            .find(|property| property.name == "stat")
            .map(|property| &property.value)
    }
}

/// All four sources, fully loaded and ready for the single merge pass.
#[derive(Debug, Clone)]
pub struct SourceSet {
    pub fieldmap: FieldmapData,
    pub organisations: Vec<OrganisationRecord>,
    pub associations: Vec<Record>,
    pub flashcards: Vec<Record>,
}

/// Loads the primary hierarchical dataset.
pub fn load_fieldmap(path: &Path) -> SourceResult<FieldmapData> {
    let raw = read_source(path)?;
    let data: FieldmapData = serde_json::from_str(&raw).map_err(|source| SourceError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "event=source_loaded module=ingest source=fieldmap path={} zones={} entities={} relations={}",
        path.display(),
        data.zones.len(),
        data.entities.len(),
        data.relations.len()
    );
    Ok(data)
}

/// Loads the organisation registry.
pub fn load_organisations(path: &Path) -> SourceResult<Vec<OrganisationRecord>> {
    let raw = read_source(path)?;
    let records: Vec<OrganisationRecord> =
        serde_json::from_str(&raw).map_err(|source| SourceError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    info!(
        "event=source_loaded module=ingest source=organisations path={} rows={}",
        path.display(),
        records.len()
    );
    Ok(records)
}

/// Loads the association registry export.
pub fn load_associations(path: &Path) -> SourceResult<Vec<Record>> {
    let records = parse_delimited(&read_source(path)?);
    info!(
        "event=source_loaded module=ingest source=associations path={} rows={}",
        path.display(),
        records.len()
    );
    Ok(records)
}

/// Loads the flashcard table export.
pub fn load_flashcards(path: &Path) -> SourceResult<Vec<Record>> {
    let records = parse_delimited(&read_source(path)?);
    info!(
        "event=source_loaded module=ingest source=flashcards path={} rows={}",
        path.display(),
        records.len()
    );
    Ok(records)
}

fn read_source(path: &Path) -> SourceResult<String> {
    fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}
