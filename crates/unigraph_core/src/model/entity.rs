//! Unified entity node.
//!
//! # Responsibility
//! - Define the single node shape every source record maps onto.
//! - Carry source-specific optional attributes without per-source types.
//!
//! # Invariants
//! - `name` is required and non-empty for every constructed entity.
//! - Entities are immutable once appended to a collection; unification
//!   never merges fields across sources.

use crate::ontology::OntologyClass;
use serde::Serialize;
use serde_json::Value;

/// Postal address block attached to association entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub node_type: String,
    #[serde(rename = "streetAddress")]
    pub street_address: String,
    #[serde(rename = "postalCode")]
    pub postal_code: String,
    #[serde(rename = "addressLocality")]
    pub address_locality: String,
    #[serde(rename = "addressCountry")]
    pub address_country: String,
}

impl PostalAddress {
    /// Builds a Belgian postal address from registry columns.
    ///
    /// Blank columns stay blank; the address block itself is always present
    /// for association entities.
    pub fn belgian(
        street: impl Into<String>,
        postal_code: impl Into<String>,
        locality: impl Into<String>,
    ) -> Self {
        Self {
            node_type: "PostalAddress".to_string(),
            street_address: street.into(),
            postal_code: postal_code.into(),
            address_locality: locality.into(),
            address_country: "BE".to_string(),
        }
    }
}

/// Unified graph node produced by the entity unifier.
///
/// One shape serves all three entity-bearing sources; attributes a source
/// does not provide stay `None` and are omitted from the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub class: OntologyClass,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "alternateName", skip_serializing_if = "Option::is_none")]
    pub alternate_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Source-local identifier; only primary-dataset entities carry one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Source-level category, preserved next to the mapped ontology class.
    #[serde(rename = "ug:entityType")]
    pub entity_type: String,
    #[serde(rename = "ug:subtype", skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    #[serde(rename = "ug:category", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "ug:layer")]
    pub layer: String,
    #[serde(rename = "ug:confidence")]
    pub confidence: f64,
    #[serde(rename = "ug:tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Weak reference to a zone IRI; relation only, not ownership.
    #[serde(rename = "ug:zone", skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(rename = "ug:sources", skip_serializing_if = "Option::is_none")]
    pub sources: Option<Value>,
    #[serde(rename = "ug:axes", skip_serializing_if = "Option::is_none")]
    pub axes: Option<String>,
    #[serde(rename = "ug:recognition", skip_serializing_if = "Option::is_none")]
    pub recognition: Option<String>,
    #[serde(rename = "ug:stats", skip_serializing_if = "Option::is_none")]
    pub stats: Option<Value>,
    #[serde(rename = "areaServed", skip_serializing_if = "Option::is_none")]
    pub area_served: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(rename = "faxNumber", skip_serializing_if = "Option::is_none")]
    pub fax_number: Option<String>,
}

impl Entity {
    /// Creates an entity with the required attributes; every optional
    /// attribute starts absent.
    pub fn new(
        id: impl Into<String>,
        class: OntologyClass,
        name: impl Into<String>,
        entity_type: impl Into<String>,
        layer: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self {
            id: id.into(),
            class,
            name: name.into(),
            description: None,
            alternate_name: None,
            url: None,
            email: None,
            identifier: None,
            entity_type: entity_type.into(),
            subtype: None,
            category: None,
            layer: layer.into(),
            confidence,
            tags: None,
            zone: None,
            sources: None,
            axes: None,
            recognition: None,
            stats: None,
            area_served: None,
            address: None,
            telephone: None,
            fax_number: None,
        }
    }
}
