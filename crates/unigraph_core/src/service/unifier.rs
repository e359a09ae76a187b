//! Entity unification engine.
//!
//! # Responsibility
//! - Map every entity-bearing source record onto the canonical shape.
//! - Deduplicate across sources by case-insensitive name identity.
//!
//! # Invariants
//! - Sources are absorbed in fixed priority order; on a name collision the
//!   earliest record wins with all of its fields (no field-level merge).
//! - The name index always reflects the first occurrence of a name;
//!   later inserts never update an existing index entry.
//! - Appended entities are never mutated.

use crate::ingest::delimited::Record;
use crate::ingest::sources::{FieldmapEntity, OrganisationRecord};
use crate::model::entity::{Entity, PostalAddress};
use crate::model::graph::{entity_iri, zone_iri};
use crate::ontology::OntologyClass;
use crate::slug::slugify;
use log::{debug, info};
use std::collections::HashMap;

/// Thematic layer assigned to organisation-registry entities.
const ORGANISATION_LAYER: &str = "SOCIOPOLITIQUE";
/// Thematic layer assigned to association-registry entities.
const ASSOCIATION_LAYER: &str = "EDUCATION_PERMANENTE";
/// Source-level category recorded for association entities.
const ASSOCIATION_CATEGORY: &str = "Éducation permanente";
/// Default confidence for organisation-registry records.
const ORGANISATION_CONFIDENCE: f64 = 0.9;
/// Default confidence for association-registry records.
const ASSOCIATION_CONFIDENCE: f64 = 0.95;

/// Cross-source entity collector with first-seen-wins name deduplication.
///
/// The case-insensitive name index makes the first-seen rule an explicit
/// lookup-then-insert operation instead of a scan over the collection.
#[derive(Debug, Default)]
pub struct Unifier {
    entities: Vec<Entity>,
    names: HashMap<String, usize>,
}

impl Unifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of unified entities collected so far.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns whether no entity has been collected yet.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Returns whether a name is already taken under case-insensitive
    /// comparison.
    pub fn contains_name(&self, name: &str) -> bool {
        self.names.contains_key(&normalize_name(name))
    }

    /// Consumes the unifier, yielding entities in insertion order.
    pub fn into_entities(self) -> Vec<Entity> {
        self.entities
    }

    /// Absorbs the primary dataset's entities.
    ///
    /// Every record is inserted unconditionally; the name index only
    /// records the first occurrence of each name, so the earliest record
    /// anchors collisions with later sources.
    pub fn absorb_fieldmap(&mut self, records: &[FieldmapEntity]) {
        for record in records {
            let class = OntologyClass::from_category(&record.kind);
            if class.is_fallback() {
                debug!(
                    "event=category_fallback module=unifier category={} entity={}",
                    record.kind, record.id
                );
            }

            let mut entity = Entity::new(
                entity_iri(&record.id),
                class,
                record.display.masked_name.clone(),
                record.kind.clone(),
                record.layer.clone(),
                record.confidence,
            );
            entity.description = record.display.summary.clone();
            entity.alternate_name = record
                .display
                .real_name
                .clone()
                .filter(|name| !name.is_empty());
            entity.identifier = Some(record.id.clone());
            entity.subtype = record.subtype.clone();
            entity.tags = record.tags.clone();
            entity.zone = record
                .zone
                .as_deref()
                .filter(|zone| !zone.is_empty())
                .map(zone_iri);
            entity.sources = record.fields.as_ref().and_then(|fields| fields.evidence.clone());
            self.append(entity);
        }
        info!(
            "event=unify_source module=unifier source=fieldmap inserted={}",
            records.len()
        );
    }

    /// Absorbs organisation-registry records behind the collision check.
    pub fn absorb_organisations(&mut self, records: &[OrganisationRecord]) {
        let mut inserted = 0usize;
        let mut skipped_collision = 0usize;
        let mut skipped_unnamed = 0usize;

        for record in records {
            if record.name.is_empty() {
                skipped_unnamed += 1;
                continue;
            }
            if self.contains_name(&record.name) {
                debug!(
                    "event=name_collision module=unifier source=organisations name={}",
                    record.name
                );
                skipped_collision += 1;
                continue;
            }

            let local_id = format!("org_{}", slugify(&record.name));
            let mut entity = Entity::new(
                entity_iri(&local_id),
                OntologyClass::Organization,
                record.name.clone(),
                "organization",
                ORGANISATION_LAYER,
                ORGANISATION_CONFIDENCE,
            );
            entity.description = record.description.clone();
            entity.url = record.url.clone();
            entity.email = record.email.clone().filter(|email| !email.is_empty());
            entity.category = record.category.clone();
            entity.area_served = record.area_served.clone();
            entity.stats = record.stat().cloned();
            self.append(entity);
            inserted += 1;
        }
        info!(
            "event=unify_source module=unifier source=organisations inserted={inserted} \
             skipped_collision={skipped_collision} skipped_unnamed={skipped_unnamed}"
        );
    }

    /// Absorbs association-registry rows behind the collision check.
    pub fn absorb_associations(&mut self, rows: &[Record]) {
        use crate::ingest::sources::association_columns as col;

        let mut inserted = 0usize;
        let mut skipped_collision = 0usize;
        let mut skipped_unnamed = 0usize;

        for row in rows {
            let Some(name) = row.get_opt(col::NAME) else {
                skipped_unnamed += 1;
                continue;
            };
            if self.contains_name(name) {
                debug!(
                    "event=name_collision module=unifier source=associations name={name}"
                );
                skipped_collision += 1;
                continue;
            }

            let local_id = format!("assoc_{}", slugify(name));
            let mut entity = Entity::new(
                entity_iri(&local_id),
                OntologyClass::Organization,
                name,
                "association",
                ASSOCIATION_LAYER,
                ASSOCIATION_CONFIDENCE,
            );
            entity.alternate_name = row.get_opt(col::ACRONYM).map(str::to_string);
            entity.category = Some(ASSOCIATION_CATEGORY.to_string());
            entity.axes = row.get_opt(col::AXES).map(str::to_string);
            entity.recognition = row.get_opt(col::RECOGNITION).map(str::to_string);
            entity.address = Some(PostalAddress::belgian(
                row.get(col::STREET),
                row.get(col::POSTAL_CODE),
                row.get(col::LOCALITY),
            ));
            entity.telephone = row.get_opt(col::TELEPHONE).map(str::to_string);
            entity.fax_number = row.get_opt(col::FAX).map(str::to_string);
            entity.email = row.get_opt(col::EMAIL).map(str::to_string);
            entity.url = row.get_opt(col::WEBSITE).map(normalize_website);
            self.append(entity);
            inserted += 1;
        }
        info!(
            "event=unify_source module=unifier source=associations inserted={inserted} \
             skipped_collision={skipped_collision} skipped_unnamed={skipped_unnamed}"
        );
    }

    fn append(&mut self, entity: Entity) {
        let key = normalize_name(&entity.name);
        let index = self.entities.len();
        self.entities.push(entity);
        self.names.entry(key).or_insert(index);
    }
}

/// Normalizes a name for deduplication: full Unicode lowercasing, no
/// trimming or accent folding.
fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

/// Prefixes `https://` when a registry website value lacks a scheme.
fn normalize_website(site: &str) -> String {
    if site.starts_with("http") {
        site.to_string()
    } else {
        format!("https://{site}")
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_name, normalize_website};

    #[test]
    fn name_normalization_lowercases_accented_letters() {
        assert_eq!(normalize_name("Télé-Accueil"), "télé-accueil");
    }

    #[test]
    fn website_without_scheme_gets_https_prefix() {
        assert_eq!(normalize_website("example.be"), "https://example.be");
    }

    #[test]
    fn website_with_scheme_is_untouched() {
        assert_eq!(normalize_website("http://example.be"), "http://example.be");
        assert_eq!(normalize_website("https://example.be"), "https://example.be");
    }
}
