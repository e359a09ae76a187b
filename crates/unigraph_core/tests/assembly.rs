use serde_json::json;
use std::fs;
use unigraph_core::ingest::sources::{FieldmapData, SourceSet};
use unigraph_core::{
    assemble, load_associations, load_fieldmap, load_flashcards, load_organisations, parse_delimited,
    SourceError,
};

const FIELDMAP_JSON: &str = r#"{
    "zones": [
        { "id": "bxl", "label": "Bruxelles-Ville", "x": 380.0, "y": 295.0, "layer": "COMMUNES", "opacity": 0.4 }
    ],
    "entities": [
        {
            "id": "cocom",
            "type": "institution",
            "subtype": "bicommunautaire",
            "layer": "INSTITUTIONNEL",
            "confidence": 1.0,
            "tags": ["sante", "bruxelles"],
            "zone": "bxl",
            "display": {
                "masked_name": "Commission communautaire commune",
                "real_name": "COCOM",
                "summary": "Institution bicommunautaire bruxelloise"
            },
            "fields": { "_evidence": ["rapport-2023"] }
        },
        {
            "id": "widget",
            "type": "gadget",
            "layer": "INSTITUTIONNEL",
            "confidence": 0.5,
            "display": { "masked_name": "Entité inconnue" }
        }
    ],
    "relations": [
        {
            "id": "r1",
            "type": "finance",
            "from": "cocom",
            "to": "missing-endpoint",
            "confidence": 0.9,
            "weight": 1.5
        }
    ]
}"#;

const ORGANISATIONS_JSON: &str = r#"[
    {
        "name": "Ligue des Usagers",
        "description": "Plateforme de défense des usagers",
        "url": "https://luss.be",
        "category": "federation",
        "areaServed": "Bruxelles"
    },
    { "name": "Commission Communautaire Commune", "description": "Doublon du fieldmap" }
]"#;

const ASSOCIATIONS_CSV: &str = "\
NOM_ASSOCIATION,Sigle,ADRESSE,C.P.,LOCALITE,AXES,RECONNAISSANCE,TEL.,FAX,E.MAIL,Site Web\n\
Lire et Écrire,LEE,Rue Haute 42,1000,Bruxelles,\"1, 2\",2022-2026,02/123.45.67,,info@lee.be,lire-et-ecrire.be\n\
,,Rue Vide 1,1050,Ixelles,,,,,,\n";

const FLASHCARDS_CSV: &str = "\
Question,Réponse\n\
Quel est le taux de TVA ?,21%\n\
Qu'est-ce que l'INAMI ?,L'assurance maladie-invalidité\n";

fn sources() -> SourceSet {
    let fieldmap: FieldmapData =
        serde_json::from_str(FIELDMAP_JSON).expect("fieldmap fixture should deserialize");
    SourceSet {
        fieldmap,
        organisations: serde_json::from_str(ORGANISATIONS_JSON)
            .expect("organisations fixture should deserialize"),
        associations: parse_delimited(ASSOCIATIONS_CSV),
        flashcards: parse_delimited(FLASHCARDS_CSV),
    }
}

#[test]
fn statistics_match_final_collection_lengths() {
    let document = assemble(&sources(), "2026-08-07");

    assert_eq!(document.statistics.zones, document.zones.len());
    assert_eq!(document.statistics.entities, document.entities.len());
    assert_eq!(document.statistics.relations, document.relations.len());
    assert_eq!(document.statistics.flashcards, document.flashcards.len());

    // 2 fieldmap + 1 organisation (the duplicate is skipped) + 1 association.
    assert_eq!(document.statistics.entities, 4);
    assert_eq!(document.statistics.zones, 1);
    assert_eq!(document.statistics.relations, 1);
    assert_eq!(document.statistics.flashcards, 1);
}

#[test]
fn duplicate_organisation_name_keeps_the_primary_record() {
    let document = assemble(&sources(), "2026-08-07");

    let matches: Vec<_> = document
        .entities
        .iter()
        .filter(|entity| entity.name.to_lowercase() == "commission communautaire commune")
        .collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].entity_type, "institution");
    assert_eq!(matches[0].id, "https://unigraph.brussels/entity/cocom");
}

#[test]
fn assembly_is_deterministic_for_a_fixed_date() {
    let first = serde_json::to_string(&assemble(&sources(), "2026-08-07"))
        .expect("document should serialize");
    let second = serde_json::to_string(&assemble(&sources(), "2026-08-07"))
        .expect("document should serialize");

    assert_eq!(first, second);
}

#[test]
fn document_envelope_carries_the_fixed_metadata() {
    let value =
        serde_json::to_value(assemble(&sources(), "2026-08-07")).expect("document should serialize");

    assert_eq!(value["@id"], json!("https://unigraph.brussels/graph"));
    assert_eq!(value["@type"], json!("Dataset"));
    assert_eq!(value["name"], json!("Unigraph Brussels Knowledge Graph"));
    assert_eq!(value["version"], json!("2.0.0"));
    assert_eq!(value["dateModified"], json!("2026-08-07"));
    assert_eq!(
        value["license"],
        json!("https://creativecommons.org/licenses/by-sa/4.0/")
    );
    assert_eq!(value["@context"]["@vocab"], json!("https://schema.org/"));
    assert_eq!(
        value["@context"]["ug"],
        json!("https://unigraph.brussels/ontology/")
    );
    assert_eq!(value["@context"]["relationType"], json!("ug:relationType"));
    assert_eq!(
        value["creator"]["@id"],
        json!("https://unigraph.brussels/#organisation")
    );
}

#[test]
fn serialized_entities_omit_absent_fields_and_map_classes() {
    let value =
        serde_json::to_value(assemble(&sources(), "2026-08-07")).expect("document should serialize");

    let entities = value["entities"]
        .as_array()
        .expect("entities should be an array");

    let cocom = &entities[0];
    assert_eq!(cocom["@type"], json!("GovernmentOrganization"));
    assert_eq!(cocom["alternateName"], json!("COCOM"));
    assert_eq!(cocom["ug:zone"], json!("https://unigraph.brussels/zone/bxl"));
    assert_eq!(cocom["ug:sources"], json!(["rapport-2023"]));

    // Unknown category falls back to the generic class.
    let widget = &entities[1];
    assert_eq!(widget["@type"], json!("Thing"));
    assert_eq!(widget["ug:entityType"], json!("gadget"));

    // The organisation has no email; the key must be absent, not null.
    let organisation = &entities[2];
    assert_eq!(organisation["ug:entityType"], json!("organization"));
    let keys = organisation
        .as_object()
        .expect("entity should be an object");
    assert!(!keys.contains_key("email"));
    assert!(!keys.contains_key("address"));
}

#[test]
fn serialized_relations_keep_dangling_endpoints() {
    let value =
        serde_json::to_value(assemble(&sources(), "2026-08-07")).expect("document should serialize");

    let relation = &value["relations"][0];
    assert_eq!(relation["@type"], json!("ug:Relation"));
    assert_eq!(
        relation["ug:to"],
        json!("https://unigraph.brussels/entity/missing-endpoint")
    );
    // No notes in the source row; the key stays absent.
    assert!(!relation
        .as_object()
        .expect("relation should be an object")
        .contains_key("ug:notes"));
}

#[test]
fn loaders_round_trip_through_files() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let fieldmap_path = dir.path().join("fieldmap.json");
    let organisations_path = dir.path().join("organisations.json");
    let associations_path = dir.path().join("associations.csv");
    let flashcards_path = dir.path().join("flashcards.csv");

    fs::write(&fieldmap_path, FIELDMAP_JSON).expect("fieldmap file should be written");
    fs::write(&organisations_path, ORGANISATIONS_JSON)
        .expect("organisations file should be written");
    fs::write(&associations_path, ASSOCIATIONS_CSV).expect("associations file should be written");
    fs::write(&flashcards_path, FLASHCARDS_CSV).expect("flashcards file should be written");

    let sources = SourceSet {
        fieldmap: load_fieldmap(&fieldmap_path).expect("fieldmap should load"),
        organisations: load_organisations(&organisations_path)
            .expect("organisations should load"),
        associations: load_associations(&associations_path).expect("associations should load"),
        flashcards: load_flashcards(&flashcards_path).expect("flashcards should load"),
    };

    let document = assemble(&sources, "2026-08-07");
    assert_eq!(document.statistics.entities, 4);
    assert_eq!(document.statistics.flashcards, 1);
}

#[test]
fn missing_source_file_is_a_fatal_io_error() {
    let dir = tempfile::tempdir().expect("temp dir should be created");

    let error = load_fieldmap(&dir.path().join("absent.json"))
        .expect_err("missing file must fail to load");
    assert!(matches!(error, SourceError::Io { .. }));
}

#[test]
fn shape_invalid_source_is_a_fatal_json_error() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("organisations.json");
    fs::write(&path, "{ not json ]").expect("file should be written");

    let error = load_organisations(&path).expect_err("invalid JSON must fail to load");
    assert!(matches!(error, SourceError::Json { .. }));
}
