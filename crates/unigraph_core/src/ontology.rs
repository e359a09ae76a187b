//! Target ontology classes and source-category mapping.
//!
//! # Responsibility
//! - Declare the closed set of classes unified entities can take.
//! - Map source-level category labels onto that set with a safe fallback.
//!
//! # Invariants
//! - `from_category` is total: unknown labels map to [`OntologyClass::Thing`].
//! - Wire labels are stable; they are part of the published document shape.

use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// Closed set of classes for unified graph nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OntologyClass {
    GovernmentOrganization,
    Organization,
    Service,
    MedicalOrganization,
    /// Sheltered-housing initiatives (the `ihp` category).
    ///
    /// The published wire label carries a trailing `m`; it is kept verbatim
    /// until the data owners confirm a rename.
    ShelteredHousing,
    ResidentialComplex,
    Hospital,
    Ngo,
    DefinedTerm,
    Legislation,
    MonetaryGrant,
    HowTo,
    Project,
    WebPage,
    AdministrativeArea,
    /// Fallback for categories outside the declared table.
    Thing,
}

impl OntologyClass {
    /// Maps a source-level category label onto the closed class set.
    ///
    /// Unknown labels fall back to [`OntologyClass::Thing`]; callers surface
    /// the fallback as a data-quality signal instead of an error.
    pub fn from_category(category: &str) -> Self {
        match category {
            "institution" => Self::GovernmentOrganization,
            "plateforme" => Self::Organization,
            "service" => Self::Service,
            "ssm" => Self::MedicalOrganization,
            "ihp" => Self::ShelteredHousing,
            "msp" => Self::ResidentialComplex,
            "hopital" => Self::Hospital,
            "equipe_mobile" => Self::MedicalOrganization,
            "asbl" => Self::Ngo,
            "cpas" => Self::GovernmentOrganization,
            "club" => Self::Organization,
            "gam" => Self::Organization,
            "concept" => Self::DefinedTerm,
            "decret" => Self::Legislation,
            "financement" => Self::MonetaryGrant,
            "indicateur" => Self::DefinedTerm,
            "methode" => Self::HowTo,
            "programme" => Self::Project,
            "web_resource" => Self::WebPage,
            "bassin" => Self::AdministrativeArea,
            "organization" => Self::Organization,
            "association" => Self::Organization,
            _ => Self::Thing,
        }
    }

    /// Returns whether this class is the fallback for unmapped categories.
    pub fn is_fallback(self) -> bool {
        matches!(self, Self::Thing)
    }

    /// Stable wire label used in the published document.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GovernmentOrganization => "GovernmentOrganization",
            Self::Organization => "Organization",
            Self::Service => "Service",
            Self::MedicalOrganization => "MedicalOrganization",
            Self::ShelteredHousing => "ResidentialComplexm",
            Self::ResidentialComplex => "ResidentialComplex",
            Self::Hospital => "Hospital",
            Self::Ngo => "NGO",
            Self::DefinedTerm => "DefinedTerm",
            Self::Legislation => "Legislation",
            Self::MonetaryGrant => "MonetaryGrant",
            Self::HowTo => "HowTo",
            Self::Project => "Project",
            Self::WebPage => "WebPage",
            Self::AdministrativeArea => "AdministrativeArea",
            Self::Thing => "Thing",
        }
    }
}

impl Display for OntologyClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for OntologyClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::OntologyClass;

    #[test]
    fn known_categories_map_to_declared_classes() {
        assert_eq!(
            OntologyClass::from_category("institution"),
            OntologyClass::GovernmentOrganization
        );
        assert_eq!(
            OntologyClass::from_category("ssm"),
            OntologyClass::MedicalOrganization
        );
        assert_eq!(OntologyClass::from_category("asbl"), OntologyClass::Ngo);
        assert_eq!(
            OntologyClass::from_category("decret"),
            OntologyClass::Legislation
        );
        assert_eq!(
            OntologyClass::from_category("association"),
            OntologyClass::Organization
        );
    }

    #[test]
    fn unknown_category_falls_back_to_thing() {
        let class = OntologyClass::from_category("quantum_lab");
        assert_eq!(class, OntologyClass::Thing);
        assert!(class.is_fallback());
    }

    #[test]
    fn sheltered_housing_label_is_preserved_verbatim() {
        assert_eq!(
            OntologyClass::from_category("ihp").as_str(),
            "ResidentialComplexm"
        );
    }

    #[test]
    fn ngo_label_is_uppercase() {
        assert_eq!(OntologyClass::Ngo.as_str(), "NGO");
    }
}
