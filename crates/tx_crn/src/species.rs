use std::fmt;

use serde::{Serialize, Deserialize};

/// Material tags the core emits. Anything outside the built-in TX-TL
/// vocabulary goes through `Other`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Dna,
    Rna,
    Protein,
    Ribosome,
    Complex,
    Other(String),
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Material::Dna => write!(f, "dna"),
            Material::Rna => write!(f, "rna"),
            Material::Protein => write!(f, "protein"),
            Material::Ribosome => write!(f, "ribosome"),
            Material::Complex => write!(f, "complex"),
            Material::Other(tag) => write!(f, "{}", tag),
        }
    }
}

/// A distinct chemical entity. Two species are the same entity iff both
/// name and material match.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Species {
    pub name: String,
    pub material: Material,
}

impl Species {
    pub fn new(name: impl Into<String>, material: Material) -> Self {
        Species { name: name.into(), material }
    }

    /// Same name, different material. This is how transcription derives an
    /// RNA species from its template and translation a protein from its
    /// transcript.
    pub fn retyped(&self, material: Material) -> Self {
        Species { name: self.name.clone(), material }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.material, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_display() {
        assert_eq!(format!("{}", Material::Dna), "dna");
        assert_eq!(format!("{}", Material::Ribosome), "ribosome");
        assert_eq!(format!("{}", Material::Other("lipid".into())), "lipid");
    }

    #[test]
    fn test_species_identity() {
        let a = Species::new("geneA", Material::Dna);
        let b = Species::new("geneA", Material::Dna);
        let c = Species::new("geneA", Material::Rna);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_species_retyped() {
        let dna = Species::new("geneA", Material::Dna);
        let rna = dna.retyped(Material::Rna);
        assert_eq!(rna.name, "geneA");
        assert_eq!(rna.material, Material::Rna);
        assert_eq!(dna.material, Material::Dna);
    }

    #[test]
    fn test_species_display() {
        let s = Species::new("tetR", Material::Protein);
        assert_eq!(format!("{}", s), "protein_tetR");
    }
}
