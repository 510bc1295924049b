use std::fmt;

use serde::{Serialize, Deserialize};

use crate::Material;
use crate::Species;

/// A composite species identified by the multiset of its constituents.
///
/// Construction sorts the constituents, so `ComplexSpecies::new([A, B])`
/// and `ComplexSpecies::new([B, A])` derive the same name and compare
/// equal. An explicit name overrides the derivation verbatim; callers use
/// that when identity must encode more than set membership (e.g.
/// stoichiometric multiplicity in cooperative binding).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComplexSpecies {
    constituents: Vec<Species>,
    name: String,
}

impl ComplexSpecies {
    pub fn new(mut constituents: Vec<Species>) -> Self {
        canonicalize(&mut constituents);
        let name = derived_name(&constituents);
        ComplexSpecies { constituents, name }
    }

    pub fn named(mut constituents: Vec<Species>, name: impl Into<String>) -> Self {
        canonicalize(&mut constituents);
        ComplexSpecies { constituents, name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn constituents(&self) -> &[Species] {
        &self.constituents
    }

    /// The complex as a plain reacting species.
    pub fn species(&self) -> Species {
        Species::new(self.name.clone(), Material::Complex)
    }
}

// Canonical constituent order: material first, then name.
fn canonicalize(constituents: &mut [Species]) {
    constituents.sort_by(|a, b| {
        (&a.material, &a.name).cmp(&(&b.material, &b.name))
    });
}

fn derived_name(sorted: &[Species]) -> String {
    let parts: Vec<String> = sorted.iter().map(|s| s.to_string()).collect();
    format!("complex_{}", parts.join("_"))
}

impl From<ComplexSpecies> for Species {
    fn from(complex: ComplexSpecies) -> Self {
        complex.species()
    }
}

impl fmt::Display for ComplexSpecies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
