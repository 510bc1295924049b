use tx_crn::ComplexSpecies;
use tx_crn::Material;
use tx_crn::Reaction;
use tx_crn::Species;

use crate::Mechanism;
use crate::MechanismError;
use crate::ReactionUpdate;
use crate::SpeciesUpdate;
use crate::check_rate;
use crate::warn_if_untyped;

/// Whether the catalytic step consumes its substrate.
///
/// Consuming:  S + E <-> S:E -> E (+ P)
/// Copy:       S + E <-> S:E -> S + E + P
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalysisMode {
    Consuming,
    Copy,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalyticRates {
    pub kb: f64,
    pub ku: f64,
    pub kcat: f64,
}

impl CatalyticRates {
    pub fn new(kb: f64, ku: f64, kcat: f64) -> Self {
        CatalyticRates { kb, ku, kcat }
    }
}

/// Something that can stand in for a species, e.g. a component wrapping its
/// default species. Used to pass composite objects as enzyme arguments.
pub trait SpeciesSource {
    fn species(&self) -> Option<Species>;
}

/// The accepted shapes of an enzyme argument. Resolution to a concrete
/// species happens once, at mechanism construction.
pub enum EnzymeArg<'a> {
    /// An explicit species, used verbatim.
    Species(Species),
    /// A bare name, wrapped with the role's placeholder material.
    Named(&'a str),
    /// A reference to something exposing a default species.
    Resolvable(&'a dyn SpeciesSource),
}

impl From<Species> for EnzymeArg<'_> {
    fn from(s: Species) -> Self {
        EnzymeArg::Species(s)
    }
}

impl<'a> From<&'a str> for EnzymeArg<'a> {
    fn from(name: &'a str) -> Self {
        EnzymeArg::Named(name)
    }
}

/// Configuration of one catalytic specialization: how the enzyme argument
/// resolves, how the product is derived from the substrate, and which
/// catalytic mode applies. Specializations are values of this type, not
/// subtypes of the engine.
#[derive(Debug, Clone)]
pub struct CatalyticRole {
    pub default_name: &'static str,
    pub mechanism_type: &'static str,
    /// Label of the enzyme parameter in error messages ("rnap", ...).
    pub enzyme_role: &'static str,
    /// Material given to an enzyme passed as a bare name.
    pub enzyme_material: Material,
    /// Whether [`EnzymeArg::Resolvable`] is an accepted shape.
    pub accepts_resolvable: bool,
    /// Material of the product derived by retyping the substrate, if any.
    pub product_material: Option<Material>,
    pub mode: CatalysisMode,
    /// Name of the catalytic rate constant in error messages.
    pub kcat_name: &'static str,
}

/// G + RNAP <-> G:RNAP -> G + RNAP + mRNA, rates kb/ku/ktx.
pub const TRANSCRIPTION_MM: CatalyticRole = CatalyticRole {
    default_name: "transcription_mm",
    mechanism_type: "transcription",
    enzyme_role: "rnap",
    enzyme_material: Material::Protein,
    accepts_resolvable: true,
    product_material: Some(Material::Rna),
    mode: CatalysisMode::Copy,
    kcat_name: "ktx",
};

/// mRNA + Ribo <-> mRNA:Ribo -> mRNA + Ribo + protein, rates kb/ku/ktl.
pub const TRANSLATION_MM: CatalyticRole = CatalyticRole {
    default_name: "translation_mm",
    mechanism_type: "translation",
    enzyme_role: "ribosome",
    enzyme_material: Material::Ribosome,
    accepts_resolvable: true,
    product_material: Some(Material::Protein),
    mode: CatalysisMode::Copy,
    kcat_name: "ktl",
};

/// mRNA + Endo <-> mRNA:Endo -> Endo, rates kb/ku/kdeg. The enzyme argument
/// accepts only a species or a name string.
pub const RNA_DEGRADATION_MM: CatalyticRole = CatalyticRole {
    default_name: "rna_degradation_mm",
    mechanism_type: "rna_degradation",
    enzyme_role: "nuclease",
    enzyme_material: Material::Protein,
    accepts_resolvable: false,
    product_material: None,
    mode: CatalysisMode::Consuming,
    kcat_name: "kdeg",
};

/// Per-call arguments of the catalytic family.
#[derive(Debug, Clone)]
pub struct CatalysisCall {
    pub substrate: Species,
    /// Explicit product, overriding the role's derivation.
    pub product: Option<Species>,
    /// Pre-built substrate:enzyme complex, used verbatim when given.
    pub complex: Option<ComplexSpecies>,
    pub rates: CatalyticRates,
    /// Include the enzyme in `update_species`.
    pub return_enzyme: bool,
    /// Include the derived product in `update_species`.
    pub return_product: bool,
}

impl CatalysisCall {
    pub fn new(substrate: Species, rates: CatalyticRates) -> Self {
        CatalysisCall {
            substrate,
            product: None,
            complex: None,
            rates,
            return_enzyme: false,
            return_product: false,
        }
    }
}

/// Generic Michaelis-Menten binding-and-catalysis engine.
///
/// Transcription, translation and RNA degradation are this engine
/// configured with [`TRANSCRIPTION_MM`], [`TRANSLATION_MM`] and
/// [`RNA_DEGRADATION_MM`].
#[derive(Debug, Clone)]
pub struct MichaelisMenten {
    name: String,
    mechanism_type: String,
    enzyme: Species,
    mode: CatalysisMode,
    product_material: Option<Material>,
    kcat_name: &'static str,
}

impl MichaelisMenten {
    /// Bare engine with an explicit enzyme species and no product
    /// derivation rule.
    pub fn new(
        name: impl Into<String>,
        mechanism_type: impl Into<String>,
        enzyme: Species,
        mode: CatalysisMode,
    ) -> Self {
        let name = name.into();
        let mechanism_type = mechanism_type.into();
        warn_if_untyped(&name, &mechanism_type);
        MichaelisMenten {
            name,
            mechanism_type,
            enzyme,
            mode,
            product_material: None,
            kcat_name: "kcat",
        }
    }

    /// Engine configured by a role. Fails fast when the enzyme argument has
    /// a shape the role does not accept or does not resolve to a species.
    pub fn from_role(role: &CatalyticRole, enzyme: EnzymeArg<'_>)
        -> Result<Self, MechanismError>
    {
        let enzyme = resolve_enzyme(role, enzyme)?;
        Ok(MichaelisMenten {
            name: role.default_name.into(),
            mechanism_type: role.mechanism_type.into(),
            enzyme,
            mode: role.mode,
            product_material: role.product_material.clone(),
            kcat_name: role.kcat_name,
        })
    }

    pub fn enzyme(&self) -> &Species {
        &self.enzyme
    }

    pub fn mode(&self) -> CatalysisMode {
        self.mode
    }

    fn substrate_complex(&self, call: &CatalysisCall) -> ComplexSpecies {
        call.complex.clone().unwrap_or_else(|| {
            ComplexSpecies::new(vec![call.substrate.clone(), self.enzyme.clone()])
        })
    }

    fn product(&self, call: &CatalysisCall) -> Option<Species> {
        call.product.clone().or_else(|| {
            self.product_material
                .clone()
                .map(|m| call.substrate.retyped(m))
        })
    }
}

fn resolve_enzyme(role: &CatalyticRole, enzyme: EnzymeArg<'_>)
    -> Result<Species, MechanismError>
{
    match enzyme {
        EnzymeArg::Species(s) => Ok(s),
        EnzymeArg::Named(name) => Ok(Species::new(name, role.enzyme_material.clone())),
        EnzymeArg::Resolvable(source) if role.accepts_resolvable => {
            source.species()
                .ok_or(MechanismError::UnresolvedEnzyme(role.enzyme_role))
        }
        EnzymeArg::Resolvable(_) => {
            Err(MechanismError::InvalidEnzyme(
                role.enzyme_role, "a species or a name string"))
        }
    }
}

impl Mechanism for MichaelisMenten {
    type Call = CatalysisCall;

    fn name(&self) -> &str {
        &self.name
    }

    fn mechanism_type(&self) -> &str {
        &self.mechanism_type
    }

    fn update_species(&self, call: &CatalysisCall) -> SpeciesUpdate {
        let mut species = Vec::new();
        if call.return_enzyme {
            species.push(self.enzyme.clone());
        }
        species.push(self.substrate_complex(call).species());
        if call.return_product {
            if let Some(product) = self.product(call) {
                species.push(product);
            }
        }
        SpeciesUpdate::from_species(species)
    }

    fn update_reactions(&self, call: &CatalysisCall)
        -> Result<ReactionUpdate, MechanismError>
    {
        check_rate("kb", call.rates.kb)?;
        check_rate("ku", call.rates.ku)?;
        check_rate(self.kcat_name, call.rates.kcat)?;

        let complex = self.substrate_complex(call).species();

        // S + E <-> S:E
        let binding = Reaction::reversible(
            vec![call.substrate.clone(), self.enzyme.clone()],
            vec![complex.clone()],
            call.rates.kb,
            call.rates.ku,
        )?;

        let outputs = match (self.mode, self.product(call)) {
            // S:E -> P + E
            (CatalysisMode::Consuming, Some(product)) => {
                vec![product, self.enzyme.clone()]
            }
            // S:E -> E
            (CatalysisMode::Consuming, None) => {
                vec![self.enzyme.clone()]
            }
            // S:E -> S + P + E
            (CatalysisMode::Copy, Some(product)) => {
                vec![call.substrate.clone(), product, self.enzyme.clone()]
            }
            (CatalysisMode::Copy, None) => {
                return Err(MechanismError::MissingProduct(self.name.clone()));
            }
        };
        let catalysis = Reaction::new(vec![complex], outputs, call.rates.kcat)?;

        Ok(ReactionUpdate::from_reactions(vec![binding, catalysis]))
    }
}

pub fn transcription_mm(rnap: EnzymeArg<'_>) -> Result<MichaelisMenten, MechanismError> {
    MichaelisMenten::from_role(&TRANSCRIPTION_MM, rnap)
}

pub fn translation_mm(ribosome: EnzymeArg<'_>) -> Result<MichaelisMenten, MechanismError> {
    MichaelisMenten::from_role(&TRANSLATION_MM, ribosome)
}

pub fn rna_degradation_mm(nuclease: EnzymeArg<'_>) -> Result<MichaelisMenten, MechanismError> {
    MichaelisMenten::from_role(&RNA_DEGRADATION_MM, nuclease)
}
