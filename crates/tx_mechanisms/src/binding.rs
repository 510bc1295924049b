use tx_crn::ComplexSpecies;
use tx_crn::Reaction;
use tx_crn::Species;

use crate::Mechanism;
use crate::MechanismError;
use crate::ReactionUpdate;
use crate::SpeciesUpdate;
use crate::check_rate;
use crate::warn_if_untyped;

/// Per-call arguments of the binding family.
///
/// `kb`/`ku` are multi-valued rate parameters: single-step mechanisms
/// require exactly one value each, two-step mechanisms exactly two. The
/// arity is checked by `update_reactions`.
#[derive(Debug, Clone)]
pub struct BindingCall {
    pub binder: Species,
    pub bindee: Species,
    /// Stoichiometric multiplicity of the binder.
    pub cooperativity: u32,
    pub kb: Vec<f64>,
    pub ku: Vec<f64>,
}

impl BindingCall {
    pub fn new(binder: Species, bindee: Species, kb: f64, ku: f64) -> Self {
        BindingCall { binder, bindee, cooperativity: 1, kb: vec![kb], ku: vec![ku] }
    }

    pub fn cooperative(
        binder: Species,
        bindee: Species,
        cooperativity: u32,
        kb: f64,
        ku: f64,
    ) -> Self {
        BindingCall { binder, bindee, cooperativity, kb: vec![kb], ku: vec![ku] }
    }

    pub fn two_step(
        binder: Species,
        bindee: Species,
        cooperativity: u32,
        kb: [f64; 2],
        ku: [f64; 2],
    ) -> Self {
        BindingCall {
            binder,
            bindee,
            cooperativity,
            kb: kb.to_vec(),
            ku: ku.to_vec(),
        }
    }
}

fn rates(param: &'static str, values: &[f64], expected: usize)
    -> Result<(), MechanismError>
{
    if values.len() != expected {
        return Err(MechanismError::RateArity(param, expected, values.len()));
    }
    for &value in values {
        check_rate(param, value)?;
    }
    Ok(())
}

// The plain complex identity only encodes set membership, so cooperative
// complexes and n-mers carry explicit names embedding the multiplicity.
fn cooperative_complex(call: &BindingCall) -> ComplexSpecies {
    let name = format!("{}_{}x{}_{}_{}",
        call.binder.material, call.cooperativity, call.binder.name,
        call.bindee.material, call.bindee.name);
    ComplexSpecies::named(vec![call.binder.clone(), call.bindee.clone()], name)
}

fn n_mer(call: &BindingCall) -> ComplexSpecies {
    let name = format!("{}x_{}_{}",
        call.cooperativity, call.binder.material, call.binder.name);
    ComplexSpecies::named(vec![call.binder.clone()], name)
}

/// S1 + S2 <-> S1:S2, a single reversible step.
#[derive(Debug, Clone)]
pub struct ReversibleBinding {
    name: String,
    mechanism_type: String,
}

impl ReversibleBinding {
    pub fn new() -> Self {
        Self::with_name("reversible_bimolecular_binding", "bimolecular_binding")
    }

    pub fn with_name(name: impl Into<String>, mechanism_type: impl Into<String>) -> Self {
        let name = name.into();
        let mechanism_type = mechanism_type.into();
        warn_if_untyped(&name, &mechanism_type);
        ReversibleBinding { name, mechanism_type }
    }
}

impl Default for ReversibleBinding {
    fn default() -> Self {
        Self::new()
    }
}

impl Mechanism for ReversibleBinding {
    type Call = BindingCall;

    fn name(&self) -> &str {
        &self.name
    }

    fn mechanism_type(&self) -> &str {
        &self.mechanism_type
    }

    fn update_species(&self, call: &BindingCall) -> SpeciesUpdate {
        let complex = ComplexSpecies::new(vec![call.binder.clone(), call.bindee.clone()]);
        SpeciesUpdate::from_species(vec![complex.species()])
    }

    fn update_reactions(&self, call: &BindingCall)
        -> Result<ReactionUpdate, MechanismError>
    {
        rates("kb", &call.kb, 1)?;
        rates("ku", &call.ku, 1)?;
        let complex = ComplexSpecies::new(vec![call.binder.clone(), call.bindee.clone()]);
        let rxn = Reaction::reversible(
            vec![call.binder.clone(), call.bindee.clone()],
            vec![complex.species()],
            call.kb[0],
            call.ku[0],
        )?;
        Ok(ReactionUpdate::from_reactions(vec![rxn]))
    }
}

/// n Binder + Bindee <-> Complex in a single elementary step, with the
/// cooperativity as the binder's input coefficient.
#[derive(Debug, Clone)]
pub struct OneStepCooperativeBinding {
    name: String,
    mechanism_type: String,
}

impl OneStepCooperativeBinding {
    pub fn new() -> Self {
        Self::with_name("one_step_cooperative_binding", "cooperative_binding")
    }

    pub fn with_name(name: impl Into<String>, mechanism_type: impl Into<String>) -> Self {
        let name = name.into();
        let mechanism_type = mechanism_type.into();
        warn_if_untyped(&name, &mechanism_type);
        OneStepCooperativeBinding { name, mechanism_type }
    }
}

impl Default for OneStepCooperativeBinding {
    fn default() -> Self {
        Self::new()
    }
}

impl Mechanism for OneStepCooperativeBinding {
    type Call = BindingCall;

    fn name(&self) -> &str {
        &self.name
    }

    fn mechanism_type(&self) -> &str {
        &self.mechanism_type
    }

    fn update_species(&self, call: &BindingCall) -> SpeciesUpdate {
        SpeciesUpdate::from_species(vec![cooperative_complex(call).species()])
    }

    fn update_reactions(&self, call: &BindingCall)
        -> Result<ReactionUpdate, MechanismError>
    {
        rates("kb", &call.kb, 1)?;
        rates("ku", &call.ku, 1)?;
        let complex = cooperative_complex(call);
        let rxn = Reaction::reversible(
            vec![call.binder.clone(), call.bindee.clone()],
            vec![complex.species()],
            call.kb[0],
            call.ku[0],
        )?
        .with_coefs(vec![call.cooperativity, 1], vec![1])?;
        Ok(ReactionUpdate::from_reactions(vec![rxn]))
    }
}

/// Cooperative binding split into oligomerization and binding:
///
/// n Binder <-> n-mer           (kb\[0\] / ku\[0\])
/// n-mer + Bindee <-> Complex   (kb\[1\] / ku\[1\])
#[derive(Debug, Clone)]
pub struct TwoStepCooperativeBinding {
    name: String,
    mechanism_type: String,
}

impl TwoStepCooperativeBinding {
    pub fn new() -> Self {
        Self::with_name("two_step_cooperative_binding", "cooperative_binding")
    }

    pub fn with_name(name: impl Into<String>, mechanism_type: impl Into<String>) -> Self {
        let name = name.into();
        let mechanism_type = mechanism_type.into();
        warn_if_untyped(&name, &mechanism_type);
        TwoStepCooperativeBinding { name, mechanism_type }
    }
}

impl Default for TwoStepCooperativeBinding {
    fn default() -> Self {
        Self::new()
    }
}

impl Mechanism for TwoStepCooperativeBinding {
    type Call = BindingCall;

    fn name(&self) -> &str {
        &self.name
    }

    fn mechanism_type(&self) -> &str {
        &self.mechanism_type
    }

    fn update_species(&self, call: &BindingCall) -> SpeciesUpdate {
        let n_mer = n_mer(call);
        let complex = ComplexSpecies::new(vec![n_mer.species(), call.bindee.clone()]);
        SpeciesUpdate::from_species(vec![complex.species(), n_mer.species()])
    }

    fn update_reactions(&self, call: &BindingCall)
        -> Result<ReactionUpdate, MechanismError>
    {
        rates("kb", &call.kb, 2)?;
        rates("ku", &call.ku, 2)?;

        let n_mer = n_mer(call);
        let complex = ComplexSpecies::new(vec![n_mer.species(), call.bindee.clone()]);

        let oligomerization = Reaction::reversible(
            vec![call.binder.clone()],
            vec![n_mer.species()],
            call.kb[0],
            call.ku[0],
        )?
        .with_coefs(vec![call.cooperativity], vec![1])?;

        let binding = Reaction::reversible(
            vec![n_mer.species(), call.bindee.clone()],
            vec![complex.species()],
            call.kb[1],
            call.ku[1],
        )?;

        Ok(ReactionUpdate::from_reactions(vec![oligomerization, binding]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tx_crn::Material;

    fn tetr() -> Species {
        Species::new("tetR", Material::Protein)
    }

    fn ptet() -> Species {
        Species::new("Ptet", Material::Dna)
    }

    #[test]
    fn test_reversible_binding() {
        let mech = ReversibleBinding::new();
        assert_eq!(mech.mechanism_type(), "bimolecular_binding");

        let call = BindingCall::new(tetr(), ptet(), 100., 10.);
        let complex = ComplexSpecies::new(vec![tetr(), ptet()]);
        assert_eq!(mech.update_species(&call).species, vec![complex.species()]);

        let rxns = mech.update_reactions(&call).unwrap().reactions;
        assert_eq!(rxns.len(), 1);
        assert_eq!(rxns[0].inputs, vec![tetr(), ptet()]);
        assert_eq!(rxns[0].outputs, vec![complex.species()]);
        assert_eq!(rxns[0].input_coefs, None);
        assert_eq!(rxns[0].k, 100.);
        assert_eq!(rxns[0].k_rev, Some(10.));
    }

    #[test]
    fn test_one_step_cooperative_stoichiometry() {
        let mech = OneStepCooperativeBinding::new();
        let call = BindingCall::cooperative(tetr(), ptet(), 2, 100., 10.);

        let rxns = mech.update_reactions(&call).unwrap().reactions;
        assert_eq!(rxns.len(), 1);
        assert_eq!(rxns[0].input_coefs, Some(vec![2, 1]));
        assert_eq!(rxns[0].output_coefs, Some(vec![1]));
        assert_eq!(rxns[0].outputs[0].name, "protein_2xtetR_dna_Ptet");
    }

    #[test]
    fn test_one_step_names_differ_by_cooperativity() {
        let mech = OneStepCooperativeBinding::new();
        let two = BindingCall::cooperative(tetr(), ptet(), 2, 1., 1.);
        let four = BindingCall::cooperative(tetr(), ptet(), 4, 1., 1.);
        let s2 = mech.update_species(&two).species;
        let s4 = mech.update_species(&four).species;
        assert_ne!(s2, s4);
        assert_eq!(s4[0].name, "protein_4xtetR_dna_Ptet");
    }

    #[test]
    fn test_one_step_mass_balance() {
        let mech = OneStepCooperativeBinding::new();
        let call = BindingCall::cooperative(tetr(), ptet(), 3, 1., 1.);
        let rxn = &mech.update_reactions(&call).unwrap().reactions[0];
        assert_eq!(rxn.expanded_inputs(), vec![tetr(), tetr(), tetr(), ptet()]);
        assert_eq!(rxn.expanded_outputs().len(), 1);
    }

    #[test]
    fn test_reversed_step_swaps_rates() {
        let mech = ReversibleBinding::new();
        let call = BindingCall::new(tetr(), ptet(), 100., 10.);
        let rxn = &mech.update_reactions(&call).unwrap().reactions[0];
        let rev = rxn.reversed().unwrap();
        assert_eq!(rev.inputs, rxn.outputs);
        assert_eq!(rev.k, 10.);
        assert_eq!(rev.reversed().unwrap(), *rxn);
    }

    #[test]
    fn test_two_step_reactions() {
        let mech = TwoStepCooperativeBinding::new();
        let call = BindingCall::two_step(tetr(), ptet(), 2, [8., 80.], [4., 40.]);

        let species = mech.update_species(&call).species;
        assert_eq!(species.len(), 2);
        let n_mer = &species[1];
        assert_eq!(n_mer.name, "2x_protein_tetR");
        assert_eq!(n_mer.material, Material::Complex);

        let rxns = mech.update_reactions(&call).unwrap().reactions;
        assert_eq!(rxns.len(), 2);

        let oligo = &rxns[0];
        assert_eq!(oligo.inputs, vec![tetr()]);
        assert_eq!(oligo.input_coefs, Some(vec![2]));
        assert_eq!(oligo.outputs, vec![n_mer.clone()]);
        assert_eq!(oligo.k, 8.);
        assert_eq!(oligo.k_rev, Some(4.));

        let binding = &rxns[1];
        assert_eq!(binding.inputs, vec![n_mer.clone(), ptet()]);
        assert_eq!(binding.outputs, vec![species[0].clone()]);
        assert_eq!(binding.k, 80.);
        assert_eq!(binding.k_rev, Some(40.));
    }

    #[test]
    fn test_two_step_n_mer_identity_converges() {
        let mech = TwoStepCooperativeBinding::new();
        let c1 = BindingCall::two_step(tetr(), ptet(), 2, [1., 1.], [1., 1.]);
        let c2 = BindingCall::two_step(tetr(), Species::new("Plac", Material::Dna),
            2, [1., 1.], [1., 1.]);
        assert_eq!(mech.update_species(&c1).species[1],
                   mech.update_species(&c2).species[1]);
    }

    #[test]
    fn test_two_step_rate_arity() {
        let mech = TwoStepCooperativeBinding::new();
        for bad in [vec![], vec![1.], vec![1., 1., 1.]] {
            let mut call = BindingCall::two_step(tetr(), ptet(), 2, [1., 1.], [1., 1.]);
            call.kb = bad.clone();
            let res = mech.update_reactions(&call);
            assert!(matches!(res,
                Err(MechanismError::RateArity("kb", 2, got)) if got == bad.len()));

            let mut call = BindingCall::two_step(tetr(), ptet(), 2, [1., 1.], [1., 1.]);
            call.ku = bad.clone();
            let res = mech.update_reactions(&call);
            assert!(matches!(res,
                Err(MechanismError::RateArity("ku", 2, got)) if got == bad.len()));
        }
    }

    #[test]
    fn test_one_step_rejects_two_rates() {
        let mech = OneStepCooperativeBinding::new();
        let call = BindingCall::two_step(tetr(), ptet(), 2, [1., 1.], [1., 1.]);
        let res = mech.update_reactions(&call);
        assert!(matches!(res, Err(MechanismError::RateArity("kb", 1, 2))));
    }
}
