use std::sync::Arc;

use ahash::AHashMap;
use log::warn;
use colored::*;

use crate::Mechanism;

/// Priority-ordered mechanism lookup, one map per composition level.
///
/// The policy of which levels exist (extract defaults, mixture, component,
/// sub-component) lives outside this crate; this type only implements the
/// merge rule: later layers override earlier ones per mechanism_type key.
pub struct MechanismMap<C> {
    layers: Vec<AHashMap<String, Arc<dyn Mechanism<Call = C>>>>,
}

impl<C> MechanismMap<C> {
    pub fn new() -> Self {
        MechanismMap { layers: vec![AHashMap::new()] }
    }

    /// Start a new layer that overrides everything registered so far.
    pub fn overlay(&mut self) {
        self.layers.push(AHashMap::new());
    }

    /// Register a mechanism in the top layer under its own mechanism_type.
    pub fn register(&mut self, mechanism: Arc<dyn Mechanism<Call = C>>) {
        let key = mechanism.mechanism_type().to_string();
        if key.is_empty() {
            warn!("{} Mechanism '{}' has no type and cannot be resolved.",
                "WARNING:".red(), mechanism.name());
        }
        self.register_as(&key, mechanism);
    }

    /// Register under an explicit key, e.g. to substitute a mechanism for a
    /// type it was not named after.
    pub fn register_as(&mut self, key: &str, mechanism: Arc<dyn Mechanism<Call = C>>) {
        if !key.is_empty() && key != mechanism.mechanism_type() {
            warn!("{} Mechanism '{}' registered as '{}' but declares type '{}'.",
                "WARNING:".red(), mechanism.name(), key, mechanism.mechanism_type());
        }
        // unwrap: layers is never empty.
        self.layers.last_mut().unwrap().insert(key.to_string(), mechanism);
    }

    /// Highest-priority mechanism registered for this type, if any.
    pub fn resolve(&self, mechanism_type: &str) -> Option<&Arc<dyn Mechanism<Call = C>>> {
        self.layers.iter().rev().find_map(|layer| layer.get(mechanism_type))
    }

    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(|layer| layer.is_empty())
    }
}

impl<C> Default for MechanismMap<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BindingCall;
    use crate::OneStepCooperativeBinding;
    use crate::ReversibleBinding;
    use crate::TwoStepCooperativeBinding;

    #[test]
    fn test_resolve_registered_type() {
        let mut map: MechanismMap<BindingCall> = MechanismMap::new();
        map.register(Arc::new(ReversibleBinding::new()));
        let mech = map.resolve("bimolecular_binding").unwrap();
        assert_eq!(mech.name(), "reversible_bimolecular_binding");
        assert!(map.resolve("transcription").is_none());
    }

    #[test]
    fn test_overlay_wins() {
        let mut map: MechanismMap<BindingCall> = MechanismMap::new();
        map.register(Arc::new(OneStepCooperativeBinding::new()));
        map.overlay();
        map.register(Arc::new(TwoStepCooperativeBinding::new()));

        let mech = map.resolve("cooperative_binding").unwrap();
        assert_eq!(mech.name(), "two_step_cooperative_binding");
    }

    #[test]
    fn test_lower_layer_still_visible() {
        let mut map: MechanismMap<BindingCall> = MechanismMap::new();
        map.register(Arc::new(ReversibleBinding::new()));
        map.overlay();
        map.register(Arc::new(TwoStepCooperativeBinding::new()));

        assert!(map.resolve("bimolecular_binding").is_some());
        assert!(!map.is_empty());
    }

    #[test]
    fn test_catalytic_map() {
        use tx_crn::{Material, Species};
        use crate::{CatalysisCall, transcription_mm, translation_mm};

        let mut map: MechanismMap<CatalysisCall> = MechanismMap::new();
        map.register(Arc::new(transcription_mm("RNAP".into()).unwrap()));
        map.register(Arc::new(translation_mm("Ribo".into()).unwrap()));

        let mech = map.resolve("transcription").unwrap();
        let call = CatalysisCall::new(
            Species::new("geneA", Material::Dna),
            crate::CatalyticRates::new(100., 10., 1.));
        assert_eq!(mech.update_reactions(&call).unwrap().reactions.len(), 2);
    }

    #[test]
    fn test_register_as_other_key() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut map: MechanismMap<BindingCall> = MechanismMap::new();
        map.register_as("cooperative_binding", Arc::new(ReversibleBinding::new()));
        let mech = map.resolve("cooperative_binding").unwrap();
        assert_eq!(mech.mechanism_type(), "bimolecular_binding");
    }
}
