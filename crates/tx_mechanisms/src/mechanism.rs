use log::warn;
use colored::*;

use tx_crn::Reaction;
use tx_crn::Species;

use crate::MechanismError;

/// Record left behind when a mechanism falls through to the default stub,
/// i.e. a rule that was registered but never given an implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub mechanism: String,
    pub method: &'static str,
}

/// Species a mechanism requires to exist in the network, plus an optional
/// diagnostic when the rule is unimplemented.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesUpdate {
    pub species: Vec<Species>,
    pub diagnostic: Option<Diagnostic>,
}

impl SpeciesUpdate {
    pub fn from_species(species: Vec<Species>) -> Self {
        SpeciesUpdate { species, diagnostic: None }
    }

    pub fn unimplemented(mechanism: &str, method: &'static str) -> Self {
        SpeciesUpdate {
            species: Vec::new(),
            diagnostic: Some(Diagnostic { mechanism: mechanism.into(), method }),
        }
    }

    pub fn is_unimplemented(&self) -> bool {
        self.diagnostic.is_some()
    }
}

/// Reactions a mechanism contributes, plus an optional diagnostic when the
/// rule is unimplemented.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionUpdate {
    pub reactions: Vec<Reaction>,
    pub diagnostic: Option<Diagnostic>,
}

impl ReactionUpdate {
    pub fn from_reactions(reactions: Vec<Reaction>) -> Self {
        ReactionUpdate { reactions, diagnostic: None }
    }

    pub fn unimplemented(mechanism: &str, method: &'static str) -> Self {
        ReactionUpdate {
            reactions: Vec::new(),
            diagnostic: Some(Diagnostic { mechanism: mechanism.into(), method }),
        }
    }

    pub fn is_unimplemented(&self) -> bool {
        self.diagnostic.is_some()
    }
}

/// A reusable rule translating one biological event into species and
/// reactions.
///
/// Implementations are pure functions of the call arguments plus whatever
/// identity was bound at construction (a catalyst species, a mode). They
/// hold no per-call state, so one instance may serve any number of callers
/// in parallel.
///
/// The default method bodies are the visible-failure stubs: a mechanism
/// that never overrides them logs a warning and returns an empty update
/// carrying a [`Diagnostic`], rather than silently producing an incomplete
/// network.
pub trait Mechanism {
    /// Per-call arguments: substrates, rate constants, flags.
    type Call;

    fn name(&self) -> &str;

    /// Category key the override-resolution layer matches on. Never empty
    /// in production use.
    fn mechanism_type(&self) -> &str;

    fn update_species(&self, _call: &Self::Call) -> SpeciesUpdate {
        warn!("{} Default update_species called for mechanism '{}'.",
            "WARNING:".red(), self.name());
        SpeciesUpdate::unimplemented(self.name(), "update_species")
    }

    fn update_reactions(&self, _call: &Self::Call)
        -> Result<ReactionUpdate, MechanismError>
    {
        warn!("{} Default update_reactions called for mechanism '{}'.",
            "WARNING:".red(), self.name());
        Ok(ReactionUpdate::unimplemented(self.name(), "update_reactions"))
    }
}

// Every concrete mechanism constructor funnels through this check.
pub(crate) fn warn_if_untyped(name: &str, mechanism_type: &str) {
    if mechanism_type.is_empty() {
        warn!("{} Mechanism '{}' instantiated without a type. It cannot be \
            matched by mechanism resolution.", "WARNING:".red(), name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubMechanism;

    impl Mechanism for StubMechanism {
        type Call = ();

        fn name(&self) -> &str {
            "stub"
        }

        fn mechanism_type(&self) -> &str {
            "stubbing"
        }
    }

    #[test]
    fn test_default_update_species_is_diagnosable() {
        let _ = env_logger::builder().is_test(true).try_init();
        let update = StubMechanism.update_species(&());
        assert!(update.is_unimplemented());
        assert!(update.species.is_empty());
        let diag = update.diagnostic.unwrap();
        assert_eq!(diag.mechanism, "stub");
        assert_eq!(diag.method, "update_species");
    }

    #[test]
    fn test_default_update_reactions_is_diagnosable() {
        let _ = env_logger::builder().is_test(true).try_init();
        let update = StubMechanism.update_reactions(&()).unwrap();
        assert!(update.is_unimplemented());
        assert!(update.reactions.is_empty());
        assert_eq!(update.diagnostic.unwrap().method, "update_reactions");
    }
}
