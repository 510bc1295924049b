use std::fmt;

use serde::{Serialize, Deserialize};

use crate::CrnError;
use crate::Species;

/// One elementary reaction step.
///
/// Inputs and outputs are ordered species lists with implicit coefficient 1;
/// explicit coefficients, when present, must match the species list lengths.
/// A reverse rate makes the step reversible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    pub inputs: Vec<Species>,
    pub outputs: Vec<Species>,
    pub input_coefs: Option<Vec<u32>>,
    pub output_coefs: Option<Vec<u32>>,
    pub k: f64,
    pub k_rev: Option<f64>,
}

fn check_rate(param: &'static str, value: f64) -> Result<(), CrnError> {
    if !value.is_finite() || value < 0. {
        return Err(CrnError::InvalidRate(param, value));
    }
    Ok(())
}

impl Reaction {
    pub fn new(inputs: Vec<Species>, outputs: Vec<Species>, k: f64)
        -> Result<Self, CrnError>
    {
        check_rate("k", k)?;
        Ok(Reaction {
            inputs,
            outputs,
            input_coefs: None,
            output_coefs: None,
            k,
            k_rev: None,
        })
    }

    pub fn reversible(inputs: Vec<Species>, outputs: Vec<Species>, k: f64, k_rev: f64)
        -> Result<Self, CrnError>
    {
        check_rate("k_rev", k_rev)?;
        let mut rxn = Reaction::new(inputs, outputs, k)?;
        rxn.k_rev = Some(k_rev);
        Ok(rxn)
    }

    pub fn with_coefs(mut self, input_coefs: Vec<u32>, output_coefs: Vec<u32>)
        -> Result<Self, CrnError>
    {
        if input_coefs.len() != self.inputs.len() {
            return Err(CrnError::CoefficientMismatch(
                "input", input_coefs.len(), self.inputs.len()));
        }
        if output_coefs.len() != self.outputs.len() {
            return Err(CrnError::CoefficientMismatch(
                "output", output_coefs.len(), self.outputs.len()));
        }
        self.input_coefs = Some(input_coefs);
        self.output_coefs = Some(output_coefs);
        Ok(self)
    }

    pub fn is_reversible(&self) -> bool {
        self.k_rev.is_some()
    }

    /// The reverse step, with forward and reverse rates swapped. None for an
    /// irreversible reaction.
    pub fn reversed(&self) -> Option<Reaction> {
        let k_rev = self.k_rev?;
        Some(Reaction {
            inputs: self.outputs.clone(),
            outputs: self.inputs.clone(),
            input_coefs: self.output_coefs.clone(),
            output_coefs: self.input_coefs.clone(),
            k: k_rev,
            k_rev: Some(self.k),
        })
    }

    /// Input species repeated by their stoichiometric coefficients.
    pub fn expanded_inputs(&self) -> Vec<Species> {
        expand(&self.inputs, self.input_coefs.as_deref())
    }

    /// Output species repeated by their stoichiometric coefficients.
    pub fn expanded_outputs(&self) -> Vec<Species> {
        expand(&self.outputs, self.output_coefs.as_deref())
    }
}

fn expand(species: &[Species], coefs: Option<&[u32]>) -> Vec<Species> {
    let mut result = Vec::new();
    for (i, s) in species.iter().enumerate() {
        let n = coefs.map_or(1, |c| c[i]);
        for _ in 0..n {
            result.push(s.clone());
        }
    }
    result
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = |species: &[Species], coefs: Option<&Vec<u32>>| {
            species.iter().enumerate().map(|(i, s)| {
                match coefs.and_then(|c| c.get(i)) {
                    Some(&n) if n != 1 => format!("{} {}", n, s),
                    _ => format!("{}", s),
                }
            }).collect::<Vec<_>>().join(" + ")
        };
        let arrow = if self.is_reversible() { "<->" } else { "->" };
        write!(f, "{} {} {}",
            side(&self.inputs, self.input_coefs.as_ref()),
            arrow,
            side(&self.outputs, self.output_coefs.as_ref()))?;
        match self.k_rev {
            Some(k_rev) => write!(f, " (k={}, k_rev={})", self.k, k_rev),
            None => write!(f, " (k={})", self.k),
        }
    }
}
