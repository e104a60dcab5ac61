//! Symbol environment carried through normalization, solving and evaluation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_SYMBOL: &str = "x";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// The single free variable of an expression.
    pub symbol: String,
    /// Named constants that may appear alongside the variable.
    pub constants: BTreeMap<String, f64>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::with_symbol(DEFAULT_SYMBOL)
    }
}

impl Environment {
    pub fn with_symbol(symbol: impl Into<String>) -> Self {
        let mut constants = BTreeMap::new();
        constants.insert("pi".to_string(), std::f64::consts::PI);
        constants.insert("e".to_string(), std::f64::consts::E);
        Self {
            symbol: symbol.into(),
            constants,
        }
    }

    pub fn is_known(&self, name: &str) -> bool {
        name == self.symbol || self.constants.contains_key(name)
    }

    /// Bindings for evaluating at `value`. The variable shadows a constant of the same name.
    pub fn bind(&self, value: f64) -> Bindings<'_> {
        Bindings { env: self, value }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Bindings<'a> {
    env: &'a Environment,
    value: f64,
}

impl Bindings<'_> {
    pub fn symbol(&self) -> &str {
        &self.env.symbol
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn lookup(&self, name: &str) -> Option<f64> {
        if name == self.env.symbol {
            Some(self.value)
        } else {
            self.env.constants.get(name).copied()
        }
    }
}
