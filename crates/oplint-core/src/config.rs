use serde::{Deserialize, Serialize};

use crate::model::OperatorFamily;

/// Per-family on/off switches. Every family is enabled unless turned off.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FamilyConfig {
    #[serde(default = "enabled")]
    pub arithmetic: bool,
    #[serde(default = "enabled")]
    pub indexed_access: bool,
    #[serde(default = "enabled")]
    pub containment: bool,
    #[serde(default = "enabled")]
    pub invocation: bool,
    #[serde(default = "enabled")]
    pub unary_prefix: bool,
    #[serde(default = "enabled")]
    pub unary_postfix: bool,
}

fn enabled() -> bool {
    true
}

impl Default for FamilyConfig {
    fn default() -> Self {
        Self::all_enabled()
    }
}

impl FamilyConfig {
    pub fn all_enabled() -> Self {
        Self {
            arithmetic: true,
            indexed_access: true,
            containment: true,
            invocation: true,
            unary_prefix: true,
            unary_postfix: true,
        }
    }

    pub fn all_disabled() -> Self {
        Self {
            arithmetic: false,
            indexed_access: false,
            containment: false,
            invocation: false,
            unary_prefix: false,
            unary_postfix: false,
        }
    }

    fn slot(&mut self, family: OperatorFamily) -> &mut bool {
        match family {
            OperatorFamily::Arithmetic => &mut self.arithmetic,
            OperatorFamily::IndexedAccess => &mut self.indexed_access,
            OperatorFamily::Containment => &mut self.containment,
            OperatorFamily::Invocation => &mut self.invocation,
            OperatorFamily::UnaryPrefix => &mut self.unary_prefix,
            OperatorFamily::UnaryPostfix => &mut self.unary_postfix,
        }
    }

    pub fn is_enabled(&self, family: OperatorFamily) -> bool {
        match family {
            OperatorFamily::Arithmetic => self.arithmetic,
            OperatorFamily::IndexedAccess => self.indexed_access,
            OperatorFamily::Containment => self.containment,
            OperatorFamily::Invocation => self.invocation,
            OperatorFamily::UnaryPrefix => self.unary_prefix,
            OperatorFamily::UnaryPostfix => self.unary_postfix,
        }
    }

    pub fn set(&mut self, family: OperatorFamily, on: bool) {
        *self.slot(family) = on;
    }

    pub fn enable(mut self, family: OperatorFamily) -> Self {
        self.set(family, true);
        self
    }

    pub fn disable(mut self, family: OperatorFamily) -> Self {
        self.set(family, false);
        self
    }

    pub fn enabled_families(&self) -> impl Iterator<Item = OperatorFamily> + '_ {
        OperatorFamily::ALL.into_iter().filter(|f| self.is_enabled(*f))
    }
}
