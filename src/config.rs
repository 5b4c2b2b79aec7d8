use crate::validator::IbanValidator;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;
use std::collections::BTreeMap;
use strum::{Display, EnumIter};

/// How the rearranged account number is walked. Both variants return the same verdict.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter,
)]
#[serde(tag = "type")]
pub enum Mod97Variant {
    /// Builds the rearranged string and its decimal expansion, then folds it
    Materialized,
    /// Walks the normalized input with a wrapping index, no intermediate copy
    #[default]
    Streaming,
}

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct IbanValidatorConfig {
    #[serde(default)]
    pub variant: Mod97Variant,

    /// Extra labels attached to every metric emitted by the validator
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

impl IbanValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(&self, variant: Mod97Variant) -> Self {
        self.mutate_clone(|x| x.variant = variant)
    }

    pub fn labels(&self, labels: BTreeMap<String, String>) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    pub fn build(&self) -> IbanValidator {
        IbanValidator::new(self)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
