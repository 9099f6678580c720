use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Behavioural assumption attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BehaviouralKind {
    /// Loan prepayment at a constant prepayment rate (CPR, percent per year).
    #[serde(rename_all = "camelCase")]
    Prepayment { cpr: Decimal },
    /// Non-maturity deposit replication; `core_ratio` is the stable share, percent.
    #[serde(rename_all = "camelCase")]
    NmdReplication { core_ratio: Decimal },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviouralModel {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub kind: BehaviouralKind,
}

impl BehaviouralModel {
    pub fn prepayment(id: impl Into<String>, name: impl Into<String>, cpr: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: BehaviouralKind::Prepayment { cpr },
        }
    }

    pub fn nmd_replication(
        id: impl Into<String>,
        name: impl Into<String>,
        core_ratio: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: BehaviouralKind::NmdReplication { core_ratio },
        }
    }
}

/// Registry of behavioural models keyed by id.
///
/// Serialized as a plain list of models; a later entry with a repeated id
/// replaces the earlier one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<BehaviouralModel>", into = "Vec<BehaviouralModel>")]
pub struct BehaviouralRegistry {
    models: BTreeMap<String, BehaviouralModel>,
}

impl BehaviouralRegistry {
    pub fn new() -> Self {
        Self {
            models: BTreeMap::new(),
        }
    }

    pub fn with_model(mut self, model: BehaviouralModel) -> Self {
        self.models.insert(model.id.clone(), model);
        self
    }

    pub fn get(&self, id: &str) -> Option<&BehaviouralModel> {
        self.models.get(id)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn models(&self) -> impl Iterator<Item = &BehaviouralModel> {
        self.models.values()
    }
}

impl Default for BehaviouralRegistry {
    fn default() -> Self {
        Self::new()
            .with_model(BehaviouralModel::prepayment(
                "PREPAY-MORT-STD",
                "Standard mortgage prepayment",
                dec!(8),
            ))
            .with_model(BehaviouralModel::nmd_replication(
                "NMD-CASA-CORE",
                "Retail current accounts",
                dec!(70),
            ))
    }
}

impl From<Vec<BehaviouralModel>> for BehaviouralRegistry {
    fn from(models: Vec<BehaviouralModel>) -> Self {
        models
            .into_iter()
            .fold(Self::new(), |registry, model| registry.with_model(model))
    }
}

impl From<BehaviouralRegistry> for Vec<BehaviouralModel> {
    fn from(registry: BehaviouralRegistry) -> Self {
        registry.models.into_values().collect()
    }
}
