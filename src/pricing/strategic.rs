use crate::core::transaction::Transaction;
use crate::tables::behavioural::{BehaviouralKind, BehaviouralRegistry};
use crate::tables::StrategicParameters;
use log::warn;
use rust_decimal::Decimal;

/// Strategic spread from the transaction's behavioural model, percent.
///
/// Prepayment models add `cpr × cpr_coefficient`; NMD replication models
/// subtract `core_ratio/100 × core_deposit_coefficient`. No model reference,
/// or a reference missing from the registry, gives zero.
pub fn resolve(
    deal: &Transaction,
    registry: &BehaviouralRegistry,
    params: &StrategicParameters,
) -> Decimal {
    let Some(model_id) = deal.behavioural_model_id.as_deref() else {
        return Decimal::ZERO;
    };
    if model_id.is_empty() {
        return Decimal::ZERO;
    }

    let Some(model) = registry.get(model_id) else {
        warn!(
            "deal {}: behavioural model '{}' not in registry, strategic spread set to 0",
            deal.id, model_id
        );
        return Decimal::ZERO;
    };

    match &model.kind {
        BehaviouralKind::Prepayment { cpr } => *cpr * params.cpr_coefficient,
        BehaviouralKind::NmdReplication { core_ratio } => {
            -(*core_ratio / Decimal::ONE_HUNDRED) * params.core_deposit_coefficient
        }
    }
}
