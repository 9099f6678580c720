use crate::core::transaction::{PhysicalRisk, TransitionRisk};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Climate-risk spread grids, in bps.
///
/// Negative entries are incentives (green lending), positive entries are
/// penalties. A classification absent from a grid resolves to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EsgGrid {
    pub transition: HashMap<TransitionRisk, Decimal>,
    pub physical: HashMap<PhysicalRisk, Decimal>,
}

impl EsgGrid {
    /// Grid with no adjustments at all.
    pub fn empty() -> Self {
        Self {
            transition: HashMap::new(),
            physical: HashMap::new(),
        }
    }

    pub fn transition_bps(&self, classification: TransitionRisk) -> Decimal {
        self.transition
            .get(&classification)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    pub fn physical_bps(&self, level: PhysicalRisk) -> Decimal {
        self.physical.get(&level).copied().unwrap_or(Decimal::ZERO)
    }
}

impl Default for EsgGrid {
    fn default() -> Self {
        let transition = HashMap::from([
            (TransitionRisk::Green, dec!(-10)),
            (TransitionRisk::Neutral, dec!(0)),
            (TransitionRisk::Amber, dec!(5)),
            (TransitionRisk::Brown, dec!(15)),
        ]);
        let physical = HashMap::from([
            (PhysicalRisk::Low, dec!(0)),
            (PhysicalRisk::Medium, dec!(5)),
            (PhysicalRisk::High, dec!(12)),
        ]);
        Self {
            transition,
            physical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid() {
        let grid = EsgGrid::default();
        assert_eq!(grid.transition_bps(TransitionRisk::Green), dec!(-10));
        assert_eq!(grid.transition_bps(TransitionRisk::Neutral), Decimal::ZERO);
        assert_eq!(grid.transition_bps(TransitionRisk::Brown), dec!(15));
        assert_eq!(grid.physical_bps(PhysicalRisk::High), dec!(12));
    }

    #[test]
    fn test_missing_classification_is_zero() {
        let grid = EsgGrid::empty();
        assert_eq!(grid.transition_bps(TransitionRisk::Brown), Decimal::ZERO);
        assert_eq!(grid.physical_bps(PhysicalRisk::Medium), Decimal::ZERO);
    }

    #[test]
    fn test_partial_grid_from_json() {
        let grid: EsgGrid =
            serde_json::from_str(r#"{ "transition": { "Brown": 25 } }"#).unwrap();
        assert_eq!(grid.transition_bps(TransitionRisk::Brown), dec!(25));
        assert_eq!(grid.transition_bps(TransitionRisk::Green), Decimal::ZERO);
        // `default` on the container fills the missing grid from the defaults
        assert_eq!(grid.physical_bps(PhysicalRisk::High), dec!(12));
    }
}
