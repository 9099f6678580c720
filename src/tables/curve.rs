use crate::tables::TableError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One point of a tenor curve: value in bps at a tenor in months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveKnot {
    pub months: Decimal,
    pub value_bps: Decimal,
}

impl CurveKnot {
    pub fn new(months: Decimal, value_bps: Decimal) -> Self {
        Self { months, value_bps }
    }
}

/// Piecewise-linear lookup over `knots`, sorted by tenor.
///
/// Queries at or below the first tenor return the first value, queries at or
/// above the last tenor return the last value (flat extrapolation). In
/// between, the first knot whose tenor is `>= months` and its predecessor
/// bracket the query. An empty curve resolves to zero.
///
/// # Examples
///
/// ```
/// use ftp_engine::tables::curve::{interpolate, CurveKnot};
/// use rust_decimal_macros::dec;
///
/// let knots = [
///     CurveKnot::new(dec!(12), dec!(20)),
///     CurveKnot::new(dec!(24), dec!(40)),
/// ];
/// assert_eq!(interpolate(&knots, dec!(6)), dec!(20));
/// assert_eq!(interpolate(&knots, dec!(18)), dec!(30));
/// assert_eq!(interpolate(&knots, dec!(60)), dec!(40));
/// ```
pub fn interpolate(knots: &[CurveKnot], months: Decimal) -> Decimal {
    let (first, last) = match (knots.first(), knots.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Decimal::ZERO,
    };

    if months <= first.months {
        return first.value_bps;
    }
    if months >= last.months {
        return last.value_bps;
    }

    let idx = match knots.iter().position(|k| k.months >= months) {
        Some(idx) if idx > 0 => idx,
        _ => return last.value_bps,
    };
    let lower = &knots[idx - 1];
    let upper = &knots[idx];

    if upper.months == months {
        return upper.value_bps;
    }
    let span = upper.months - lower.months;
    if span.is_zero() {
        return upper.value_bps;
    }

    let ratio = (months - lower.months) / span;
    lower.value_bps + ratio * (upper.value_bps - lower.value_bps)
}

/// Liquidity premium curve by tenor, in bps.
///
/// Knots must be strictly increasing by tenor; construction and
/// deserialization both enforce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CurveKnot>", into = "Vec<CurveKnot>")]
pub struct LiquidityCurve {
    knots: Vec<CurveKnot>,
}

impl LiquidityCurve {
    pub fn new(knots: Vec<CurveKnot>) -> Result<Self, TableError> {
        for pair in knots.windows(2) {
            if pair[1].months <= pair[0].months {
                return Err(TableError::UnsortedCurve {
                    previous: pair[0].months,
                    next: pair[1].months,
                });
            }
        }
        Ok(Self { knots })
    }

    pub fn knots(&self) -> &[CurveKnot] {
        &self.knots
    }

    /// Curve value at `months`, in bps.
    pub fn value_bps(&self, months: Decimal) -> Decimal {
        interpolate(&self.knots, months)
    }

    /// Curve value at `months`, in percent.
    pub fn value_pct(&self, months: Decimal) -> Decimal {
        self.value_bps(months) / Decimal::ONE_HUNDRED
    }
}

impl Default for LiquidityCurve {
    fn default() -> Self {
        let knots = [
            (dec!(1), dec!(5)),
            (dec!(3), dec!(10)),
            (dec!(6), dec!(15)),
            (dec!(12), dec!(25)),
            (dec!(24), dec!(40)),
            (dec!(36), dec!(50)),
            (dec!(60), dec!(65)),
            (dec!(120), dec!(80)),
        ];
        Self {
            knots: knots
                .iter()
                .map(|&(months, bps)| CurveKnot::new(months, bps))
                .collect(),
        }
    }
}

impl TryFrom<Vec<CurveKnot>> for LiquidityCurve {
    type Error = TableError;

    fn try_from(knots: Vec<CurveKnot>) -> Result<Self, Self::Error> {
        Self::new(knots)
    }
}

impl From<LiquidityCurve> for Vec<CurveKnot> {
    fn from(curve: LiquidityCurve) -> Self {
        curve.knots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knots() -> Vec<CurveKnot> {
        vec![
            CurveKnot::new(dec!(3), dec!(10)),
            CurveKnot::new(dec!(12), dec!(25)),
            CurveKnot::new(dec!(36), dec!(55)),
        ]
    }

    #[test]
    fn test_empty_curve_is_zero() {
        assert_eq!(interpolate(&[], dec!(12)), Decimal::ZERO);
    }

    #[test]
    fn test_flat_extrapolation() {
        let k = knots();
        assert_eq!(interpolate(&k, dec!(0)), dec!(10));
        assert_eq!(interpolate(&k, dec!(3)), dec!(10));
        assert_eq!(interpolate(&k, dec!(36)), dec!(55));
        assert_eq!(interpolate(&k, dec!(480)), dec!(55));
    }

    #[test]
    fn test_exact_at_knots() {
        let k = knots();
        for knot in &k {
            assert_eq!(interpolate(&k, knot.months), knot.value_bps);
        }
    }

    #[test]
    fn test_linear_between_knots() {
        let k = knots();
        // 24m sits halfway between 12m (25) and 36m (55)
        assert_eq!(interpolate(&k, dec!(24)), dec!(40));
        // 7.5m is halfway from 3m (10) to 12m (25)
        assert_eq!(interpolate(&k, dec!(7.5)), dec!(17.5));
    }

    #[test]
    fn test_single_knot_curve() {
        let k = [CurveKnot::new(dec!(12), dec!(25))];
        assert_eq!(interpolate(&k, dec!(1)), dec!(25));
        assert_eq!(interpolate(&k, dec!(100)), dec!(25));
    }

    #[test]
    fn test_default_curve_one_year_point() {
        let curve = LiquidityCurve::default();
        assert_eq!(curve.value_bps(dec!(12)), dec!(25));
        assert_eq!(curve.value_pct(dec!(12)), dec!(0.25));
    }

    #[test]
    fn test_unsorted_curve_rejected() {
        let result = LiquidityCurve::new(vec![
            CurveKnot::new(dec!(12), dec!(25)),
            CurveKnot::new(dec!(12), dec!(30)),
        ]);
        assert!(matches!(result, Err(TableError::UnsortedCurve { .. })));
    }

    #[test]
    fn test_curve_json_validates() {
        let ok: LiquidityCurve =
            serde_json::from_str(r#"[{"months": 1, "valueBps": 5}, {"months": 12, "valueBps": 25}]"#)
                .unwrap();
        assert_eq!(ok.knots().len(), 2);

        let bad: Result<LiquidityCurve, _> =
            serde_json::from_str(r#"[{"months": 12, "valueBps": 25}, {"months": 1, "valueBps": 5}]"#);
        assert!(bad.is_err());
    }
}
