use crate::tables::TableError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// A tenor bucket of the basis-spread table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasisBucket {
    /// Display label, e.g. `1M`.
    pub tenor: String,
    /// Inclusive upper bound of the bucket, in months; `None` is open-ended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_months: Option<u32>,
    pub spread_bps: Decimal,
}

impl BasisBucket {
    pub fn new(tenor: impl Into<String>, max_months: u32, spread_bps: Decimal) -> Self {
        Self {
            tenor: tenor.into(),
            max_months: Some(max_months),
            spread_bps,
        }
    }

    /// A bucket covering every tenor above the previous bucket.
    pub fn open_ended(tenor: impl Into<String>, spread_bps: Decimal) -> Self {
        Self {
            tenor: tenor.into(),
            max_months: None,
            spread_bps,
        }
    }

    pub fn covers(&self, duration_months: u32) -> bool {
        self.max_months.map_or(true, |max| duration_months <= max)
    }

    fn upper_bound(&self) -> u64 {
        self.max_months.map_or(u64::MAX, u64::from)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBasisSpreadTable {
    buckets: Vec<BasisBucket>,
    fallback_bps: Decimal,
}

/// Funding basis spreads by tenor bucket, used to price the liquidity buffer.
///
/// A duration falls into the first bucket whose upper bound it does not
/// exceed. The standard table is short (≤ 1 month) versus longer, the longer
/// bucket being open-ended; `fallback_bps` only applies to tables whose
/// buckets leave a tenor uncovered.
///
/// # Examples
///
/// ```
/// use ftp_engine::tables::basis::BasisSpreadTable;
/// use rust_decimal_macros::dec;
///
/// let table = BasisSpreadTable::default();
/// assert_eq!(table.spread_bps(1), dec!(5));
/// assert_eq!(table.spread_bps(24), dec!(15));
/// assert_eq!(table.spread_bps(240), dec!(15));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawBasisSpreadTable")]
pub struct BasisSpreadTable {
    buckets: Vec<BasisBucket>,
    fallback_bps: Decimal,
}

impl BasisSpreadTable {
    pub fn new(buckets: Vec<BasisBucket>, fallback_bps: Decimal) -> Result<Self, TableError> {
        for pair in buckets.windows(2) {
            if pair[1].upper_bound() <= pair[0].upper_bound() {
                return Err(TableError::UnsortedBasisBuckets {
                    previous: pair[0].tenor.clone(),
                    next: pair[1].tenor.clone(),
                });
            }
        }
        Ok(Self {
            buckets,
            fallback_bps,
        })
    }

    pub fn buckets(&self) -> &[BasisBucket] {
        &self.buckets
    }

    pub fn fallback_bps(&self) -> Decimal {
        self.fallback_bps
    }

    /// Bucket covering `duration_months`, if any.
    pub fn bucket_for(&self, duration_months: u32) -> Option<&BasisBucket> {
        self.buckets
            .iter()
            .find(|b| b.covers(duration_months))
    }

    /// Basis spread in bps for `duration_months`, falling back when no bucket
    /// matches.
    pub fn spread_bps(&self, duration_months: u32) -> Decimal {
        self.bucket_for(duration_months)
            .map(|b| b.spread_bps)
            .unwrap_or(self.fallback_bps)
    }
}

impl Default for BasisSpreadTable {
    fn default() -> Self {
        Self {
            buckets: vec![
                BasisBucket::new("1M", 1, dec!(5)),
                BasisBucket::open_ended("LONG", dec!(15)),
            ],
            fallback_bps: dec!(20),
        }
    }
}

impl TryFrom<RawBasisSpreadTable> for BasisSpreadTable {
    type Error = TableError;

    fn try_from(raw: RawBasisSpreadTable) -> Result<Self, Self::Error> {
        Self::new(raw.buckets, raw.fallback_bps)
    }
}
