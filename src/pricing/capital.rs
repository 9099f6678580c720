use crate::core::shocks::PricingShocks;
use crate::core::transaction::Transaction;
use crate::pricing::esg::EsgCharges;
use crate::pricing::liquidity::LiquidityCost;
use crate::pricing::regulatory::RegulatoryCost;
use crate::pricing::shock::{self, ShockedFunding};
use crate::tables::RateTables;
use rust_decimal::Decimal;

/// Base-rate proxy for the transaction's tenor and currency, percent.
pub fn raw_base_rate(deal: &Transaction, tables: &RateTables) -> Decimal {
    let params = &tables.base_rate;
    params.intercept
        + Decimal::from(deal.duration_months) * params.slope_per_month
        + tables.currency_offsets.offset(&deal.currency)
}

/// Cost of the capital consumed, at the target ROE, percent.
pub fn capital_charge(deal: &Transaction) -> Decimal {
    (deal.risk_weight / Decimal::ONE_HUNDRED)
        * (deal.capital_ratio / Decimal::ONE_HUNDRED)
        * deal.target_roe
}

/// Regulatory capital allocated per unit of notional, percent.
pub fn allocated_capital_pct(deal: &Transaction) -> Decimal {
    (deal.risk_weight / Decimal::ONE_HUNDRED) * deal.capital_ratio
}

/// RAROC in percent; zero when no capital is allocated, saturated at the
/// `Decimal` bounds when the ratio does not fit.
pub fn raroc(net_income_pct: Decimal, allocated_capital_pct: Decimal) -> Decimal {
    if allocated_capital_pct <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    net_income_pct
        .checked_div(allocated_capital_pct)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(if net_income_pct.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
}

/// Every unshocked cost component feeding the capital stage.
#[derive(Debug, Clone, PartialEq)]
pub struct CostStack {
    pub raw_base_rate: Decimal,
    pub liquidity: LiquidityCost,
    pub regulatory: RegulatoryCost,
    pub operational_cost: Decimal,
    pub esg: EsgCharges,
    pub strategic_spread: Decimal,
}

impl CostStack {
    /// FTP before any shock: the anchor of the client rate.
    pub fn base_ftp(&self) -> Decimal {
        self.raw_base_rate + self.liquidity.total()
    }

    /// Components that are never shocked.
    pub fn unshocked_add_ons(&self) -> Decimal {
        self.regulatory.total() + self.operational_cost + self.esg.total() + self.strategic_spread
    }
}

/// Prices, RAROC and economic profit, percent.
#[derive(Debug, Clone, PartialEq)]
pub struct CapitalOutcome {
    pub funding: ShockedFunding,
    pub total_ftp: Decimal,
    pub floor_price: Decimal,
    pub capital_charge: Decimal,
    pub technical_price: Decimal,
    pub final_client_rate: Decimal,
    pub net_income_pct: Decimal,
    pub allocated_capital_pct: Decimal,
    pub raroc: Decimal,
    pub economic_profit: Decimal,
}

/// Aggregate the cost stack into floor/technical prices and RAROC.
///
/// The client rate is anchored to the unshocked FTP: shocks never reprice the
/// client, they only erode the measured return.
pub fn assemble(deal: &Transaction, stack: &CostStack, shocks: &PricingShocks) -> CapitalOutcome {
    let funding = shock::apply(stack.raw_base_rate, stack.liquidity.total(), shocks);
    let total_ftp = funding.total_ftp();

    let floor_price = total_ftp + stack.unshocked_add_ons();
    let capital_charge = capital_charge(deal);
    let technical_price = floor_price + capital_charge;

    let final_client_rate = stack.base_ftp() + deal.margin_target;

    let net_income_pct = final_client_rate - floor_price;
    let allocated_capital_pct = allocated_capital_pct(deal);
    let raroc = raroc(net_income_pct, allocated_capital_pct);
    let economic_profit = net_income_pct - capital_charge;

    CapitalOutcome {
        funding,
        total_ftp,
        floor_price,
        capital_charge,
        technical_price,
        final_client_rate,
        net_income_pct,
        allocated_capital_pct,
        raroc,
        economic_profit,
    }
}
