use std::cmp::Ordering;
use std::sync::Arc;

use bigdecimal::BigDecimal;

use super::errors::PricingError;
use super::model::{BestPriceQuery, BestPriceResult, Candidate};
use super::rate_converter::round_half_away_from_zero;
use super::services::RateProvider;

/// Decimal places of the unit and total prices handed back to callers.
pub const PRICE_SCALE: i64 = 2;

struct ScoredCandidate {
    candidate: Candidate,
    converted_unit_price: BigDecimal,
}

/// Picks the cheapest candidate once every price is expressed in the requested currency.
///
/// Ties are broken, in order, by preferred supplier first, shorter lead time, and lower
/// supplier id, so the same candidates always yield the same winner.
pub struct BestPriceSelector {
    rates: Arc<dyn RateProvider>,
}

impl BestPriceSelector {
    pub fn new(rates: Arc<dyn RateProvider>) -> Self {
        Self { rates }
    }

    /// Returns `None` when there is nothing to choose from.
    ///
    /// Any currency the rate provider does not know fails the whole selection.
    pub fn select_best(
        &self,
        query: &BestPriceQuery,
        candidates: Vec<Candidate>,
    ) -> Result<Option<BestPriceResult>, PricingError> {
        let mut scored = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let converted_unit_price = self.rates.convert(
                &candidate.entry.price_per_unit,
                &candidate.entry.currency,
                &query.currency,
            )?;
            scored.push(ScoredCandidate {
                candidate,
                converted_unit_price,
            });
        }

        let Some(best) = scored.into_iter().min_by(rank) else {
            return Ok(None);
        };

        let supplier = &best.candidate.supplier;
        // Total comes from the unrounded unit price, rounded on its own.
        let total = &best.converted_unit_price * BigDecimal::from(query.quantity);

        Ok(Some(BestPriceResult {
            sku: query.sku.clone(),
            quantity: query.quantity,
            currency: query.currency.clone(),
            date: query.date,
            supplier_id: supplier.supplier_id,
            unit_price: round_half_away_from_zero(&best.converted_unit_price, PRICE_SCALE),
            total_price: round_half_away_from_zero(&total, PRICE_SCALE),
            reason: format!(
                "Chosen by lowest unit price; tie-breakers applied: Preferred={}, LeadTimeDays={}, SupplierId={}",
                supplier.preferred, supplier.lead_time_days, supplier.supplier_id
            ),
        }))
    }
}

fn rank(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    let (sa, sb) = (&a.candidate.supplier, &b.candidate.supplier);
    a.converted_unit_price
        .cmp(&b.converted_unit_price)
        .then_with(|| sb.preferred.cmp(&sa.preferred))
        .then_with(|| sa.lead_time_days.cmp(&sb.lead_time_days))
        .then_with(|| sa.supplier_id.cmp(&sb.supplier_id))
}
