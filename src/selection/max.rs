use tracing::{debug, warn};

use crate::errors::{Result, SelectionError};
use crate::installment::InstallmentOption;
use crate::types::FilterCriteria;

use super::filter::apply_filters;

/// pick the option with the most installments
///
/// Ties keep the first maximal option in input order. Fails with
/// `EmptyOptions` when nothing is left after filtering.
pub fn pick_max<'a>(
    options: &'a [InstallmentOption],
    criteria: Option<&FilterCriteria>,
) -> Result<&'a InstallmentOption> {
    let filtered = apply_filters(options, criteria);
    let picked = max_by_count(&filtered)?;

    debug!(
        installments = picked.number_of_installments,
        payment_system = %picked.payment_system_name,
        candidates = filtered.len(),
        "picked max installments option"
    );

    Ok(picked)
}

/// pick the no-interest option with the most installments
///
/// The scan starts at the first no-interest option, and only no-interest
/// options after it can replace it. Without any no-interest option this
/// falls back to `pick_max` over the filtered list.
pub fn pick_max_no_interest<'a>(
    options: &'a [InstallmentOption],
    criteria: Option<&FilterCriteria>,
) -> Result<&'a InstallmentOption> {
    let filtered = apply_filters(options, criteria);

    let Some(first) = filtered.iter().position(|option| option.is_no_interest()) else {
        if !filtered.is_empty() {
            warn!(
                candidates = filtered.len(),
                "no interest-free installments, falling back to max installments"
            );
        }
        return max_by_count(&filtered);
    };

    let mut best = filtered[first];
    for &option in &filtered[first..] {
        if option.is_no_interest() && option.number_of_installments > best.number_of_installments {
            best = option;
        }
    }

    debug!(
        installments = best.number_of_installments,
        payment_system = %best.payment_system_name,
        "picked max no-interest installments option"
    );

    Ok(best)
}

/// left-to-right scan, replacing only on a strictly greater count
fn max_by_count<'a>(options: &[&'a InstallmentOption]) -> Result<&'a InstallmentOption> {
    let (&first, rest) = options.split_first().ok_or(SelectionError::EmptyOptions)?;

    Ok(rest.iter().fold(first, |best, &option| {
        if option.number_of_installments > best.number_of_installments {
            option
        } else {
            best
        }
    }))
}
