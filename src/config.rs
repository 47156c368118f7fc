use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{Result, SelectionError};
use crate::installment::InstallmentOption;
use crate::selection::{pick_max, pick_max_no_interest};
use crate::types::{CommercialOffer, FilterCriteria, InstallmentsCriteria};
use crate::view::SelectionView;

/// display policy for the installments shown next to a product
///
/// Deserializes from the block props shape:
/// `{"installmentsCriteria": "max-quantity", "installmentOptionsFilter": {"paymentSystemName": "Visa"}}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayPolicy {
    pub installments_criteria: InstallmentsCriteria,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installment_options_filter: Option<FilterCriteria>,
}

impl DisplayPolicy {
    /// show the option with the most installments
    pub fn max_quantity() -> Self {
        Self {
            installments_criteria: InstallmentsCriteria::MaxQuantity,
            installment_options_filter: None,
        }
    }

    /// show the no-interest option with the most installments
    pub fn max_quantity_no_interest() -> Self {
        Self {
            installments_criteria: InstallmentsCriteria::MaxQuantityNoInterest,
            installment_options_filter: None,
        }
    }

    /// show the first option listed on the offer
    pub fn first() -> Self {
        Self {
            installments_criteria: InstallmentsCriteria::First,
            installment_options_filter: None,
        }
    }

    pub fn with_filter(mut self, filter: FilterCriteria) -> Self {
        self.installment_options_filter = Some(filter);
        self
    }

    /// parse a policy from json block props
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SelectionError::InvalidConfiguration {
            message: e.to_string(),
        })
    }

    /// pick the option to display
    ///
    /// An offer without installments has nothing to display and yields
    /// `None`. A filter that rejects every option is an `EmptyOptions` error.
    pub fn select<'a>(
        &self,
        options: &'a [InstallmentOption],
    ) -> Result<Option<&'a InstallmentOption>> {
        if options.is_empty() {
            debug!("offer has no installment options");
            return Ok(None);
        }

        let filter = self.installment_options_filter.as_ref();

        let picked = match self.installments_criteria {
            InstallmentsCriteria::MaxQuantity => pick_max(options, filter)?,
            InstallmentsCriteria::MaxQuantityNoInterest => pick_max_no_interest(options, filter)?,
            InstallmentsCriteria::First => &options[0],
        };

        Ok(Some(picked))
    }

    /// pick the option to display for a commercial offer
    pub fn select_for_offer<'a>(
        &self,
        offer: &'a CommercialOffer,
    ) -> Result<Option<&'a InstallmentOption>> {
        self.select(&offer.installments)
    }

    /// pick the option and build its view for rendering
    pub fn view(&self, options: &[InstallmentOption]) -> Result<Option<SelectionView>> {
        Ok(self
            .select(options)?
            .map(|option| SelectionView::from_option(option, self.installments_criteria)))
    }
}
