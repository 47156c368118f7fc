/// serializable view of the selected installment option for rendering
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::installment::InstallmentOption;
use crate::types::InstallmentsCriteria;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionView {
    pub criteria: InstallmentsCriteria,
    pub number_of_installments: u32,
    pub installment_value: Money,
    pub interest_rate: Rate,
    pub total_value: Money,
    pub has_interest: bool,
    pub payment_system_name: String,
    pub name: Option<String>,
}

impl SelectionView {
    pub fn from_option(option: &InstallmentOption, criteria: InstallmentsCriteria) -> Self {
        SelectionView {
            criteria,
            number_of_installments: option.number_of_installments,
            installment_value: option.value,
            interest_rate: option.interest_rate,
            total_value: option.total_value_plus_interest_rate,
            has_interest: option.has_interest(),
            payment_system_name: option.payment_system_name.clone(),
            name: option.name.clone(),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_view_json() {
        let option = InstallmentOption::builder()
            .number_of_installments(3)
            .value(Money::from_decimal(dec!(33.5)))
            .payment_system_name("Visa")
            .name("Visa 3 vezes sem juros")
            .build()
            .unwrap();

        let view = SelectionView::from_option(&option, InstallmentsCriteria::MaxQuantityNoInterest);
        assert_eq!(view.total_value, Money::from_decimal(dec!(100.5)));
        assert!(!view.has_interest);

        let json: serde_json::Value = serde_json::from_str(&view.to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["criteria"], "max-quantity-no-interest");
        assert_eq!(json["number_of_installments"], 3);
        assert_eq!(json["installment_value"], 33.5);
        assert_eq!(json["payment_system_name"], "Visa");
    }
}
