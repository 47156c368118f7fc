use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{Result, SelectionError};

/// one financing plan attached to a commercial offer
///
/// Field names follow the catalog json so offers can be deserialized as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstallmentOption {
    /// amount of each installment
    #[serde(default)]
    pub value: Money,
    pub interest_rate: Rate,
    #[serde(default)]
    pub total_value_plus_interest_rate: Money,
    pub number_of_installments: u32,
    pub payment_system_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_system_group_name: Option<String>,
    /// display label, e.g. "Visa 3 vezes sem juros"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl InstallmentOption {
    pub fn builder() -> InstallmentOptionBuilder {
        InstallmentOptionBuilder::new()
    }

    pub fn is_no_interest(&self) -> bool {
        self.interest_rate.is_zero()
    }

    pub fn has_interest(&self) -> bool {
        !self.is_no_interest()
    }
}

/// builder for installment options
pub struct InstallmentOptionBuilder {
    number_of_installments: Option<u32>,
    interest_rate: Option<Rate>,
    value: Option<Money>,
    total: Option<Money>,
    payment_system_name: Option<String>,
    payment_system_group_name: Option<String>,
    name: Option<String>,
}

impl InstallmentOptionBuilder {
    pub fn new() -> Self {
        Self {
            number_of_installments: None,
            interest_rate: None,
            value: None,
            total: None,
            payment_system_name: None,
            payment_system_group_name: None,
            name: None,
        }
    }

    pub fn number_of_installments(mut self, count: u32) -> Self {
        self.number_of_installments = Some(count);
        self
    }

    pub fn interest_rate(mut self, rate: Rate) -> Self {
        self.interest_rate = Some(rate);
        self
    }

    pub fn value(mut self, value: Money) -> Self {
        self.value = Some(value);
        self
    }

    pub fn total(mut self, total: Money) -> Self {
        self.total = Some(total);
        self
    }

    pub fn payment_system_name(mut self, name: impl Into<String>) -> Self {
        self.payment_system_name = Some(name.into());
        self
    }

    pub fn payment_system_group_name(mut self, name: impl Into<String>) -> Self {
        self.payment_system_group_name = Some(name.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// build the option; the total defaults to value times count
    pub fn build(self) -> Result<InstallmentOption> {
        let count = self.number_of_installments.unwrap_or(1);
        if count == 0 {
            return Err(SelectionError::InvalidInstallmentCount { count });
        }

        let value = self.value.unwrap_or(Money::ZERO);
        let total = match self.total {
            Some(total) => total,
            None => value
                .checked_mul(count)
                .ok_or(SelectionError::AmountOverflow { value, count })?,
        };

        Ok(InstallmentOption {
            value,
            interest_rate: self.interest_rate.unwrap_or(Rate::ZERO),
            total_value_plus_interest_rate: total,
            number_of_installments: count,
            payment_system_name: self.payment_system_name.unwrap_or_default(),
            payment_system_group_name: self.payment_system_group_name,
            name: self.name,
        })
    }
}

impl Default for InstallmentOptionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_builder_defaults() {
        let option = InstallmentOption::builder()
            .number_of_installments(4)
            .value(Money::from_decimal(dec!(25.50)))
            .payment_system_name("Visa")
            .build()
            .unwrap();

        assert_eq!(option.total_value_plus_interest_rate, Money::from_decimal(dec!(102)));
        assert!(option.is_no_interest());
        assert_eq!(option.payment_system_group_name, None);
    }

    #[test]
    fn test_builder_rejects_zero_installments() {
        let result = InstallmentOption::builder().number_of_installments(0).build();
        assert_eq!(result, Err(SelectionError::InvalidInstallmentCount { count: 0 }));
    }

    #[test]
    fn test_builder_total_overflow() {
        let value = Money::from_decimal(Decimal::MAX);
        let result = InstallmentOption::builder()
            .number_of_installments(10)
            .value(value)
            .build();
        assert_eq!(result, Err(SelectionError::AmountOverflow { value, count: 10 }));

        // an explicit total skips the computation
        let option = InstallmentOption::builder()
            .number_of_installments(10)
            .value(value)
            .total(value)
            .build()
            .unwrap();
        assert_eq!(option.total_value_plus_interest_rate, value);
    }

    #[test]
    fn test_catalog_json() {
        let json = r#"{
            "Value": 37.33,
            "InterestRate": 1.99,
            "TotalValuePlusInterestRate": 111.99,
            "NumberOfInstallments": 3,
            "PaymentSystemName": "Mastercard",
            "PaymentSystemGroupName": "creditCardPaymentGroup",
            "Name": "Mastercard 3 vezes com juros"
        }"#;

        let option: InstallmentOption = serde_json::from_str(json).unwrap();
        assert_eq!(option.number_of_installments, 3);
        assert_eq!(option.interest_rate, Rate::new(dec!(1.99)));
        assert!(option.has_interest());
        assert_eq!(option.value, Money::from_decimal(dec!(37.33)));
        assert_eq!(option.payment_system_group_name.as_deref(), Some("creditCardPaymentGroup"));
    }

    #[test]
    fn test_minimal_catalog_json() {
        let json = r#"{"InterestRate":0,"NumberOfInstallments":1,"PaymentSystemName":"Boleto"}"#;
        let option: InstallmentOption = serde_json::from_str(json).unwrap();

        assert!(option.is_no_interest());
        assert_eq!(option.value, Money::ZERO);
        assert_eq!(option.name, None);
    }
}
