use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Result, SelectionError};
use crate::installment::InstallmentOption;

/// equality filters applied before selection, both must match when present
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub payment_system_name: Option<String>,
    pub installments_quantity: Option<u32>,
}

impl FilterCriteria {
    /// keep only options of one payment system
    pub fn by_payment_system(name: impl Into<String>) -> Self {
        Self {
            payment_system_name: Some(name.into()),
            installments_quantity: None,
        }
    }

    /// keep only options with exactly this many installments
    pub fn by_quantity(quantity: u32) -> Self {
        Self {
            payment_system_name: None,
            installments_quantity: Some(quantity),
        }
    }

    /// also require exactly this many installments
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.installments_quantity = Some(quantity);
        self
    }

    /// payment system predicate, an empty name counts as unset
    pub fn payment_system(&self) -> Option<&str> {
        self.payment_system_name
            .as_deref()
            .filter(|name| !name.is_empty())
    }

    /// quantity predicate, zero counts as unset
    pub fn quantity(&self) -> Option<u32> {
        self.installments_quantity.filter(|quantity| *quantity > 0)
    }
}

/// which installment option the display policy shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InstallmentsCriteria {
    /// option with the most installments
    #[default]
    MaxQuantity,
    /// most installments among no-interest options
    MaxQuantityNoInterest,
    /// first option as listed on the offer
    First,
}

/// installment field used to cluster options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClusterField {
    PaymentSystemName,
    PaymentSystemGroupName,
    Name,
    NumberOfInstallments,
    InterestRate,
    Value,
    TotalValuePlusInterestRate,
}

impl ClusterField {
    /// field name as it appears in catalog json
    pub fn as_str(&self) -> &'static str {
        match self {
            ClusterField::PaymentSystemName => "PaymentSystemName",
            ClusterField::PaymentSystemGroupName => "PaymentSystemGroupName",
            ClusterField::Name => "Name",
            ClusterField::NumberOfInstallments => "NumberOfInstallments",
            ClusterField::InterestRate => "InterestRate",
            ClusterField::Value => "Value",
            ClusterField::TotalValuePlusInterestRate => "TotalValuePlusInterestRate",
        }
    }

    /// read this field from an option
    ///
    /// Optional fields missing from the record fail with `UnknownField`
    /// instead of grouping every such option under a shared empty key.
    pub fn key_of(&self, option: &InstallmentOption) -> Result<ClusterKey> {
        let missing = || SelectionError::UnknownField {
            field: self.as_str().to_string(),
        };

        let key = match self {
            ClusterField::PaymentSystemName => ClusterKey::Text(option.payment_system_name.clone()),
            ClusterField::PaymentSystemGroupName => ClusterKey::Text(
                option.payment_system_group_name.clone().ok_or_else(missing)?,
            ),
            ClusterField::Name => ClusterKey::Text(option.name.clone().ok_or_else(missing)?),
            ClusterField::NumberOfInstallments => ClusterKey::Count(option.number_of_installments),
            ClusterField::InterestRate => ClusterKey::Amount(option.interest_rate.as_decimal()),
            ClusterField::Value => ClusterKey::Amount(option.value.as_decimal()),
            ClusterField::TotalValuePlusInterestRate => {
                ClusterKey::Amount(option.total_value_plus_interest_rate.as_decimal())
            }
        };

        Ok(key)
    }
}

impl fmt::Display for ClusterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClusterField {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "PaymentSystemName" => Ok(ClusterField::PaymentSystemName),
            "PaymentSystemGroupName" => Ok(ClusterField::PaymentSystemGroupName),
            "Name" => Ok(ClusterField::Name),
            "NumberOfInstallments" => Ok(ClusterField::NumberOfInstallments),
            "InterestRate" => Ok(ClusterField::InterestRate),
            "Value" => Ok(ClusterField::Value),
            "TotalValuePlusInterestRate" => Ok(ClusterField::TotalValuePlusInterestRate),
            other => Err(SelectionError::UnknownField {
                field: other.to_string(),
            }),
        }
    }
}

/// value of a cluster field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClusterKey {
    Text(String),
    Count(u32),
    Amount(Decimal),
}

/// a seller's offer with its financing options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommercialOffer {
    #[serde(default)]
    pub installments: Vec<InstallmentOption>,
}
