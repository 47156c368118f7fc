use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no installment options to select from")]
    EmptyOptions,

    #[error("unknown installment field: {field}")]
    UnknownField {
        field: String,
    },

    #[error("invalid number of installments: {count}")]
    InvalidInstallmentCount {
        count: u32,
    },

    #[error("installment total overflowed: {count} x {value}")]
    AmountOverflow {
        value: Money,
        count: u32,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, SelectionError>;
