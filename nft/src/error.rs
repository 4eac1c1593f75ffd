use crate::*;
use std::fmt;

// Failure taxonomy of the sale surface. Every message opens with the
// stable tag so callers and tests can match on the exact reason.
#[derive(Debug)]
pub enum SaleError {
    PhaseInactive(SalePhase),
    NotAllowListed,
    PerTxLimitExceeded(u64),
    SupplyExceeded,
    InsufficientPayment {
        required_yocto: Balance,
        attached_yocto: Balance,
    },
    TransferFailed(AccountId),
}

impl fmt::Display for SaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaleError::PhaseInactive(phase) => {
                write!(f, "PhaseInactive: the {} sale is not open", phase.as_str())
            }
            SaleError::NotAllowListed => {
                write!(f, "NotAllowListed: account is not on the white list")
            }
            SaleError::PerTxLimitExceeded(limit) => {
                write!(
                    f,
                    "PerTxLimitExceeded: no more than {} mints per transaction",
                    limit
                )
            }
            SaleError::SupplyExceeded => {
                write!(f, "SupplyExceeded: no apes left in this phase")
            }
            SaleError::InsufficientPayment {
                required_yocto,
                attached_yocto,
            } => {
                write!(
                    f,
                    "InsufficientPayment: attached deposit of {} is insufficient to pay the price of {}",
                    attached_yocto, required_yocto
                )
            }
            SaleError::TransferFailed(account_id) => {
                write!(f, "TransferFailed: transfer to {} failed", account_id)
            }
        }
    }
}
