use crate::constants::*;
use crate::*;
use near_sdk::json_types::U128;
use near_sdk::{ext_contract, Gas, PromiseResult};

#[cfg(test)]
#[path = "treasury_tests.rs"]
mod treasury_tests;

const WITHDRAW_COMPLETION_GAS: Gas = Gas(5_000_000_000_000); // 5 TGas

// The first beneficiary share is rounded down, the second beneficiary
// gets the exact remainder so the two shares always add up to the
// balance being split.
pub(crate) fn split_proceeds(balance_yocto: Balance) -> (Balance, Balance) {
    let first_share_yocto = balance_yocto * FIRST_BENEFICIARY_SHARE_PERCENT / 100;
    let second_share_yocto = balance_yocto - first_share_yocto;
    (first_share_yocto, second_share_yocto)
}

#[ext_contract(ext_self)]
trait WithdrawCompletionHandler {
    fn withdraw_completion(&mut self, first_share_yocto: U128, second_share_yocto: U128) -> U128;
}

trait WithdrawCompletionHandler {
    fn withdraw_completion(&mut self, first_share_yocto: U128, second_share_yocto: U128) -> U128;
}

#[near_bindgen]
impl Contract {
    // Pays the accumulated sale proceeds out, 20% to the first
    // beneficiary and the remainder to the second. The accumulator is
    // zeroed before the transfers are scheduled and the completion
    // callback puts the share of any failed transfer back, so the funds
    // stay withdrawable after a botched payout.
    pub fn withdraw_all(&mut self) -> Promise {
        self.assert_role(&env::predecessor_account_id(), Role::Admin);

        let balance_yocto = self.sale_proceeds_yocto;
        assert!(balance_yocto > 0, "Nothing to withdraw");

        let (first_share_yocto, second_share_yocto) = split_proceeds(balance_yocto);
        self.sale_proceeds_yocto = 0;

        Promise::new(self.first_beneficiary_id.clone())
            .transfer(first_share_yocto)
            .and(Promise::new(self.second_beneficiary_id.clone()).transfer(second_share_yocto))
            .then(ext_self::withdraw_completion(
                U128(first_share_yocto),
                U128(second_share_yocto),
                env::current_account_id(),
                NO_DEPOSIT,
                WITHDRAW_COMPLETION_GAS,
            ))
    }
}

#[near_bindgen]
impl WithdrawCompletionHandler for Contract {
    // Returns the amount actually paid out. This must not panic, a
    // panic here would roll the restored shares back.
    #[private]
    fn withdraw_completion(&mut self, first_share_yocto: U128, second_share_yocto: U128) -> U128 {
        assert_eq!(
            env::promise_results_count(),
            2,
            "Expected two transfer results"
        );

        let mut paid_out_yocto: Balance = 0;

        match env::promise_result(0) {
            PromiseResult::Successful(_) => paid_out_yocto += first_share_yocto.0,
            _ => {
                self.sale_proceeds_yocto += first_share_yocto.0;
                env::log_str(
                    &SaleError::TransferFailed(self.first_beneficiary_id.clone()).to_string(),
                );
            }
        }
        match env::promise_result(1) {
            PromiseResult::Successful(_) => paid_out_yocto += second_share_yocto.0,
            _ => {
                self.sale_proceeds_yocto += second_share_yocto.0;
                env::log_str(
                    &SaleError::TransferFailed(self.second_beneficiary_id.clone()).to_string(),
                );
            }
        }

        U128(paid_out_yocto)
    }
}
