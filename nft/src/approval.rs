use crate::constants::*;
use crate::*;
use near_sdk::{ext_contract, Gas};

const GAS_FOR_NFT_APPROVE: Gas = Gas(10_000_000_000_000);

pub trait NonFungibleTokenApproval {
    //approve an account ID to transfer a token on your behalf
    fn nft_approve(&mut self, token_id: TokenId, account_id: AccountId, msg: Option<String>);

    //check if the passed in account has access to approve the token ID
    fn nft_is_approved(
        &self,
        token_id: TokenId,
        approved_account_id: AccountId,
        approval_id: Option<u64>,
    ) -> bool;

    //revoke a specific account from transferring the token on your behalf
    fn nft_revoke(&mut self, token_id: TokenId, account_id: AccountId);

    //revoke all accounts from transferring the token on your behalf
    fn nft_revoke_all(&mut self, token_id: TokenId);
}

#[ext_contract(ext_non_fungible_approval_receiver)]
trait NonFungibleTokenApprovalsReceiver {
    //cross contract call to an external contract that is initiated during nft_approve
    fn nft_on_approve(
        &mut self,
        token_id: TokenId,
        owner_id: AccountId,
        approval_id: u64,
        msg: String,
    );
}

#[near_bindgen]
impl NonFungibleTokenApproval for Contract {
    // the caller pays for the approval record storage with the attached
    // deposit, anything beyond it is refunded
    #[payable]
    fn nft_approve(&mut self, token_id: TokenId, account_id: AccountId, msg: Option<String>) {
        assert_at_least_one_yocto();

        let mut token = self
            .tokens_by_id
            .get(&token_id)
            .expect("Token does not exist");

        assert_eq!(
            &env::predecessor_account_id(),
            &token.owner_id,
            "Only the token owner can approve accounts"
        );

        let approval_id: u64 = token.next_approval_id;

        // re-approving the same account costs no extra storage
        let is_new_approval = token
            .approved_account_ids
            .insert(account_id.clone(), approval_id)
            .is_none();
        let storage_used = if is_new_approval {
            bytes_for_approved_account_id(&account_id)
        } else {
            0
        };

        token.next_approval_id += 1;
        self.tokens_by_id.insert(&token_id, &token);

        refund_deposit(storage_used);

        if let Some(msg) = msg {
            ext_non_fungible_approval_receiver::nft_on_approve(
                token_id,
                token.owner_id,
                approval_id,
                msg,
                account_id,
                NO_DEPOSIT,
                env::prepaid_gas() - GAS_FOR_NFT_APPROVE,
            )
            .as_return();
        }
    }

    fn nft_is_approved(
        &self,
        token_id: TokenId,
        approved_account_id: AccountId,
        approval_id: Option<u64>,
    ) -> bool {
        let token = self
            .tokens_by_id
            .get(&token_id)
            .expect("Token does not exist");

        let approval = token.approved_account_ids.get(&approved_account_id);

        if let Some(approval) = approval {
            // when an approval ID was passed it must match the stored one
            if let Some(approval_id) = approval_id {
                approval_id == *approval
            } else {
                true
            }
        } else {
            false
        }
    }

    #[payable]
    fn nft_revoke(&mut self, token_id: TokenId, account_id: AccountId) {
        assert_one_yocto();

        let mut token = self
            .tokens_by_id
            .get(&token_id)
            .expect("Token does not exist");

        let predecessor_account_id = env::predecessor_account_id();
        assert_eq!(
            &predecessor_account_id, &token.owner_id,
            "Only the token owner can revoke approvals"
        );

        if token.approved_account_ids.remove(&account_id).is_some() {
            // the storage the record took goes back to the owner
            refund_approved_account_ids_iter(predecessor_account_id, [account_id].iter());
            self.tokens_by_id.insert(&token_id, &token);
        }
    }

    #[payable]
    fn nft_revoke_all(&mut self, token_id: TokenId) {
        assert_one_yocto();

        let mut token = self
            .tokens_by_id
            .get(&token_id)
            .expect("Token does not exist");

        let predecessor_account_id = env::predecessor_account_id();
        assert_eq!(
            &predecessor_account_id, &token.owner_id,
            "Only the token owner can revoke approvals"
        );

        if !token.approved_account_ids.is_empty() {
            refund_approved_account_ids(predecessor_account_id, &token.approved_account_ids);
            token.approved_account_ids.clear();
            self.tokens_by_id.insert(&token_id, &token);
        }
    }
}
