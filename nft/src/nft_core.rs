use crate::constants::*;
use crate::*;
use near_sdk::{ext_contract, log, Gas, PromiseResult};

#[cfg(test)]
#[path = "nft_core_tests.rs"]
mod nft_core_tests;

const GAS_FOR_RESOLVE_TRANSFER: Gas = Gas(10_000_000_000_000);
const GAS_FOR_NFT_TRANSFER_CALL: Gas = Gas(25_000_000_000_000 + GAS_FOR_RESOLVE_TRANSFER.0);
const MIN_GAS_FOR_NFT_TRANSFER_CALL: Gas = Gas(100_000_000_000_000);

pub trait NonFungibleTokenCore {
    //transfers a token to a receiver ID
    fn nft_transfer(
        &mut self,
        receiver_id: AccountId,
        token_id: TokenId,
        approval_id: u64,
        memo: Option<String>,
    );

    //transfers a token to a receiver and calls a function on the receiver ID's contract
    /// Returns `true` if the token was transferred from the sender's account.
    fn nft_transfer_call(
        &mut self,
        receiver_id: AccountId,
        token_id: TokenId,
        approval_id: u64,
        memo: Option<String>,
        msg: String,
    ) -> PromiseOrValue<bool>;

    //get information about the token passed in
    fn nft_token(&self, token_id: TokenId) -> Option<JsonToken>;
}

#[ext_contract(ext_non_fungible_token_receiver)]
trait NonFungibleTokenReceiver {
    //called on the receiver contract via cross contract call from nft_transfer_call
    /// Returns `true` if the token should be returned back to the sender.
    fn nft_on_transfer(
        &mut self,
        sender_id: AccountId,
        previous_owner_id: AccountId,
        token_id: TokenId,
        msg: String,
    ) -> Promise;
}

#[ext_contract(ext_self)]
trait NonFungibleTokenResolver {
    /*
        resolves the promise of the cross contract call to the receiver contract
        this is stored on THIS contract and inspects what nft_on_transfer decided
    */
    fn nft_resolve_transfer(
        &mut self,
        authorized_id: Option<String>, // for logging event if we need to revert the transfer
        previous_owner_id: AccountId,
        receiver_id: AccountId,
        token_id: TokenId,
        previous_approved_account_ids: HashMap<AccountId, u64>,
        memo: Option<String>, // this is for logging, too
    ) -> bool;
}

trait NonFungibleTokenResolver {
    fn nft_resolve_transfer(
        &mut self,
        authorized_id: Option<String>,
        previous_owner_id: AccountId,
        receiver_id: AccountId,
        token_id: TokenId,
        previous_approved_account_ids: HashMap<AccountId, u64>,
        memo: Option<String>,
    ) -> bool;
}

#[near_bindgen]
impl NonFungibleTokenCore for Contract {
    //transfers the token from the current owner to the receiver
    #[payable]
    fn nft_transfer(
        &mut self,
        receiver_id: AccountId,
        token_id: TokenId,
        approval_id: u64,
        memo: Option<String>,
    ) {
        //assert that the user attached exactly 1 yoctoNEAR. This is for security and so that the user will be redirected to the NEAR wallet.
        assert_one_yocto();

        let sender_id = env::predecessor_account_id();

        let previous_token =
            self.internal_transfer(&sender_id, &receiver_id, &token_id, approval_id, memo);

        //refund the owner for releasing the storage used up by the approved account IDs
        refund_approved_account_ids(
            previous_token.owner_id.clone(),
            &previous_token.approved_account_ids,
        );
    }

    //transfers the token and calls a method on the receiver_id contract
    #[payable]
    fn nft_transfer_call(
        &mut self,
        receiver_id: AccountId,
        token_id: TokenId,
        approval_id: u64,
        memo: Option<String>,
        msg: String,
    ) -> PromiseOrValue<bool> {
        assert_one_yocto();

        // with too little gas the cross contract call to nft_on_transfer would
        // fail on prepaid gas while the transfer itself went through, leaving
        // indexers with the wrong owner
        let attached_gas = env::prepaid_gas();
        assert!(
            attached_gas >= MIN_GAS_FOR_NFT_TRANSFER_CALL,
            "You cannot attach less than {:?} Gas to nft_transfer_call",
            MIN_GAS_FOR_NFT_TRANSFER_CALL
        );

        let sender_id = env::predecessor_account_id();

        let previous_token = self.internal_transfer(
            &sender_id,
            &receiver_id,
            &token_id,
            approval_id,
            memo.clone(),
        );

        // the resolver logs the operator if the transfer gets reverted
        let mut authorized_id = None;
        if sender_id != previous_token.owner_id {
            authorized_id = Some(sender_id.to_string());
        }

        ext_non_fungible_token_receiver::nft_on_transfer(
            sender_id,
            previous_token.owner_id.clone(),
            token_id,
            msg,
            receiver_id.clone(), // contract account to make the call to
            NO_DEPOSIT,          // attached deposit
            env::prepaid_gas() - GAS_FOR_NFT_TRANSFER_CALL, // attached GAS
        )
        .then(ext_self::nft_resolve_transfer(
            authorized_id,
            previous_token.owner_id,
            receiver_id,
            token_id,
            previous_token.approved_account_ids,
            memo,
            env::current_account_id(), // contract account to make the call to
            NO_DEPOSIT,                // attached deposit
            GAS_FOR_RESOLVE_TRANSFER,  // attached GAS
        ))
        .into()
    }

    fn nft_token(&self, token_id: TokenId) -> Option<JsonToken> {
        if let Some(token) = self.tokens_by_id.get(&token_id) {
            Some(JsonToken {
                token_id,
                owner_id: token.owner_id,
                token_uri: self.internal_token_uri(token_id),
                approved_account_ids: token.approved_account_ids,
            })
        } else {
            None
        }
    }
}

#[near_bindgen]
impl NonFungibleTokenResolver for Contract {
    // resolves the cross contract call when calling nft_on_transfer in the nft_transfer_call method
    // returns true if the token was successfully transferred to the receiver_id
    #[private]
    fn nft_resolve_transfer(
        &mut self,
        authorized_id: Option<String>,
        previous_owner_id: AccountId,
        receiver_id: AccountId,
        token_id: TokenId,
        previous_approved_account_ids: HashMap<AccountId, u64>,
        memo: Option<String>,
    ) -> bool {
        // whether receiver wants to return token back to the sender, based on `nft_on_transfer` result
        if let PromiseResult::Successful(value) = env::promise_result(0) {
            if let Ok(return_token) = near_sdk::serde_json::from_slice::<bool>(&value) {
                if !return_token {
                    // the receiver keeps the token, settle the old owner's approval storage
                    refund_approved_account_ids(previous_owner_id, &previous_approved_account_ids);
                    return true;
                }
            }
        }

        let mut new_token = if let Some(new_token) = self.tokens_by_id.get(&token_id) {
            if new_token.owner_id != receiver_id {
                refund_approved_account_ids(previous_owner_id, &previous_approved_account_ids);
                // the token is not owned by the receiver anymore. Can't return it.
                return true;
            }
            new_token
        } else {
            // no such token, nothing to revert
            refund_approved_account_ids(previous_owner_id, &previous_approved_account_ids);
            return true;
        };

        log!(
            "Return {} from @{} to @{}",
            token_id,
            receiver_id,
            previous_owner_id
        );

        self.internal_remove_token_from_owner(&receiver_id, &token_id);
        self.internal_add_token_to_owner(&previous_owner_id, &token_id);
        new_token.owner_id = previous_owner_id.clone();

        // refund the receiver for approvals they might have added in the meantime
        refund_approved_account_ids(receiver_id.clone(), &new_token.approved_account_ids);
        new_token.approved_account_ids = previous_approved_account_ids;

        self.tokens_by_id.insert(&token_id, &new_token);

        // log the return so indexers see the ownership flip back
        let nft_transfer_log: EventLog = EventLog {
            standard: NFT_STANDARD_NAME.to_string(),
            version: NFT_METADATA_SPEC.to_string(),
            event: EventLogVariant::NftTransfer(vec![NftTransferLog {
                authorized_id,
                old_owner_id: receiver_id.to_string(),
                new_owner_id: previous_owner_id.to_string(),
                token_ids: vec![token_id.to_string()],
                memo,
            }]),
        };
        env::log_str(&nft_transfer_log.to_string());

        false
    }
}
