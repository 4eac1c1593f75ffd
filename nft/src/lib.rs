use std::collections::HashMap;

use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::collections::{LazyOption, LookupMap, UnorderedSet};
use near_sdk::json_types::{Base64VecU8, U128, U64};
use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::{
    env, near_bindgen, AccountId, Balance, BorshStorageKey, CryptoHash, PanicOnDefault, Promise,
    PromiseOrValue,
};

use crate::internal::*;
pub use crate::access::*;
pub use crate::approval::*;
pub use crate::error::*;
pub use crate::events::*;
pub use crate::metadata::*;
pub use crate::nft_core::*;
pub use crate::sale::*;

mod access;
mod approval;
mod constants;
mod enumeration;
mod error;
mod events;
mod internal;
mod metadata;
mod mint;
mod nft_core;
mod pricing;
mod sale;
mod treasury;

// This spec can be treated like a version of the standard.
pub const NFT_METADATA_SPEC: &str = "1.0.0";
// This is the name of the NFT standard we're using
pub const NFT_STANDARD_NAME: &str = "nep171";

#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
pub struct Contract {
    // contract owner, holds the Admin role
    pub owner_id: AccountId,

    // proceeds beneficiaries, fixed at deployment
    pub first_beneficiary_id: AccountId,
    pub second_beneficiary_id: AccountId,

    // capacities, prices, phase switches and the shared mint counter
    pub sale: SaleState,

    // accounts eligible for the private mint phase
    pub white_list: UnorderedSet<AccountId>,

    // mint revenue collected and not yet withdrawn
    pub sale_proceeds_yocto: Balance,

    //keeps track of all the token IDs for a given account
    pub tokens_per_owner: LookupMap<AccountId, UnorderedSet<TokenId>>,

    //keeps track of the token struct for a given token ID
    pub tokens_by_id: LookupMap<TokenId, Token>,

    //keeps track of the contract metadata
    pub metadata: LazyOption<NftContractMetadata>,
}

/// Helper structure for keys of the persistent collections.
#[derive(BorshStorageKey, BorshSerialize)]
pub enum StorageKey {
    WhiteList,
    TokensPerOwner,
    TokenPerOwnerInner { account_id_hash: CryptoHash },
    TokensById,
    NftContractMetadata,
}

#[near_bindgen]
impl Contract {
    /*
        initialization function (can only be called once).
        this initializes the contract with default metadata so the
        user doesn't have to manually type metadata.
    */
    #[init]
    pub fn new_default_meta(
        owner_id: AccountId,
        first_beneficiary_id: AccountId,
        second_beneficiary_id: AccountId,
    ) -> Self {
        Self::new(
            owner_id,
            first_beneficiary_id,
            second_beneficiary_id,
            NftContractMetadata {
                spec: "nft-1.0.0".to_string(),
                name: "Excited Ape Yacht Club".to_string(),
                symbol: "EAPE".to_string(),
                icon: None,
                base_uri: None,
                reference: None,
                reference_hash: None,
            },
        )
    }

    /*
        initialization function (can only be called once).
        this initializes the contract with the metadata that was passed in,
        the sale admin and both payout beneficiaries.
    */
    #[init]
    pub fn new(
        owner_id: AccountId,
        first_beneficiary_id: AccountId,
        second_beneficiary_id: AccountId,
        metadata: NftContractMetadata,
    ) -> Self {
        Self {
            owner_id,
            first_beneficiary_id,
            second_beneficiary_id,
            sale: SaleState::new(),
            white_list: UnorderedSet::new(StorageKey::WhiteList),
            sale_proceeds_yocto: 0,
            tokens_per_owner: LookupMap::new(StorageKey::TokensPerOwner),
            tokens_by_id: LookupMap::new(StorageKey::TokensById),
            metadata: LazyOption::new(StorageKey::NftContractMetadata, Some(&metadata)),
        }
    }
}
