use crate::*;
use near_sdk::CryptoHash;
use std::mem::size_of;

// used to generate a unique prefix in our storage collections (this is to avoid data collisions)
pub(crate) fn hash_account_id(account_id: &AccountId) -> CryptoHash {
    let mut hash = CryptoHash::default();
    hash.copy_from_slice(&env::sha256(account_id.as_bytes()));
    hash
}

// used on state-changing methods to guard against access-key calls
pub(crate) fn assert_one_yocto() {
    assert_eq!(
        env::attached_deposit(),
        1,
        "Requires attached deposit of exactly 1 yoctoNEAR"
    )
}

pub(crate) fn assert_at_least_one_yocto() {
    assert!(
        env::attached_deposit() >= 1,
        "Requires attached deposit of at least 1 yoctoNEAR"
    )
}

// storage taken by one approval record: the account string, its length
// prefix and a u64 approval id
pub(crate) fn bytes_for_approved_account_id(account_id: &AccountId) -> u64 {
    account_id.as_str().len() as u64 + 4 + size_of::<u64>() as u64
}

pub(crate) fn refund_approved_account_ids_iter<'a, I>(
    account_id: AccountId,
    approved_account_ids: I,
) -> Promise
where
    I: Iterator<Item = &'a AccountId>,
{
    let storage_released: u64 = approved_account_ids
        .map(bytes_for_approved_account_id)
        .sum();
    Promise::new(account_id).transfer(Balance::from(storage_released) * env::storage_byte_cost())
}

// refund the storage held by all of a token's approvals to its owner
pub(crate) fn refund_approved_account_ids(
    account_id: AccountId,
    approved_account_ids: &HashMap<AccountId, u64>,
) -> Promise {
    refund_approved_account_ids_iter(account_id, approved_account_ids.keys())
}

// refund the attached deposit beyond what the consumed storage costs,
// panic if the deposit does not even cover the storage
pub(crate) fn refund_deposit(storage_used: u64) {
    let required_cost = env::storage_byte_cost() * Balance::from(storage_used);
    let attached_deposit = env::attached_deposit();

    assert!(
        required_cost <= attached_deposit,
        "Must attach {} yoctoNEAR to cover storage",
        required_cost,
    );

    let refund = attached_deposit - required_cost;
    if refund > 1 {
        Promise::new(env::predecessor_account_id()).transfer(refund);
    }
}

impl Contract {
    // doesn't check if already there!
    pub(crate) fn internal_add_token_to_owner(
        &mut self,
        account_id: &AccountId,
        token_id: &TokenId,
    ) {
        let mut tokens_set = self.tokens_per_owner.get(account_id).unwrap_or_else(|| {
            // the account owns no tokens yet, give it a fresh set with its own prefix
            UnorderedSet::new(
                StorageKey::TokenPerOwnerInner {
                    account_id_hash: hash_account_id(account_id),
                }
                .try_to_vec()
                .unwrap(),
            )
        });

        tokens_set.insert(token_id);

        self.tokens_per_owner.insert(account_id, &tokens_set);
    }

    pub(crate) fn internal_remove_token_from_owner(
        &mut self,
        account_id: &AccountId,
        token_id: &TokenId,
    ) {
        let mut tokens_set = self
            .tokens_per_owner
            .get(account_id)
            .expect("Could not find tokens owned by this account");

        tokens_set.remove(token_id);

        if tokens_set.is_empty() {
            self.tokens_per_owner.remove(account_id);
        } else {
            self.tokens_per_owner.insert(account_id, &tokens_set);
        }
    }

    // Mints `quantity` tokens with consecutive IDs for the receiver and
    // logs a single batched mint event. IDs continue from the shared
    // counter, so presale, open sale and reserve mints never collide.
    pub(crate) fn internal_mint_batch(
        &mut self,
        receiver_id: &AccountId,
        quantity: u64,
    ) -> Vec<TokenId> {
        if quantity == 0 {
            return Vec::new();
        }

        let first_token_id = self.sale.minted_count;
        let token_ids: Vec<TokenId> = (first_token_id..first_token_id + quantity).collect();

        for token_id in token_ids.iter() {
            let token = Token {
                owner_id: receiver_id.clone(),
                approved_account_ids: Default::default(),
                next_approval_id: 0,
            };
            assert!(
                self.tokens_by_id.insert(token_id, &token).is_none(),
                "Token with ID {} already exists",
                token_id
            );
            self.internal_add_token_to_owner(receiver_id, token_id);
        }

        self.sale.minted_count += quantity;

        let nft_mint_log: EventLog = EventLog {
            standard: NFT_STANDARD_NAME.to_string(),
            version: NFT_METADATA_SPEC.to_string(),
            event: EventLogVariant::NftMint(vec![NftMintLog {
                owner_id: receiver_id.to_string(),
                token_ids: token_ids.iter().map(|token_id| token_id.to_string()).collect(),
                memo: None,
            }]),
        };
        env::log_str(&nft_mint_log.to_string());

        token_ids
    }

    // Moves the token between owners and returns the previous token
    // record so the caller can settle its approval storage.
    pub(crate) fn internal_transfer(
        &mut self,
        sender_id: &AccountId,
        receiver_id: &AccountId,
        token_id: &TokenId,
        approval_id: u64,
        memo: Option<String>,
    ) -> Token {
        let token = self
            .tokens_by_id
            .get(token_id)
            .expect("Token does not exist");

        if sender_id != &token.owner_id {
            let actual_approval_id = token
                .approved_account_ids
                .get(sender_id)
                .expect("Unauthorized");
            assert_eq!(
                actual_approval_id, &approval_id,
                "The actual approval id {} is different from the given approval id {}",
                actual_approval_id, approval_id
            );
        }

        assert_ne!(
            &token.owner_id, receiver_id,
            "The token owner and the receiver should be different"
        );

        self.internal_remove_token_from_owner(&token.owner_id, token_id);
        self.internal_add_token_to_owner(receiver_id, token_id);

        // approvals do not survive the transfer
        let new_token = Token {
            owner_id: receiver_id.clone(),
            approved_account_ids: Default::default(),
            next_approval_id: token.next_approval_id,
        };
        self.tokens_by_id.insert(token_id, &new_token);

        if let Some(memo) = memo.as_ref() {
            env::log_str(&format!("Memo: {}", memo));
        }

        // the event names the operator only when the owner was not the
        // one transferring
        let mut authorized_id = None;
        if sender_id != &token.owner_id {
            authorized_id = Some(sender_id.to_string());
        }

        let nft_transfer_log: EventLog = EventLog {
            standard: NFT_STANDARD_NAME.to_string(),
            version: NFT_METADATA_SPEC.to_string(),
            event: EventLogVariant::NftTransfer(vec![NftTransferLog {
                authorized_id,
                old_owner_id: token.owner_id.to_string(),
                new_owner_id: receiver_id.to_string(),
                token_ids: vec![token_id.to_string()],
                memo,
            }]),
        };
        env::log_str(&nft_transfer_log.to_string());

        token
    }
}
