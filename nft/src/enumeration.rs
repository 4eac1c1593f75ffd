use crate::*;

#[near_bindgen]
impl Contract {
    //total number of tokens minted so far
    pub fn nft_total_supply(&self) -> U128 {
        U128(self.sale.minted_count as u128)
    }

    //Query for nft tokens on the contract regardless of the owner using pagination
    pub fn nft_tokens(&self, from_index: Option<U128>, limit: Option<u64>) -> Vec<JsonToken> {
        //token IDs are dense, walking the minted range visits every token
        let start = u128::from(from_index.unwrap_or(U128(0))) as u64;
        let count = limit.unwrap_or(10) as usize;

        (start..self.sale.minted_count)
            .take(count)
            .map(|token_id| self.nft_token(token_id).unwrap())
            .collect()
    }

    //get the total supply of NFTs for a given owner
    pub fn nft_supply_for_owner(&self, account_id: AccountId) -> U128 {
        let tokens_for_owner_set = self.tokens_per_owner.get(&account_id);
        if let Some(tokens_for_owner_set) = tokens_for_owner_set {
            U128(tokens_for_owner_set.len() as u128)
        } else {
            U128(0)
        }
    }

    //Query for all the tokens for an owner
    pub fn nft_tokens_for_owner(
        &self,
        account_id: AccountId,
        from_index: Option<U128>,
        limit: Option<u64>,
    ) -> Vec<JsonToken> {
        let tokens_for_owner_set = self.tokens_per_owner.get(&account_id);
        if let Some(tokens_for_owner_set) = tokens_for_owner_set {
            let keys = tokens_for_owner_set.as_vector();

            //where to start pagination - if we have a from_index, we'll use that - otherwise start from 0 index
            let start = u128::from(from_index.unwrap_or(U128(0))) as usize;

            keys.iter()
                .skip(start)
                .take(limit.unwrap_or(10) as usize)
                .map(|token_id| self.nft_token(token_id).unwrap())
                .collect()
        } else {
            vec![]
        }
    }

    //n-th token of an owner, in the set's storage order
    pub fn nft_token_of_owner_by_index(&self, account_id: AccountId, index: U64) -> TokenId {
        let tokens_for_owner_set = self
            .tokens_per_owner
            .get(&account_id)
            .expect("Owner has no tokens");
        tokens_for_owner_set
            .as_vector()
            .get(index.0)
            .expect("Owner index out of bounds")
    }
}
