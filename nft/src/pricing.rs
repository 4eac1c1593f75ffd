use crate::*;
use near_sdk::json_types::{U128, U64};

impl SaleState {
    // Price of a batch of `quantity` tokens minted when `minted_before`
    // tokens already exist. Units with an index below first_public_supply
    // cost the first tier price, every later unit costs the second tier
    // price, so a batch straddling the threshold pays a mix and the
    // per-unit price never goes down as the sale progresses.
    pub(crate) fn quote_from(&self, minted_before: u64, quantity: u64) -> Balance {
        let first_tier_count = if minted_before < self.first_public_supply {
            u64::min(self.first_public_supply - minted_before, quantity)
        } else {
            0
        };
        let second_tier_count = quantity - first_tier_count;
        Balance::from(first_tier_count) * self.first_public_mint_price_yocto
            + Balance::from(second_tier_count) * self.second_public_mint_price_yocto
    }
}

#[near_bindgen]
impl Contract {
    // Total price of minting `quantity` tokens right now at the public
    // tier rates.
    pub fn get_mint_price(&self, quantity: U64) -> U128 {
        U128(self.sale.quote_from(self.sale.minted_count, quantity.0))
    }
}
