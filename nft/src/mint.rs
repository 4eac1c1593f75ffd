use crate::*;
use near_sdk::json_types::U64;

#[cfg(test)]
#[path = "mint_tests.rs"]
mod mint_tests;

#[near_bindgen]
impl Contract {
    // Allow-listed presale. Every token in the batch costs the flat
    // presale price and the batch must fit into the private supply.
    #[payable]
    pub fn private_mint(&mut self, quantity: U64) -> Vec<TokenId> {
        let buyer_id = env::predecessor_account_id();
        let quantity = quantity.0;

        assert!(
            self.sale.private_mint_active,
            "{}",
            SaleError::PhaseInactive(SalePhase::Private)
        );
        assert!(
            self.white_list.contains(&buyer_id),
            "{}",
            SaleError::NotAllowListed
        );
        assert!(
            quantity <= self.sale.max_per_presale_tx,
            "{}",
            SaleError::PerTxLimitExceeded(self.sale.max_per_presale_tx)
        );
        assert!(
            self.sale.fits_under(quantity, self.sale.max_private_supply),
            "{}",
            SaleError::SupplyExceeded
        );

        let price_yocto = Balance::from(quantity) * self.sale.presale_mint_price_yocto;
        self.collect_payment_and_mint(buyer_id, quantity, price_yocto)
    }

    // Open sale. A batch crossing the first public capacity pays a mix
    // of both tier prices.
    #[payable]
    pub fn public_mint(&mut self, quantity: U64) -> Vec<TokenId> {
        let buyer_id = env::predecessor_account_id();
        let quantity = quantity.0;

        assert!(
            self.sale.public_mint_active,
            "{}",
            SaleError::PhaseInactive(SalePhase::Public)
        );
        assert!(
            self.sale.fits_under(quantity, self.sale.second_public_supply),
            "{}",
            SaleError::SupplyExceeded
        );
        assert!(
            quantity <= self.sale.max_per_tx,
            "{}",
            SaleError::PerTxLimitExceeded(self.sale.max_per_tx)
        );

        let price_yocto = self.sale.quote_from(self.sale.minted_count, quantity);
        self.collect_payment_and_mint(buyer_id, quantity, price_yocto)
    }

    // Admin mint for giveaways and the team stash. Free of charge and
    // indifferent to the phase switches and per-transaction limits, but
    // it cannot take the collection past the overall capacity.
    pub fn reserve_apes(&mut self, receiver_id: AccountId, quantity: U64) -> Vec<TokenId> {
        self.assert_role(&env::predecessor_account_id(), Role::Admin);

        let quantity = quantity.0;
        assert!(
            self.sale.fits_under(quantity, self.sale.second_public_supply),
            "{}",
            SaleError::SupplyExceeded
        );

        self.internal_mint_batch(&receiver_id, quantity)
    }
}

impl Contract {
    // Shared tail of the paid entry points. Checks the attached deposit
    // against the quoted price, mints, accrues exactly the quoted amount
    // and sends any surplus straight back to the buyer.
    fn collect_payment_and_mint(
        &mut self,
        buyer_id: AccountId,
        quantity: u64,
        price_yocto: Balance,
    ) -> Vec<TokenId> {
        let attached_yocto = env::attached_deposit();
        assert!(
            attached_yocto >= price_yocto,
            "{}",
            SaleError::InsufficientPayment {
                required_yocto: price_yocto,
                attached_yocto,
            }
        );

        let token_ids = self.internal_mint_batch(&buyer_id, quantity);
        self.sale_proceeds_yocto += price_yocto;

        let surplus_yocto = attached_yocto - price_yocto;
        if surplus_yocto > 0 {
            Promise::new(buyer_id).transfer(surplus_yocto);
        }

        token_ids
    }
}
