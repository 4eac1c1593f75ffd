use crate::constants::*;
use crate::*;
use near_sdk::json_types::{U128, U64};

#[cfg(test)]
#[path = "sale_tests.rs"]
mod sale_tests;

// Which sale stage a mint entry point belongs to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SalePhase {
    Private,
    Public,
}

impl SalePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SalePhase::Private => "private",
            SalePhase::Public => "public",
        }
    }
}

// The whole sale machine state: cumulative capacity thresholds, unit
// prices, phase switches, per-transaction limits and the count of tokens
// minted so far. minted_count doubles as the next token ID, it only ever
// grows and it grows for private, public and reserve mints alike.
#[derive(BorshDeserialize, BorshSerialize)]
pub struct SaleState {
    pub max_private_supply: u64,
    pub first_public_supply: u64,
    pub second_public_supply: u64,
    pub presale_mint_price_yocto: Balance,
    pub first_public_mint_price_yocto: Balance,
    pub second_public_mint_price_yocto: Balance,
    pub private_mint_active: bool,
    pub public_mint_active: bool,
    pub max_per_presale_tx: u64,
    pub max_per_tx: u64,
    pub minted_count: u64,
}

impl SaleState {
    pub(crate) fn new() -> Self {
        SaleState {
            max_private_supply: MAX_PRIVATE_SUPPLY,
            first_public_supply: FIRST_PUBLIC_SUPPLY,
            second_public_supply: SECOND_PUBLIC_SUPPLY,
            presale_mint_price_yocto: PRESALE_MINT_PRICE_YOCTO,
            first_public_mint_price_yocto: FIRST_PUBLIC_MINT_PRICE_YOCTO,
            second_public_mint_price_yocto: SECOND_PUBLIC_MINT_PRICE_YOCTO,
            private_mint_active: false,
            public_mint_active: false,
            max_per_presale_tx: MAX_PER_PRESALE_TX,
            max_per_tx: MAX_PER_TX,
            minted_count: 0,
        }
    }

    // Whether `quantity` more tokens stay within `cap`. Quantities large
    // enough to wrap the counter never fit.
    pub(crate) fn fits_under(&self, quantity: u64, cap: u64) -> bool {
        self.minted_count
            .checked_add(quantity)
            .map_or(false, |minted_after| minted_after <= cap)
    }
}

// What view calls get when asking about the sale.
#[derive(Serialize, Deserialize)]
#[serde(crate = "near_sdk::serde")]
pub struct JsonSaleConfig {
    pub max_private_supply: U64,
    pub first_public_supply: U64,
    pub second_public_supply: U64,
    pub presale_mint_price_yocto: U128,
    pub first_public_mint_price_yocto: U128,
    pub second_public_mint_price_yocto: U128,
    pub private_mint_active: bool,
    pub public_mint_active: bool,
    pub max_per_presale_tx: U64,
    pub max_per_tx: U64,
    pub minted_count: U64,
    pub first_beneficiary_id: AccountId,
    pub second_beneficiary_id: AccountId,
}

#[near_bindgen]
impl Contract {
    pub fn update_private_mint_sale(&mut self, active: bool) {
        self.assert_role(&env::predecessor_account_id(), Role::Admin);
        self.sale.private_mint_active = active;
    }

    pub fn update_public_mint_sale(&mut self, active: bool) {
        self.assert_role(&env::predecessor_account_id(), Role::Admin);
        self.sale.public_mint_active = active;
    }

    // replaces all three capacity thresholds at once, there is no way to
    // change just one of them
    pub fn update_sale_amount(
        &mut self,
        max_private_supply: U64,
        first_public_supply: U64,
        second_public_supply: U64,
    ) {
        self.assert_role(&env::predecessor_account_id(), Role::Admin);

        let max_private_supply = max_private_supply.0;
        let first_public_supply = first_public_supply.0;
        let second_public_supply = second_public_supply.0;
        assert!(
            max_private_supply <= first_public_supply
                && first_public_supply <= second_public_supply,
            "Capacities must be non-decreasing"
        );

        self.sale.max_private_supply = max_private_supply;
        self.sale.first_public_supply = first_public_supply;
        self.sale.second_public_supply = second_public_supply;
    }

    // replaces the white list wholesale, accounts missing from the new
    // list lose their eligibility
    pub fn update_white_list(&mut self, accounts: Vec<AccountId>) {
        self.assert_role(&env::predecessor_account_id(), Role::Admin);

        self.white_list.clear();
        for account_id in accounts.iter() {
            self.white_list.insert(account_id);
        }
    }

    pub fn is_white_listed(&self, account_id: AccountId) -> bool {
        self.white_list.contains(&account_id)
    }

    pub fn white_listed_accounts(
        &self,
        from_index: Option<U128>,
        limit: Option<u64>,
    ) -> Vec<AccountId> {
        let keys = self.white_list.as_vector();
        let start = u128::from(from_index.unwrap_or(U128(0))) as usize;
        let count = limit.unwrap_or(10) as usize;
        keys.iter().skip(start).take(count).collect()
    }

    pub fn sale_config(&self) -> JsonSaleConfig {
        JsonSaleConfig {
            max_private_supply: U64(self.sale.max_private_supply),
            first_public_supply: U64(self.sale.first_public_supply),
            second_public_supply: U64(self.sale.second_public_supply),
            presale_mint_price_yocto: U128(self.sale.presale_mint_price_yocto),
            first_public_mint_price_yocto: U128(self.sale.first_public_mint_price_yocto),
            second_public_mint_price_yocto: U128(self.sale.second_public_mint_price_yocto),
            private_mint_active: self.sale.private_mint_active,
            public_mint_active: self.sale.public_mint_active,
            max_per_presale_tx: U64(self.sale.max_per_presale_tx),
            max_per_tx: U64(self.sale.max_per_tx),
            minted_count: U64(self.sale.minted_count),
            first_beneficiary_id: self.first_beneficiary_id.clone(),
            second_beneficiary_id: self.second_beneficiary_id.clone(),
        }
    }

    pub fn sale_proceeds(&self) -> U128 {
        U128(self.sale_proceeds_yocto)
    }
}
