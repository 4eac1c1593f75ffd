use crate::*;

// Deposits
pub const NO_DEPOSIT: Balance = 0;

// Sale parameters installed at deployment. The capacities can later be
// replaced through update_sale_amount, the prices and per-tx limits are
// fixed for the lifetime of the drop.
pub const MAX_PRIVATE_SUPPLY: u64 = 1000;
pub const FIRST_PUBLIC_SUPPLY: u64 = 5000;
pub const SECOND_PUBLIC_SUPPLY: u64 = 10000;

pub const PRESALE_MINT_PRICE_YOCTO: u128 = 42_000_000_000_000_000_000_000; // 0.042 Near
pub const FIRST_PUBLIC_MINT_PRICE_YOCTO: u128 = 69_000_000_000_000_000_000_000; // 0.069 Near
pub const SECOND_PUBLIC_MINT_PRICE_YOCTO: u128 = 80_000_000_000_000_000_000_000; // 0.08 Near

pub const MAX_PER_PRESALE_TX: u64 = 3;
pub const MAX_PER_TX: u64 = 30;

// share of withdrawn proceeds going to the first beneficiary; the second
// beneficiary always receives the exact remainder
pub const FIRST_BENEFICIARY_SHARE_PERCENT: u128 = 20;
