use crate::*;
use url::Url;

// Token numbers are dense: the first token minted is 0, the next one 1
// and so on, with no gaps.
pub type TokenId = u64;

#[derive(BorshDeserialize, BorshSerialize, Serialize, Deserialize, Clone)]
#[serde(crate = "near_sdk::serde")]
pub struct NftContractMetadata {
    pub spec: String,              // required, essentially a version like "nft-1.0.0"
    pub name: String,              // required, ex. "Excited Ape Yacht Club"
    pub symbol: String,            // required, ex. "EAPE"
    pub icon: Option<String>,      // Data URL
    pub base_uri: Option<String>,  // Centralized gateway known to have reliable access to decentralized storage assets
    pub reference: Option<String>, // URL to a JSON file with more info
    pub reference_hash: Option<Base64VecU8>, // Base64-encoded sha256 hash of JSON from reference field. Required if `reference` is included.
}

#[derive(BorshDeserialize, BorshSerialize)]
pub struct Token {
    // owner of the token
    pub owner_id: AccountId,
    // list of approved accounts and their approval IDs
    pub approved_account_ids: HashMap<AccountId, u64>,
    // the next approval ID to give out
    pub next_approval_id: u64,
}

//The Json token is what will be returned from view calls.
#[derive(Serialize, Deserialize)]
#[serde(crate = "near_sdk::serde")]
pub struct JsonToken {
    //token ID
    pub token_id: TokenId,
    //owner of the token
    pub owner_id: AccountId,
    //where the token media lives, None until the base URI has been set
    pub token_uri: Option<String>,
    //list of approved accounts and their approval IDs
    pub approved_account_ids: HashMap<AccountId, u64>,
}

pub trait NonFungibleTokenMetadata {
    //view call for returning the contract metadata
    fn nft_metadata(&self) -> NftContractMetadata;
}

#[near_bindgen]
impl NonFungibleTokenMetadata for Contract {
    fn nft_metadata(&self) -> NftContractMetadata {
        self.metadata.get().unwrap()
    }
}

#[near_bindgen]
impl Contract {
    // The media is revealed by pointing the whole collection at a
    // gateway, individual tokens carry no stored metadata.
    pub fn set_base_uri(&mut self, base_uri: String) {
        self.assert_role(&env::predecessor_account_id(), Role::Admin);
        assert!(Url::parse(&base_uri).is_ok(), "Base URI is invalid");

        let mut metadata = self.metadata.get().unwrap();
        metadata.base_uri = Some(base_uri);
        self.metadata.set(&metadata);
    }

    pub fn nft_token_uri(&self, token_id: TokenId) -> Option<String> {
        assert!(
            self.tokens_by_id.get(&token_id).is_some(),
            "Token does not exist"
        );
        self.internal_token_uri(token_id)
    }
}

impl Contract {
    // base URI followed by the token number, None while unrevealed
    pub(crate) fn internal_token_uri(&self, token_id: TokenId) -> Option<String> {
        self.metadata
            .get()
            .unwrap()
            .base_uri
            .map(|base_uri| format!("{}{}", base_uri, token_id))
    }
}
