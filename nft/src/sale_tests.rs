#[cfg(test)]
mod sale_tests {
    use crate::constants::*;
    use crate::*;
    use near_sdk::json_types::U64;
    use near_sdk::test_utils::VMContextBuilder;
    use near_sdk::{testing_env, AccountId, VMContext};

    const CONTRACT_ACCOUNT_ID: &str = "eayc.testnet";
    const ADMIN_ACCOUNT_ID: &str = "admin.eayc.testnet";
    const FIRST_BENEFICIARY_ACCOUNT_ID: &str = "treasury.eayc.testnet";
    const SECOND_BENEFICIARY_ACCOUNT_ID: &str = "studio.eayc.testnet";
    const MALICIOUS_ACCOUNT_ID: &str = "malicious.testnet";
    const LISTED_ACCOUNT_ID: &str = "earlybird1.testnet";
    const OTHER_LISTED_ACCOUNT_ID: &str = "earlybird2.testnet";
    const LATE_ACCOUNT_ID: &str = "latecomer.testnet";

    /*
     * admin gate assertions
     */

    #[test]
    #[should_panic(expected = r#"Only accounts holding the Admin role can do this"#)]
    fn test_update_private_mint_sale_requires_admin() {
        let context = test_get_context(ADMIN_ACCOUNT_ID);
        testing_env!(context);
        let mut contract = test_contract();

        let context = test_get_context(MALICIOUS_ACCOUNT_ID);
        testing_env!(context);
        contract.update_private_mint_sale(true);
    }

    #[test]
    #[should_panic(expected = r#"Only accounts holding the Admin role can do this"#)]
    fn test_update_public_mint_sale_requires_admin() {
        let context = test_get_context(ADMIN_ACCOUNT_ID);
        testing_env!(context);
        let mut contract = test_contract();

        let context = test_get_context(MALICIOUS_ACCOUNT_ID);
        testing_env!(context);
        contract.update_public_mint_sale(true);
    }

    #[test]
    #[should_panic(expected = r#"Only accounts holding the Admin role can do this"#)]
    fn test_update_sale_amount_requires_admin() {
        let context = test_get_context(ADMIN_ACCOUNT_ID);
        testing_env!(context);
        let mut contract = test_contract();

        let context = test_get_context(MALICIOUS_ACCOUNT_ID);
        testing_env!(context);
        contract.update_sale_amount(U64(2000), U64(6000), U64(12000));
    }

    #[test]
    #[should_panic(expected = r#"Only accounts holding the Admin role can do this"#)]
    fn test_update_white_list_requires_admin() {
        let context = test_get_context(ADMIN_ACCOUNT_ID);
        testing_env!(context);
        let mut contract = test_contract();

        let context = test_get_context(MALICIOUS_ACCOUNT_ID);
        testing_env!(context);
        contract.update_white_list(vec![AccountId::new_unchecked(
            MALICIOUS_ACCOUNT_ID.to_string(),
        )]);
    }

    #[test]
    fn test_has_role() {
        let context = test_get_context(ADMIN_ACCOUNT_ID);
        testing_env!(context);
        let contract = test_contract();

        assert!(contract.has_role(
            &AccountId::new_unchecked(ADMIN_ACCOUNT_ID.to_string()),
            Role::Admin
        ));
        assert!(!contract.has_role(
            &AccountId::new_unchecked(MALICIOUS_ACCOUNT_ID.to_string()),
            Role::Admin
        ));
    }

    /*
     * capacity update assertions
     */

    #[test]
    #[should_panic(expected = r#"Capacities must be non-decreasing"#)]
    fn test_update_sale_amount_rejects_decreasing_thresholds() {
        let context = test_get_context(ADMIN_ACCOUNT_ID);
        testing_env!(context);
        let mut contract = test_contract();

        contract.update_sale_amount(U64(1000), U64(500), U64(10000));
    }

    #[test]
    fn test_update_sale_amount_replaces_all_capacities() {
        let context = test_get_context(ADMIN_ACCOUNT_ID);
        testing_env!(context);
        let mut contract = test_contract();

        contract.update_sale_amount(U64(2000), U64(6000), U64(12000));

        let config = contract.sale_config();
        assert_eq!(config.max_private_supply.0, 2000);
        assert_eq!(config.first_public_supply.0, 6000);
        assert_eq!(config.second_public_supply.0, 12000);
    }

    /*
     * white list assertions
     */

    #[test]
    fn test_white_list_empty_by_default() {
        let context = test_get_context(ADMIN_ACCOUNT_ID);
        testing_env!(context);
        let contract = test_contract();

        assert!(!contract.is_white_listed(AccountId::new_unchecked(
            LISTED_ACCOUNT_ID.to_string()
        )));
        assert!(contract.white_listed_accounts(None, None).is_empty());
    }

    #[test]
    fn test_update_white_list_replaces_wholesale() {
        let context = test_get_context(ADMIN_ACCOUNT_ID);
        testing_env!(context);
        let mut contract = test_contract();

        contract.update_white_list(vec![
            AccountId::new_unchecked(LISTED_ACCOUNT_ID.to_string()),
            AccountId::new_unchecked(OTHER_LISTED_ACCOUNT_ID.to_string()),
        ]);
        assert!(contract.is_white_listed(AccountId::new_unchecked(
            LISTED_ACCOUNT_ID.to_string()
        )));

        // the next update carries a different list, the first account
        // loses its spot
        contract.update_white_list(vec![
            AccountId::new_unchecked(OTHER_LISTED_ACCOUNT_ID.to_string()),
            AccountId::new_unchecked(LATE_ACCOUNT_ID.to_string()),
        ]);
        assert!(!contract.is_white_listed(AccountId::new_unchecked(
            LISTED_ACCOUNT_ID.to_string()
        )));
        assert!(contract.is_white_listed(AccountId::new_unchecked(
            OTHER_LISTED_ACCOUNT_ID.to_string()
        )));
        assert!(contract.is_white_listed(AccountId::new_unchecked(
            LATE_ACCOUNT_ID.to_string()
        )));
        assert_eq!(contract.white_listed_accounts(None, None).len(), 2);
    }

    #[test]
    fn test_white_listed_accounts_pagination() {
        let context = test_get_context(ADMIN_ACCOUNT_ID);
        testing_env!(context);
        let mut contract = test_contract();

        contract.update_white_list(vec![
            AccountId::new_unchecked("w0.testnet".to_string()),
            AccountId::new_unchecked("w1.testnet".to_string()),
            AccountId::new_unchecked("w2.testnet".to_string()),
            AccountId::new_unchecked("w3.testnet".to_string()),
            AccountId::new_unchecked("w4.testnet".to_string()),
        ]);

        let page = contract.white_listed_accounts(Some(near_sdk::json_types::U128(2)), Some(2));
        assert_eq!(
            page,
            vec![
                AccountId::new_unchecked("w2.testnet".to_string()),
                AccountId::new_unchecked("w3.testnet".to_string()),
            ]
        );
    }

    /*
     * sale view assertions
     */

    #[test]
    fn test_sale_config_defaults() {
        let context = test_get_context(ADMIN_ACCOUNT_ID);
        testing_env!(context);
        let contract = test_contract();

        let config = contract.sale_config();
        assert_eq!(config.max_private_supply.0, 1000);
        assert_eq!(config.first_public_supply.0, 5000);
        assert_eq!(config.second_public_supply.0, 10000);
        assert_eq!(config.presale_mint_price_yocto.0, PRESALE_MINT_PRICE_YOCTO);
        assert_eq!(
            config.first_public_mint_price_yocto.0,
            FIRST_PUBLIC_MINT_PRICE_YOCTO
        );
        assert_eq!(
            config.second_public_mint_price_yocto.0,
            SECOND_PUBLIC_MINT_PRICE_YOCTO
        );
        assert!(!config.private_mint_active);
        assert!(!config.public_mint_active);
        assert_eq!(config.max_per_presale_tx.0, 3);
        assert_eq!(config.max_per_tx.0, 30);
        assert_eq!(config.minted_count.0, 0);
        assert_eq!(
            config.first_beneficiary_id,
            AccountId::new_unchecked(FIRST_BENEFICIARY_ACCOUNT_ID.to_string())
        );
        assert_eq!(
            config.second_beneficiary_id,
            AccountId::new_unchecked(SECOND_BENEFICIARY_ACCOUNT_ID.to_string())
        );
        assert_eq!(contract.sale_proceeds().0, 0);
    }

    #[test]
    fn test_phase_flags_are_independent() {
        let context = test_get_context(ADMIN_ACCOUNT_ID);
        testing_env!(context);
        let mut contract = test_contract();

        contract.update_private_mint_sale(true);
        contract.update_public_mint_sale(true);
        let config = contract.sale_config();
        assert!(config.private_mint_active);
        assert!(config.public_mint_active);

        // flipping one switch leaves the other alone
        contract.update_private_mint_sale(false);
        let config = contract.sale_config();
        assert!(!config.private_mint_active);
        assert!(config.public_mint_active);
    }

    /*
     * helpers
     */

    fn test_get_context(predecessor: &str) -> VMContext {
        let account_id = AccountId::new_unchecked(predecessor.to_string());
        VMContextBuilder::new()
            .current_account_id(AccountId::new_unchecked(CONTRACT_ACCOUNT_ID.to_string()))
            .predecessor_account_id(account_id.clone())
            .signer_account_id(account_id)
            .build()
    }

    fn test_contract() -> Contract {
        Contract::new_default_meta(
            AccountId::new_unchecked(ADMIN_ACCOUNT_ID.to_string()),
            AccountId::new_unchecked(FIRST_BENEFICIARY_ACCOUNT_ID.to_string()),
            AccountId::new_unchecked(SECOND_BENEFICIARY_ACCOUNT_ID.to_string()),
        )
    }
}
