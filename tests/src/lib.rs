//! FundMe Integration Tests
//!
//! Multi-account scenarios against the ledger and the mock price feed.

#[cfg(test)]
mod tests {
    use fund_me_contracts::errors::FundMeError;
    use fund_me_contracts::fund_me::{FundMe, FundMeHostRef, FundMeInitArgs};
    use fund_me_contracts::price_feed::{
        MockV3Aggregator, MockV3AggregatorInitArgs, DECIMALS, INITIAL_ANSWER,
    };
    use odra::casper_types::{U256, U512};
    use odra::host::{Deployer, HostEnv, HostRef};
    use odra::prelude::{Address, Addressable};
    use pretty_assertions::assert_eq;

    /// 1 CSPR in motes
    const SEND_VALUE: u64 = 1_000_000_000;

    fn deploy_ledger(env: &HostEnv) -> FundMeHostRef {
        let feed = MockV3Aggregator::deploy(
            env,
            MockV3AggregatorInitArgs {
                decimals: DECIMALS,
                initial_answer: U256::from(INITIAL_ANSWER),
            },
        );
        FundMe::deploy(
            env,
            FundMeInitArgs {
                price_feed: feed.address().clone(),
            },
        )
    }

    /// Accounts 1..=5 each fund once
    fn fund_from_five(env: &HostEnv, fund_me: &FundMeHostRef) -> Vec<Address> {
        let funders: Vec<Address> = (1..6).map(|i| env.get_account(i)).collect();
        for funder in &funders {
            env.set_caller(*funder);
            fund_me.with_tokens(U512::from(SEND_VALUE)).fund();
        }
        env.set_caller(env.get_account(0));
        funders
    }

    #[test]
    fn test_withdraw_with_multiple_funders() {
        let env = odra_test::env();
        let mut fund_me = deploy_ledger(&env);
        let deployer = env.get_account(0);
        let funders = fund_from_five(&env, &fund_me);

        let starting_contract_balance = fund_me.get_balance();
        let starting_deployer_balance = env.balance_of(&deployer);
        assert_eq!(starting_contract_balance, U512::from(SEND_VALUE * 5));

        fund_me.withdraw();

        assert_eq!(fund_me.get_balance(), U512::zero());
        assert_eq!(
            env.balance_of(&deployer),
            starting_deployer_balance + starting_contract_balance
        );
        assert_eq!(fund_me.try_get_funder(0), Err(FundMeError::IndexOutOfRange.into()));
        for funder in funders {
            assert_eq!(fund_me.get_address_to_amount_funded(funder), U512::zero());
        }
    }

    #[test]
    fn test_cheaper_withdraw_with_multiple_funders() {
        let env = odra_test::env();
        let mut fund_me = deploy_ledger(&env);
        let deployer = env.get_account(0);
        let funders = fund_from_five(&env, &fund_me);

        let starting_contract_balance = fund_me.get_balance();
        let starting_deployer_balance = env.balance_of(&deployer);

        fund_me.cheaper_withdraw();

        assert_eq!(fund_me.get_balance(), U512::zero());
        assert_eq!(
            env.balance_of(&deployer),
            starting_deployer_balance + starting_contract_balance
        );
        assert_eq!(fund_me.get_funder_count(), 0);
        for funder in funders {
            assert_eq!(fund_me.get_address_to_amount_funded(funder), U512::zero());
        }
    }

    #[test]
    fn test_funder_attempting_withdraw_keeps_balances() {
        let env = odra_test::env();
        let mut fund_me = deploy_ledger(&env);
        let funders = fund_from_five(&env, &fund_me);

        env.set_caller(funders[2]);
        assert_eq!(fund_me.try_withdraw(), Err(FundMeError::Unauthorized.into()));
        assert_eq!(fund_me.try_cheaper_withdraw(), Err(FundMeError::Unauthorized.into()));

        assert_eq!(fund_me.get_balance(), U512::from(SEND_VALUE * 5));
        assert_eq!(fund_me.get_funder_count(), 5);
        for (index, funder) in funders.iter().enumerate() {
            assert_eq!(fund_me.get_address_to_amount_funded(*funder), U512::from(SEND_VALUE));
            assert_eq!(fund_me.get_funder(index as u32), *funder);
        }
    }

    #[test]
    fn test_funder_order_is_chronological() {
        let env = odra_test::env();
        let fund_me = deploy_ledger(&env);
        let first = env.get_account(3);
        let second = env.get_account(1);

        for funder in [first, second, first] {
            env.set_caller(funder);
            fund_me.with_tokens(U512::from(SEND_VALUE)).fund();
        }

        assert_eq!(fund_me.get_funder_count(), 3);
        assert_eq!(fund_me.get_funder(0), first);
        assert_eq!(fund_me.get_funder(1), second);
        assert_eq!(fund_me.get_funder(2), first);
        assert_eq!(fund_me.get_address_to_amount_funded(first), U512::from(SEND_VALUE * 2));
    }

    #[test]
    fn test_records_sum_to_held_balance() {
        let env = odra_test::env();
        let fund_me = deploy_ledger(&env);
        let amounts = [25_000_000u64, SEND_VALUE, 3 * SEND_VALUE, 40_000_000, SEND_VALUE];

        for (i, amount) in amounts.iter().enumerate() {
            env.set_caller(env.get_account(1 + i % 3));
            fund_me.with_tokens(U512::from(*amount)).fund();
        }

        let recorded = (1..4)
            .map(|i| fund_me.get_address_to_amount_funded(env.get_account(i)))
            .fold(U512::zero(), |acc, amount| acc + amount);
        assert_eq!(recorded, fund_me.get_balance());
        assert_eq!(recorded, U512::from(amounts.iter().sum::<u64>()));
    }

    /// Both withdrawal paths leave identical state and pay out the same amount
    #[test]
    fn test_withdraw_variants_are_equivalent() {
        let env = odra_test::env();
        let deployer = env.get_account(0);
        let mut plain = deploy_ledger(&env);
        let mut cheaper = deploy_ledger(&env);

        // Same funding history, including a repeat contributor
        let history = [(1, SEND_VALUE), (2, 2 * SEND_VALUE), (1, 30_000_000), (4, SEND_VALUE)];
        for ledger in [&plain, &cheaper] {
            for (account, amount) in history {
                env.set_caller(env.get_account(account));
                ledger.with_tokens(U512::from(amount)).fund();
            }
        }
        env.set_caller(deployer);

        let before_plain = env.balance_of(&deployer);
        plain.withdraw();
        let plain_payout = env.balance_of(&deployer) - before_plain;

        let before_cheaper = env.balance_of(&deployer);
        cheaper.cheaper_withdraw();
        let cheaper_payout = env.balance_of(&deployer) - before_cheaper;

        assert_eq!(plain_payout, cheaper_payout);
        assert_eq!(plain_payout, U512::from(4 * SEND_VALUE + 30_000_000));
        assert_eq!(plain.get_funder_count(), cheaper.get_funder_count());
        assert_eq!(plain.get_balance(), cheaper.get_balance());
        for account in [1, 2, 4] {
            let funder = env.get_account(account);
            assert_eq!(
                plain.get_address_to_amount_funded(funder),
                cheaper.get_address_to_amount_funded(funder)
            );
        }
    }
}
