//! Deploy FundMe to a Casper network using Odra livenet environment.
//!
//! Usage:
//!   cargo run --bin deploy_livenet --release
//!
//! Requires .env file with:
//!   ODRA_CASPER_LIVENET_SECRET_KEY_PATH=/path/to/secret_key.pem
//!   ODRA_CASPER_LIVENET_NODE_ADDRESS=https://node.testnet.casper.network
//!   ODRA_CASPER_LIVENET_CHAIN_NAME=casper-test
//!   ODRA_CASPER_LIVENET_PAYMENT_AMOUNT=200000000000
//!   FUND_ME_PRICE_FEED=hash-...   (not needed on development chains)

use std::error::Error;

use odra::casper_types::U256;
use odra::host::Deployer;
use odra::prelude::Addressable;

use fund_me::config::ToolConfig;
use fund_me::deployments::DeploymentRecord;
use fund_me::network::{resolve_price_feed, PriceFeedSource};
use fund_me_contracts::fund_me::{FundMe, FundMeInitArgs};
use fund_me_contracts::price_feed::{
    MockV3Aggregator, MockV3AggregatorInitArgs, DECIMALS, INITIAL_ANSWER,
};

fn main() {
    // Load environment from .env file
    dotenv::dotenv().ok();

    if let Err(error) = run() {
        eprintln!("Deployment failed: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = ToolConfig::from_env()?;
    let source = resolve_price_feed(&config.chain_name, config.price_feed.as_deref())?;

    println!("=== FundMe Livenet Deployment ({}) ===", config.chain_name);
    println!();

    let env = odra_casper_livenet_env::env();
    env.set_gas(config.payment_amount);

    let deployer = env.caller();
    println!("Deployer: {:?}", deployer);
    println!();

    // Price feed: mock on development chains, configured address elsewhere
    let (price_feed, mock_price_feed) = match source {
        PriceFeedSource::DeployMock => {
            println!("Development chain detected! Deploying mocks...");
            let feed = MockV3Aggregator::deploy(
                &env,
                MockV3AggregatorInitArgs {
                    decimals: DECIMALS,
                    initial_answer: U256::from(INITIAL_ANSWER),
                },
            );
            let feed_addr = feed.address().clone();
            println!("MockV3Aggregator deployed at: {:?}", feed_addr);
            (feed_addr, true)
        }
        PriceFeedSource::Existing(feed_addr) => {
            println!("Using price feed at: {:?}", feed_addr);
            (feed_addr, false)
        }
    };

    println!("Deploying FundMe...");
    let fund_me = FundMe::deploy(&env, FundMeInitArgs { price_feed });
    let fund_me_addr = fund_me.address().clone();
    println!("FundMe deployed at: {:?}", fund_me_addr);
    println!("----------------------------------------------------");

    let record = DeploymentRecord::new(
        &config.chain_name,
        fund_me_addr,
        price_feed,
        mock_price_feed,
    );
    let path = record.save(&config.deployments_dir)?;
    println!("Deployment record written to {}", path.display());

    Ok(())
}
