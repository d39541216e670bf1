//! Withdraw the FundMe balance to the owner on a Casper network.
//!
//! Usage:
//!   cargo run --bin withdraw --release
//!
//! Uses the same .env as `deploy_livenet`; the signing key must be the owner's.
//! Exits with 0 on success and 1 on any error.

use std::error::Error;

use odra::host::HostRefLoader;

use fund_me::config::ToolConfig;
use fund_me::deployments::DeploymentRecord;
use fund_me_contracts::fund_me::FundMe;

fn main() {
    dotenv::dotenv().ok();

    match run() {
        Ok(()) => std::process::exit(0),
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = ToolConfig::from_env()?;
    let record = DeploymentRecord::load(&config.deployments_dir, &config.chain_name)?;

    let env = odra_casper_livenet_env::env();
    env.set_gas(config.payment_amount);

    let mut fund_me = FundMe::load(&env, record.fund_me_address()?);
    println!("Withdrawing....");
    fund_me
        .try_withdraw()
        .map_err(|error| format!("withdraw reverted: {:?}", error))?;
    println!("Got it back!");

    Ok(())
}
