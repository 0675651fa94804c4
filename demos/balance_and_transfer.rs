//! Balance, statement and transfer walkthrough.
//!
//! This example signs in to the BCA sandbox, reads two account balances,
//! prints a short statement and submits a small transfer.
//!
//! Run with: cargo run --example balance_and_transfer

use bca_rs::auth::SignIn;
use bca_rs::models::TransferRequestBuilder;
use bca_rs::{AccountNumber, BcaClient, ClientConfig, CorporateId, Credentials, Environment};
use chrono::Utc;
use rust_decimal_macros::dec;

fn var(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| panic!("{} environment variable required", name))
}

#[tokio::main]
async fn main() -> bca_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let client = BcaClient::new(
        Credentials::new(var("BCA_API_KEY"), var("BCA_API_SECRET")),
        ClientConfig::default().with_environment(Environment::Sandbox),
    )?;

    println!("Signing in to BCA sandbox...");

    match client.sign_in(&var("BCA_CLIENT_ID"), &var("BCA_CLIENT_SECRET")).await? {
        SignIn::Authenticated(token) => {
            println!("Signed in, token expires at {:?}", token.expires_at());
        }
        SignIn::UnexpectedResponse(body) => {
            println!("Token endpoint returned no token: {}", body);
            return Ok(());
        }
    }

    let corporate = CorporateId::new(var("BCA_CORPORATE_ID"));
    let source = AccountNumber::new(var("BCA_ACCOUNT_NUMBER"));
    let beneficiary = AccountNumber::new(var("BCA_ACCOUNT_NUMBER2"));

    // Balances
    let inquiry = client
        .balances()
        .get(&corporate, &[source.clone(), beneficiary.clone()])
        .await?;

    println!("\nBalances:");
    for detail in &inquiry.account_detail_data_success {
        println!(
            "  - {} {}: {:?} (available {:?})",
            detail.account_number,
            detail.currency.as_deref().unwrap_or("?"),
            detail.balance,
            detail.available_balance
        );
    }
    for failed in &inquiry.account_detail_data_failed {
        println!(
            "  ! {}: {}",
            failed.account_number.as_deref().unwrap_or("?"),
            failed.english.as_deref().unwrap_or("unknown error")
        );
    }

    // Statement
    let statement = client
        .statements()
        .get(&corporate, &source, "2016-08-29", Some("2016-09-01"))
        .await?;

    println!("\nStatement for {}:", source);
    for entry in &statement.data {
        println!(
            "  {} {:?} {:?} {}",
            entry.transaction_date.as_deref().unwrap_or("-"),
            entry.transaction_type,
            entry.transaction_amount,
            entry.transaction_name.as_deref().unwrap_or("")
        );
    }
    println!("  Net movement: {}", statement.net_movement());

    // Transfer
    let now = Utc::now();
    let request = TransferRequestBuilder::new()
        .corporate_id(corporate)
        .source_account(source)
        .beneficiary_account(beneficiary)
        .transaction_id(now.format("%H%M%S%y").to_string())
        .transaction_date(now.format("%Y-%m-%d").to_string())
        .reference_id(format!("{}/PO/2016", now.format("%M%S")))
        .amount(dec!(100000.00))
        .remark1("Transfer Test")
        .remark2("Online Transfer")
        .build()?;

    let receipt = client.transfers().transfer(&request).await?;
    println!(
        "\nTransfer {} status: {:?}",
        receipt.transaction_id.as_deref().unwrap_or("?"),
        receipt.status
    );

    println!("\nDone!");
    Ok(())
}
