// File: tests/end_to_end_tests.rs


use std::collections::HashSet;

use account_service::grpc::proto::{CreateAccountRequest, GetAccountRequest};
use test_helpers::ServerGuard;
use tonic::Code;

fn create(user_id: &str, currency: &str) -> CreateAccountRequest {
    CreateAccountRequest {
        user_id: user_id.to_string(),
        currency: currency.to_string(),
    }
}

fn get(user_id: &str) -> GetAccountRequest {
    GetAccountRequest {
        user_id: user_id.to_string(),
    }
}

#[tokio::test]
async fn test_create_and_get_over_the_wire() -> anyhow::Result<()> {
    let server = ServerGuard::start().await?;
    let mut client = server.client().await?;

    let created = client.create_account(create("1234", "EUR")).await?.into_inner();
    let account = created.account.expect("account in create response");
    assert_eq!(account.currency, "EUR");
    assert!(account.account_number.parse::<u64>().is_ok());

    let fetched = client.get_account(get("1234")).await?.into_inner();
    assert_eq!(fetched.account, Some(account));

    server.stop().await
}

#[tokio::test]
async fn test_unknown_user_over_the_wire() -> anyhow::Result<()> {
    let server = ServerGuard::start().await?;
    let mut client = server.client().await?;

    let fetched = client.get_account(get("nobody")).await?.into_inner();
    assert!(fetched.account.is_none());

    server.stop().await
}

#[tokio::test]
async fn test_validation_errors_over_the_wire() -> anyhow::Result<()> {
    let server = ServerGuard::start().await?;
    let mut client = server.client().await?;

    let status = client.create_account(create("", "EUR")).await.unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(status.message(), "invalid user_id");

    let status = client.create_account(create("1234", "")).await.unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(status.message(), "invalid currency");

    let status = client.get_account(get("")).await.unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(status.message(), "invalid user_id");

    server.stop().await
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_for_one_user() -> anyhow::Result<()> {
    let server = ServerGuard::start().await?;
    let client = server.client().await?;

    let mut handles = Vec::new();
    for i in 0..16 {
        let mut client = client.clone();
        handles.push(tokio::spawn(async move {
            let currency = format!("C{}", i);
            let response = client.create_account(create("shared", &currency)).await?;
            let account = response.into_inner().account.expect("account in create response");
            assert_eq!(account.currency, currency);
            Ok::<_, tonic::Status>(account)
        }));
    }

    let mut written = HashSet::new();
    for handle in handles {
        let account = handle.await??;
        written.insert((account.account_number, account.currency));
    }

    // Last writer wins: the stored account is one of the submitted ones, whole
    let mut client = client;
    let fetched = client.get_account(get("shared")).await?.into_inner();
    let account = fetched.account.expect("account after concurrent creates");
    assert!(written.contains(&(account.account_number, account.currency)));

    server.stop().await
}
