//! gRPC layer for the account service

pub mod proto;

use std::sync::Arc;

use common::model::account::AccountEntity;
use tonic::{Request, Response, Status};
use tracing::{debug, info_span, warn, Instrument};

use crate::service::AccountService;
use proto::accounts_service_server::{AccountsService, AccountsServiceServer};
use proto::{
    Account, CreateAccountRequest, CreateAccountResponse, GetAccountRequest, GetAccountResponse,
};

/// `accounts.v1.AccountsService` backed by an [`AccountService`]
#[derive(Clone)]
pub struct AccountsGrpcService {
    service: Arc<AccountService>,
}

impl AccountsGrpcService {
    pub fn new(service: Arc<AccountService>) -> Self {
        Self { service }
    }

    /// Wrap into the tonic server type for registration with a router
    pub fn into_server(self) -> AccountsServiceServer<Self> {
        AccountsServiceServer::new(self)
    }
}

fn account_to_proto(entity: AccountEntity) -> Account {
    Account {
        account_number: entity.account_number,
        currency: entity.currency,
    }
}

#[tonic::async_trait]
impl AccountsService for AccountsGrpcService {
    async fn create_account(
        &self,
        request: Request<CreateAccountRequest>,
    ) -> Result<Response<CreateAccountResponse>, Status> {
        let req = request.into_inner();
        let span = info_span!("grpc_request", rpc = "CreateAccount");

        async move {
            match self.service.create_account(&req.user_id, &req.currency).await {
                Ok(entity) => {
                    debug!("CreateAccount succeeded for user {}", entity.user_id);
                    Ok(Response::new(CreateAccountResponse {
                        account: Some(account_to_proto(entity)),
                    }))
                }
                Err(e) => {
                    warn!("CreateAccount failed: {}", e);
                    Err(Status::from(e))
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn get_account(
        &self,
        request: Request<GetAccountRequest>,
    ) -> Result<Response<GetAccountResponse>, Status> {
        let req = request.into_inner();
        let span = info_span!("grpc_request", rpc = "GetAccount");

        async move {
            match self.service.get_account(&req.user_id).await {
                Ok(account) => {
                    debug!(
                        "GetAccount for user {} found account: {}",
                        req.user_id,
                        account.is_some()
                    );
                    Ok(Response::new(GetAccountResponse {
                        account: account.map(account_to_proto),
                    }))
                }
                Err(e) => {
                    warn!("GetAccount failed: {}", e);
                    Err(Status::from(e))
                }
            }
        }
        .instrument(span)
        .await
    }
}
