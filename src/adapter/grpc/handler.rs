use super::error::{ApiError, INVALID_ACCOUNT_TYPE};
use super::mapper::{self, to_wire, to_wire_filtered, to_wire_normalized};
use super::proto::compte_service_server::CompteService;
use super::proto::{
    DeleteAccountRequest, DeleteAccountResponse, GetAccountByIdRequest, GetAccountByIdResponse,
    GetAccountsByTypeRequest, GetAccountsByTypeResponse, ListAccountsRequest,
    ListAccountsResponse, SaveAccountRequest, SaveAccountResponse,
};
use super::state::{AppState, SharedAccountService};
use crate::domain::error::DomainError;
use tonic::{Request, Response, Status};

/// gRPC request handler for `compte.v1.CompteService`.
///
/// Store calls are synchronous, so each one runs on the blocking pool.
pub struct CompteHandler {
    service: SharedAccountService,
}

impl CompteHandler {
    pub fn new(state: &AppState) -> Self {
        Self {
            service: state.account_service.clone(),
        }
    }

    async fn blocking<F, T>(&self, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&SharedAccountService) -> Result<T, ApiError> + Send + 'static,
        T: Send + 'static,
    {
        let service = self.service.clone();
        tokio::task::spawn_blocking(move || f(&service))
            .await
            .map_err(ApiError::internal)?
    }
}

fn reply<T>(operation: &str, result: Result<T, ApiError>) -> Result<Response<T>, Status> {
    match result {
        Ok(message) => Ok(Response::new(message)),
        Err(e) => {
            match &e {
                ApiError::Internal(_) => tracing::error!("{} failed: {}", operation, e),
                _ => tracing::debug!("{} rejected: {}", operation, e),
            }
            Err(e.into())
        }
    }
}

#[tonic::async_trait]
impl CompteService for CompteHandler {
    async fn list_accounts(
        &self,
        _request: Request<ListAccountsRequest>,
    ) -> Result<Response<ListAccountsResponse>, Status> {
        tracing::debug!("ListAccounts");

        let result = self
            .blocking(|service| Ok(service.find_all()?))
            .await
            .map(|accounts| ListAccountsResponse {
                accounts: to_wire_filtered(&accounts, to_wire),
            });

        reply("ListAccounts", result)
    }

    async fn get_account_by_id(
        &self,
        request: Request<GetAccountByIdRequest>,
    ) -> Result<Response<GetAccountByIdResponse>, Status> {
        let raw_id = request.into_inner().id;
        tracing::debug!("GetAccountById id={:?}", raw_id);

        // An unparseable id is reported as an internal fault, not as a bad argument.
        let result = match raw_id.parse::<i64>() {
            Ok(id) => {
                self.blocking(move |service| {
                    let account = service
                        .find_by_id(id)?
                        .ok_or_else(|| DomainError::NotFound(id.to_string()))?;
                    Ok(to_wire(&account)?)
                })
                .await
            }
            Err(e) => Err(ApiError::internal(e)),
        };

        reply(
            "GetAccountById",
            result.map(|account| GetAccountByIdResponse {
                account: Some(account),
            }),
        )
    }

    async fn get_accounts_by_type(
        &self,
        request: Request<GetAccountsByTypeRequest>,
    ) -> Result<Response<GetAccountsByTypeResponse>, Status> {
        let value = request.into_inner().account_type;
        tracing::debug!("GetAccountsByType type={}", value);

        let result = match mapper::type_from_wire(value) {
            Some(account_type) => {
                self.blocking(move |service| Ok(service.find_by_type(account_type.as_str())?))
                    .await
            }
            None => {
                tracing::debug!("GetAccountsByType unknown type value {}, nothing matches", value);
                Ok(Vec::new())
            }
        };

        reply(
            "GetAccountsByType",
            result.map(|accounts| GetAccountsByTypeResponse {
                accounts: to_wire_filtered(&accounts, to_wire_normalized),
            }),
        )
    }

    async fn delete_account(
        &self,
        request: Request<DeleteAccountRequest>,
    ) -> Result<Response<DeleteAccountResponse>, Status> {
        let id = request.into_inner().id;
        tracing::debug!("DeleteAccount id={}", id);

        let result = self
            .blocking(move |service| {
                if service.delete_by_id(id)? {
                    tracing::info!("Deleted account {}", id);
                    Ok(DeleteAccountResponse { success: true })
                } else {
                    Err(DomainError::NotFound(id.to_string()).into())
                }
            })
            .await;

        reply("DeleteAccount", result)
    }

    async fn save_account(
        &self,
        request: Request<SaveAccountRequest>,
    ) -> Result<Response<SaveAccountResponse>, Status> {
        tracing::debug!("SaveAccount");

        let account = request
            .into_inner()
            .account
            .ok_or_else(|| ApiError::InvalidArgument(INVALID_ACCOUNT_TYPE.to_string()))
            .and_then(mapper::from_wire);

        let result = match account {
            Ok(account) => {
                self.blocking(move |service| {
                    let saved = service.save(account)?;
                    tracing::info!("Saved account {:?}", saved.id);
                    Ok(to_wire(&saved)?)
                })
                .await
            }
            Err(e) => Err(e),
        };

        reply(
            "SaveAccount",
            result.map(|account| SaveAccountResponse {
                account: Some(account),
            }),
        )
    }
}
