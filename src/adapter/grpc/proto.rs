//! Protobuf messages and server plumbing for `compte.v1` (see `proto/compte.proto`).
//!
//! Written out in the shape tonic-build emits so the crate builds without `protoc`.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AccountType {
    Current = 0,
    Savings = 1,
}

impl AccountType {
    /// Protobuf enum value name, e.g. `CURRENT`.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            AccountType::Current => "CURRENT",
            AccountType::Savings => "SAVINGS",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "CURRENT" => Some(Self::Current),
            "SAVINGS" => Some(Self::Savings),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Account {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(double, tag = "2")]
    pub balance: f64,
    #[prost(string, tag = "3")]
    pub creation_date: ::prost::alloc::string::String,
    /// Wire field `type`
    #[prost(enumeration = "AccountType", tag = "4")]
    pub account_type: i32,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct ListAccountsRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListAccountsResponse {
    #[prost(message, repeated, tag = "1")]
    pub accounts: ::prost::alloc::vec::Vec<Account>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetAccountByIdRequest {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetAccountByIdResponse {
    #[prost(message, optional, tag = "1")]
    pub account: ::core::option::Option<Account>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct GetAccountsByTypeRequest {
    #[prost(enumeration = "AccountType", tag = "1")]
    pub account_type: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetAccountsByTypeResponse {
    #[prost(message, repeated, tag = "1")]
    pub accounts: ::prost::alloc::vec::Vec<Account>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct DeleteAccountRequest {
    #[prost(int64, tag = "1")]
    pub id: i64,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct DeleteAccountResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SaveAccountRequest {
    #[prost(message, optional, tag = "1")]
    pub account: ::core::option::Option<Account>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SaveAccountResponse {
    #[prost(message, optional, tag = "1")]
    pub account: ::core::option::Option<Account>,
}

pub mod compte_service_server {
    #![allow(unused_variables, dead_code, clippy::let_unit_value)]
    use tonic::codegen::*;

    pub const SERVICE_NAME: &str = "compte.v1.CompteService";

    #[async_trait]
    pub trait CompteService: std::marker::Send + std::marker::Sync + 'static {
        async fn list_accounts(
            &self,
            request: tonic::Request<super::ListAccountsRequest>,
        ) -> std::result::Result<tonic::Response<super::ListAccountsResponse>, tonic::Status>;

        async fn get_account_by_id(
            &self,
            request: tonic::Request<super::GetAccountByIdRequest>,
        ) -> std::result::Result<tonic::Response<super::GetAccountByIdResponse>, tonic::Status>;

        async fn get_accounts_by_type(
            &self,
            request: tonic::Request<super::GetAccountsByTypeRequest>,
        ) -> std::result::Result<tonic::Response<super::GetAccountsByTypeResponse>, tonic::Status>;

        async fn delete_account(
            &self,
            request: tonic::Request<super::DeleteAccountRequest>,
        ) -> std::result::Result<tonic::Response<super::DeleteAccountResponse>, tonic::Status>;

        async fn save_account(
            &self,
            request: tonic::Request<super::SaveAccountRequest>,
        ) -> std::result::Result<tonic::Response<super::SaveAccountResponse>, tonic::Status>;
    }

    #[derive(Debug)]
    pub struct CompteServiceServer<T> {
        inner: Arc<T>,
    }

    impl<T> CompteServiceServer<T> {
        pub fn new(inner: T) -> Self {
            Self::from_arc(Arc::new(inner))
        }

        pub fn from_arc(inner: Arc<T>) -> Self {
            Self { inner }
        }
    }

    impl<T> Clone for CompteServiceServer<T> {
        fn clone(&self) -> Self {
            Self {
                inner: self.inner.clone(),
            }
        }
    }

    /// Expands to the future serving one unary method.
    macro_rules! unary_route {
        ($inner:expr, $req:expr, $svc:ident, $method:ident, $request:ident, $response:ident) => {{
            struct $svc<T: CompteService>(pub Arc<T>);

            impl<T: CompteService> tonic::server::UnaryService<super::$request> for $svc<T> {
                type Response = super::$response;
                type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;

                fn call(&mut self, request: tonic::Request<super::$request>) -> Self::Future {
                    let inner = Arc::clone(&self.0);
                    let fut = async move { <T as CompteService>::$method(&inner, request).await };
                    Box::pin(fut)
                }
            }

            let inner = $inner;
            let req = $req;
            let fut = async move {
                let method = $svc(inner);
                let codec = tonic::codec::ProstCodec::default();
                let mut grpc = tonic::server::Grpc::new(codec);
                let res = grpc.unary(method, req).await;
                Ok(res)
            };
            Box::pin(fut)
        }};
    }

    impl<T, B> tonic::codegen::Service<http::Request<B>> for CompteServiceServer<T>
    where
        T: CompteService,
        B: Body + std::marker::Send + 'static,
        B::Error: Into<StdError> + std::marker::Send + 'static,
    {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = std::convert::Infallible;
        type Future = BoxFuture<Self::Response, Self::Error>;

        fn poll_ready(
            &mut self,
            _cx: &mut Context<'_>,
        ) -> Poll<std::result::Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, req: http::Request<B>) -> Self::Future {
            match req.uri().path() {
                "/compte.v1.CompteService/ListAccounts" => unary_route!(
                    self.inner.clone(),
                    req,
                    ListAccountsSvc,
                    list_accounts,
                    ListAccountsRequest,
                    ListAccountsResponse
                ),
                "/compte.v1.CompteService/GetAccountById" => unary_route!(
                    self.inner.clone(),
                    req,
                    GetAccountByIdSvc,
                    get_account_by_id,
                    GetAccountByIdRequest,
                    GetAccountByIdResponse
                ),
                "/compte.v1.CompteService/GetAccountsByType" => unary_route!(
                    self.inner.clone(),
                    req,
                    GetAccountsByTypeSvc,
                    get_accounts_by_type,
                    GetAccountsByTypeRequest,
                    GetAccountsByTypeResponse
                ),
                "/compte.v1.CompteService/DeleteAccount" => unary_route!(
                    self.inner.clone(),
                    req,
                    DeleteAccountSvc,
                    delete_account,
                    DeleteAccountRequest,
                    DeleteAccountResponse
                ),
                "/compte.v1.CompteService/SaveAccount" => unary_route!(
                    self.inner.clone(),
                    req,
                    SaveAccountSvc,
                    save_account,
                    SaveAccountRequest,
                    SaveAccountResponse
                ),
                _ => Box::pin(async move {
                    let mut response = http::Response::new(empty_body());
                    let headers = response.headers_mut();
                    headers.insert(
                        http::header::HeaderName::from_static("grpc-status"),
                        http::header::HeaderValue::from(tonic::Code::Unimplemented as i32),
                    );
                    headers.insert(
                        http::header::CONTENT_TYPE,
                        http::header::HeaderValue::from_static("application/grpc"),
                    );
                    Ok(response)
                }),
            }
        }
    }

    impl<T> tonic::server::NamedService for CompteServiceServer<T> {
        const NAME: &'static str = SERVICE_NAME;
    }
}
