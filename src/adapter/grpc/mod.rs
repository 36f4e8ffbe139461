pub mod error;
pub mod handler;
pub mod mapper;
pub mod proto;
pub mod state;

pub use handler::CompteHandler;
pub use proto::compte_service_server::CompteServiceServer;
