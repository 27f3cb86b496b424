// Infrastructure adapters implementing the application ports

pub mod http_client;

pub use http_client::ReqwestStoreClient;
