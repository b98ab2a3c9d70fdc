//! IO side of casetrack: configuration, on-disk tab storage, and the HTTP
//! client that talks to the case server.

pub mod config;
pub mod http;
pub mod navigator;
pub mod paths;
pub mod storage;

pub use config::ClientConfig;
pub use http::{ApiClient, HttpCaseApi, ReqwestTransport};
pub use navigator::InMemoryNavigator;
pub use paths::CaseTrackPaths;
pub use storage::{FileTabStorage, MemoryTabStorage};
