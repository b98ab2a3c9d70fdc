//! HTTP client pipeline: transport, interceptors and the typed API.

mod case_api;
mod client;
mod interceptor;
#[cfg(any(test, feature = "test-support"))]
mod scripted;
mod transport;

pub use case_api::HttpCaseApi;
pub use client::ApiClient;
pub use interceptor::{
    AuthRedirectInterceptor, PathPrefixRedirectPolicy, RedirectPolicy, ResponseInterceptor,
};
pub use reqwest::Method;
#[cfg(any(test, feature = "test-support"))]
pub use scripted::ScriptedTransport;
pub use transport::{HttpRequest, HttpTransport, RawResponse, ReqwestTransport, TransportError};
