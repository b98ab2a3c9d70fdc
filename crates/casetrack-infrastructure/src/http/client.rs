//! Generic request function shared by every endpoint.

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use casetrack_core::error::ApiError;
use casetrack_core::model::Envelope;

use super::interceptor::ResponseInterceptor;
use super::transport::{HttpRequest, HttpTransport, RawResponse};

/// Sends requests relative to a base URL and normalizes failures into
/// [`ApiError`].
///
/// - 2xx: the body is returned verbatim (`Value::Null` when empty).
/// - non-2xx: the server's error object, or the generic error when the body
///   is absent or not an object.
/// - transport failure: the generic error.
///
/// Interceptors see every response before the result is returned. There
/// are no retries.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
            interceptors: Vec::new(),
        }
    }

    /// Appends an interceptor stage; stages run in insertion order.
    pub fn with_interceptor(mut self, interceptor: Arc<dyn ResponseInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let request = HttpRequest::new(method, format!("{}{}", self.base_url, path), body);
        tracing::debug!(method = %request.method, url = %request.url, "Sending request");

        let response = match self.transport.send(request.clone()).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(url = %request.url, error = %e, "Request failed before a response");
                return Err(ApiError::generic());
            }
        };

        for interceptor in &self.interceptors {
            interceptor.on_response(&request, &response);
        }

        Self::into_result(&request, response)
    }

    fn into_result(request: &HttpRequest, response: RawResponse) -> Result<Value, ApiError> {
        if response.is_success() {
            return Ok(response.body.unwrap_or(Value::Null));
        }
        let error = ApiError::from_response(response.status, response.body);
        tracing::warn!(
            url = %request.url,
            status = response.status,
            message = %error.message,
            "Server rejected request"
        );
        Err(error)
    }

    /// Sends and decodes the body into a typed envelope.
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Envelope<T>, ApiError> {
        let raw = self.request(method, path, body).await?;
        Envelope::decode(raw)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>, ApiError> {
        self.call(Method::GET, path, None).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>, ApiError> {
        self.call(Method::DELETE, path, None).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<Envelope<T>, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.call(Method::POST, path, Some(to_body(body)?)).await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<Envelope<T>, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.call(Method::PATCH, path, Some(to_body(body)?)).await
    }
}

fn to_body<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| {
        tracing::warn!(error = %e, "Failed to encode request body");
        ApiError::generic()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::interceptor::AuthRedirectInterceptor;
    use crate::http::scripted::ScriptedTransport;
    use crate::navigator::InMemoryNavigator;
    use casetrack_core::navigation::{NavigationMode, Navigator};
    use serde_json::json;

    fn client_at(path: &str, transport: Arc<ScriptedTransport>) -> (ApiClient, Arc<InMemoryNavigator>) {
        let navigator = Arc::new(InMemoryNavigator::new(path));
        let client = ApiClient::new("http://api.test", transport).with_interceptor(Arc::new(
            AuthRedirectInterceptor::with_default_policy(navigator.clone()),
        ));
        (client, navigator)
    }

    #[tokio::test]
    async fn test_success_body_returned_verbatim() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.respond(Method::GET, "/api/firs/user-firs", 200, json!({"data": [1, 2, 3]}));
        let (client, _) = client_at("/complainant/dashboard", transport.clone());

        let body = client.request(Method::GET, "/api/firs/user-firs", None).await.unwrap();
        assert_eq!(body, json!({"data": [1, 2, 3]}));
        assert_eq!(transport.requests()[0].url, "http://api.test/api/firs/user-firs");
    }

    #[tokio::test]
    async fn test_empty_success_body_is_null() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.respond_raw(Method::DELETE, "/api/firs/7", 204, None);
        let (client, _) = client_at("/officer/dashboard", transport);

        let body = client.request(Method::DELETE, "/api/firs/7", None).await.unwrap();
        assert_eq!(body, Value::Null);
    }

    #[tokio::test]
    async fn test_error_without_body_is_generic() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.respond_raw(Method::GET, "/api/stations?q=", 503, None);
        let (client, _) = client_at("/officer/dashboard", transport);

        let err = client.request(Method::GET, "/api/stations?q=", None).await.unwrap_err();
        assert_eq!(
            err.payload,
            json!({"message": "Something went wrong", "success": false, "statusCode": 500})
        );
    }

    #[tokio::test]
    async fn test_server_error_payload_surfaces() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.respond(
            Method::POST,
            "/api/firs",
            400,
            json!({"message": "Complainant not found", "success": false, "statusCode": 400}),
        );
        let (client, navigator) = client_at("/officer/dashboard/register-fir", transport);

        let err = client
            .request(Method::POST, "/api/firs", Some(json!({})))
            .await
            .unwrap_err();
        assert_eq!(err.message, "Complainant not found");
        assert_eq!(err.status_code, 400);
        assert!(navigator.history().is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_is_generic() {
        let transport = Arc::new(ScriptedTransport::new());
        let (client, _) = client_at("/", transport);

        let err = client.request(Method::GET, "/api/unscripted", None).await.unwrap_err();
        assert_eq!(err, ApiError::generic());
    }

    #[tokio::test]
    async fn test_401_on_officer_path_redirects_to_officer_login() {
        let transport = Arc::new(ScriptedTransport::new());
        let unauthorized = json!({"message": "Unauthorized", "success": false, "statusCode": 401});
        transport.respond(Method::GET, "/api/officers/user", 401, unauthorized.clone());
        let (client, navigator) = client_at("/officer/dashboard/profile", transport);

        let err = client.request(Method::GET, "/api/officers/user", None).await.unwrap_err();
        assert_eq!(err.payload, unauthorized);
        assert_eq!(navigator.current_path(), "/officer/login");
        assert_eq!(
            navigator.history(),
            vec![("/officer/login".to_string(), NavigationMode::FullLoad)]
        );
    }

    #[tokio::test]
    async fn test_401_elsewhere_redirects_to_root() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.respond_raw(Method::GET, "/api/firs/user-firs", 401, None);
        let (client, navigator) = client_at("/complainant/dashboard", transport);

        let err = client.request(Method::GET, "/api/firs/user-firs", None).await.unwrap_err();
        assert_eq!(err, ApiError::generic());
        assert_eq!(navigator.current_path(), "/");
    }

    #[tokio::test]
    async fn test_typed_decode() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.respond(
            Method::GET,
            "/api/crime/crime-types",
            200,
            json!({"data": [{"type_id": "1", "name": "Theft"}], "success": true}),
        );
        let (client, _) = client_at("/officer/dashboard", transport);

        let env: Envelope<Vec<casetrack_core::model::CrimeType>> =
            client.get("/api/crime/crime-types").await.unwrap();
        let items = env.into_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Theft");
    }
}
