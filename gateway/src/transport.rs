// gateway/src/transport.rs
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Method;
use serde_json::Value;

use crate::context::RequestContext;
use crate::errors::{GatewayError, GatewayResult};

/// The single seam between the typed clients and the wire. Production uses
/// `HttpTransport`; tests swap in `testing::StubTransport`.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn get(&self, path: &str) -> GatewayResult<Value>;
    /// POST/PUT/DELETE with an optional JSON body. Mutating verbs carry the
    /// CSRF token.
    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> GatewayResult<Value>;
}

pub struct HttpTransport {
    ctx: RequestContext,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(ctx: RequestContext) -> GatewayResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(ctx.timeout)
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        Ok(HttpTransport { ctx, client })
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> GatewayResult<Value> {
        let url = self.ctx.url_for(path);
        debug!("{} {}", method, url);

        let mut request = self.client.request(method.clone(), &url);
        if method != Method::GET {
            request = request.header("X-CSRF-Token", &self.ctx.csrf_token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| {
            warn!("{} {} failed: {}", method, url, e);
            GatewayError::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} {} -> HTTP {}", method, url, status.as_u16());
            return Err(GatewayError::Status {
                code: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn get(&self, path: &str) -> GatewayResult<Value> {
        self.request(Method::GET, path, None).await
    }

    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> GatewayResult<Value> {
        self.request(method, path, body).await
    }
}
