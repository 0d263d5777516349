// gateway/src/context.rs
use std::time::Duration;

/// Everything a request needs from the environment, injected explicitly.
/// The CSRF token travels on every mutating request; nothing in the gateway
/// reads ambient state.
#[derive(Clone, Debug)]
pub struct RequestContext {
    pub base_url: String,
    pub csrf_token: String,
    pub timeout: Duration,
}

impl RequestContext {
    pub fn new(base_url: impl Into<String>, csrf_token: impl Into<String>) -> Self {
        RequestContext {
            base_url: base_url.into(),
            csrf_token: csrf_token.into(),
            timeout: Duration::from_secs(15),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_join_tolerates_slashes() {
        let ctx = RequestContext::new("http://clinic.local/api/", "tok");
        assert_eq!(
            ctx.url_for("/appointments/3"),
            "http://clinic.local/api/appointments/3"
        );
        assert_eq!(
            ctx.url_for("patients"),
            "http://clinic.local/api/patients"
        );
    }
}
