use serde_json::Value;

use crate::Result;

/// The registry API as seen by command modules.
pub trait ApiClient {
    /// POST `body` to `path`, authenticated with `token`, returning the
    /// response body.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::Api`](crate::RuntimeError::Api) carrying the
    /// server's message.
    fn post(&self, token: &str, path: &str, body: &Value) -> Result<Value>;
}
