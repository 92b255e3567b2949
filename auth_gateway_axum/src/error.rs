use auth_gateway::GatewayError;
use http::StatusCode;

/// Helper trait for converting errors to a standard response error format
pub(super) trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

/// Every gateway failure is reported to the browser client as a 400 carrying
/// the error message.
impl<T> IntoResponseError<T> for Result<T, GatewayError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))
    }
}
