use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;

use crate::transfer::FetchError;

impl FetchError {
    /// 502 when the playlist origin failed, 500 when this service did
    pub fn status_code(&self) -> StatusCode {
        if self.is_upstream() {
            StatusCode::BAD_GATEWAY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for FetchError {
    fn into_response(self) -> Response {
        error!("Failed to load playlist: {}", self);
        self.status_code().into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::transfer::FetchError;

    #[test]
    fn upstream_failures() {
        assert_eq!(
            FetchError::RequestNotSuccess(404).status_code(),
            StatusCode::BAD_GATEWAY
        );
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(
            FetchError::from(io).into_response().status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[tokio::test]
    async fn parse_task_failure() {
        let join_error = tokio::spawn(async { panic!("parse task died") })
            .await
            .unwrap_err();
        let e = FetchError::from(join_error);

        assert!(!e.is_upstream());
        assert_eq!(
            e.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
