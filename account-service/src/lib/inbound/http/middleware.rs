use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use crate::authentication::ports::AuthServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Middleware that validates bearer tokens and adds the caller to request extensions.
///
/// A missing or malformed `Authorization` header yields 401, an invalid or
/// expired token 403. Either way the wrapped handler is not invoked.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // A header that is not valid UTF-8 counts as malformed
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let caller = state.auth_service.authorize(authorization).map_err(|rejection| {
        tracing::debug!(reason = %rejection, "Request rejected");
        ApiError::from(rejection)
    })?;

    req.extensions_mut().insert(caller);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use auth::Authenticator;
    use auth::Principal;
    use axum::body::Body;
    use axum::http::Request;
    use axum::http::StatusCode;
    use chrono::Duration;
    use chrono::Utc;
    use tower::ServiceExt;

    use crate::authentication::service::AuthService;
    use crate::domain::user::service::UserService;
    use crate::inbound::http::router::create_router;
    use crate::outbound::repositories::InMemoryUserRepository;

    fn app() -> (axum::Router, Arc<Authenticator>) {
        let authenticator = Arc::new(Authenticator::with_hasher(
            auth::PasswordHasher::with_cost(1).unwrap(),
            b"test_secret_key_at_least_32_bytes!",
            Duration::hours(1),
        ));
        let repository = Arc::new(InMemoryUserRepository::new());

        let router = create_router(
            Arc::new(AuthService::new(
                Arc::clone(&repository),
                Arc::clone(&authenticator),
            )),
            Arc::new(UserService::new(repository, Arc::clone(&authenticator))),
        );

        (router, authenticator)
    }

    fn list_users(authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/users");
        if let Some(value) = authorization {
            builder = builder.header("Authorization", value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_missing_header_is_unauthorized() {
        let (router, _) = app();

        let response = router.oneshot(list_users(None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_wrong_scheme_is_unauthorized() {
        let (router, _) = app();

        let response = router
            .oneshot(list_users(Some("Token abc")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_expired_token_is_forbidden() {
        let (router, authenticator) = app();
        let principal = Principal {
            id: 1,
            identifier: "a@x.com".to_string(),
        };
        let token = authenticator
            .token_service()
            .issue_at(&principal, Utc::now() - Duration::minutes(61))
            .unwrap();

        let response = router
            .oneshot(list_users(Some(&format!("Bearer {}", token))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_valid_token_reaches_handler() {
        let (router, authenticator) = app();
        let principal = Principal {
            id: 1,
            identifier: "a@x.com".to_string(),
        };
        let token = authenticator.issue_token(&principal).unwrap();

        let response = router
            .oneshot(list_users(Some(&format!("Bearer {}", token))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["data"]["count"], 0);
    }
}
