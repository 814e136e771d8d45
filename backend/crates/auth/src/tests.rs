//! Unit tests for auth crate

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use crate::application::{
        AuthConfig, CheckAccessUseCase, DeleteUserUseCase, RefreshUseCase, SignInInput,
        SignInUseCase, SignUpInput, SignUpUseCase,
    };
    use crate::domain::value_object::user_role::UserRole;
    use crate::error::AuthError;
    use crate::infra::memory::InMemoryUserRepository;

    const PASSWORD: &str = "Correct#Horse9Battery";

    fn setup() -> (Arc<InMemoryUserRepository>, Arc<AuthConfig>) {
        let config = AuthConfig::with_random_secret().with_admin_emails(["Boss@Example.com"]);
        (Arc::new(InMemoryUserRepository::new()), Arc::new(config))
    }

    async fn register(repo: &Arc<InMemoryUserRepository>, config: &Arc<AuthConfig>, email: &str) {
        SignUpUseCase::new(repo.clone(), config.clone())
            .execute(SignUpInput {
                email: email.into(),
                password: PASSWORD.into(),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_sign_up_assigns_roles() {
        let (repo, config) = setup();
        let use_case = SignUpUseCase::new(repo.clone(), config.clone());

        let candidate = use_case
            .execute(SignUpInput {
                email: "cand@example.com".into(),
                password: PASSWORD.into(),
            })
            .await
            .unwrap();
        assert_eq!(candidate.role, UserRole::Candidate);

        let admin = use_case
            .execute(SignUpInput {
                email: "boss@example.com".into(),
                password: PASSWORD.into(),
            })
            .await
            .unwrap();
        assert_eq!(admin.role, UserRole::Admin);
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn test_sign_up_rejects_duplicates_and_weak_passwords() {
        let (repo, config) = setup();
        register(&repo, &config, "dup@example.com").await;

        let use_case = SignUpUseCase::new(repo.clone(), config.clone());
        let dup = use_case
            .execute(SignUpInput {
                email: "DUP@example.com".into(),
                password: PASSWORD.into(),
            })
            .await;
        assert!(matches!(dup, Err(AuthError::EmailTaken)));

        let weak = use_case
            .execute(SignUpInput {
                email: "weak@example.com".into(),
                password: "password123".into(),
            })
            .await;
        assert!(matches!(weak, Err(AuthError::PasswordPolicy(_))));
    }

    #[tokio::test]
    async fn test_sign_in_and_check_access() {
        let (repo, config) = setup();
        register(&repo, &config, "cand@example.com").await;

        let pair = SignInUseCase::new(repo.clone(), config.clone())
            .execute(SignInInput {
                email: "cand@example.com".into(),
                password: PASSWORD.into(),
            })
            .await
            .unwrap();

        let check = CheckAccessUseCase::new(config.clone());
        let principal = check.execute(Some(&pair.access_token)).unwrap();
        assert_eq!(principal.email, "cand@example.com");
        assert!(!principal.is_admin);

        assert!(matches!(
            check.execute_admin(Some(&pair.access_token)),
            Err(AuthError::AdminRequired)
        ));
        assert!(matches!(check.execute(None), Err(AuthError::TokenMissing)));
        assert!(matches!(
            check.execute(Some(&pair.refresh_token)),
            Err(AuthError::WrongTokenKind)
        ));
    }

    #[tokio::test]
    async fn test_sign_in_wrong_password() {
        let (repo, config) = setup();
        register(&repo, &config, "cand@example.com").await;

        let result = SignInUseCase::new(repo.clone(), config.clone())
            .execute(SignInInput {
                email: "cand@example.com".into(),
                password: "Wrong#Horse9Battery".into(),
            })
            .await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));

        let unknown = SignInUseCase::new(repo, config)
            .execute(SignInInput {
                email: "nobody@example.com".into(),
                password: PASSWORD.into(),
            })
            .await;
        assert!(matches!(unknown, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_refresh_requires_existing_user() {
        let (repo, config) = setup();
        register(&repo, &config, "gone@example.com").await;

        let pair = SignInUseCase::new(repo.clone(), config.clone())
            .execute(SignInInput {
                email: "gone@example.com".into(),
                password: PASSWORD.into(),
            })
            .await
            .unwrap();

        let refresh = RefreshUseCase::new(repo.clone(), config.clone());
        assert!(refresh.execute(&pair.refresh_token).await.is_ok());
        assert!(matches!(
            refresh.execute(&pair.access_token).await,
            Err(AuthError::WrongTokenKind)
        ));

        DeleteUserUseCase::new(repo.clone())
            .execute("gone@example.com")
            .await
            .unwrap();
        assert!(matches!(
            refresh.execute(&pair.refresh_token).await,
            Err(AuthError::UserGone)
        ));
    }

    #[tokio::test]
    async fn test_delete_user_is_idempotent() {
        let (repo, config) = setup();
        register(&repo, &config, "del@example.com").await;

        let use_case = DeleteUserUseCase::new(repo.clone());
        assert_eq!(use_case.execute("del@example.com").await.unwrap(), 1);
        assert_eq!(use_case.execute("del@example.com").await.unwrap(), 0);
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_delete_user_database_failure() {
        let (repo, _) = setup();
        repo.set_unavailable(true);
        let result = DeleteUserUseCase::new(repo).execute("a@example.com").await;
        assert!(matches!(result, Err(AuthError::Database(_))));
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::AuthError;
    use kernel::error::{app_error::AppError, kind::ErrorKind};

    #[test]
    fn test_error_kinds() {
        assert_eq!(AuthError::InvalidCredentials.kind(), ErrorKind::Unauthorized);
        assert_eq!(AuthError::TokenExpired.kind(), ErrorKind::Unauthorized);
        assert_eq!(AuthError::AdminRequired.kind(), ErrorKind::Forbidden);
        assert_eq!(AuthError::EmailTaken.kind(), ErrorKind::Conflict);
        assert_eq!(
            AuthError::InvalidEmail("Email is required".into()).kind(),
            ErrorKind::BadRequest
        );
        assert_eq!(
            AuthError::Internal("x".into()).kind(),
            ErrorKind::InternalServerError
        );
    }

    #[test]
    fn test_conversion_keeps_client_message() {
        let app: AppError = AuthError::InvalidEmail("Invalid email format".into()).into();
        assert_eq!(app.status_code(), 400);
        assert_eq!(app.message(), "Invalid email format");
    }

    #[test]
    fn test_database_error_carries_detail() {
        let app: AppError = AuthError::Database(sqlx::Error::PoolTimedOut).into();
        assert_eq!(app.status_code(), 500);
        assert!(app.detail().is_some());
    }
}

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::middleware::from_fn_with_state;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::application::AuthConfig;
    use crate::infra::memory::InMemoryUserRepository;
    use crate::presentation::middleware::{AuthGuardState, require_admin};
    use crate::presentation::router::{admin_router, auth_router};

    const PASSWORD: &str = "Correct#Horse9Battery";

    fn app(repo: Arc<InMemoryUserRepository>) -> Router {
        let config =
            Arc::new(AuthConfig::with_random_secret().with_admin_emails(["admin@example.com"]));
        let guard = AuthGuardState::new(config.clone());

        Router::new()
            .nest("/api/auth", auth_router(repo.clone(), config.clone()))
            .nest(
                "/api/admin",
                admin_router(repo, config).route_layer(from_fn_with_state(guard, require_admin)),
            )
    }

    async fn send(app: &Router, method: &str, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let response = app
            .clone()
            .oneshot(builder.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn login(app: &Router, email: &str) -> String {
        let creds = json!({ "email": email, "password": PASSWORD });
        let (status, _) = send(app, "POST", "/api/auth/register", None, creds.clone()).await;
        assert_eq!(status, StatusCode::OK);
        let (status, body) = send(app, "POST", "/api/auth/login", None, creds).await;
        assert_eq!(status, StatusCode::OK);
        body["data"]["accessToken"].as_str().unwrap().to_owned()
    }

    #[tokio::test]
    async fn test_register_envelope() {
        let app = app(Arc::new(InMemoryUserRepository::new()));
        let (status, body) = send(
            &app,
            "POST",
            "/api/auth/register",
            None,
            json!({ "email": "New@Example.com", "password": PASSWORD }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["email"], "new@example.com");
        assert_eq!(body["data"]["role"], "candidate");
    }

    #[tokio::test]
    async fn test_login_failure_envelope() {
        let app = app(Arc::new(InMemoryUserRepository::new()));
        let (status, body) = send(
            &app,
            "POST",
            "/api/auth/login",
            None,
            json!({ "email": "x@example.com", "password": PASSWORD }),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Invalid email or password");
    }

    #[tokio::test]
    async fn test_delete_user_by_admin() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let app = app(repo.clone());
        let admin_token = login(&app, "admin@example.com").await;
        login(&app, "victim@example.com").await;

        let payload = json!({ "email": "victim@example.com" });
        let (status, body) =
            send(&app, "DELETE", "/api/admin/delete-user", Some(&admin_token), payload.clone()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["deletedCount"], 1);

        let (status, body) =
            send(&app, "DELETE", "/api/admin/delete-user", Some(&admin_token), payload).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["deletedCount"], 0);
    }

    #[tokio::test]
    async fn test_delete_user_guarded() {
        let app = app(Arc::new(InMemoryUserRepository::new()));
        let payload = json!({ "email": "victim@example.com" });

        let (status, body) =
            send(&app, "DELETE", "/api/admin/delete-user", None, payload.clone()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);

        let candidate = login(&app, "cand@example.com").await;
        let (status, _) =
            send(&app, "DELETE", "/api/admin/delete-user", Some(&candidate), payload).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_delete_user_validation_and_failure() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let app = app(repo.clone());
        let admin_token = login(&app, "admin@example.com").await;

        let (status, body) = send(
            &app,
            "DELETE",
            "/api/admin/delete-user",
            Some(&admin_token),
            json!({ "mail": "typo" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);

        repo.set_unavailable(true);
        let (status, body) = send(
            &app,
            "DELETE",
            "/api/admin/delete-user",
            Some(&admin_token),
            json!({ "email": "a@example.com" }),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Failed to delete user");
        assert!(body["error"].is_string());
    }
}
