use axum::{Router, routing::get};

pub mod health;
pub mod tasks;
pub mod users;

use crate::state::AppState;

/// API routes without the `/api` prefix; `create_router` adds it.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/tasks", tasks::router(state))
        .nest("/users", users::router(state))
}

/// `/ready`, with state applied so it merges into the stateless app router.
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{app_info, server::ServerConfig};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn in_memory_state() -> AppState {
        AppState {
            config: Config {
                app: app_info!(),
                server: ServerConfig::default(),
                environment: Environment::Development,
                database: None,
                run_migrations: false,
            },
            db: None,
        }
    }

    fn app() -> Router {
        let state = in_memory_state();
        axum_helpers::create_router::<crate::openapi::ApiDoc>(
            routes(&state),
            &state.config.server,
            &state.config.environment,
        )
        .unwrap()
        .merge(axum_helpers::health_router(state.config.app))
        .merge(ready_router(state))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_tasks_and_users_mounted_under_api() {
        let app = app();

        let request = Request::post("/api/users")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({"name": "Test User", "email": "test@example.com"}).to_string(),
            ))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let request = Request::post("/api/tasks")
            .header("content-type", "application/json")
            .body(Body::from(json!({"title": "Test Task", "assigned_to": 1}).to_string()))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(Request::get("/api/tasks?owner=1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await.as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_in_memory_is_always_ready() {
        let response = app()
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ready");
    }

    #[tokio::test]
    async fn test_health_reports_app_identity() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["name"], "taskflow_api");
    }

    #[tokio::test]
    async fn test_openapi_lists_domain_paths() {
        let response = app()
            .oneshot(Request::get("/api-docs/openapi.json").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let spec = body_json(response).await;
        assert!(spec["paths"]["/tasks/{id}"].is_object());
        assert!(spec["paths"]["/users/search"].is_object());
    }
}
