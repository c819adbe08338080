#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use cellsim_api::config::ServerConfig;
use cellsim_api::router::build_app_router;
use cellsim_api::state::AppState;
use cellsim_core::simulation::command::CommandTemplate;
use cellsim_core::simulation::Simulator;

/// Build a test `ServerConfig` whose simulator is `simulator_path`.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default).
pub fn test_config(simulator_path: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        simulator_path: simulator_path.to_string(),
        tee_program: "tee".to_string(),
    }
}

/// Build the full application router with all middleware layers, running
/// `simulator_path` as the simulator.
///
/// Uses [`build_app_router`] so tests exercise the production middleware
/// stack.
pub fn build_test_app(simulator_path: &str) -> Router {
    let config = test_config(simulator_path);
    let template = CommandTemplate::new(&config.simulator_path, &config.tee_program)
        .expect("valid template");
    let state = AppState {
        simulator: Arc::new(Simulator::new(template)),
    };
    build_app_router(state, &config)
}

/// App whose "simulator" is `/bin/sh`: the model reference is a script.
pub fn build_sh_app() -> Router {
    build_test_app("/bin/sh")
}

/// Write `body` as a model script into `dir` and return its path.
pub fn write_model_script(dir: &Path, body: &str) -> String {
    let path = dir.join("model.sh");
    std::fs::write(&path, body).expect("write script");
    path.to_str().expect("path").to_string()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
