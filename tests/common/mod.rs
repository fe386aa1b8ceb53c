#![allow(dead_code)]

use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tinylink::api::handlers::redirect_handler;
use tinylink::api::routes::api_routes;
use tinylink::application::services::Registry;
use tinylink::state::AppState;
use tinylink::utils::code_generator::CodeGenerator;

pub const BASE_URL: &str = "https://s.example.com";

/// Generator yielding a fixed sequence of codes, for exact assertions.
pub struct SequenceCodeGenerator {
    codes: Mutex<VecDeque<String>>,
}

impl SequenceCodeGenerator {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: Mutex::new(codes.iter().map(|c| c.to_string()).collect()),
        }
    }
}

impl CodeGenerator for SequenceCodeGenerator {
    fn generate(&self) -> String {
        self.codes
            .lock()
            .unwrap()
            .pop_front()
            .expect("code sequence exhausted")
    }
}

/// State with random codes and a fixed public base URL.
pub fn create_test_state() -> AppState {
    AppState::new(
        Arc::new(Registry::with_random_codes()),
        Some(BASE_URL.to_string()),
        false,
    )
}

/// State whose registry mints exactly `codes`, in order.
pub fn create_test_state_with_codes(codes: &[&str]) -> AppState {
    AppState::new(
        Arc::new(Registry::new(Arc::new(SequenceCodeGenerator::new(codes)))),
        Some(BASE_URL.to_string()),
        false,
    )
}

/// Router with the redirect route and the whole JSON API.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .nest("/api", api_routes())
        .with_state(state)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(create_app(state)).unwrap()
}

/// Extracts the code from a `{base}/{code}` short URL.
pub fn code_of(short_url: &str) -> String {
    short_url.rsplit('/').next().unwrap().to_string()
}
