use crate::cli::Args;
use axum::http::header::{
    ACCESS_CONTROL_REQUEST_HEADERS, ACCESS_CONTROL_REQUEST_METHOD, CONTENT_TYPE, ORIGIN, REFERER,
    USER_AGENT,
};
use axum::http::{HeaderName, Method};
use tower_http::cors::CorsLayer;

pub fn layer(args: &Args) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(args.allowed_origins.clone())
        .allow_headers([
            USER_AGENT,
            HeaderName::from_static("sec-fetch-mode"),
            REFERER,
            ORIGIN,
            ACCESS_CONTROL_REQUEST_METHOD,
            ACCESS_CONTROL_REQUEST_HEADERS,
            CONTENT_TYPE,
            HeaderName::from_static("passcode"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}
