// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use serde_json::{Value, json};
use std::net::SocketAddr;

pub fn create_feed_body() -> Value {
    json!({
        "england-and-wales": {
            "division": "england-and-wales",
            "events": [
                { "title": "New Year’s Day", "date": "2024-01-01", "notes": "", "bunting": true },
                { "title": "Christmas Day", "date": "2024-12-25", "notes": "", "bunting": true },
                { "title": "Boxing Day", "date": "2024-12-26", "notes": "", "bunting": true }
            ]
        },
        "scotland": {
            "division": "scotland",
            "events": [
                { "title": "2nd January", "date": "2024-01-02", "notes": "", "bunting": true },
                { "title": "New Year’s Day", "date": "2024-01-01", "notes": "", "bunting": true }
            ]
        }
    })
}

/// Serves `router` on an ephemeral local port and returns the feed URL.
pub async fn serve(router: Router) -> String {
    let listener: tokio::net::TcpListener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/bank-holidays.json")
}

pub async fn serve_json(body: Value) -> String {
    serve(Router::new().route(
        "/bank-holidays.json",
        get(move || async move { axum::Json(body) }),
    ))
    .await
}

pub async fn serve_text(status: StatusCode, body: &'static str) -> String {
    serve(Router::new().route(
        "/bank-holidays.json",
        get(move || async move { (status, body) }),
    ))
    .await
}
