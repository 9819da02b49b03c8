use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt;
use tradebook_server::{api::app_router, build_state, config::Config};

fn app() -> Router {
    let config = Config::default();
    let state = build_state(&config).unwrap();
    app_router(state, &config)
}

async fn page(app: &Router, request: Request<Body>) -> String {
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn submit(app: &Router, action: &str, form: &str) -> String {
    page(
        app,
        Request::builder()
            .method("POST")
            .uri(format!("/actions/{}", action))
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap(),
    )
    .await
}

#[tokio::test]
async fn index_renders_both_sections() {
    let app = app();
    let html = page(&app, Request::builder().uri("/").body(Body::empty()).unwrap()).await;

    assert!(html.contains("<h1>Simple Account Management</h1>"));
    assert!(html.contains("<h2>Account Actions</h2>"));
    assert!(html.contains("<h2>Account Summary</h2>"));
    assert!(html.contains("<pre id=\"balance\">$10000.00</pre>"));
    assert!(html.contains("<pre id=\"holdings\">No holdings</pre>"));
    assert!(html.contains("<pre id=\"profit-loss\">Profit/Loss: $0.00</pre>"));
    assert!(html.contains("<pre id=\"transactions\">No transactions</pre>"));
}

#[tokio::test]
async fn actions_update_status_and_summary() {
    let app = app();

    let html = submit(&app, "deposit", "amount=500").await;
    assert!(html.contains(
        "<pre id=\"deposit-status\">Deposit successful. New balance: $10500.00</pre>"
    ));
    assert!(html.contains("<pre id=\"balance\">$10500.00</pre>"));
    assert!(html.contains("<pre id=\"transactions\">Deposit: 500</pre>"));

    let html = submit(&app, "buy", "symbol=aapl&quantity=10").await;
    assert!(html
        .contains("<pre id=\"buy-status\">Buy order successful. New balance: $8800.00</pre>"));
    assert!(html.contains("<pre id=\"holdings\">AAPL: 10</pre>"));
    assert!(html.contains("<pre id=\"profit-loss\">Profit/Loss: $500.00</pre>"));
    assert!(html.contains("<pre id=\"deposit-status\"></pre>"));

    let html = submit(&app, "sell", "symbol=AAPL&quantity=5").await;
    assert!(html
        .contains("<pre id=\"sell-status\">Sell order successful. New balance: $9650.00</pre>"));
    assert!(html.contains(
        "<pre id=\"transactions\">Deposit: 500\nBuy: 10 AAPL @ 170.00\nSell: 5 AAPL @ 170.00</pre>"
    ));

    let html = submit(&app, "withdraw", "amount=100000").await;
    assert!(html.contains(
        "<pre id=\"withdraw-status\">Withdrawal failed. Insufficient funds or invalid amount.</pre>"
    ));
    assert!(html.contains("<pre id=\"balance\">$9650.00</pre>"));
}

#[tokio::test]
async fn invalid_inputs_report_failure() {
    let app = app();

    let html = submit(&app, "deposit", "amount=-5").await;
    assert!(html.contains("Deposit failed. Please enter a valid amount."));

    let html = submit(&app, "buy", "symbol=AAPL&quantity=abc").await;
    assert!(html.contains("Buy order failed. Insufficient funds or invalid quantity."));

    let html = submit(&app, "sell", "symbol=GOOGL&quantity=10").await;
    assert!(html.contains("Sell order failed. Insufficient shares or invalid quantity."));

    let html = submit(&app, "withdraw", "").await;
    assert!(html.contains("Withdrawal failed. Insufficient funds or invalid amount."));
    assert!(html.contains("<pre id=\"transactions\">No transactions</pre>"));
}

#[tokio::test]
async fn symbols_are_escaped_in_the_page() {
    let app = app();
    let html = submit(&app, "buy", "symbol=%3Cb%3E&quantity=1").await;
    assert!(html.contains("&lt;B&gt;: 1"));
    assert!(!html.contains("<B>"));
}
