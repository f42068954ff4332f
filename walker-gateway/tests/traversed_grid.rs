//! End-to-end tests of the traversal endpoint through the public router.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use tower::ServiceExt;
use walker_gateway::{
    config::GatewayConfig,
    routes::{create_router, GridBody, TRAVERSED_GRID_PATH},
};

async fn post(app: Router, body: String) -> (StatusCode, String) {
    let req = Request::builder()
        .method(Method::POST)
        .uri(TRAVERSED_GRID_PATH)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("request builds");
    let resp = app.oneshot(req).await.expect("router is infallible");
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body readable");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

fn grid_json(matrix: Vec<Vec<i32>>) -> String {
    serde_json::to_string(&GridBody::new(matrix)).expect("grid serializes")
}

#[tokio::test]
async fn six_by_six_grid_spirals_inward() {
    let matrix: Vec<Vec<i32>> = (0..6).map(|r| (0..6).map(|c| r * 6 + c).collect()).collect();
    let (status, body) = post(create_router(&GatewayConfig::default()), grid_json(matrix)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        "0, 1, 2, 3, 4, 5, 11, 17, 23, 29, 35, 34, 33, 32, 31, 30, 24, 18, 12, 6, 7, 8, 9, 10, \
         16, 22, 28, 27, 26, 25, 19, 13, 14, 15, 21, 20"
    );
}

#[tokio::test]
async fn success_body_is_plain_text() {
    let app = create_router(&GatewayConfig::default());
    let req = Request::builder()
        .method(Method::POST)
        .uri(TRAVERSED_GRID_PATH)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(grid_json(vec![vec![1]])))
        .expect("request builds");
    let resp = app.oneshot(req).await.expect("router is infallible");

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("text/plain"), "got {content_type}");
}

#[tokio::test]
async fn rejection_does_not_affect_next_request() {
    let app = create_router(&GatewayConfig::default());

    let (status, _) = post(app.clone(), grid_json(vec![vec![1, 2], vec![3]])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = post(app, grid_json(vec![vec![1, 2], vec![3, 4]])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "1, 2, 4, 3");
}

#[tokio::test]
async fn oversized_body_is_refused_before_parsing() {
    let mut config = GatewayConfig::default();
    config.max_body_bytes = 16;
    let app = create_router(&config);

    let (status, _) = post(app, grid_json(vec![(0..64).collect()])).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn concurrent_requests_are_independent() {
    let app = create_router(&GatewayConfig::default());
    let handles: Vec<_> = (1..=8)
        .map(|n| {
            let app = app.clone();
            tokio::spawn(async move {
                let row: Vec<i32> = (0..n).collect();
                let expected = row.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
                let (status, body) = post(app, grid_json(vec![row])).await;
                (status, body, expected)
            })
        })
        .collect();

    for handle in handles {
        let (status, body, expected) = handle.await.expect("task completes");
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, expected);
    }
}
