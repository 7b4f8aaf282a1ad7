use axum::{extract::Request, middleware::Next, response::Response};
use uuid::Uuid;

/// Middleware that tags each request with a unique ID, records it on a
/// tracing span, and echoes it back in the `x-request-id` response header.
pub async fn request_id_middleware(req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();

    let span = tracing::info_span!(
        "http_request",
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    let _guard = span.enter();
    drop(_guard); // release the span guard before async

    let mut response = next.run(req).await;
    response
        .headers_mut()
        .insert("x-request-id", request_id.parse().unwrap());

    response
}
