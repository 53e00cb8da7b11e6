use axum::body::to_bytes;
use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use contracts::shared::format::format_thousands;

/// Logs every HTTP request: duration, response size, status, method and path.
///
/// The body is buffered to learn its real size, then handed on unchanged.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                "{:>5}ms | {:>12} | {} {:>6} {} ({})",
                start.elapsed().as_millis(),
                "error",
                parts.status.as_u16(),
                method,
                uri.path(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let line = format!(
        "{:>5}ms | {:>12} | {} {:>6} {}",
        start.elapsed().as_millis(),
        format_thousands(bytes.len() as i64),
        parts.status.as_u16(),
        method,
        uri.path()
    );
    if parts.status.is_success() {
        tracing::info!("{}", line);
    } else {
        tracing::warn!("{}", line);
    }

    Response::from_parts(parts, Body::from(bytes))
}
