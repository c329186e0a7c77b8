use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;
use contracts::shared::format::format_thousands;

/// ANSI-цвет времени по классу статуса
fn status_color(status: StatusCode) -> &'static str {
    if status.is_success() {
        "36" // голубой
    } else if status.is_server_error() {
        "31" // красный
    } else {
        "33" // коричневый
    }
}

/// Строка лога запроса (без времени и цвета)
fn format_line(status: StatusCode, elapsed_ms: u128, size: Option<usize>, method: &Method, path: &str) -> String {
    let size = match size {
        Some(n) => format_thousands(n as u64),
        None => "error".to_string(),
    };
    format!(
        "{:>5}ms | {:>12} | {} {:>6} {}",
        elapsed_ms,
        size,
        status.as_u16(),
        method.as_str(),
        path
    )
}

/// Middleware для логирования HTTP запросов
///
/// Выводит в консоль время, длительность, размер ответа, статус, метод и путь.
/// В файл лога та же строка уходит через tracing.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let (bytes, size) = match to_bytes(body, usize::MAX).await {
        Ok(b) => {
            let len = b.len();
            (Some(b), Some(len))
        }
        Err(_) => (None, None),
    };

    let line = format_line(parts.status, start.elapsed().as_millis(), size, &method, &path);
    println!(
        "\x1b[{}m{}\x1b[0m | {}",
        status_color(parts.status),
        Local::now().format("%H:%M:%S"),
        line
    );
    tracing::debug!(target: "http", "{}", line);

    match bytes {
        Some(b) => Response::from_parts(parts, Body::from(b)),
        None => Response::from_parts(parts, Body::default()),
    }
}
