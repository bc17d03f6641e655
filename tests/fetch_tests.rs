mod common;
use common::{serve_once, serve_once_with_status};
use rflightwatch::errors::AppError;
use rflightwatch::net::{HttpSource, PageSource};

#[test]
fn fetch_returns_body_on_200() {
    let url = serve_once("<html>ok</html>".to_string());
    let source = HttpSource::new(url, "127.0.0.1").unwrap();

    assert_eq!(source.fetch().unwrap(), "<html>ok</html>");
}

#[test]
fn fetch_keeps_status_code_on_non_200() {
    let url = serve_once_with_status("503 Service Unavailable", "down for maintenance".to_string());
    let source = HttpSource::new(url, "127.0.0.1").unwrap();

    match source.fetch() {
        Err(AppError::HttpStatus { status, body }) => {
            assert_eq!(status, 503);
            assert_eq!(body, "down for maintenance");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}
