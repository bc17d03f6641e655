#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rflightwatch::config::Config;
use rflightwatch::errors::{AppError, AppResult};
use rflightwatch::models::FlightRecord;
use rflightwatch::net::{Notifier, PageSource};
use std::cell::{Cell, RefCell};
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::thread;
use tempfile::TempDir;

pub const TRACKED: &str = "12-10-2024 · 06:00";
pub const TRACKED_2: &str = "19-10-2024 · 21:30";
pub const UNTRACKED: &str = "15-10-2024 · 09:15";

pub fn rfw() -> Command {
    cargo_bin_cmd!("rflightwatch")
}

/// 2024-10-01 10:00:00, before every tracked date above.
pub fn check_time() -> NaiveDateTime {
    at(2024, 10, 1, 10, 0, 0)
}

pub fn at(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn flight(label: &str, price: i64, hurry: Option<&str>) -> FlightRecord {
    FlightRecord {
        departure: "Roma Fiumicino".to_string(),
        date_label: label.to_string(),
        destination: "Malta".to_string(),
        price,
        link: format!("https://example.com/book/{}", price),
        hurry_text: hurry.map(str::to_string),
    }
}

pub fn test_config(data_dir: &Path, tracked: &[&str], threshold: i64) -> Config {
    Config {
        email_sender: "monitor@example.com".to_string(),
        email_receivers: vec!["alice@example.com".to_string(), "bob@example.com".to_string()],
        dates_to_track: tracked.iter().map(|s| s.to_string()).collect(),
        price_threshold: threshold,
        env: "dev".to_string(),
        data_dir: Some(data_dir.to_string_lossy().to_string()),
        ..Config::default()
    }
}

/// Write a YAML config for CLI tests; network endpoints point at a closed
/// local port so nothing leaves the machine.
pub fn write_config(dir: &Path, tracked: &[&str], threshold: i64) -> PathBuf {
    write_config_with_url(dir, tracked, threshold, "http://127.0.0.1:9/flights")
}

pub fn write_config_with_url(dir: &Path, tracked: &[&str], threshold: i64, url: &str) -> PathBuf {
    let mut cfg = test_config(dir, tracked, threshold);
    cfg.url = url.to_string();
    cfg.host = "127.0.0.1".to_string();
    cfg.smtp_host = "127.0.0.1".to_string();
    cfg.smtp_port = 9;
    let path = dir.join("rflightwatch.conf");
    fs::write(&path, serde_yaml::to_string(&cfg).unwrap()).unwrap();
    path
}

/// Answer exactly one HTTP request with `200 OK` and `body` on a local
/// port; returns the URL to fetch.
pub fn serve_once(body: String) -> String {
    serve_once_with_status("200 OK", body)
}

pub fn serve_once_with_status(status: &'static str, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local port");
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        let _ = stream.write_all(response.as_bytes());
    });
    format!("http://{addr}/flights")
}

pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

pub fn row_html(dep: &str, label: &str, dest: &str, price: &str, hurry: Option<&str>) -> String {
    let hurry = hurry
        .map(|h| format!(r#"<div class="hurry"><p>{h}</p></div>"#))
        .unwrap_or_default();
    format!(
        r#"<a class="lms-row" href="https://example.com/book?d={price}">
  <div class="col">
    <div class="departy"><p>{dep}</p>
      <p>{label}</p></div>
  </div>
  <div class="destiny"><p>To</p><p> {dest} </p></div>
  <div class="pricey"><p class="old-price">199 €</p><p class="current-price">{price} €</p></div>
  {hurry}
</a>"#
    )
}

pub fn page(rows: &[String]) -> String {
    format!(
        "<html><body><div class=\"list\">{}</div><a href=\"/other\">other</a></body></html>",
        rows.join("\n")
    )
}

/// Page source serving a fixed page (or failing) and counting calls.
pub struct FakeSource {
    pub html: Option<String>,
    pub calls: Cell<usize>,
}

impl FakeSource {
    pub fn serving(html: String) -> Self {
        Self {
            html: Some(html),
            calls: Cell::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            html: None,
            calls: Cell::new(0),
        }
    }
}

impl PageSource for FakeSource {
    fn fetch(&self) -> AppResult<String> {
        self.calls.set(self.calls.get() + 1);
        match &self.html {
            Some(h) => Ok(h.clone()),
            None => Err(AppError::HttpStatus {
                status: 503,
                body: "Service Unavailable".to_string(),
            }),
        }
    }
}

/// Notifier recording (subject, body) pairs, optionally failing.
#[derive(Default)]
pub struct FakeNotifier {
    pub fail: bool,
    pub sent: RefCell<Vec<(String, String)>>,
}

impl FakeNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl Notifier for FakeNotifier {
    fn send(&self, _recipients: &[String], subject: &str, body: &str) -> AppResult<()> {
        self.sent
            .borrow_mut()
            .push((subject.to_string(), body.to_string()));
        if self.fail {
            return Err(AppError::Other("smtp down".to_string()));
        }
        Ok(())
    }
}
