//! Outside-world collaborators: page fetch, HTML parsing, email delivery.

pub mod fetch;
pub mod html;
pub mod notifier;
pub mod parser;

pub use fetch::{HttpSource, PageSource};
pub use notifier::{Notifier, SmtpNotifier};
pub use parser::parse_flights;
