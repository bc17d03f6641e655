use crate::errors::{AppError, AppResult};
use crate::models::FlightRecord;
use crate::models::flight::split_label;
use crate::net::html::{HtmlScanner, Tag};
use tracing::info;

const ROW_CLASS: &str = "lms-row";
const DEPARTURE_CLASS: &str = "departy";
const DESTINATION_CLASS: &str = "destiny";
const PRICE_BOX_CLASS: &str = "pricey";
const PRICE_CLASS: &str = "current-price";
const HURRY_CLASS: &str = "hurry";

/// Extract every flight row from the results page.
///
/// Each `a.lms-row` is one flight:
/// - `div.departy`: 1st `<p>` departure, 2nd `<p>` "date · time" label
/// - `div.destiny`: 2nd `<p>` destination
/// - `div.pricey p.current-price`: price, first token as integer
/// - `div.hurry p`: optional seats-left text
///
/// A row missing any required piece fails the whole parse.
pub fn parse_flights(html: &str) -> AppResult<Vec<FlightRecord>> {
    let scanner = HtmlScanner::new()?;
    let rows = scanner.elements(html, Tag::A, Some(ROW_CLASS));
    info!("Parsing {} flights from the HTML content.", rows.len());

    let mut flights = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        let missing = |field| AppError::MissingField { field, row: idx };

        let departy = scanner
            .first(row.inner, Tag::Div, DEPARTURE_CLASS)
            .ok_or_else(|| missing("departure"))?;
        let departy_ps = scanner.elements(departy.inner, Tag::P, None);
        let departure = departy_ps
            .first()
            .map(|p| scanner.text(p.inner))
            .ok_or_else(|| missing("departure"))?;
        let date_label = departy_ps
            .get(1)
            .map(|p| scanner.text(p.inner))
            .ok_or_else(|| missing("date"))?;

        let destination = scanner
            .first(row.inner, Tag::Div, DESTINATION_CLASS)
            .and_then(|d| scanner.elements(d.inner, Tag::P, None).get(1).copied())
            .map(|p| scanner.text(p.inner))
            .ok_or_else(|| missing("destination"))?;

        let price_text = scanner
            .first(row.inner, Tag::Div, PRICE_BOX_CLASS)
            .and_then(|d| scanner.first(d.inner, Tag::P, PRICE_CLASS))
            .map(|p| scanner.text(p.inner))
            .ok_or_else(|| missing("price"))?;
        let price = parse_price(&price_text)?;

        // An empty hurry paragraph counts as no hurry.
        let hurry_text = scanner
            .first(row.inner, Tag::Div, HURRY_CLASS)
            .and_then(|d| scanner.elements(d.inner, Tag::P, None).first().copied())
            .map(|p| scanner.text(p.inner))
            .filter(|t| !t.is_empty());

        let link = scanner
            .attr(row.attrs, "href")
            .ok_or_else(|| missing("link"))?;

        if split_label(&date_label).is_none() {
            return Err(AppError::InvalidLabel(date_label));
        }

        flights.push(FlightRecord {
            departure,
            date_label,
            destination,
            price,
            link,
            hurry_text,
        });
    }

    info!("Total flights parsed: {}", flights.len());
    Ok(flights)
}

/// "79 €" → 79
fn parse_price(text: &str) -> AppResult<i64> {
    text.split_whitespace()
        .next()
        .and_then(|tok| tok.parse::<i64>().ok())
        .ok_or_else(|| AppError::InvalidPrice(text.to_string()))
}
