//! Parser for the Sina Finance delimited text feed.
//!
//! The feed is a sequence of lines of the form
//! `var hq_str_<code>="<comma-separated fields>";`. Lines that do not match
//! are skipped; an empty quoted value marks an invalid or delisted code.
//! Column meanings per market and instrument class live in [`super::layout`].

use crate::parse::layout::{Field, RecordLayout};
use crate::parse::round_to;
use crate::types::{EquityQuote, FeedQuote, IndexQuote, Market};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Code prefix marking an A-share index record.
const A_SHARE_INDEX_PREFIX: &str = "s_";

/// Name tokens identifying Hong Kong benchmark indices.
const HK_INDEX_TOKENS: &[&str] = &["HSI", "HSTECH", "HSCEI"];

fn line_pattern() -> &'static Regex {
    static LINE_RE: OnceLock<Regex> = OnceLock::new();
    LINE_RE.get_or_init(|| {
        Regex::new(r#"var hq_str_(\w+)="(.*)";?"#).expect("line pattern is valid")
    })
}

/// Parse a decoded feed body for the given market.
pub fn parse_feed(text: &str, market: Market) -> HashMap<String, Option<FeedQuote>> {
    match market {
        Market::HongKong => parse_hong_kong(text),
        _ => parse_a_share(text),
    }
}

/// Parse A-share records (mainland indices and equities).
pub fn parse_a_share(text: &str) -> HashMap<String, Option<FeedQuote>> {
    let mut result = HashMap::new();

    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        let Some(caps) = line_pattern().captures(line) else {
            continue;
        };
        let code = caps[1].to_string();
        let body = &caps[2];

        if body.is_empty() {
            result.insert(code, None);
            continue;
        }

        let parts: Vec<&str> = body.split(',').collect();
        let quote = if code.starts_with(A_SHARE_INDEX_PREFIX) {
            parse_index(&parts, RecordLayout::AShareIndex)
        } else {
            parse_a_share_equity(&parts)
        };
        result.insert(code, Some(quote));
    }

    result
}

/// Parse Hong Kong records. Indices are identified by benchmark name tokens
/// in the code rather than a prefix convention.
pub fn parse_hong_kong(text: &str) -> HashMap<String, Option<FeedQuote>> {
    let mut result = HashMap::new();

    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        let Some(caps) = line_pattern().captures(line) else {
            continue;
        };
        let code = caps[1].to_string();
        let body = &caps[2];

        if body.is_empty() {
            result.insert(code, None);
            continue;
        }

        let parts: Vec<&str> = body.split(',').collect();
        let quote = if HK_INDEX_TOKENS.iter().any(|t| code.contains(t)) {
            parse_index(&parts, RecordLayout::HongKongIndex)
        } else {
            parse_hk_equity(&parts)
        };
        result.insert(code, Some(quote));
    }

    result
}

fn parse_index(parts: &[&str], layout: RecordLayout) -> FeedQuote {
    let price = num(parts, layout, Field::Price);
    let name = name_field(parts, layout);

    // The mainland index layout has no OHLC columns; the HK one does.
    let ohlc = |field| {
        layout
            .position(field)
            .map(|_| price_like(parts, layout, field, price))
    };

    FeedQuote::Index(IndexQuote {
        name,
        price,
        change: num(parts, layout, Field::Change),
        change_percent: num(parts, layout, Field::ChangePercent),
        open: ohlc(Field::Open),
        prev_close: ohlc(Field::PrevClose),
        high: ohlc(Field::High),
        low: ohlc(Field::Low),
        volume: num(parts, layout, Field::Volume) * layout.unit_scale(Field::Volume),
        turnover: num(parts, layout, Field::Turnover) * layout.unit_scale(Field::Turnover),
    })
}

fn parse_a_share_equity(parts: &[&str]) -> FeedQuote {
    let layout = RecordLayout::AShareEquity;
    let price = num(parts, layout, Field::Price);
    let prev_close = price_like(parts, layout, Field::PrevClose, price);

    // The mainland equity feed does not carry change columns; derive them,
    // guarding the zero previous close.
    let change = price - prev_close;
    let change_percent = if prev_close == 0.0 {
        0.0
    } else {
        change / prev_close * 100.0
    };

    FeedQuote::Equity(EquityQuote {
        name: name_field(parts, layout),
        open: price_like(parts, layout, Field::Open, price),
        prev_close,
        price,
        high: price_like(parts, layout, Field::High, price),
        low: price_like(parts, layout, Field::Low, price),
        change: round_to(change, 2),
        change_percent: round_to(change_percent, 2),
        volume: num(parts, layout, Field::Volume),
        turnover: num(parts, layout, Field::Turnover),
        date: text_field(parts, layout, Field::Date),
        time: text_field(parts, layout, Field::Time),
    })
}

fn parse_hk_equity(parts: &[&str]) -> FeedQuote {
    let layout = RecordLayout::HongKongEquity;
    let price = num(parts, layout, Field::Price);

    FeedQuote::Equity(EquityQuote {
        name: name_field(parts, layout),
        open: price_like(parts, layout, Field::Open, price),
        prev_close: price_like(parts, layout, Field::PrevClose, price),
        price,
        high: price_like(parts, layout, Field::High, price),
        low: price_like(parts, layout, Field::Low, price),
        change: num(parts, layout, Field::Change),
        change_percent: num(parts, layout, Field::ChangePercent),
        volume: num(parts, layout, Field::Volume),
        turnover: num(parts, layout, Field::Turnover),
        date: None,
        time: None,
    })
}

/// Numeric field with failure-tolerant coercion: absent or unparsable is 0.
fn num(parts: &[&str], layout: RecordLayout, field: Field) -> f64 {
    layout
        .position(field)
        .and_then(|idx| parts.get(idx))
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Price-like field: falls back to the last price when absent or unparsable.
fn price_like(parts: &[&str], layout: RecordLayout, field: Field, price: f64) -> f64 {
    let value = num(parts, layout, field);
    if value == 0.0 {
        price
    } else {
        value
    }
}

fn text_field(parts: &[&str], layout: RecordLayout, field: Field) -> Option<String> {
    layout
        .position(field)
        .and_then(|idx| parts.get(idx))
        .map(|raw| raw.trim())
        .filter(|raw| !raw.is_empty())
        .map(String::from)
}

/// Display name. The HK layouts put an English name at column 0 and the
/// display name at column 1; fall back to column 0 when column 1 is empty.
fn name_field(parts: &[&str], layout: RecordLayout) -> String {
    text_field(parts, layout, Field::Name)
        .or_else(|| parts.first().map(|raw| raw.trim().to_string()))
        .unwrap_or_default()
}
