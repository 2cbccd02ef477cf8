//! Notion API wire types
//!
//! Deliberately tolerant: every property field is optional, and mapping to
//! domain types happens in one explicit step per record so a malformed page
//! can be skipped without aborting the batch.

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::Deserialize;

/// Database query response page
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub results: Vec<Page>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// A Notion page (one database row)
#[derive(Debug, Deserialize)]
pub struct Page {
    pub id: String,
    /// Public page URL, used as an article url fallback
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub properties: HashMap<String, PageProperty>,
}

/// One property value on a page.
///
/// Notion tags property values by `type`; only the payloads this client
/// reads are modeled, everything else deserializes to `None` fields.
#[derive(Debug, Deserialize)]
pub struct PageProperty {
    #[serde(default)]
    pub title: Option<Vec<RichText>>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub multi_select: Option<Vec<SelectOption>>,
    #[serde(default)]
    pub date: Option<DateValue>,
    #[serde(default)]
    pub relation: Option<Vec<RelationRef>>,
}

#[derive(Debug, Deserialize)]
pub struct RichText {
    #[serde(default)]
    pub plain_text: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectOption {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct DateValue {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RelationRef {
    pub id: String,
}

impl DateValue {
    /// Resolve the span this date value covers.
    ///
    /// A missing end defaults to start plus a day, and any end landing on
    /// exactly midnight is stretched to the end of that day. The rules
    /// compose: a date-only start with no end therefore covers the start
    /// day and the whole following day.
    pub fn span(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let start = parse_notion_date(self.start.as_deref()?)?;
        let end = self
            .end
            .as_deref()
            .and_then(parse_notion_date)
            .unwrap_or_else(|| start + Duration::days(1));
        let end = if end.time() == NaiveTime::MIN {
            end + Duration::days(1) - Duration::seconds(1)
        } else {
            end
        };
        Some((start, end))
    }

    /// Whether `now` falls inside this date value's span.
    pub fn contains(&self, now: DateTime<Utc>) -> bool {
        self.span()
            .is_some_and(|(start, end)| now >= start && now <= end)
    }
}

/// Notion date values are either a bare date or a full RFC 3339 timestamp.
fn parse_notion_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    Utc.from_local_datetime(&date.and_time(NaiveTime::MIN))
        .single()
}
