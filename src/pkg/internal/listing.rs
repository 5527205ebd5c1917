use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::pkg::internal::adaptors::jobspy::spec::RawJobRow;

const ID_FIELD_SEPARATOR: char = '\u{1f}';

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub external_id: String,
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub date_posted: Option<String>,
    pub source: Option<String>,
    pub search_location: String,
}

/// Content hash over the identifying fields of a posting. Absent fields hash as
/// the empty string.
pub fn external_id(
    title: Option<&str>,
    company: Option<&str>,
    location: Option<&str>,
    url: Option<&str>,
) -> String {
    let mut hasher = Sha256::new();
    for (idx, field) in [title, company, location, url].into_iter().enumerate() {
        if idx > 0 {
            let mut buf = [0u8; 4];
            hasher.update(ID_FIELD_SEPARATOR.encode_utf8(&mut buf).as_bytes());
        }
        hasher.update(field.unwrap_or("").as_bytes());
    }
    hex::encode(hasher.finalize())
}

fn text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// upstream reports unknown pay as NaN or 0; out of range values are junk
fn amount(value: Option<f64>) -> Option<i64> {
    value
        .filter(|v| v.is_finite() && *v != 0.0 && v.abs() < i64::MAX as f64)
        .map(|v| v.trunc() as i64)
}

fn date(value: Option<String>) -> Option<String> {
    text(value).map(|d| d.chars().take(10).collect())
}

impl JobRecord {
    pub fn from_raw(row: RawJobRow, search_location: &str) -> Self {
        let title = text(row.title);
        let company = text(row.company);
        let location = text(row.location);
        let url = text(row.job_url);
        JobRecord {
            external_id: external_id(
                title.as_deref(),
                company.as_deref(),
                location.as_deref(),
                url.as_deref(),
            ),
            title,
            company,
            location,
            description: text(row.description),
            url,
            salary_min: amount(row.min_amount),
            salary_max: amount(row.max_amount),
            date_posted: date(row.date_posted),
            source: text(row.site),
            search_location: search_location.to_string(),
        }
    }
}
