use serde::{Deserialize, Deserializer};

/// One row as returned by the upstream search, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawJobRow {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub job_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub min_amount: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub max_amount: Option<f64>,
    #[serde(default)]
    pub date_posted: Option<String>,
    #[serde(default)]
    pub site: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SearchJobsResponse {
    Wrapped { jobs: Vec<RawJobRow> },
    Bare(Vec<RawJobRow>),
}

impl SearchJobsResponse {
    pub fn into_rows(self) -> Vec<RawJobRow> {
        match self {
            SearchJobsResponse::Wrapped { jobs } => jobs,
            SearchJobsResponse::Bare(jobs) => jobs,
        }
    }
}

// amounts arrive as numbers, numeric strings, "nan" or null depending on the site
fn deserialize_amount<'de, D>(deserializer: D) -> core::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Amount>::deserialize(deserializer)? {
        None => None,
        Some(Amount::Number(n)) => Some(n),
        Some(Amount::Text(s)) => s.trim().parse::<f64>().ok(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_accept_numbers_strings_and_nan() {
        let rows: Vec<RawJobRow> = serde_json::from_str(
            r#"[
                {"title": "Psychiatrist", "min_amount": 250000.0, "max_amount": "310000"},
                {"title": "Psychiatrist", "min_amount": "NaN", "max_amount": null},
                {"title": "Psychiatrist"}
            ]"#,
        )
        .unwrap();
        assert_eq!(rows[0].min_amount, Some(250000.0));
        assert_eq!(rows[0].max_amount, Some(310000.0));
        assert!(rows[1].min_amount.unwrap().is_nan());
        assert_eq!(rows[1].max_amount, None);
        assert_eq!(rows[2].min_amount, None);
        assert_eq!(rows[2].company, None);
    }

    #[test]
    fn response_accepts_wrapped_and_bare_lists() {
        let wrapped: SearchJobsResponse =
            serde_json::from_str(r#"{"count": 1, "cached": false, "jobs": [{"site": "indeed"}]}"#)
                .unwrap();
        assert_eq!(wrapped.into_rows()[0].site.as_deref(), Some("indeed"));

        let bare: SearchJobsResponse = serde_json::from_str(r#"[{"site": "linkedin"}]"#).unwrap();
        assert_eq!(bare.into_rows()[0].site.as_deref(), Some("linkedin"));
    }
}
