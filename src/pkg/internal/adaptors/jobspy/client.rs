use std::time::Duration;

use crate::{
    pkg::internal::{
        adaptors::jobspy::spec::{RawJobRow, SearchJobsResponse},
        board::{JobBoard, SearchQuery},
    },
    prelude::{Error, Result},
};

/// Client for a JobSpy HTTP API (`GET /api/v1/search_jobs`).
#[derive(Debug, Clone)]
pub struct JobSpyClient {
    http: reqwest::Client,
    base_url: String,
}

impl JobSpyClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(JobSpyClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn search_url(&self) -> String {
        format!("{}/api/v1/search_jobs", self.base_url)
    }
}

fn query_params(query: &SearchQuery<'_>) -> Vec<(&'static str, String)> {
    let mut params: Vec<(&'static str, String)> = query
        .sources
        .iter()
        .map(|site| ("site_name", site.clone()))
        .collect();
    params.push(("search_term", query.search_term.to_string()));
    params.push(("location", query.location.to_string()));
    params.push(("results_wanted", query.results_wanted.to_string()));
    params.push(("hours_old", query.max_age_hours.to_string()));
    params.push(("country_indeed", query.country.to_string()));
    params
}

#[async_trait::async_trait]
impl JobBoard for JobSpyClient {
    async fn search(&self, query: &SearchQuery<'_>) -> Result<Vec<RawJobRow>> {
        let url = self.search_url();
        tracing::debug!(
            "searching {} for '{}' in {}",
            &url,
            query.search_term,
            query.location
        );
        let response = self
            .http
            .get(&url)
            .query(&query_params(query))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Upstream(format!("{} returned {}: {}", &url, status, body)));
        }
        let payload: SearchJobsResponse = response.json().await?;
        let rows = payload.into_rows();
        tracing::debug!("upstream returned {} rows", rows.len());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;

    use super::*;

    fn sources() -> Vec<String> {
        vec!["indeed".into(), "linkedin".into()]
    }

    fn query<'a>(sources: &'a [String]) -> SearchQuery<'a> {
        SearchQuery {
            sources,
            search_term: "psychiatrist",
            location: "Madison, WI",
            results_wanted: 50,
            max_age_hours: 168,
            country: "USA",
        }
    }

    #[tokio::test]
    async fn sends_search_parameters_and_decodes_rows() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v1/search_jobs")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("search_term".into(), "psychiatrist".into()),
                Matcher::UrlEncoded("location".into(), "Madison, WI".into()),
                Matcher::UrlEncoded("results_wanted".into(), "50".into()),
                Matcher::UrlEncoded("hours_old".into(), "168".into()),
                Matcher::UrlEncoded("country_indeed".into(), "USA".into()),
                Matcher::Regex("site_name=indeed&site_name=linkedin".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"count": 1, "jobs": [{
                    "title": "Psychiatrist",
                    "company": "Acme Health",
                    "location": "Madison, WI",
                    "job_url": "https://example.com/jobs/1",
                    "min_amount": "nan",
                    "max_amount": 300000,
                    "date_posted": "2026-10-01",
                    "site": "indeed"
                }]}"#,
            )
            .create_async()
            .await;

        let client = JobSpyClient::new(&server.url(), Duration::from_secs(5)).unwrap();
        let sources = sources();
        let rows = client.search(&query(&sources)).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title.as_deref(), Some("Psychiatrist"));
        assert_eq!(rows[0].max_amount, Some(300000.0));
        assert_eq!(rows[0].site.as_deref(), Some("indeed"));
    }

    #[tokio::test]
    async fn non_success_status_is_an_upstream_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v1/search_jobs")
            .match_query(Matcher::Any)
            .with_status(502)
            .with_body("bad gateway")
            .create_async()
            .await;

        let base_url = format!("{}/", server.url());
        let client = JobSpyClient::new(&base_url, Duration::from_secs(5)).unwrap();
        let sources = sources();
        let err = client.search(&query(&sources)).await.unwrap_err();
        assert!(matches!(err, Error::Upstream(_)));
        assert!(err.to_string().contains("502"));
    }

    #[tokio::test]
    async fn undecodable_body_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v1/search_jobs")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>blocked</html>")
            .create_async()
            .await;

        let client = JobSpyClient::new(&server.url(), Duration::from_secs(5)).unwrap();
        let sources = sources();
        assert!(client.search(&query(&sources)).await.is_err());
    }
}
