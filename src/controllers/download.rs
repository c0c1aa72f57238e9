use axum::{
    body::Body,
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
};
use std::sync::Arc;

use crate::{
    domain::relay::{RelayRequest, RelayService, RelayServiceApi, DEFAULT_CONTENT_TYPE},
    error::{AppError, AppResult},
};

/// Query for GET /api/download
#[derive(Debug, Default, PartialEq)]
pub struct DownloadQuery {
    pub url: Option<String>,
    pub filename: Option<String>,
}

impl DownloadQuery {
    /// Collect `url` and `filename` from decoded query pairs.
    /// The first occurrence of a key wins; later repeats and unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "url" if query.url.is_none() => query.url = Some(value),
                "filename" if query.filename.is_none() => query.filename = Some(value),
                _ => {}
            }
        }
        query
    }
}

pub struct DownloadController {
    relay_service: Arc<RelayService>,
}

impl DownloadController {
    pub fn new(relay_service: Arc<RelayService>) -> Self {
        Self { relay_service }
    }

    /// GET /api/download?url=...&filename=... - Relay remote audio as an attachment
    pub async fn download(
        State(controller): State<Arc<DownloadController>>,
        pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let Query(pairs) = pairs.map_err(|e| AppError::InvalidQuery(e.body_text()))?;
        let query = DownloadQuery::from_pairs(pairs);

        let request = RelayRequest::from_params(query.url, query.filename)?;
        let result = controller.relay_service.relay(request).await?;

        // Headers are fully built before the body is handed to axum
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_bytes(&result.content_type)
                .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_CONTENT_TYPE)),
        );
        headers.insert(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_str(&result.content_disposition).map_err(|e| {
                AppError::DownloadFailed(format!("invalid content-disposition: {}", e))
            })?,
        );

        Ok((StatusCode::OK, headers, Body::from(result.body)))
    }
}
