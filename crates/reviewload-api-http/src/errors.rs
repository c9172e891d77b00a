use reviewload_api_interface::ApiError;

#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum HttpError {
    #[error("Could not build HTTP client: {source}")]
    ClientBuildError { source: reqwest::Error },

    #[error(transparent)]
    HttpError { source: reqwest::Error },
}

impl From<reqwest::Error> for HttpError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            HttpError::ClientBuildError { source: e }
        } else {
            HttpError::HttpError { source: e }
        }
    }
}

impl From<HttpError> for ApiError {
    fn from(e: HttpError) -> Self {
        match e {
            HttpError::HttpError { source } => ApiError::TransportError {
                source: source.into(),
            },
            e => ApiError::ImplementationError { source: e.into() },
        }
    }
}
