use thiserror::Error;

/// Failures that can surface from the note service or configuration.
///
/// Layout, markup and toolbar code never produce these; they only come out of
/// the asynchronous collaborator calls and config parsing.
#[derive(Debug, Error)]
pub enum Error {
	#[error("request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("{url} answered with status {status}")]
	Status { status: u16, url: String },

	#[error("invalid config: {0}")]
	Config(#[from] toml::de::Error),

	#[error("no browser window available")]
	NoWindow,
}

pub type Result<T> = std::result::Result<T, Error>;
