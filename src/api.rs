//! Client for the note service. Only the calls the graph view and editor need
//! are wrapped here.

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::components::graph_view::Graph;
use crate::config::ApiConfig;
use crate::error::{Error, Result};

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Note {
	pub id: String,
	pub title: String,
	#[serde(default)]
	pub body: Option<String>,
}

/// Another note that links to the open one, with the number of links.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Backlink {
	pub id: String,
	pub title: String,
	#[serde(default)]
	pub count: u32,
}

/// Body and backlinks of one note, fetched together on selection.
#[derive(Clone, Debug, PartialEq)]
pub struct NoteContent {
	pub note: Note,
	pub backlinks: Vec<Backlink>,
}

#[derive(Serialize)]
struct SaveNoteRequest<'a> {
	title: &'a str,
	body: &'a str,
}

#[derive(Clone, Debug)]
pub struct ApiClient {
	http: reqwest::Client,
	base_url: String,
	token: Option<String>,
}

impl ApiClient {
	pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
		Self {
			http: reqwest::Client::new(),
			base_url: base_url.into().trim_end_matches('/').to_string(),
			token,
		}
	}

	/// Build a client for the page's origin (unless `config` names another
	/// base URL) using the access token kept in local storage.
	pub fn from_browser(config: &ApiConfig) -> Result<Self> {
		let window = web_sys::window().ok_or(Error::NoWindow)?;
		let base_url = if config.base_url.is_empty() {
			window.location().origin().map_err(|_| Error::NoWindow)?
		} else {
			config.base_url.clone()
		};
		let token = window
			.local_storage()
			.ok()
			.flatten()
			.and_then(|storage| storage.get_item(&config.token_key).ok().flatten());
		if token.is_none() {
			warn!("no access token under {:?}; requests will be anonymous", config.token_key);
		}
		Ok(Self::new(base_url, token))
	}

	fn url(&self, path: &str) -> String {
		format!("{}{}", self.base_url, path)
	}

	fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
		match &self.token {
			Some(token) => request.bearer_auth(token),
			None => request,
		}
	}

	async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
		let url = self.url(path);
		debug!("GET {url}");
		let response = self.authorize(self.http.get(&url)).send().await?;
		if !response.status().is_success() {
			return Err(Error::Status { status: response.status().as_u16(), url });
		}
		Ok(response.json().await?)
	}

	pub async fn get_graph(&self) -> Result<Graph> {
		self.get_json("/graph").await
	}

	pub async fn get_note(&self, id: &str) -> Result<Note> {
		self.get_json(&format!("/notes/{id}")).await
	}

	pub async fn get_backlinks(&self, id: &str) -> Result<Vec<Backlink>> {
		self.get_json(&format!("/notes/{id}/backlinks")).await
	}

	/// Fetch a note and its backlinks. A failed backlink lookup degrades to an
	/// empty list; a failed note lookup fails the whole call.
	pub async fn get_note_content(&self, id: &str) -> Result<NoteContent> {
		let note = self.get_note(id).await?;
		let backlinks = self.get_backlinks(id).await.unwrap_or_else(|err| {
			warn!("backlinks for {id} unavailable: {err}");
			Vec::new()
		});
		Ok(NoteContent { note, backlinks })
	}

	pub async fn save_note(&self, id: &str, title: &str, body: &str) -> Result<()> {
		let url = self.url(&format!("/notes/{id}"));
		debug!("PATCH {url}");
		let response = self
			.authorize(self.http.patch(&url))
			.json(&SaveNoteRequest { title, body })
			.send()
			.await?;
		if !response.status().is_success() {
			return Err(Error::Status { status: response.status().as_u16(), url });
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn base_url_trailing_slash_is_trimmed() {
		let client = ApiClient::new("http://localhost:8000/", None);
		assert_eq!(client.url("/graph"), "http://localhost:8000/graph");
	}

	#[test]
	fn note_body_may_be_null_or_absent() {
		let with_null: Note = serde_json::from_str(r#"{"id":"1","title":"T","body":null}"#).unwrap();
		let absent: Note = serde_json::from_str(r#"{"id":"1","title":"T"}"#).unwrap();
		assert_eq!(with_null.body, None);
		assert_eq!(absent, with_null);
	}

	#[test]
	fn backlinks_deserialize() {
		let links: Vec<Backlink> =
			serde_json::from_str(r#"[{"id":"b","title":"Getting Started","count":2}]"#).unwrap();
		assert_eq!(links[0].title, "Getting Started");
		assert_eq!(links[0].count, 2);
	}
}
