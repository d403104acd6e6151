use serde::Deserialize;
use toml::{Table, Value};

use crate::error::Result;

const DEFAULTS: &str = include_str!("../config/default.toml");

/// Application configuration, layered as compiled-in defaults plus overrides.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AppConfig {
	/// `[graph]` table.
	pub graph: GraphConfig,
	/// `[api]` table.
	pub api: ApiConfig,
}

/// Canvas geometry and colours for the graph view.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GraphConfig {
	/// Width and height of the square canvas.
	pub size: f64,
	/// Radius of the ring the unfocused nodes sit on.
	pub radius: f64,
	pub node_radius: f64,
	pub focus_radius: f64,
	/// Click distance that still counts as hitting a node.
	pub hit_radius: f64,
	pub font_size: f64,
	pub background: String,
	pub node_color: String,
	pub focus_color: String,
	pub edge_color: String,
	pub label_color: String,
}

/// Where the note service lives and how to authenticate against it.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ApiConfig {
	/// Empty means the page's own origin.
	pub base_url: String,
	/// Local-storage key of the bearer token.
	pub token_key: String,
}

impl AppConfig {
	/// Parse `overrides` and deep-merge them over the compiled-in defaults.
	pub fn from_toml_str(overrides: &str) -> Result<Self> {
		let mut base: Table = toml::from_str(DEFAULTS)?;
		let overrides: Table = toml::from_str(overrides)?;
		merge(&mut base, overrides);
		Ok(Value::Table(base).try_into()?)
	}
}

impl Default for AppConfig {
	fn default() -> Self {
		Self::from_toml_str("").expect("compiled-in default.toml is valid")
	}
}

impl GraphConfig {
	/// Canvas centre, where the focused node goes.
	pub fn center(&self) -> (f64, f64) {
		(self.size / 2.0, self.size / 2.0)
	}
}

fn merge(base: &mut Table, overrides: Table) {
	for (key, value) in overrides {
		if let Value::Table(nested) = value {
			if let Some(Value::Table(existing)) = base.get_mut(&key) {
				merge(existing, nested);
				continue;
			}
			base.insert(key, Value::Table(nested));
		} else {
			base.insert(key, value);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_parse() {
		let config = AppConfig::default();
		assert_eq!(config.graph.size, 400.0);
		assert_eq!(config.graph.radius, 160.0);
		assert_eq!(config.graph.center(), (200.0, 200.0));
		assert_eq!(config.api.base_url, "");
	}

	#[test]
	fn overrides_only_touch_named_keys() {
		let config = AppConfig::from_toml_str(
			r#"
			[graph]
			radius = 90.0
			focus_color = "red"
			"#,
		)
		.unwrap();
		assert_eq!(config.graph.radius, 90.0);
		assert_eq!(config.graph.focus_color, "red");
		assert_eq!(config.graph.size, 400.0);
		assert_eq!(config.api.token_key, "vnote.accessToken");
	}

	#[test]
	fn wrong_type_is_rejected() {
		let err = AppConfig::from_toml_str("[graph]\nradius = \"wide\"").unwrap_err();
		assert!(matches!(err, crate::error::Error::Config(_)));
	}

	#[test]
	fn malformed_toml_is_rejected() {
		assert!(AppConfig::from_toml_str("[graph").is_err());
	}
}
