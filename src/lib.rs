//! Leptos client-side app for exploring and editing linked notes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info, warn};

// Modules
mod api;
mod components;
mod config;
mod error;
pub mod markup;
mod pages;

pub use config::AppConfig;

// Top-Level pages
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Local-storage key holding TOML overrides for [`AppConfig`].
pub const CONFIG_STORAGE_KEY: &str = "note-graph.config";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// Defaults merged with any overrides saved in local storage. Broken overrides
/// are reported and ignored.
pub fn load_config() -> AppConfig {
	let overrides = web_sys::window()
		.and_then(|window| window.local_storage().ok().flatten())
		.and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten());
	match overrides.as_deref().map(AppConfig::from_toml_str) {
		Some(Ok(config)) => config,
		Some(Err(err)) => {
			warn!("ignoring {CONFIG_STORAGE_KEY}: {err}");
			AppConfig::default()
		}
		None => AppConfig::default(),
	}
}

/// An app router which renders the graph page and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	provide_context(load_config());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="Note Graph" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
