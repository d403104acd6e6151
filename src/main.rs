// The library owns every dependency; the binary only mounts it.
#![allow(unused_crate_dependencies)]

use leptos::prelude::*;
use note_graph_canvas::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(|| {
		view! { <App /> }
	})
}
