//! CSR entry point.

use leptos::prelude::*;
use sankey_canvas::App;

fn main() {
	sankey_canvas::init_logging();
	leptos::mount::mount_to_body(|| view! { <App /> });
}
