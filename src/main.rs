use gulf_site::{config, App};
use leptos::prelude::*;
use tracing_wasm::WASMLayerConfigBuilder;

fn main() {
    console_error_panic_hook::set_once();

    let layer = WASMLayerConfigBuilder::new()
        .set_max_level(config::log_level())
        .build();
    tracing_wasm::set_as_global_default_with_config(layer);

    tracing::info!(level = %config::log_level(), "mounting Gulf Design Studio site");
    mount_to_body(App);
}
