use folio::app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger not initialized: {err}").into());
    }
    mount_to_body(App);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    folio::util::reveal::observe_page(&document);
    if let Some(body) = document.body()
        && let Err(err) = body.class_list().add_1("loaded")
    {
        log::debug!("loaded class not added: {err:?}");
    }
}
