#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(task_card_ui::app::App)
}

// Server builds only use the library.
#[cfg(not(feature = "csr"))]
fn main() {}
