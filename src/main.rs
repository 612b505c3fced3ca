use std::rc::Rc;

use log::info;
use yew::prelude::*;

mod config;
mod content;
mod dom;
mod error;
mod viewport;
mod components {
    pub mod cta;
    pub mod faq;
    pub mod modal;
    pub mod navbar;
    pub mod reveal;
    pub mod stats;
}
mod pages {
    pub mod landing;
}

use components::modal::{self, ModalHost};
use content::PageContent;
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    let content = use_state(|| Rc::new(PageContent::load()));

    html! {
        <>
            <style>{ modal::STYLESHEET }</style>
            <ModalHost copy={content.modal.clone()}>
                <Landing content={(*content).clone()} />
            </ModalHost>
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
