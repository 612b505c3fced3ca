use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::components::cta::{CtaButton, CtaVariant};
use crate::config;
use crate::content::NavLink;
use crate::dom;
use crate::error::UiResult;

pub fn is_scrolled(offset: f64) -> bool {
    offset > config::SCROLLED_THRESHOLD_PX
}

/// The element id an in-page link points at, if it is a `#id` link.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn anchor_scroll_top(offset_top: i32) -> f64 {
    f64::from(offset_top) - config::NAV_OFFSET_PX
}

/// Smooth-scrolls to the section `href` names. Returns `Ok(false)` when
/// there is no such section.
pub fn scroll_to_fragment(href: &str) -> UiResult<bool> {
    let id = match fragment_id(href) {
        Some(id) => id,
        None => return Ok(false),
    };
    let target = match dom::document()?
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        Some(target) => target,
        None => return Ok(false),
    };

    let mut options = ScrollToOptions::new();
    options.top(anchor_scroll_top(target.offset_top()));
    options.behavior(ScrollBehavior::Smooth);
    dom::window()?.scroll_to_with_scroll_to_options(&options);
    Ok(true)
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub brand: String,
    pub links: Vec<NavLink>,
    pub cta_label: String,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = dom::window().ok().map(|window| {
                let sync = {
                    let window = window.clone();
                    move || {
                        let offset = window.scroll_y().unwrap_or(0.0);
                        scrolled.set(is_scrolled(offset));
                    }
                };
                // Page may be restored mid-scroll
                sync();

                let scroll_callback = Closure::wrap(Box::new(sync) as Box<dyn FnMut()>);
                if let Err(e) = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                ) {
                    warn!("Could not listen for scroll events: {:?}", e);
                }
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let links = props
        .links
        .iter()
        .map(|link| {
            let href = link.href.clone();
            let onclick = Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                match scroll_to_fragment(&href) {
                    Ok(true) => {}
                    Ok(false) => debug!("No section matches nav link {}", href),
                    Err(e) => warn!("Scrolling to {} failed: {}", href, e),
                }
            });
            html! {
                <li><a href={link.href.clone()} {onclick}>{ link.label.clone() }</a></li>
            }
        })
        .collect::<Html>();

    html! {
        <nav class={classes!("navbar", (*scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo">{ props.brand.clone() }</a>
                <ul class="nav-links">
                    { links }
                </ul>
                <CtaButton variant={CtaVariant::Nav} label={props.cta_label.clone()} />
            </div>
        </nav>
    }
}
