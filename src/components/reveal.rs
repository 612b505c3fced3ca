use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config;
use crate::error::UiResult;
use crate::viewport::{ViewportWatcher, WatchOptions};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStyle {
    Hidden,
    Shown,
}

impl RevealStyle {
    pub fn properties(self) -> Vec<(&'static str, String)> {
        match self {
            RevealStyle::Hidden => vec![
                ("opacity", "0".to_string()),
                ("transform", format!("translateY({}px)", config::REVEAL_OFFSET_PX)),
                ("transition", config::REVEAL_TRANSITION.to_string()),
            ],
            RevealStyle::Shown => vec![
                ("opacity", "1".to_string()),
                ("transform", "translateY(0)".to_string()),
            ],
        }
    }

    pub fn apply(self, element: &HtmlElement) -> UiResult<()> {
        let style = element.style();
        for (property, value) in self.properties() {
            style.set_property(property, &value)?;
        }
        Ok(())
    }
}

pub const REVEAL_OPTIONS: WatchOptions = WatchOptions {
    threshold: config::REVEAL_THRESHOLD,
    root_margin: Some(config::REVEAL_ROOT_MARGIN),
};

/// Shared watcher for every `Reveal` under one scope.
#[derive(Clone)]
pub struct RevealWatcher(Rc<ViewportWatcher>);

impl PartialEq for RevealWatcher {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

fn reveal_watcher() -> UiResult<RevealWatcher> {
    let watcher = ViewportWatcher::new(REVEAL_OPTIONS, |entry, observer| {
        if !entry.is_intersecting() {
            return;
        }
        let target = entry.target();
        // Revealing is one-way, nothing left to watch for
        observer.unobserve(&target);
        if let Ok(element) = target.dyn_into::<HtmlElement>() {
            if let Err(e) = RevealStyle::Shown.apply(&element) {
                warn!("Could not reveal element: {}", e);
            }
        }
    })?;
    Ok(RevealWatcher(Rc::new(watcher)))
}

#[derive(Properties, PartialEq)]
pub struct RevealScopeProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RevealScope)]
pub fn reveal_scope(props: &RevealScopeProps) -> Html {
    let watcher = use_state(|| match reveal_watcher() {
        Ok(watcher) => Some(watcher),
        Err(e) => {
            warn!("Scroll reveal disabled: {}", e);
            None
        }
    });

    html! {
        <ContextProvider<Option<RevealWatcher>> context={(*watcher).clone()}>
            { for props.children.iter() }
        </ContextProvider<Option<RevealWatcher>>>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Element that fades and slides in the first time it scrolls into view.
/// Without a watcher it is simply left visible.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let watcher = use_context::<Option<RevealWatcher>>().flatten();

    {
        let node = node.clone();
        use_effect_with_deps(move |watcher| {
            let observed = match (watcher.clone(), node.cast::<HtmlElement>()) {
                (Some(watcher), Some(element)) => match RevealStyle::Hidden.apply(&element) {
                    Ok(()) => {
                        watcher.0.observe(&element);
                        Some((watcher, element))
                    }
                    Err(e) => {
                        debug!("Skipping reveal: {}", e);
                        None
                    }
                },
                _ => None,
            };

            move || {
                if let Some((watcher, element)) = observed {
                    watcher.0.unobserve(&element);
                }
            }
        }, watcher);
    }

    html! {
        <div class={props.class.clone()} ref={node}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(style: RevealStyle, property: &str) -> Option<String> {
        style
            .properties()
            .into_iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value)
    }

    #[test]
    fn hidden_elements_start_faded_and_offset() {
        assert_eq!(value(RevealStyle::Hidden, "opacity").as_deref(), Some("0"));
        assert_eq!(
            value(RevealStyle::Hidden, "transform").as_deref(),
            Some("translateY(30px)")
        );
        assert_eq!(
            value(RevealStyle::Hidden, "transition").as_deref(),
            Some("opacity 0.6s ease, transform 0.6s ease")
        );
    }

    #[test]
    fn shown_elements_keep_the_transition() {
        assert_eq!(value(RevealStyle::Shown, "opacity").as_deref(), Some("1"));
        assert_eq!(
            value(RevealStyle::Shown, "transform").as_deref(),
            Some("translateY(0)")
        );
        assert_eq!(value(RevealStyle::Shown, "transition"), None);
    }

    #[test]
    fn watcher_waits_for_a_tenth_inside_a_shrunk_viewport() {
        assert_eq!(REVEAL_OPTIONS.threshold, 0.1);
        assert_eq!(REVEAL_OPTIONS.root_margin, Some("0px 0px -100px 0px"));
    }
}
