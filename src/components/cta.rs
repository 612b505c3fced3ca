use log::debug;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::components::modal::ModalContext;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CtaVariant {
    Primary,
    Secondary,
    Nav,
}

impl CtaVariant {
    pub fn class(self) -> &'static str {
        match self {
            CtaVariant::Primary => "btn-primary",
            CtaVariant::Secondary => "btn-secondary",
            CtaVariant::Nav => "btn-nav",
        }
    }
}

/// Whether a click opens the modal. Buttons inside a link navigate.
pub fn intercepts(inside_link: bool) -> bool {
    !inside_link
}

/// Ancestor check on the rendered button. Yew delegates events to the app
/// root, so the event's current target cannot be used for this.
fn button_inside_link(button: &NodeRef) -> bool {
    button
        .cast::<Element>()
        .and_then(|el| el.closest("a").ok().flatten())
        .is_some()
}

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    pub variant: CtaVariant,
    pub label: String,
    /// Render the button inside a link; the link navigates and the modal
    /// stays closed.
    #[prop_or_default]
    pub href: Option<String>,
    #[prop_or_default]
    pub class: Classes,
}

impl CtaButtonProps {
    pub fn wraps_in_link(&self) -> bool {
        self.href.is_some()
    }
}

/// Action button that opens the enrollment modal unless it sits inside a
/// link.
#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let modal = use_context::<ModalContext>();
    let node = use_node_ref();

    let onclick = {
        let node = node.clone();
        let linked = props.wraps_in_link();
        Callback::from(move |e: MouseEvent| {
            if !intercepts(linked || button_inside_link(&node)) {
                return;
            }
            e.prevent_default();
            match &modal {
                Some(modal) => modal.open.emit(()),
                None => debug!("Action button clicked outside a modal host"),
            }
        })
    };

    let button = html! {
        <button ref={node} class={classes!(props.variant.class(), props.class.clone())} {onclick}>
            { props.label.clone() }
        </button>
    };

    match &props.href {
        Some(href) => html! { <a href={href.clone()}>{ button }</a> },
        None => button,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_markup_classes() {
        assert_eq!(CtaVariant::Primary.class(), "btn-primary");
        assert_eq!(CtaVariant::Secondary.class(), "btn-secondary");
        assert_eq!(CtaVariant::Nav.class(), "btn-nav");
    }

    fn props(href: Option<&str>) -> CtaButtonProps {
        CtaButtonProps {
            variant: CtaVariant::Secondary,
            label: "Ver temario".to_string(),
            href: href.map(str::to_string),
            class: Classes::new(),
        }
    }

    #[test]
    fn linked_buttons_navigate_instead_of_opening_the_modal() {
        let linked = props(Some("#curriculum"));
        assert!(linked.wraps_in_link());
        assert!(!intercepts(linked.wraps_in_link()));
    }

    #[test]
    fn plain_buttons_open_the_modal() {
        let plain = props(None);
        assert!(!plain.wraps_in_link());
        assert!(intercepts(plain.wraps_in_link()));
    }
}
