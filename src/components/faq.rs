use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::FaqEntry;

/// Which FAQ panel is open. A single slot, so two panels can never be
/// open at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    active: Option<usize>,
}

impl Accordion {
    /// Clicking the open panel closes it; clicking any other panel closes
    /// the open one and opens the clicked one.
    pub fn toggle(self, index: usize) -> Self {
        let was_active = self.is_active(index);
        let mut next = Accordion { active: None };
        if !was_active {
            next.active = Some(index);
        }
        next
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }
}

impl Reducible for Accordion {
    type Action = usize;

    fn reduce(self: Rc<Self>, index: usize) -> Rc<Self> {
        Rc::new(self.toggle(index))
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    answer: String,
    active: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.active.then(|| "active"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.active.to_string()}>
                <span class="question-text">{ props.question.clone() }</span>
                <span class="toggle-icon">{ if props.active { "−" } else { "+" } }</span>
            </button>
            <div class="faq-answer">
                <p>{ props.answer.clone() }</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub entries: Vec<FaqEntry>,
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let accordion = use_reducer(Accordion::default);

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(index, entry)| {
                let on_toggle = {
                    let dispatcher = accordion.dispatcher();
                    Callback::from(move |_| dispatcher.dispatch(index))
                };
                html! {
                    <FaqItem
                        question={entry.question.clone()}
                        answer={entry.answer.clone()}
                        active={accordion.is_active(index)}
                        {on_toggle}
                    />
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_every_panel_closed() {
        let accordion = Accordion::default();
        assert_eq!(accordion.active(), None);
        assert!(!accordion.is_active(0));
    }

    #[test]
    fn opening_a_panel_closes_the_previous_one() {
        let accordion = Accordion::default().toggle(0).toggle(2);
        assert_eq!(accordion.active(), Some(2));
        assert!(!accordion.is_active(0));
    }

    #[test]
    fn clicking_the_open_panel_closes_it() {
        let accordion = Accordion::default().toggle(1).toggle(1);
        assert_eq!(accordion.active(), None);
    }

    #[test]
    fn reducer_applies_toggle() {
        let accordion = Rc::new(Accordion::default()).reduce(2).reduce(2);
        assert_eq!(accordion.active(), None);
    }

    #[test]
    fn at_most_one_panel_after_any_click_sequence() {
        let clicks = [3, 0, 0, 4, 1, 1, 1, 2, 2, 0, 4, 3, 3];
        let panels = 5;
        let mut accordion = Accordion::default();
        for click in clicks {
            let before = accordion;
            accordion = accordion.toggle(click);
            let open = (0..panels).filter(|i| accordion.is_active(*i)).count();
            assert!(open <= 1);
            if before.is_active(click) {
                assert_eq!(open, 0);
            } else {
                assert!(accordion.is_active(click));
            }
        }
    }
}
