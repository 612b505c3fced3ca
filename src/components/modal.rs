use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use web_sys::{MouseEvent, SubmitEvent};
use yew::create_portal;
use yew::prelude::*;

use crate::config;
use crate::content::ModalCopy;
use crate::dom;
use crate::error::UiResult;

/// Presentation rules for the enrollment dialog. Rendered once by the app
/// root; the dialog itself only toggles the `show` class.
pub const STYLESHEET: &str = include_str!("../../assets/modal.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalPhase {
    Detached,
    /// In the document without `show`, so the hidden state gets painted
    /// before the transition starts.
    Mounted,
    Shown,
    /// `show` removed, fading out until the removal timer fires.
    Closing,
}

/// Open/close state of the enrollment dialog.
///
/// Every `open` and `close` hands out a new epoch. Timer callbacks carry
/// the epoch they were scheduled with and are ignored once a later
/// transition has happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModalLifecycle {
    phase: ModalPhase,
    epoch: u32,
}

impl Default for ModalLifecycle {
    fn default() -> Self {
        ModalLifecycle {
            phase: ModalPhase::Detached,
            epoch: 0,
        }
    }
}

impl ModalLifecycle {
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_attached(&self) -> bool {
        self.phase != ModalPhase::Detached
    }

    pub fn is_visible(&self) -> bool {
        self.phase == ModalPhase::Shown
    }

    pub fn accepts_submit(&self) -> bool {
        matches!(self.phase, ModalPhase::Mounted | ModalPhase::Shown)
    }

    fn advance(&mut self, phase: ModalPhase) -> u32 {
        self.phase = phase;
        self.epoch = self.epoch.wrapping_add(1);
        self.epoch
    }

    /// Mounts the dialog hidden. `None` if it is already open.
    pub fn open(&mut self) -> Option<u32> {
        match self.phase {
            ModalPhase::Detached | ModalPhase::Closing => Some(self.advance(ModalPhase::Mounted)),
            ModalPhase::Mounted | ModalPhase::Shown => None,
        }
    }

    pub fn show(&mut self, epoch: u32) -> bool {
        if self.phase == ModalPhase::Mounted && self.epoch == epoch {
            self.phase = ModalPhase::Shown;
            true
        } else {
            false
        }
    }

    /// Starts the fade out. A second close restarts it with a new epoch.
    pub fn close(&mut self) -> Option<u32> {
        if self.is_attached() {
            Some(self.advance(ModalPhase::Closing))
        } else {
            None
        }
    }

    pub fn detach(&mut self, epoch: u32) -> bool {
        if self.phase == ModalPhase::Closing && self.epoch == epoch {
            self.phase = ModalPhase::Detached;
            true
        } else {
            false
        }
    }
}

/// Lifecycle plus the timers it scheduled. Replacing or clearing a handle
/// cancels the pending timer.
#[derive(Default)]
struct ModalDriver {
    lifecycle: ModalLifecycle,
    show: Option<Timeout>,
    removal: Option<Timeout>,
}

#[derive(Clone, PartialEq)]
pub struct ModalContext {
    pub open: Callback<()>,
}

fn acknowledge(message: &str) -> UiResult<()> {
    dom::window()?.alert_with_message(message)?;
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct ModalHostProps {
    pub copy: ModalCopy,
    #[prop_or_default]
    pub children: Children,
}

/// Owns the enrollment dialog and hands an `open` callback to every
/// action button below it.
#[function_component(ModalHost)]
pub fn modal_host(props: &ModalHostProps) -> Html {
    let driver = use_mut_ref(ModalDriver::default);
    let snapshot = use_state_eq(ModalLifecycle::default);

    let open = {
        let driver = driver.clone();
        let snapshot = snapshot.clone();
        Callback::from(move |_: ()| {
            let mut d = driver.borrow_mut();
            let epoch = match d.lifecycle.open() {
                Some(epoch) => epoch,
                None => return,
            };
            d.removal = None;

            let show = {
                let driver = driver.clone();
                let snapshot = snapshot.clone();
                Timeout::new(config::MODAL_SHOW_DELAY_MS, move || {
                    let mut d = driver.borrow_mut();
                    if d.lifecycle.show(epoch) {
                        let lifecycle = d.lifecycle;
                        drop(d);
                        snapshot.set(lifecycle);
                    }
                })
            };
            d.show = Some(show);

            let lifecycle = d.lifecycle;
            drop(d);
            info!("Enrollment modal opened");
            snapshot.set(lifecycle);
        })
    };

    let close = {
        let driver = driver.clone();
        let snapshot = snapshot.clone();
        Callback::from(move |_: ()| {
            let mut d = driver.borrow_mut();
            let epoch = match d.lifecycle.close() {
                Some(epoch) => epoch,
                None => return,
            };
            d.show = None;

            let removal = {
                let driver = driver.clone();
                let snapshot = snapshot.clone();
                Timeout::new(config::MODAL_REMOVE_DELAY_MS, move || {
                    let mut d = driver.borrow_mut();
                    if d.lifecycle.detach(epoch) {
                        let lifecycle = d.lifecycle;
                        drop(d);
                        snapshot.set(lifecycle);
                    }
                })
            };
            d.removal = Some(removal);

            let lifecycle = d.lifecycle;
            drop(d);
            info!("Enrollment modal closing");
            snapshot.set(lifecycle);
        })
    };

    let dialog = if snapshot.is_attached() {
        match dom::body() {
            Ok(body) => create_portal(
                render_dialog(&props.copy, *snapshot, driver.clone(), close),
                body.into(),
            ),
            Err(e) => {
                warn!("Cannot attach enrollment modal: {}", e);
                html! {}
            }
        }
    } else {
        html! {}
    };

    html! {
        <ContextProvider<ModalContext> context={ModalContext { open }}>
            { for props.children.iter() }
            { dialog }
        </ContextProvider<ModalContext>>
    }
}

fn render_dialog(
    copy: &ModalCopy,
    lifecycle: ModalLifecycle,
    driver: Rc<RefCell<ModalDriver>>,
    close: Callback<()>,
) -> Html {
    let dismiss = close.reform(|_: MouseEvent| ());

    let onsubmit = {
        let acknowledgment = copy.acknowledgment.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !driver.borrow().lifecycle.accepts_submit() {
                return;
            }
            // Placeholder: nothing entered in the form leaves the page.
            info!("Enrollment form submitted");
            if let Err(e) = acknowledge(&acknowledgment) {
                warn!("Could not show acknowledgment: {}", e);
            }
            close.emit(());
        })
    };

    html! {
        <div class={classes!("modal", lifecycle.is_visible().then(|| "show"))}>
            <div class="modal-overlay" onclick={dismiss.clone()}></div>
            <div class="modal-content" role="dialog" aria-modal="true">
                <button type="button" class="modal-close" aria-label={copy.close_label.clone()} onclick={dismiss}>
                    {"×"}
                </button>
                <h2>{ copy.heading.clone() }</h2>
                <p>{ copy.text.clone() }</p>
                <form class="enrollment-form" {onsubmit}>
                    <input type="text" placeholder={copy.name_placeholder.clone()} required=true />
                    <input type="email" placeholder={copy.email_placeholder.clone()} required=true />
                    <input type="tel" placeholder={copy.phone_placeholder.clone()} />
                    <button type="submit" class="btn-primary btn-large btn-block">
                        { copy.submit.clone() }
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle() {
        let mut modal = ModalLifecycle::default();
        assert!(!modal.is_attached());

        let shown = modal.open().unwrap();
        assert_eq!(modal.phase(), ModalPhase::Mounted);
        assert!(modal.is_attached());
        assert!(!modal.is_visible());

        assert!(modal.show(shown));
        assert!(modal.is_visible());

        let removal = modal.close().unwrap();
        assert_eq!(modal.phase(), ModalPhase::Closing);
        assert!(!modal.is_visible());
        assert!(modal.is_attached());

        assert!(modal.detach(removal));
        assert!(!modal.is_attached());
    }

    #[test]
    fn close_before_show_delay_still_detaches() {
        let mut modal = ModalLifecycle::default();
        let shown = modal.open().unwrap();
        let removal = modal.close().unwrap();

        // the show timer was cancelled, but a late callback must not revive it
        assert!(!modal.show(shown));
        assert!(modal.detach(removal));
        assert_eq!(modal.phase(), ModalPhase::Detached);
    }

    #[test]
    fn reopening_during_fade_out_survives_the_old_removal() {
        let mut modal = ModalLifecycle::default();
        let first = modal.open().unwrap();
        modal.show(first);
        let removal = modal.close().unwrap();

        let second = modal.open().unwrap();
        assert!(!modal.detach(removal));
        assert!(modal.is_attached());
        assert!(modal.show(second));
        assert!(modal.is_visible());
    }

    #[test]
    fn closing_twice_only_honours_the_latest_removal() {
        let mut modal = ModalLifecycle::default();
        let shown = modal.open().unwrap();
        modal.show(shown);
        let first = modal.close().unwrap();
        let second = modal.close().unwrap();

        assert!(!modal.detach(first));
        assert!(modal.is_attached());
        assert!(modal.detach(second));
        assert!(!modal.is_attached());
    }

    #[test]
    fn open_is_ignored_while_already_open() {
        let mut modal = ModalLifecycle::default();
        let shown = modal.open().unwrap();
        assert_eq!(modal.open(), None);
        assert!(modal.show(shown));
        assert_eq!(modal.open(), None);
        assert!(modal.is_visible());
    }

    #[test]
    fn close_without_modal_does_nothing() {
        let mut modal = ModalLifecycle::default();
        assert_eq!(modal.close(), None);
        assert!(!modal.detach(0));
    }

    #[test]
    fn submissions_are_only_acknowledged_while_open() {
        let mut modal = ModalLifecycle::default();
        assert!(!modal.accepts_submit());
        let shown = modal.open().unwrap();
        assert!(modal.accepts_submit());
        modal.show(shown);
        assert!(modal.accepts_submit());
        modal.close();
        assert!(!modal.accepts_submit());
    }

    #[test]
    fn stylesheet_covers_show_state() {
        assert!(STYLESHEET.contains(".modal.show"));
        assert!(STYLESHEET.contains("transition: opacity 0.3s ease"));
    }
}
