use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::UiResult;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WatchOptions {
    pub threshold: f64,
    pub root_margin: Option<&'static str>,
}

/// An `IntersectionObserver` bundled with the closure it calls back into.
/// The closure has to outlive the observer, so both are dropped together
/// and the observer is disconnected first.
pub struct ViewportWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportWatcher {
    pub fn new<F>(options: WatchOptions, mut on_entry: F) -> UiResult<Self>
    where
        F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_entry(&entry, &observer);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let mut init = IntersectionObserverInit::new();
        init.threshold(&JsValue::from_f64(options.threshold));
        if let Some(margin) = options.root_margin {
            init.root_margin(margin);
        }

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        Ok(ViewportWatcher {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }

    pub fn unobserve(&self, element: &Element) {
        self.observer.unobserve(element);
    }
}

impl Drop for ViewportWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
