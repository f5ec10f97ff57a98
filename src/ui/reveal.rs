//! `use_reveal` hook
//!
//! Binds a [`RevealController`] to the browser's `IntersectionObserver`.
//! The section renders hidden on the server and flips to visible the first
//! time it scrolls into view; after that the observer is disconnected.

use leptos::html;
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use crate::core::reveal::RevealController;

/// Observe a section and report when it first becomes visible.
///
/// Attach the returned `NodeRef` to the section root. The signal never goes
/// back to `false` once set.
pub fn use_reveal(threshold: f64) -> (NodeRef<html::Section>, ReadSignal<bool>) {
    let node_ref = NodeRef::<html::Section>::new();
    let visible = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::task::spawn_local;

        let controller = StoredValue::new_local(RevealController::<dom::DomObservation>::new(
            threshold,
        ));

        Effect::new(move |_| {
            let Some(section) = node_ref.get() else {
                return;
            };

            let shown = controller
                .try_update_value(|c| {
                    c.attach(|t| {
                        dom::observe(&section, t, move |intersecting| {
                            // The observer callback is still on the stack here;
                            // defer so disconnecting can drop it safely.
                            spawn_local(async move {
                                let fired = controller
                                    .try_update_value(|c| c.on_intersection(intersecting))
                                    .unwrap_or(false);
                                if fired {
                                    visible.set(true);
                                }
                            });
                        })
                    })
                })
                .unwrap_or(true);

            if shown {
                visible.set(true);
            }
        });

        on_cleanup(move || {
            controller.try_update_value(|c| c.teardown());
        });
    }

    #[cfg(feature = "ssr")]
    let _ = threshold;

    (node_ref, visible.read_only())
}

#[cfg(not(feature = "ssr"))]
mod dom {
    use leptos::wasm_bindgen::closure::Closure;
    use leptos::wasm_bindgen::{JsCast, JsValue};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::core::reveal::{ObservationHandle, ObserveError, Threshold};

    type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// Live `IntersectionObserver` plus the callback it invokes
    pub struct DomObservation {
        observer: IntersectionObserver,
        _callback: EntriesCallback,
    }

    impl ObservationHandle for DomObservation {
        fn disconnect(&mut self) {
            self.observer.disconnect();
        }
    }

    pub fn observe(
        target: &web_sys::Element,
        threshold: Threshold,
        on_entry: impl Fn(bool) + 'static,
    ) -> Result<DomObservation, ObserveError> {
        let window = web_sys::window().ok_or(ObserveError::Unsupported)?;
        let supported = js_sys::Reflect::has(&window, &"IntersectionObserver".into())
            .unwrap_or(false);
        if !supported {
            return Err(ObserveError::Unsupported);
        }

        let callback: EntriesCallback =
            Closure::new(move |entries: js_sys::Array, _: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|e| e.is_intersecting())
                        .unwrap_or(false)
                });
                if intersecting {
                    on_entry(true);
                }
            });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold.value()));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| ObserveError::Host(format!("{e:?}")))?;
        observer.observe(target);

        Ok(DomObservation {
            observer,
            _callback: callback,
        })
    }
}
