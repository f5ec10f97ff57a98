//! Animated metric counter

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use crate::core::count_up::{CountUp, DEFAULT_DURATION_MS};

/// Counts from zero to `target` once `trigger` turns true
#[component]
pub fn AnimatedNumber(
    target: u32,
    #[prop(optional)] suffix: &'static str,
    #[prop(into)] trigger: Signal<bool>,
) -> impl IntoView {
    let shown = RwSignal::new(0_u32);

    #[cfg(not(feature = "ssr"))]
    {
        let counter = StoredValue::new_local(CountUp::new(target, DEFAULT_DURATION_MS));

        Effect::new(move |_| {
            let started = counter.try_with_value(CountUp::has_started).unwrap_or(true);
            if trigger.get() && !started {
                frames::run(counter, shown);
            }
        });
    }

    #[cfg(feature = "ssr")]
    let _ = (target, trigger);

    view! { {move || shown.get()}{suffix} }
}

#[cfg(not(feature = "ssr"))]
mod frames {
    use std::cell::RefCell;
    use std::rc::Rc;

    use leptos::prelude::*;
    use leptos::task::spawn_local;
    use leptos::wasm_bindgen::JsCast;
    use leptos::wasm_bindgen::closure::Closure;

    use crate::core::count_up::CountUp;

    type FrameCallback = Closure<dyn FnMut(f64)>;

    /// Drive `counter` from animation frame timestamps until it finishes
    pub fn run(counter: StoredValue<CountUp, LocalStorage>, shown: RwSignal<u32>) {
        let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let slot_for_frame = slot.clone();

        let frame = move |now: f64| {
            let finished = counter
                .try_update_value(|c| {
                    c.start(now);
                    let value = c.tick(now);
                    shown.try_set(value);
                    c.is_finished()
                })
                .unwrap_or(true);

            if finished {
                let slot = slot_for_frame.clone();
                spawn_local(async move {
                    slot.borrow_mut().take();
                });
                return;
            }

            let slot = slot_for_frame.borrow();
            if let (Some(window), Some(callback)) = (web_sys::window(), slot.as_ref()) {
                let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
            }
        };

        let callback: FrameCallback = Closure::new(frame);
        if let Some(window) = web_sys::window() {
            let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
        }
        *slot.borrow_mut() = Some(callback);
    }
}
