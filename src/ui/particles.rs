//! Canvas renderer for the hero particle field

use leptos::ev::MouseEvent;
use leptos::html;
use leptos::prelude::*;

use crate::core::particles::ParticleField;

/// Full-bleed animated canvas; sized by its positioned parent
#[component]
pub fn ParticlesBackground() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let field = StoredValue::new_local(None::<ParticleField>);

    #[cfg(not(feature = "ssr"))]
    {
        let running = StoredValue::new(true);

        Effect::new(move |_| {
            if let Some(canvas) = canvas_ref.get() {
                render::start(canvas, field, running);
            }
        });

        on_cleanup(move || {
            running.try_set_value(false);
        });
    }

    let on_move = move |ev: MouseEvent| {
        let point = (f64::from(ev.offset_x()), f64::from(ev.offset_y()));
        field.update_value(|f| {
            if let Some(f) = f.as_mut() {
                f.set_pointer(Some(point));
            }
        });
    };

    let on_leave = move |_: MouseEvent| {
        field.update_value(|f| {
            if let Some(f) = f.as_mut() {
                f.set_pointer(None);
            }
        });
    };

    view! {
        <canvas
            node_ref=canvas_ref
            aria-hidden="true"
            on:mousemove=on_move
            on:mouseleave=on_leave
            style="position: absolute; top: 0; left: 0; width: 100%; height: 100%; z-index: 0; \
                   pointer-events: auto; overflow: hidden;"
        />
    }
}

#[cfg(not(feature = "ssr"))]
mod render {
    use std::cell::RefCell;
    use std::rc::Rc;

    use leptos::prelude::*;
    use leptos::task::spawn_local;
    use leptos::wasm_bindgen::JsCast;
    use leptos::wasm_bindgen::closure::Closure;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use crate::core::palette::NEON_RGB;
    use crate::core::particles::{ParticleField, ParticleOptions};

    type FrameCallback = Closure<dyn FnMut(f64)>;

    pub fn start(
        canvas: HtmlCanvasElement,
        field: StoredValue<Option<ParticleField>, LocalStorage>,
        running: StoredValue<bool>,
    ) {
        let Some(context) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            leptos::logging::warn!("Canvas 2d context unavailable, particles disabled");
            return;
        };

        let options = ParticleOptions::default();
        let interval = options.frame_interval_ms();
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        let (width, height) = css_size(&canvas);
        field.set_value(Some(ParticleField::new(options, width, height, seed)));

        let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let slot_for_frame = slot.clone();
        let mut last_frame: Option<f64> = None;

        let frame = move |now: f64| {
            let mut alive = running.try_get_value().unwrap_or(false);

            let elapsed = last_frame.map_or(interval, |last| now - last);
            if alive && elapsed + 1.0 >= interval {
                last_frame = Some(now);
                alive = field
                    .try_update_value(|f| {
                        if let Some(f) = f.as_mut() {
                            fit(&canvas, f);
                            f.step(elapsed / interval);
                            draw(&context, f);
                        }
                    })
                    .is_some();
            }

            if !alive {
                // Break the slot <-> closure cycle once this frame has returned
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

    fn css_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
        (
            f64::from(canvas.client_width()),
            f64::from(canvas.client_height()),
        )
    }

    /// Match the backing store to the element size and device pixel ratio
    fn fit(canvas: &HtmlCanvasElement, field: &mut ParticleField) {
        let (width, height) = css_size(canvas);
        let ratio = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
        let backing_width = (width * ratio).round() as u32;
        let backing_height = (height * ratio).round() as u32;

        if canvas.width() != backing_width || canvas.height() != backing_height {
            canvas.set_width(backing_width);
            canvas.set_height(backing_height);
        }
        if field.size() != (width, height) {
            field.resize(width, height);
        }
    }

    fn draw(context: &CanvasRenderingContext2d, field: &ParticleField) {
        let (width, height) = field.size();
        let ratio = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
        let _ = context.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0);
        context.clear_rect(0.0, 0.0, width, height);
        context.set_line_width(1.0);

        for link in field.links().into_iter().chain(field.grab_links()) {
            context.set_stroke_style_str(&format!("rgba({NEON_RGB}, {:.3})", link.alpha));
            context.begin_path();
            context.move_to(link.from.0, link.from.1);
            context.line_to(link.to.0, link.to.1);
            context.stroke();
        }

        for p in field.particles() {
            context.set_fill_style_str(&format!("rgba({NEON_RGB}, {:.3})", p.opacity));
            context.begin_path();
            let _ = context.arc(p.x, p.y, p.radius, 0.0, std::f64::consts::TAU);
            context.fill();
        }
    }
}
