//! Hoverable cards
//!
//! Each card owns its `hovered` flag and takes the `visible` flag of the
//! section it sits in, so a whole grid reveals together with per-card delays.

use leptos::prelude::*;

use crate::core::content::{Card, FeatureItem};
use crate::core::palette::{self, FONT};
use crate::core::style;

/// Service / Fleet Pro feature card on the home page
#[component]
pub fn ServiceCard(
    card: Card,
    delay_ms: u32,
    #[prop(into)] visible: Signal<bool>,
) -> impl IntoView {
    let hovered = RwSignal::new(false);

    view! {
        <div
            style=move || style::service_card(hovered.get(), visible.get(), delay_ms)
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            <div style=move || style::card_corner(hovered.get(), true, true, 20) />
            <div style=move || style::card_corner(hovered.get(), true, false, 20) />
            <div style=move || style::card_corner(hovered.get(), false, true, 20) />
            <div style=move || style::card_corner(hovered.get(), false, false, 20) />
            <div style=move || {
                format!("{} margin-bottom: 16px;", style::card_icon(hovered.get(), 20, palette::GRAY))
            }>{card.icon}</div>
            <h3 style=format!(
                "font-family: {FONT}; font-size: 14px; font-weight: 600; color: {}; margin: 0 0 10px; letter-spacing: 0.04em;",
                palette::WHITE,
            )>{card.title}</h3>
            <p style=format!(
                "font-family: {FONT}; font-size: 14px; color: {}; line-height: 1.6; margin: 0;",
                palette::GRAY,
            )>{card.desc}</p>
        </div>
    }
}

/// One-line capability card on the product page
#[component]
pub fn FeatureCard(
    item: FeatureItem,
    delay_ms: u32,
    #[prop(into)] visible: Signal<bool>,
) -> impl IntoView {
    let hovered = RwSignal::new(false);

    view! {
        <div
            style=move || style::feature_card(hovered.get(), visible.get(), delay_ms)
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            <div style=move || style::card_corner(hovered.get(), true, true, 16) />
            <div style=move || style::card_corner(hovered.get(), true, false, 16) />
            <span style=move || {
                format!("{} margin-top: 2px;", style::card_icon(hovered.get(), 16, palette::GRAY))
            }>{item.icon}</span>
            <span style=format!(
                "font-family: {FONT}; font-size: 15px; color: {}; line-height: 1.65;",
                palette::GRAY_LIGHT,
            )>{item.text}</span>
        </div>
    }
}

/// Access role card in the security section
#[component]
pub fn RoleCard(
    role: Card,
    delay_ms: u32,
    #[prop(into)] visible: Signal<bool>,
) -> impl IntoView {
    let hovered = RwSignal::new(false);

    view! {
        <div
            style=move || style::role_card(hovered.get(), visible.get(), delay_ms)
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            <div style=move || {
                let edge = if hovered.get() {
                    format!("linear-gradient(90deg, {}, transparent)", palette::alpha(palette::NEON, "88"))
                } else {
                    "transparent".to_string()
                };
                format!(
                    "position: absolute; top: 0; left: 0; right: 0; height: 1px; background: {edge}; transition: all 0.3s;"
                )
            } />
            <div style=move || {
                format!(
                    "{} margin-bottom: 16px;",
                    style::card_icon(hovered.get(), 22, palette::NEON_DIM),
                )
            }>{role.icon}</div>
            <h3 style=format!(
                "font-family: {FONT}; font-size: 13px; font-weight: 700; color: {}; margin: 0 0 12px; \
                 letter-spacing: 0.1em; text-transform: uppercase;",
                palette::WHITE,
            )>{role.title}</h3>
            <p style=format!(
                "font-family: {FONT}; font-size: 14px; color: {}; line-height: 1.7; margin: 0;",
                palette::GRAY,
            )>{role.desc}</p>
        </div>
    }
}
