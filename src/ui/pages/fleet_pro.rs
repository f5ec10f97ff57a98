//! Fleet Pro product page (`/fleetpro`)

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::app::routes;
use crate::core::content::{
    LOCATION, Metric, MetricValue, PRODUCT_METRICS, PRODUCT_SECTIONS, ProductSection, SectionBody,
    stagger_delay,
};
use crate::core::palette::{self, FONT, alpha};
use crate::core::style::{self, Reveal};
use crate::ui::cards::{FeatureCard, RoleCard};
use crate::ui::count_up::AnimatedNumber;
use crate::ui::footer::current_year;
use crate::ui::links::HoverLink;
use crate::ui::pages::home::{CraneIcon, eyebrow, top_rule};
use crate::ui::reveal::use_reveal;

pub const FLEET_PRO_TITLE: &str = "FleetPro — Fleet Management Platform | BRDG";

const HERO_THRESHOLD: f64 = 0.05;
const SECTION_THRESHOLD: f64 = 0.08;
const CTA_THRESHOLD: f64 = 0.1;

#[component]
pub fn FleetProPage() -> impl IntoView {
    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        window().scroll_to_with_x_and_y(0.0, 0.0);
    });

    view! {
        <Title text=FLEET_PRO_TITLE />
        <Meta
            name="description"
            content="FleetPro: equipment allocation, billing and forecasting for construction companies managing 20–500 units."
        />

        <div style=format!(
            "background: {}; color: {}; min-height: 100vh;",
            palette::VOID,
            palette::WHITE,
        )>
            <Hero />
            {PRODUCT_SECTIONS
                .iter()
                .enumerate()
                .map(|(index, section)| view! { <FeatureSection section=*section index=index /> })
                .collect_view()}
            <FooterCta />
        </div>
    }
}

fn back_link() -> impl IntoView {
    view! {
        <HoverLink href=routes::HOME look=style::quiet_link>
            "← Back to BRDG Group"
        </HoverLink>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let (section_ref, visible) = use_reveal(HERO_THRESHOLD);

    let orb = |position: &str, size: u32, color: &str, blur: u32, animation: &str| {
        format!(
            "position: absolute; {position} width: {size}px; height: {size}px; border-radius: 50%; \
             background: radial-gradient(circle, {} 0%, transparent 70%); filter: blur({blur}px); \
             animation: {animation}; pointer-events: none;",
            alpha(color, "07")
        )
    };

    view! {
        <section
            node_ref=section_ref
            style=format!(
                "min-height: 100vh; display: flex; flex-direction: column; align-items: center; \
                 justify-content: center; text-align: center; position: relative; overflow: hidden; \
                 background: linear-gradient(180deg, {void} 0%, {} 60%, {void} 100%); padding: 120px 1.5rem 80px;",
                palette::DEEP,
                void = palette::VOID,
            )
        >
            <div style=orb("top: 12%; left: 8%;", 500, palette::NEON, 60, "fpOrbFloat 9s ease-in-out infinite") />
            <div style=orb(
                "bottom: 15%; right: 6%;",
                350,
                palette::ACCENT_BLUE,
                40,
                "fpOrbFloat 11s ease-in-out infinite 2s",
            ) />

            <div style=move || {
                format!(
                    "position: relative; z-index: 2; max-width: 820px; {}",
                    Reveal::up(40, 1000).style(visible.get()),
                )
            }>
                <div style="margin-bottom: 48px;">{back_link()}</div>

                <div style=format!(
                    "display: inline-flex; align-items: center; gap: 8px; padding: 7px 18px; \
                     border: 1px solid {}; background: {}; margin-bottom: 36px;",
                    palette::BORDER,
                    alpha(palette::NEON, "06"),
                )>
                    <span style=format!(
                        "width: 5px; height: 5px; border-radius: 50%; background: {neon}; box-shadow: 0 0 6px {neon}; \
                         animation: fpDotPulse 2s ease-in-out infinite; display: inline-block; flex-shrink: 0;",
                        neon = palette::NEON,
                    ) />
                    <span style=format!(
                        "color: {}; font-size: 11px; letter-spacing: 0.2em; text-transform: uppercase; \
                         font-family: {FONT}; font-weight: 600;",
                        palette::NEON,
                    )>"Fleet Management Platform"</span>
                </div>

                <div style="display: flex; justify-content: center; margin-bottom: 20px; \
                            animation: fpIconGlow 3s ease-in-out infinite;">
                    <CraneIcon size=64 />
                </div>

                <div style=format!(
                    "font-family: {FONT}; font-size: clamp(28px, 4vw, 40px); font-weight: 800; color: #F1F5F9; \
                     letter-spacing: -0.02em; margin-bottom: 16px;"
                )>"FleetPro"</div>

                <h1 style=format!(
                    "font-family: {FONT}; font-size: clamp(2.6rem, 6vw, 4.75rem); font-weight: 900; \
                     line-height: 1.05; letter-spacing: 0.01em; margin: 0; color: {};",
                    palette::WHITE,
                )>
                    "Manage your fleet."
                    <br />
                    <span style=format!(
                        "background: linear-gradient(135deg, {} 0%, {} 100%); -webkit-background-clip: text; \
                         -webkit-text-fill-color: transparent; background-clip: text;",
                        palette::NEON,
                        palette::ACCENT_BLUE,
                    )>"Master your costs."</span>
                </h1>

                <p style=format!(
                    "color: {}; font-size: 17px; line-height: 1.75; max-width: 540px; margin: 24px auto 0; \
                     font-family: {FONT}; letter-spacing: 0.015em;",
                    palette::GRAY,
                )>"Purpose-built for construction companies managing 20–500 equipment units."</p>

                <div style=format!(
                    "display: inline-flex; margin-top: 56px; border: 1px solid {}; background: {};",
                    palette::BORDER,
                    palette::SURFACE,
                )>
                    {PRODUCT_METRICS
                        .iter()
                        .enumerate()
                        .map(|(i, metric)| {
                            let last = i + 1 == PRODUCT_METRICS.len();
                            view! { <MetricCell metric=*metric last=last visible=visible /> }
                        })
                        .collect_view()}
                </div>

                <div style="display: flex; gap: 16px; justify-content: center; margin-top: 48px; flex-wrap: wrap;">
                    <HoverLink href="#cta" look=style::product_button>
                        "Request a Demo →"
                    </HoverLink>
                    <HoverLink
                        href="/#start"
                        look=style::outline_button
                        extra_style=" color: #E6EDF3;"
                    >
                        "Contact Us"
                    </HoverLink>
                </div>
            </div>
        </section>
    }
}

#[component]
fn MetricCell(metric: Metric, last: bool, #[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let divider = if last {
        "none".to_string()
    } else {
        format!("1px solid {}", palette::BORDER)
    };

    let value = match metric.value {
        MetricValue::CountUp { target, suffix } => {
            view! { <AnimatedNumber target=target suffix=suffix trigger=visible /> }.into_any()
        }
        MetricValue::Fixed(text) => text.into_any(),
    };

    view! {
        <div style=format!(
            "padding: 28px 40px; text-align: center; border-right: {divider}; min-width: 140px;"
        )>
            <div style=format!(
                "font-family: {FONT}; font-size: clamp(2rem, 4vw, 2.8rem); font-weight: 900; color: {}; \
                 text-shadow: 0 0 20px {};",
                palette::NEON,
                alpha(palette::NEON, "55"),
            )>{value}</div>
            <div style=format!(
                "font-family: {FONT}; font-size: 11px; color: {}; letter-spacing: 0.12em; \
                 text-transform: uppercase; margin-top: 6px; font-weight: 500;",
                palette::GRAY,
            )>{metric.label}</div>
        </div>
    }
}

#[component]
fn FeatureSection(section: ProductSection, index: usize) -> impl IntoView {
    let (section_ref, visible) = use_reveal(SECTION_THRESHOLD);
    let (from, to) = if index % 2 == 0 {
        (palette::VOID, palette::DEEP)
    } else {
        (palette::DEEP, palette::VOID)
    };

    let body = match section.body {
        SectionBody::Items(items) => view! {
            <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 12px;">
                {items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        view! { <FeatureCard item=*item delay_ms=stagger_delay(i, 60, 200) visible=visible /> }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        SectionBody::Roles { roles, badges } => view! {
            <div>
                <div style="display: flex; gap: 16px; flex-wrap: wrap;">
                    {roles
                        .iter()
                        .enumerate()
                        .map(|(i, role)| {
                            view! { <RoleCard role=*role delay_ms=stagger_delay(i, 80, 200) visible=visible /> }
                        })
                        .collect_view()}
                </div>
                <div style=move || {
                    let (opacity, offset) = if visible.get() { (1, 0) } else { (0, 10) };
                    format!(
                        "display: flex; flex-wrap: wrap; gap: 10px; margin-top: 32px; opacity: {opacity}; \
                         transform: translateY({offset}px); transition: all 0.6s ease 0.5s;"
                    )
                }>
                    {badges
                        .iter()
                        .map(|badge| {
                            view! {
                                <span style=format!(
                                    "padding: 6px 16px; border: 1px solid {}; background: {}; color: {}; \
                                     font-family: {FONT}; font-size: 11px; letter-spacing: 0.08em; font-weight: 600;",
                                    alpha(palette::NEON, "33"),
                                    alpha(palette::NEON, "08"),
                                    palette::NEON,
                                )>{format!("✓ {badge}")}</span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
        .into_any(),
    };

    view! {
        <section
            id=section.id
            node_ref=section_ref
            style=format!(
                "padding: 100px 1.5rem; background: linear-gradient(180deg, {from} 0%, {to} 100%); \
                 border-top: 1px solid {}; position: relative;",
                palette::BORDER,
            )
        >
            <div style=top_rule("1A") />
            <div style="max-width: 960px; margin: 0 auto;">
                <div style=move || {
                    format!("margin-bottom: 48px; {}", Reveal::up(20, 700).style(visible.get()))
                }>
                    <span style=eyebrow()>{section.label}</span>
                    <h2 style=format!(
                        "font-family: {FONT}; font-size: clamp(1.6rem, 3.5vw, 2.2rem); font-weight: 700; \
                         color: {}; margin-top: 10px; line-height: 1.2; letter-spacing: 0.03em;",
                        palette::WHITE,
                    )>{section.title}</h2>
                </div>
                {body}
            </div>
        </section>
    }
}

#[component]
fn FooterCta() -> impl IntoView {
    let (section_ref, visible) = use_reveal(CTA_THRESHOLD);

    view! {
        <section
            id="cta"
            node_ref=section_ref
            style=format!(
                "padding: 100px 1.5rem 80px; background: linear-gradient(180deg, {} 0%, {} 100%); \
                 border-top: 1px solid {}; text-align: center; position: relative;",
                palette::DEEP,
                palette::VOID,
                palette::BORDER,
            )
        >
            <div style=format!("{} box-shadow: 0 0 20px {};", top_rule("44"), alpha(palette::NEON, "22")) />
            <div style=move || {
                format!("max-width: 600px; margin: 0 auto; {}", Reveal::up(30, 800).style(visible.get()))
            }>
                <div style="display: flex; justify-content: center; margin-bottom: 28px; \
                            animation: fpIconGlow 3s ease-in-out infinite;">
                    <CraneIcon size=48 />
                </div>
                <h2 style=format!(
                    "font-family: {FONT}; font-size: clamp(1.6rem, 3.5vw, 2.2rem); font-weight: 700; \
                     color: {}; margin: 0; letter-spacing: 0.04em;",
                    palette::WHITE,
                )>
                    "Ready to streamline"
                    <br />
                    <span style=format!("color: {};", palette::NEON)>"your fleet?"</span>
                </h2>
                <p style=format!(
                    "color: {}; font-size: 15px; line-height: 1.75; margin-top: 16px; font-family: {FONT};",
                    palette::GRAY,
                )>
                    "FleetPro is actively deployed across major infrastructure projects in Australia. Get a personalised walkthrough of the platform."
                </p>
                <div style="display: flex; gap: 16px; justify-content: center; margin-top: 40px; flex-wrap: wrap;">
                    <HoverLink href="/#start" look=style::product_button>
                        "Request a Demo →"
                    </HoverLink>
                    <HoverLink href="/#start" look=style::outline_button>
                        "Contact Us"
                    </HoverLink>
                </div>
                <div style="margin-top: 60px;">
                    {back_link()}
                    <p style=format!(
                        "color: {}; font-size: 11px; font-family: {FONT}; margin: 20px 0 0; opacity: 0.5; \
                         letter-spacing: 0.1em;",
                        palette::GRAY,
                    )>{format!("© {} BRDG — {}", current_year(), LOCATION.to_uppercase())}</p>
                </div>
            </div>
        </section>
    }
}
