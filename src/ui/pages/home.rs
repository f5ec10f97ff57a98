//! Home page
//!
//! Hero with the particle field, then Mission, Services, Why BRDG, the
//! Fleet Pro showcase and the contact form. Every section below the hero
//! reveals itself once when scrolled into view.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::app::routes;
use crate::core::content::{
    BRAND, FLEET_PRO_FEATURES, SERVICES, TAGLINE, WHY_STATS, stagger_delay,
};
use crate::core::palette::{self, FONT, alpha};
use crate::core::reveal::DEFAULT_THRESHOLD;
use crate::core::style::{self, Reveal, Slide};
use crate::ui::cards::ServiceCard;
use crate::ui::contact::StartProject;
use crate::ui::footer::Footer;
use crate::ui::links::HoverLink;
use crate::ui::navbar::Navbar;
use crate::ui::particles::ParticlesBackground;
use crate::ui::reveal::use_reveal;

pub const HOME_TITLE: &str = "BRDG | Bridging Real-World Data with Ground Operations";

/// Small uppercase label above a section heading
pub(crate) fn eyebrow() -> String {
    format!(
        "color: {}; font-size: 11px; letter-spacing: 0.25em; text-transform: uppercase; \
         font-family: {FONT}; font-weight: 600;",
        palette::NEON
    )
}

/// Faint neon rule along the top edge of a section
pub(crate) fn top_rule(alpha_hex: &str) -> String {
    format!(
        "position: absolute; top: 0; left: 0; right: 0; height: 1px; \
         background: linear-gradient(90deg, transparent, {}, transparent);",
        alpha(palette::NEON, alpha_hex)
    )
}

fn section_heading() -> String {
    format!(
        "font-family: {FONT}; font-size: clamp(1.6rem, 3.5vw, 2.2rem); font-weight: 700; \
         color: {}; margin-top: 12px; letter-spacing: 0.04em;",
        palette::WHITE
    )
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=HOME_TITLE />
        <Meta
            name="description"
            content="BRDG builds high-performance SaaS products and custom software that connect real-world data to ground operations."
        />

        <div style=format!(
            "background: {}; color: {}; min-height: 100vh;",
            palette::VOID,
            palette::WHITE,
        )>
            <Navbar />
            <Hero />
            <Mission />
            <Services />
            <WhyBrdg />
            <FleetProShowcase />
            <StartProject />
            <Footer />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section
            id="hero"
            style=format!(
                "min-height: 100vh; display: flex; flex-direction: column; align-items: center; \
                 justify-content: center; text-align: center; position: relative; overflow: hidden; \
                 background: linear-gradient(180deg, {void} 0%, {deep} 40%, #051020 70%, {deep} 100%); \
                 padding: 0 1.5rem;",
                void = palette::VOID,
                deep = palette::DEEP,
            )
        >
            <ParticlesBackground />
            <div style="position: relative; z-index: 2;">
                <div class="hero-title-glow" style="isolation: isolate;">
                    <h1 style=format!(
                        "font-family: {FONT}; font-size: clamp(4.5rem, 14vw, 12rem); font-weight: 900; \
                         line-height: 0.9; letter-spacing: 0.06em; margin: 0; \
                         background: linear-gradient(180deg, rgba(255, 255, 255, 0.95) 0%, {} 40%, {} 100%); \
                         -webkit-background-clip: text; -webkit-text-fill-color: transparent; background-clip: text;",
                        palette::NEON,
                        palette::NEON_DIM,
                    )>{BRAND}</h1>
                </div>

                <div style=format!(
                    "width: 60%; height: 2px; margin: 16px auto 0; \
                     background: linear-gradient(90deg, transparent, {neon}, transparent); \
                     box-shadow: 0 0 12px {}, 0 0 30px {};",
                    alpha(palette::NEON, "88"),
                    palette::NEON_GLOW,
                    neon = palette::NEON,
                ) />

                <div style=format!(
                    "display: inline-flex; align-items: center; gap: 10px; margin-top: 28px; \
                     padding: 8px 20px; border: 1px solid {}; background: {};",
                    palette::BORDER,
                    alpha(palette::NEON, "06"),
                )>
                    <span
                        class="dot-pulse"
                        style=format!("width: 6px; height: 6px; background: {};", palette::NEON)
                    />
                    <span style=format!(
                        "color: {}; font-size: 11px; letter-spacing: 0.2em; text-transform: uppercase; \
                         font-family: {FONT}; font-weight: 500;",
                        palette::GRAY,
                    )>{TAGLINE}</span>
                </div>

                <p style=format!(
                    "color: {}; font-size: clamp(0.95rem, 1.8vw, 1.1rem); line-height: 1.8; max-width: 540px; \
                     margin: 28px auto 0; font-family: {FONT}; font-weight: 400; letter-spacing: 0.02em;",
                    palette::GRAY_LIGHT,
                )>
                    "We build high-performance SaaS products and custom software that solve real business challenges. From our own tools to bespoke solutions — built for impact."
                </p>

                <div style="display: flex; gap: 20px; justify-content: center; margin-top: 44px; flex-wrap: wrap;">
                    <HoverLink href="#start" look=style::primary_button>
                        "Start a project →"
                    </HoverLink>
                    <HoverLink href="#services" look=style::outline_button>
                        "Explore services"
                    </HoverLink>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Mission() -> impl IntoView {
    let (section_ref, visible) = use_reveal(DEFAULT_THRESHOLD);

    view! {
        <section
            node_ref=section_ref
            style=format!(
                "padding: 100px 1.5rem; text-align: center; background: {}; border-top: 1px solid {}; position: relative;",
                palette::DEEP,
                palette::BORDER,
            )
        >
            <div style=format!("{} box-shadow: 0 0 20px {};", top_rule("33"), alpha(palette::NEON, "22")) />
            <div style=move || {
                format!("max-width: 700px; margin: 0 auto; {}", Reveal::up(30, 800).style(visible.get()))
            }>
                <h2
                    class="neon-breathe"
                    style=format!(
                        "font-family: {FONT}; font-size: clamp(1.8rem, 4vw, 2.5rem); font-weight: 800; \
                         color: {}; letter-spacing: 0.06em; margin: 0;",
                        palette::NEON,
                    )
                >
                    {BRAND}
                </h2>
                <p style=format!(
                    "color: {}; font-size: clamp(1rem, 2vw, 1.1rem); line-height: 1.8; margin-top: 24px; \
                     font-family: {FONT}; letter-spacing: 0.02em;",
                    palette::GRAY_LIGHT,
                )>
                    "We don't just write code — we "
                    <strong style=format!("color: {};", palette::NEON_HOT)>"bridge the gap"</strong>
                    " between the data you collect and the teams who need it most."
                    <br />
                    "Your operations deserve software built with purpose."
                </p>
            </div>
        </section>
    }
}

#[component]
fn Services() -> impl IntoView {
    let (section_ref, visible) = use_reveal(DEFAULT_THRESHOLD);

    view! {
        <section
            id="services"
            node_ref=section_ref
            style=format!(
                "padding: 100px 1.5rem; position: relative; background: linear-gradient(180deg, {} 0%, {} 100%);",
                palette::DEEP,
                palette::VOID,
            )
        >
            <div style="max-width: 1000px; margin: 0 auto;">
                <div style=move || {
                    format!(
                        "text-align: center; margin-bottom: 60px; {}",
                        Reveal::up(20, 600).style(visible.get()),
                    )
                }>
                    <span style=eyebrow()>"What we do"</span>
                    <h2 style=section_heading()>
                        "Tools that drive " <span class="neon-breathe-inline">"real impact"</span>
                    </h2>
                </div>
                <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 16px;">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(i, card)| {
                            view! { <ServiceCard card=*card delay_ms=stagger_delay(i, 80, 0) visible=visible /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn WhyBrdg() -> impl IntoView {
    let (section_ref, visible) = use_reveal(DEFAULT_THRESHOLD);
    let body = format!(
        "color: {}; font-size: 15px; line-height: 1.7; font-family: {FONT};",
        palette::GRAY
    );

    view! {
        <section
            id="why"
            node_ref=section_ref
            style=format!(
                "padding: 100px 1.5rem; background: {}; position: relative; border-top: 1px solid {};",
                palette::DEEP,
                palette::BORDER,
            )
        >
            <div style=top_rule("22") />
            <div style="max-width: 1000px; margin: 0 auto; display: grid; \
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 60px; align-items: center;">
                <div style=move || Reveal::slide(Slide::FromLeft(30), 800).style(visible.get())>
                    <span style=eyebrow()>"Why BRDG"</span>
                    <h2 style=format!(
                        "font-family: {FONT}; font-size: clamp(1.5rem, 3vw, 2rem); font-weight: 700; color: {}; \
                         margin-top: 12px; line-height: 1.3; letter-spacing: 0.03em;",
                        palette::WHITE,
                    )>
                        "The bridge between your "
                        <span class="neon-breathe-inline">"data and the field"</span>
                    </h2>
                    <p style=format!("{body} margin-top: 20px;")>
                        "Businesses collect mountains of data but struggle to turn it into operational truth. BRDG closes that gap — both through our own SaaS products and custom-built software that connects real-world data directly to your ground teams."
                    </p>
                    <p style=format!("{body} margin-top: 16px;")>
                        "No generic solutions. No compromises. Every line of code is designed to solve "
                        <span style=format!("color: {}; font-weight: 600;", palette::NEON)>"your"</span>
                        " problem."
                    </p>
                </div>
                <div style=move || {
                    format!(
                        "display: flex; flex-direction: column; gap: 12px; {}",
                        Reveal::slide(Slide::FromRight(30), 800).delayed(200).style(visible.get()),
                    )
                }>
                    {WHY_STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div style=format!(
                                    "background: {}; border: 1px solid {}; padding: 22px 28px; display: flex; \
                                     align-items: center; gap: 20px; position: relative; overflow: hidden;",
                                    palette::SURFACE,
                                    palette::BORDER,
                                )>
                                    <div style=format!(
                                        "position: absolute; left: 0; top: 0; bottom: 0; width: 2px; background: {neon}; \
                                         box-shadow: 0 0 10px {}, 0 0 20px {};",
                                        palette::NEON_GLOW,
                                        alpha(palette::NEON, "22"),
                                        neon = palette::NEON,
                                    ) />
                                    <span
                                        class="neon-breathe"
                                        style=format!(
                                            "font-family: {FONT}; font-size: 28px; font-weight: 900; color: {}; min-width: 80px;",
                                            palette::NEON,
                                        )
                                    >
                                        {stat.value}
                                    </span>
                                    <span style=format!(
                                        "font-family: {FONT}; font-size: 15px; color: {}; letter-spacing: 0.04em;",
                                        palette::GRAY_LIGHT,
                                    )>{stat.label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FleetProShowcase() -> impl IntoView {
    let (section_ref, visible) = use_reveal(DEFAULT_THRESHOLD);

    view! {
        <section
            id="fleetpro"
            node_ref=section_ref
            style=format!(
                "padding: 100px 1.5rem; position: relative; background: linear-gradient(180deg, {} 0%, {} 100%); \
                 border-top: 1px solid {};",
                palette::VOID,
                palette::DEEP,
                palette::BORDER,
            )
        >
            <div style=format!("{} box-shadow: 0 0 15px {};", top_rule("33"), alpha(palette::NEON, "15")) />
            <div style=move || {
                format!("max-width: 1000px; margin: 0 auto; {}", Reveal::up(30, 800).style(visible.get()))
            }>
                <div style="text-align: center; margin-bottom: 60px;">
                    <span style=eyebrow()>"Our Products"</span>
                    <h2 style=format!(
                        "{} display: flex; align-items: center; justify-content: center; gap: 12px;",
                        section_heading(),
                    )>
                        <CraneIcon size=40 />
                        <span>"FLEET " <span class="neon-breathe-inline">"PRO"</span></span>
                    </h2>
                    <p style=format!(
                        "color: {}; font-size: 15px; line-height: 1.7; max-width: 580px; margin: 16px auto 0; font-family: {FONT};",
                        palette::GRAY,
                    )>
                        "Enterprise equipment allocation & governance for construction. Track allocations. Control approvals. Validate transfers. Ensure financial transparency across every project."
                    </p>
                </div>
                <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 14px;">
                    {FLEET_PRO_FEATURES
                        .iter()
                        .enumerate()
                        .map(|(i, card)| {
                            view! { <ServiceCard card=*card delay_ms=stagger_delay(i, 60, 200) visible=visible /> }
                        })
                        .collect_view()}
                </div>
                <div style="display: flex; gap: 16px; justify-content: center; margin-top: 48px; flex-wrap: wrap;">
                    <HoverLink href="#start" look=style::neon_link>
                        "Request a demo →"
                    </HoverLink>
                    <HoverLink href=routes::FLEET_PRO look=style::neon_link>
                        "Explore Fleet Pro →"
                    </HoverLink>
                </div>
            </div>
        </section>
    }
}

/// Fleet Pro crane glyph
#[component]
pub fn CraneIcon(size: u32) -> impl IntoView {
    view! {
        <svg
            width=size.to_string()
            height=size.to_string()
            viewBox="0 0 48 48"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
            aria-hidden="true"
        >
            <path
                d="M8 44V40H12V24L6 12V8H10L12 4H16L18 8H22V12L16 24V40H20V36H24V8H28V4H32V8H36V36H40V40H44V44H8Z"
                fill=palette::NEON
            />
            <rect x="26" y="12" width="8" height="2" fill=palette::NEON_DIM />
            <rect x="26" y="18" width="8" height="2" fill=palette::NEON_DIM />
            <rect x="26" y="24" width="8" height="2" fill=palette::NEON_DIM />
            <rect x="26" y="30" width="8" height="2" fill=palette::NEON_DIM />
        </svg>
    }
}
