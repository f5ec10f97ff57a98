//! Static copy for the home and Fleet Pro pages

/// Glyph, heading and one-line description shown on a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

/// Headline figure in the "Why BRDG" column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// Anchor in the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Bullet with a glyph on the product page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureItem {
    pub icon: &'static str,
    pub text: &'static str,
}

/// Figure in the product hero metrics strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricValue {
    /// Counts up from zero once the hero is revealed
    CountUp { target: u32, suffix: &'static str },
    /// Rendered as-is
    Fixed(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub value: MetricValue,
    pub label: &'static str,
}

/// Body of a product page section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionBody {
    Items(&'static [FeatureItem]),
    Roles {
        roles: &'static [Card],
        badges: &'static [&'static str],
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductSection {
    pub id: &'static str,
    pub label: &'static str,
    pub title: &'static str,
    pub body: SectionBody,
}

pub const BRAND: &str = "BRDG";
pub const TAGLINE: &str = "Bridging Real-World Data with Ground Operations";
pub const LOCATION: &str = "Sydney, Australia";

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Services",
        href: "#services",
    },
    NavLink {
        label: "Why BRDG",
        href: "#why",
    },
];

pub const MOBILE_NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Fleet Pro",
        href: "#fleetpro",
    },
    NavLink {
        label: "Services",
        href: "#services",
    },
    NavLink {
        label: "Why BRDG",
        href: "#why",
    },
];

pub const SERVICES: &[Card] = &[
    Card {
        icon: "◆",
        title: "Custom Software",
        desc: "Tailored solutions that transform your business processes — not generic templates.",
    },
    Card {
        icon: "◈",
        title: "Data Systems",
        desc: "Capture, store and visualise your field data in real time.",
    },
    Card {
        icon: "▣",
        title: "Web & Mobile Apps",
        desc: "High-performance interfaces that teams actually enjoy using.",
    },
    Card {
        icon: "◎",
        title: "SaaS Products",
        desc: "Our own tools like Fleet Pro, ready to deploy for your industry.",
    },
    Card {
        icon: "⬡",
        title: "Security & Compliance",
        desc: "Enterprise-grade security and full regulatory compliance.",
    },
    Card {
        icon: "⚡",
        title: "Automation",
        desc: "Remove bottlenecks so your team can focus on what matters.",
    },
];

pub const WHY_STATS: &[Stat] = &[
    Stat {
        value: "100%",
        label: "Custom-built",
    },
    Stat {
        value: "24/7",
        label: "Dedicated support",
    },
    Stat {
        value: "10x",
        label: "Faster delivery",
    },
];

pub const FLEET_PRO_FEATURES: &[Card] = &[
    Card {
        icon: "▦",
        title: "Real-time Dashboard",
        desc: "KPIs, revenue forecasts, and fleet status at a glance.",
    },
    Card {
        icon: "▥",
        title: "Controlled Equipment Allocation",
        desc: "Drag-and-drop assignment with approval workflows and full audit history.",
    },
    Card {
        icon: "◈",
        title: "Financial Period Billing",
        desc: "Automated billing based on approved allocations and validated site presence. Aligned with financial periods and internal agreements.",
    },
    Card {
        icon: "▤",
        title: "Approval & Validation Workflow",
        desc: "Structured request → plant approval → site confirmation. Every movement is logged and accountable.",
    },
    Card {
        icon: "◎",
        title: "Audit & Governance",
        desc: "Full historical record of requests, approvals, transfers and financial impact. Built for multi-project environments and joint ventures.",
    },
    Card {
        icon: "△",
        title: "Revenue Forecasting",
        desc: "Accurately forecast equipment revenue across projects and financial periods — based on approved, validated allocations.",
    },
];

pub const PRODUCT_METRICS: &[Metric] = &[
    Metric {
        value: MetricValue::CountUp {
            target: 70,
            suffix: "%",
        },
        label: "Less admin time",
    },
    Metric {
        value: MetricValue::Fixed("500+"),
        label: "Equipment units supported",
    },
    Metric {
        value: MetricValue::Fixed("Days"),
        label: "To deploy, not months",
    },
];

const FLEET_ITEMS: &[FeatureItem] = &[
    FeatureItem {
        icon: "▦",
        text: "Equipment registry with lifecycle tracking, auto-generated IDs, multi-image gallery",
    },
    FeatureItem {
        icon: "◉",
        text: "Interactive satellite map with GPS and geocoding",
    },
    FeatureItem {
        icon: "◈",
        text: "Hierarchical equipment types linked to billing rates",
    },
    FeatureItem {
        icon: "▥",
        text: "Equipment Gantt chart and utilisation timelines",
    },
    FeatureItem {
        icon: "◷",
        text: "Working day calendar with Australian public holidays",
    },
];

const BILLING_ITEMS: &[FeatureItem] = &[
    FeatureItem {
        icon: "◎",
        text: "Two-tier pricing: Master (company-wide) and Project Specific (site-override)",
    },
    FeatureItem {
        icon: "▣",
        text: "Centralised rate resolution with automatic fallback",
    },
    FeatureItem {
        icon: "△",
        text: "Three invoice generation modes: Provisional, Accrual, Actual",
    },
    FeatureItem {
        icon: "◆",
        text: "Approval workflow: Draft → Submitted → Accepted/Rejected → Paid",
    },
    FeatureItem {
        icon: "▤",
        text: "Invoice adjustments (credits/debits) with independent approval",
    },
    FeatureItem {
        icon: "◈",
        text: "MYOB and Xero compatible CSV exports",
    },
];

const FORECASTING_ITEMS: &[FeatureItem] = &[
    FeatureItem {
        icon: "◉",
        text: "Four-curve revenue and cost forecast charts",
    },
    FeatureItem {
        icon: "▦",
        text: "Global Forecast Table: all sites, fiscal year columns, drill-down to equipment level",
    },
    FeatureItem {
        icon: "◷",
        text: "Financial logic: paid invoices = truth, future = working days × rate",
    },
    FeatureItem {
        icon: "▣",
        text: "Excel export with embedded formulas and Rate Agreement traceability",
    },
];

const REQUEST_ITEMS: &[FeatureItem] = &[
    FeatureItem {
        icon: "△",
        text: "Plant Requests: SM requests equipment → PM approves → allocation created",
    },
    FeatureItem {
        icon: "◆",
        text: "Change Requests: SM requests date change → PM approves with override option",
    },
    FeatureItem {
        icon: "▥",
        text: "Delivery tracking with arrival/departure confirmation",
    },
    FeatureItem {
        icon: "◎",
        text: "Invoice review by Site Managers with accept/reject and reasons",
    },
];

const DASHBOARD_ITEMS: &[FeatureItem] = &[
    FeatureItem {
        icon: "▦",
        text: "Plant Manager: Operations tab (KPIs, requests, map, conflicts) + Finance tab (forecast, invoices, revenue)",
    },
    FeatureItem {
        icon: "◈",
        text: "Site Manager: site-filtered KPIs, cost forecast, timelines, calendar",
    },
    FeatureItem {
        icon: "▣",
        text: "Drag-and-drop widget reordering with server-persisted layout",
    },
];

const ROLES: &[Card] = &[
    Card {
        icon: "◆",
        title: "Administrator",
        desc: "Full system access. Manages users, company settings, rate agreements, and has visibility across all sites and financial data.",
    },
    Card {
        icon: "▦",
        title: "Plant Manager",
        desc: "Manages equipment fleet, approves requests, generates invoices, and views cross-site forecasts and revenue dashboards.",
    },
    Card {
        icon: "◈",
        title: "Site Manager",
        desc: "Access limited to assigned sites. Reviews allocations, approves invoices, submits change requests and delivery confirmations.",
    },
];

const SECURITY_BADGES: &[&str] = &[
    "API enforcement on all 153 endpoints",
    "Route guards on all frontend pages",
    "CSRF protection",
    "Multi-tenant isolated environments",
];

pub const PRODUCT_SECTIONS: &[ProductSection] = &[
    ProductSection {
        id: "fleet",
        label: "01 — Fleet & Site Management",
        title: "Every unit. Every site. Under control.",
        body: SectionBody::Items(FLEET_ITEMS),
    },
    ProductSection {
        id: "billing",
        label: "02 — Billing & Rate Agreements",
        title: "Automated billing. Zero ambiguity.",
        body: SectionBody::Items(BILLING_ITEMS),
    },
    ProductSection {
        id: "forecasting",
        label: "03 — Forecasting & Analytics",
        title: "Know your numbers before the quarter ends.",
        body: SectionBody::Items(FORECASTING_ITEMS),
    },
    ProductSection {
        id: "requests",
        label: "04 — Requests & Workflows",
        title: "Structured approvals. Full audit trail.",
        body: SectionBody::Items(REQUEST_ITEMS),
    },
    ProductSection {
        id: "dashboards",
        label: "05 — Dashboards",
        title: "The right data for the right person.",
        body: SectionBody::Items(DASHBOARD_ITEMS),
    },
    ProductSection {
        id: "security",
        label: "06 — Roles & Security",
        title: "Enterprise-grade access control.",
        body: SectionBody::Roles {
            roles: ROLES,
            badges: SECURITY_BADGES,
        },
    },
];

/// Transition delay for the `index`-th card of a staggered grid
pub fn stagger_delay(index: usize, step_ms: u32, base_ms: u32) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base_ms.saturating_add(index.saturating_mul(step_ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_home_page_card_counts() {
        assert_eq!(SERVICES.len(), 6);
        assert_eq!(FLEET_PRO_FEATURES.len(), 6);
        assert_eq!(WHY_STATS.len(), 3);
    }

    #[test]
    fn test_product_section_ids_are_unique() {
        let ids: HashSet<_> = PRODUCT_SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), PRODUCT_SECTIONS.len());
    }

    #[test]
    fn test_only_security_section_has_roles() {
        let with_roles: Vec<_> = PRODUCT_SECTIONS
            .iter()
            .filter(|s| matches!(s.body, SectionBody::Roles { .. }))
            .map(|s| s.id)
            .collect();
        assert_eq!(with_roles, vec!["security"]);
    }

    #[test]
    fn test_single_animated_metric() {
        let animated: Vec<_> = PRODUCT_METRICS
            .iter()
            .filter_map(|m| match m.value {
                MetricValue::CountUp { target, suffix } => Some((target, suffix)),
                MetricValue::Fixed(_) => None,
            })
            .collect();
        assert_eq!(animated, vec![(70, "%")]);
    }

    #[test]
    fn test_nav_links_are_in_page_anchors() {
        for link in NAV_LINKS.iter().chain(MOBILE_NAV_LINKS) {
            assert!(link.href.starts_with('#'), "{} is not an anchor", link.href);
        }
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0, 80, 0), 0);
        assert_eq!(stagger_delay(3, 80, 0), 240);
        assert_eq!(stagger_delay(2, 60, 200), 320);
        assert_eq!(stagger_delay(usize::MAX, 60, 200), u32::MAX);
    }
}
