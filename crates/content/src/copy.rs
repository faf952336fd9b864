//! The site's copy and data, kept out of the composer so sections stay
//! data-driven.

use map::Region;

use crate::{
    AboutBlock, Cta, EdgePillar, FloatingValue, FooterContent, FrameworkCopy, HeroContent,
    InsightMetric, NavItem, ProcessStage, StrategyCard, StrategyContent, TeamMember, TickerSymbol,
    TrackRecord,
};

/// Rendered width of one ticker entry.
pub const TICKER_ITEM_WIDTH_PX: f64 = 300.0;
/// Ticker advance per tick.
pub const TICKER_STEP_PX: f64 = 2.0;
/// Ticker tick period.
pub const TICKER_TICK_MS: f64 = 50.0;

pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("About", "about"),
        NavItem::new("Our Edge", "edge"),
        NavItem::new("Strategy", "strategy"),
        NavItem::new("Presence", "presence"),
        NavItem::new("Team", "team"),
        NavItem::new("Contact", "contact"),
    ]
}

pub fn hero() -> HeroContent {
    HeroContent {
        headline: "Alpha Generation".into(),
        kicker: "Driven by".into(),
        pillars: vec![
            "Quantitative Research".into(),
            "Fundamental Insight".into(),
            "Valuation Dislocation".into(),
        ],
        cta: Cta {
            label: "Explore Strategy".into(),
            anchor: "strategy".into(),
        },
        chart_points: vec![
            [0.0, 400.0],
            [100.0, 350.0],
            [200.0, 380.0],
            [300.0, 320.0],
            [400.0, 360.0],
            [500.0, 300.0],
            [600.0, 340.0],
            [700.0, 280.0],
            [800.0, 320.0],
            [900.0, 300.0],
        ],
        floating_values: vec![
            FloatingValue { text: "+2.3%".into(), x_pct: 10.0, y_pct: 20.0 },
            FloatingValue { text: "+15.8%".into(), x_pct: 85.0, y_pct: 15.0 },
            FloatingValue { text: "-0.5%".into(), x_pct: 15.0, y_pct: 70.0 },
            FloatingValue { text: "+8.2%".into(), x_pct: 80.0, y_pct: 75.0 },
            FloatingValue { text: "1,234.56".into(), x_pct: 50.0, y_pct: 10.0 },
            FloatingValue { text: "98.7%".into(), x_pct: 25.0, y_pct: 50.0 },
            FloatingValue { text: "45.2K".into(), x_pct: 75.0, y_pct: 45.0 },
            FloatingValue { text: "+12.4%".into(), x_pct: 5.0, y_pct: 40.0 },
            FloatingValue { text: "2,456.78".into(), x_pct: 95.0, y_pct: 60.0 },
        ],
        ticker: vec![
            TickerSymbol { symbol: "AAPL".into(), price: 185.42, change_pct: 2.3 },
            TickerSymbol { symbol: "MSFT".into(), price: 378.85, change_pct: -1.2 },
            TickerSymbol { symbol: "GOOGL".into(), price: 142.56, change_pct: 0.8 },
            TickerSymbol { symbol: "AMZN".into(), price: 151.94, change_pct: 1.5 },
            TickerSymbol { symbol: "TSLA".into(), price: 248.50, change_pct: -0.7 },
            TickerSymbol { symbol: "META".into(), price: 485.39, change_pct: 3.1 },
            TickerSymbol { symbol: "NVDA".into(), price: 875.23, change_pct: 5.2 },
            TickerSymbol { symbol: "JPM".into(), price: 195.67, change_pct: -0.5 },
        ],
    }
}

pub fn about_blocks() -> Vec<AboutBlock> {
    vec![
        AboutBlock {
            title: "Mission".into(),
            body: "ARM Capital seeks to deliver superior risk-adjusted returns for institutional \
                   investors through a disciplined, research-driven approach to global equity \
                   investing. We combine fundamental analysis with quantitative rigor to identify \
                   mispriced securities and construct portfolios that aim to outperform global \
                   equity benchmarks."
                .into(),
        },
        AboutBlock {
            title: "Investment Philosophy".into(),
            body: "Our investment philosophy centers on three core principles: rigorous bottom-up \
                   stock selection, top-down country allocation, and momentum-driven positioning. \
                   We believe that alpha generation requires deep fundamental research, \
                   proprietary data insights, and the discipline to act on conviction while \
                   managing risk. Our process emphasizes quality over quantity, focusing on a \
                   concentrated portfolio of 10-15 high-conviction positions."
                .into(),
        },
        AboutBlock {
            title: "Legacy & Values".into(),
            body: "Founded with a commitment to institutional-grade investment management, ARM \
                   Capital operates with transparency, integrity, and a long-term perspective. We \
                   maintain a culture of intellectual curiosity, where research drives decisions \
                   and risk management is embedded in every aspect of our investment process. Our \
                   values reflect the highest standards of fiduciary responsibility and alignment \
                   with investor interests."
                .into(),
        },
    ]
}

pub fn edge_pillars() -> Vec<EdgePillar> {
    vec![
        EdgePillar {
            key: "people".into(),
            title: "People".into(),
            subtitle: "Investment Committee Discipline".into(),
            description: "Our investment committee brings together diverse perspectives and deep \
                          expertise in global markets. We maintain a rigorous research culture \
                          where every investment idea undergoes independent assessment and \
                          challenge."
                .into(),
            points: vec![
                "Independent assessment framework for all investment theses".into(),
                "Cross-functional research team with 8+ years combined experience".into(),
                "Structured decision-making process with conviction scoring".into(),
                "Daily monitoring and risk oversight protocols".into(),
            ],
        },
        EdgePillar {
            key: "data".into(),
            title: "Data".into(),
            subtitle: "Proprietary Data Pipelines".into(),
            description: "We integrate quantitative signals with fundamental research through \
                          proprietary data infrastructure. Our quant analysts prepare a \
                          comprehensive data lake that informs both idea generation and risk \
                          modeling."
                .into(),
            points: vec![
                "Proprietary data lake covering 34,000+ securities".into(),
                "Quantitative signal generation and validation".into(),
                "Integration of fundamental and technical analysis".into(),
                "Real-time risk modeling and portfolio analytics".into(),
            ],
        },
        EdgePillar {
            key: "insights".into(),
            title: "Insights".into(),
            subtitle: "Thesis Generation & Catalyst Analysis".into(),
            description: "Our research process focuses on identifying catalysts that unlock \
                          shareholder value. We conduct deep scenario analysis and stress testing \
                          to build conviction in both long and short positions."
                .into(),
            points: vec![
                "Catalyst-driven positioning with probabilistic assessment".into(),
                "3-5 year financial modeling and scenario analysis".into(),
                "Cross-checks with customers, suppliers, and competitors".into(),
                "Valuation frameworks using multiple methodologies".into(),
            ],
        },
    ]
}

pub fn strategy() -> StrategyContent {
    StrategyContent {
        cards: vec![
            StrategyCard {
                title: "Portfolio Structure".into(),
                body: "10-15 core positions, diversified across sectors and geographies. Net long \
                       exposure of 60-70% (longs) and 30-40% (shorts)."
                    .into(),
            },
            StrategyCard {
                title: "Universe".into(),
                body: "MSCI GIMI: Full investible universe covering large, mid, small, and \
                       micro-cap securities across global markets."
                    .into(),
            },
            StrategyCard {
                title: "Leverage".into(),
                body: "Strategic use of 3-4x leverage in specific positions where conviction and \
                       risk management support it."
                    .into(),
            },
        ],
        long: FrameworkCopy {
            title: "Long Positions".into(),
            description: "Businesses with potential for margin expansion driven by operating \
                          leverage, favourable input costs, and macro tailwinds."
                .into(),
            focus: "Focus on IRR over 3-5 years versus normalised returns appropriate for their \
                    market cap, business model, and industry norms."
                .into(),
        },
        short: FrameworkCopy {
            title: "Short Positions".into(),
            description: "Short book comprises stories with overhyped business models, structural \
                          weaknesses, and valuations disconnected from fundamentals."
                .into(),
            focus: "Inconsistencies between reported earnings and cash flows, strong momentum \
                    disconnected from underlying value."
                .into(),
        },
        sectors: vec![
            "AI & Machine Learning".into(),
            "Financial Services".into(),
            "Medical and Biotech".into(),
            "Robotics".into(),
            "Energy".into(),
            "Software & Internet".into(),
        ],
    }
}

pub fn regions() -> Vec<Region> {
    vec![
        Region::new(
            "North America",
            [-95.0, 40.0],
            "US and Canadian equity markets",
        ),
        Region::new("Europe", [10.0, 54.0], "UK, Continental Europe"),
        Region::new(
            "Asia Pacific",
            [120.0, 30.0],
            "India, China, Japan, and broader APAC",
        ),
        Region::new(
            "Emerging Markets",
            [80.0, 20.0],
            "Select emerging market opportunities",
        ),
    ]
}

pub fn team_members() -> Vec<TeamMember> {
    vec![
        TeamMember {
            name: "Mikhail Gorshkov".into(),
            role: "Portfolio Manager".into(),
            image: "/images/mikhail-gorshkov.png".into(),
            experience: "Buyside investment research at HFIM (London, 2025). Prior experience in \
                         Technology and Fintech. Built proprietary hedge fund Exebridge \
                         Associates and sustainable student investment fund ExSIF."
                .into(),
            education: vec![
                "Bayes Business School, City University of London - MSc Investment Management, \
                 Distinction (2025)"
                    .into(),
                "University of Exeter Business School - MSc Finance and Investment, Distinction \
                 (2024)"
                    .into(),
                "Bayes Business School, City University of London - BSc Investment and Financial \
                 Risk Management (2021)"
                    .into(),
            ],
            stats: TrackRecord {
                label: "Track Record".into(),
                value: "Global Equities & FX".into(),
                detail: "Active in US, European markets and currencies".into(),
            },
        },
        TeamMember {
            name: "Rahul Khandelwal".into(),
            role: "Investment Research".into(),
            image: "/images/rahul-khandelwal.png".into(),
            experience: "Investment Research in hedge fund strategies at HFIM (London, 2024-25). \
                         Active participant in US, European markets and currencies. Prior \
                         experience in equity research in Indian small cap segment."
                .into(),
            education: vec![
                "M.Sc. Investment Management from Bayes Business School, London, UK".into(),
                "Bachelor of Technology in Computer Science".into(),
                "CFA Level 1".into(),
            ],
            stats: TrackRecord {
                label: "Track Record".into(),
                value: "Indian Equities".into(),
                detail: "10% YTD from 01 Jan 2025 - 09 Dec 2025".into(),
            },
        },
    ]
}

pub fn insight_metrics() -> Vec<InsightMetric> {
    vec![
        InsightMetric {
            label: "Target ROI".into(),
            value: 15.0,
            suffix: "-18%".into(),
            description: "Annual target return".into(),
        },
        InsightMetric {
            label: "Target Volatility".into(),
            value: 7.0,
            suffix: "-8%".into(),
            description: "Risk management target".into(),
        },
        InsightMetric {
            label: "Universe Coverage".into(),
            value: 34_000.0,
            suffix: "+".into(),
            description: "Securities in research universe".into(),
        },
        InsightMetric {
            label: "Team Experience".into(),
            value: 8.0,
            suffix: "+ years".into(),
            description: "Combined market experience".into(),
        },
    ]
}

pub fn process_stages() -> Vec<ProcessStage> {
    vec![
        ProcessStage {
            stage: "1".into(),
            title: "Sourcing and Screening".into(),
            description: "Funnels 34,000 securities into a focused list of actionable ideas \
                          through proprietary data signals and analyst research."
                .into(),
        },
        ProcessStage {
            stage: "2".into(),
            title: "Short Due Diligence".into(),
            description: "Quick sanity check and second perspective for shortlisting. Team \
                          assessment and quality check against preliminary framework."
                .into(),
        },
        ProcessStage {
            stage: "3".into(),
            title: "Full Due Diligence".into(),
            description: "Deep dive research including transcripts, filings, expert interviews, \
                          and 3-5 year financial modeling with scenario analysis."
                .into(),
        },
        ProcessStage {
            stage: "4".into(),
            title: "Final IC Approval".into(),
            description: "Lead PM presents detailed memo to investment committee. Conviction \
                          scoring and catalyst assessment for position sizing."
                .into(),
        },
        ProcessStage {
            stage: "5".into(),
            title: "Closing & Monitoring".into(),
            description: "Positioning established from conviction. Daily tracking of \
                          idiosyncratic risks, portfolio measures, and exit criteria."
                .into(),
        },
    ]
}

pub fn footer() -> FooterContent {
    FooterContent {
        firm: "ARM CAPITAL".into(),
        blurb: "Institutional investment management focused on generating alpha through \
                fundamental research and quantitative analysis."
            .into(),
        location: "London, United Kingdom".into(),
        email: "investorrelations@armcapital.com".into(),
        info_links: vec![
            NavItem::new("About Us", "about"),
            NavItem::new("Investment Strategy", "strategy"),
            NavItem::new("Team", "team"),
            NavItem::new("Contact", "contact"),
        ],
        disclosures: vec![
            "This website is for informational purposes only and does not constitute an offer to \
             sell, or a solicitation of an offer to buy, any securities or any interest in any \
             investment fund managed by ARM Capital or its affiliates (collectively, \"ARM \
             Capital\"). Any such offer or solicitation will be made only through a confidential \
             private placement memorandum and related documents (the \"Offering Documents\") and \
             only in jurisdictions where permitted by law."
                .into(),
            "Past performance is not indicative of future results. No representation is being \
             made that any investment or account will or is likely to achieve profits or losses \
             similar to those shown. There can be no assurance that ARM Capital will achieve its \
             investment objectives or that any investment will be profitable. All investments \
             involve risk, including the possible loss of principal."
                .into(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nav_anchors_are_unique_and_nonempty() {
        let items = nav_items();
        assert_eq!(items.len(), 6);
        for (i, item) in items.iter().enumerate() {
            assert!(!item.anchor.is_empty());
            assert!(!items[..i].iter().any(|other| other.anchor == item.anchor));
        }
    }

    #[test]
    fn region_list_satisfies_the_map_contract() {
        let regions = regions();
        assert_eq!(regions.len(), 4);
        map::validate_regions(&regions).unwrap();
    }

    #[test]
    fn ticker_width_derives_from_symbol_count() {
        let hero = hero();
        assert_eq!(hero.ticker.len(), 8);
        let width = hero.ticker.len() as f64 * TICKER_ITEM_WIDTH_PX;
        assert_eq!(width, 2400.0);
    }

    #[test]
    fn cta_targets_an_existing_nav_anchor() {
        let hero = hero();
        assert!(
            nav_items()
                .iter()
                .any(|item| item.anchor == hero.cta.anchor)
        );
    }

    #[test]
    fn every_section_has_its_records() {
        assert_eq!(about_blocks().len(), 3);
        assert_eq!(edge_pillars().len(), 3);
        assert_eq!(strategy().cards.len(), 3);
        assert_eq!(team_members().len(), 2);
        assert_eq!(insight_metrics().len(), 4);
        assert_eq!(process_stages().len(), 5);
        assert_eq!(strategy().sectors.len(), 6);
    }

    #[test]
    fn content_serializes_for_external_consumers() {
        let json = serde_json::to_string(&regions()).unwrap();
        assert!(json.contains("North America"));
        let json = serde_json::to_string(&team_members()).unwrap();
        assert!(json.contains("Portfolio Manager"));
    }
}
