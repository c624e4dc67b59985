use crate::game::{StatLine, StatusTier};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub line: StatLine,
}

pub(crate) fn stat_icon(label: &str) -> &'static str {
    match label {
        "hunger" => "🍎",
        "happiness" => "✨",
        "health" => "❤️",
        "energy" => "⚡",
        _ => "•",
    }
}

pub(crate) const fn tier_class(tier: StatusTier) -> &'static str {
    match tier {
        StatusTier::Good => "bar-good",
        StatusTier::Warning => "bar-warning",
        StatusTier::Critical => "bar-critical",
    }
}

#[function_component(StatMeter)]
pub fn stat_meter(p: &Props) -> Html {
    let line = &p.line;
    let width = format!("width: {}%", line.percent);
    html! {
        <div class="stat-row" data-stat={line.label}>
            <span class="stat-icon" aria-hidden="true">{ stat_icon(line.label) }</span>
            <div class="stat-body">
                <div class="stat-caption">
                    <span class="stat-label">{ line.label }</span>
                    <span class="stat-value">{ format!("{}%", line.percent) }</span>
                </div>
                <div class="bar-wrap">
                    <div class={classes!("bar-fill", tier_class(line.tier))} style={width}></div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn meter_renders_rounded_percent_and_tier() {
        let props = Props {
            line: StatLine {
                label: "energy",
                value: 82.5,
                percent: 83,
                tier: StatusTier::Good,
            },
        };
        let html = block_on(LocalServerRenderer::<StatMeter>::with_props(props).render());
        assert!(html.contains("83%"), "percent should render: {html}");
        assert!(html.contains("bar-good"), "tier class should render: {html}");
        assert!(html.contains("⚡"));
    }

    #[test]
    fn tier_classes_are_distinct() {
        assert_eq!(tier_class(StatusTier::Warning), "bar-warning");
        assert_eq!(tier_class(StatusTier::Critical), "bar-critical");
        assert_eq!(stat_icon("mystery"), "•");
    }
}
