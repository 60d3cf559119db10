use yew::prelude::*;

use crate::geometry::{VIEW_BOX, VIEW_CENTER, gear_path, spokes};
use crate::model::GearSpec;

const HUB_RADIUS: f64 = 15.0;
const DOT_RADIUS: f64 = 5.0;
const SPOKE_COUNT: u32 = 6;
const SPOKE_FROM: f64 = 20.0;
const SPOKE_TO: f64 = 32.0;

#[derive(Properties, PartialEq, Clone)]
pub struct GearViewProps {
    pub spec: GearSpec,
    /// Already-smoothed angle to draw at.
    pub rotation_deg: f64,
}

#[function_component(GearView)]
pub fn gear_view(props: &GearViewProps) -> Html {
    let path = use_memo(props.spec, |spec| gear_path(spec).to_string());
    let spoke_lines = use_memo((), |_| spokes(SPOKE_COUNT, SPOKE_FROM, SPOKE_TO));
    let view_box = format!("0 0 {VIEW_BOX} {VIEW_BOX}");
    let cx = VIEW_CENTER.x.to_string();
    let cy = VIEW_CENTER.y.to_string();

    html! {
        <svg
            viewBox={view_box}
            style={format!("width:100%; height:100%; transform:rotate({:.3}deg);", props.rotation_deg)}
        >
            <defs>
                <linearGradient id="gearGradient" x1="0%" y1="0%" x2="100%" y2="100%">
                    <stop offset="0%" stop-color="var(--gear-primary)" stop-opacity="0.8" />
                    <stop offset="50%" stop-color="var(--gear-accent)" stop-opacity="0.6" />
                    <stop offset="100%" stop-color="var(--gear-primary)" stop-opacity="0.8" />
                </linearGradient>
                <filter id="gearGlow">
                    <feGaussianBlur stdDeviation="2" result="coloredBlur" />
                    <feMerge>
                        <feMergeNode in="coloredBlur" />
                        <feMergeNode in="SourceGraphic" />
                    </feMerge>
                </filter>
            </defs>
            <path
                d={(*path).clone()}
                fill="none"
                stroke="url(#gearGradient)"
                stroke-width="2"
                filter="url(#gearGlow)"
            />
            <circle
                cx={cx.clone()}
                cy={cy.clone()}
                r={props.spec.inner_radius().to_string()}
                fill="none"
                stroke="var(--gear-primary)"
                stroke-width="2"
                opacity="0.6"
            />
            <circle
                cx={cx.clone()}
                cy={cy.clone()}
                r={HUB_RADIUS.to_string()}
                fill="var(--gear-secondary)"
                stroke="var(--gear-primary)"
                stroke-width="2"
            />
            <circle
                cx={cx}
                cy={cy}
                r={DOT_RADIUS.to_string()}
                fill="var(--gear-primary)"
                filter="url(#gearGlow)"
            />
            { for spoke_lines.iter().enumerate().map(|(i, (from, to))| html! {
                <line
                    key={i}
                    x1={format!("{:.3}", from.x)}
                    y1={format!("{:.3}", from.y)}
                    x2={format!("{:.3}", to.x)}
                    y2={format!("{:.3}", to.y)}
                    stroke="var(--gear-primary)"
                    stroke-width="2"
                    opacity="0.5"
                />
            }) }
        </svg>
    }
}
