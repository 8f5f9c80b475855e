use crate::model::MapProgress;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProgressCardProps {
    pub progress: MapProgress,
}

#[function_component(ProgressCard)]
pub fn progress_card(props: &ProgressCardProps) -> Html {
    let p = &props.progress;
    html! {
        <div style="max-width:420px; margin:0 auto; background:#fff; border-radius:14px; padding:20px 24px; box-shadow:0 6px 18px rgba(0,0,0,0.2); display:flex; flex-direction:column; gap:12px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <span style="font-weight:600;">{"Island Progress"}</span>
                <span style="background:#ffd43b; border-radius:999px; padding:3px 12px; font-size:13px; font-weight:600;">
                    { format!("{}/{} Games", p.completed_count, p.total_levels) }
                </span>
            </div>
            <div style="height:12px; background:#e9ecef; border-radius:6px; overflow:hidden;">
                <div style={format!("height:100%; width:{}%; background:#3fb950; border-radius:6px;", p.progress_percentage)}></div>
            </div>
            <div style="display:flex; justify-content:space-between; font-size:13px;">
                <span>{ format!("⭐ {}/{} Stars", p.total_stars, p.max_total_stars) }</span>
                <span>{ format!("{}% Complete", p.progress_percentage.round()) }</span>
            </div>
        </div>
    }
}
