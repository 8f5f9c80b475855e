use super::star_row::StarRowView;
use crate::model::{GameLevel, node_render_state};
use crate::util::{status_bg, symbol_glyph};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LevelNodeProps {
    pub level: GameLevel,
    pub on_select: Callback<GameLevel>,
}

#[function_component(LevelNode)]
pub fn level_node(props: &LevelNodeProps) -> Html {
    let state = node_render_state(&props.level);
    let click = {
        let cb = props.on_select.clone();
        let level = props.level.clone();
        Callback::from(move |_| cb.emit(level.clone()))
    };
    let cursor = if state.interactive { "pointer" } else { "not-allowed" };
    html! {
        <div style={format!(
            "position:absolute; left:{}%; top:{}%; transform:translate(-50%, -50%); z-index:10;",
            props.level.position.x, props.level.position.y
        )}>
            <button
                onclick={click}
                disabled={!state.interactive}
                style={format!(
                    "width:64px; height:64px; border-radius:50%; border:3px solid rgba(255,255,255,0.7); background:{}; font-size:28px; cursor:{}; box-shadow:0 4px 10px rgba(0,0,0,0.3);",
                    status_bg(state.status), cursor
                )}
            >
                { symbol_glyph(state.symbol) }
            </button>
            <div style="position:absolute; top:-8px; right:-8px; width:28px; height:28px; background:#fff; border-radius:50%; display:flex; align-items:center; justify-content:center; font-size:13px; font-weight:700; box-shadow:0 1px 4px rgba(0,0,0,0.3);">
                { props.level.id }
            </div>
            {
                match state.star_row {
                    Some(row) => html! {
                        <div style="position:absolute; bottom:-26px; left:50%; transform:translateX(-50%);">
                            <StarRowView filled={row.filled} slots={row.slots} font_size={14} />
                        </div>
                    },
                    None => html! {},
                }
            }
        </div>
    }
}
