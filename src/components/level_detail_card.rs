use super::star_row::StarRowView;
use crate::model::{GameLevel, LevelStatus};
use crate::util::symbol_glyph;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LevelDetailCardProps {
    pub level: GameLevel,
    pub on_play: Callback<u32>,
    pub on_close: Callback<()>,
}

/// Detail card for the focused level. Playing does not drop the focus; only
/// the close action does.
#[function_component(LevelDetailCard)]
pub fn level_detail_card(props: &LevelDetailCardProps) -> Html {
    let play_btn = {
        let cb = props.on_play.clone();
        let id = props.level.id;
        Callback::from(move |_| cb.emit(id))
    };
    let close_btn = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let completed = props.level.status == LevelStatus::Completed;
    let play_label = if completed { "▶ Play Again" } else { "▶ Play Now" };
    html! {
        <div style="margin:32px auto 0 auto; max-width:420px; background:#fff; border-radius:14px; padding:24px; text-align:center; box-shadow:0 6px 18px rgba(0,0,0,0.2); display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; align-items:center; justify-content:center; gap:10px;">
                <span style="font-size:28px;">{ symbol_glyph(props.level.symbol) }</span>
                <h3 style="margin:0; font-size:22px;">{ props.level.name }</h3>
            </div>
            <p style="margin:0; opacity:0.7;">{ props.level.description }</p>
            {
                if completed {
                    html! {
                        <div style="display:flex; justify-content:center;">
                            <StarRowView filled={props.level.stars} slots={props.level.max_stars} font_size={22} />
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <div style="display:flex; gap:12px; justify-content:center;">
                <button onclick={play_btn} style="font-size:15px; padding:10px 24px; border-radius:12px; border:none; background:#1c7ed6; color:#fff; cursor:pointer;">{ play_label }</button>
                <button onclick={close_btn} style="font-size:15px; padding:10px 24px; border-radius:12px; border:1px solid #ced4da; background:none; cursor:pointer;">{"Close"}</button>
            </div>
        </div>
    }
}
