use super::{
    level_detail_card::LevelDetailCard, level_node::LevelNode, progress_card::ProgressCard,
};
use crate::model::{
    ConnectorStyle, GameLevel, MapProgress, MapSelection, SelectionAction, connector_segments,
};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct IslandMapProps {
    /// Fixed level list, injected by the app shell.
    pub levels: Rc<Vec<GameLevel>>,
    /// Fired once per confirmed play action with the level id.
    pub on_play: Callback<u32>,
}

#[function_component(IslandMap)]
pub fn island_map(props: &IslandMapProps) -> Html {
    // Focus state is local: navigating away and back clears it.
    let selection = use_reducer(MapSelection::default);

    let progress = MapProgress::from_levels(&props.levels);
    let segments = connector_segments(&props.levels);

    let select = {
        let selection = selection.clone();
        Callback::from(move |level: GameLevel| {
            selection.dispatch(SelectionAction::Select(level));
        })
    };
    let clear = {
        let selection = selection.clone();
        Callback::from(move |_| selection.dispatch(SelectionAction::Clear))
    };

    html! {
        <section style="min-height:100vh; background:linear-gradient(180deg, #74c0fc 0%, #b197fc 100%); padding:32px 16px;">
            <div style="max-width:1100px; margin:0 auto;">
                <div style="text-align:center; margin-bottom:32px;">
                    <h2 style="margin:0 0 20px 0; font-size:40px; color:#fff; text-shadow:0 2px 6px rgba(0,0,0,0.3);">{"Adventure Map"}</h2>
                    <ProgressCard progress={progress} />
                </div>
                <div style="position:relative; background:rgba(116,192,252,0.2); border:4px solid rgba(255,255,255,0.3); border-radius:24px; min-height:600px; padding:32px;">
                    <svg style="position:absolute; inset:0; width:100%; height:100%; pointer-events:none; z-index:1;">
                        { for segments.iter().map(|seg| {
                            let (stroke, dasharray) = match seg.style {
                                ConnectorStyle::Solid => ("#3fb950", "0"),
                                ConnectorStyle::Dashed => ("#8b949e", "10,5"),
                            };
                            html! {
                                <line
                                    x1={format!("{}%", seg.from.x)}
                                    y1={format!("{}%", seg.from.y)}
                                    x2={format!("{}%", seg.to.x)}
                                    y2={format!("{}%", seg.to.y)}
                                    stroke={stroke}
                                    stroke-width="4"
                                    stroke-dasharray={dasharray}
                                />
                            }
                        }) }
                    </svg>
                    { for props.levels.iter().map(|level| html! {
                        <LevelNode level={level.clone()} on_select={select.clone()} />
                    }) }
                </div>
                {
                    match &selection.focused {
                        Some(level) => html! {
                            <LevelDetailCard
                                level={level.clone()}
                                on_play={props.on_play.clone()}
                                on_close={clear.clone()}
                            />
                        },
                        None => html! {},
                    }
                }
            </div>
        </section>
    }
}
