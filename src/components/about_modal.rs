use yew::prelude::*;

struct Feature {
    glyph: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        glyph: "🎯",
        title: "8 Unique Games",
        description: "Each level offers different candy-themed challenges",
    },
    Feature {
        glyph: "⭐",
        title: "Star Collection",
        description: "Earn up to 3 stars per level based on your performance",
    },
    Feature {
        glyph: "🏆",
        title: "Progressive Difficulty",
        description: "Unlock new levels as you master each challenge",
    },
    Feature {
        glyph: "💖",
        title: "Family Friendly",
        description: "Fun for all ages with colorful, engaging gameplay",
    },
];

const STATS: [(&str, &str, &str); 4] = [
    ("🎯", "8", "Total Levels"),
    ("⭐", "24", "Max Stars"),
    ("🎁", "8", "Game Types"),
    ("🕐", "∞", "Play Time"),
];

const GAME_NAMES: [&str; 8] = [
    "Candy Crush Quest",
    "Sweet Memory",
    "Lightning Lollipops",
    "Sugar Rush Race",
    "Gummy Bear Kingdom",
    "Chocolate Factory",
    "Rainbow Bridge",
    "Candy Castle",
];

#[derive(Properties, PartialEq, Clone)]
pub struct AboutModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
}

#[function_component(AboutModal)]
pub fn about_modal(props: &AboutModalProps) -> Html {
    if !props.show {
        return html! {};
    }
    let close_btn = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let cta_btn = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
            <div style="background:#fff; border-radius:14px; padding:24px 28px; max-width:640px; width:92%; max-height:80vh; overflow-y:auto; display:flex; flex-direction:column; gap:18px;">
                <div style="display:flex; justify-content:space-between; align-items:center;">
                    <h2 style="margin:0; font-size:24px;">{"✨ About Candy Island ✨"}</h2>
                    <button onclick={close_btn} style="padding:4px 10px; cursor:pointer;">{"Close"}</button>
                </div>
                <div style="background:linear-gradient(135deg, #f783ac, #b197fc); color:#fff; border-radius:12px; padding:18px; text-align:center;">
                    <h3 style="margin:0 0 8px 0;">{"Welcome to the Sweetest Adventure!"}</h3>
                    <p style="margin:0; line-height:1.5;">
                        {"Candy Island is a magical place where sweet dreams come true! Journey through 8 exciting game levels, each more delicious than the last. Collect stars, unlock new areas, and become the ultimate candy champion!"}
                    </p>
                </div>
                <div style="display:grid; grid-template-columns:repeat(4, 1fr); gap:10px;">
                    { for STATS.iter().map(|(glyph, value, label)| html! {
                        <div style="border:1px solid #e3e6ea; border-radius:10px; padding:12px; text-align:center;">
                            <div style="font-size:22px;">{ *glyph }</div>
                            <div style="font-size:20px; font-weight:700; color:#f783ac;">{ *value }</div>
                            <div style="font-size:12px; opacity:0.7;">{ *label }</div>
                        </div>
                    }) }
                </div>
                <div>
                    <h3 style="margin:0 0 10px 0; text-align:center;">{"Game Features"}</h3>
                    <div style="display:grid; grid-template-columns:repeat(2, 1fr); gap:10px;">
                        { for FEATURES.iter().map(|f| html! {
                            <div style="border-left:4px solid #f783ac; border-radius:6px; background:#f7f8fa; padding:10px 12px; display:flex; gap:10px; align-items:flex-start;">
                                <span style="font-size:18px;">{ f.glyph }</span>
                                <div>
                                    <div style="font-weight:600; margin-bottom:2px;">{ f.title }</div>
                                    <div style="font-size:13px; opacity:0.7;">{ f.description }</div>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
                <div style="border:1px solid #e3e6ea; border-radius:10px; padding:14px;">
                    <h3 style="margin:0 0 10px 0; text-align:center; font-size:16px;">{"Available Games"}</h3>
                    <div style="display:flex; flex-wrap:wrap; gap:6px; justify-content:center;">
                        { for GAME_NAMES.iter().map(|name| html! {
                            <span style="background:rgba(255,212,59,0.25); border-radius:999px; padding:4px 12px; font-size:13px;">{ *name }</span>
                        }) }
                    </div>
                </div>
                <div style="text-align:center;">
                    <button onclick={cta_btn} style="font-size:16px; padding:12px 28px; border-radius:14px; border:none; background:#f783ac; color:#fff; cursor:pointer;">{"💖 Start Your Sweet Adventure!"}</button>
                </div>
            </div>
        </div>
    }
}
