use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HeroSectionProps {
    pub on_start_adventure: Callback<()>,
    pub on_show_about: Callback<()>,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    let start_btn = {
        let cb = props.on_start_adventure.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let about_btn = {
        let cb = props.on_show_about.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let blob = |pos: &str, size: u32, color: &str| {
        html! { <div style={format!("position:absolute; {} width:{}px; height:{}px; background:{}; border-radius:50%; opacity:0.8;", pos, size, size, color)}></div> }
    };
    html! {
        <section style="position:relative; min-height:100vh; display:flex; align-items:center; justify-content:center; background:linear-gradient(180deg, #a5d8ff 0%, #ffd6e7 100%); overflow:hidden;">
            // Floating candy decorations
            { blob("top:80px; left:40px;", 64, "#ff8fab") }
            { blob("top:160px; right:80px;", 48, "#ffd43b") }
            { blob("bottom:130px; left:80px;", 80, "#74c0fc") }
            { blob("bottom:80px; right:40px;", 56, "#b197fc") }
            <div style="position:relative; z-index:10; text-align:center; max-width:760px; padding:0 16px; display:flex; flex-direction:column; gap:28px;">
                <div>
                    <div style="font-size:56px;">{"✨"}</div>
                    <h1 style="margin:8px 0 0 0; font-size:54px; color:#f783ac;">{"Welcome to"}</h1>
                    <h2 style="margin:0; font-size:72px; color:#1c7ed6; text-shadow:0 2px 6px rgba(0,0,0,0.2);">{"Candy Island"}</h2>
                </div>
                <p style="margin:0 auto; max-width:560px; font-size:20px; line-height:1.5; opacity:0.85;">
                    {"Embark on a sweet adventure through magical candy lands filled with challenging puzzles and delicious surprises!"}
                </p>
                <div style="display:flex; gap:20px; justify-content:center; flex-wrap:wrap; padding-top:12px;">
                    <button onclick={start_btn} style="font-size:18px; padding:14px 32px; border-radius:16px; border:none; background:#1c7ed6; color:#fff; cursor:pointer;">{"🗺️ Start Adventure"}</button>
                    <button onclick={about_btn} style="font-size:18px; padding:14px 32px; border-radius:16px; border:none; background:#f783ac; color:#fff; cursor:pointer;">{"✨ About Island"}</button>
                </div>
            </div>
        </section>
    }
}
