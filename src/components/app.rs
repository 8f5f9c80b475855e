use super::{
    about_modal::AboutModal,
    hero_section::HeroSection,
    island_map::IslandMap,
    toast::{Toast, ToastMessage},
};
use crate::model::island_levels;
use crate::util::clog;
use yew::prelude::*;

#[derive(PartialEq, Clone)]
enum View {
    Hero,
    Map,
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::Hero);
    let show_about = use_state(|| false);
    let toast = use_state(|| Option::<ToastMessage>::None);
    // The level list is fixed for the lifetime of the app; components receive
    // it as a read-only input.
    let levels = use_memo((), |_| island_levels());

    let start_adventure = {
        let view = view.clone();
        let toast = toast.clone();
        Callback::from(move |_| {
            view.set(View::Map);
            toast.set(Some(ToastMessage {
                title: "Adventure Started! 🎮".to_string(),
                description: "Welcome to your candy-filled journey!".to_string(),
            }));
        })
    };
    let open_about = {
        let show_about = show_about.clone();
        Callback::from(move |_| show_about.set(true))
    };
    let close_about = {
        let show_about = show_about.clone();
        Callback::from(move |_| show_about.set(false))
    };
    let dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |_| toast.set(None))
    };

    // Placeholder play handler: the mini-games themselves don't exist yet, so
    // confirming play only surfaces a notification.
    let on_play = {
        let toast = toast.clone();
        Callback::from(move |level_id: u32| {
            clog(&format!("play requested for game {}", level_id));
            toast.set(Some(ToastMessage {
                title: format!("Game {} Selected! 🍭", level_id),
                description: "Game functionality coming soon!".to_string(),
            }));
        })
    };

    let content = match *view {
        View::Hero => html! { <HeroSection
            on_start_adventure={start_adventure.clone()}
            on_show_about={open_about.clone()}
        /> },
        View::Map => html! { <IslandMap
            levels={levels.clone()}
            on_play={on_play.clone()}
        /> },
    };

    html! {
        <div id="root" style="min-height:100vh; font-family:'Segoe UI', sans-serif; color:#1c2128;">
            { content }
            <AboutModal show={*show_about} on_close={close_about} />
            <Toast message={(*toast).clone()} on_dismiss={dismiss_toast} />
        </div>
    }
}
