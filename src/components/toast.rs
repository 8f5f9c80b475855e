use yew::prelude::*;

/// A single notification: the surrounding app replaces it wholesale, so the
/// newest message always wins.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub title: String,
    pub description: String,
}

#[derive(Properties, PartialEq, Clone)]
pub struct ToastProps {
    pub message: Option<ToastMessage>,
    pub on_dismiss: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let Some(msg) = &props.message else {
        return html! {};
    };
    let dismiss_btn = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:fixed; bottom:24px; right:24px; background:#161b22; color:#e6edf3; border:1px solid #30363d; border-radius:10px; padding:14px 18px; min-width:260px; max-width:380px; box-shadow:0 6px 18px rgba(0,0,0,0.4); z-index:100; display:flex; gap:12px; align-items:flex-start;">
            <div style="flex:1;">
                <div style="font-weight:600; margin-bottom:4px;">{ &msg.title }</div>
                <div style="font-size:13px; opacity:0.8;">{ &msg.description }</div>
            </div>
            <button onclick={dismiss_btn} style="background:none; border:none; color:#8b949e; cursor:pointer; font-size:16px; padding:0;">{"✕"}</button>
        </div>
    }
}
