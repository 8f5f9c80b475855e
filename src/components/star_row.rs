use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StarRowViewProps {
    pub filled: u8,
    pub slots: u8,
    #[prop_or(14)]
    pub font_size: u32,
}

/// Row of star slots with the first `filled` lit.
#[function_component(StarRowView)]
pub fn star_row_view(props: &StarRowViewProps) -> Html {
    html! {
        <div style={format!("display:flex; gap:3px; font-size:{}px;", props.font_size)}>
            { for (0..props.slots).map(|i| {
                let (glyph, color) = if i < props.filled {
                    ("⭐", "#ffd43b")
                } else {
                    ("☆", "#ced4da")
                };
                html! { <span style={format!("color:{};", color)}>{ glyph }</span> }
            }) }
        </div>
    }
}
