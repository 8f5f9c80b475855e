pub mod about_modal;
pub mod app;
pub mod hero_section;
pub mod island_map;
pub mod level_detail_card;
pub mod level_node;
pub mod progress_card;
pub mod star_row;
pub mod toast;
