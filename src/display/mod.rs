//! Rendering of fetched resources for the console and the demo server.

pub mod console;
pub mod html;

pub use console::{
    render_character, render_films, render_metrics, render_planets, render_starships,
    render_vehicle,
};
pub use html::{escape_html, render_index_html};
