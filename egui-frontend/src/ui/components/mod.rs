pub mod chart_renderer;
pub mod header;
pub mod setup_cards;
pub mod styling;
pub mod summary_cards;
pub mod table_renderer;
