pub mod article_list;
pub mod detail_dialog;
pub mod header;
pub mod interaction;
pub mod scrape_panel;
pub mod sidebar;
pub mod stats_cards;
