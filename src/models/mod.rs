pub mod article;
pub mod stats;
pub mod view;
