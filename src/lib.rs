pub mod card;
pub mod cli;
pub mod error;
pub mod feed;
pub mod github;
pub mod page;
pub mod types;
