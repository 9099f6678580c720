pub mod book;
pub mod scenarios;
