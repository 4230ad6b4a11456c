pub mod classify;
pub mod dataset;
pub mod error;
pub mod evaluate;
pub mod neighbors;
pub mod parse;
pub mod scale;
pub mod search;
