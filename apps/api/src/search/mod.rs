// Search pipeline: bounded body read → query normalization → provider call.

pub mod body;
pub mod handlers;
pub mod query;
