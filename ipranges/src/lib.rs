pub mod cli;
pub mod document;
pub mod fetch;
pub mod lookup;
