pub mod addr;
pub mod cli;
pub mod connector;
pub mod dump;
pub mod pages;
pub mod resource;
pub mod subdomains;
pub mod util;
