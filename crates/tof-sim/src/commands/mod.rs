pub mod compute;
pub mod demo;
pub mod output;
pub mod version;
