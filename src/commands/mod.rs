pub mod common;
pub mod launch;
pub mod list;
pub mod mark;
pub mod search;
pub mod status;
