pub mod error;
pub mod extract;
pub mod flash;
pub mod response;
