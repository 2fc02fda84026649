pub mod api;
pub mod cache;
pub mod session;
pub mod storage;
pub mod theme;
