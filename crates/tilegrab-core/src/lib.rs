pub mod logging;

pub mod dispatch;
pub mod extract;
pub mod fetch;
pub mod index;
pub mod storage;
pub mod targets;
