pub mod calendar;
pub mod dispatch;
pub mod risk;
pub mod schema;
pub mod shared;
