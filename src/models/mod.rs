pub mod event;
pub mod event_kind;
pub mod holiday;
pub mod request;
pub mod subject;
pub mod worked_time;
