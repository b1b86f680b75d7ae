pub mod clock;
pub mod config;
pub mod db;
pub mod entry;
pub mod holiday;
pub mod init;
pub mod list;
pub mod log;
pub mod report;
pub mod request;
pub mod status;
pub mod subject;
