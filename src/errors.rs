//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timestamp format: {0}")]
    InvalidDateTime(String),

    #[error("Invalid event kind: {0}")]
    InvalidEventKind(String),

    #[error("Invalid request kind: {0}")]
    InvalidRequestKind(String),

    #[error("Invalid request status: {0}")]
    InvalidRequestStatus(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Subject {0} not found")]
    SubjectNotFound(i64),

    #[error("Subject {0} is deactivated")]
    SubjectInactive(i64),

    #[error("Event {0} not found")]
    EventNotFound(i64),

    #[error("Request {0} not found")]
    RequestNotFound(i64),

    #[error("Request {0} was already decided ({1})")]
    RequestAlreadyDecided(i64, String),

    #[error("Holiday {0} not found")]
    HolidayNotFound(i64),

    #[error("Subject {0} has no active clock-in today; record a clock-in first")]
    NotClockedIn(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
