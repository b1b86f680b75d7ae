use clap::{Parser, Subcommand};

/// Command-line interface definition for attendlog.
/// CLI application to record attendance events and reconstruct worked time.
#[derive(Parser)]
#[command(
    name = "attendlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record employee attendance events (clock in/out, breaks) and reconstruct worked time from them",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for problems")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage subjects (employee profiles)
    Subject {
        #[command(subcommand)]
        action: SubjectAction,
    },

    /// Record a live clock action for a subject
    Clock {
        /// Action: in, out, break-start, break-end
        action: String,

        #[arg(long = "subject", help = "Subject id the action belongs to")]
        subject: i64,

        #[arg(
            long = "at",
            help = "Timestamp of the action (YYYY-MM-DD HH:MM); defaults to now"
        )]
        at: Option<String>,

        #[arg(long = "center", help = "Work center the action happened at")]
        center: Option<String>,
    },

    /// Manual entry management (add, correct, void) for back-office actors
    Entry {
        #[command(subcommand)]
        action: EntryAction,
    },

    /// List raw attendance entries for a subject
    List {
        #[arg(long = "subject", help = "Subject id")]
        subject: i64,

        #[arg(
            long = "period",
            help = "Period: YYYY-MM-DD, YYYY-MM, YYYY, A:B or 'all' (default: current month)"
        )]
        period: Option<String>,

        #[arg(long = "all", help = "Include voided entries")]
        all: bool,

        #[arg(long = "json", help = "Emit JSON instead of a table")]
        json: bool,
    },

    /// Reconstruct worked time for a subject over a period
    Report {
        #[arg(long = "subject", help = "Subject id")]
        subject: i64,

        #[arg(
            long = "period",
            help = "Period: YYYY-MM-DD, YYYY-MM, YYYY, A:B or 'all' (default: current month)"
        )]
        period: Option<String>,

        #[arg(
            long = "as-of",
            help = "Treat this timestamp as 'now' for an open session (YYYY-MM-DD HH:MM); defaults to now"
        )]
        as_of: Option<String>,

        #[arg(long = "json", help = "Emit JSON instead of a table")]
        json: bool,
    },

    /// Presence board: what every active subject is doing right now
    Status {
        #[arg(long = "center", help = "Only subjects assigned to this work center")]
        center: Option<String>,
    },

    /// Manage company holidays
    Holiday {
        #[command(subcommand)]
        action: HolidayAction,
    },

    /// Manage planner (vacation/leave) requests
    Request {
        #[command(subcommand)]
        action: RequestAction,
    },
}

#[derive(Subcommand)]
pub enum SubjectAction {
    /// Register a new subject
    Add {
        name: String,

        #[arg(
            long = "centers",
            help = "Comma-separated work centers the subject is assigned to"
        )]
        centers: Option<String>,
    },

    /// List subjects
    List {
        #[arg(long = "all", help = "Include deactivated subjects")]
        all: bool,
    },

    /// Deactivate a subject (history is kept)
    Deactivate { id: i64 },
}

#[derive(Subcommand)]
pub enum EntryAction {
    /// Add an entry on behalf of a subject
    Add {
        #[arg(long = "subject")]
        subject: i64,

        /// Kind: in, out, break-start, break-end
        #[arg(long = "kind")]
        kind: String,

        #[arg(long = "at", help = "Timestamp of the entry (YYYY-MM-DD HH:MM)")]
        at: String,

        #[arg(long = "center")]
        center: Option<String>,
    },

    /// Correct an entry's timestamp (keeps the original for audit)
    Edit {
        id: i64,

        #[arg(long = "at", help = "Corrected timestamp (YYYY-MM-DD HH:MM)")]
        at: String,
    },

    /// Void an entry (soft delete; stops counting, row is kept)
    Void { id: i64 },
}

#[derive(Subcommand)]
pub enum HolidayAction {
    /// Add a holiday
    Add {
        /// Date (YYYY-MM-DD)
        date: String,

        name: String,

        #[arg(long = "center", help = "Limit to one work center (default: all)")]
        center: Option<String>,
    },

    /// List holidays
    List {
        #[arg(long = "year")]
        year: Option<i32>,
    },

    /// Delete a holiday
    Del { id: i64 },
}

#[derive(Subcommand)]
pub enum RequestAction {
    /// File a new request (created as pending)
    Add {
        #[arg(long = "subject")]
        subject: i64,

        #[arg(long = "from", help = "First day (YYYY-MM-DD)")]
        from: String,

        #[arg(long = "to", help = "Last day (YYYY-MM-DD)")]
        to: String,

        /// Kind: vacation, leave, other
        #[arg(long = "kind", default_value = "vacation")]
        kind: String,

        #[arg(long = "comment")]
        comment: Option<String>,
    },

    /// List requests
    List {
        #[arg(long = "status", help = "Filter: pending, approved, rejected")]
        status: Option<String>,
    },

    /// Approve a pending request
    Approve { id: i64 },

    /// Reject a pending request
    Reject { id: i64 },
}
