#[derive(Debug, Clone)]
pub enum Message {
    // === RECORD MESSAGES ===
    RecordCreated(String), // id
    RecordUpdated(String), // id
    RecordDeleted,
    RecordNotFound(String), // id
    TitleAndDateRequired,
    InvalidDate(String), // raw input
    RecordsHeader,
    NoRecordsFound,
    ConfirmDeleteRecord(String), // title
    EditingRecord(String),       // title

    // === SEARCH MESSAGES ===
    ResultsFound(usize),
    InvalidRegexPattern,

    // === DASHBOARD MESSAGES ===
    DashboardHeader,
    HoursRemaining(f64),
    TargetExceeded(f64),

    // === IMPORT / EXPORT MESSAGES ===
    DataExported(String, String), // path, mime type
    ImportingFile(String),        // path
    DataImported(usize),          // count
    InvalidJsonFile,
    InvalidJsonFormat,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    InvalidWeeklyCap(String), // raw input

    // === PROMPTS ===
    PromptRecordTitle,
    PromptRecordDate,
    PromptWeeklyCap,
    PromptDefaultStatus,

    // === GENERAL MESSAGES ===
    OperationCancelled,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseUpToDate,
}
