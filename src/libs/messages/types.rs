#[derive(Debug, Clone)]
pub enum Message {
    // === USAGE ===
    Usage,

    // === DURATION MESSAGES ===
    InvalidDuration(String, String), // token, reason
    NegativeDuration(String),        // formatted duration

    // === TASK MESSAGES ===
    EmptyTask,
    DefaultProjectRequired(String), // token

    // === DAY MESSAGES ===
    InvalidDay(String), // token

    // === ENTRY MESSAGES ===
    EntryPreview {
        issue_id: String,
        elapsed: String,
        day: String,
        comment: String,
    },
    DryRunNothingSent,

    // === WORKLOG MESSAGES ===
    LoggingTime,
    WorklogCreated {
        author: String,
        issue_id: String,
        minutes: i64,
        url: String,
    },
    WorklogRejected(u16, String), // status, details
    WorklogRequestFailed(String), // error message

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigSavedAt(String),          // path
    ConfigParseError(String),       // path
    ConfigJiraMissing,
    SetupGreeting,
    SetupSummary {
        login: String,
        masked_password: String,
        api_url: String,
        default_project: String,
    },

    // === AUTHENTICATION MESSAGES ===
    JiraAuthenticateFailed,

    // === VALIDATION MESSAGES ===
    ValueRequired,
    UrlInvalid(String), // parser error
    UrlHostMissing,

    // === PROMPTS ===
    PromptJiraLogin,
    PromptJiraPassword,
    PromptJiraUrl,
    PromptDefaultProject,
    PromptConfirmSetup,
}
