// =============================================================================
// Application Identity
// =============================================================================

/// Application name in title case (for display and platform directories)
pub const APP_NAME: &str = "Docket";

/// Application name in lowercase (for paths and identifiers)
pub const APP_NAME_LOWER: &str = "docket";

/// Unix-style dotfile folder name
pub const APP_DOT_FOLDER: &str = ".docket";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name
pub const CONFIG_FILE_NAME: &str = "docket.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "DOCKET_CONFIG";

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable for debug mode
pub const ENV_DEBUG: &str = "DOCKET_DEBUG";

/// Environment variable for server host
pub const ENV_HOST: &str = "DOCKET_HOST";

/// Environment variable for server port
pub const ENV_PORT: &str = "DOCKET_PORT";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "DOCKET_LOG";

/// Environment variable to override data directory
pub const ENV_DATA_DIR: &str = "DOCKET_DATA_DIR";

/// Environment variable for the SQLite database file
pub const ENV_DATABASE_PATH: &str = "DOCKET_DATABASE_PATH";

// =============================================================================
// Server Defaults
// =============================================================================

pub const DEFAULT_HOST: &str = "127.0.0.1";

pub const DEFAULT_PORT: u16 = 5390;

/// Default log filter when neither DOCKET_LOG nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "info,docket=info,docket_server=info";

/// Default body limit for API requests (1 MB)
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

// =============================================================================
// SQLite Database
// =============================================================================

/// SQLite database filename
pub const SQLITE_DB_FILENAME: &str = "docket.db";

/// SQLite connection pool max connections
pub const SQLITE_MAX_CONNECTIONS: u32 = 5;

/// SQLite busy timeout in seconds
pub const SQLITE_BUSY_TIMEOUT_SECS: u64 = 30;

/// SQLite cache size (negative = KB, so -64000 = 64MB)
pub const SQLITE_CACHE_SIZE: &str = "-64000";

/// SQLite WAL auto-checkpoint threshold (pages, ~4MB at 1000)
pub const SQLITE_WAL_AUTOCHECKPOINT: &str = "1000";

/// WAL checkpoint interval in seconds (5 minutes)
pub const SQLITE_CHECKPOINT_INTERVAL_SECS: u64 = 300;

// =============================================================================
// Shutdown
// =============================================================================

/// Graceful shutdown timeout in seconds
pub const SHUTDOWN_TIMEOUT_SECS: u64 = 30;
