//! SQLite schema definitions
//!
//! Fresh databases get the full schema at the current version. Older
//! databases are brought forward by the incremental migrations.

/// Current schema version
pub const SCHEMA_VERSION: i32 = 2;

/// Complete schema SQL
pub const SCHEMA: &str = r#"
-- =============================================================================
-- Infrastructure: Schema version tracking
-- =============================================================================
CREATE TABLE IF NOT EXISTS schema_version (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    version INTEGER NOT NULL,
    applied_at INTEGER NOT NULL,
    description TEXT
);

CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    applied_at INTEGER NOT NULL,
    checksum TEXT NOT NULL,
    execution_time_ms INTEGER,
    success INTEGER NOT NULL DEFAULT 1
);

-- =============================================================================
-- 1. Lookup tables
-- =============================================================================
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    email TEXT UNIQUE CHECK(email IS NULL OR length(email) >= 3),
    display_name TEXT CHECK(display_name IS NULL OR length(display_name) <= 100),
    created_at INTEGER NOT NULL,
    updated_at INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS priorities (
    key TEXT PRIMARY KEY,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS statuses (
    key TEXT PRIMARY KEY,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS categories (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS divisions (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS natures (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS actions (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS expense_types (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
);

-- =============================================================================
-- 2. Cases (last_action_id is set after the case_actions row exists)
-- =============================================================================
CREATE TABLE IF NOT EXISTS cases (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    case_number TEXT NOT NULL,
    filing_date TEXT,
    priority_key TEXT REFERENCES priorities(key),
    status_key TEXT REFERENCES statuses(key),
    category_id TEXT REFERENCES categories(id),
    division_id TEXT REFERENCES divisions(id),
    nature_id TEXT REFERENCES natures(id),
    assigned_to_id TEXT REFERENCES users(id) ON DELETE SET NULL,
    last_action_id TEXT,
    created_at INTEGER NOT NULL,
    updated_at INTEGER NOT NULL,
    deleted_at INTEGER
);

CREATE TABLE IF NOT EXISTS case_actions (
    id TEXT PRIMARY KEY,
    case_id TEXT NOT NULL REFERENCES cases(id) ON DELETE CASCADE,
    action_id TEXT NOT NULL REFERENCES actions(id),
    note TEXT,
    created_at INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_case_actions_case ON case_actions(case_id);

-- =============================================================================
-- 3. Reimbursements (references cases + users)
-- =============================================================================
CREATE TABLE IF NOT EXISTS reimbursements (
    id TEXT PRIMARY KEY,
    description TEXT NOT NULL,
    amount REAL NOT NULL,
    date TEXT,
    remarks TEXT,
    case_id TEXT REFERENCES cases(id) ON DELETE SET NULL,
    user_id TEXT REFERENCES users(id) ON DELETE SET NULL,
    expense_type_id TEXT REFERENCES expense_types(id),
    created_at INTEGER NOT NULL,
    updated_at INTEGER NOT NULL,
    deleted_at INTEGER
);

-- =============================================================================
-- 4. List indexes
-- =============================================================================
CREATE INDEX IF NOT EXISTS idx_cases_live_created ON cases(deleted_at, created_at);
CREATE INDEX IF NOT EXISTS idx_cases_case_number ON cases(case_number);
CREATE INDEX IF NOT EXISTS idx_reimbursements_live_created ON reimbursements(deleted_at, created_at);
CREATE INDEX IF NOT EXISTS idx_reimbursements_case ON reimbursements(case_id);

-- =============================================================================
-- Default data
-- =============================================================================
INSERT OR IGNORE INTO priorities (key, name) VALUES
    ('low', 'Low'),
    ('medium', 'Medium'),
    ('high', 'High');

INSERT OR IGNORE INTO statuses (key, name) VALUES
    ('open', 'Open'),
    ('pending', 'Pending'),
    ('closed', 'Closed');
"#;

/// Indexes added in version 2
pub const MIGRATION_V2: &str = r#"
CREATE INDEX IF NOT EXISTS idx_cases_live_created ON cases(deleted_at, created_at);
CREATE INDEX IF NOT EXISTS idx_cases_case_number ON cases(case_number);
CREATE INDEX IF NOT EXISTS idx_reimbursements_live_created ON reimbursements(deleted_at, created_at);
CREATE INDEX IF NOT EXISTS idx_reimbursements_case ON reimbursements(case_id)
"#;
