//! Seeded in-memory database shared by repository and API tests

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use super::migrations::run_migrations;

const SEED: &str = r#"
INSERT INTO users (id, email, display_name, created_at, updated_at) VALUES
    ('u-1', 'ana@example.com', 'Ana Reyes', 1, 1),
    ('u-2', 'ben@example.com', 'Ben Ortiz', 1, 1);

INSERT INTO categories (id, name) VALUES
    ('cat-civil', 'Civil'),
    ('cat-criminal', 'Criminal');

INSERT INTO divisions (id, name) VALUES
    ('div-1', 'Litigation'),
    ('div-2', 'Appeals');

INSERT INTO natures (id, name) VALUES
    ('nat-1', 'Contract'),
    ('nat-2', 'Fraud');

INSERT INTO actions (id, title) VALUES
    ('act-1', 'Filed Motion'),
    ('act-2', 'Hearing Scheduled');

INSERT INTO expense_types (id, name) VALUES
    ('exp-1', 'Filing Fees'),
    ('exp-2', 'Travel');

INSERT INTO cases (id, title, case_number, filing_date, priority_key, status_key,
    category_id, division_id, nature_id, assigned_to_id, created_at, updated_at, deleted_at) VALUES
    ('c-1', 'Reyes v. Acme', 'CV-2024-001', '2024-01-15', 'high', 'open',
        'cat-civil', 'div-1', 'nat-1', 'u-1', 100, 100, NULL),
    ('c-2', 'People v. Doe', 'CR-2024-002', '2024-02-20', 'low', 'closed',
        'cat-criminal', 'div-1', 'nat-2', 'u-2', 200, 200, NULL),
    ('c-3', 'Acme Holdings Appeal', 'CV-2024-003', '2024-03-05', 'high', 'pending',
        'cat-civil', 'div-2', 'nat-1', 'u-1', 300, 300, NULL),
    ('c-4', 'Deleted Matter', 'CV-2023-099', '2023-12-01', 'medium', 'open',
        'cat-civil', 'div-1', 'nat-1', 'u-2', 400, 400, 450);

INSERT INTO case_actions (id, case_id, action_id, note, created_at) VALUES
    ('ca-1', 'c-1', 'act-1', 'Motion to dismiss', 110),
    ('ca-2', 'c-2', 'act-2', NULL, 210),
    ('ca-4', 'c-4', 'act-2', NULL, 410);

UPDATE cases SET last_action_id = 'ca-1' WHERE id = 'c-1';
UPDATE cases SET last_action_id = 'ca-2' WHERE id = 'c-2';
UPDATE cases SET last_action_id = 'ca-4' WHERE id = 'c-4';

INSERT INTO reimbursements (id, description, amount, date, remarks, case_id, user_id,
    expense_type_id, created_at, updated_at, deleted_at) VALUES
    ('r-1', 'Court filing fee', 150.0, '2024-01-16', NULL, 'c-1', 'u-1', 'exp-1', 100, 100, NULL),
    ('r-2', 'Taxi to hearing', 32.5, '2024-02-21', 'Receipt attached', 'c-2', 'u-2', 'exp-2', 200, 200, NULL),
    ('r-3', 'Deleted expense', 10.0, '2024-01-20', NULL, 'c-1', 'u-1', 'exp-2', 300, 300, 350);
"#;

/// Migrated in-memory pool with no records
pub async fn empty_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .with_regexp();
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

/// Migrated in-memory pool with cases and reimbursements, including soft-deleted rows
pub async fn seeded_pool() -> SqlitePool {
    let pool = empty_pool().await;
    sqlx::query(SEED).execute(&pool).await.unwrap();
    pool
}
