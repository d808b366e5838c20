//! API route handlers

pub mod cases;
pub mod health;
pub mod reimbursements;
