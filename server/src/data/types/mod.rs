//! Shared data types for the persistence layer

mod records;

pub use records::{
    CaseActionRow, CaseRow, ListQuery, LookupRow, ReimbursementRow, UserRefRow,
};
