//! Sort parameter resolution
//!
//! `sort=column.direction` is resolved against a record schema's sortable
//! fields. Anything unrecognised falls back to newest first.

use super::schema::RecordSchema;

pub const DEFAULT_SORT_COLUMN: &str = "created_at";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Resolved ORDER BY column. The column always comes from a schema table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub column: &'static str,
    pub direction: SortDirection,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self {
            column: DEFAULT_SORT_COLUMN,
            direction: SortDirection::Desc,
        }
    }
}

impl SortOrder {
    /// Resolve a raw `sort` value. Never fails.
    ///
    /// A bare column sorts descending. Segments after `column.direction` are
    /// ignored. An unknown column or direction yields the default order.
    pub fn resolve(sort: Option<&str>, schema: &RecordSchema) -> Self {
        let Some(sort) = sort.filter(|s| !s.is_empty()) else {
            return Self::default();
        };

        let mut segments = sort.split('.');
        let field = segments.next().unwrap_or_default();
        let direction = match segments.next() {
            Some(dir) => match SortDirection::parse(dir) {
                Some(direction) => direction,
                None => return Self::default(),
            },
            None => SortDirection::Desc,
        };

        match schema.sort_column(field) {
            Some(column) => Self { column, direction },
            None => Self::default(),
        }
    }

    /// ORDER BY fragment with the table alias applied.
    ///
    /// `id` is appended as a tiebreaker so pages are stable.
    pub fn to_sql(&self, alias: &str) -> String {
        let dir = self.direction.as_sql();
        format!("{alias}.{} {dir}, {alias}.id {dir}", self.column)
    }
}
