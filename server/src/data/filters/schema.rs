//! Record schema tables
//!
//! Maps API field names to database columns and relations for each record
//! type. Filter rendering and the sort allowlist both read from here.

/// How a field is stored
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Plain column on the record's own table
    Scalar,
    /// Foreign key into another table; filtering requires a subfield
    Relation(&'static RelationDef),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub name: &'static str,
    pub column: &'static str,
    pub kind: FieldKind,
    pub sortable: bool,
}

impl FieldDef {
    const fn scalar(name: &'static str, column: &'static str) -> Self {
        Self {
            name,
            column,
            kind: FieldKind::Scalar,
            sortable: false,
        }
    }

    const fn relation(
        name: &'static str,
        column: &'static str,
        relation: &'static RelationDef,
    ) -> Self {
        Self {
            name,
            column,
            kind: FieldKind::Relation(relation),
            sortable: false,
        }
    }

    const fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

/// Related table reached through a foreign key column
#[derive(Debug)]
pub struct RelationDef {
    pub table: &'static str,
    /// Column the foreign key points at
    pub key: &'static str,
    pub fields: &'static [FieldDef],
}

impl RelationDef {
    pub fn field(&self, name: &str) -> Option<&'static FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Top-level record table
#[derive(Debug)]
pub struct RecordSchema {
    pub table: &'static str,
    /// Table alias used in generated SQL
    pub alias: &'static str,
    pub fields: &'static [FieldDef],
}

impl RecordSchema {
    pub fn field(&self, name: &str) -> Option<&'static FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Database column for a sortable API field
    pub fn sort_column(&self, name: &str) -> Option<&'static str> {
        self.field(name).filter(|f| f.sortable).map(|f| f.column)
    }
}

static LOOKUP_BY_KEY: [FieldDef; 2] = [
    FieldDef::scalar("key", "key"),
    FieldDef::scalar("name", "name"),
];

static LOOKUP_BY_ID: [FieldDef; 2] = [
    FieldDef::scalar("id", "id"),
    FieldDef::scalar("name", "name"),
];

pub static PRIORITIES: RelationDef = RelationDef {
    table: "priorities",
    key: "key",
    fields: &LOOKUP_BY_KEY,
};

pub static STATUSES: RelationDef = RelationDef {
    table: "statuses",
    key: "key",
    fields: &LOOKUP_BY_KEY,
};

pub static CATEGORIES: RelationDef = RelationDef {
    table: "categories",
    key: "id",
    fields: &LOOKUP_BY_ID,
};

pub static DIVISIONS: RelationDef = RelationDef {
    table: "divisions",
    key: "id",
    fields: &LOOKUP_BY_ID,
};

pub static NATURES: RelationDef = RelationDef {
    table: "natures",
    key: "id",
    fields: &LOOKUP_BY_ID,
};

pub static USERS: RelationDef = RelationDef {
    table: "users",
    key: "id",
    fields: &[
        FieldDef::scalar("id", "id"),
        FieldDef::scalar("displayName", "display_name"),
        FieldDef::scalar("email", "email"),
    ],
};

pub static ACTIONS: RelationDef = RelationDef {
    table: "actions",
    key: "id",
    fields: &[FieldDef::scalar("id", "id"), FieldDef::scalar("title", "title")],
};

pub static CASE_ACTIONS: RelationDef = RelationDef {
    table: "case_actions",
    key: "id",
    fields: &[
        FieldDef::scalar("id", "id"),
        FieldDef::relation("action", "action_id", &ACTIONS),
        FieldDef::scalar("note", "note"),
    ],
};

pub static EXPENSE_TYPES: RelationDef = RelationDef {
    table: "expense_types",
    key: "id",
    fields: &LOOKUP_BY_ID,
};

pub static CASE_SCHEMA: RecordSchema = RecordSchema {
    table: "cases",
    alias: "c",
    fields: &[
        FieldDef::scalar("id", "id"),
        FieldDef::scalar("title", "title").sortable(),
        FieldDef::scalar("caseNumber", "case_number").sortable(),
        FieldDef::scalar("filingDate", "filing_date").sortable(),
        FieldDef::relation("priority", "priority_key", &PRIORITIES).sortable(),
        FieldDef::relation("status", "status_key", &STATUSES).sortable(),
        FieldDef::relation("category", "category_id", &CATEGORIES).sortable(),
        FieldDef::relation("division", "division_id", &DIVISIONS).sortable(),
        FieldDef::relation("nature", "nature_id", &NATURES).sortable(),
        FieldDef::relation("assignedTo", "assigned_to_id", &USERS).sortable(),
        FieldDef::relation("lastAction", "last_action_id", &CASE_ACTIONS),
        FieldDef::scalar("createdAt", "created_at").sortable(),
        FieldDef::scalar("updatedAt", "updated_at").sortable(),
    ],
};

pub static REIMBURSEMENT_SCHEMA: RecordSchema = RecordSchema {
    table: "reimbursements",
    alias: "r",
    fields: &[
        FieldDef::scalar("id", "id"),
        FieldDef::scalar("description", "description").sortable(),
        FieldDef::scalar("amount", "amount").sortable(),
        FieldDef::scalar("date", "date").sortable(),
        FieldDef::scalar("remarks", "remarks"),
        FieldDef::scalar("caseId", "case_id").sortable(),
        FieldDef::scalar("userId", "user_id").sortable(),
        FieldDef::scalar("expenseTypeId", "expense_type_id").sortable(),
        FieldDef::relation("expenseType", "expense_type_id", &EXPENSE_TYPES),
        FieldDef::scalar("createdAt", "created_at").sortable(),
        FieldDef::scalar("updatedAt", "updated_at").sortable(),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_sort_columns() {
        let expected = [
            ("priority", "priority_key"),
            ("title", "title"),
            ("caseNumber", "case_number"),
            ("assignedTo", "assigned_to_id"),
            ("filingDate", "filing_date"),
            ("status", "status_key"),
            ("category", "category_id"),
            ("division", "division_id"),
            ("nature", "nature_id"),
            ("createdAt", "created_at"),
            ("updatedAt", "updated_at"),
        ];
        for (field, column) in expected {
            assert_eq!(CASE_SCHEMA.sort_column(field), Some(column), "{field}");
        }
    }

    #[test]
    fn reimbursement_sort_columns() {
        assert_eq!(
            REIMBURSEMENT_SCHEMA.sort_column("expenseTypeId"),
            Some("expense_type_id")
        );
        assert_eq!(REIMBURSEMENT_SCHEMA.sort_column("amount"), Some("amount"));
        assert_eq!(REIMBURSEMENT_SCHEMA.sort_column("caseId"), Some("case_id"));
    }

    #[test]
    fn unsortable_or_unknown_fields() {
        assert_eq!(CASE_SCHEMA.sort_column("lastAction"), None);
        assert_eq!(CASE_SCHEMA.sort_column("assignedto"), None);
        assert_eq!(CASE_SCHEMA.sort_column("deleted_at"), None);
        assert_eq!(REIMBURSEMENT_SCHEMA.sort_column("remarks"), None);
    }

    #[test]
    fn nested_relation_lookup() {
        let last_action = CASE_SCHEMA.field("lastAction").unwrap();
        let FieldKind::Relation(case_actions) = last_action.kind else {
            panic!("lastAction should be a relation");
        };
        let action = case_actions.field("action").unwrap();
        let FieldKind::Relation(actions) = action.kind else {
            panic!("action should be a relation");
        };
        assert_eq!(actions.table, "actions");
        assert!(actions.field("title").is_some());
    }
}
