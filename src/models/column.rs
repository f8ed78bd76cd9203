/// One row returned by `PRAGMA table_info`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    pub cid: i64,
    pub name: String,
    pub decl_type: String,
    pub not_null: bool,
    pub default_value: Option<String>,
    /// 1-based position inside the primary key, 0 when not part of it.
    pub primary_key: i64,
}

impl ColumnInfo {
    /// A column is mandatory when declared NOT NULL or when it is the
    /// primary key: SQLite never flags the `INTEGER PRIMARY KEY` rowid alias
    /// as NOT NULL, yet it cannot hold NULL.
    pub fn is_required(&self) -> bool {
        self.not_null || self.primary_key > 0
    }

    pub fn required_label(&self) -> &'static str {
        if self.is_required() { "Oui" } else { "Non" }
    }
}
