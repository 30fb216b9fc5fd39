use polls_common::{
    ID_FIELD_NAME, PUBLISHED_FIELD_NAME, QUESTION_TABLE_NAME, QUESTION_TEXT_FIELD_NAME,
    QUESTION_TEXT_MAX_LEN,
};

/// Represents table in a database, used for ddl generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
    pub indexes: Vec<Index>,
}

/// Represents one column in the database table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub column_type: String,
    pub not_null: bool,
    pub primary_key: bool,
}

/// Represents an index in the database table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    pub table_name: String,
    pub columns: Vec<String>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<Column>, indexes: Vec<Index>) -> Self {
        Self {
            name: name.into(),
            columns,
            indexes,
        }
    }
}

impl Column {
    pub fn new<T: Into<String>>(name: T, column_type: T, not_null: bool) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
            not_null,
            primary_key: false,
        }
    }

    pub fn primary_key<T: Into<String>>(name: T, column_type: T) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
            not_null: false,
            primary_key: true,
        }
    }
}

impl Index {
    pub fn new<T: Into<String>>(table_name: T, columns: Vec<T>) -> Self {
        Self {
            table_name: table_name.into(),
            columns: columns.into_iter().map(T::into).collect(),
        }
    }
}

/// Tables the polls service expects to find in its schema
pub fn needed_tables() -> Vec<Table> {
    vec![questions_table()]
}

/// Questions are listed by publication time, hence the index on it
pub fn questions_table() -> Table {
    let text_type = format!("VARCHAR({})", QUESTION_TEXT_MAX_LEN);

    let columns = vec![
        Column::primary_key(ID_FIELD_NAME, "BIGSERIAL"),
        Column::new(QUESTION_TEXT_FIELD_NAME, text_type.as_str(), true),
        Column::new(PUBLISHED_FIELD_NAME, "TIMESTAMPTZ", true),
    ];
    let indexes = vec![Index::new(QUESTION_TABLE_NAME, vec![PUBLISHED_FIELD_NAME])];

    Table::new(QUESTION_TABLE_NAME, columns, indexes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn questions_table_layout() {
        let table = questions_table();

        assert_eq!(table.name, "polls_question");

        let names = table
            .columns
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["id", "question_text", "pub_date"]);

        let primary_keys = table
            .columns
            .iter()
            .filter(|c| c.primary_key)
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(primary_keys, vec!["id"]);

        assert!(table.columns.iter().skip(1).all(|c| c.not_null));
        assert_eq!(table.columns[1].column_type, "VARCHAR(200)");
        assert_eq!(table.indexes, vec![Index::new("polls_question", vec!["pub_date"])]);
    }
}
