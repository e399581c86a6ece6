//! Target SQL dialect labels.

use std::fmt;
use std::str::FromStr;

/// Label identifying the target SQL engine for generated DDL.
///
/// Generation is currently dialect-agnostic: the label is echoed into the
/// header comment and nothing else. Per-dialect type mapping and quoting
/// would hang off this enum without changing the generator's contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SqlDialect {
    #[default]
    MySql,
    PostgreSql,
    Sqlite,
    MsSql,
    Oracle,
}

impl SqlDialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            SqlDialect::MySql => "mysql",
            SqlDialect::PostgreSql => "postgresql",
            SqlDialect::Sqlite => "sqlite",
            SqlDialect::MsSql => "mssql",
            SqlDialect::Oracle => "oracle",
        }
    }

    /// Upper-cased label for the generated header comment.
    pub fn header_label(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl FromStr for SqlDialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mysql" => Ok(SqlDialect::MySql),
            "postgresql" | "postgres" => Ok(SqlDialect::PostgreSql),
            "sqlite" => Ok(SqlDialect::Sqlite),
            "mssql" | "sqlserver" => Ok(SqlDialect::MsSql),
            "oracle" => Ok(SqlDialect::Oracle),
            _ => Err(format!(
                "Unknown dialect: {}. Valid options: mysql, postgresql, sqlite, mssql, oracle",
                s
            )),
        }
    }
}

impl fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
