//! Text column mappings for the rank enums.

use std::str::FromStr;

use rusqlite::ToSql;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};

use crate::domain::{Membership, Role};
use crate::rank::{Direction, Tier};

fn parse_text<T>(value: ValueRef<'_>) -> FromSqlResult<T>
where
    T: FromStr<Err = anyhow::Error>,
{
    value
        .as_str()?
        .parse()
        .map_err(|e: anyhow::Error| FromSqlError::Other(e.into()))
}

macro_rules! text_column {
    ($ty:ty) => {
        impl ToSql for $ty {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                Ok(ToSqlOutput::from(self.as_str()))
            }
        }

        impl FromSql for $ty {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                parse_text(value)
            }
        }
    };
}

text_column!(Tier);
text_column!(Direction);
text_column!(Role);
text_column!(Membership);
