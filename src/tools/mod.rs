// ABOUTME: Store-backed tools exposing table CRUD over an injected SqlStore.
// ABOUTME: Each tool builds parameterized SQL and self-reports its outcome.

mod delete_rows;
mod insert_row;
mod list_tables;
mod query_rows;
mod store;

pub use delete_rows::DeleteRowsTool;
pub use insert_row::InsertRowTool;
pub use list_tables::ListTablesTool;
pub use query_rows::QueryRowsTool;
pub use store::{Row, SqlStore};

#[cfg(test)]
pub(crate) mod test_store;
