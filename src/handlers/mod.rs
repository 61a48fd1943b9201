//! Operation handlers
//!
//! One handler per operation. Each checks its arguments before touching the
//! ledger and reports failure through [`ChaincodeError`]; none of them catch
//! errors from the ledger.
//!
//! | Operation          | Args | Payload                     |
//! |--------------------|------|-----------------------------|
//! | `initLedger`       | any  | none                        |
//! | `addStudent`       | 5    | none                        |
//! | `queryStudent`     | 1    | stored bytes                |
//! | `queryAllStudents` | any  | JSON array of `{Key,Record}`|
//! | `deleteStudent`    | 1    | none                        |
//!
//! [`ChaincodeError`]: crate::api::ChaincodeError

mod create;
mod delete;
mod list;
mod query;
mod seed;

pub use create::add_student;
pub use delete::delete_student;
pub use list::{query_all_students, ListEntry};
pub use query::query_student;
pub use seed::{init_ledger, seed_records};

pub const INIT_LEDGER: &str = "initLedger";
pub const ADD_STUDENT: &str = "addStudent";
pub const QUERY_STUDENT: &str = "queryStudent";
pub const QUERY_ALL_STUDENTS: &str = "queryAllStudents";
pub const DELETE_STUDENT: &str = "deleteStudent";

/// Prefix of keys written by `initLedger`
pub const KEY_PREFIX: &str = "STUDENT";

/// Inclusive start of the `queryAllStudents` window
pub const SCAN_START_KEY: &str = "STUDENT0";

/// Exclusive end of the `queryAllStudents` window.
///
/// Lexicographic, so it is not a numeric bound: `STUDENT1000` sorts before
/// it and is listed, while `STUDENT999` itself is not.
pub const SCAN_END_KEY: &str = "STUDENT999";

/// Key for the seed record at `index`
pub fn record_key(index: usize) -> String {
    format!("{}{}", KEY_PREFIX, index)
}
