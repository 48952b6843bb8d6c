mod group;
mod response;

pub use group::{Group, GroupTable, NewGroup};
pub use response::{NewResponse, Response, ResponseTable};

/// Current UTC time as stored by SQLite, fixed-width so text ordering matches time ordering.
pub(crate) const SQL_NOW: &str = "strftime('%Y-%m-%dT%H:%M:%fZ', 'now')";

pub trait Table {
    /// The name of the table
    fn name(&self) -> &'static str;

    /// The SQL statement to create the table
    fn create(&self) -> String;

    /// The SQL statement to dispose the table
    fn dispose(&self) -> String;

    /// The dependencies of the table
    fn dependencies(&self) -> Vec<&'static str>;
}
