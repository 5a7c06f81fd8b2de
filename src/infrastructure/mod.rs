//! External concerns: database, migrations, repository implementations

pub mod database;
