pub mod client;
pub mod table_names;
