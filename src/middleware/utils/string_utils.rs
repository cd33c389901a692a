use crate::middleware::error::{AppError, AppResult};
use surrealdb::sql::Thing;

pub fn get_string_thing(value: String) -> AppResult<Thing> {
    Thing::try_from(value.as_str()).map_err(|_| AppError::Generic {
        description: format!("Invalid record id = {value}"),
    })
}

#[cfg(test)]
mod tests {
    use super::get_string_thing;

    #[test]
    fn parses_table_and_id() {
        let thing = get_string_thing("local_user:abc123".to_string()).unwrap();
        assert_eq!(thing.tb, "local_user");
        assert_eq!(thing.id.to_raw(), "abc123");
    }

    #[test]
    fn rejects_plain_string() {
        assert!(get_string_thing("no-colon-here".to_string()).is_err());
    }
}
