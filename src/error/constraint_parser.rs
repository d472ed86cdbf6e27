/// Utility for parsing PostgreSQL constraint violation messages.
///
/// Constraint names follow the `{table}_{column}_{suffix}` convention used by
/// the migrations (`users_email_key`, `products_price_check`, ...), so the
/// entity and field can be recovered without touching the error message. The
/// offending value is pulled from the `Key (field)=(value)` detail Postgres
/// appends to unique violations.
pub struct ConstraintParser;

impl ConstraintParser {
    /// Parses a unique constraint violation into (entity, field, value).
    pub fn parse_unique_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        let (entity, field) = Self::parse_constraint_name(constraint_name?, "_key")?;
        let value = Self::extract_value_from_detail(message)
            .unwrap_or_else(|| "duplicate value".to_string());
        Some((entity, field, value))
    }

    /// Parses a foreign key violation into (entity, field).
    pub fn parse_foreign_key_violation(constraint_name: Option<&str>) -> Option<(String, String)> {
        Self::parse_constraint_name(constraint_name?, "_fkey")
    }

    /// Parses a check constraint violation into (entity, field).
    pub fn parse_check_violation(constraint_name: Option<&str>) -> Option<(String, String)> {
        Self::parse_constraint_name(constraint_name?, "_check")
    }

    /// Splits `{table}_{column}{suffix}` into (table, column).
    ///
    /// The table name is matched greedily against the known tables so that
    /// multi-word columns like `sold_product_amount` survive the split.
    fn parse_constraint_name(constraint: &str, suffix: &str) -> Option<(String, String)> {
        const TABLES: [&str; 4] = ["transaction_histories", "categories", "products", "users"];

        let stem = constraint.strip_suffix(suffix)?;
        for table in TABLES {
            if let Some(column) = stem.strip_prefix(table).and_then(|s| s.strip_prefix('_')) {
                if !column.is_empty() {
                    return Some((table.to_string(), column.to_string()));
                }
            }
        }
        None
    }

    /// Extracts the value from a `Key (field)=(value)` detail line.
    fn extract_value_from_detail(message: &str) -> Option<String> {
        let start = message.find(")=(")? + 3;
        let end = message[start..].find(')')? + start;
        Some(message[start..end].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_unique_violation_on_users_email() {
        let message = "duplicate key value violates unique constraint \"users_email_key\"\n\
                       DETAIL: Key (email)=(test@example.com) already exists.";
        let result = ConstraintParser::parse_unique_violation(message, Some("users_email_key"));
        assert_eq!(
            result,
            Some((
                "users".to_string(),
                "email".to_string(),
                "test@example.com".to_string()
            ))
        );
    }

    #[test]
    fn parses_unique_violation_on_categories_type() {
        let message = "duplicate key value violates unique constraint \"categories_type_key\"\n\
                       DETAIL: Key (type)=(Electronics) already exists.";
        let result =
            ConstraintParser::parse_unique_violation(message, Some("categories_type_key"));
        assert_eq!(
            result,
            Some((
                "categories".to_string(),
                "type".to_string(),
                "Electronics".to_string()
            ))
        );
    }

    #[test]
    fn parses_check_violation_with_multi_word_column() {
        let result =
            ConstraintParser::parse_check_violation(Some("categories_sold_product_amount_check"));
        assert_eq!(
            result,
            Some(("categories".to_string(), "sold_product_amount".to_string()))
        );
    }

    #[test]
    fn parses_foreign_key_violation() {
        let result =
            ConstraintParser::parse_foreign_key_violation(Some("products_category_id_fkey"));
        assert_eq!(
            result,
            Some(("products".to_string(), "category_id".to_string()))
        );
    }

    #[test]
    fn unknown_table_yields_none() {
        assert_eq!(
            ConstraintParser::parse_check_violation(Some("invoices_total_check")),
            None
        );
    }

    #[test]
    fn missing_detail_falls_back_to_placeholder() {
        let result = ConstraintParser::parse_unique_violation(
            "duplicate key value violates unique constraint",
            Some("products_title_key"),
        );
        assert_eq!(
            result,
            Some((
                "products".to_string(),
                "title".to_string(),
                "duplicate value".to_string()
            ))
        );
    }
}
