use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Account role stored as the `user_role` Postgres enum.
///
/// Every registered user starts as `Customer`; the seeded admin account is
/// the only `Admin` unless one is promoted directly in the database.
#[derive(
    diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
#[db_enum(existing_type_path = "crate::schema::sql_types::UserRole")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Customer,
    Admin,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Customer => write!(f, "customer"),
            UserRole::Admin => write!(f, "admin"),
        }
    }
}

/// User model for reading from database.
///
/// `balance` is kept in the smallest currency unit. The `password` column
/// holds an argon2 PHC string and is never serialized in responses.
#[derive(Debug, Queryable, Selectable, Identifiable, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub balance: i64,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

/// NewUser model for inserting new records.
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub balance: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Customer).unwrap(), "\"customer\"");
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
    }

    #[test]
    fn role_round_trips_through_serde() {
        let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, UserRole::Admin);
        assert_eq!(role.to_string(), "admin");
    }
}
