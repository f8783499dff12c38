//! Diesel table definitions for the directory schema.
//!
//! Keep in sync with `backend/migrations`.

diesel::table! {
    /// Authoritative employee records keyed by opaque identifier.
    employees (employee_id) {
        employee_id -> Text,
        first_name -> Text,
        last_name -> Text,
        position -> Text,
        department -> Text,
        /// Direct report identifiers in stored order. Not foreign keys.
        direct_reports -> Array<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Append-only compensation history.
    compensations (id) {
        /// Insertion sequence; breaks ties between equal effective dates.
        id -> Int8,
        employee_id -> Text,
        salary -> Float8,
        effective_date -> Timestamptz,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(compensations -> employees (employee_id));
diesel::allow_tables_to_appear_in_same_query!(compensations, employees);
