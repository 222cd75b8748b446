//! In-memory backend for tests.
//!
//! Stores tables as plain JSON rows and interprets the same request shapes
//! the HTTP transport would send: equality filters, ordering, inserts with
//! id/created_at assignment, updates and deletes by filter, and the named
//! procedures the client invokes. Failures can be injected per call.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Map, Value};
use uuid::Uuid;

use super::error::BackendError;
use super::transport::{ApiMethod, ApiRequest, Transport};

#[derive(Default)]
pub struct MockBackend {
    tables: RwLock<HashMap<String, Vec<Value>>>,
    fail_next: Mutex<Option<String>>,
    calls: AtomicUsize,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests that reached the transport. Validation-failure
    /// tests assert this stays at zero.
    pub fn calls(&self) -> usize {
        self.calls.load(AtomicOrdering::SeqCst)
    }

    /// Make the next request fail with the given message.
    pub fn fail_next(&self, message: &str) {
        *self.fail_next.lock().unwrap() = Some(message.to_string());
    }

    /// Insert a row directly, assigning `id`/`created_at` when absent.
    /// Returns the stored row.
    pub fn insert_row(&self, table: &str, row: Value) -> Value {
        let row = Self::with_defaults(row);
        self.tables
            .write()
            .unwrap()
            .entry(table.to_string())
            .or_default()
            .push(row.clone());
        row
    }

    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.tables
            .read()
            .unwrap()
            .get(table)
            .cloned()
            .unwrap_or_default()
    }

    pub fn row_count(&self, table: &str) -> usize {
        self.tables
            .read()
            .unwrap()
            .get(table)
            .map(Vec::len)
            .unwrap_or(0)
    }

    /// Seed a signable user and return its id.
    pub fn seed_user(&self, email: &str, password: &str, full_name: &str, role: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.insert_row(
            "users_app",
            json!({
                "id": id,
                "email": email,
                "password": password,
                "full_name": full_name,
                "role": role,
            }),
        );
        id
    }

    fn with_defaults(row: Value) -> Value {
        let mut object = match row {
            Value::Object(object) => object,
            other => panic!("mock rows must be JSON objects, got: {}", other),
        };
        object
            .entry("id")
            .or_insert_with(|| json!(Uuid::new_v4()));
        object
            .entry("created_at")
            .or_insert_with(|| json!(Utc::now().to_rfc3339()));
        Value::Object(object)
    }

    fn eq_filters(request: &ApiRequest) -> Vec<(String, String)> {
        request
            .query
            .iter()
            .filter_map(|(key, value)| {
                value
                    .strip_prefix("eq.")
                    .map(|raw| (key.clone(), raw.to_string()))
            })
            .collect()
    }

    fn matches(row: &Value, filters: &[(String, String)]) -> bool {
        filters.iter().all(|(column, expected)| match row.get(column) {
            Some(Value::String(s)) => s == expected,
            Some(Value::Number(n)) => n.to_string() == *expected,
            Some(Value::Bool(b)) => b.to_string() == *expected,
            Some(Value::Null) | None => expected == "null",
            _ => false,
        })
    }

    fn compare(a: &Value, b: &Value) -> std::cmp::Ordering {
        use std::cmp::Ordering;
        match (a, b) {
            (Value::String(x), Value::String(y)) => x.cmp(y),
            (Value::Number(x), Value::Number(y)) => x
                .as_f64()
                .unwrap_or(0.0)
                .partial_cmp(&y.as_f64().unwrap_or(0.0))
                .unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        }
    }

    fn handle_get(&self, request: &ApiRequest) -> Result<Value, BackendError> {
        let filters = Self::eq_filters(request);
        let mut rows: Vec<Value> = self
            .rows(&request.path)
            .into_iter()
            .filter(|row| Self::matches(row, &filters))
            .collect();

        if let Some(order) = request
            .query
            .iter()
            .find(|(key, _)| key == "order")
            .map(|(_, value)| value.clone())
        {
            let (column, descending) = match order.rsplit_once('.') {
                Some((column, "desc")) => (column.to_string(), true),
                Some((column, _)) => (column.to_string(), false),
                None => (order.clone(), false),
            };
            rows.sort_by(|a, b| {
                let ordering = Self::compare(
                    a.get(&column).unwrap_or(&Value::Null),
                    b.get(&column).unwrap_or(&Value::Null),
                );
                if descending {
                    ordering.reverse()
                } else {
                    ordering
                }
            });
        }

        if let Some(limit) = request
            .query
            .iter()
            .find(|(key, _)| key == "limit")
            .and_then(|(_, value)| value.parse::<usize>().ok())
        {
            rows.truncate(limit);
        }

        Ok(Value::Array(rows))
    }

    fn handle_insert(&self, request: &ApiRequest) -> Result<Value, BackendError> {
        let body = request
            .body
            .clone()
            .ok_or_else(|| BackendError::api("missing request body", None))?;

        if request.path == "enrollments" {
            self.check_enrollment_unique(&body)?;
        }

        let row = self.insert_row(&request.path, body);
        Ok(json!([row]))
    }

    fn check_enrollment_unique(&self, body: &Value) -> Result<(), BackendError> {
        let student = body.get("student_id").cloned().unwrap_or(Value::Null);
        let course = body.get("course_id").cloned().unwrap_or(Value::Null);
        let duplicate = self.rows("enrollments").iter().any(|row| {
            row.get("student_id") == Some(&student) && row.get("course_id") == Some(&course)
        });
        if duplicate {
            return Err(BackendError::api(
                "duplicate key value violates unique constraint \"enrollments_student_id_course_id_key\"",
                Some("23505".to_string()),
            ));
        }
        Ok(())
    }

    fn handle_update(&self, request: &ApiRequest) -> Result<Value, BackendError> {
        let patch = match request.body.clone() {
            Some(Value::Object(patch)) => patch,
            _ => return Err(BackendError::api("missing patch body", None)),
        };
        let filters = Self::eq_filters(request);

        let mut tables = self.tables.write().unwrap();
        let rows = tables.entry(request.path.clone()).or_default();
        let mut updated = Vec::new();
        for row in rows.iter_mut() {
            if !Self::matches(row, &filters) {
                continue;
            }
            if let Value::Object(fields) = row {
                for (key, value) in &patch {
                    fields.insert(key.clone(), value.clone());
                }
            }
            updated.push(row.clone());
        }
        Ok(Value::Array(updated))
    }

    fn handle_delete(&self, request: &ApiRequest) -> Result<Value, BackendError> {
        let filters = Self::eq_filters(request);
        let mut tables = self.tables.write().unwrap();
        let rows = tables.entry(request.path.clone()).or_default();
        let (removed, kept): (Vec<Value>, Vec<Value>) = rows
            .drain(..)
            .partition(|row| Self::matches(row, &filters));
        *rows = kept;
        Ok(Value::Array(removed))
    }

    fn handle_rpc(&self, function: &str, params: &Value) -> Result<Value, BackendError> {
        match function {
            "authenticate_user" => self.rpc_authenticate_user(params),
            "create_student_with_user" => self.rpc_create_student(params),
            "create_professor_with_user" => self.rpc_create_professor(params),
            "update_user_and_student" => self.rpc_update_student(params),
            "update_user_and_professor" => self.rpc_update_professor(params),
            "get_courses_with_counts" => self.rpc_courses_with_counts(),
            other => Err(BackendError::api(
                format!("Could not find the function public.{}", other),
                Some("PGRST202".to_string()),
            )),
        }
    }

    fn rpc_authenticate_user(&self, params: &Value) -> Result<Value, BackendError> {
        let email = params.get("p_email").cloned().unwrap_or(Value::Null);
        let password = params.get("p_password").cloned().unwrap_or(Value::Null);
        let matched = self.rows("users_app").into_iter().find(|row| {
            row.get("email") == Some(&email) && row.get("password") == Some(&password)
        });
        match matched {
            Some(user) => Ok(json!([{
                "id": user.get("id"),
                "email": user.get("email"),
                "full_name": user.get("full_name"),
                "role": user.get("role"),
            }])),
            None => Ok(json!([])),
        }
    }

    fn rpc_create_student(&self, params: &Value) -> Result<Value, BackendError> {
        let user_id = Uuid::new_v4();
        self.insert_row(
            "users_app",
            json!({
                "id": user_id,
                "email": params.get("p_email"),
                "password": params.get("p_password"),
                "full_name": params.get("p_full_name"),
                "role": "estudiante",
            }),
        );
        let student = self.insert_row(
            "students",
            json!({
                "user_id": user_id,
                "student_code": params.get("p_student_code"),
                "major": params.get("p_major"),
                "semester": params.get("p_semester"),
            }),
        );
        Ok(student)
    }

    fn rpc_create_professor(&self, params: &Value) -> Result<Value, BackendError> {
        let user_id = Uuid::new_v4();
        self.insert_row(
            "users_app",
            json!({
                "id": user_id,
                "email": params.get("p_email"),
                "password": params.get("p_password"),
                "full_name": params.get("p_full_name"),
                "role": "profesor",
            }),
        );
        let professor = self.insert_row(
            "professors",
            json!({
                "user_id": user_id,
                "department": params.get("p_department"),
                "academic_title": params.get("p_academic_title"),
            }),
        );
        Ok(professor)
    }

    /// Null parameters mean "leave unchanged", as the real procedure does.
    fn patch_non_null(row: &mut Value, field: &str, value: Option<&Value>) {
        if let Some(value) = value {
            if !value.is_null() {
                if let Value::Object(fields) = row {
                    fields.insert(field.to_string(), value.clone());
                }
            }
        }
    }

    fn rpc_update_student(&self, params: &Value) -> Result<Value, BackendError> {
        let user_id = params.get("p_user_id").cloned().unwrap_or(Value::Null);
        let mut tables = self.tables.write().unwrap();

        if let Some(users) = tables.get_mut("users_app") {
            for row in users.iter_mut().filter(|row| row.get("id") == Some(&user_id)) {
                Self::patch_non_null(row, "email", params.get("p_email"));
                Self::patch_non_null(row, "full_name", params.get("p_full_name"));
                Self::patch_non_null(row, "password", params.get("p_password"));
            }
        }
        if let Some(students) = tables.get_mut("students") {
            for row in students
                .iter_mut()
                .filter(|row| row.get("user_id") == Some(&user_id))
            {
                Self::patch_non_null(row, "student_code", params.get("p_student_code"));
                Self::patch_non_null(row, "major", params.get("p_major"));
                Self::patch_non_null(row, "semester", params.get("p_semester"));
            }
        }
        Ok(Value::Null)
    }

    fn rpc_update_professor(&self, params: &Value) -> Result<Value, BackendError> {
        let user_id = params.get("p_user_id").cloned().unwrap_or(Value::Null);
        let mut tables = self.tables.write().unwrap();

        if let Some(users) = tables.get_mut("users_app") {
            for row in users.iter_mut().filter(|row| row.get("id") == Some(&user_id)) {
                Self::patch_non_null(row, "email", params.get("p_email"));
                Self::patch_non_null(row, "full_name", params.get("p_full_name"));
                Self::patch_non_null(row, "password", params.get("p_password"));
            }
        }
        if let Some(professors) = tables.get_mut("professors") {
            for row in professors
                .iter_mut()
                .filter(|row| row.get("user_id") == Some(&user_id))
            {
                Self::patch_non_null(row, "department", params.get("p_department"));
                Self::patch_non_null(row, "academic_title", params.get("p_academic_title"));
            }
        }
        Ok(Value::Null)
    }

    fn rpc_courses_with_counts(&self) -> Result<Value, BackendError> {
        let courses = self.rows("courses");
        let enrollments = self.rows("enrollments");
        let professors = self.rows("professors");
        let users = self.rows("users_app");

        let rows: Vec<Value> = courses
            .iter()
            .map(|course| {
                let course_id = course.get("id").cloned().unwrap_or(Value::Null);
                let students_count = enrollments
                    .iter()
                    .filter(|e| e.get("course_id") == Some(&course_id))
                    .count();

                let professor_user = course
                    .get("professor_id")
                    .filter(|id| !id.is_null())
                    .and_then(|professor_id| {
                        professors
                            .iter()
                            .find(|p| p.get("id") == Some(professor_id))
                    })
                    .and_then(|professor| professor.get("user_id"))
                    .and_then(|user_id| {
                        users.iter().find(|u| u.get("id") == Some(user_id))
                    });

                let mut row = Map::new();
                row.insert("course_id".to_string(), course_id);
                row.insert(
                    "name".to_string(),
                    course.get("name").cloned().unwrap_or(Value::Null),
                );
                row.insert(
                    "credits".to_string(),
                    course.get("credits").cloned().unwrap_or(Value::Null),
                );
                row.insert(
                    "professor_name".to_string(),
                    professor_user
                        .and_then(|u| u.get("full_name").cloned())
                        .unwrap_or(Value::Null),
                );
                row.insert(
                    "professor_email".to_string(),
                    professor_user
                        .and_then(|u| u.get("email").cloned())
                        .unwrap_or(Value::Null),
                );
                row.insert("students_count".to_string(), json!(students_count));
                Value::Object(row)
            })
            .collect();

        Ok(Value::Array(rows))
    }
}

#[async_trait]
impl Transport for MockBackend {
    async fn execute(&self, request: ApiRequest) -> Result<Value, BackendError> {
        if let Some(message) = self.fail_next.lock().unwrap().take() {
            return Err(BackendError::api(message, None));
        }
        self.calls.fetch_add(1, AtomicOrdering::SeqCst);

        if let Some(function) = request.path.strip_prefix("rpc/") {
            let params = request.body.clone().unwrap_or(Value::Null);
            return self.handle_rpc(function, &params);
        }

        match request.method {
            ApiMethod::Get => self.handle_get(&request),
            ApiMethod::Post => self.handle_insert(&request),
            ApiMethod::Patch => self.handle_update(&request),
            ApiMethod::Delete => self.handle_delete(&request),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_applies_filters_and_order() {
        let mock = MockBackend::new();
        mock.insert_row("courses", json!({"name": "B", "created_at": "2024-01-02"}));
        mock.insert_row("courses", json!({"name": "A", "created_at": "2024-01-01"}));

        let request = ApiRequest::new(ApiMethod::Get, "courses")
            .with_query("select", "*")
            .with_query("order", "created_at.desc");
        let rows = mock.execute(request).await.unwrap();
        let rows = rows.as_array().unwrap();
        assert_eq!(rows[0]["name"], "B");
        assert_eq!(rows[1]["name"], "A");
    }

    #[tokio::test]
    async fn duplicate_enrollment_is_rejected() {
        let mock = MockBackend::new();
        let body = json!({"student_id": "s1", "course_id": "c1"});
        let request = ApiRequest::new(ApiMethod::Post, "enrollments").with_body(body.clone());
        mock.execute(request.clone()).await.unwrap();

        let err = mock.execute(request).await.unwrap_err();
        match err {
            BackendError::Api { code, .. } => assert_eq!(code.as_deref(), Some("23505")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn injected_failure_fires_once() {
        let mock = MockBackend::new();
        mock.fail_next("DB down");

        let request = ApiRequest::new(ApiMethod::Get, "courses").with_query("select", "*");
        let err = mock.execute(request.clone()).await.unwrap_err();
        assert_eq!(err.to_string(), "DB down");

        mock.execute(request).await.unwrap();
    }
}
