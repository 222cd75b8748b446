use std::sync::Arc;

use serde_json::Value;

use super::error::BackendError;
use super::transport::{ApiMethod, ApiRequest, Transport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Entry point for table-scoped operations, handed out by `Backend::from`.
pub struct TableHandle {
    transport: Arc<dyn Transport>,
    table: String,
}

impl TableHandle {
    pub(super) fn new(transport: Arc<dyn Transport>, table: &str) -> Self {
        Self {
            transport,
            table: table.to_string(),
        }
    }

    /// Read rows. The column list may carry nested relation expansion,
    /// e.g. `"id,name, professor:professors(id, user:users_app(id,full_name))"`.
    pub fn select(self, columns: &str) -> TableQuery {
        TableQuery {
            transport: self.transport,
            table: self.table,
            columns: columns.to_string(),
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    /// Insert one row, returning its representation.
    pub fn insert(self, row: Value) -> InsertBuilder {
        InsertBuilder {
            transport: self.transport,
            table: self.table,
            row,
            returning: None,
        }
    }

    /// Partial update of every row matching the filters added with `eq`.
    pub fn update(self, patch: Value) -> UpdateBuilder {
        UpdateBuilder {
            transport: self.transport,
            table: self.table,
            patch,
            filters: Vec::new(),
            returning: None,
        }
    }

    /// Delete every row matching the filters added with `eq`.
    pub fn delete(self) -> DeleteBuilder {
        DeleteBuilder {
            transport: self.transport,
            table: self.table,
            filters: Vec::new(),
        }
    }
}

fn eq_param(value: impl ToString) -> String {
    format!("eq.{}", value.to_string())
}

/// A pending read with equality filters, ordering and one of three result
/// shapes: all rows, exactly one row, or at most one row.
pub struct TableQuery {
    transport: Arc<dyn Transport>,
    table: String,
    columns: String,
    filters: Vec<(String, String)>,
    order: Option<(String, SortDirection)>,
    limit: Option<i32>,
}

impl TableQuery {
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters.push((column.to_string(), eq_param(value)));
        self
    }

    pub fn order(mut self, column: &str, direction: SortDirection) -> Self {
        self.order = Some((column.to_string(), direction));
        self
    }

    pub fn limit(mut self, limit: i32) -> Self {
        self.limit = Some(limit);
        self
    }

    fn into_request(self) -> (Arc<dyn Transport>, ApiRequest) {
        let mut request = ApiRequest::new(ApiMethod::Get, self.table);
        request = request.with_query("select", self.columns);
        for (column, value) in self.filters {
            request = request.with_query(column, value);
        }
        if let Some((column, direction)) = self.order {
            request = request.with_query("order", format!("{}.{}", column, direction.as_param()));
        }
        if let Some(limit) = self.limit {
            request = request.with_query("limit", limit.to_string());
        }
        (self.transport, request)
    }

    /// All matching rows.
    pub async fn execute(self) -> Result<Vec<Value>, BackendError> {
        let (transport, request) = self.into_request();
        rows_from(transport.execute(request).await?)
    }

    /// Exactly one row; errors if none or multiple.
    pub async fn single(self) -> Result<Value, BackendError> {
        let mut rows = self.execute().await?;
        match rows.len() {
            0 => Err(BackendError::RowNotFound),
            1 => Ok(rows.remove(0)),
            n => Err(BackendError::MultipleRows(n)),
        }
    }

    /// At most one row; `None` if absent, errors if multiple.
    pub async fn maybe_single(self) -> Result<Option<Value>, BackendError> {
        let mut rows = self.execute().await?;
        match rows.len() {
            0 => Ok(None),
            1 => Ok(Some(rows.remove(0))),
            n => Err(BackendError::MultipleRows(n)),
        }
    }
}

pub struct InsertBuilder {
    transport: Arc<dyn Transport>,
    table: String,
    row: Value,
    returning: Option<String>,
}

impl InsertBuilder {
    /// Project the returned representation to the named columns.
    pub fn select(mut self, columns: &str) -> Self {
        self.returning = Some(columns.to_string());
        self
    }

    fn into_request(self) -> (Arc<dyn Transport>, ApiRequest) {
        let mut request = ApiRequest::new(ApiMethod::Post, self.table).with_body(self.row);
        if let Some(columns) = self.returning {
            request = request.with_query("select", columns);
        }
        (self.transport, request)
    }

    pub async fn execute(self) -> Result<Vec<Value>, BackendError> {
        let (transport, request) = self.into_request();
        rows_from(transport.execute(request).await?)
    }

    /// The inserted row; errors if the backend returned none or multiple.
    pub async fn single(self) -> Result<Value, BackendError> {
        let mut rows = self.execute().await?;
        match rows.len() {
            0 => Err(BackendError::RowNotFound),
            1 => Ok(rows.remove(0)),
            n => Err(BackendError::MultipleRows(n)),
        }
    }
}

pub struct UpdateBuilder {
    transport: Arc<dyn Transport>,
    table: String,
    patch: Value,
    filters: Vec<(String, String)>,
    returning: Option<String>,
}

impl UpdateBuilder {
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters.push((column.to_string(), eq_param(value)));
        self
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.returning = Some(columns.to_string());
        self
    }

    fn into_request(self) -> (Arc<dyn Transport>, ApiRequest) {
        let mut request = ApiRequest::new(ApiMethod::Patch, self.table).with_body(self.patch);
        for (column, value) in self.filters {
            request = request.with_query(column, value);
        }
        if let Some(columns) = self.returning {
            request = request.with_query("select", columns);
        }
        (self.transport, request)
    }

    pub async fn execute(self) -> Result<Vec<Value>, BackendError> {
        let (transport, request) = self.into_request();
        rows_from(transport.execute(request).await?)
    }

    /// The updated row; errors if the filters matched none or multiple.
    pub async fn single(self) -> Result<Value, BackendError> {
        let mut rows = self.execute().await?;
        match rows.len() {
            0 => Err(BackendError::RowNotFound),
            1 => Ok(rows.remove(0)),
            n => Err(BackendError::MultipleRows(n)),
        }
    }
}

pub struct DeleteBuilder {
    transport: Arc<dyn Transport>,
    table: String,
    filters: Vec<(String, String)>,
}

impl DeleteBuilder {
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters.push((column.to_string(), eq_param(value)));
        self
    }

    pub async fn execute(self) -> Result<(), BackendError> {
        let mut request = ApiRequest::new(ApiMethod::Delete, self.table);
        for (column, value) in self.filters {
            request = request.with_query(column, value);
        }
        self.transport.execute(request).await?;
        Ok(())
    }
}

fn rows_from(payload: Value) -> Result<Vec<Value>, BackendError> {
    match payload {
        Value::Array(rows) => Ok(rows),
        Value::Null => Ok(Vec::new()),
        other => Err(BackendError::Decode(format!(
            "expected a row array, got: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;

    /// Records the last request and answers with a fixed payload.
    struct CaptureTransport {
        last: Mutex<Option<ApiRequest>>,
        reply: Value,
    }

    impl CaptureTransport {
        fn replying(reply: Value) -> Arc<Self> {
            Arc::new(Self {
                last: Mutex::new(None),
                reply,
            })
        }

        fn last_request(&self) -> ApiRequest {
            self.last.lock().unwrap().clone().expect("no request sent")
        }
    }

    #[async_trait]
    impl Transport for CaptureTransport {
        async fn execute(&self, request: ApiRequest) -> Result<Value, BackendError> {
            *self.last.lock().unwrap() = Some(request);
            Ok(self.reply.clone())
        }
    }

    fn handle(transport: &Arc<CaptureTransport>, table: &str) -> TableHandle {
        TableHandle::new(Arc::clone(transport) as Arc<dyn Transport>, table)
    }

    #[tokio::test]
    async fn select_builds_eq_and_order_params() {
        let transport = CaptureTransport::replying(json!([]));
        handle(&transport, "courses")
            .select("id,name")
            .eq("professor_id", "abc")
            .order("created_at", SortDirection::Desc)
            .execute()
            .await
            .unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, ApiMethod::Get);
        assert_eq!(request.path, "courses");
        assert!(request
            .query
            .contains(&("select".to_string(), "id,name".to_string())));
        assert!(request
            .query
            .contains(&("professor_id".to_string(), "eq.abc".to_string())));
        assert!(request
            .query
            .contains(&("order".to_string(), "created_at.desc".to_string())));
    }

    #[tokio::test]
    async fn single_rejects_multiple_rows() {
        let transport = CaptureTransport::replying(json!([{"id": 1}, {"id": 2}]));
        let err = handle(&transport, "grades")
            .select("id")
            .single()
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::MultipleRows(2)));
    }

    #[tokio::test]
    async fn maybe_single_maps_absence_to_none() {
        let transport = CaptureTransport::replying(json!([]));
        let row = handle(&transport, "grades")
            .select("id")
            .maybe_single()
            .await
            .unwrap();
        assert!(row.is_none());
    }

    #[tokio::test]
    async fn insert_sends_body_and_returning_columns() {
        let transport = CaptureTransport::replying(json!([{"id": "x"}]));
        handle(&transport, "enrollments")
            .insert(json!({"student_id": "s", "course_id": "c"}))
            .select("id")
            .single()
            .await
            .unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, ApiMethod::Post);
        assert_eq!(request.body.unwrap()["student_id"], "s");
        assert!(request
            .query
            .contains(&("select".to_string(), "id".to_string())));
    }
}
