mod common;

use anyhow::Result;
use serde_json::json;
use uniadmin_rust::controllers::ReportController;
use uuid::Uuid;

#[tokio::test]
async fn empty_backend_yields_an_empty_report() -> Result<()> {
    let ctx = common::context();
    let rows = ReportController::new(ctx.backend).courses().await?;
    assert!(rows.is_empty());
    Ok(())
}

#[tokio::test]
async fn report_carries_counts_and_professor_identity() -> Result<()> {
    let ctx = common::context();

    let user_id = ctx
        .mock
        .seed_user("luis@uni.edu", "secreto", "Luis Soto", "profesor");
    let professor = ctx.mock.insert_row(
        "professors",
        json!({"user_id": user_id, "department": "Ciencias", "academic_title": "Doctor"}),
    );

    let algebra = ctx.mock.insert_row(
        "courses",
        json!({"name": "Álgebra", "credits": 4, "professor_id": professor["id"]}),
    );
    ctx.mock.insert_row(
        "courses",
        json!({"name": "Física", "credits": 3, "professor_id": null}),
    );

    ctx.mock.insert_row(
        "enrollments",
        json!({"student_id": Uuid::new_v4(), "course_id": algebra["id"]}),
    );
    ctx.mock.insert_row(
        "enrollments",
        json!({"student_id": Uuid::new_v4(), "course_id": algebra["id"]}),
    );

    let rows = ReportController::new(ctx.backend).courses().await?;
    assert_eq!(rows.len(), 2);

    let algebra_row = rows.iter().find(|row| row.name == "Álgebra").unwrap();
    assert_eq!(algebra_row.students_count, 2);
    assert_eq!(algebra_row.professor_name.as_deref(), Some("Luis Soto"));
    assert_eq!(algebra_row.professor_email.as_deref(), Some("luis@uni.edu"));

    let fisica_row = rows.iter().find(|row| row.name == "Física").unwrap();
    assert_eq!(fisica_row.students_count, 0);
    assert!(fisica_row.professor_name.is_none());
    Ok(())
}

#[tokio::test]
async fn report_failure_propagates_verbatim() {
    let ctx = common::context();
    ctx.mock.fail_next("DB down");
    let err = ReportController::new(ctx.backend)
        .courses()
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "DB down");
}
