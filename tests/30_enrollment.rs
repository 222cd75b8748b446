mod common;

use anyhow::Result;
use serde_json::json;
use uniadmin_rust::controllers::EnrollmentController;
use uuid::Uuid;

#[tokio::test]
async fn find_returns_none_before_and_some_after_enroll() -> Result<()> {
    let ctx = common::context();
    let controller = EnrollmentController::new(ctx.backend);

    let student_id = Uuid::new_v4();
    let course_id = Uuid::new_v4();

    // Absence is a regular outcome, not an error.
    assert!(controller.find(student_id, course_id).await?.is_none());

    let id = controller.enroll(student_id, course_id).await?;

    let found = controller.find(student_id, course_id).await?.unwrap();
    assert_eq!(found.id, id);
    assert_eq!(found.student_id, student_id);
    assert_eq!(found.course_id, course_id);
    Ok(())
}

#[tokio::test]
async fn duplicate_enrollment_surfaces_the_uniqueness_error() -> Result<()> {
    let ctx = common::context();
    let controller = EnrollmentController::new(ctx.backend);

    let student_id = Uuid::new_v4();
    let course_id = Uuid::new_v4();

    controller.enroll(student_id, course_id).await?;
    let err = controller.enroll(student_id, course_id).await.unwrap_err();
    assert!(err.to_string().contains("duplicate key value"));
    assert_eq!(ctx.mock.row_count("enrollments"), 1);
    Ok(())
}

#[tokio::test]
async fn unenroll_deletes_by_pair() -> Result<()> {
    let ctx = common::context();
    let controller = EnrollmentController::new(ctx.backend);

    let student_id = Uuid::new_v4();
    let course_id = Uuid::new_v4();
    let other_course = Uuid::new_v4();

    controller.enroll(student_id, course_id).await?;
    controller.enroll(student_id, other_course).await?;

    controller.unenroll(student_id, course_id).await?;

    assert!(controller.find(student_id, course_id).await?.is_none());
    assert!(controller.find(student_id, other_course).await?.is_some());
    Ok(())
}

#[tokio::test]
async fn roster_is_ordered_oldest_enrollment_first() -> Result<()> {
    let ctx = common::context();
    let course_id = Uuid::new_v4();

    ctx.mock.insert_row(
        "enrollments",
        json!({
            "student_id": Uuid::new_v4(),
            "course_id": course_id,
            "created_at": "2024-06-01T00:00:00Z",
        }),
    );
    ctx.mock.insert_row(
        "enrollments",
        json!({
            "student_id": Uuid::new_v4(),
            "course_id": course_id,
            "created_at": "2024-01-01T00:00:00Z",
        }),
    );
    // A different course's enrollment must not show up.
    ctx.mock.insert_row(
        "enrollments",
        json!({
            "student_id": Uuid::new_v4(),
            "course_id": Uuid::new_v4(),
            "created_at": "2023-01-01T00:00:00Z",
        }),
    );

    let roster = EnrollmentController::new(ctx.backend)
        .list_by_course(course_id)
        .await?;
    assert_eq!(roster.len(), 2);
    assert!(roster[0].created_at.unwrap() < roster[1].created_at.unwrap());
    Ok(())
}

#[tokio::test]
async fn backend_failure_propagates_verbatim() {
    let ctx = common::context();
    let controller = EnrollmentController::new(ctx.backend);

    ctx.mock.fail_next("DB down");
    let err = controller
        .enroll(Uuid::new_v4(), Uuid::new_v4())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "DB down");
}
