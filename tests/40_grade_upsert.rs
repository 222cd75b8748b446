mod common;

use anyhow::Result;
use uniadmin_rust::controllers::GradeController;
use uuid::Uuid;

#[tokio::test]
async fn first_upsert_inserts_exactly_one_row() -> Result<()> {
    let ctx = common::context();
    let controller = GradeController::new(ctx.backend);
    let enrollment_id = Uuid::new_v4();

    controller.set(enrollment_id, 8.5, None).await?;

    assert_eq!(ctx.mock.row_count("grades"), 1);
    let rows = ctx.mock.rows("grades");
    assert_eq!(rows[0]["value"], 8.5);
    assert_eq!(rows[0]["enrollment_id"], enrollment_id.to_string());
    assert!(rows[0]["note"].is_null());
    Ok(())
}

#[tokio::test]
async fn second_upsert_updates_the_same_row_in_place() -> Result<()> {
    let ctx = common::context();
    let controller = GradeController::new(ctx.backend);
    let enrollment_id = Uuid::new_v4();

    controller.set(enrollment_id, 8.5, None).await?;
    let first_id = ctx.mock.rows("grades")[0]["id"].clone();

    controller
        .set(enrollment_id, 9.0, Some("mejoró".to_string()))
        .await?;

    // Row count unchanged, value replaced, same row id.
    assert_eq!(ctx.mock.row_count("grades"), 1);
    let rows = ctx.mock.rows("grades");
    assert_eq!(rows[0]["value"], 9.0);
    assert_eq!(rows[0]["note"], "mejoró");
    assert_eq!(rows[0]["id"], first_id);
    Ok(())
}

#[tokio::test]
async fn grades_for_other_enrollments_are_untouched() -> Result<()> {
    let ctx = common::context();
    let controller = GradeController::new(ctx.backend);

    let first = Uuid::new_v4();
    let second = Uuid::new_v4();

    controller.set(first, 7.0, None).await?;
    controller.set(second, 6.0, None).await?;
    controller.set(first, 7.5, None).await?;

    assert_eq!(ctx.mock.row_count("grades"), 2);
    let rows = ctx.mock.rows("grades");
    let second_row = rows
        .iter()
        .find(|row| row["enrollment_id"] == second.to_string())
        .unwrap();
    assert_eq!(second_row["value"], 6.0);
    Ok(())
}

#[tokio::test]
async fn lookup_failure_aborts_the_upsert() {
    let ctx = common::context();
    let controller = GradeController::new(ctx.backend);

    ctx.mock.fail_next("DB down");
    let err = controller.set(Uuid::new_v4(), 5.0, None).await.unwrap_err();
    assert_eq!(err.to_string(), "DB down");
    assert_eq!(ctx.mock.row_count("grades"), 0);
}
