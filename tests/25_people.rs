mod common;

use anyhow::Result;
use serde_json::json;
use uniadmin_rust::controllers::{ProfessorController, StudentController};
use uuid::Uuid;

fn student_input() -> serde_json::Value {
    json!({
        "email": "ana@uni.edu",
        "full_name": "Ana Pérez",
        "password": "secreto",
        "student_code": "S-001",
        "major": "Matemáticas",
        "semester": 3,
    })
}

#[tokio::test]
async fn create_student_creates_account_and_row_atomically() -> Result<()> {
    let ctx = common::context();
    let controller = StudentController::new(ctx.backend);

    controller.create(&student_input()).await?;

    assert_eq!(ctx.mock.row_count("users_app"), 1);
    assert_eq!(ctx.mock.row_count("students"), 1);

    let students = controller.list().await?;
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].student_code, "S-001");
    assert_eq!(students[0].semester, Some(3));
    Ok(())
}

#[tokio::test]
async fn invalid_student_input_issues_no_remote_call() {
    let ctx = common::context();
    let controller = StudentController::new(ctx.backend);

    let mut input = student_input();
    input["password"] = json!("abc");
    let err = controller.create(&input).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "La contraseña debe tener al menos 6 caracteres"
    );
    assert_eq!(ctx.mock.calls(), 0);
}

#[tokio::test]
async fn partial_student_update_leaves_other_fields_unchanged() -> Result<()> {
    let ctx = common::context();
    let controller = StudentController::new(ctx.backend.clone());

    controller.create(&student_input()).await?;
    let students = controller.list().await?;
    let user_id = students[0].user_id;

    controller.update(user_id, &json!({"major": "Física"})).await?;

    let students = controller.list().await?;
    assert_eq!(students[0].major, "Física");
    // Absent fields went to the procedure as null, meaning "no change".
    assert_eq!(students[0].student_code, "S-001");
    assert_eq!(students[0].semester, Some(3));

    let users = ctx.mock.rows("users_app");
    assert_eq!(users[0]["email"], "ana@uni.edu");
    Ok(())
}

#[tokio::test]
async fn empty_student_patch_is_rejected() {
    let ctx = common::context();
    let controller = StudentController::new(ctx.backend);

    let err = controller
        .update(Uuid::new_v4(), &json!({}))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "No hay cambios para actualizar");
    assert_eq!(ctx.mock.calls(), 0);
}

#[tokio::test]
async fn removing_a_student_keeps_the_user_account() -> Result<()> {
    let ctx = common::context();
    let controller = StudentController::new(ctx.backend);

    controller.create(&student_input()).await?;
    let id = controller.list().await?[0].id;

    controller.remove(id).await?;

    assert_eq!(ctx.mock.row_count("students"), 0);
    assert_eq!(ctx.mock.row_count("users_app"), 1);
    Ok(())
}

#[tokio::test]
async fn find_student_by_user_id_distinguishes_absence_from_error() -> Result<()> {
    let ctx = common::context();
    let controller = StudentController::new(ctx.backend);

    assert!(controller.find_by_user_id(Uuid::new_v4()).await?.is_none());

    controller.create(&student_input()).await?;
    let user_id = controller.list().await?[0].user_id;
    let found = controller.find_by_user_id(user_id).await?;
    assert_eq!(found.unwrap().student_code, "S-001");
    Ok(())
}

#[tokio::test]
async fn professor_create_and_update_follow_the_same_procedures() -> Result<()> {
    let ctx = common::context();
    let controller = ProfessorController::new(ctx.backend);

    controller
        .create(&json!({
            "email": "luis@uni.edu",
            "full_name": "Luis Soto",
            "password": "secreto",
            "department": "Ciencias",
            "academic_title": "Doctor",
        }))
        .await?;

    let professors = controller.list().await?;
    assert_eq!(professors.len(), 1);
    assert_eq!(professors[0].department, "Ciencias");

    let user_id = professors[0].user_id;
    controller
        .update(user_id, &json!({"academic_title": "Doctora"}))
        .await?;

    let professors = controller.list().await?;
    assert_eq!(professors[0].academic_title, "Doctora");
    assert_eq!(professors[0].department, "Ciencias");
    Ok(())
}
