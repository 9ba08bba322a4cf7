use super::*;
use crate::server::{model::task::SaveTaskParams, service::task::TaskService};
use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, factory};

fn task_params(trip_id: i32, assignee_id: Option<i32>) -> SaveTaskParams {
    SaveTaskParams {
        trip_id,
        title: "Book flights".to_string(),
        description: None,
        assignee_id,
        due_date: None,
        completed: false,
    }
}

/// Tests that tasks can only be assigned to participants.
///
/// Expected: Ok for a member, Err(BadRequest) for an outsider
#[tokio::test]
async fn assignee_must_be_participant() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let member = factory::helpers::create_member(db, trip.id).await?;
    let outsider = factory::create_user(db).await?;
    let service = TaskService::new(db);

    let task = service.create(task_params(trip.id, Some(member.id))).await?;
    assert_eq!(task.assignee_id, Some(member.id));

    let result = service.create(task_params(trip.id, Some(outsider.id))).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests list ordering: open tasks first, then by due date with undated last.
///
/// Expected: Ok with tasks in the documented order
#[tokio::test]
async fn lists_open_tasks_by_due_date() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, trip) = factory::helpers::create_trip_with_owner(db).await?;

    let undated = factory::create_task(db, trip.id).await?;
    let later = factory::task::TaskFactory::new(db, trip.id)
        .due_date(NaiveDate::from_ymd_opt(2026, 7, 10))
        .build()
        .await?;
    let done = factory::task::TaskFactory::new(db, trip.id)
        .due_date(NaiveDate::from_ymd_opt(2026, 6, 1))
        .completed(true)
        .build()
        .await?;
    let sooner = factory::task::TaskFactory::new(db, trip.id)
        .due_date(NaiveDate::from_ymd_opt(2026, 7, 1))
        .build()
        .await?;

    let tasks = TaskService::new(db).list(trip.id).await?;

    let ids: Vec<i32> = tasks.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![sooner.id, later.id, undated.id, done.id]);

    Ok(())
}

/// Tests toggling completion through an update.
///
/// Expected: Ok with completed set
#[tokio::test]
async fn update_marks_task_completed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let task = factory::create_task(db, trip.id).await?;

    let mut params = task_params(trip.id, None);
    params.completed = true;
    let updated = TaskService::new(db).update(task.id, params).await?;

    assert!(updated.completed);
    assert_eq!(updated.title, "Book flights");

    Ok(())
}
