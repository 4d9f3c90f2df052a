use crate::models::DbInstructor;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres, types::Json};
use swimsync_core::models::{instructor::NewInstructor, swimming::SwimStyle};
use uuid::Uuid;

pub async fn create_instructor(
    pool: &Pool<Postgres>,
    instructor: &NewInstructor,
) -> Result<DbInstructor> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating instructor: id={}, name={}", id, instructor.name);

    let row = sqlx::query_as::<_, DbInstructor>(
        r#"
        INSERT INTO instructors (id, name, specialties, availability, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, specialties, availability, created_at
        "#,
    )
    .bind(id)
    .bind(&instructor.name)
    .bind(Json(&instructor.specialties))
    .bind(Json(&instructor.availability))
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn get_all_instructors(pool: &Pool<Postgres>) -> Result<Vec<DbInstructor>> {
    let rows = sqlx::query_as::<_, DbInstructor>(
        r#"
        SELECT id, name, specialties, availability, created_at
        FROM instructors
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn get_instructor_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbInstructor>> {
    tracing::debug!("Getting instructor by id: {}", id);

    let row = sqlx::query_as::<_, DbInstructor>(
        r#"
        SELECT id, name, specialties, availability, created_at
        FROM instructors
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Instructors whose specialty list contains every entry of `specialties`.
pub async fn get_instructors_by_specialties(
    pool: &Pool<Postgres>,
    specialties: &[SwimStyle],
) -> Result<Vec<DbInstructor>> {
    let rows = sqlx::query_as::<_, DbInstructor>(
        r#"
        SELECT id, name, specialties, availability, created_at
        FROM instructors
        WHERE specialties @> $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(Json(specialties))
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn update_instructor(
    pool: &Pool<Postgres>,
    id: Uuid,
    instructor: &NewInstructor,
) -> Result<Option<DbInstructor>> {
    let row = sqlx::query_as::<_, DbInstructor>(
        r#"
        UPDATE instructors
        SET name = $2, specialties = $3, availability = $4
        WHERE id = $1
        RETURNING id, name, specialties, availability, created_at
        "#,
    )
    .bind(id)
    .bind(&instructor.name)
    .bind(Json(&instructor.specialties))
    .bind(Json(&instructor.availability))
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn delete_instructor(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM instructors WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_all_instructors(pool: &Pool<Postgres>) -> Result<bool> {
    let result = sqlx::query("DELETE FROM instructors").execute(pool).await?;

    Ok(result.rows_affected() > 0)
}
