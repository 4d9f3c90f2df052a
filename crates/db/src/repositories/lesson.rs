use crate::models::DbLesson;
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres, types::Json};
use swimsync_core::models::lesson::NewLesson;
use uuid::Uuid;

const LESSON_COLUMNS: &str =
    "id, instructor_id, lesson_type, specialties, start_time, end_time, students, created_at";

pub async fn create_lesson(pool: &Pool<Postgres>, lesson: &NewLesson) -> Result<DbLesson> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating lesson: id={}, instructor={}, start={}, end={}",
        id, lesson.instructor_id, lesson.window.start_time, lesson.window.end_time
    );

    let row = sqlx::query_as::<_, DbLesson>(&format!(
        r#"
        INSERT INTO lessons (id, instructor_id, lesson_type, specialties, start_time, end_time, students, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING {LESSON_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(lesson.instructor_id)
    .bind(lesson.lesson_type.as_str())
    .bind(Json(&lesson.specialties))
    .bind(lesson.window.start_time)
    .bind(lesson.window.end_time)
    .bind(Json(&lesson.students))
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn get_lesson_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbLesson>> {
    let row = sqlx::query_as::<_, DbLesson>(&format!(
        "SELECT {LESSON_COLUMNS} FROM lessons WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn get_lessons_by_instructor_id(
    pool: &Pool<Postgres>,
    instructor_id: Uuid,
) -> Result<Vec<DbLesson>> {
    let rows = sqlx::query_as::<_, DbLesson>(&format!(
        r#"
        SELECT {LESSON_COLUMNS}
        FROM lessons
        WHERE instructor_id = $1
        ORDER BY start_time ASC
        "#
    ))
    .bind(instructor_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn get_lessons_in_range(
    pool: &Pool<Postgres>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<DbLesson>> {
    let rows = sqlx::query_as::<_, DbLesson>(&format!(
        r#"
        SELECT {LESSON_COLUMNS}
        FROM lessons
        WHERE start_time >= $1 AND start_time <= $2
        ORDER BY start_time ASC
        "#
    ))
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// First lesson of the instructor overlapping `[start, end)`, other than `exclude`.
pub async fn find_overlapping_lesson(
    pool: &Pool<Postgres>,
    instructor_id: Uuid,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    exclude: Option<Uuid>,
) -> Result<Option<Uuid>> {
    let id = sqlx::query_scalar::<_, Uuid>(
        r#"
        SELECT id
        FROM lessons
        WHERE instructor_id = $1
          AND start_time < $3
          AND end_time > $2
          AND ($4::uuid IS NULL OR id <> $4)
        ORDER BY start_time ASC
        LIMIT 1
        "#,
    )
    .bind(instructor_id)
    .bind(start)
    .bind(end)
    .bind(exclude)
    .fetch_optional(pool)
    .await?;

    Ok(id)
}

pub async fn update_lesson(
    pool: &Pool<Postgres>,
    id: Uuid,
    lesson: &NewLesson,
) -> Result<Option<DbLesson>> {
    let row = sqlx::query_as::<_, DbLesson>(&format!(
        r#"
        UPDATE lessons
        SET instructor_id = $2, lesson_type = $3, specialties = $4,
            start_time = $5, end_time = $6, students = $7
        WHERE id = $1
        RETURNING {LESSON_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(lesson.instructor_id)
    .bind(lesson.lesson_type.as_str())
    .bind(Json(&lesson.specialties))
    .bind(lesson.window.start_time)
    .bind(lesson.window.end_time)
    .bind(Json(&lesson.students))
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn delete_lesson(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM lessons WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_all_lessons(pool: &Pool<Postgres>) -> Result<bool> {
    let result = sqlx::query("DELETE FROM lessons").execute(pool).await?;

    Ok(result.rows_affected() > 0)
}
