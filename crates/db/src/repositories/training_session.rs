use crate::models::{DbTrainingSession, NewTrainingSession};
use chrono::{NaiveDate, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn create_training_session(
    pool: &Pool<Postgres>,
    session: &NewTrainingSession,
) -> Result<DbTrainingSession> {
    let now = Utc::now();

    let created = sqlx::query_as::<_, DbTrainingSession>(
        r#"
        INSERT INTO training_sessions (trainer_id, title, date, start_time, end_time,
                                       max_participants, is_recurring, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, trainer_id, title, date, start_time, end_time,
                  max_participants, is_recurring, created_at
        "#,
    )
    .bind(session.trainer_id)
    .bind(&session.title)
    .bind(session.date)
    .bind(session.start_time.to_string())
    .bind(session.end_time.to_string())
    .bind(session.max_participants)
    .bind(session.is_recurring)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(created)
}

pub async fn get_sessions_for_trainer_on(
    pool: &Pool<Postgres>,
    trainer_id: i32,
    date: NaiveDate,
) -> Result<Vec<DbTrainingSession>> {
    let sessions = sqlx::query_as::<_, DbTrainingSession>(
        r#"
        SELECT id, trainer_id, title, date, start_time, end_time,
               max_participants, is_recurring, created_at
        FROM training_sessions
        WHERE trainer_id = $1 AND date = $2
        ORDER BY start_time ASC
        "#,
    )
    .bind(trainer_id)
    .bind(date)
    .fetch_all(pool)
    .await?;

    tracing::debug!(
        "Loaded {} group sessions for trainer {} on {}",
        sessions.len(), trainer_id, date
    );
    Ok(sessions)
}
