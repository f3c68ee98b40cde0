use crate::models::{DbClientBooking, DbPersonalTraining, DbTrainerBooking, NewPersonalTraining};
use chrono::{NaiveDate, Utc};
use eyre::Result;
use gymflow_core::models::personal_training::BookingStatus;
use sqlx::{Pool, Postgres};

pub async fn create_personal_training(
    pool: &Pool<Postgres>,
    booking: &NewPersonalTraining,
) -> Result<DbPersonalTraining> {
    let now = Utc::now();

    let created = sqlx::query_as::<_, DbPersonalTraining>(
        r#"
        INSERT INTO personal_trainings (trainer_id, client_id, date, time, status, message, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, trainer_id, client_id, date, time, status, message, created_at
        "#,
    )
    .bind(booking.trainer_id)
    .bind(booking.client_id)
    .bind(booking.date)
    .bind(booking.time.to_string())
    .bind(booking.status.as_str())
    .bind(&booking.message)
    .bind(now)
    .fetch_one(pool)
    .await?;

    tracing::debug!(
        "Personal training created: id={}, trainer={}, client={}",
        created.id, created.trainer_id, created.client_id
    );
    Ok(created)
}

pub async fn get_bookings_for_trainer_on(
    pool: &Pool<Postgres>,
    trainer_id: i32,
    date: NaiveDate,
    statuses: &[BookingStatus],
) -> Result<Vec<DbPersonalTraining>> {
    let statuses: Vec<String> = statuses.iter().map(|status| status.as_str().to_string()).collect();

    let bookings = sqlx::query_as::<_, DbPersonalTraining>(
        r#"
        SELECT id, trainer_id, client_id, date, time, status, message, created_at
        FROM personal_trainings
        WHERE trainer_id = $1 AND date = $2 AND status = ANY($3)
        ORDER BY time ASC
        "#,
    )
    .bind(trainer_id)
    .bind(date)
    .bind(statuses)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

pub async fn get_personal_training_by_id(
    pool: &Pool<Postgres>,
    id: i32,
) -> Result<Option<DbPersonalTraining>> {
    let booking = sqlx::query_as::<_, DbPersonalTraining>(
        r#"
        SELECT id, trainer_id, client_id, date, time, status, message, created_at
        FROM personal_trainings
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(booking)
}

pub async fn update_personal_training_status(
    pool: &Pool<Postgres>,
    id: i32,
    status: BookingStatus,
) -> Result<DbPersonalTraining> {
    let updated = sqlx::query_as::<_, DbPersonalTraining>(
        r#"
        UPDATE personal_trainings
        SET status = $2
        WHERE id = $1
        RETURNING id, trainer_id, client_id, date, time, status, message, created_at
        "#,
    )
    .bind(id)
    .bind(status.as_str())
    .fetch_one(pool)
    .await?;

    Ok(updated)
}

pub async fn get_client_bookings(
    pool: &Pool<Postgres>,
    client_id: i32,
) -> Result<Vec<DbClientBooking>> {
    let bookings = sqlx::query_as::<_, DbClientBooking>(
        r#"
        SELECT p.id, p.trainer_id, p.client_id, p.date, p.time, p.status, p.message, p.created_at,
               t.first_name AS trainer_first_name,
               t.last_name AS trainer_last_name,
               t.price_per_session AS trainer_price_per_session
        FROM personal_trainings p
        JOIN users t ON t.id = p.trainer_id
        WHERE p.client_id = $1
        ORDER BY p.date ASC, p.time ASC
        "#,
    )
    .bind(client_id)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

pub async fn get_trainer_bookings(
    pool: &Pool<Postgres>,
    trainer_id: i32,
) -> Result<Vec<DbTrainerBooking>> {
    let bookings = sqlx::query_as::<_, DbTrainerBooking>(
        r#"
        SELECT p.id, p.trainer_id, p.client_id, p.date, p.time, p.status, p.message, p.created_at,
               c.first_name AS client_first_name,
               c.last_name AS client_last_name,
               c.email AS client_email
        FROM personal_trainings p
        JOIN users c ON c.id = p.client_id
        WHERE p.trainer_id = $1
        ORDER BY p.date ASC, p.time ASC
        "#,
    )
    .bind(trainer_id)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}
