use crate::models::{DbUser, NewUser};
use chrono::Utc;
use eyre::Result;
use gymflow_core::models::user::Role;
use sqlx::{Pool, Postgres};

pub async fn create_user(pool: &Pool<Postgres>, user: &NewUser) -> Result<DbUser> {
    let now = Utc::now();

    let created = sqlx::query_as::<_, DbUser>(
        r#"
        INSERT INTO users (email, password_hash, first_name, last_name, role,
                           specialization, description, price_per_session, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id, email, first_name, last_name, role,
                  specialization, description, price_per_session, created_at
        "#,
    )
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(user.role.as_str())
    .bind(&user.specialization)
    .bind(&user.description)
    .bind(user.price_per_session)
    .bind(now)
    .fetch_one(pool)
    .await?;

    tracing::debug!("User created: id={}, role={}", created.id, created.role);
    Ok(created)
}

pub async fn find_trainer_by_id(pool: &Pool<Postgres>, id: i32) -> Result<Option<DbUser>> {
    let trainer = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, email, first_name, last_name, role,
               specialization, description, price_per_session, created_at
        FROM users
        WHERE id = $1 AND role = $2
        "#,
    )
    .bind(id)
    .bind(Role::Trainer.as_str())
    .fetch_optional(pool)
    .await?;

    Ok(trainer)
}

pub async fn list_trainers(pool: &Pool<Postgres>) -> Result<Vec<DbUser>> {
    let trainers = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, email, first_name, last_name, role,
               specialization, description, price_per_session, created_at
        FROM users
        WHERE role = $1
        ORDER BY id ASC
        "#,
    )
    .bind(Role::Trainer.as_str())
    .fetch_all(pool)
    .await?;

    Ok(trainers)
}
