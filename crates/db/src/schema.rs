use eyre::Result;
use sqlx::{Executor, Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Accounts for clients, trainers and admins
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            email VARCHAR(255) NOT NULL UNIQUE,
            password_hash VARCHAR(255) NOT NULL,
            first_name VARCHAR(255) NOT NULL,
            last_name VARCHAR(255) NOT NULL,
            role VARCHAR(16) NOT NULL DEFAULT 'USER',
            specialization VARCHAR(255) NULL,
            description TEXT NULL,
            price_per_session DOUBLE PRECISION NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_role CHECK (role IN ('USER', 'TRAINER', 'ADMIN'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Group classes
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS training_sessions (
            id SERIAL PRIMARY KEY,
            trainer_id INTEGER NOT NULL REFERENCES users(id),
            title VARCHAR(255) NOT NULL,
            date DATE NOT NULL,
            start_time VARCHAR(5) NOT NULL,
            end_time VARCHAR(5) NOT NULL,
            max_participants INTEGER NOT NULL,
            is_recurring BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_session_range CHECK (end_time > start_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // One-on-one bookings, implicitly one hour long
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS personal_trainings (
            id SERIAL PRIMARY KEY,
            trainer_id INTEGER NOT NULL REFERENCES users(id),
            client_id INTEGER NOT NULL REFERENCES users(id),
            date DATE NOT NULL,
            time VARCHAR(5) NOT NULL,
            status VARCHAR(16) NOT NULL DEFAULT 'PENDING',
            message TEXT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_status CHECK (status IN ('PENDING', 'CONFIRMED', 'CANCELLED', 'REJECTED'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes; several statements, so this goes through the simple query protocol
    pool.execute(
        r#"
        CREATE INDEX IF NOT EXISTS idx_users_role ON users(role);
        CREATE INDEX IF NOT EXISTS idx_training_sessions_trainer_date ON training_sessions(trainer_id, date);
        CREATE INDEX IF NOT EXISTS idx_personal_trainings_trainer_date ON personal_trainings(trainer_id, date);
        CREATE INDEX IF NOT EXISTS idx_personal_trainings_client_id ON personal_trainings(client_id);
        "#,
    )
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
