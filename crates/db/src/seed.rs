//! Demo data: three trainers, each leading one weekly group class for the
//! next eight weeks.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher,
};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use eyre::{eyre, Result};
use gymflow_core::{models::user::Role, wall_clock::WallClock};
use tracing::info;

use crate::{
    models::{NewTrainingSession, NewUser},
    store::BookingStore,
};

/// Weeks of group classes created for each recurring slot.
pub const RECURRING_WEEKS: i64 = 8;

const DEMO_PASSWORD: &str = "trainerPassword123";

struct DemoTrainer {
    email: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    class_title: &'static str,
    weekday: Weekday,
    start: (u32, u32),
    end: (u32, u32),
    max_participants: i32,
}

const DEMO_TRAINERS: [DemoTrainer; 3] = [
    DemoTrainer {
        email: "adam.kowalski@gym.com",
        first_name: "Adam",
        last_name: "Kowalski",
        class_title: "Strength Training",
        weekday: Weekday::Mon,
        start: (7, 0),
        end: (8, 30),
        max_participants: 15,
    },
    DemoTrainer {
        email: "marek.nowak@gym.com",
        first_name: "Marek",
        last_name: "Nowak",
        class_title: "CrossFit",
        weekday: Weekday::Wed,
        start: (12, 0),
        end: (13, 30),
        max_participants: 12,
    },
    DemoTrainer {
        email: "piotr.wisniewski@gym.com",
        first_name: "Piotr",
        last_name: "Wiśniewski",
        class_title: "HIIT",
        weekday: Weekday::Fri,
        start: (20, 0),
        end: (21, 30),
        max_participants: 20,
    },
];

/// Hashes a password with Argon2 and a fresh random salt, in PHC string format.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// First date on or after `from` that falls on `weekday`.
pub fn next_weekday(from: NaiveDate, weekday: Weekday) -> NaiveDate {
    let ahead = (7 + weekday.num_days_from_monday() as i64
        - from.weekday().num_days_from_monday() as i64)
        % 7;
    from + Duration::days(ahead)
}

fn clock((hours, minutes): (u32, u32)) -> Result<WallClock> {
    WallClock::from_hm(hours, minutes).ok_or_else(|| eyre!("Invalid demo time {}:{}", hours, minutes))
}

/// Inserts the demo trainers and their weekly classes starting from `today`.
///
/// Trainers whose email is already taken are skipped together with their
/// classes, so running the seed again is a no-op. Returns the number of group
/// sessions created.
pub async fn seed_demo_data(store: &dyn BookingStore, today: NaiveDate) -> Result<usize> {
    let existing: Vec<String> = store
        .list_trainers()
        .await?
        .into_iter()
        .map(|trainer| trainer.email)
        .collect();
    let password_hash = hash_password(DEMO_PASSWORD)?;
    let mut created_sessions = 0;

    for demo in &DEMO_TRAINERS {
        if existing.iter().any(|email| email == demo.email) {
            info!("Trainer {} already present, skipping", demo.email);
            continue;
        }

        let trainer = store
            .create_user(NewUser {
                email: demo.email.to_string(),
                password_hash: password_hash.clone(),
                first_name: demo.first_name.to_string(),
                last_name: demo.last_name.to_string(),
                role: Role::Trainer,
                specialization: Some(demo.class_title.to_string()),
                description: None,
                price_per_session: None,
            })
            .await?;
        info!("Seeded trainer {} {} (id={})", trainer.first_name, trainer.last_name, trainer.id);

        let first_date = next_weekday(today, demo.weekday);
        for week in 0..RECURRING_WEEKS {
            store
                .create_training_session(NewTrainingSession {
                    trainer_id: trainer.id,
                    title: demo.class_title.to_string(),
                    date: first_date + Duration::weeks(week),
                    start_time: clock(demo.start)?,
                    end_time: clock(demo.end)?,
                    max_participants: demo.max_participants,
                    is_recurring: true,
                })
                .await?;
            created_sessions += 1;
        }
    }

    Ok(created_sessions)
}
