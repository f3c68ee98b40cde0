#![allow(dead_code)]

use std::sync::Arc;

use axum::http::{header::AUTHORIZATION, HeaderName, HeaderValue};
use axum_test::TestServer;
use chrono::NaiveDate;
use gymflow_api::{
    build_router,
    middleware::auth::{Claims, Jwt},
    ApiState,
};
use gymflow_core::models::user::Role;
use gymflow_db::{
    mock::InMemoryBookingStore,
    models::{DbTrainingSession, DbUser, NewTrainingSession, NewUser},
    BookingStore,
};

pub const TEST_SECRET: &str = "test-secret";

/// Far enough ahead that tokens never expire during a run.
const TOKEN_EXP: usize = 4_102_444_800;

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 5).unwrap()
}

pub fn new_user(email: &str, role: Role) -> NewUser {
    NewUser {
        email: email.to_string(),
        password_hash: "hash".to_string(),
        first_name: "Test".to_string(),
        last_name: role.as_str().to_string(),
        role,
        specialization: (role == Role::Trainer).then(|| "Strength".to_string()),
        description: None,
        price_per_session: (role == Role::Trainer).then_some(120.0),
    }
}

pub struct TestContext {
    pub store: Arc<InMemoryBookingStore>,
    pub jwt: Jwt,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            store: Arc::new(InMemoryBookingStore::new()),
            jwt: Jwt::new(TEST_SECRET),
        }
    }

    pub fn build_state(&self) -> Arc<ApiState> {
        let store: Arc<dyn BookingStore> = self.store.clone();
        Arc::new(ApiState::new(store, TEST_SECRET))
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(build_router(self.build_state())).unwrap()
    }

    pub async fn trainer(&self, email: &str) -> DbUser {
        self.store.create_user(new_user(email, Role::Trainer)).await.unwrap()
    }

    pub async fn client(&self, email: &str) -> DbUser {
        self.store.create_user(new_user(email, Role::User)).await.unwrap()
    }

    pub async fn group_session(&self, trainer_id: i32, start: &str, end: &str) -> DbTrainingSession {
        self.store
            .create_training_session(NewTrainingSession {
                trainer_id,
                title: "Group class".to_string(),
                date: day(),
                start_time: start.parse().unwrap(),
                end_time: end.parse().unwrap(),
                max_participants: 12,
                is_recurring: false,
            })
            .await
            .unwrap()
    }

    pub fn token_for(&self, user: &DbUser) -> String {
        let claims = Claims {
            id: user.id,
            email: user.email.clone(),
            role: user.role.parse().unwrap(),
            exp: TOKEN_EXP,
        };
        self.jwt.make_jwt(&claims).unwrap()
    }

    pub fn auth_header(&self, user: &DbUser) -> (HeaderName, HeaderValue) {
        let value = format!("Bearer {}", self.token_for(user));
        (AUTHORIZATION, HeaderValue::from_str(&value).unwrap())
    }
}
