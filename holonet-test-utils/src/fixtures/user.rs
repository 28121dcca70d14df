use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_PASSWORD, error::TestError, TestContext};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert an active user with the email `user{number}@example.com`
    pub async fn insert_mock_user(&self, number: i32) -> Result<entity::user::Model, TestError> {
        self.insert_user(&format!("user{}@example.com", number), true)
            .await
    }

    pub async fn insert_user(
        &self,
        email: &str,
        is_active: bool,
    ) -> Result<entity::user::Model, TestError> {
        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            password: ActiveValue::Set(TEST_PASSWORD.to_string()),
            is_active: ActiveValue::Set(is_active),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
