pub static TEST_DATABASE_URL: &str = "sqlite::memory:";
pub static TEST_PASSWORD: &str = "password";
