use std::env;
use std::sync::LazyLock;

pub struct AppEnv {
  pub database_url: String,
}

impl AppEnv {
  fn new() -> Self {
    // DATABASE_URL wins when set; otherwise the URL is composed from the
    // discrete DB_USER / DB_PASS / DB_HOST deployment variables.
    let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
      let user = env::var("DB_USER").expect("DATABASE_URL or DB_USER must be set");
      let pass = env::var("DB_PASS").expect("DB_PASS must be set");
      let host = env::var("DB_HOST").expect("DB_HOST must be set");
      format!("postgresql://{user}:{pass}@{host}")
    });

    Self { database_url }
  }
}

pub static APP_ENV: LazyLock<AppEnv> = LazyLock::new(AppEnv::new);
