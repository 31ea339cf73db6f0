use std::{panic, str::FromStr};

use futures::{Future, FutureExt};
use postgres::PostgresAdapter;
use rand::random;
use sqlx::{
    Connection, Executor, PgConnection,
    postgres::{PgConnectOptions, PgPoolOptions},
};

/// Connection string of a server where the tests may create databases.
static DATABASE_URL_ENV: &str = "TRAVESSIA_TEST_DATABASE_URL";

pub struct TestHelper {
    pub db: PostgresAdapter,
}

pub async fn test<T, Fut>(test: T)
where
    T: FnOnce(TestHelper) -> Fut + panic::UnwindSafe + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let url = std::env::var(DATABASE_URL_ENV)
        .unwrap_or_else(|_| panic!("{DATABASE_URL_ENV} must be set to run postgres tests"));
    let db_name = format!("travessia_test_{}", random::<u32>());

    let mut conn = PgConnection::connect(&url).await.unwrap();
    conn.execute(format!(r#"CREATE DATABASE "{db_name}""#).as_str())
        .await
        .unwrap();

    let opts = PgConnectOptions::from_str(&url).unwrap().database(&db_name);
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect_with(opts)
        .await
        .unwrap();

    let adapter = PostgresAdapter::from_pool(pool.clone());
    adapter.do_migrations().await.unwrap();

    let result = panic::AssertUnwindSafe(test(TestHelper { db: adapter }))
        .catch_unwind()
        .await;

    pool.close().await;
    conn.execute(format!(r#"DROP DATABASE IF EXISTS "{db_name}""#).as_str())
        .await
        .unwrap();

    if let Err(e) = result {
        panic::resume_unwind(e);
    }
}
