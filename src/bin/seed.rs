use shopping_assistant_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    seed::seed_if_empty,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let url = config
        .database_url
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is not set"))?;

    let orm = create_orm_conn(&url).await?;
    // Ensure the schema exists before inserting.
    run_migrations(&orm, "migrations").await?;

    let inserted = seed_if_empty(&orm).await?;
    if inserted == 0 {
        println!("Catalogue already present, nothing seeded");
    } else {
        println!("Seed completed. Products: {inserted}");
    }
    Ok(())
}
