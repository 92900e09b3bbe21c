use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(ladle_recipe_migration::Migrator).await;
}
