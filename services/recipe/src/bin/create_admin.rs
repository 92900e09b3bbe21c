//! One-shot CLI for creating a superuser account.

use clap::Parser;
use sea_orm::Database;

use ladle_recipe::config::RecipeConfig;
use ladle_recipe::infra::db::DbUserRepository;
use ladle_recipe::usecase::user::{CreateUserInput, CreateUserUseCase};

#[derive(Parser)]
#[command(name = "create-admin", about = "Create a superuser account")]
struct Args {
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let config = RecipeConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let usecase = CreateUserUseCase {
        repo: DbUserRepository { db },
    };
    match usecase
        .execute(CreateUserInput {
            email: args.email,
            password: args.password,
            superuser: true,
        })
        .await
    {
        Ok(user) => println!("created superuser {} ({})", user.email, user.id),
        Err(err) => {
            eprintln!("failed to create superuser: {err}");
            std::process::exit(1);
        }
    }
}
