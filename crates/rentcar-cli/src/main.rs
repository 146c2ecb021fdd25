use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use rentcar_cli::{admin, seeder};
use rentcar_config::DatabaseConfig;
use rentcar_db::{PgCarRepository, PgPool, PgUserRepository, init_db_pool, run_migrations};

#[derive(Parser)]
#[command(name = "rentcar-cli")]
#[command(about = "Rentcar CLI - Administrative tools for the rentcar API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an ADMIN account
    CreateAdmin {
        /// Display name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Insert fake cars
    SeedCars {
        /// Number of cars to create
        #[arg(short = 'c', long, default_value = "20")]
        count: usize,
    },
    /// Delete every car
    ClearCars,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("\n❌ Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn connect() -> anyhow::Result<PgPool> {
    let config = DatabaseConfig::from_env();
    let pool = init_db_pool(&config)
        .await
        .with_context(|| format!("Failed to connect to {}", config.database_name()))?;
    run_migrations(&pool).await?;
    Ok(pool)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let pool = connect().await?;

    match cli.command {
        Commands::CreateAdmin {
            name,
            email,
            password,
        } => handle_create_admin(&pool, name, email, password).await,
        Commands::SeedCars { count } => {
            seeder::seed_cars(&PgCarRepository::new(pool), count).await?;
            println!("\n✅ Seeding complete!");
            Ok(())
        }
        Commands::ClearCars => {
            seeder::clear_cars(&PgCarRepository::new(pool)).await?;
            println!("\n✅ Cars cleared!");
            Ok(())
        }
    }
}

async fn handle_create_admin(
    pool: &PgPool,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let name = match name {
        Some(name) => name,
        None => Input::<String>::new().with_prompt("Name").interact_text()?,
    };

    let email = match email {
        Some(email) => email,
        None => Input::<String>::new().with_prompt("Email address").interact_text()?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?,
    };

    let users = PgUserRepository::new(pool.clone());
    let user = admin::create_admin(&users, &name, &email, &password).await?;

    println!("\n✅ Admin created successfully!");
    println!("   Id: {}", user.id);
    println!("   Email: {}", user.email);
    println!("   Name: {}", user.name);

    Ok(())
}
