use widget_bandits::actors::{accountant::Accountant, user::User};
use widget_bandits::agent::{DecisionLoop, HttpRewardSource};
use widget_bandits::api::routes::user_service;
use widget_bandits::config::AppConfig;
use widget_bandits::engine::BanditEngine;
use widget_bandits::errors::AppError;
use widget_bandits::logging;
use widget_bandits::policies::PolicyType;

use actix::prelude::*;
use actix_web::{web::Data, App, HttpServer};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_actix_web::TracingLogger;

#[derive(Parser)]
#[command(version, about = "Widget recommendation with multi-armed bandits")]
struct Cli {
    /// Configuration file, extension optional
    #[arg(long, env = "APP_CONFIG", default_value = "config")]
    config: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Recommend widgets with the named policy (epsilon_greedy or ucb) until stopped
    Agent { policy: String },
    /// Serve simulated user time spent on widgets
    UserService,
}

#[actix_web::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::from_path(&cli.config)?;
    let _guard = logging::init(&config.logging)?;

    match cli.command {
        Command::Agent { policy } => run_agent(&config, &policy).await,
        Command::UserService => run_user_service(&config).await,
    }
}

async fn run_agent(config: &AppConfig, policy: &str) -> Result<(), AppError> {
    let policy_type = PolicyType::from_config(policy, &config.bandits, config.agent.seed)?;
    let engine = BanditEngine::new(policy_type)?;
    let source = HttpRewardSource::new(&config.agent)?;
    info!(url = %source.watch_url(), "Using reward source");

    DecisionLoop::new(engine, source, config.agent.round_delay())
        .run()
        .await?;
    Ok(())
}

async fn run_user_service(config: &AppConfig) -> Result<(), AppError> {
    let user = User::new(&config.preferences, config.server.seed)?.start();
    let accountant = Accountant::new().start();

    info!(host = %config.server.host, port = %config.server.port, "Starting user service");
    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(user.clone()))
            .app_data(Data::new(accountant.clone()))
            .wrap(TracingLogger::default())
            .configure(user_service)
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await?;
    Ok(())
}
