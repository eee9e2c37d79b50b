use portfolio_site::api::{fetch_portfolio, ApiConfig};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let data = match fetch_portfolio(&ApiConfig::from_env()).await {
        Ok(data) => data,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{} - {}", data.profile.name, data.profile.title);
    println!(
        "{} skill groups, {} technologies",
        data.skills.len(),
        data.skills
            .iter()
            .map(|g| g.technologies.len())
            .sum::<usize>()
    );
    for project in &data.projects {
        println!("  #{} {} [{}]", project.id, project.title, project.status.label());
    }

    let issues = data.validate();
    for issue in &issues {
        tracing::warn!("{issue}");
    }
    if issues.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
