use shieldher_core::catalog::{self, FilterSpec};
use shieldher_core::submission::{
    Donation, EvidenceLinks, IncidentReport, IncidentType, SubmissionService,
};
use shieldher_core::{BackendChoice, CoreConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Demonstration entry point for the ShieldHer core services
///
/// Resolves configuration from the process environment (the core never
/// reads environment variables itself), then exercises both services:
/// a catalog pass over the bundled collections, and, when the mock
/// backend is selected, a sample report and donation submission.
///
/// # Environment Variables
/// - `SHIELDHER_BACKEND`: `mock` (default) or `remote`
/// - `SHIELDHER_API_URL`: platform API base URL, required for `remote`
///
/// # Returns
/// * `Ok(())` - If the demonstration pass completes
/// * `Err(anyhow::Error)` - If configuration is invalid or a submission fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("shieldher_core=debug".parse()?)
                .add_directive("shieldher_run=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = resolve_config()?;
    let is_mock = matches!(config.backend(), BackendChoice::Mock(_));
    let service = SubmissionService::new(config.build_backend()?);

    // Catalog pass: the bundled collections and a representative query.
    tracing::info!(
        lessons = catalog::lessons().len(),
        resources = catalog::resources().len(),
        helplines = catalog::helplines().len(),
        "catalog loaded"
    );

    let privacy = catalog::query(
        catalog::lessons(),
        &FilterSpec::new().with_category("privacy"),
    );
    for lesson in &privacy {
        tracing::info!(id = lesson.id, title = %lesson.title, "privacy lesson");
    }

    let helpline = catalog::find_by_id(catalog::helplines(), "1")?;
    tracing::info!(name = %helpline.name, phone = %helpline.phone_number, "helpline lookup");

    if !is_mock {
        // Never send demonstration payloads at a real API.
        tracing::info!("remote backend configured; skipping sample submissions");
        return Ok(());
    }

    // Submission pass against the mock backend.
    let report = IncidentReport {
        incident_type: IncidentType::Harassment,
        description: "Demonstration report: repeated unwanted messages".into(),
        occurred_at: None,
        platform_context: Some("Instagram DM".into()),
        evidence_links: EvidenceLinks::new(),
        consent_for_followup: false,
    };
    let receipt = service.submit_report(report).await?;
    tracing::info!(code = %receipt.confirmation_code, "report submitted");

    let donation = Donation {
        amount: 25.5,
        currency: "USD".into(),
        message: Some("Keep up the work".into()),
    };
    let receipt = service.submit_donation(donation).await?;
    tracing::info!(code = %receipt.confirmation_code, amount = %receipt.amount, "donation submitted");

    let found = service
        .find_donation(&receipt.confirmation_code.to_string())
        .await?;
    println!("{}", serde_json::to_string_pretty(&found)?);

    Ok(())
}

/// Resolves the core configuration from the environment.
fn resolve_config() -> anyhow::Result<CoreConfig> {
    let backend = std::env::var("SHIELDHER_BACKEND").unwrap_or_else(|_| "mock".into());

    let config = match backend.as_str() {
        "mock" => CoreConfig::mock(),
        "remote" => {
            let base_url = std::env::var("SHIELDHER_API_URL")
                .map_err(|_| anyhow::anyhow!("SHIELDHER_API_URL is required for remote backend"))?;
            CoreConfig::remote(base_url)?
        }
        other => anyhow::bail!("unknown SHIELDHER_BACKEND '{other}' (expected mock or remote)"),
    };

    Ok(config)
}
