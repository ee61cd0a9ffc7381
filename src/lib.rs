pub mod api;
pub mod config;
pub mod models;
pub mod pipeline;
pub mod situations;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::api::ApiContext;
use crate::config::Args;
use crate::pipeline::guides::GuideRegistry;
use crate::pipeline::llm::GeminiClient;
use crate::pipeline::TriagePipeline;

/// Build the shared request context from configuration.
///
/// Creates blocking HTTP clients, so it must run outside the tokio runtime.
pub fn build_context(args: &Args) -> anyhow::Result<ApiContext> {
    let llm = GeminiClient::new(
        &args.gemini_base_url,
        &args.gemini_model,
        args.gemini_api_key.clone(),
        args.ai_timeout_secs,
    )
    .context("building Gemini client")?;
    tracing::info!(model = %llm.model(), configured = llm.is_configured(), "AI client ready");

    let sources = args
        .registry_sources()
        .context("building guide registry sources")?;
    let registry = Arc::new(GuideRegistry::new(sources));
    let guides = registry.load(false).len();
    tracing::info!(guides, "Guide registry primed");

    let situations = situations::load_situations(&args.situations);
    let pipeline = TriagePipeline::new(Arc::new(llm), registry);

    Ok(ApiContext::new(pipeline, situations))
}

pub fn run(args: Args) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter(&args.log_level))),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    args.validate().map_err(anyhow::Error::msg)?;

    let ctx = build_context(&args)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("building tokio runtime")?;
    // Blocking clients must be dropped outside the runtime, so the last
    // handle to them outlives it.
    let keep_alive = ctx.clone();
    let result = runtime.block_on(api::serve(ctx, args.listen));
    runtime.shutdown_background();
    drop(keep_alive);
    result
}
