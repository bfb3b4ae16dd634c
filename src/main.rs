use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use layout_translate::application::services::{
    LanguageIdentifier, LanguagePolicy, PipelineError, ReadingOrderReconstructor, RetryPolicy,
    TranslationPipeline, TranslationService, WindowingEngine,
};
use layout_translate::domain::DocumentFormat;
use layout_translate::infrastructure::language::ClassifierFactory;
use layout_translate::infrastructure::observability::{
    TracingConfig, init_tracing, sanitize_for_log,
};
use layout_translate::infrastructure::reading_order::ReadingOrderFactory;
use layout_translate::infrastructure::text_processing::ExtractorFactory;
use layout_translate::infrastructure::translation::TranslatorFactory;
use layout_translate::presentation::{Cli, Settings};

fn build_pipeline(settings: &Settings) -> anyhow::Result<TranslationPipeline> {
    let extractor = ExtractorFactory::create(&settings.extraction)?;

    let reading = &settings.reading_order;
    let windowing = WindowingEngine::new(reading.window_capacity)?;
    let reconstructor = ReadingOrderReconstructor::new(ReadingOrderFactory::create(reading)?, windowing)
        .with_merge_policy(reading.merge_policy)
        .with_max_concurrent_requests(reading.max_concurrent_requests);

    let language = &settings.language;
    let identifier = LanguageIdentifier::new(
        ClassifierFactory::create(language)?,
        LanguagePolicy {
            confidence_threshold: language.confidence_threshold,
            fallback_code: language.fallback_code.clone(),
            min_text_chars: language.min_text_chars,
            max_sample_chars: language.max_sample_chars,
        },
    );

    let translation = &settings.translation;
    let translation_service = TranslationService::new(TranslatorFactory::create(translation)?)
        .with_max_segment_chars(translation.max_segment_chars)
        .with_retry_policy(RetryPolicy {
            max_attempts: translation.max_attempts,
            initial_backoff: Duration::from_millis(translation.initial_backoff_ms),
            max_backoff: Duration::from_millis(translation.max_backoff_ms),
        })
        .with_max_concurrent_requests(translation.max_concurrent_requests);

    let pipeline =
        TranslationPipeline::new(extractor, reconstructor, identifier, translation_service);

    Ok(match settings.timeout_secs {
        Some(secs) => pipeline.with_timeout(Duration::from_secs(secs)),
        None => pipeline,
    })
}

async fn run(cli: Cli, settings: Settings) -> anyhow::Result<ExitCode> {
    let format = DocumentFormat::from_path(&cli.input_file).with_context(|| {
        format!("unsupported file extension: {}", cli.input_file.display())
    })?;

    let data = tokio::fs::read(&cli.input_file)
        .await
        .with_context(|| format!("failed to read {}", cli.input_file.display()))?;

    let filename = cli
        .input_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let pipeline = build_pipeline(&settings)?;

    let output = match pipeline
        .translate_document(&data, filename, format, &cli.target_lang)
        .await
    {
        Ok(output) => output,
        Err(PipelineError::Extraction(e)) => {
            tracing::error!(error = %e, "Extraction failed");
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    let output_path = cli.output_path();
    tokio::fs::write(&output_path, &output.text)
        .await
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    for degradation in &output.report.degradations {
        tracing::warn!(stage = %degradation.stage(), "{degradation}");
    }

    tracing::info!(
        output = %output_path.display(),
        source = %output.report.source_language,
        target = %output.report.target_language,
        complete = output.report.is_complete(),
        preview = %sanitize_for_log(&output.text),
        "Translation written"
    );

    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("failed to load settings")?;

    init_tracing(
        &TracingConfig::new(settings.logging.level.clone(), settings.logging.json)
            .with_env_overrides(),
    );

    run(cli, settings).await
}
