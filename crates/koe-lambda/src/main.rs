//! koe-lambda - Lambda エントリポイント
//!
//! 起動時に 1 回だけ設定と AWS クライアントを構築し、
//! ConvertHandler に注入します（ambient なグローバルは作らない）。

use std::sync::Arc;

use aws_config::BehaviorVersion;
use aws_sdk_polly::types::VoiceId;
use lambda_http::{run, service_fn, Error, Request};
use tracing_subscriber::EnvFilter;

mod config;
mod event;

use config::AppConfig;
use koe_aws::{DynamoUsageStore, PollySynthesizer, S3MediaStore};
use koe_core::app::HandlerBuilder;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(bucket = %config.bucket, table = %config.table, voice = %config.voice_id, "starting");

    let aws = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let media = Arc::new(S3MediaStore::new(
        aws_sdk_s3::Client::new(&aws),
        config.bucket.clone(),
    ));
    let handler = Arc::new(
        HandlerBuilder::new()
            .synthesizer(Arc::new(PollySynthesizer::with_voice(
                aws_sdk_polly::Client::new(&aws),
                VoiceId::from(config.voice_id.as_str()),
            )))
            .media_store(media.clone())
            .link_issuer(media)
            .usage_store(Arc::new(DynamoUsageStore::new(
                aws_sdk_dynamodb::Client::new(&aws),
                config.table.clone(),
            )))
            .link_ttl(config.link_ttl)
            .build()?,
    );

    run(service_fn(move |request: Request| {
        let handler = handler.clone();
        async move {
            let response = handler.handle(event::convert_event(&request)).await;
            event::render(response)
        }
    }))
    .await
}
