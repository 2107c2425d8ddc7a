use base64::Engine as _;
use openai_ocr::{Config, RecognitionRequest, ReqwestTransport};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Recognize the text in an image file.
///
/// Reads the API key from `OPENAI_API_KEY` and, optionally, the endpoint
/// from `OPENAI_BASE_URL`. Set `RUST_LOG=openai_ocr=debug` to see requests.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "openai_ocr=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let image_path = std::env::args().nth(1).unwrap_or_else(|| {
        eprintln!("Usage: recognize_image <image_path> [language] [model]");
        std::process::exit(1);
    });
    let language = std::env::args().nth(2).unwrap_or("auto".to_string());

    let api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
    let mut config = Config::with_api_key(api_key)
        .custom_prompt("Recognize the $lang text in the image. Output only the text.");
    if let Ok(base) = std::env::var("OPENAI_BASE_URL") {
        config = config.request_path(base);
    }
    if let Some(model) = std::env::args().nth(3) {
        config = config.model(model);
    }

    let bytes = std::fs::read(&image_path)?;
    let image_b64 = base64::engine::general_purpose::STANDARD.encode(bytes);

    let transport = ReqwestTransport::new().with_timeout(Duration::from_secs(120));
    let request = RecognitionRequest::new(image_b64, language);

    println!(
        "Recognizing {} with model '{}'...",
        image_path,
        config.resolved_model()
    );

    let text = openai_ocr::recognize(&transport, &request, &config).await?;
    println!("{}", text);

    Ok(())
}
