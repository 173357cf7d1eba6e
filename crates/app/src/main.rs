use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::config::{DEFAULT_API_BASE_URL, DEFAULT_VIDEO_DIR};
use services::{AppServices, LessonApiConfig, LessonSessionController, VideoCatalog};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

/// Desktop client that turns language videos into interactive lessons.
#[derive(Parser, Debug)]
#[command(name = "lingua")]
#[command(version)]
struct Args {
    /// Base URL of the lesson processing service
    #[arg(long = "api", default_value = DEFAULT_API_BASE_URL, env = "LINGUA_API_BASE_URL")]
    api_base_url: String,

    /// Directory holding the sample videos
    #[arg(long = "videos", default_value = DEFAULT_VIDEO_DIR, env = "LINGUA_VIDEO_DIR")]
    video_dir: PathBuf,
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<VideoCatalog> {
        self.services.catalog()
    }

    fn lesson_sessions(&self) -> Arc<LessonSessionController> {
        self.services.lesson_sessions()
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "app=info,services=info,ui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let api = LessonApiConfig {
        base_url: args.api_base_url,
    };
    info!(api = %api.base_url, videos = %args.video_dir.display(), "starting lingua");

    let services = AppServices::new_http(api, &args.video_dir)?;
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Lingua")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(err) = run(args).await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "lingua",
            "--api",
            "http://lessons.local:9000",
            "--videos",
            "/srv/videos",
        ])
        .unwrap();
        assert_eq!(args.api_base_url, "http://lessons.local:9000");
        assert_eq!(args.video_dir, PathBuf::from("/srv/videos"));
    }
}
