// SPDX-License-Identifier: MPL-2.0
use std::io::{self, Write};
use std::path::PathBuf;
use timeright_reel::application::{CarouselController, Interaction};
use timeright_reel::config::{self, DEFAULT_SURFACE_WIDTH};
use timeright_reel::content;
use timeright_reel::domain::carousel::SurfaceBounds;
use timeright_reel::domain::error::IgnoreReason;
use timeright_reel::i18n::I18n;
use timeright_reel::ui::ConsoleRenderer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
timeright-reel: replay pointer clicks on the instructor carousel

USAGE:
  timeright-reel [OPTIONS] [CLICK_X...]

OPTIONS:
  --lang <LOCALE>       Content language (tr, en)
  --config-dir <DIR>    Directory holding settings.toml
  --width <PX>          Width of the pointer surface
  --burst <N>           Extra clicks fired while each transition runs
  -h, --help            Print this help
";

struct Flags {
    lang: Option<String>,
    config_dir: Option<PathBuf>,
    width: f32,
    burst: usize,
    clicks: Vec<f32>,
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let width = args
        .opt_value_from_str("--width")?
        .unwrap_or(DEFAULT_SURFACE_WIDTH);
    let burst = args.opt_value_from_str("--burst")?.unwrap_or(0);
    let mut clicks = Vec::new();
    for raw in args.finish() {
        let text = raw.to_string_lossy();
        let x = text
            .parse::<f32>()
            .map_err(|err| pico_args::Error::Utf8ArgumentParsingFailed {
                value: text.to_string(),
                cause: err.to_string(),
            })?;
        clicks.push(x);
    }

    Ok(Flags {
        lang,
        config_dir,
        width,
        burst,
        clicks,
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let (config, warning) = config::load_with_override(flags.config_dir.clone());
    let i18n = I18n::new(flags.lang.clone(), &config);
    if let Some(key) = warning {
        eprintln!("{}", i18n.tr(&key));
    }

    let locale = i18n.current_locale().clone();
    let section = match content::load_section(&locale) {
        Ok(section) => section,
        Err(err) => {
            tracing::error!(%err, "failed to load instructor content");
            eprintln!("{}", i18n.tr(err.i18n_key()));
            std::process::exit(1);
        }
    };

    let bounds = SurfaceBounds::from_width(flags.width);
    let duration = config.carousel.transition_duration();
    let total = section.len();
    let mut renderer = ConsoleRenderer::new(
        io::stdout(),
        i18n,
        config.content.cdn_base_url(),
        total,
    );
    let heading = if section.is_empty() {
        renderer.i18n().tr("carousel-empty")
    } else {
        renderer.i18n().tr_with_args(
            "cli-loaded-roster",
            &[
                ("count", total.into()),
                ("locale", locale.to_string().into()),
            ],
        )
    };
    renderer.line(&heading);

    let mut controller = CarouselController::new(section.members, renderer);

    for x in flags.clicks {
        let side = controller.hover(x, bounds);
        let hint = controller.renderer().i18n().tr(side.hint_i18n_key());
        controller.renderer_mut().line(&format!("> {hint}"));

        let plan = match controller.click(x, bounds) {
            Interaction::Planned(plan) => plan,
            Interaction::Ignored(reason) => {
                report_ignored(controller.renderer_mut(), reason);
                continue;
            }
        };
        for _ in 0..flags.burst {
            if let Interaction::Ignored(reason) = controller.click(x, bounds) {
                report_ignored(controller.renderer_mut(), reason);
            }
        }
        tokio::time::sleep(duration.as_duration()).await;
        if let Err(err) = controller.animation_finished(&plan) {
            tracing::warn!(%err, "transition completion rejected");
        }
    }
}

fn report_ignored<W: Write>(renderer: &mut ConsoleRenderer<W>, reason: IgnoreReason) {
    let reason = renderer.i18n().tr(reason.i18n_key());
    let text = renderer
        .i18n()
        .tr_with_args("cli-click-ignored", &[("reason", reason.into())]);
    renderer.line(&text);
}
