// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use toast_center::config;
use toast_center::domain::notifications::{DisplayDuration, MaxVisible};
use toast_center::notifications::{Notification, NotificationCenter, NotificationRequest, Severity};

const HELP: &str = "\
Show toast notifications in the terminal until they expire.

USAGE:
  toast_center [OPTIONS] [SEVERITY:]MESSAGE...

OPTIONS:
  --config-dir DIR     Directory holding settings.toml
  --max-visible N      Toasts shown at once
  --duration MS        Default display time (0 keeps toasts until the end)
  -h, --help           Print this help
";

struct Flags {
    config_dir: Option<String>,
    max_visible: Option<usize>,
    duration_ms: Option<u64>,
    items: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }
    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        max_visible: args.opt_value_from_str("--max-visible")?,
        duration_ms: args.opt_value_from_str("--duration")?,
        items: args
            .finish()
            .into_iter()
            .filter_map(|s| s.into_string().ok())
            .collect(),
    };

    let (config, warning) = config::load_with_override(flags.config_dir.map(PathBuf::from));
    let mut settings = config.center_settings();
    if let Some(max_visible) = flags.max_visible {
        settings.max_visible = MaxVisible::new(max_visible);
    }
    if let Some(ms) = flags.duration_ms {
        settings.default_duration = DisplayDuration::from_millis(ms);
    }

    let mut center = NotificationCenter::new(settings)?;
    let mut updates = center.subscribe();
    let printer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            render(&updates.borrow_and_update());
        }
    });

    if let Some(message) = warning {
        center.notify(NotificationRequest::warning(message))?;
    }
    for item in &flags.items {
        center.notify(parse_item(item))?;
    }

    while center.pending_timers() > 0 {
        center.next_expiry().await;
    }
    center.dismiss_all();
    drop(center);

    printer.await?;
    Ok(())
}

/// Parses `severity:message`; anything without a known prefix is info.
fn parse_item(item: &str) -> NotificationRequest {
    match item.split_once(':') {
        Some((prefix, message)) => match prefix.parse::<Severity>() {
            Ok(severity) => NotificationRequest::new(severity, message.trim()),
            Err(_) => NotificationRequest::info(item),
        },
        None => NotificationRequest::info(item),
    }
}

fn render(visible: &[Notification]) {
    println!("--- {} visible ---", visible.len());
    for notification in visible {
        println!(
            "[{:<7}] {}  ({})",
            notification.severity(),
            notification.message(),
            notification.id()
        );
    }
}
