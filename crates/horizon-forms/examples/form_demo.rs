//! Drives the three form widgets from a scripted "host".
//!
//! Run with `RUST_LOG=horizon_forms=debug` to watch the widgets log their
//! transitions. An optional first argument names a TOML config file.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use horizon_forms::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => FormsConfig::load(PathBuf::from(path))?,
        None => FormsConfig::default(),
    };

    let assets = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/i18n");
    let translations = Arc::new(TranslationService::load_dir(&assets, "en")?);

    // Input
    let mut input = InputWidget::with_translator(translations.clone())
        .with_config(&config.validation)
        .with_label("Password")
        .with_kind(InputKind::Password)
        .with_rules(RuleSet::all());
    input
        .validation_status
        .connect(|message| println!("  validation: {message:?}"));

    let source = MockDataService::from_config(&config.data).with_delay(Duration::from_millis(200));
    let initial = source.fetch_initial().await?;
    input.apply_initial(&initial);
    println!("input placeholder: {}", input.placeholder());

    for attempt in ["abc", "abcdefghij", "Abcdefgh1!", "Abcdefgh1!@example.com"] {
        println!("typing {attempt:?} -> {}", input.display_text());
        input.handle_input(attempt);
    }

    translations.use_language("pl");
    input.handle_input("abc");

    // Date range
    let today = chrono::Local::now().date_naive();
    let mut dates = DatePicker::from_config(true, today, &config.date_picker);
    dates.date_selected.connect(|range| {
        println!("  range: {:?} .. {:?}", range.start, range.end);
    });
    let (year, month) = dates.displayed_year_month();
    println!("calendar: {} {year}", dates.current_month_name());
    for day in [12, 3] {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            dates.select_date(date);
        }
    }

    // Hours
    let mut hours = HourPicker::from_config(&config.hour_picker);
    hours.hour_column_mut().set_uniform_layout(0.0, 40.0);
    hours.minute_column_mut().set_uniform_layout(0.0, 40.0);
    hours
        .time_range_selected
        .connect(|range| println!("  time range: {} - {}", range.start, range.end));

    let mounted = Instant::now();
    hours.mount(mounted);
    while let Some(wait) = hours.time_until_next_pass(Instant::now()) {
        tokio::time::sleep(wait).await;
        hours.process_deferred(Instant::now());
    }
    println!("mounted after {:?}", mounted.elapsed());

    hours.select_hour(9);
    hours.select_minute(15);
    hours.set_mode(TimeMode::End);
    hours.start_drag(WheelKind::Hour, &PointerEvent::mouse(400.0));
    hours.drag_move(&PointerEvent::mouse(400.0 - 17.0 * 40.0));
    hours.end_drag();
    hours.teardown();

    Ok(())
}
