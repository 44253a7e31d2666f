//! Terminal demo: a live clock line, then a wake-up preview with sleep-time
//! suggestions.
use std::sync::mpsc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;
use vesper_clock::{ClockEngine, ClockError, MeridiemLabels, TimeFormatter};
use vesper_platform::{
    ClockEvent, EventSource, FormatPreference, IntervalTicker, StaticPreference, SystemWallClock,
};

fn main() -> Result<(), ClockError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let preference = StaticPreference::new(false);
    let formatter = TimeFormatter::new(MeridiemLabels::default());
    let mut engine = ClockEngine::new(formatter, Box::new(SystemWallClock::new()));
    engine.on_format_preference_changed(preference.use_24_hour());

    // The engine is single-threaded; marshal tick delivery onto this thread.
    let (sender, receiver) = mpsc::channel();
    let ticker = IntervalTicker::new(Duration::from_secs(1));
    let _subscription = ticker.subscribe(Box::new(move |event| {
        let _ = sender.send(event);
    }));

    for _ in 0..5 {
        match receiver.recv() {
            Ok(ClockEvent::Tick) => {
                let rendered = engine.update_now();
                info!("clock: {}", rendered.accessible);
            }
            Ok(event) => info!("event: {event:?}"),
            Err(_) => break,
        }
    }
    drop(ticker);

    let rendered = engine.set_fixed_time(7, 0)?;
    info!("wake-up preview: {}", rendered.accessible);
    info!("suggested sleep times: {}", engine.suggested_sleep_times()?);
    Ok(())
}
