use log::{LevelFilter, SetLoggerError};

/// Installs the logger: the browser console on wasm32, a `simplelog`
/// terminal logger elsewhere. Returns `false` when a logger was already
/// installed, in which case only the level changes.
pub fn init(level: LevelFilter) -> bool {
    let installed = match install() {
        Ok(()) => true,
        Err(err) => {
            log::debug!("keeping existing logger: {err}");
            false
        }
    };
    log::set_max_level(level);
    installed
}

// The installed logger passes every record; `log::max_level` filters.
#[cfg(not(target_arch = "wasm32"))]
fn install() -> Result<(), SetLoggerError> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        LevelFilter::Trace,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
}

#[cfg(target_arch = "wasm32")]
fn install() -> Result<(), SetLoggerError> {
    log::set_logger(&browser::LOGGER)
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use log::{Level, Log, Metadata, Record};
    use wasm_bindgen::JsValue;
    use web_sys::console;

    /// Writes `log` records to the browser console.
    pub struct ConsoleLogger;

    pub static LOGGER: ConsoleLogger = ConsoleLogger;

    impl Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());
            let value = JsValue::from_str(&line);
            match record.level() {
                Level::Error => console::error_1(&value),
                Level::Warn => console::warn_1(&value),
                Level::Info => console::info_1(&value),
                Level::Debug | Level::Trace => console::debug_1(&value),
            }
        }

        fn flush(&self) {}
    }
}
