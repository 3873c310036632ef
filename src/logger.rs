use log::LevelFilter;

/// Logs go to stderr at `Info`, or `Debug` with `--debug`. `RUST_LOG`
/// overrides both.
pub fn init_logger(debug_enabled: bool) {
  let level = if debug_enabled { LevelFilter::Debug } else { LevelFilter::Info };

  let mut builder = env_logger::Builder::new();
  builder
    .filter(None, level)
    .format_timestamp(None)
    .format_module_path(false)
    .format_target(false);

  if let Ok(filters) = std::env::var("RUST_LOG") {
    builder.parse_filters(&filters);
  }

  builder.init();
  log::debug!("Logger initialized at {level:?} level");
}
