use log::{LevelFilter, SetLoggerError};

// Logs from this workspace only; dependencies stay quiet.
pub fn init_simple_logger(l: LevelFilter) -> Result<(), SetLoggerError> {
    use simplelog::*;

    let mut cb = ConfigBuilder::new();
    cb.set_location_level(LevelFilter::Off);
    cb.set_target_level(LevelFilter::Off);
    cb.set_thread_level(LevelFilter::Off);
    cb.set_time_level(LevelFilter::Debug);
    cb.set_level_color(Level::Trace, Some(Color::Green));
    cb.add_filter_allow_str("sympoly");
    let config = cb.build();

    TermLogger::init(
        l,
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto
    )
}
