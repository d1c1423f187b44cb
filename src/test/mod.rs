
/// Routes `log` output through the test harness so it shows up next to failing tests.
pub(crate) fn init_logging() {
    use simplelog::{Config, LevelFilter, TestLogger};

    // Every test calls this; only the first call installs the logger.
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}
