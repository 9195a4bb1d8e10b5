
mod pipeline_tests;

/// Test logger setup; safe to call from every test.
pub(crate) fn init_logs() {
    colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .try_init()
        .ok();
}
