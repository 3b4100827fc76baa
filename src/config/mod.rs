pub mod monitor_config;

pub(crate) fn default_sample_interval() -> std::time::Duration {
    std::time::Duration::from_millis(500)
}
