use std::time::Instant;

/// One snapshot of every dashboard metric. Fields that the provider could not
/// read are `None` and render as "N/A", each on its own.
#[derive(Debug, Clone)]
pub struct Sample {
    pub taken_at: Instant,
    pub cpu_percent: Option<f64>,
    pub mem_used_percent: f64,
    pub mem_total_bytes: u64,
    pub disk_used_percent: Option<f64>,
    pub net_bytes_sent: Option<u64>,
    pub net_bytes_recv: Option<u64>,
    pub temperatures: Vec<f64>,
    pub uptime_secs: u64,
}

/// Static host identity, read once at startup.
#[derive(Debug, Clone)]
pub struct HostInfo {
    pub hostname: Option<String>,
    pub os_name: Option<String>,
    pub kernel_version: Option<String>,
}
