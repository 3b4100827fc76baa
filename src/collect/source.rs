use std::path::Path;
use std::time::Instant;

use sysinfo::{Components, Disks, Networks, System};

use crate::collect::sample::{HostInfo, Sample};
use crate::ext::destructure_ext::DestructureTupleExt;

/// Point-in-time reads of every metric the dashboard shows. The production
/// implementation sits on `sysinfo`; tests inject a simulated source.
pub trait MetricsSource {
    fn host_info(&mut self) -> HostInfo;
    fn sample(&mut self) -> Sample;
}

#[derive(Debug)]
pub struct SysinfoSource {
    system: System,
    components: Components,
    disks: Disks,
    networks: Networks,
}

impl SysinfoSource {
    pub fn new() -> Self {
        let system = System::new_all();
        let components = Components::new_with_refreshed_list();
        let disks = Disks::new_with_refreshed_list();
        let networks = Networks::new_with_refreshed_list();

        SysinfoSource {
            system,
            components,
            disks,
            networks,
        }
    }

    fn collect_cpu_percent(&mut self) -> Option<f64> {
        self.system.refresh_cpu();
        if self.system.cpus().is_empty() {
            return None;
        }
        Some(self.system.global_cpu_info().cpu_usage() as f64)
    }

    fn collect_memory(&mut self) -> (f64, u64) {
        self.system.refresh_memory();
        let total = self.system.total_memory();
        let used_percent = if total > 0 {
            self.system.used_memory() as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        (used_percent, total)
    }

    fn collect_disk_used_percent(&mut self) -> Option<f64> {
        self.disks.refresh_list();

        let root = self
            .disks
            .iter()
            .find(|disk| disk.mount_point() == Path::new("/"))?;
        let total = root.total_space();
        if total == 0 {
            return None;
        }
        let used = total.saturating_sub(root.available_space());
        Some(used as f64 / total as f64 * 100.0)
    }

    fn collect_network_totals(&mut self) -> Option<(u64, u64)> {
        self.networks.refresh_list();

        let mut count = 0;
        let mut total_sent = 0u64;
        let mut total_recv = 0u64;

        for (_, network_data) in self.networks.iter() {
            total_sent += network_data.total_transmitted();
            total_recv += network_data.total_received();
            count += 1;
        }

        if count == 0 {
            return None;
        }

        Some((total_sent, total_recv))
    }

    fn collect_temperatures(&mut self) -> Vec<f64> {
        self.components.refresh_list();
        self.components
            .iter()
            .map(|component| component.temperature() as f64)
            .collect()
    }
}

impl Default for SysinfoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsSource for SysinfoSource {
    fn host_info(&mut self) -> HostInfo {
        HostInfo {
            hostname: System::host_name(),
            os_name: System::name(),
            kernel_version: System::kernel_version(),
        }
    }

    fn sample(&mut self) -> Sample {
        let cpu_percent = self.collect_cpu_percent();
        let (mem_used_percent, mem_total_bytes) = self.collect_memory();
        let disk_used_percent = self.collect_disk_used_percent();
        let (net_bytes_sent, net_bytes_recv) = self.collect_network_totals().destructure();
        let temperatures = self.collect_temperatures();

        Sample {
            taken_at: Instant::now(),
            cpu_percent,
            mem_used_percent,
            mem_total_bytes,
            disk_used_percent,
            net_bytes_sent,
            net_bytes_recv,
            temperatures,
            uptime_secs: System::uptime(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sysinfo_sample() {
        let mut source = SysinfoSource::new();
        let sample = source.sample();

        assert!(sample.mem_total_bytes > 0);
        assert!((0.0..=100.0).contains(&sample.mem_used_percent));
        if let Some(cpu) = sample.cpu_percent {
            assert!((0.0..=100.0).contains(&cpu));
        }
        if let Some(disk) = sample.disk_used_percent {
            assert!((0.0..=100.0).contains(&disk));
        }
        assert!(sample.uptime_secs > 0);
    }
}
