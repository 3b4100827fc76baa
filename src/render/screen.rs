use std::io::Write;
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

use crate::collect::rate::NetworkRates;
use crate::collect::sample::{HostInfo, Sample};
use crate::render::format::{center_text, format_bytes, format_gigabytes, progress_bar};
use crate::render::layout::*;

/// Frame buffer over the fixed grid: paints accumulate as (row, col, text)
/// patches and reach the terminal in a single flush per tick.
pub struct Screen {
    patches: Vec<(u16, u16, String)>,
    clear_pending: bool,
}

impl Screen {
    pub fn new() -> Self {
        Screen {
            patches: Vec::new(),
            clear_pending: false,
        }
    }

    fn put(&mut self, row: u16, col: u16, text: impl Into<String>) {
        self.patches.push((row, col, text.into()));
    }

    fn put_row(&mut self, row: u16, left: impl AsRef<str>, right: impl AsRef<str>) {
        self.put(row, LEFT_COL, field(left));
        self.put(row, RIGHT_COL, field(right));
    }

    /// Static cells: painted once at startup, together with the only
    /// full-screen clear of the process lifetime.
    pub fn paint_static(&mut self, host: &HostInfo) {
        self.clear_pending = true;

        self.put(
            ROW_TITLE,
            LEFT_COL,
            center_text("===== System Information =====", SCREEN_WIDTH),
        );
        self.put(ROW_TITLE_RULE, LEFT_COL, "=".repeat(SCREEN_WIDTH));

        self.put_row(
            ROW_HOST,
            format!("Hostname: {}", host.hostname.as_deref().unwrap_or("N/A")),
            format!("OS: {}", host.os_name.as_deref().unwrap_or("N/A")),
        );
        self.put(
            ROW_KERNEL,
            LEFT_COL,
            field(format!(
                "Kernel: {}",
                host.kernel_version.as_deref().unwrap_or("N/A")
            )),
        );

        self.put_row(ROW_USAGE_HEADER, "CPU Usage:", "Memory Usage:");
        self.put_row(ROW_DISK_HEADER, "Disk Usage:", "Total Memory:");

        self.put(ROW_SECTION_RULE, LEFT_COL, "=".repeat(SCREEN_WIDTH));
        self.put_row(ROW_SECTION_HEADER, "Network Monitor", "Temperatures");
        self.put(ROW_SECTION_SUBRULE, LEFT_COL, "-".repeat(SCREEN_WIDTH));

        self.paint_footer();
    }

    /// Dynamic cells, repainted on every tick at their fixed anchors.
    pub fn paint_sample(&mut self, sample: &Sample, rates: Option<&NetworkRates>) {
        let uptime = humantime::format_duration(Duration::from_secs(sample.uptime_secs));
        self.put(ROW_KERNEL, RIGHT_COL, field(format!("Uptime: {uptime}")));

        let cpu_cell = match sample.cpu_percent {
            Some(percent) => progress_bar(percent, BAR_WIDTH),
            None => "N/A".to_string(),
        };
        self.put(ROW_USAGE_BARS, LEFT_COL, field(cpu_cell));
        self.put(
            ROW_USAGE_BARS,
            RIGHT_COL,
            field(progress_bar(sample.mem_used_percent, BAR_WIDTH)),
        );

        let disk_cell = match sample.disk_used_percent {
            Some(percent) => progress_bar(percent, BAR_WIDTH),
            None => "N/A".to_string(),
        };
        self.put(ROW_DISK_BARS, LEFT_COL, field(disk_cell));
        self.put(
            ROW_DISK_BARS,
            RIGHT_COL,
            field(format_gigabytes(sample.mem_total_bytes)),
        );

        let (upload, download) = match rates {
            Some(rates) => (
                format!("{}/s", format_bytes(rates.upload)),
                format!("{}/s", format_bytes(rates.download)),
            ),
            None => ("N/A".to_string(), "N/A".to_string()),
        };
        self.put(ROW_UPLOAD, LEFT_COL, field(format!("Upload Speed: {upload}")));
        self.put(
            ROW_DOWNLOAD,
            LEFT_COL,
            field(format!("Download Speed: {download}")),
        );
        self.put(
            ROW_TOTAL_UP,
            LEFT_COL,
            field(format!("Total Uploaded: {}", total_cell(sample.net_bytes_sent))),
        );
        self.put(
            ROW_TOTAL_DOWN,
            LEFT_COL,
            field(format!(
                "Total Downloaded: {}",
                total_cell(sample.net_bytes_recv)
            )),
        );

        for (index, label) in TEMPERATURE_LABELS.iter().enumerate() {
            let cell = match sample.temperatures.get(index) {
                Some(celsius) => format!("{label}: {celsius:.1}°C"),
                None => format!("{label}: N/A"),
            };
            self.put(ROW_UPLOAD + index as u16, RIGHT_COL, field(cell));
        }

        self.paint_footer();
    }

    fn paint_footer(&mut self) {
        self.put(
            ROW_FOOTER,
            LEFT_COL,
            center_text("Press Ctrl+C to exit", SCREEN_WIDTH),
        );
    }

    /// Flush the accumulated frame: cursor-addressed writes, one `flush`.
    pub fn present(&mut self, out: &mut impl Write) -> std::io::Result<()> {
        if self.clear_pending {
            queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
            self.clear_pending = false;
        }
        for (row, col, text) in self.patches.drain(..) {
            queue!(out, MoveTo(col, row), Print(text))?;
        }
        out.flush()
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

fn field(text: impl AsRef<str>) -> String {
    format!("{:<width$}", text.as_ref(), width = FIELD_WIDTH)
}

fn total_cell(counter: Option<u64>) -> String {
    match counter {
        Some(bytes) => format_bytes(bytes as f64),
        None => "N/A".to_string(),
    }
}
