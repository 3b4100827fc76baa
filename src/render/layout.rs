/// Fixed 80-column, two-field grid. Rows and columns are zero-based terminal
/// coordinates; every widget repaints at the same anchor on every tick.
pub const SCREEN_WIDTH: usize = 80;
pub const FIELD_WIDTH: usize = 40;
pub const BAR_WIDTH: usize = 15;

pub const LEFT_COL: u16 = 0;
pub const RIGHT_COL: u16 = 40;

pub const ROW_TITLE: u16 = 0;
pub const ROW_TITLE_RULE: u16 = 1;
pub const ROW_HOST: u16 = 2;
pub const ROW_KERNEL: u16 = 3;
pub const ROW_USAGE_HEADER: u16 = 4;
pub const ROW_USAGE_BARS: u16 = 5;
pub const ROW_DISK_HEADER: u16 = 6;
pub const ROW_DISK_BARS: u16 = 7;
pub const ROW_SECTION_RULE: u16 = 8;
pub const ROW_SECTION_HEADER: u16 = 9;
pub const ROW_SECTION_SUBRULE: u16 = 10;
pub const ROW_UPLOAD: u16 = 11;
pub const ROW_DOWNLOAD: u16 = 12;
pub const ROW_TOTAL_UP: u16 = 13;
pub const ROW_TOTAL_DOWN: u16 = 14;
pub const ROW_FOOTER: u16 = 15;

/// Right-column sensor cells, in sensor-list order starting at ROW_UPLOAD.
pub const TEMPERATURE_LABELS: [&str; 4] = ["CPU", "GPU", "Disk", "Battery"];
