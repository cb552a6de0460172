use ratatui::style::Color;

use crate::domain::{CrisisStatus, Priority, ResourceStatus, Severity};

pub const BRAND: Color = Color::Rgb(0x25, 0x63, 0xeb);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_WARN: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const STATUS_ALERT: Color = Color::Rgb(0xf9, 0x73, 0x16);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

pub const NGO_BLUE: Color = Color::Rgb(0x25, 0x63, 0xeb);
pub const VOLUNTEER_GREEN: Color = Color::Rgb(0x16, 0xa3, 0x4a);
pub const DONOR_PURPLE: Color = Color::Rgb(0x93, 0x33, 0xea);
pub const GOVERNMENT_RED: Color = Color::Rgb(0xdc, 0x26, 0x26);

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Critical => STATUS_ERROR,
        Severity::High => STATUS_ALERT,
        Severity::Medium => STATUS_WARN,
        Severity::Low => STATUS_OK,
    }
}

pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Urgent => STATUS_ERROR,
        Priority::High => STATUS_ALERT,
        Priority::Medium => STATUS_WARN,
        Priority::Low => STATUS_OK,
    }
}

pub fn crisis_status_color(status: CrisisStatus) -> Color {
    match status {
        CrisisStatus::Active => STATUS_ERROR,
        CrisisStatus::Monitoring => STATUS_WARN,
        CrisisStatus::Resolved => STATUS_OK,
    }
}

pub fn resource_status_color(status: ResourceStatus) -> Color {
    match status {
        ResourceStatus::Needed => STATUS_ERROR,
        ResourceStatus::PartiallyFulfilled => STATUS_WARN,
        ResourceStatus::Fulfilled => STATUS_OK,
    }
}
