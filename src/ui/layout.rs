use ratatui::layout::Rect;

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub nav: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let header_height = area.height.min(3);
    let nav_height = 1.min(area.height.saturating_sub(header_height));
    let footer_height = 3.min(area.height.saturating_sub(header_height + nav_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let nav = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: nav_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height + nav_height,
        width: area.width,
        height: area
            .height
            .saturating_sub(header_height + nav_height + footer_height),
    };
    Regions {
        header,
        nav,
        body,
        footer,
    }
}
