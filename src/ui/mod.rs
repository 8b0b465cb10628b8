/// UI layer: top bar and filter panel, chart rendering, dashboard layout.

pub mod dashboard;
pub mod panels;
pub mod plot;
