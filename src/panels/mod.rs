pub mod angle_ui;
pub mod menu_ui;
pub mod scale_ui;

pub use angle_ui::AnglePanel;
pub use scale_ui::{ScalePanel, ScaleStyle};
