pub mod angle;
pub mod fraction;
pub mod geometry;
pub mod hotkeys;
pub mod label;
pub mod ruler;
pub mod scale;
pub mod screen;
pub mod ticks;
pub mod track;
pub mod units;
