//! Right-click context menu of the ruler.

use eframe::egui;

use crate::data::hotkeys::{Hotkey, Hotkeys, RulerAction};
use crate::data::ruler::RulerState;
use crate::data::units::{Orientation, Units, ZeroPoint};

fn item(ui: &mut egui::Ui, checked: bool, text: String, action: RulerAction, out: &mut Option<RulerAction>) {
    if ui.radio(checked, text).clicked() {
        *out = Some(action);
        ui.close();
    }
}

fn toggle(ui: &mut egui::Ui, mut on: bool, text: String, action: RulerAction, out: &mut Option<RulerAction>) {
    if ui.checkbox(&mut on, text).clicked() {
        *out = Some(action);
        ui.close();
    }
}

fn with_key(label: &str, hk: Option<Hotkey>) -> String {
    match hk {
        Some(hk) => format!("{label}\t{hk}"),
        None => label.to_string(),
    }
}

/// Fill the context menu; returns the action the user picked, if any.
pub fn context_menu(ui: &mut egui::Ui, ruler: &RulerState, hotkeys: &Hotkeys) -> Option<RulerAction> {
    let mut picked = None;

    ui.menu_button(format!("{} Units", egui_phosphor::regular::RULER), |ui| {
        let keys = [
            hotkeys.units_pixel,
            hotkeys.units_dip,
            hotkeys.units_point,
            hotkeys.units_cm,
            hotkeys.units_inch,
            hotkeys.units_percent,
        ];
        for (units, hk) in Units::ALL.into_iter().zip(keys) {
            item(
                ui,
                ruler.units == units,
                with_key(&units.to_string(), hk),
                RulerAction::Units(units),
                &mut picked,
            );
        }
    });

    ui.separator();
    item(
        ui,
        ruler.orientation == Orientation::Horizontal,
        with_key("Horizontal", hotkeys.horizontal),
        RulerAction::Orientation(Orientation::Horizontal),
        &mut picked,
    );
    item(
        ui,
        ruler.orientation == Orientation::Vertical,
        with_key("Vertical", hotkeys.vertical),
        RulerAction::Orientation(Orientation::Vertical),
        &mut picked,
    );

    ui.separator();
    item(
        ui,
        ruler.zero_point == ZeroPoint::Near,
        with_key("Zero at start", hotkeys.zero_near),
        RulerAction::ZeroPoint(ZeroPoint::Near),
        &mut picked,
    );
    item(
        ui,
        ruler.zero_point == ZeroPoint::Far,
        with_key("Zero at end", hotkeys.zero_far),
        RulerAction::ZeroPoint(ZeroPoint::Far),
        &mut picked,
    );
    toggle(ui, ruler.flip, with_key("Flip", hotkeys.flip), RulerAction::Flip, &mut picked);

    ui.separator();
    toggle(
        ui,
        ruler.angle_visible,
        with_key("Angle", hotkeys.toggle_angle),
        RulerAction::ToggleAngle,
        &mut picked,
    );
    toggle(
        ui,
        ruler.perpendicular,
        with_key("Perpendicular", hotkeys.toggle_perpendicular),
        RulerAction::TogglePerpendicular,
        &mut picked,
    );
    let clear = format!("{} Clear markers", egui_phosphor::regular::BROOM);
    if ui.button(with_key(&clear, hotkeys.clear_markers)).clicked() {
        picked = Some(RulerAction::ClearMarkers);
        ui.close();
    }

    ui.separator();
    if ui.button(format!("{} Exit\tEsc", egui_phosphor::regular::X)).clicked() {
        picked = Some(RulerAction::Exit);
        ui.close();
    }
    picked
}
