use crate::core::date_math::InvalidDateError;
use crate::core::navigator::Panel;
use crate::core::picker::RangePicker;

/// Serializes the full view model (both panels, their cells and the
/// selection) for consumers that are not a terminal, such as snapshot
/// tooling.
pub fn view_to_json(picker: &RangePicker) -> Result<serde_json::Value, InvalidDateError> {
    let mut panels = Vec::new();
    for (name, panel) in [("current", Panel::Current), ("future", Panel::Future)] {
        let cells = picker.grid(panel)?;
        panels.push(serde_json::json!({
            "panel": name,
            "label": picker.panel_label(panel),
            "weeks": cells.chunks(7).map(|week| week.to_vec()).collect::<Vec<_>>(),
        }));
    }

    Ok(serde_json::json!({
        "today": picker.today(),
        "selection": picker.selection(),
        "panels": panels,
    }))
}
