//=========================================================================
// Platform Diagnostics
//=========================================================================
//
// One-shot startup logging of the display the window landed on and the
// GPU renderer backing the pixel surface.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};
use pixels::Pixels;
use winit::window::Window;

//=== Display =============================================================

/// Logs the current monitor's mode for `window`.
pub(super) fn log_display_mode(window: &Window) {
    let Some(monitor) = window.current_monitor() else {
        debug!(target: "platform", "No current monitor reported");
        return;
    };

    let size = monitor.size();
    info!(
        target: "platform",
        "Current display mode: {} {}x{} @{}, scale {:.2}",
        monitor.name().unwrap_or_else(|| "<unnamed>".to_owned()),
        size.width,
        size.height,
        format_refresh_rate(monitor.refresh_rate_millihertz()),
        monitor.scale_factor()
    );
}

fn format_refresh_rate(millihertz: Option<u32>) -> String {
    match millihertz {
        Some(mhz) => format!("{:.2}Hz", f64::from(mhz) / 1000.0),
        None => "unknown refresh".to_owned(),
    }
}

//=== Renderer ============================================================

/// Logs adapter and texture format information for the pixel surface.
pub(super) fn log_renderer(pixels: &Pixels<'_>) {
    let adapter = pixels.adapter().get_info();
    info!(
        target: "platform",
        "Renderer: {} ({:?}, {:?})",
        adapter.name,
        adapter.backend,
        adapter.device_type
    );
    info!(
        target: "platform",
        "Texture formats: render {:?}, surface {:?}",
        pixels.render_texture_format(),
        pixels.surface_texture_format()
    );
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_rate_formats_in_hertz() {
        assert_eq!(format_refresh_rate(Some(59_940)), "59.94Hz");
        assert_eq!(format_refresh_rate(Some(144_000)), "144.00Hz");
    }

    #[test]
    fn missing_refresh_rate() {
        assert_eq!(format_refresh_rate(None), "unknown refresh");
    }
}
