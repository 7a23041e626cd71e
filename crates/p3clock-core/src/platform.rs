//! Best-effort startup capability probes. Nothing here can fail the program.

use log::debug;
use p3clock_proto::config::AppearanceConfig;

/// Who is responsible for process-level DPI awareness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DpiAwareness {
    /// The windowing backend declares per-monitor awareness when it creates
    /// its event loop.
    Backend,
    /// The platform has no process-level awareness switch.
    NotApplicable,
}

/// Rendering capabilities resolved at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capabilities {
    pub dpi_awareness: DpiAwareness,
    pub scale_factor: f64,
    pub antialiasing: bool,
}

pub fn probe(appearance: &AppearanceConfig) -> Capabilities {
    let capabilities = Capabilities {
        dpi_awareness: probe_dpi_awareness(),
        scale_factor: effective_scale_factor(appearance.scale_factor),
        antialiasing: appearance.antialiasing,
    };

    debug!("display capabilities: {capabilities:?}");
    capabilities
}

#[cfg(windows)]
fn probe_dpi_awareness() -> DpiAwareness {
    DpiAwareness::Backend
}

#[cfg(not(windows))]
fn probe_dpi_awareness() -> DpiAwareness {
    DpiAwareness::NotApplicable
}

fn effective_scale_factor(requested: f64) -> f64 {
    if requested.is_finite() && requested > 0.0 {
        requested
    } else {
        debug!("ignoring unusable scale factor {requested}, using 1.0");
        1.0
    }
}
