//! Custom Diagnostic Sink
//!
//! The integrator never prints on its own. When a window is too short it
//! hands the error to a `DiagnosticSink` and returns `0.0`. This example
//! routes those notices into a small health monitor.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_custom_sink
//! ```

use core::cell::RefCell;

use imuquad_core::{
    DiagnosticSink, Integrator, IntegratorConfig, IntegrationError,
};

/// Health monitor that keeps a short text log of degraded windows
#[derive(Default)]
struct HealthMonitor {
    events: RefCell<Vec<String>>,
}

impl DiagnosticSink for HealthMonitor {
    fn notice(&self, error: &IntegrationError) {
        self.events.borrow_mut().push(format!("degraded window: {}", error));
    }
}

fn main() {
    let integrator = Integrator::new(IntegratorConfig::from_interval_ms(5))
        .with_sink(HealthMonitor::default());

    let windows: [&[f32]; 4] = [
        &[0.1, 0.2, 0.3, 0.2, 0.1],
        &[0.4],
        &[],
        &[0.0, 0.5, 1.0, 0.5],
    ];

    for (i, samples) in windows.iter().enumerate() {
        let dv = integrator.velocity_change(samples);
        println!("window {}: {} samples -> dv = {:.5} m/s", i, samples.len(), dv);
    }

    println!("\nhealth log:");
    for event in integrator.sink().events.borrow().iter() {
        println!("  {}", event);
    }
}
