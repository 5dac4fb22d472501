//! Velocity From Accelerometer Windows
//!
//! Simulates a 100 Hz accelerometer on a cart that accelerates, cruises and
//! brakes, collects the readings into fixed-size windows, and integrates
//! each window into a velocity and position change.
//!
//! ## What You'll Learn
//!
//! - Configuring an integrator from a sensor output data rate
//! - Collecting samples into a heap-free `SampleWindow`
//! - Using the `try_` API to tell a short window apart from "no motion"
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_velocity_from_accel
//! ```

use imuquad_core::{
    Integrator, IntegratorConfig, IntegrationError, SampleWindow,
};

/// Samples per window; odd so each full window is pure Simpson
const WINDOW: usize = 51;

fn cart_acceleration(i: usize) -> f32 {
    match i {
        0..=99 => 1.5,    // accelerate for 1 s
        100..=299 => 0.0, // cruise for 2 s
        300..=399 => -1.5, // brake for 1 s
        _ => 0.0,
    }
}

fn main() {
    println!("=== imuquad: velocity from acceleration ===\n");

    let integrator = Integrator::new(IntegratorConfig::from_rate_hz(100.0));
    let mut window: SampleWindow<WINDOW> = SampleWindow::new();

    let mut speed = 0.0_f32;
    let mut travelled = 0.0_f32;

    // 420 samples: 8 full windows plus a short tail
    for i in 0..420 {
        if window.push(cart_acceleration(i)).is_err() {
            report(&integrator, &window, &mut speed, &mut travelled);
            window.clear();
            // Window was just cleared, so this cannot fail
            let _ = window.push(cart_acceleration(i));
        }
    }

    match integrator.try_velocity_change(window.as_slice()) {
        Ok(_) => report(&integrator, &window, &mut speed, &mut travelled),
        Err(IntegrationError::InsufficientSamples { required, available }) => {
            println!("tail window skipped: {} of {} samples", available, required);
        }
        Err(e) => println!("tail window error: {}", e),
    }

    println!("\nfinal speed estimate: {:.3} m/s", speed);
    println!("summed window displacement: {:.3} m", travelled);
}

fn report(
    integrator: &Integrator,
    window: &SampleWindow<WINDOW>,
    speed: &mut f32,
    travelled: &mut f32,
) {
    let dv = integrator.velocity_change(window.as_slice());
    let dx = integrator.position_change(window.as_slice());
    *speed += dv;
    *travelled += dx;
    println!(
        "window of {:>2} samples: dv = {:+.3} m/s, dx = {:+.4} m, speed = {:.3} m/s",
        window.len(),
        dv,
        dx,
        speed
    );
}
