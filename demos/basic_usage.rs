// ============================================================================
// Basic Usage Example
// ============================================================================

use digit_picker::prelude::*;
use std::sync::Arc;

/// Stand-in for a platform number wheel
#[derive(Debug, Default)]
struct ConsoleWheel {
    value: u8,
    live_min: u8,
    live_max: u8,
}

impl DigitWheel for ConsoleWheel {
    fn value(&self) -> u8 {
        self.value
    }

    fn set_value(&mut self, value: u8) {
        self.value = value.clamp(self.live_min, self.live_max);
    }

    fn set_live_bounds(&mut self, live_min: u8, live_max: u8) {
        self.live_min = live_min;
        self.live_max = live_max;
        self.value = self.value.clamp(live_min, live_max);
    }
}

fn print_wheels(wheels: &[ConsoleWheel]) {
    for (position, wheel) in wheels.iter().enumerate() {
        println!(
            "  wheel {}: {} (allowed {}..={})",
            position, wheel.value, wheel.live_min, wheel.live_max
        );
    }
}

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Digit Picker Example ===\n");

    let config = match PickerConfig::from_f32(0.0, 9.5, Some(3.5)) {
        Ok(config) => config.with_title("Rating"),
        Err(err) => {
            eprintln!("Invalid picker: {}", err);
            return;
        },
    };

    let mut session = match PickerSession::open(config, Arc::new(LoggingEventHandler)) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("Invalid picker: {}", err);
            return;
        },
    };

    let mut wheels: Vec<ConsoleWheel> = (0..session.vector().len())
        .map(|_| ConsoleWheel::default())
        .collect();
    session.sync(&mut wheels);

    println!("Opened '{}' at {}", session.title().unwrap_or(""), session.snapshot().display);
    print_wheels(&wheels);

    // Spin the ones wheel to its top: the tenths wheel can now only reach 5
    println!("\nSpinning the ones wheel to 9...");
    while session.vector()[0].value() != 9 {
        session.step(0, Direction::Up);
    }
    session.sync(&mut wheels);
    print_wheels(&wheels);

    println!("\nSpinning the tenths wheel up twice...");
    session.step(1, Direction::Up);
    session.step(1, Direction::Up);
    session.sync(&mut wheels);
    print_wheels(&wheels);
    println!("Current value: {}", session.neutral());

    println!("\nResetting...");
    session.reset();
    session.sync(&mut wheels);
    println!("Current value: {}", session.combined_value());

    let value = session.confirm();
    println!("\nConfirmed: {}", value);

    // Whole-number picker with a carry between wheels
    println!("\n=== Carry Example ===\n");
    let mut vector = match create_vector(0.0, 999.0, Some(199.0)) {
        Ok(vector) => vector,
        Err(err) => {
            eprintln!("Invalid picker: {}", err);
            return;
        },
    };
    println!("Before: {}", combined_value(&vector));

    if let Some(report) = step(&mut vector, 2, Direction::Up) {
        println!("Carry outcome: {:?}", report.carry);
    }
    println!("After:  {}", combined_value(&vector));
}
