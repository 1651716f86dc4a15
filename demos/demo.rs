//! # Event bus demo
//!
//! Registers a few subscribers plus the built-in [`LogWriter`] observer,
//! publishes one event of each kind, then drains the queue.
//!
//! ## Run
//! ```bash
//! RUST_LOG=ringbus=debug cargo run --example demo --features logging
//! ```

use std::rc::Rc;

use ringbus::{Bus, BusConfig, Event, HandlerFn, LogWriter, priority};
use tracing_subscriber::EnvFilter;

const BUTTON_PRESS: u16 = 1;
const SENSOR_DATA: u16 = 2;
const SYSTEM_ALERT: u16 = 3;
const USER_LOGIN: u16 = 4;

fn on_button(label: &'static str) -> ringbus::HandlerRef {
    HandlerFn::rc("button", move |ev: &Event| {
        println!("[button] {label} pressed at {}ms (priority {})", ev.timestamp, ev.priority);
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let bus = Bus::new(BusConfig {
        trace: true,
        ..BusConfig::default()
    });
    bus.init()?;

    // Same closure, two contexts: each registration is its own handle.
    bus.subscribe(BUTTON_PRESS, on_button("start"))?;
    bus.subscribe(BUTTON_PRESS, on_button("stop"))?;

    bus.subscribe(
        SENSOR_DATA,
        HandlerFn::rc("sensor", |ev: &Event| {
            if let [hi, lo, ..] = ev.payload() {
                let raw = u16::from_be_bytes([*hi, *lo]);
                println!("[sensor] temperature {:.1} C", f32::from(raw) / 10.0);
            }
        }),
    )?;

    let alert_level = 3;
    bus.subscribe(
        SYSTEM_ALERT,
        HandlerFn::rc("alert", move |ev: &Event| {
            println!("[alert] level {alert_level} at {}ms", ev.timestamp);
        }),
    )?;

    bus.register_observer(Rc::new(LogWriter))?;

    bus.publish(BUTTON_PRESS, priority::HIGH, None)?;
    bus.publish(SENSOR_DATA, priority::NORMAL, Some(&[0x01, 0x68]))?;
    bus.publish(USER_LOGIN, priority::NORMAL, Some(b"admin\0"))?;
    bus.publish(SYSTEM_ALERT, priority::HIGH, Some("power fail".as_bytes()))?;

    let processed = bus.process();
    println!("processed {processed} events, {} still queued", bus.get_count());
    Ok(())
}
