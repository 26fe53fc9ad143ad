//! # Replay Demo
//!
//! Minimal example demonstrating the basics of can-replay:
//! - Decode replay records into CAN frames
//! - Drive a full session over in-memory transport doubles
//!
//! This example uses `std` for a quick trial run. On hardware, implement
//! `SerialLink` over your UART and `CanBus` over your CAN controller.
//!
//! ```bash
//! cargo run --example replay_demo
//! ```

use std::collections::VecDeque;

use can_replay::decoder;
use can_replay::frame::CanFrame;
use can_replay::replay::ReplaySession;
use can_replay::traits::{can_bus::CanBus, serial_link::SerialLink};

/// Serial link fed from a canned script; acknowledgments go to stdout.
struct ScriptedLink {
    script: VecDeque<&'static str>,
}

impl SerialLink for ScriptedLink {
    type Error = &'static str;

    async fn read_line(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let line = self.script.pop_front().ok_or("host disconnected")?;
        let raw = line.as_bytes();
        let len = raw.len().min(buf.len());
        buf[..len].copy_from_slice(&raw[..len]);
        Ok(len)
    }

    async fn write_line(&mut self, line: &str) -> Result<(), Self::Error> {
        println!("   ← {line}");
        Ok(())
    }
}

/// Bus driver that prints each frame instead of touching hardware.
struct PrintingBus;

impl CanBus for PrintingBus {
    type Error = &'static str;

    async fn send(&mut self, frame: &CanFrame) -> Result<(), Self::Error> {
        let kind = if frame.extended { "ext" } else { "std" };
        print!("   → id=0x{:03X} ({kind}) dlc={} data=", frame.id, frame.len);
        for byte in &frame.data[..frame.len] {
            print!("{byte:02X} ");
        }
        println!();
        Ok(())
    }
}

#[tokio::main]
async fn main() {
    println!("=== can-replay Demo ===\n");

    // ======================================================================
    // 1. Decode single records
    // ======================================================================
    println!("1. Decoding records");

    for record in ["123456,090,4,10,1A,FF,5D", "0,800,1,FF", "bad"] {
        match decoder::decode(record) {
            Ok(frame) => println!("   {record:?} -> id=0x{:X} dlc={}", frame.id, frame.len),
            Err(e) => println!("   {record:?} -> dropped ({e})"),
        }
    }
    println!();

    // ======================================================================
    // 2. Run a full session
    // ======================================================================
    println!("2. Replaying a scripted session");

    let link = ScriptedLink {
        script: VecDeque::from([
            "1000,090,4,10,1A,FF,5D",
            "1100,7FF,2,AA,BB",
            "1200,00000800,1,FF",
            "not-a-record",
            "END",
        ]),
    };

    let mut session = ReplaySession::new(link, PrintingBus);
    match session.run().await {
        Ok(stats) => println!(
            "\n   Session over: {} sent, {} dropped, {} bus errors",
            stats.sent, stats.dropped, stats.bus_errors
        ),
        Err(e) => eprintln!("\n   Session aborted: {e:?}"),
    }

    println!("\nDemo complete.");
}
