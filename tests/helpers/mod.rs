/// Test doubles simulating the serial link and the CAN bus driver during
/// integration tests.
use can_replay::frame::CanFrame;
use can_replay::traits::{can_bus::CanBus, serial_link::SerialLink};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
#[allow(dead_code)]
/// In-memory serial link replaying a scripted sequence of inbound lines and
/// recording every outbound line.
pub struct MockSerialLink {
    script: Arc<Mutex<VecDeque<Vec<u8>>>>,
    written: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockSerialLink {
    /// Build a link whose inbound side yields `lines` in order, each
    /// terminated with CRLF the way the host-side tooling writes them.
    pub fn scripted(lines: &[&str]) -> Self {
        let script = lines
            .iter()
            .map(|line| format!("{line}\r\n").into_bytes())
            .collect();
        Self {
            script: Arc::new(Mutex::new(script)),
            written: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Lines written on the outbound side so far (acknowledgments).
    pub async fn written(&self) -> Vec<String> {
        self.written.lock().await.clone()
    }

    /// Inbound lines the session has not consumed yet.
    pub async fn pending(&self) -> usize {
        self.script.lock().await.len()
    }
}

impl SerialLink for MockSerialLink {
    type Error = ();

    async fn read_line(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let mut script = self.script.lock().await;
        // An exhausted script behaves like a host disconnect.
        let line = script.pop_front().ok_or(())?;
        let len = line.len().min(buf.len());
        buf[..len].copy_from_slice(&line[..len]);
        Ok(len)
    }

    async fn write_line(&mut self, line: &str) -> Result<(), Self::Error> {
        self.written.lock().await.push(line.to_string());
        Ok(())
    }
}

#[derive(Clone)]
#[allow(dead_code)]
/// In-memory CAN bus recording every transmitted frame, with optional
/// per-identifier rejection to simulate driver failures.
pub struct MockCanBus {
    sent: Arc<Mutex<Vec<CanFrame>>>,
    reject_ids: Vec<u32>,
}

#[allow(dead_code)]
impl MockCanBus {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            reject_ids: Vec::new(),
        }
    }

    /// Bus that refuses every frame whose identifier appears in `ids`.
    pub fn rejecting(ids: &[u32]) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            reject_ids: ids.to_vec(),
        }
    }

    /// Frames accepted by the bus so far, in transmission order.
    pub async fn sent(&self) -> Vec<CanFrame> {
        self.sent.lock().await.clone()
    }
}

impl CanBus for MockCanBus {
    type Error = ();

    async fn send<'a>(&'a mut self, frame: &'a CanFrame) -> Result<(), Self::Error> {
        if self.reject_ids.contains(&frame.id) {
            return Err(());
        }
        self.sent.lock().await.push(*frame);
        Ok(())
    }
}
