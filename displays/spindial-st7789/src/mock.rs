//! Recording display bus for host tests

use std::vec::Vec;

use spindial_hal::{BusPin, DisplayBus, BURST_LEN};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Pin(BusPin, bool),
    Send(Vec<u8>),
    Wait,
    Delay(u32),
}

/// One chip-select framed transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Txn {
    Command(u8),
    /// Data bytes, one entry per burst
    Data(Vec<Vec<u8>>),
}

impl Txn {
    /// All data bytes of the transaction, flattened
    pub fn bytes(&self) -> Vec<u8> {
        match self {
            Txn::Command(c) => std::vec![*c],
            Txn::Data(bursts) => bursts.concat(),
        }
    }
}

#[derive(Debug, Default)]
pub struct MockBus {
    pub ops: Vec<Op>,
}

impl DisplayBus for MockBus {
    fn send(&mut self, bytes: &[u8]) {
        assert!(bytes.len() <= BURST_LEN, "burst of {} bytes", bytes.len());
        self.ops.push(Op::Send(bytes.to_vec()));
    }

    fn wait_send_end(&mut self) {
        self.ops.push(Op::Wait);
    }

    fn set_pin(&mut self, pin: BusPin, high: bool) {
        self.ops.push(Op::Pin(pin, high));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.ops.push(Op::Delay(ms));
    }
}

impl MockBus {
    /// Decode the log into transactions, checking the framing rules:
    /// every burst is waited on before the next burst or deselect, and
    /// bytes only move while the chip is selected.
    pub fn transactions(&self) -> Vec<Txn> {
        let mut txns = Vec::new();
        let mut selected = false;
        let mut data_mode = false;
        let mut pending_wait = false;
        let mut bursts: Vec<Vec<u8>> = Vec::new();

        for op in &self.ops {
            match op {
                Op::Pin(BusPin::DataCommand, high) => data_mode = *high,
                Op::Pin(BusPin::ChipSelect, false) => {
                    assert!(!selected, "nested chip select");
                    selected = true;
                    bursts.clear();
                }
                Op::Pin(BusPin::ChipSelect, true) => {
                    assert!(!pending_wait, "deselected before burst completed");
                    if selected {
                        if data_mode {
                            txns.push(Txn::Data(core::mem::take(&mut bursts)));
                        } else {
                            let bytes = bursts.concat();
                            assert_eq!(bytes.len(), 1, "command transaction carries one byte");
                            txns.push(Txn::Command(bytes[0]));
                            bursts.clear();
                        }
                    }
                    selected = false;
                }
                Op::Send(bytes) => {
                    assert!(selected, "send while deselected");
                    assert!(!pending_wait, "burst issued before previous completed");
                    bursts.push(bytes.clone());
                    pending_wait = true;
                }
                Op::Wait => pending_wait = false,
                Op::Pin(_, _) | Op::Delay(_) => {}
            }
        }

        assert!(!selected, "left selected");
        txns
    }

    /// Commands in the order they were issued
    pub fn commands(&self) -> Vec<u8> {
        self.transactions()
            .iter()
            .filter_map(|t| match t {
                Txn::Command(c) => Some(*c),
                Txn::Data(_) => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}
