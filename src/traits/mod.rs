//! Abstraction traits used by the replay core (CAN bus sink and serial link).
pub mod can_bus;
pub mod serial_link;
