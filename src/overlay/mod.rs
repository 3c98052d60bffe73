//! Data appended to images by packers and copy-protection wrappers.
//!
//! The only table decoded here is the SecuROM `AddD` overlay, which records the files the
//! wrapper unpacks at runtime. See [`crate::overlay::decode_securom_addd`].

mod securom;

pub use securom::{decode_securom_addd, decode_securom_addd_with, SecuRomAddD, SecuRomAddDEntry};
