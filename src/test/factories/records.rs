//! Factory methods for debug records and overlay tables.

use uguid::{guid, Guid};

use crate::test::BlobBuilder;

/// GUID stored by [`rsds_record`]
pub const RSDS_GUID: Guid = guid!("01234567-89ab-cdef-0123-456789abcdef");

/// `NB10` record: timestamp `0x4F3A1234`, age 3
pub fn nb10_record() -> Vec<u8> {
    let mut b = BlobBuilder::new();
    b.bytes(b"NB10").u32(0).u32(0x4F3A_1234).u32(3);
    b.ascii("C:\\build\\app.pdb");
    b.build()
}

/// `RSDS` record: [`RSDS_GUID`], age 1
pub fn rsds_record() -> Vec<u8> {
    let mut b = BlobBuilder::new();
    b.bytes(b"RSDS").bytes(&RSDS_GUID.to_bytes()).u32(1);
    b.ascii("D:\\a\\_work\\out\\tool.pdb");
    b.build()
}

/// SecuROM `AddD` table with build `0042` and `count` entries named `paul.dll`, `data1.dat`, ...
///
/// An empty `version` stores the 8-byte empty version slot the decoder skips.
pub fn securom_addd(version: &str, count: u32) -> Vec<u8> {
    let mut b = BlobBuilder::new();
    b.bytes(b"AddD").u32(count);
    if version.is_empty() {
        b.zeros(8);
    } else {
        b.ascii(version);
    }
    b.bytes(b"0042");

    let short = version.is_empty() || version.starts_with('3') || version.starts_with("4.47");
    b.zeros(if short { 44 } else { 112 });

    for index in 0..count {
        let name = if index == 0 {
            "paul.dll".to_string()
        } else {
            format!("data{index}.dat")
        };
        b.u32(0x1000 + index * 0x200).u32(0x200);
        b.u32(1).u32(2).u32(3).u32(4).u32(5).u32(6);
        b.fixed_ascii(&name, 12);
    }

    b.build()
}
