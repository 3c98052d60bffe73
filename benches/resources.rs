#![allow(unused)]
extern crate rsrcscope;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rsrcscope::resources::{decode_dialog, decode_string_table, decode_version_info};
use std::hint::black_box;

fn push_wide(data: &mut Vec<u8>, text: &str) {
    for unit in text.encode_utf16().chain(std::iter::once(0)) {
        data.extend_from_slice(&unit.to_le_bytes());
    }
}

fn align(data: &mut Vec<u8>) {
    while data.len() % 4 != 0 {
        data.push(0);
    }
}

/// Classic dialog with a font and `count` button controls
fn dialog(count: u16) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&0x80C8_00C0u32.to_le_bytes());
    data.extend_from_slice(&0u32.to_le_bytes());
    data.extend_from_slice(&count.to_le_bytes());
    data.extend_from_slice(&[0; 8]);
    data.extend_from_slice(&[0; 4]);
    push_wide(&mut data, "Benchmark");
    data.extend_from_slice(&8u16.to_le_bytes());
    push_wide(&mut data, "MS Shell Dlg");
    align(&mut data);

    for id in 0..count {
        data.extend_from_slice(&0x5001_0000u32.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&[0; 8]);
        data.extend_from_slice(&id.to_le_bytes());
        data.extend_from_slice(&[0xFF, 0xFF, 0x80, 0x00]);
        push_wide(&mut data, &format!("Button {id}"));
        data.extend_from_slice(&0u16.to_le_bytes());
        align(&mut data);
    }
    data
}

/// Full 16-slot string table block
fn string_table() -> Vec<u8> {
    let mut data = Vec::new();
    for slot in 0..16 {
        let text = format!("String table entry number {slot}\r\n");
        let units: Vec<u16> = text.encode_utf16().collect();
        data.extend_from_slice(&u16::try_from(units.len()).unwrap().to_le_bytes());
        for unit in units {
            data.extend_from_slice(&unit.to_le_bytes());
        }
    }
    data
}

fn version_block(
    key: &str,
    value_length: u16,
    value_type: u16,
    value: &[u8],
    children: &[Vec<u8>],
) -> Vec<u8> {
    let mut data = vec![0, 0];
    data.extend_from_slice(&value_length.to_le_bytes());
    data.extend_from_slice(&value_type.to_le_bytes());
    push_wide(&mut data, key);
    align(&mut data);
    data.extend_from_slice(value);
    for child in children {
        align(&mut data);
        data.extend_from_slice(child);
    }

    let length = u16::try_from(data.len()).unwrap();
    data[..2].copy_from_slice(&length.to_le_bytes());
    data
}

/// Version info with fixed info and a dozen strings
fn version_info() -> Vec<u8> {
    let strings: Vec<Vec<u8>> = (0..12)
        .map(|i| {
            let mut value = Vec::new();
            let text = format!("Value {i}");
            push_wide(&mut value, &text);
            let units = u16::try_from(text.encode_utf16().count() + 1).unwrap();
            version_block(&format!("Key{i}"), units, 1, &value, &[])
        })
        .collect();
    let table = version_block("040904B0", 0, 1, &[], &strings);
    let string_file_info = version_block("StringFileInfo", 0, 1, &[], &[table]);

    let translation = version_block("Translation", 4, 0, &[0x09, 0x04, 0xB0, 0x04], &[]);
    let var_file_info = version_block("VarFileInfo", 0, 1, &[], &[translation]);

    let mut fixed = Vec::new();
    fixed.extend_from_slice(&0xFEEF_04BDu32.to_le_bytes());
    fixed.extend_from_slice(&[0; 48]);
    version_block(
        "VS_VERSION_INFO",
        52,
        0,
        &fixed,
        &[string_file_info, var_file_info],
    )
}

fn bench_decoders(c: &mut Criterion) {
    let dialog = dialog(64);
    let strings = string_table();
    let version = version_info();

    let mut group = c.benchmark_group("resources");

    group.throughput(Throughput::Bytes(dialog.len() as u64));
    group.bench_function("decode_dialog", |b| {
        b.iter(|| black_box(decode_dialog(black_box(&dialog)).unwrap()));
    });

    group.throughput(Throughput::Bytes(strings.len() as u64));
    group.bench_function("decode_string_table", |b| {
        b.iter(|| black_box(decode_string_table(black_box(&strings)).unwrap()));
    });

    group.throughput(Throughput::Bytes(version.len() as u64));
    group.bench_function("decode_version_info", |b| {
        b.iter(|| black_box(decode_version_info(black_box(&version)).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_decoders);
criterion_main!(benches);
