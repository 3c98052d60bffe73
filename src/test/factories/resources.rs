//! Factory methods for resource blobs.

use crate::test::BlobBuilder;

/// End offset of the first control in [`dialog_normal`]
pub const DIALOG_NORMAL_FIRST_ITEM_END: usize = 96;

/// Classic `DLGTEMPLATE` with `DS_SETFONT`, an ordinal menu and two controls
pub fn dialog_normal() -> Vec<u8> {
    let mut b = BlobBuilder::new();
    // WS_POPUP | WS_CAPTION | WS_SYSMENU | DS_MODALFRAME | DS_SETFONT
    b.u32(0x80C8_00C0).u32(0).u16(2);
    b.i16(10).i16(20).i16(200).i16(-1);
    b.u16(0xFFFF).u16(0x65); // menu
    b.u16(0); // class
    b.wide("About"); // title
    b.u16(8).wide("MS Shell Dlg");
    b.align(4);

    // OK button
    b.u32(0x5001_0001).u32(0);
    b.i16(140).i16(10).i16(50).i16(14).u16(1);
    b.u16(0xFFFF).u16(0x0080);
    b.wide("OK");
    b.u16(0);
    b.align(4);
    assert_eq!(b.len(), DIALOG_NORMAL_FIRST_ITEM_END);

    // Named class, icon ordinal as title, two bytes of creation data
    b.u32(0x5000_0000).u32(0);
    b.i16(10).i16(10).i16(120).i16(8).u16(0xFFFF);
    b.wide("SysLink");
    b.u16(0xFFFF).u16(3);
    b.u16(2).bytes(&[0xDE, 0xAD]);
    b.align(4);

    b.build()
}

/// `DLGTEMPLATEEX` with `DS_SHELLFONT`, a class name and one control
pub fn dialog_extended() -> Vec<u8> {
    let mut b = BlobBuilder::new();
    b.u16(1).u16(0xFFFF).u32(0x1234);
    b.u32(0x0001_0000); // WS_EX_CONTROLPARENT
    b.u32(0x80C0_00C8); // WS_POPUP | WS_CAPTION | DS_MODALFRAME | DS_SHELLFONT
    b.u16(1);
    b.i16(0).i16(0).i16(300).i16(200);
    b.u16(0); // menu
    b.wide("MyDialogClass");
    b.wide("Settings");
    b.u16(9).u16(700).u8(1).u8(1).wide("Segoe UI");
    b.align(4);

    b.u32(7).u32(0).u32(0x5081_0080);
    b.i16(5).i16(5).i16(100).i16(12).u32(0x0001_0001);
    b.u16(0xFFFF).u16(0x0081);
    b.u16(0); // empty title
    b.u16(3).bytes(&[1, 2, 3]);
    b.align(4);

    b.build()
}

/// Classic menu: a popup followed by two command items
pub fn menu_normal() -> Vec<u8> {
    let mut b = BlobBuilder::new();
    b.u16(0).u16(0);

    // MF_POPUP type, state, id, res_info MF_POPUP | MF_END
    b.u32(0x10).u32(0).u32(0).u32(0x90).wide("&File");
    b.align(4);
    b.u16(0).wide("&Open");
    b.align(4);
    b.u16(0x80).wide("E&xit");
    b.align(4);

    b.build()
}

/// `MENUEX` with a submenu item and a checked command
///
/// The offset word at 2 is both the layout marker and the absolute item offset, so the first
/// item starts at byte 1 and overlaps the header: its type `0x100` supplies version 0, offset 1
/// and the low byte of the help id.
pub fn menu_extended() -> Vec<u8> {
    let mut b = BlobBuilder::new();
    b.u8(0);

    b.u32(0x100).u32(0).u32(100).u16(0x01).wide("&Edit");
    b.align(4);
    b.u32(0).u32(0x08).u32(200).u16(0x80).wide("&Copy");
    b.align(4);

    b.build()
}

/// Message table with a UTF-16 block (ids 1-2) and an ANSI block (id 0x100)
pub fn message_table() -> Vec<u8> {
    let mut b = BlobBuilder::new();
    b.u32(2);
    b.u32(1).u32(2).u32(0);
    b.u32(0x100).u32(0x100).u32(0);

    let first = b.len();
    b.patch_u32(12, u32::try_from(first).unwrap());
    message_entry_wide(&mut b, "First\r\n");
    message_entry_wide(&mut b, "Second");

    let second = b.len();
    b.patch_u32(24, u32::try_from(second).unwrap());
    b.u16(12).u16(0).bytes(b"Narrow\0\0");

    b.build()
}

fn message_entry_wide(b: &mut BlobBuilder, text: &str) {
    let mut body = BlobBuilder::new();
    body.wide(text).align(4);
    let body = body.build();

    b.u16(u16::try_from(body.len() + 4).unwrap()).u16(1).bytes(&body);
}

/// Font directory with two raster fonts
pub fn font_group() -> Vec<u8> {
    let mut b = BlobBuilder::new();
    b.u16(2);
    font_dir_entry(&mut b, 1, 400, "Terminal");
    font_dir_entry(&mut b, 2, 700, "Terminal Bold");
    b.build()
}

fn font_dir_entry(b: &mut BlobBuilder, ordinal: u16, weight: u16, face: &str) {
    b.u16(ordinal);
    b.u16(0x0300).u32(0x1000);
    b.fixed_ascii("Copyright Contoso", 60);
    b.u16(0).u16(10).u16(96).u16(96).u16(12).u16(2).u16(0);
    b.u8(0).u8(0).u8(0);
    b.u16(weight);
    b.u8(0);
    b.u16(8).u16(12);
    b.u8(0x31);
    b.u16(8).u16(8);
    b.u8(0x20).u8(0xFF).u8(0x3F).u8(0x20);
    b.u16(0);
    b.u32(0).u32(0x200).u32(0);
    b.prefixed_ascii("").prefixed_ascii(face);
}

/// Build one version-info block with back-patched `wLength`
pub fn version_block(
    key: &str,
    value_length: u16,
    value_type: u16,
    value: &[u8],
    children: &[Vec<u8>],
) -> Vec<u8> {
    let mut b = BlobBuilder::new();
    b.u16(0).u16(value_length).u16(value_type).wide(key);
    b.align(4).bytes(value);
    for child in children {
        b.align(4).bytes(child);
    }

    let length = u16::try_from(b.len()).unwrap();
    b.patch_u16(0, length);
    b.build()
}

/// `VS_FIXEDFILEINFO` with `file_flags_mask` = `DEBUG | PRERELEASE`
pub fn fixed_file_info(
    file_ms: u32,
    file_ls: u32,
    product_ms: u32,
    product_ls: u32,
    flags: u32,
) -> Vec<u8> {
    let mut b = BlobBuilder::new();
    b.u32(0xFEEF_04BD).u32(0x0001_0000);
    b.u32(file_ms).u32(file_ls).u32(product_ms).u32(product_ls);
    b.u32(0x03).u32(flags);
    b.u32(0x0004_0004).u32(1).u32(0);
    b.u32(0).u32(0);
    b.build()
}

fn version_string(key: &str, value: &str) -> Vec<u8> {
    let mut text = BlobBuilder::new();
    text.wide(value);
    let units = u16::try_from(value.encode_utf16().count() + 1).unwrap();
    version_block(key, units, 1, &text.build(), &[])
}

fn translation(language: u16, code_page: u16) -> Vec<u8> {
    let mut value = BlobBuilder::new();
    value.u16(language).u16(code_page);
    let var = version_block("Translation", 4, 0, &value.build(), &[]);
    version_block("VarFileInfo", 0, 1, &[], &[var])
}

/// Complete `VS_VERSIONINFO`: fixed info 1.2.3.4, en-US string table and translation
pub fn version_info() -> Vec<u8> {
    let table = version_block(
        "040904B0",
        0,
        1,
        &[],
        &[
            version_string("CompanyName", "Contoso"),
            version_string("FileVersion", "1.2.3.4"),
            version_string("Comments", ""),
            version_string("ProductName", "Widget"),
        ],
    );
    let string_file_info = version_block("StringFileInfo", 0, 1, &[], &[table]);

    let fixed = fixed_file_info(0x0001_0002, 0x0003_0004, 0x0005_0006, 0, 0x02);
    version_block(
        "VS_VERSION_INFO",
        52,
        0,
        &fixed,
        &[string_file_info, translation(0x0409, 0x04B0)],
    )
}

/// `VS_VERSIONINFO` without fixed info, `VarFileInfo` stored first
pub fn version_info_var_first() -> Vec<u8> {
    let table = version_block(
        "040704B0",
        0,
        1,
        &[],
        &[version_string("ProductName", "Widget")],
    );
    let string_file_info = version_block("StringFileInfo", 0, 1, &[], &[table]);

    version_block(
        "VS_VERSION_INFO",
        0,
        0,
        &[],
        &[translation(0x0407, 0x04B0), string_file_info],
    )
}
