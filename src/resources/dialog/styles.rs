//! Style bits of dialog templates and their controls.
//!
//! A template's 32-bit `style` mixes dialog-specific bits (`DS_*`, low word) with generic window
//! bits (`WS_*`, high word); the same word on a control holds `WS_*` bits plus control-specific
//! bits in the low word. [`DialogStyle`] and [`WindowStyle`] each keep the raw value, so no bits
//! are lost when a template is decoded.

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    /// Dialog box styles (`DS_*`)
    pub struct DialogStyle: u32 {
        /// Absolute screen coordinates
        const DS_ABSALIGN = 0x0001;
        /// System modal
        const DS_SYSMODAL = 0x0002;
        /// 3D look
        const DS_3DLOOK = 0x0004;
        /// Fixed system font
        const DS_FIXEDSYS = 0x0008;
        /// No failure on control creation errors
        const DS_NOFAILCREATE = 0x0010;
        /// Edit controls use the application's local heap
        const DS_LOCALEDIT = 0x0020;
        /// The template carries a font block
        const DS_SETFONT = 0x0040;
        /// Modal frame
        const DS_MODALFRAME = 0x0080;
        /// No `WM_IDLE` messages
        const DS_NOIDLEMSG = 0x0100;
        /// Bring the dialog to the foreground
        const DS_SETFOREGROUND = 0x0200;
        /// Child dialog usable as a property page
        const DS_CONTROL = 0x0400;
        /// Centered in the working area
        const DS_CENTER = 0x0800;
        /// Centered on the mouse cursor
        const DS_CENTERMOUSE = 0x1000;
        /// Question mark in the title bar
        const DS_CONTEXTHELP = 0x2000;
        /// `DS_SETFONT | DS_FIXEDSYS`, the system shell font
        const DS_SHELLFONT = 0x0048;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    /// Generic window styles (`WS_*`)
    pub struct WindowStyle: u32 {
        /// Top-level pop-up window
        const WS_POPUP = 0x8000_0000;
        /// Child window
        const WS_CHILD = 0x4000_0000;
        /// Initially minimized
        const WS_MINIMIZE = 0x2000_0000;
        /// Initially visible
        const WS_VISIBLE = 0x1000_0000;
        /// Initially disabled
        const WS_DISABLED = 0x0800_0000;
        /// Clips sibling windows
        const WS_CLIPSIBLINGS = 0x0400_0000;
        /// Clips child windows
        const WS_CLIPCHILDREN = 0x0200_0000;
        /// Initially maximized
        const WS_MAXIMIZE = 0x0100_0000;
        /// Thin border
        const WS_BORDER = 0x0080_0000;
        /// Dialog frame border
        const WS_DLGFRAME = 0x0040_0000;
        /// Title bar (`WS_BORDER | WS_DLGFRAME`)
        const WS_CAPTION = 0x00C0_0000;
        /// Vertical scroll bar
        const WS_VSCROLL = 0x0020_0000;
        /// Horizontal scroll bar
        const WS_HSCROLL = 0x0010_0000;
        /// Window menu in the title bar
        const WS_SYSMENU = 0x0008_0000;
        /// Sizing border
        const WS_THICKFRAME = 0x0004_0000;
        /// First control of a group
        const WS_GROUP = 0x0002_0000;
        /// Reachable with TAB
        const WS_TABSTOP = 0x0001_0000;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    /// Extended window styles (`WS_EX_*`)
    pub struct ExtendedWindowStyle: u32 {
        /// Double border
        const WS_EX_DLGMODALFRAME = 0x0000_0001;
        /// No `WM_PARENTNOTIFY` to the parent
        const WS_EX_NOPARENTNOTIFY = 0x0000_0004;
        /// Above all non-topmost windows
        const WS_EX_TOPMOST = 0x0000_0008;
        /// Accepts drag-and-drop files
        const WS_EX_ACCEPTFILES = 0x0000_0010;
        /// Transparent
        const WS_EX_TRANSPARENT = 0x0000_0020;
        /// MDI child
        const WS_EX_MDICHILD = 0x0000_0040;
        /// Floating toolbar
        const WS_EX_TOOLWINDOW = 0x0000_0080;
        /// Raised edge border
        const WS_EX_WINDOWEDGE = 0x0000_0100;
        /// Sunken edge border
        const WS_EX_CLIENTEDGE = 0x0000_0200;
        /// Question mark in the title bar
        const WS_EX_CONTEXTHELP = 0x0000_0400;
        /// Right-aligned properties
        const WS_EX_RIGHT = 0x0000_1000;
        /// Right-to-left reading order
        const WS_EX_RTLREADING = 0x0000_2000;
        /// Vertical scroll bar on the left
        const WS_EX_LEFTSCROLLBAR = 0x0000_4000;
        /// Recursive TAB navigation into children
        const WS_EX_CONTROLPARENT = 0x0001_0000;
        /// Three-dimensional border for non-input items
        const WS_EX_STATICEDGE = 0x0002_0000;
        /// Top-level window on the taskbar
        const WS_EX_APPWINDOW = 0x0004_0000;
        /// Layered window
        const WS_EX_LAYERED = 0x0008_0000;
        /// No layout inheritance
        const WS_EX_NOINHERITLAYOUT = 0x0010_0000;
        /// Right-to-left layout
        const WS_EX_LAYOUTRTL = 0x0040_0000;
        /// Double-buffered painting of descendants
        const WS_EX_COMPOSITED = 0x0200_0000;
        /// Never activated by clicks
        const WS_EX_NOACTIVATE = 0x0800_0000;
    }
}

impl DialogStyle {
    /// The generic window styles carried in the same style word.
    #[must_use]
    pub fn window_style(self) -> WindowStyle {
        WindowStyle::from_bits_truncate(self.bits())
    }

    /// Returns `true` if the template carries a font block.
    ///
    /// `DS_SHELLFONT` includes the `DS_SETFONT` bit, so this covers both.
    #[must_use]
    pub fn has_font(self) -> bool {
        self.contains(DialogStyle::DS_SETFONT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_style_word() {
        let style = DialogStyle::from_bits_retain(0x90C8_00C8);
        assert!(style.has_font());
        assert!(style.contains(DialogStyle::DS_SHELLFONT | DialogStyle::DS_MODALFRAME));
        assert_eq!(
            style.window_style(),
            WindowStyle::WS_POPUP
                | WindowStyle::WS_VISIBLE
                | WindowStyle::WS_CAPTION
                | WindowStyle::WS_SYSMENU
        );
        assert_eq!(style.bits(), 0x90C8_00C8);

        assert!(!DialogStyle::DS_FIXEDSYS.has_font());
    }
}
