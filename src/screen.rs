//! Terminal ownership: everything done to the terminal before the first
//! frame and undone after the last one. Raw mode is toggled by the caller;
//! these functions only write commands.

use std::io::Write;

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};

/// Switch to the alternate screen, hide the cursor, set the title, and clear.
/// Any failure here is returned.
///
/// Then ask the terminal to tag key events as press / repeat / release, so a
/// held arrow key moves the player once rather than on every auto-repeat.
/// Returns whether that request went out; terminals that ignore it fall
/// back to reporting repeats as presses.
pub fn enter<W: Write>(out: &mut W, caption: &str) -> std::io::Result<bool> {
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(terminal::SetTitle(caption))?;
    out.execute(terminal::Clear(terminal::ClearType::All))?;

    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    if !keyboard_enhanced {
        log::warn!("terminal refused key event types; held keys will repeat");
    }
    Ok(keyboard_enhanced)
}

/// Undo `enter`. Best effort: the process is on its way out, so errors are
/// dropped.
pub fn leave<W: Write>(out: &mut W, keyboard_enhanced: bool) {
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
}
