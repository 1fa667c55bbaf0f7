//! Clipboard integration, compiled in only with the `clipboard` feature.

use anyhow::Result;

#[cfg(feature = "clipboard")]
pub fn copy_to_clipboard(content: &str) -> Result<()> {
    use anyhow::Context;
    let mut clipboard = arboard::Clipboard::new().context("Failed to open system clipboard")?;
    clipboard.set_text(content.to_string()).context("Failed to write to system clipboard")?;
    Ok(())
}

#[cfg(not(feature = "clipboard"))]
pub fn copy_to_clipboard(_content: &str) -> Result<()> {
    anyhow::bail!("wolfmt was built without clipboard support (enable the 'clipboard' feature)")
}
