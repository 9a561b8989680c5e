use clipboard::{ClipboardContext, ClipboardProvider};
use log::debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("failed to copy to clipboard: {0}")]
    Write(String),
}

/// Something that can receive copied text.
pub trait ClipboardWriter {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The desktop clipboard.
pub struct SystemClipboard {
    ctx: ClipboardContext,
}

impl SystemClipboard {
    pub fn new() -> Result<SystemClipboard, ClipboardError> {
        let ctx = ClipboardContext::new().map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
        Ok(SystemClipboard { ctx })
    }

    /// Opens the system clipboard, or `None` when this environment has none.
    pub fn probe() -> Option<Box<dyn ClipboardWriter>> {
        match SystemClipboard::new() {
            Ok(clipboard) => {
                debug!("system clipboard available");
                Some(Box::new(clipboard))
            }
            Err(err) => {
                debug!("{}", err);
                None
            }
        }
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.ctx
            .set_contents(text.to_string())
            .map_err(|err| ClipboardError::Write(err.to_string()))
    }
}
