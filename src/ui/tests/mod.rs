
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use crate::ui::console::Console;

/// In-memory `Write` whose contents stay readable after it is boxed into a `Console`.
#[derive(Debug, Default, Clone)]
pub(crate) struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A console writing into two buffers: `(console, stdout, stderr)`.
pub(crate) fn capture_console() -> (Console, SharedBuffer, SharedBuffer) {
    let out = SharedBuffer::default();
    let diag = SharedBuffer::default();
    let console = Console::with_writers(out.clone(), diag.clone());
    (console, out, diag)
}
