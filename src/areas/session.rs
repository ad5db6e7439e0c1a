use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::cell::{RefCell, RefMut};
use std::io::{self, Write};

/// Wrapper that implements `Write` for the minus pager
///
/// The minus pager doesn't implement `std::io::Write` directly, so this
/// wrapper adapts it to be compatible with Rust's standard I/O traits,
/// letting commands treat the pager as a drop-in replacement for stdout.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Owns the output sink for one command invocation.
///
/// Reports go through the pager when stdout is an interactive terminal and
/// `NO_PAGER` is unset; otherwise they stream straight to stdout. Commands
/// are implemented as methods on `Session` and write through [`writer`],
/// and [`close`] flushes the sink, handing control to the pager when one
/// was attached.
///
/// [`writer`]: Session::writer
/// [`close`]: Session::close
pub struct Session {
    writer: RefCell<Box<dyn Write>>,
    pager: Option<Pager>,
}

impl Session {
    pub fn open() -> Self {
        let paged = io::stdout().is_terminal() && std::env::var_os("NO_PAGER").is_none();

        if paged {
            let pager = Pager::new();
            Session {
                writer: RefCell::new(Box::new(PagerWriter::new(pager.clone()))),
                pager: Some(pager),
            }
        } else {
            Session {
                writer: RefCell::new(Box::new(io::stdout())),
                pager: None,
            }
        }
    }

    /// Session over an arbitrary sink, bypassing the pager policy.
    pub fn with_writer(writer: Box<dyn Write>) -> Self {
        Session {
            writer: RefCell::new(writer),
            pager: None,
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub fn close(self) -> anyhow::Result<()> {
        self.writer.borrow_mut().flush()?;

        if let Some(pager) = self.pager {
            minus::page_all(pager)?;
        }

        Ok(())
    }
}
