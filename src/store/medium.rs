use std::io::Cursor;
use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;
use std::io::Write;

/// Random-access bytes a ledger can be persisted to.
///
/// Beyond reading, writing, and seeking, a medium must be able to drop
/// everything past a given length, so a shorter document never leaves
/// stale bytes from a longer one behind it.
pub trait Medium: Read + Write + Seek + Send {
    fn truncate(&mut self, len: u64) -> std::io::Result<()>;

    /// Replaces the whole content with `bytes`:
    /// seek to the start, write, cut off the tail, flush.
    fn rewrite(&mut self, bytes: &[u8]) -> std::io::Result<()> {
        self.seek(SeekFrom::Start(0))?;
        self.write_all(bytes)?;
        self.truncate(bytes.len() as u64)?;
        self.flush()
    }

    /// Current length in bytes. Leaves the cursor at the start.
    fn size(&mut self) -> std::io::Result<u64> {
        let len = self.seek(SeekFrom::End(0))?;
        self.seek(SeekFrom::Start(0))?;
        Ok(len)
    }
}

impl Medium for std::fs::File {
    fn truncate(&mut self, len: u64) -> std::io::Result<()> {
        self.set_len(len)
    }
}

impl Medium for Cursor<Vec<u8>> {
    fn truncate(&mut self, len: u64) -> std::io::Result<()> {
        self.get_mut().truncate(len as usize);
        Ok(())
    }
}

/// Serves a fixed document and refuses every write,
/// like a full disk or a file whose permissions changed underneath us.
#[cfg(test)]
pub struct ReadOnly(Cursor<Vec<u8>>);

#[cfg(test)]
impl From<&str> for ReadOnly {
    fn from(json: &str) -> Self {
        Self(Cursor::new(json.as_bytes().to_vec()))
    }
}

#[cfg(test)]
impl Read for ReadOnly {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.0.read(buf)
    }
}

#[cfg(test)]
impl Write for ReadOnly {
    fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
        Err(std::io::ErrorKind::PermissionDenied.into())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
impl Seek for ReadOnly {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        self.0.seek(pos)
    }
}

#[cfg(test)]
impl Medium for ReadOnly {
    fn truncate(&mut self, _: u64) -> std::io::Result<()> {
        Err(std::io::ErrorKind::PermissionDenied.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrite_drops_stale_tail() {
        let mut cursor = Cursor::new(b"[{\"Name\":\"Cleo\",\"Wins\":10}]".to_vec());
        cursor.rewrite(b"[]").unwrap();
        assert_eq!(cursor.get_ref().as_slice(), b"[]");
    }

    #[test]
    fn size_rewinds() {
        let mut cursor = Cursor::new(b"[1,2,3]".to_vec());
        cursor.seek(SeekFrom::Start(3)).unwrap();
        assert_eq!(cursor.size().unwrap(), 7);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn file_rewrite_shrinks() {
        let mut file = tempfile::tempfile().unwrap();
        file.write_all(b"0123456789").unwrap();
        file.rewrite(b"abc").unwrap();
        let mut content = String::new();
        file.seek(SeekFrom::Start(0)).unwrap();
        file.read_to_string(&mut content).unwrap();
        assert_eq!(content, "abc");
    }

    #[test]
    fn read_only_refuses_rewrite() {
        let mut medium = ReadOnly::from("[]");
        assert!(medium.rewrite(b"[1]").is_err());
        let mut content = String::new();
        medium.seek(SeekFrom::Start(0)).unwrap();
        medium.read_to_string(&mut content).unwrap();
        assert_eq!(content, "[]");
    }
}
