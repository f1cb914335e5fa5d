use std::{
    fs::{File, OpenOptions},
    io::{self, Read},
    path::Path,
};

/// Opens an existing file for reading.
///
/// On Windows, other handles may only read the file for as long as
/// ours is open.
pub(crate) fn open_read(path: &Path) -> io::Result<File> {
    let mut opts = OpenOptions::new();

    #[cfg(windows)]
    {
        use std::os::windows::fs::OpenOptionsExt;
        const FILE_SHARE_READ: u32 = 0x1;
        opts.share_mode(FILE_SHARE_READ);
    }

    opts.read(true).open(path)
}

/// Creates a new file for writing or truncates an existing one.
///
/// The file mode is respected on UNIX platforms, but ignored
/// everywhere else. On Windows, no other handle may access the
/// file for as long as ours is open.
pub(crate) fn create_write(path: &Path, _mode: u32) -> io::Result<File> {
    let mut opts = OpenOptions::new();

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(_mode);
    }

    #[cfg(windows)]
    {
        use std::os::windows::fs::OpenOptionsExt;
        opts.share_mode(0);
    }

    opts.write(true).create(true).truncate(true).open(path)
}

#[cfg(unix)]
pub(crate) fn make_executable(file: &File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = file.metadata()?.permissions();
    let mut mode = permissions.mode();
    // Set execute permission wherever we currently have read permission.
    mode |= (mode & 0o444) >> 2;
    permissions.set_mode(mode);
    file.set_permissions(permissions)
}

#[cfg(not(unix))]
pub(crate) fn make_executable(_file: &File) -> io::Result<()> {
    // There are no executable permissions outside of UNIX.
    Ok(())
}

/// Reads from `reader` until `buf` is full or end of file is reached.
///
/// Returns the number of bytes that were filled in.
pub(crate) fn fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }

    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_stops_at_eof() {
        let mut buf = [0; 8];
        assert_eq!(fill(&mut &b"abc"[..], &mut buf).unwrap(), 3);
        assert_eq!(&buf[..3], b"abc");
    }

    #[test]
    fn fill_stops_when_full() {
        let mut buf = [0; 2];
        let mut src = &b"abcdef"[..];
        assert_eq!(fill(&mut src, &mut buf).unwrap(), 2);
        assert_eq!(src, b"cdef");
    }
}
