use super::OutputError;
use crate::animation::Channel;
use image::Rgb;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Encode a channel value as exactly two uppercase hex digits
pub(crate) fn encode_hex(value: u8) -> String {
    hex::encode_upper([value])
}

/// One buffered text stream per color channel
struct ChannelStream {
    path: PathBuf,
    writer: BufWriter<File>,
}

/// Writer for the `red.txt`, `green.txt` and `blue.txt` streams.
///
/// All three files are opened together on creation and closed when the writer is
/// dropped, so an early return anywhere in a run still releases them. Call
/// [`HexChannelWriter::finish`] on the success path to surface flush errors.
pub(crate) struct HexChannelWriter {
    streams: [ChannelStream; 3],
    lines_written: u64,
}

impl HexChannelWriter {
    /// Create (or truncate) the three channel files inside `dir`
    pub(crate) fn create(dir: &Path) -> Result<Self, OutputError> {
        let open = |channel| {
            let path = Self::channel_path(dir, channel);
            match File::create(&path) {
                Ok(file) => Ok(ChannelStream { path, writer: BufWriter::new(file) }),
                Err(source) => Err(OutputError::Io { path, source }),
            }
        };
        let streams = [open(Channel::Red)?, open(Channel::Green)?, open(Channel::Blue)?];
        Ok(Self { streams, lines_written: 0 })
    }

    /// Location of a channel's file inside `dir`
    pub(crate) fn channel_path(dir: &Path, channel: Channel) -> PathBuf {
        dir.join(format!("{channel}.txt"))
    }

    /// Append one line per channel for the given pixel
    pub(crate) fn write_pixel(&mut self, pixel: &Rgb<u8>) -> Result<(), OutputError> {
        for (stream, value) in self.streams.iter_mut().zip(pixel.0) {
            writeln!(stream.writer, "{}", encode_hex(value))
                .map_err(|source| OutputError::Io { path: stream.path.clone(), source })?;
        }
        self.lines_written += 1;
        Ok(())
    }

    /// Lines written to each channel so far
    pub(crate) fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Flush and close all streams, returning the number of lines per channel
    pub(crate) fn finish(self) -> Result<u64, OutputError> {
        let lines_written = self.lines_written;
        for ChannelStream { path, writer } in self.streams {
            writer.into_inner().map_err(|e| OutputError::Io { path, source: e.into_error() })?;
        }
        Ok(lines_written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero(0, "00")]
    #[case::padded(5, "05")]
    #[case::letters(0xAB, "AB")]
    #[case::max(255, "FF")]
    fn two_uppercase_digits(#[case] value: u8, #[case] expected: &str) {
        assert_eq!(encode_hex(value), expected);
    }

    #[test]
    fn writes_one_line_per_channel() {
        let dir = tempfile::tempdir().expect("no tempdir");
        let mut writer = HexChannelWriter::create(dir.path()).expect("create failed");
        writer.write_pixel(&Rgb([0xFF, 0x1E, 0x00])).expect("write failed");
        writer.write_pixel(&Rgb([0x05, 0xA0, 0x7F])).expect("write failed");
        assert_eq!(writer.finish().expect("finish failed"), 2);

        let read = |name: &str| std::fs::read_to_string(dir.path().join(name)).expect("read failed");
        assert_eq!(read("red.txt"), "FF\n05\n");
        assert_eq!(read("green.txt"), "1E\nA0\n");
        assert_eq!(read("blue.txt"), "00\n7F\n");
    }

    #[test]
    fn create_truncates_previous_output() {
        let dir = tempfile::tempdir().expect("no tempdir");
        std::fs::write(dir.path().join("red.txt"), "stale\n").expect("seed failed");
        let writer = HexChannelWriter::create(dir.path()).expect("create failed");
        assert_eq!(writer.finish().expect("finish failed"), 0);
        assert_eq!(std::fs::read_to_string(dir.path().join("red.txt")).expect("read failed"), "");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().expect("no tempdir");
        let result = HexChannelWriter::create(&dir.path().join("nope"));
        assert!(matches!(result, Err(OutputError::Io { path, .. }) if path.ends_with("red.txt")));
    }
}
