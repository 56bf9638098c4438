//! Console reporting of per-file progress.

use std::io::Write;
use std::path::Path;

/// Receives progress events while files are fixed.
pub trait Output {
    fn print_file(&mut self, file: &Path);
    fn skip_pair(&mut self);
    fn print_dates(&mut self, tag: u16, original: &str, updated: &str);
    fn print_offsets(&mut self, tag: u16, original: &str, updated: &str);
    fn done(&mut self, success: bool);
}

/// Plain-text reporter:
///
/// ```text
///  -- IMG_0001.jpg
///     0x0132 2023:11:05 17:42:51 -> 2023:11:05 16:42:51
///     0x9010 +03:00 -> +02:00
///     skip
///     done: ok
/// ```
pub struct CliOutput<W: Write> {
    writer: W,
    first: bool,
    indent: usize,
}

impl<W: Write> CliOutput<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            first: true,
            indent: 4,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn print_pair(&mut self, tag: u16, first: &str, second: &str) {
        let indent = self.indent;
        // Write errors on the console are ignored.
        let _ = writeln!(self.writer, "{:indent$}0x{tag:04x} {first} -> {second}", "");
    }
}

impl<W: Write> Output for CliOutput<W> {
    fn print_file(&mut self, file: &Path) {
        if !self.first {
            let _ = writeln!(self.writer);
        }
        self.first = false;
        let _ = writeln!(self.writer, " -- {}", file.display());
    }

    fn skip_pair(&mut self) {
        let indent = self.indent;
        let _ = writeln!(self.writer, "{:indent$}skip", "");
    }

    fn print_dates(&mut self, tag: u16, original: &str, updated: &str) {
        self.print_pair(tag, original, updated);
    }

    fn print_offsets(&mut self, tag: u16, original: &str, updated: &str) {
        self.print_pair(tag, original, updated);
    }

    fn done(&mut self, success: bool) {
        let indent = self.indent;
        let outcome = if success { "ok" } else { "fail" };
        let _ = writeln!(self.writer, "{:indent$}done: {outcome}", "");
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(events: impl FnOnce(&mut CliOutput<Vec<u8>>)) -> String {
        let mut output = CliOutput::new(Vec::new());
        events(&mut output);
        String::from_utf8(output.into_inner()).unwrap()
    }

    #[test]
    fn test_single_file_report() {
        let text = render(|out| {
            out.print_file(Path::new("a.jpg"));
            out.print_dates(0x0132, "2023:11:05 17:42:51", "2023:11:05 16:42:51");
            out.print_offsets(0x9010, "+03:00", "+02:00");
            out.skip_pair();
            out.done(true);
        });
        assert_eq!(
            text,
            " -- a.jpg\n    0x0132 2023:11:05 17:42:51 -> 2023:11:05 16:42:51\n    0x9010 +03:00 -> +02:00\n    skip\n    done: ok\n"
        );
    }

    #[test]
    fn test_blank_line_between_files() {
        let text = render(|out| {
            out.print_file(Path::new("a.jpg"));
            out.done(true);
            out.print_file(Path::new("b.jpg"));
            out.done(false);
        });
        assert_eq!(
            text,
            " -- a.jpg\n    done: ok\n\n -- b.jpg\n    done: fail\n"
        );
    }
}
