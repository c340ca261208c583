/*! Line splitting with universal newlines.

`\n`, `\r\n` and a lone `\r` all end a line. Line endings are not part of the yielded lines.
A last line without line ending is yielded too.
!*/
use std::io::{self, BufRead, ErrorKind};

#[derive(Debug)]
pub struct UniversalLines<B> {
    reader: B,
}

impl<B: BufRead> UniversalLines<B> {
    pub fn new(reader: B) -> Self {
        Self { reader }
    }

    /// consume a `\n` directly following a `\r`.
    fn skip_lf(&mut self) -> io::Result<()> {
        loop {
            match self.reader.fill_buf() {
                Ok(next) => {
                    if next.first() == Some(&b'\n') {
                        self.reader.consume(1);
                    }
                    return Ok(());
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

fn into_string(buf: Vec<u8>) -> io::Result<String> {
    String::from_utf8(buf).map_err(|e| io::Error::new(ErrorKind::InvalidData, e))
}

impl<B: BufRead> Iterator for UniversalLines<B> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = Vec::new();
        loop {
            let available = match self.reader.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Some(Err(e)),
            };

            // eof
            if available.is_empty() {
                break;
            }

            match available.iter().position(|b| *b == b'\n' || *b == b'\r') {
                Some(pos) => {
                    let ending = available[pos];
                    buf.extend_from_slice(&available[..pos]);
                    self.reader.consume(pos + 1);
                    if ending == b'\r' {
                        if let Err(e) = self.skip_lf() {
                            return Some(Err(e));
                        }
                    }
                    return Some(into_string(buf));
                }
                None => {
                    let len = available.len();
                    buf.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }

        if buf.is_empty() {
            None
        } else {
            Some(into_string(buf))
        }
    }
}
