use std::io::Read;

use encoding_rs::Encoding;

use crate::code_pair_reader::CodePairReader;
use crate::error::DxfResult;
use crate::CodePair;

/// A restartable cursor over the pair stream with one-pair put-back.
///
/// Every decoder above the tokeniser consumes through this type, so
/// grammar decisions are made on lookahead (`next` then `put_back`)
/// without ever rewinding the underlying stream.
pub(crate) struct CodePairBuffer<T: Read> {
    top: Vec<DxfResult<CodePair>>,
    reader: CodePairReader<T>,
}

impl<T: Read> CodePairBuffer<T> {
    pub fn from_reader(reader: CodePairReader<T>) -> Self {
        CodePairBuffer {
            top: vec![],
            reader,
        }
    }
    pub fn put_back(&mut self, item: DxfResult<CodePair>) {
        self.top.push(item);
    }
    /// Returns `true` if another pair can be read.
    pub fn items_remain(&mut self) -> bool {
        if !self.top.is_empty() {
            return true;
        }
        match self.reader.next() {
            Some(item) => {
                self.top.push(item);
                true
            }
            None => false,
        }
    }
    pub fn read_as_utf8(&mut self) {
        self.reader.read_as_utf8();
    }
    pub fn set_encoding(&mut self, encoding: &'static Encoding) {
        self.reader.set_encoding(encoding);
    }
}

impl<T: Read> Iterator for CodePairBuffer<T> {
    type Item = DxfResult<CodePair>;

    fn next(&mut self) -> Option<DxfResult<CodePair>> {
        match self.top.pop() {
            Some(item) => Some(item),
            None => self.reader.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_for(content: &'static str) -> CodePairBuffer<&'static [u8]> {
        CodePairBuffer::from_reader(CodePairReader::new(
            content.as_bytes(),
            encoding_rs::WINDOWS_1252,
        ))
    }

    #[test]
    fn put_back_is_returned_first() {
        let mut buffer = buffer_for("0\nSECTION\n0\nEOF\n");
        let first = buffer.next().unwrap().unwrap();
        assert_eq!(CodePair::new_str(0, "SECTION"), first);
        buffer.put_back(Ok(first));
        assert_eq!(
            CodePair::new_str(0, "SECTION"),
            buffer.next().unwrap().unwrap()
        );
        assert_eq!(CodePair::new_str(0, "EOF"), buffer.next().unwrap().unwrap());
        assert!(buffer.next().is_none());
    }

    #[test]
    fn items_remain_does_not_consume() {
        let mut buffer = buffer_for("0\nEOF\n");
        assert!(buffer.items_remain());
        assert!(buffer.items_remain());
        assert_eq!(CodePair::new_str(0, "EOF"), buffer.next().unwrap().unwrap());
        assert!(!buffer.items_remain());
    }
}
