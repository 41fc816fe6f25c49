//! Minimal protobuf wire-format reader.
//!
//! Decodes just enough of the wire format to walk an ONNX file: varints,
//! length-delimited fields, and the two fixed-width scalar sizes so unknown
//! fields can be skipped. Group wire types (3 and 4) are long deprecated and
//! rejected.

use crate::onnx::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireType {
    Varint,
    Fixed64,
    LengthDelimited,
    Fixed32,
}

impl WireType {
    fn from_id(id: u64, offset: usize) -> Result<WireType, ParseError> {
        match id {
            0 => Ok(WireType::Varint),
            1 => Ok(WireType::Fixed64),
            2 => Ok(WireType::LengthDelimited),
            5 => Ok(WireType::Fixed32),
            other => Err(ParseError::UnsupportedWireType {
                wire_type: other as u8,
                offset,
            }),
        }
    }
}

/// Cursor over one serialized message (or sub-message slice).
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Reader<'a> {
        Reader { buf, pos: 0 }
    }

    /// True once every byte of the message has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.buf.len()
    }

    fn byte(&mut self) -> Result<u8, ParseError> {
        let b = *self.buf.get(self.pos).ok_or(ParseError::Truncated {
            offset: self.pos,
            needed: 1,
        })?;
        self.pos += 1;
        Ok(b)
    }

    /// Base-128 varint, at most 10 bytes (the encoding of any u64).
    pub fn varint(&mut self) -> Result<u64, ParseError> {
        let start = self.pos;
        let mut value: u64 = 0;
        for shift in (0..=63).step_by(7) {
            let b = self.byte()?;
            if shift == 63 && b > 1 {
                // 10th byte may only carry the final bit of a u64.
                return Err(ParseError::InvalidVarint { offset: start });
            }
            value |= u64::from(b & 0x7f) << shift;
            if b & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(ParseError::InvalidVarint { offset: start })
    }

    /// Reads the next field key, returning (field_number, wire_type).
    pub fn field(&mut self) -> Result<(u32, WireType), ParseError> {
        let offset = self.pos;
        let key = self.varint()?;
        let wire = WireType::from_id(key & 0x07, offset)?;
        Ok(((key >> 3) as u32, wire))
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], ParseError> {
        if self.buf.len() - self.pos < len {
            return Err(ParseError::Truncated {
                offset: self.pos,
                needed: len - (self.buf.len() - self.pos),
            });
        }
        let slice = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    /// Payload of a length-delimited field (sub-message, string, or bytes).
    pub fn bytes(&mut self) -> Result<&'a [u8], ParseError> {
        let len = self.varint()? as usize;
        self.take(len)
    }

    /// UTF-8 string payload of a length-delimited field.
    pub fn string(&mut self) -> Result<String, ParseError> {
        let offset = self.pos;
        let raw = self.bytes()?;
        String::from_utf8(raw.to_vec()).map_err(|_| ParseError::InvalidUtf8 { offset })
    }

    /// Discards one field's payload according to its wire type.
    pub fn skip(&mut self, wire: WireType) -> Result<(), ParseError> {
        match wire {
            WireType::Varint => {
                self.varint()?;
            }
            WireType::Fixed64 => {
                self.take(8)?;
            }
            WireType::LengthDelimited => {
                self.bytes()?;
            }
            WireType::Fixed32 => {
                self.take(4)?;
            }
        }
        Ok(())
    }
}
