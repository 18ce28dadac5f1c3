use crate::error::{ErrorCode, LwmaError};

pub struct Reader<'a> {
    b: &'a [u8],
    off: usize,
}

impl<'a> Reader<'a> {
    pub fn new(b: &'a [u8]) -> Self {
        Self { b, off: 0 }
    }

    pub fn offset(&self) -> usize {
        self.off
    }

    fn take(&mut self, n: usize, what: &'static str) -> Result<&'a [u8], LwmaError> {
        if self.b.len() - self.off < n {
            return Err(LwmaError::new(
                ErrorCode::HeaderErrParse,
                format!("unexpected EOF ({what})"),
            ));
        }
        let v = &self.b[self.off..self.off + n];
        self.off += n;
        Ok(v)
    }

    pub fn read_u8(&mut self) -> Result<u8, LwmaError> {
        Ok(self.take(1, "u8")?[0])
    }

    pub fn read_u16_le(&mut self) -> Result<u16, LwmaError> {
        let mut v = [0u8; 2];
        v.copy_from_slice(self.take(2, "u16le")?);
        Ok(u16::from_le_bytes(v))
    }

    pub fn read_u32_le(&mut self) -> Result<u32, LwmaError> {
        let mut v = [0u8; 4];
        v.copy_from_slice(self.take(4, "u32le")?);
        Ok(u32::from_le_bytes(v))
    }

    pub fn read_u64_le(&mut self) -> Result<u64, LwmaError> {
        let mut v = [0u8; 8];
        v.copy_from_slice(self.take(8, "u64le")?);
        Ok(u64::from_le_bytes(v))
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], LwmaError> {
        self.take(n, "bytes")
    }
}
