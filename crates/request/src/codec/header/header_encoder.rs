//! Header block encoding
//!
//! Writes every header as `name: value\r\n` in iteration order, then the empty
//! line closing the block. Repeated names are written once per value.

use bytes::{BufMut, BytesMut};

use crate::protocol::MultiMap;

/// Encoder for the header block following the request line.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct HeaderEncoder;

impl HeaderEncoder {
    pub(crate) fn encode(self, headers: &MultiMap, dst: &mut BytesMut) {
        for (name, value) in headers {
            dst.put_slice(name.as_bytes());
            dst.put_slice(b": ");
            dst.put_slice(value.as_bytes());
            dst.put_slice(b"\r\n");
        }
        dst.put_slice(b"\r\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_in_order() {
        let headers: MultiMap = [("Host", "example.com"), ("Accept", "*/*"), ("Accept", "text/html")].into_iter().collect();
        let mut dst = BytesMut::new();

        HeaderEncoder.encode(&headers, &mut dst);

        assert_eq!(&dst[..], b"Host: example.com\r\nAccept: */*\r\nAccept: text/html\r\n\r\n");
    }

    #[test]
    fn empty_block() {
        let mut dst = BytesMut::new();
        HeaderEncoder.encode(&MultiMap::new(), &mut dst);
        assert_eq!(&dst[..], b"\r\n");
    }
}
