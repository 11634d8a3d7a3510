#![allow(dead_code, unused_imports)]

pub(crate) mod test_context;

pub(crate) use test_context::TestContext;

/// Minimal PNG signature plus IHDR tag; enough for format sniffing.
pub(crate) const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR\0\0\0\x01\0\0\0\x01";
