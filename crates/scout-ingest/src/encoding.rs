//! Text encoding detection for buyer CSV files.
//!
//! The public datasets come from several Korean agencies and arrive in a
//! mix of UTF-8 (with and without BOM) and EUC-KR/CP949. Decoding tries a
//! fixed ladder of strict attempts and never fails: the last resort is a
//! lossy EUC-KR decode that substitutes replacement characters.

use encoding_rs::{EUC_KR, UTF_8};

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Decode raw file bytes into text, returning the label of the encoding
/// that was used.
///
/// Attempts, in order: UTF-8 with BOM, plain UTF-8, EUC-KR (which in
/// `encoding_rs` is the full Windows code page 949, covering CP949 input).
/// The first lossless decode wins. If none succeeds the bytes are decoded
/// as EUC-KR with replacement, labeled `"euc-kr(lossy)"`.
pub fn decode_bytes(raw: &[u8]) -> (String, &'static str) {
    if let Some(stripped) = raw.strip_prefix(&UTF8_BOM)
        && let Some(text) = UTF_8.decode_without_bom_handling_and_without_replacement(stripped)
    {
        return (text.into_owned(), "utf-8-sig");
    }
    if let Some(text) = UTF_8.decode_without_bom_handling_and_without_replacement(raw) {
        return (text.into_owned(), "utf-8");
    }
    if let Some(text) = EUC_KR.decode_without_bom_handling_and_without_replacement(raw) {
        return (text.into_owned(), "euc-kr");
    }
    let (text, _) = EUC_KR.decode_without_bom_handling(raw);
    (text.into_owned(), "euc-kr(lossy)")
}
