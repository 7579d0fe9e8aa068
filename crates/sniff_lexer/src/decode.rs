//! Raw bytes to source text.

use std::borrow::Cow;

use sniff_ir::Encoding;

use crate::TokenizerError;

/// UTF-16 byte-order marks, little- then big-endian.
const UTF16_BOMS: [&[u8]; 2] = [&[0xFF, 0xFE], &[0xFE, 0xFF]];

/// Decode file bytes in `encoding`.
///
/// Latin-1 maps every byte and never fails. UTF-8 under `strict` rejects
/// invalid sequences and a leading UTF-16 byte-order mark; without
/// `strict`, each bad sequence becomes U+FFFD.
pub fn decode(bytes: &[u8], encoding: Encoding, strict: bool) -> Result<Cow<'_, str>, TokenizerError> {
    match encoding {
        Encoding::Utf8 if strict => {
            if UTF16_BOMS.iter().any(|bom| bytes.starts_with(bom)) {
                return Err(TokenizerError::Decode { encoding, offset: 0 });
            }
            std::str::from_utf8(bytes)
                .map(Cow::Borrowed)
                .map_err(|err| TokenizerError::Decode {
                    encoding,
                    offset: err.valid_up_to(),
                })
        }
        Encoding::Utf8 => Ok(String::from_utf8_lossy(bytes)),
        Encoding::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
    }
}

/// Resolve an encoding name given on the command line or in a config file.
pub fn encoding_by_name(name: &str) -> Result<Encoding, TokenizerError> {
    Encoding::from_name(name).ok_or_else(|| TokenizerError::UnsupportedEncoding(name.to_owned()))
}
