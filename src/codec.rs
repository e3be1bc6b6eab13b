/*!
Binary wire form for transform descriptors.

Encodes a validated descriptor for transport across a process boundary.
The layout is:

- Format version (1 byte): currently 0x01
- Name length (2 bytes, big-endian) + UTF-8 name bytes
- Key length (4 bytes, big-endian) + key bytes
- Truncation presence flag (1 byte): 0x00 absent, 0x01 present
- Truncation length in bits (4 bytes, big-endian), only when present

Decoding trusts the semantic content (key and truncation bounds are not
re-validated) but rejects structurally inconsistent input, including
trailing bytes.
*/

use byteorder::{BigEndian, ByteOrder};

use crate::algorithm::AlgorithmId;
use crate::constants::WIRE_VERSION;
use crate::descriptor::IpSecAlgorithm;
use crate::error::DecodeError;

const TRUNC_ABSENT: u8 = 0x00;
const TRUNC_PRESENT: u8 = 0x01;

/// Encode a descriptor into its wire form
pub fn encode(algo: &IpSecAlgorithm) -> Vec<u8> {
    let name = algo.name().as_bytes();
    let key = algo.key();

    let mut bytes = Vec::with_capacity(1 + 2 + name.len() + 4 + key.len() + 1 + 4);
    bytes.push(WIRE_VERSION);

    let mut buf2 = [0u8; 2];
    BigEndian::write_u16(&mut buf2, name.len() as u16);
    bytes.extend_from_slice(&buf2);
    bytes.extend_from_slice(name);

    let mut buf4 = [0u8; 4];
    BigEndian::write_u32(&mut buf4, key.len() as u32);
    bytes.extend_from_slice(&buf4);
    bytes.extend_from_slice(key);

    match algo.truncation_len_bits() {
        None => bytes.push(TRUNC_ABSENT),
        Some(bits) => {
            bytes.push(TRUNC_PRESENT);
            BigEndian::write_u32(&mut buf4, bits);
            bytes.extend_from_slice(&buf4);
        }
    }

    bytes
}

/// Decode a descriptor from its wire form
pub fn decode(bytes: &[u8]) -> Result<IpSecAlgorithm, DecodeError> {
    let mut reader = Reader { bytes, pos: 0 };

    let version = reader.read_u8("version")?;
    if version != WIRE_VERSION {
        return Err(DecodeError::UnsupportedVersion(version));
    }

    let name_len = reader.read_u16("name length")? as usize;
    let name_bytes = reader.read_bytes(name_len, "name")?;
    let name =
        std::str::from_utf8(name_bytes).map_err(|_| DecodeError::Malformed("name not UTF-8"))?;
    let id = AlgorithmId::from_name(name)
        .ok_or(DecodeError::Malformed("unrecognized algorithm name"))?;

    let key_len = reader.read_u32("key length")? as usize;
    let key = reader.read_bytes(key_len, "key")?.to_vec();

    let truncation_len_bits = match reader.read_u8("truncation flag")? {
        TRUNC_ABSENT => None,
        TRUNC_PRESENT => Some(reader.read_u32("truncation length")?),
        _ => return Err(DecodeError::Malformed("invalid truncation flag")),
    };

    if reader.pos != bytes.len() {
        return Err(DecodeError::Malformed("trailing bytes"));
    }

    Ok(IpSecAlgorithm::from_parts(id, key, truncation_len_bits))
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn read_bytes(&mut self, len: usize, field: &'static str) -> Result<&'a [u8], DecodeError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.bytes.len())
            .ok_or(DecodeError::Malformed(field))?;
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn read_u8(&mut self, field: &'static str) -> Result<u8, DecodeError> {
        Ok(self.read_bytes(1, field)?[0])
    }

    fn read_u16(&mut self, field: &'static str) -> Result<u16, DecodeError> {
        Ok(BigEndian::read_u16(self.read_bytes(2, field)?))
    }

    fn read_u32(&mut self, field: &'static str) -> Result<u32, DecodeError> {
        Ok(BigEndian::read_u32(self.read_bytes(4, field)?))
    }
}
