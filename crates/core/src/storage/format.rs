use crate::errors::CoreError;

use super::encryption::{KdfParams, Sealed, NONCE_LEN, SALT_LEN};

/// Magic bytes at the start of every `.ipot` snapshot.
pub const MAGIC: &[u8; 4] = b"IPOT";

/// Current snapshot container version.
pub const CURRENT_VERSION: u16 = 1;

/// magic(4) + version(2) + kdf(3×4) + salt(16) + nonce(12) + payload_len(8)
pub const HEADER_LEN: usize = 4 + 2 + 12 + SALT_LEN + NONCE_LEN + 8;

/// Parsed container: version, KDF parameters and the sealed payload.
#[derive(Debug, Clone)]
pub struct Container {
    pub version: u16,
    pub kdf_params: KdfParams,
    pub sealed: Sealed,
}

/// Lay out a container. All integers little-endian:
///
/// ```text
/// [IPOT][version u16][memory_cost u32][time_cost u32][parallelism u32]
/// [salt 16B][nonce 12B][payload_len u64][payload]
/// ```
pub fn encode(kdf_params: &KdfParams, sealed: &Sealed) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_LEN + sealed.ciphertext.len());
    buf.extend_from_slice(MAGIC);
    buf.extend_from_slice(&CURRENT_VERSION.to_le_bytes());
    buf.extend_from_slice(&kdf_params.memory_cost.to_le_bytes());
    buf.extend_from_slice(&kdf_params.time_cost.to_le_bytes());
    buf.extend_from_slice(&kdf_params.parallelism.to_le_bytes());
    buf.extend_from_slice(&sealed.salt);
    buf.extend_from_slice(&sealed.nonce);
    buf.extend_from_slice(&(sealed.ciphertext.len() as u64).to_le_bytes());
    buf.extend_from_slice(&sealed.ciphertext);
    buf
}

/// Parse and sanity-check a container from untrusted bytes.
pub fn decode(data: &[u8]) -> Result<Container, CoreError> {
    if data.len() < HEADER_LEN {
        return Err(CoreError::InvalidSnapshotFormat(format!(
            "Snapshot too small: {} bytes, header alone is {HEADER_LEN}",
            data.len()
        )));
    }

    let mut reader = Reader { data, pos: 0 };

    if reader.take::<4>() != *MAGIC {
        return Err(CoreError::InvalidSnapshotFormat(
            "Invalid magic bytes — not an IPOT snapshot".into(),
        ));
    }

    let version = u16::from_le_bytes(reader.take());
    if version == 0 || version > CURRENT_VERSION {
        return Err(CoreError::UnsupportedVersion(version));
    }

    let kdf_params = KdfParams {
        memory_cost: u32::from_le_bytes(reader.take()),
        time_cost: u32::from_le_bytes(reader.take()),
        parallelism: u32::from_le_bytes(reader.take()),
    };
    kdf_params.validate()?;

    let salt = reader.take::<SALT_LEN>();
    let nonce = reader.take::<NONCE_LEN>();
    let payload_len = u64::from_le_bytes(reader.take());

    let remaining = (data.len() - reader.pos) as u64;
    if remaining < payload_len {
        return Err(CoreError::InvalidSnapshotFormat(format!(
            "Snapshot truncated: expected {payload_len} payload bytes, got {remaining}"
        )));
    }
    let end = reader.pos + payload_len as usize;

    Ok(Container {
        version,
        kdf_params,
        sealed: Sealed {
            salt,
            nonce,
            ciphertext: data[reader.pos..end].to_vec(),
        },
    })
}

/// Fixed-width cursor over a buffer already checked to hold the full header.
struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl Reader<'_> {
    fn take<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        out
    }
}
