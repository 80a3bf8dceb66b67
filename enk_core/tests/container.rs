//! Integration tests for the container codec: round-trips, malformed-input
//! rejection, and size-field exactness, exercised through the bundled codecs.

use enk_codecs::{Lz4Codec, PassThroughCodec, ZlibCodec, ZstdCodec};
use enk_core::{decode, encode, ContainerHeader, Codec, EnkError, HEADER_SIZE, SIGNATURE};

/// Generate `len` deterministic bytes using a simple LCG.
fn pseudo_random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = seed;
    (0..len)
        .map(|_| {
            rng = rng
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (rng >> 56) as u8
        })
        .collect()
}

fn parse_header(container: &[u8]) -> ContainerHeader {
    let mut buf = [0u8; HEADER_SIZE];
    buf.copy_from_slice(&container[..HEADER_SIZE]);
    ContainerHeader::from_bytes(&buf).unwrap()
}

// ── round-trips ────────────────────────────────────────────────────────────

#[test]
fn roundtrip_zlib_multi_megabyte_random() {
    let codec = ZlibCodec::default();
    let data = pseudo_random_bytes(3 * 1024 * 1024, 0xDEAD_BEEF);
    let container = encode(&codec, &data).unwrap();
    assert_eq!(decode(&codec, &container).unwrap(), data);
}

#[test]
fn roundtrip_single_byte() {
    let codec = ZlibCodec::default();
    let container = encode(&codec, &[0xFF]).unwrap();
    assert_eq!(decode(&codec, &container).unwrap(), vec![0xFF]);
}

#[test]
fn roundtrip_all_codecs() {
    let data = pseudo_random_bytes(64 * 1024 + 17, 0x1234_5678);
    let codecs: Vec<Box<dyn Codec>> = vec![
        Box::new(ZlibCodec::default()),
        Box::new(PassThroughCodec),
        Box::new(ZstdCodec::default()),
        Box::new(Lz4Codec),
    ];
    for codec in &codecs {
        let container = encode(codec.as_ref(), &data).unwrap();
        assert_eq!(
            decode(codec.as_ref(), &container).unwrap(),
            data,
            "codec '{}' round-trip should be byte-exact",
            codec.name()
        );
    }
}

/// Binary payloads must survive unchanged; nothing in the pipeline may
/// assume text encoding.
#[test]
fn roundtrip_non_utf8_binary() {
    let codec = ZlibCodec::default();
    let data: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    assert!(std::str::from_utf8(&data).is_err());
    let container = encode(&codec, &data).unwrap();
    assert_eq!(decode(&codec, &container).unwrap(), data);
}

// ── spec scenarios ─────────────────────────────────────────────────────────

#[test]
fn repetitive_input_actually_compresses() {
    let codec = ZlibCodec::default();
    let data = vec![0x41u8; 1000];
    let container = encode(&codec, &data).unwrap();

    let header = parse_header(&container);
    assert!(
        (header.compressed_size as usize) < 1000,
        "1000 repeated bytes should compress below 1000, got {}",
        header.compressed_size
    );
    assert_eq!(decode(&codec, &container).unwrap(), data);
}

#[test]
fn empty_input_roundtrips() {
    let codec = ZlibCodec::default();
    let container = encode(&codec, b"").unwrap();

    let header = parse_header(&container);
    assert_eq!(header.uncompressed_size, 0);
    // zlib's empty stream is non-empty (header + adler32)
    assert_eq!(container.len(), HEADER_SIZE + header.compressed_size as usize);
    assert_eq!(decode(&codec, &container).unwrap(), Vec::<u8>::new());
}

#[test]
fn size_fields_match_buffer_lengths() {
    let codec = ZlibCodec::default();
    let data = pseudo_random_bytes(12345, 7);
    let container = encode(&codec, &data).unwrap();

    let header = parse_header(&container);
    assert_eq!(header.uncompressed_size as usize, data.len());
    assert_eq!(
        header.compressed_size as usize,
        container.len() - HEADER_SIZE
    );
}

// ── malformed input ────────────────────────────────────────────────────────

#[test]
fn rejects_wrong_signature() {
    let codec = ZlibCodec::default();
    let mut container = encode(&codec, b"some payload").unwrap();
    container[0] = b'P';
    assert!(matches!(
        decode(&codec, &container),
        Err(EnkError::BadSignature)
    ));

    // Arbitrary non-container bytes of sufficient length
    let junk = vec![0xAB; 64];
    assert!(matches!(decode(&codec, &junk), Err(EnkError::BadSignature)));
}

#[test]
fn rejects_truncated_header() {
    let codec = ZlibCodec::default();
    let container = encode(&codec, b"payload").unwrap();

    for len in [0, 1, 3, HEADER_SIZE - 1] {
        assert!(
            matches!(
                decode(&codec, &container[..len]),
                Err(EnkError::TruncatedHeader { .. })
            ),
            "{len}-byte input should be a truncated header"
        );
    }
}

#[test]
fn rejects_truncated_payload() {
    let codec = ZlibCodec::default();
    let container = encode(&codec, &pseudo_random_bytes(4096, 99)).unwrap();
    let cut = container.len() - 10;
    assert!(matches!(
        decode(&codec, &container[..cut]),
        Err(EnkError::TruncatedPayload { .. })
    ));
}

/// A hand-built container whose header claims more payload than exists must
/// fail cleanly, not read out of bounds.
#[test]
fn rejects_overlong_declared_size() {
    let codec = ZlibCodec::default();
    let header = ContainerHeader {
        compressed_size: 1000,
        uncompressed_size: 5000,
    };
    let mut container = header.to_bytes().to_vec();
    container.extend_from_slice(&[0u8; 20]); // far fewer than 1000

    match decode(&codec, &container) {
        Err(EnkError::TruncatedPayload {
            declared,
            available,
        }) => {
            assert_eq!(declared, 1000);
            assert_eq!(available, 20);
        }
        other => panic!("expected TruncatedPayload, got {other:?}"),
    }
}

#[test]
fn trailing_bytes_after_payload_are_ignored() {
    let codec = ZlibCodec::default();
    let data = b"payload with trailing garbage after it".to_vec();
    let mut container = encode(&codec, &data).unwrap();
    container.extend_from_slice(b"GARBAGE");
    assert_eq!(decode(&codec, &container).unwrap(), data);
}

// ── corruption ─────────────────────────────────────────────────────────────

/// Flipping any payload bit must surface as an error, never as silently
/// wrong output.
#[test]
fn payload_bit_flip_is_detected() {
    let codec = ZlibCodec::default();
    let data = pseudo_random_bytes(16 * 1024, 0xABCD);
    let container = encode(&codec, &data).unwrap();

    for pos in [HEADER_SIZE, container.len() / 2, container.len() - 1] {
        let mut corrupted = container.clone();
        corrupted[pos] ^= 0x10;
        match decode(&codec, &corrupted) {
            Err(EnkError::DecompressionFailed(_)) | Err(EnkError::SizeMismatch { .. }) => {}
            Ok(raw) => assert_eq!(
                raw, data,
                "a decode that survives a bit flip at {pos} must still be byte-exact"
            ),
            Err(other) => panic!("unexpected error for bit flip at {pos}: {other:?}"),
        }
    }
}

/// Tampering with the stored uncompressed size trips the integrity check.
#[test]
fn tampered_uncompressed_size_is_detected() {
    let codec = ZlibCodec::default();
    let data = b"tamper target".to_vec();
    let mut container = encode(&codec, &data).unwrap();

    let wrong = (data.len() as u32 + 1).to_le_bytes();
    container[7..11].copy_from_slice(&wrong);

    match decode(&codec, &container) {
        Err(EnkError::SizeMismatch { expected, actual }) => {
            assert_eq!(expected, data.len() as u32 + 1);
            assert_eq!(actual, data.len());
        }
        other => panic!("expected SizeMismatch, got {other:?}"),
    }
}

/// Passthrough exercises the size check directly: the "decompressed" length
/// is the payload length, so a mismatching header is caught by the codec
/// framing alone.
#[test]
fn passthrough_size_mismatch() {
    let codec = PassThroughCodec;
    let header = ContainerHeader {
        compressed_size: 4,
        uncompressed_size: 9,
    };
    let mut container = header.to_bytes().to_vec();
    container.extend_from_slice(b"abcd");

    assert!(matches!(
        decode(&codec, &container),
        Err(EnkError::SizeMismatch {
            expected: 9,
            actual: 4
        })
    ));
}

// ── format constants ───────────────────────────────────────────────────────

#[test]
fn encoded_container_starts_with_signature() {
    let codec = ZlibCodec::default();
    let container = encode(&codec, b"x").unwrap();
    assert_eq!(&container[..3], SIGNATURE);
    assert_eq!(&container[..3], &[0x7F, 0x45, 0x4E]);
}
