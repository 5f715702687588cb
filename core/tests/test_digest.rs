#[cfg(test)]
mod tests {
    use std::io::{self, Read};

    use dry_bytes::digest::{digest, digest_hex, digest_reader, DigestAlg};
    use dry_bytes::reader::{bytes_reader, ByteSource};
    use dry_bytes::types::DryError;
    use dry_bytes::utils::checksum_crc32;

    #[test]
    fn sha256_of_abc() {
        assert_eq!(
            digest_hex(DigestAlg::Sha256, b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn blake3_of_empty_input() {
        assert_eq!(
            digest_hex(DigestAlg::Blake3, b""),
            "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262"
        );
    }

    #[test]
    fn crc32_is_big_endian_and_matches_utils() {
        let out = digest(DigestAlg::Crc32, b"123456789");
        assert_eq!(out, 0xCBF4_3926u32.to_be_bytes().to_vec());
        assert_eq!(out, checksum_crc32(b"123456789").to_be_bytes().to_vec());
    }

    #[test]
    fn output_len_matches_digest() {
        for alg in [DigestAlg::Crc32, DigestAlg::Blake3, DigestAlg::Sha256] {
            assert_eq!(digest(alg, b"x").len(), alg.output_len());
        }
    }

    #[test]
    fn reader_digest_equals_buffer_digest() {
        let data: Vec<u8> = (0..50_000u32).map(|i| (i * 31 % 256) as u8).collect();
        for alg in [DigestAlg::Crc32, DigestAlg::Blake3, DigestAlg::Sha256] {
            let streamed = digest_reader(alg, bytes_reader(data.clone())).unwrap();
            assert_eq!(streamed, digest(alg, &data));
        }
    }

    #[test]
    fn reader_errors_are_returned() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::TimedOut, "slow disk"))
            }
        }
        let err = digest_reader(DigestAlg::Sha256, bytes_reader(ByteSource::reader(Broken))).unwrap_err();
        match err {
            DryError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::TimedOut),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn ids_round_trip() {
        assert_eq!(DigestAlg::from_id(0x0002).unwrap(), DigestAlg::Blake3);
        let err = DigestAlg::from_id(0x0042).unwrap_err();
        assert_eq!(err.to_string(), "validation error: unknown digest algorithm: 0x42");
    }
}
