// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use ipo_tracker_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn invalid_snapshot_format() {
        let err = CoreError::InvalidSnapshotFormat("bad header".into());
        assert_eq!(err.to_string(), "Invalid snapshot format: bad header");
    }

    #[test]
    fn unsupported_version() {
        let err = CoreError::UnsupportedVersion(99);
        assert_eq!(err.to_string(), "Unsupported snapshot version: 99");
    }

    #[test]
    fn encryption() {
        let err = CoreError::Encryption("AES key size invalid".into());
        assert_eq!(err.to_string(), "Encryption failed: AES key size invalid");
    }

    #[test]
    fn decryption() {
        assert_eq!(
            CoreError::Decryption.to_string(),
            "Decryption failed — wrong password or corrupted snapshot"
        );
    }

    #[test]
    fn serialization() {
        let err = CoreError::Serialization("boom".into());
        assert_eq!(err.to_string(), "Serialization error: boom");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("unexpected EOF".into());
        assert_eq!(err.to_string(), "Deserialization error: unexpected EOF");
    }

    #[test]
    fn storage() {
        let err = CoreError::Storage {
            key: "interested-ipos".into(),
            message: "quota exceeded".into(),
        };
        assert_eq!(
            err.to_string(),
            "Storage error (interested-ipos): quota exceeded"
        );
    }

    #[test]
    fn file_io() {
        let err = CoreError::FileIO("permission denied".into());
        assert_eq!(err.to_string(), "File I/O error: permission denied");
    }

    #[test]
    fn catalog() {
        let err = CoreError::Catalog {
            provider: "HTTP".into(),
            message: "Catalog endpoint returned HTTP 503 Service Unavailable".into(),
        };
        assert_eq!(
            err.to_string(),
            "Catalog error (HTTP): Catalog endpoint returned HTTP 503 Service Unavailable"
        );
    }

    #[test]
    fn network() {
        let err = CoreError::Network("timeout".into());
        assert_eq!(err.to_string(), "Network error: timeout");
    }

    #[test]
    fn validation() {
        let err = CoreError::ValidationError("User ID is required".into());
        assert_eq!(err.to_string(), "Validation failed: User ID is required");
    }

    #[test]
    fn ipo_not_found() {
        let err = CoreError::IpoNotFound("42".into());
        assert_eq!(err.to_string(), "IPO not found: 42");
    }
}

// ── From conversions ────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: CoreError = io.into();
        assert!(matches!(err, CoreError::FileIO(ref m) if m.contains("no such file")));
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<Vec<u32>>("[1,").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn from_bincode_error() {
        let bin_err = bincode::deserialize::<String>(&[0xFF]).unwrap_err();
        let err: CoreError = bin_err.into();
        assert!(matches!(err, CoreError::Serialization(_)));
    }

    #[test]
    fn from_aes_gcm_error() {
        let err: CoreError = aes_gcm::Error.into();
        assert!(matches!(err, CoreError::Decryption));
    }

    #[test]
    fn question_mark_propagates() {
        fn read() -> Result<String, CoreError> {
            Ok(std::fs::read_to_string("/definitely/not/here.json")?)
        }
        assert!(matches!(read(), Err(CoreError::FileIO(_))));
    }

    #[test]
    fn errors_are_std_errors() {
        fn takes_std(_: &dyn std::error::Error) {}
        takes_std(&CoreError::Decryption);
    }
}
