#![no_main]

use libfuzzer_sys::fuzz_target;
use transfer_tracker::services::classifier::{match_transfer_call, TransferCall};

fuzz_target!(|data: &[u8]| {
	match match_transfer_call(data) {
		Some(TransferCall::Decoded { .. }) => assert!(data.len() >= 68),
		Some(TransferCall::Malformed(_)) => assert!(data.starts_with(&[0xa9, 0x05, 0x9c, 0xbb])),
		None => assert!(!data.starts_with(&[0xa9, 0x05, 0x9c, 0xbb])),
	}
});
