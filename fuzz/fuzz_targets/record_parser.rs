#![no_main]

use libfuzzer_sys::fuzz_target;
use transfer_tracker::{models::TransactionRecord, utils::normalize_hash};

fuzz_target!(|data: &[u8]| {
	if let Ok(record) = serde_json::from_slice::<TransactionRecord>(data) {
		let _ = normalize_hash(&record.hash);
	}
	if let Ok(text) = std::str::from_utf8(data) {
		if let Ok(hash) = normalize_hash(text) {
			assert_eq!(hash.len(), 66);
			assert_eq!(normalize_hash(&hash).as_deref(), Ok(hash.as_str()));
		}
	}
});
