#![no_main]

use libfuzzer_sys::fuzz_target;
use plx_inference::{DistancePdfConfig, build_distance_pdf};

fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }

    let pi = f64::from_le_bytes(data[0..8].try_into().unwrap());
    let sigma = f64::from_le_bytes(data[8..16].try_into().unwrap());

    let Ok(json) = std::str::from_utf8(&data[16..]) else {
        return;
    };
    let Ok(mut config) = DistancePdfConfig::from_json(json) else {
        return;
    };

    // Keep grid sizes bounded so the fuzzer stays fast.
    config.resolution = config.resolution.clamp(2, 4_096);

    // Any outcome is fine as long as it is an Ok/Err and not a panic.
    if let Ok(pdf) = build_distance_pdf(pi, sigma, &config)
        && let Some(column) = pdf.source_pdf(0)
    {
        let total: f64 = column.iter().sum();
        assert!((total - 1.0).abs() < 1e-6, "unnormalized posterior: {total}");
    }
});
