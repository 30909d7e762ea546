//! Criterion benchmark for the contract scan
//!
//! Measures throughput of the full validate-and-filter pass over a
//! generated input with a realistic mix of kept, out-of-window, and
//! rejected rows.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use contract_filter::app::services::scanner::ContractScanner;
use contract_filter::{FilterWindow, ScanConfig};

/// Generate a contract CSV with a mix of row outcomes
fn generate_input(rows: usize) -> String {
    let mut out = String::with_capacity(rows * 72);

    for i in 0..rows {
        let month = (i % 12) + 1;
        // Every fifth row falls outside the window, every seventh is
        // rejected for a bare identifier
        let year = if i % 5 == 0 { 2023 } else { 2025 };
        let national_id = if i % 7 == 0 {
            "11122233344".to_string()
        } else {
            format!("{:03}.{:03}.{:03}-{:02}", i % 1000, (i * 3) % 1000, (i * 7) % 1000, i % 100)
        };

        out.push_str(&format!(
            "Holder {i},{national_id},12.345.678-9,\"Rua {i}, 10\",01/{month:02}/{year},15/{month:02}/{year}\n"
        ));
    }

    out
}

fn bench_scan(c: &mut Criterion) {
    let input = generate_input(10_000);
    let scanner = ContractScanner::new(ScanConfig::new(FilterWindow::for_year(2025)));

    let mut group = c.benchmark_group("scan");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("10k_rows", |b| {
        b.iter(|| scanner.scan_str(black_box(&input), None))
    });
    group.finish();
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
