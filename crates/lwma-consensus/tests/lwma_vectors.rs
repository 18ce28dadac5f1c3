use lwma_consensus::{next_bits, HeaderChain, HeaderRecord, Network, RetargetWindow};
use serde::Deserialize;

#[derive(Deserialize)]
struct Vector {
    name: String,
    network: String,
    height: u32,
    timestamp: u32,
    // [height, timestamp, bits]
    headers: Vec<(u32, u32, u32)>,
    expected_bits: u32,
}

fn load() -> Vec<Vector> {
    let raw = include_str!("vectors/lwma_vectors.json");
    serde_json::from_str(raw).expect("parse lwma vectors")
}

fn records(v: &Vector) -> Vec<HeaderRecord> {
    v.headers
        .iter()
        .map(|&(height, timestamp, bits)| HeaderRecord::new(height, timestamp, bits))
        .collect()
}

#[test]
fn lwma_vectors_match() {
    let vectors = load();
    assert!(!vectors.is_empty());

    for v in &vectors {
        let params = Network::from_name(&v.network)
            .unwrap_or_else(|| panic!("{}: unknown network {}", v.name, v.network))
            .params();
        let headers = records(v);
        let window = RetargetWindow::new(&headers);

        let got = next_bits(v.height, v.timestamp, &window, params)
            .unwrap_or_else(|e| panic!("{}: {e}", v.name));
        assert_eq!(
            got, v.expected_bits,
            "{}: got {got:#010x}, want {:#010x}",
            v.name, v.expected_bits
        );
    }
}

#[test]
fn lwma_vectors_match_through_header_chain() {
    for v in &load() {
        let params = Network::from_name(&v.network).unwrap().params();
        let mut headers = records(v);
        headers.sort_by_key(|h| h.height);

        let mut chain = HeaderChain::new(headers[0].height);
        for h in headers {
            chain.push(h).unwrap();
        }
        assert_eq!(
            chain.next_bits(v.timestamp, params).unwrap(),
            v.expected_bits,
            "{}",
            v.name
        );
    }
}

#[test]
fn lwma_vectors_reordered_window() {
    for v in &load() {
        let params = Network::from_name(&v.network).unwrap().params();
        let mut headers = records(v);
        headers.reverse();
        let window = RetargetWindow::new(&headers);
        assert_eq!(
            next_bits(v.height, v.timestamp, &window, params).unwrap(),
            v.expected_bits,
            "{}",
            v.name
        );
    }
}
