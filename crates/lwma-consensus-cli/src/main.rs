use std::io::Write;

use log::{debug, warn};
use lwma_consensus::{
    bits_to_target, next_bits, parse_header_record, target_to_bits, HeaderRecord, LwmaParams,
    Network, RetargetWindow,
};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
struct Request {
    op: String,

    #[serde(default)]
    bits: u32,

    #[serde(default)]
    target_hex: String,

    #[serde(default)]
    header_hex: String,

    #[serde(default)]
    height: u32,

    #[serde(default)]
    timestamp: u32,

    #[serde(default)]
    headers: Vec<HeaderJson>,

    #[serde(default)]
    network: String,

    #[serde(default)]
    params: Option<ParamsJson>,
}

#[derive(Deserialize)]
struct HeaderJson {
    height: u32,
    timestamp: u32,
    bits: u32,
}

#[derive(Deserialize)]
struct ParamsJson {
    #[serde(default)]
    enable_height: u32,
    #[serde(default)]
    testnet: bool,
    #[serde(default)]
    regtest: bool,
    pow_target_spacing: u32,
    averaging_window: u32,
    adjust_weight: u32,
    min_denominator: u32,
    #[serde(default)]
    solve_time_limitation: bool,
    pow_limit: String,
}

#[derive(Serialize, Default)]
struct Response {
    ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    err: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    bits: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    height: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    consumed: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    lwma_active: Option<bool>,
}

impl Response {
    fn fail(err: impl Into<String>) -> Self {
        Response {
            ok: false,
            err: Some(err.into()),
            ..Default::default()
        }
    }
}

// Targets that fit 256 bits are printed as 32 zero-padded bytes.
fn target_hex(t: &BigUint) -> String {
    let b = t.to_bytes_be();
    if b.len() > 32 {
        return hex::encode(b);
    }
    let mut out = [0u8; 32];
    out[32 - b.len()..].copy_from_slice(&b);
    hex::encode(out)
}

fn parse_pow_limit(s: &str) -> Result<[u8; 32], String> {
    let raw = hex::decode(s).map_err(|_| "bad pow_limit".to_string())?;
    if raw.len() != 32 {
        return Err("bad pow_limit".to_string());
    }
    let mut out = [0u8; 32];
    out.copy_from_slice(&raw);
    Ok(out)
}

fn resolve_params(req: &Request) -> Result<LwmaParams, String> {
    if let Some(p) = &req.params {
        return Ok(LwmaParams {
            enable_height: p.enable_height,
            testnet: p.testnet,
            regtest: p.regtest,
            pow_target_spacing: p.pow_target_spacing,
            averaging_window: p.averaging_window,
            adjust_weight: p.adjust_weight,
            min_denominator: p.min_denominator,
            solve_time_limitation: p.solve_time_limitation,
            pow_limit: parse_pow_limit(&p.pow_limit)?,
        });
    }
    let name = if req.network.is_empty() {
        "mainnet"
    } else {
        req.network.as_str()
    };
    Network::from_name(name)
        .map(|n| *n.params())
        .ok_or_else(|| format!("unknown network: {name}"))
}

fn run(req: Request) -> Result<Response, String> {
    debug!(target: "cli", "op {}", req.op);
    match req.op.as_str() {
        "bits_to_target" => Ok(Response {
            ok: true,
            target: Some(target_hex(&bits_to_target(req.bits))),
            ..Default::default()
        }),
        "target_to_bits" => {
            let raw = hex::decode(&req.target_hex).map_err(|_| "bad target".to_string())?;
            let target = BigUint::from_bytes_be(&raw);
            Ok(Response {
                ok: true,
                bits: Some(target_to_bits(&target)),
                ..Default::default()
            })
        }
        "next_bits" => {
            let params = resolve_params(&req)?;
            let headers: Vec<HeaderRecord> = req
                .headers
                .iter()
                .map(|h| HeaderRecord::new(h.height, h.timestamp, h.bits))
                .collect();
            let window = RetargetWindow::new(&headers);
            match next_bits(req.height, req.timestamp, &window, &params) {
                Ok(bits) => Ok(Response {
                    ok: true,
                    bits: Some(bits),
                    target: Some(target_hex(&bits_to_target(bits))),
                    lwma_active: Some(params.is_active(req.height)),
                    ..Default::default()
                }),
                Err(e) => {
                    debug!(target: "cli", "next_bits failed: {e}");
                    Ok(Response::fail(e.code.as_str()))
                }
            }
        }
        "parse_header" => {
            let raw = hex::decode(&req.header_hex).map_err(|_| "bad header".to_string())?;
            match parse_header_record(&raw) {
                Ok((h, n)) => Ok(Response {
                    ok: true,
                    bits: Some(h.bits),
                    height: Some(h.height),
                    timestamp: Some(h.timestamp),
                    consumed: Some(n),
                    ..Default::default()
                }),
                Err(e) => Ok(Response::fail(e.code.as_str())),
            }
        }
        _ => Err("unknown op".to_string()),
    }
}

fn main() {
    env_logger::init();

    let resp = match serde_json::from_reader::<_, Request>(std::io::stdin()) {
        Ok(req) => run(req).unwrap_or_else(Response::fail),
        Err(e) => {
            warn!(target: "cli", "rejecting request: {e}");
            Response::fail(format!("bad request: {e}"))
        }
    };

    let mut out = std::io::stdout().lock();
    let _ = serde_json::to_writer(&mut out, &resp);
    let _ = out.flush();
}
