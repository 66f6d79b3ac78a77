// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Decay — ENDF-6 Reader
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Minimal ENDF-6 reader for independent fission product yields (MF=8, MT=454).
//!
//! Record layout: six 11-column fields, then MAT (4), MF (2), MT (3), NS (5).
//! MT=454 section:
//!   HEAD  [ZA, AWR, LE+1, 0, 0, 0]
//!   LE+1 × LIST [E, 0, I, 0, NN=4·NFP, NFP / (ZAFP, FPS, Y, DY) × NFP]

use crate::elements;
use fission_types::constants::EV_TO_MEV;
use fission_types::error::{FissionError, FissionResult};
use fission_types::state::{FissionYieldDistribution, Nuclide, YieldSet, YieldValue};

const FIELD_WIDTH: usize = 11;
const FIELDS_PER_LINE: usize = 6;

pub const MF_FISSION_PRODUCTS: u32 = 8;
pub const MT_INDEPENDENT_YIELDS: u32 = 454;

/// Parse an ENDF real, e.g. ` 1.234567+5`, `-2.5-10`, ` 2.530000E-2`.
/// Blank fields are zero; `nan` and `inf` are rejected.
pub fn parse_endf_float(field: &str) -> Option<f64> {
    let s = field.trim();
    if s.is_empty() {
        return Some(0.0);
    }
    if let Ok(v) = s.parse::<f64>() {
        return v.is_finite().then_some(v);
    }
    // Exponent sign without the 'E': first +/- after the mantissa.
    let bytes = s.as_bytes();
    let pos = (1..bytes.len()).find(|&i| {
        (bytes[i] == b'+' || bytes[i] == b'-') && bytes[i - 1] != b'e' && bytes[i - 1] != b'E'
    })?;
    let (mantissa, exponent) = s.split_at(pos);
    format!("{mantissa}e{exponent}")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// One 80-column record.
#[derive(Debug, Clone)]
struct Record<'a> {
    /// 1-based line number in the file.
    line: usize,
    text: &'a str,
    mf: u32,
    mt: u32,
}

impl<'a> Record<'a> {
    fn parse(line: usize, text: &'a str) -> Option<Self> {
        let control = |cols: std::ops::Range<usize>| -> Option<u32> {
            text.get(cols)?.trim().parse().ok()
        };
        Some(Record {
            line,
            text,
            mf: control(70..72)?,
            mt: control(72..75)?,
        })
    }

    fn field(&self, i: usize) -> &'a str {
        let start = i * FIELD_WIDTH;
        let end = (start + FIELD_WIDTH).min(self.text.len());
        self.text.get(start..end).unwrap_or("")
    }

    fn real(&self, i: usize) -> FissionResult<f64> {
        let raw = self.field(i);
        parse_endf_float(raw).ok_or_else(|| FissionError::Parse {
            line: self.line,
            message: format!("bad ENDF real '{}' in field {}", raw.trim(), i + 1),
        })
    }

    fn int(&self, i: usize) -> FissionResult<i64> {
        let value = self.real(i)?;
        if value.fract() != 0.0 {
            return Err(FissionError::Parse {
                line: self.line,
                message: format!("expected integer in field {}, got {value}", i + 1),
            });
        }
        Ok(value as i64)
    }
}

/// Read every independent-yield set of an ENDF fission product yield file,
/// in the order tabulated. Energies are returned in MeV.
pub fn read_independent_yields(contents: &str) -> FissionResult<Vec<YieldSet>> {
    let records: Vec<Record> = contents
        .lines()
        .enumerate()
        .filter_map(|(i, text)| Record::parse(i + 1, text))
        .filter(|r| r.mf == MF_FISSION_PRODUCTS && r.mt == MT_INDEPENDENT_YIELDS)
        .collect();

    let mut cursor = records.iter();
    let head = cursor.next().ok_or_else(|| FissionError::Parse {
        line: 0,
        message: "no MF=8 MT=454 section".to_string(),
    })?;
    let n_energies = head.int(2)?;
    if n_energies < 1 {
        return Err(FissionError::Parse {
            line: head.line,
            message: format!("invalid number of incident energies {n_energies}"),
        });
    }

    let mut sets = Vec::with_capacity(n_energies as usize);
    for _ in 0..n_energies {
        let list = cursor.next().ok_or_else(|| FissionError::Parse {
            line: head.line,
            message: format!("expected {n_energies} yield lists, found {}", sets.len()),
        })?;
        let energy_ev = list.real(0)?;
        let nn = list.int(4)?;
        let nfp = list.int(5)?;
        if nn != 4 * nfp || nn < 0 {
            return Err(FissionError::Parse {
                line: list.line,
                message: format!("NN={nn} does not match 4·NFP with NFP={nfp}"),
            });
        }

        let mut values = Vec::with_capacity(nn as usize);
        while values.len() < nn as usize {
            let rec = cursor.next().ok_or_else(|| FissionError::Parse {
                line: list.line,
                message: format!("truncated yield list at E={energy_ev} eV"),
            })?;
            let remaining = nn as usize - values.len();
            for i in 0..remaining.min(FIELDS_PER_LINE) {
                values.push((rec.line, rec.real(i)?));
            }
        }

        let mut yields = FissionYieldDistribution::new();
        for chunk in values.chunks_exact(4) {
            let (line, zafp) = chunk[0];
            let fps = chunk[1].1;
            let label = product_label(zafp, fps).ok_or_else(|| FissionError::Parse {
                line,
                message: format!("unknown fission product ZAFP={zafp}, FPS={fps}"),
            })?;
            yields.insert(label, YieldValue::new(chunk[2].1, chunk[3].1));
        }

        sets.push(YieldSet {
            energy: energy_ev * EV_TO_MEV,
            yields,
        });
    }
    Ok(sets)
}

fn product_label(zafp: f64, fps: f64) -> Option<String> {
    let zafp = zafp.round() as i64;
    let nuclide = Nuclide::try_new(zafp % 1000, zafp / 1000)?;
    elements::format_label(nuclide, fps.round().max(0.0) as u32)
}
