//! Element symbols and fission product labels.

use fission_types::state::Nuclide;

/// Element symbols indexed by charge number. Index 0 is the free neutron.
pub const SYMBOLS: [&str; 119] = [
    "n", "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S",
    "Cl", "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge",
    "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd",
    "In", "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd",
    "Tb", "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg",
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm",
    "Bk", "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn",
    "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Symbol of charge number `z`.
pub fn symbol(z: u32) -> Option<&'static str> {
    SYMBOLS.get(z as usize).copied()
}

/// Charge number of an element symbol. Exact spelling wins, so `N` is
/// nitrogen and `n` the neutron; otherwise matched case-insensitively.
pub fn charge_number(symbol: &str) -> Option<u32> {
    SYMBOLS
        .iter()
        .position(|s| *s == symbol)
        .or_else(|| SYMBOLS.iter().position(|s| s.eq_ignore_ascii_case(symbol)))
        .map(|z| z as u32)
}

/// Decode a product label such as `Xe140` or `Xe140_m1` into the nuclide and
/// its isomeric state. Anything after the mass digits other than `_mK` is
/// ignored.
pub fn parse_label(label: &str) -> Option<(Nuclide, u32)> {
    let label = label.trim();
    let split = label.find(|c: char| !c.is_ascii_alphabetic())?;
    let (sym, rest) = label.split_at(split);
    if sym.is_empty() {
        return None;
    }
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let (digits, suffix) = rest.split_at(digits_end);
    let a: u32 = digits.parse().ok()?;
    let z = charge_number(sym)?;
    let state = suffix
        .strip_prefix("_m")
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);
    let nuclide = Nuclide::try_new(a as i64, z as i64)?;
    Some((nuclide, state))
}

/// Label of a nuclide in isomeric state `state` (0 = ground state).
pub fn format_label(nuclide: Nuclide, state: u32) -> Option<String> {
    let sym = symbol(nuclide.z)?;
    Some(if state == 0 {
        format!("{sym}{}", nuclide.a)
    } else {
        format!("{sym}{}_m{state}", nuclide.a)
    })
}
