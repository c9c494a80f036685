//! Brazilian mobile number validation and E.164 formatting.
//!
//! A raw value is accepted only as the 11-digit national form
//! `<DDD><9><subscriber>`: two-digit regional dialing code, the literal
//! mobile marker `9`, then eight subscriber digits. Accepted values are
//! prefixed with `+55` and handed to the numbering-plan library for final
//! validation and canonical E.164 rendering.

use phonenumber::{Mode, country};

/// Valid two-digit regional dialing codes (DDD).
pub const VALID_DDD: [u8; 67] = [
    11, 12, 13, 14, 15, 16, 17, 18, 19, // Sao Paulo
    21, 22, 24, // Rio de Janeiro
    27, 28, // Espirito Santo
    31, 32, 33, 34, 35, 37, 38, // Minas Gerais
    41, 42, 43, 44, 45, 46, // Parana
    47, 48, 49, // Santa Catarina
    51, 53, 54, 55, // Rio Grande do Sul
    61, // Distrito Federal
    62, 64, // Goias
    63, // Tocantins
    65, 66, // Mato Grosso
    67, // Mato Grosso do Sul
    68, // Acre
    69, // Rondonia
    71, 73, 74, 75, 77, // Bahia
    79, // Sergipe
    81, 87, // Pernambuco
    82, // Alagoas
    83, // Paraiba
    84, // Rio Grande do Norte
    85, 88, // Ceara
    86, 89, // Piaui
    91, 93, 94, // Para
    92, 97, // Amazonas
    95, // Roraima
    96, // Amapa
    98, 99, // Maranhao
];

/// Validate a raw phone value and render it as E.164.
///
/// Returns `None` unless the trimmed input is exactly 11 ASCII digits with
/// a whitelisted DDD and the mobile marker `9` in third position, and the
/// numbering plan accepts `+55<input>` as a valid number. Numbering-plan
/// parse failures are treated as rejection, never propagated.
///
/// The output format differs from the input format, so re-feeding an
/// E.164 result returns `None`.
pub fn normalize_phone(raw: Option<&str>) -> Option<String> {
    let phone = raw?.trim();
    if phone.len() != 11 || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let ddd: u8 = phone[..2].parse().ok()?;
    if !VALID_DDD.contains(&ddd) {
        return None;
    }
    if phone.as_bytes()[2] != b'9' {
        return None;
    }

    let candidate = format!("+55{phone}");
    let number = phonenumber::parse(Some(country::Id::BR), &candidate).ok()?;
    if !phonenumber::is_valid(&number) {
        return None;
    }
    Some(number.format().mode(Mode::E164).to_string())
}
