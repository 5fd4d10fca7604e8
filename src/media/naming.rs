use chrono::Utc;
use rand::Rng;

const TOKEN_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const TOKEN_LEN: usize = 12;

/// Generate a collision-resistant stored filename from an original name.
///
/// Shape: `<base>_<timestamp_millis>_<token><.ext>`. The original extension
/// is preserved byte-for-byte (case included) so a classification decision
/// made on the original name stays valid for the stored file. Names without
/// an extension get none appended.
pub fn unique_filename(original_name: &str) -> String {
    let timestamp = Utc::now().timestamp_millis();
    let mut rng = rand::rng();
    let token: String = (0..TOKEN_LEN)
        .map(|_| TOKEN_ALPHABET[rng.random_range(0..TOKEN_ALPHABET.len())] as char)
        .collect();

    match original_name.rsplit_once('.') {
        Some((base, ext)) => format!("{base}_{timestamp}_{token}.{ext}"),
        None => format!("{original_name}_{timestamp}_{token}"),
    }
}
