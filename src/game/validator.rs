use crate::error::InputError;

/// Parse a raw column choice and check it against the board width.
///
/// Accepts surrounding whitespace. Anything that is not an integer in
/// `[0, columns - 1]` is rejected.
pub fn parse_move(input: &str, columns: usize) -> Result<usize, InputError> {
    let max = columns.saturating_sub(1);
    let invalid = || InputError::InvalidMove { max };

    let value: i64 = input.trim().parse().map_err(|_| invalid())?;
    if value < 0 || value as u64 >= columns as u64 {
        return Err(invalid());
    }
    Ok(value as usize)
}
