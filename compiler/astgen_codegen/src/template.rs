//! Hole substitution in native-code templates.
//!
//! Inside a template `#n` refers to the n-th value and a bare `#` stands
//! for `#1`. Every other character is copied verbatim.

use astgen_ir::Hole;

use crate::GenerationError;

/// Replace the holes of `template` with `values`.
pub fn substitute(template: &str, values: &[&str]) -> Result<String, GenerationError> {
    let mut result = String::with_capacity(template.len() + 16);
    let mut rest = template;
    while let Some(position) = rest.find('#') {
        result.push_str(&rest[..position]);
        rest = &rest[position + 1..];
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        let number = if digits == 0 {
            1
        } else {
            rest[..digits].parse::<u32>().unwrap_or(u32::MAX)
        };
        rest = &rest[digits..];
        let value = Hole::new(number)
            .and_then(|hole| values.get(hole.index()))
            .ok_or_else(|| GenerationError::hole_out_of_range(template, number, values.len()))?;
        result.push_str(value);
    }
    result.push_str(rest);
    Ok(result)
}
