/// Strip any trailing '=' and re-pad to the next multiple of `multiple`.
pub fn pad_to_multiple(input: &str, multiple: usize) -> String {
    let stripped = input.trim_end_matches('=');
    let remainder = stripped.len() % multiple;
    if remainder == 0 {
        stripped.to_string()
    } else {
        let padding_needed = multiple - remainder;
        format!("{}{}", stripped, "=".repeat(padding_needed))
    }
}
