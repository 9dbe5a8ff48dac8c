/// Parse a byte count with an optional binary suffix (e.g. `4096`, `64K`, `1MiB`).
///
/// # Errors
/// Returns a message for malformed numbers, overflow, or zero.
pub fn parse_chunk_size(s: &str) -> Result<usize, String> {
    let s = s.trim().replace('_', "");
    let lower = s.to_ascii_lowercase();
    let (num_str, multiplier) = split_suffix(&lower);
    let num: usize = num_str
        .parse()
        .map_err(|_| format!("Invalid size number: {num_str}"))?;
    let size = num
        .checked_mul(multiplier)
        .ok_or_else(|| format!("Size too large: {s}"))?;
    if size == 0 {
        return Err("Chunk size must be at least 1 byte".to_string());
    }
    Ok(size)
}

fn split_suffix(s: &str) -> (&str, usize) {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    const GB: usize = MB * 1024;
    const SUFFIXES: &[(&[&str], usize)] = &[
        (&["gib", "gb", "g"], GB),
        (&["mib", "mb", "m"], MB),
        (&["kib", "kb", "k"], KB),
        (&["b"], 1),
    ];
    for (suffixes, multiplier) in SUFFIXES {
        for suffix in *suffixes {
            if let Some(stripped) = s.strip_suffix(suffix) {
                return (stripped.trim(), *multiplier);
            }
        }
    }
    (s, 1)
}
