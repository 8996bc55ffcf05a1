/// Title as shown on screen.
///
/// File-derived titles usually carry a `"01 "` style track-number prefix.
/// With `strip_track_number` set, a leading run of one to three digits
/// followed by a space is dropped, as long as something remains after it.
pub fn display_title(title: &str, strip_track_number: bool) -> &str {
    if !strip_track_number {
        return title;
    }

    let digits = title.bytes().take_while(u8::is_ascii_digit).count();
    if !(1..=3).contains(&digits) {
        return title;
    }

    match title[digits..].strip_prefix(' ') {
        Some(rest) if !rest.trim().is_empty() => rest,
        _ => title,
    }
}
