//! Human-readable text formatting.

/// Joins strings as an English list with an Oxford comma.
///
/// - `[]` -> `""`
/// - `["Juice"]` -> `"Juice"`
/// - `["Juice", "baby"]` -> `"Juice and baby"`
/// - `["Juice", "baby", "moon"]` -> `"Juice, baby, and moon"`
///
/// Items are used in iteration order; nothing is sorted.
pub fn nice_join<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let items: Vec<S> = items.into_iter().collect();
    match items.as_slice() {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::<str>::as_ref).collect();
            format!("{}, and {}", head.join(", "), last.as_ref())
        }
    }
}
