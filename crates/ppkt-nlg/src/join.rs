/// Join phrases into one list with `conjunction` before the last item.
///
/// `["A"]` gives `A`, `["A", "B"]` gives `A and B`, and longer lists give
/// `A, B and C`: there is no comma before the conjunction. Items are assumed
/// not to contain `", "` themselves. An empty slice yields an empty string.
pub fn oxford_comma_list<S: AsRef<str>>(items: &[S], conjunction: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [head @ .., last] => {
            let head: Vec<&str> = head.iter().map(AsRef::as_ref).collect();
            format!("{} {conjunction} {}", head.join(", "), last.as_ref())
        }
    }
}
