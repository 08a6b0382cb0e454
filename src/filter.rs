use crate::dates::DateWindow;
use crate::model::Record;

/// Select records authored by `user` (exact, case-sensitive) inside `window`, keeping input order.
pub fn filter_records<'a, R: Record>(records: &'a [R], user: &str, window: &DateWindow) -> Vec<&'a R> {
  records
    .iter()
    .filter(|r| r.handle() == user && window.contains(r.created_on()))
    .collect()
}
