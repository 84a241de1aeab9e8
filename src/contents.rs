//! Contains-any / contains-all predicates for strings and slices.

/// Multi-needle containment checks for string slices.
///
/// `*_any` is true when at least one needle occurs in the haystack;
/// `*_all` when every needle does. An empty needle set makes `*_any`
/// false and `*_all` vacuously true.
///
/// # Examples
///
/// ```
/// use kitbag::contents::StrContents;
///
/// assert!("hello world".contains_any(&["planet", "world"]));
/// assert!("hello world".contains_all(&["hello", "world"]));
/// assert!(!"hello world".contains_any_chars(&['x', 'z']));
/// ```
pub trait StrContents {
    fn contains_any(&self, needles: &[&str]) -> bool;
    fn contains_all(&self, needles: &[&str]) -> bool;
    fn contains_any_chars(&self, needles: &[char]) -> bool;
    fn contains_all_chars(&self, needles: &[char]) -> bool;
}

impl StrContents for str {
    fn contains_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.contains(n))
    }

    fn contains_all(&self, needles: &[&str]) -> bool {
        needles.iter().all(|n| self.contains(n))
    }

    fn contains_any_chars(&self, needles: &[char]) -> bool {
        needles.iter().any(|&c| self.contains(c))
    }

    fn contains_all_chars(&self, needles: &[char]) -> bool {
        needles.iter().all(|&c| self.contains(c))
    }
}

/// Multi-needle containment checks for slices of comparable elements.
///
/// # Examples
///
/// ```
/// use kitbag::contents::SliceContents;
///
/// let primes = [2, 3, 5, 7];
/// assert!(primes.contains_any(&[4, 5]));
/// assert!(primes.contains_all(&[2, 7]));
/// assert!(!primes.contains_all(&[2, 4]));
/// ```
pub trait SliceContents<T: PartialEq> {
    fn contains_any(&self, values: &[T]) -> bool;
    fn contains_all(&self, values: &[T]) -> bool;
}

impl<T: PartialEq> SliceContents<T> for [T] {
    fn contains_any(&self, values: &[T]) -> bool {
        values.iter().any(|v| self.contains(v))
    }

    fn contains_all(&self, values: &[T]) -> bool {
        values.iter().all(|v| self.contains(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_contains_any() {
        assert!("the quick brown fox".contains_any(&["quick", "slow"]));
        assert!(!"the quick brown fox".contains_any(&["slow", "lazy"]));
    }

    #[test]
    fn test_str_contains_all() {
        assert!("the quick brown fox".contains_all(&["quick", "fox"]));
        assert!(!"the quick brown fox".contains_all(&["quick", "dog"]));
    }

    #[test]
    fn test_str_contains_chars() {
        assert!("filesize".contains_any_chars(&['z', 'q']));
        assert!(!"filesize".contains_any_chars(&['x', 'q']));
        assert!("filesize".contains_all_chars(&['f', 'z']));
        assert!(!"filesize".contains_all_chars(&['f', 'x']));
    }

    #[test]
    fn test_empty_needle_sets() {
        // any over nothing is false, all over nothing is vacuously true
        assert!(!"abc".contains_any(&[]));
        assert!("abc".contains_all(&[]));
        let nums = [1, 2, 3];
        assert!(!nums.contains_any(&[]));
        assert!(nums.contains_all(&[]));
    }

    #[test]
    fn test_slice_contains() {
        let names = ["alice", "bob", "carol"];
        assert!(names.contains_any(&["bob", "dave"]));
        assert!(names.contains_all(&["alice", "carol"]));
        assert!(!names.contains_all(&["alice", "dave"]));
    }

    #[test]
    fn test_vec_derefs_to_slice() {
        let v = vec![10_u64, 20, 30];
        assert!(v.contains_any(&[30, 40]));
        assert!(!v.contains_any(&[40, 50]));
    }
}
